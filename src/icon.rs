use crate::config::{self, GeneratorConfig};
use crate::font::{self, GlyphBounds};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Render one badge icon of `size × size` pixels.
///
/// Transparent canvas, a flat circle in the palette color for `active`, and
/// the configured letter in the glyph color centered on the whole canvas.
pub fn render_icon(size: u32, active: bool, config: &GeneratorConfig) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    fill_badge(&mut img, config.palette.fill(active));

    let font = font::load_font(&config.font_sources);
    let scale = font::px_scale(&font, config::font_size(size) as f32);

    let Some(bounds) = font::glyph_bounds(&font, scale, config.letter) else {
        log::debug!("No outline for {:?}, drawing badge only", config.letter);
        return img;
    };
    let (x, y) = glyph_origin(size, &bounds);
    log::debug!("size={size} glyph bounds={bounds:?} origin=({x}, {y})");

    draw_text_mut(
        &mut img,
        config.palette.glyph,
        x,
        y,
        scale,
        &font,
        config.letter.encode_utf8(&mut [0; 4]),
    );
    img
}

/// True when the center of pixel `(x, y)` lies inside the badge circle.
pub fn in_badge(size: u32, x: u32, y: u32) -> bool {
    let c = size as f32 / 2.0;
    let r = config::badge_diameter(size) as f32 / 2.0;
    let dx = x as f32 + 0.5 - c;
    let dy = y as f32 + 0.5 - c;
    dx * dx + dy * dy <= r * r
}

/// Flat, hard-edged circle. Pixels outside are left untouched.
fn fill_badge(img: &mut RgbaImage, color: Rgba<u8>) {
    let size = img.width();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if in_badge(size, x, y) {
            *pixel = color;
        }
    }
}

/// Drawing origin that centers a glyph with `bounds` on the canvas. The
/// vertical position is shifted by `top` so the ink, not the ascent line,
/// is centered.
pub fn glyph_origin(size: u32, bounds: &GlyphBounds) -> (i32, i32) {
    let size = size as i32;
    let x = (size - bounds.width()).div_euclid(2);
    let y = (size - bounds.height()).div_euclid(2) - bounds.top;
    (x, y)
}
