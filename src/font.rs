use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One candidate in the font fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// An exact font file.
    Path(PathBuf),
    /// A font file name, looked up in the working directory and then in the
    /// platform font directories.
    Named(String),
    /// Noto Sans compiled into the binary. Always loads.
    BuiltIn,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Path(path) => write!(f, "{}", path.display()),
            FontSource::Named(name) => write!(f, "named font {name}"),
            FontSource::BuiltIn => write!(f, "built-in Noto Sans"),
        }
    }
}

impl FontSource {
    pub fn load(&self) -> Result<FontArc> {
        match self {
            FontSource::Path(path) => load_file(path),
            FontSource::Named(name) => {
                let path = find_named(name).ok_or_else(|| anyhow!("Font not found: {name}"))?;
                load_file(&path)
            }
            FontSource::BuiltIn => builtin(),
        }
    }
}

fn load_file(path: &Path) -> Result<FontArc> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    FontArc::try_from_vec(data).map_err(|e| anyhow!("parse {}: {e}", path.display()))
}

fn builtin() -> Result<FontArc> {
    FontArc::try_from_slice(notosans::REGULAR_TTF).map_err(|e| anyhow!("parse built-in font: {e}"))
}

/// Returns the first source in `sources` that loads.
///
/// Failures are logged and skipped. If every source fails, the built-in font
/// is used, so a font is always returned.
pub fn load_font(sources: &[FontSource]) -> FontArc {
    for source in sources {
        match source.load() {
            Ok(font) => {
                log::debug!("Using font: {source}");
                return font;
            }
            Err(e) => log::debug!("Font source unavailable ({source}): {e:#}"),
        }
    }

    log::debug!("Font chain exhausted, using built-in font");
    // Bundled bytes are a known-good font.
    match builtin() {
        Ok(font) => font,
        Err(e) => unreachable!("{e:#}"),
    }
}

// ---------------------------------------------------------------------------
// Named font lookup
// ---------------------------------------------------------------------------

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("/System/Library/Fonts"),
    ];

    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }

    let windir = std::env::var_os("WINDIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
    dirs.push(windir.join("Fonts"));

    dirs.into_iter().filter(|d| d.is_dir()).collect()
}

fn find_named(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }

    font_dirs().into_iter().find_map(|dir| find_in_dir(&dir, name))
}

fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .find(|e| e.file_name().to_string_lossy().eq_ignore_ascii_case(name))
        .map(|e| e.into_path())
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// Pixel extent of a rendered glyph relative to the drawing origin. The
/// origin puts the font's ascent line at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Converts a size in pixels per em into the ascent-to-descent scale
/// `ab_glyph` works in.
pub fn px_scale(font: &FontArc, font_size: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(font_size * font.height_unscaled() / upem),
        _ => PxScale::from(font_size),
    }
}

/// Measures `letter` placed the way `imageproc::drawing::draw_text_mut`
/// places it. `None` when the font has no outline for the letter.
pub fn glyph_bounds(font: &FontArc, scale: PxScale, letter: char) -> Option<GlyphBounds> {
    let scaled = font.as_scaled(scale);
    let glyph = scaled
        .glyph_id(letter)
        .with_scale_and_position(scale, point(0.0, scaled.ascent()));
    let bb = font.outline_glyph(glyph)?.px_bounds();

    Some(GlyphBounds {
        left: bb.min.x.round() as i32,
        top: bb.min.y.round() as i32,
        right: bb.max.x.round() as i32,
        bottom: bb.max.y.round() as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sources_fall_back_to_builtin() {
        let sources = vec![
            FontSource::Path(PathBuf::from("/definitely/not/here/Bold.ttf")),
            FontSource::Named("no-such-font-3f9a.ttf".to_string()),
            FontSource::BuiltIn,
        ];
        let font = load_font(&sources);
        assert!(font.glyph_id('C').0 != 0);
    }

    #[test]
    fn empty_chain_still_yields_a_font() {
        let font = load_font(&[]);
        assert!(font.glyph_id('C').0 != 0);
    }

    #[test]
    fn unparsable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        assert!(FontSource::Path(bogus.clone()).load().is_err());
        let font = load_font(&[FontSource::Path(bogus)]);
        assert!(font.glyph_id('C').0 != 0);
    }

    #[test]
    fn named_lookup_misses_unknown_file() {
        assert!(find_named("no-such-font-3f9a.ttf").is_none());
    }

    #[test]
    fn named_lookup_matches_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Arial.TTF"), b"").unwrap();

        let found = find_in_dir(dir.path(), "arial.ttf").unwrap();
        assert_eq!(found, nested.join("Arial.TTF"));
    }

    #[test]
    fn capital_letter_sits_below_ascent_line() {
        let font = load_font(&[FontSource::BuiltIn]);
        let scale = px_scale(&font, 28.0);
        let bb = glyph_bounds(&font, scale, 'C').unwrap();

        assert!(bb.width() > 0 && bb.height() > 0);
        // Capitals do not reach the ascent line, which sits above cap height.
        assert!(bb.top > 0);
        assert!(bb.height() <= 28);
    }

    #[test]
    fn space_has_no_outline() {
        let font = load_font(&[FontSource::BuiltIn]);
        let scale = px_scale(&font, 28.0);
        assert!(glyph_bounds(&font, scale, ' ').is_none());
    }
}
