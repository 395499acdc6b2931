use crate::font::FontSource;
use image::Rgba;
use std::path::PathBuf;

/// Icon edge lengths written by a default run.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Letter drawn in the middle of every badge.
pub const DEFAULT_LETTER: char = 'C';

/// Preferred bold system font, tried before anything else.
pub const PREFERRED_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Generic font looked up by file name.
pub const GENERIC_FONT_NAME: &str = "arial.ttf";

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub inactive: Rgba<u8>,
    pub active: Rgba<u8>,
    pub glyph: Rgba<u8>,
}

impl Palette {
    pub fn fill(&self, active: bool) -> Rgba<u8> {
        if active {
            self.active
        } else {
            self.inactive
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            inactive: Rgba([128, 128, 128, 255]),
            active: Rgba([255, 68, 68, 255]),
            glyph: Rgba([255, 255, 255, 255]),
        }
    }
}

// ---------------------------------------------------------------------------
// Generator configuration
// ---------------------------------------------------------------------------

/// Everything a run needs. The binary always uses `GeneratorConfig::default()`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub sizes: Vec<u32>,
    pub letter: char,
    pub palette: Palette,
    pub font_sources: Vec<FontSource>,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            letter: DEFAULT_LETTER,
            palette: Palette::default(),
            font_sources: vec![
                FontSource::Path(PathBuf::from(PREFERRED_FONT_PATH)),
                FontSource::Named(GENERIC_FONT_NAME.to_string()),
                FontSource::BuiltIn,
            ],
            output_dir: PathBuf::from("."),
        }
    }
}

/// Transparent gap between the canvas edge and the badge.
pub fn margin(size: u32) -> u32 {
    size / 10
}

pub fn badge_diameter(size: u32) -> u32 {
    size.saturating_sub(2 * margin(size))
}

/// Glyph size in pixels per em: 60% of the icon, truncated.
pub fn font_size(size: u32) -> u32 {
    size * 6 / 10
}
