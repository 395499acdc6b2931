use crate::config::GeneratorConfig;
use crate::icon;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// `icon{size}.png` for the inactive variant, `icon{size}-active.png` for the active one.
pub fn icon_file_name(size: u32, active: bool) -> String {
    if active {
        format!("icon{size}-active.png")
    } else {
        format!("icon{size}.png")
    }
}

/// Render and save both variants of every configured size, inactive first.
///
/// Stops at the first failed write. Returns the written paths in order.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let out_dir = &config.output_dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    log::info!("Writing icons to {}", out_dir.display());

    println!("Creating icons with '{}' letter...", config.letter);

    let mut written = Vec::with_capacity(config.sizes.len() * 2);
    for &size in &config.sizes {
        println!("Creating {size}x{size} icons...");

        for active in [false, true] {
            let name = icon_file_name(size, active);
            let path = out_dir.join(&name);
            icon::render_icon(size, active, config)
                .save(&path)
                .with_context(|| format!("save {}", path.display()))?;

            let state = if active { "active" } else { "inactive" };
            println!("  ✓ {name} ({state})");
            written.push(path);
        }
    }

    println!("\nIcons with '{}' letter created successfully!", config.letter);
    println!("\nIcon colors:");
    println!("  • Gray with white '{}' = Inactive/Disabled", config.letter);
    println!("  • Red with white '{}' = Active/Enabled", config.letter);

    log::info!("Wrote {} icons", written.len());
    Ok(written)
}
