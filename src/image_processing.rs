use anyhow::{Context, Result};
use image::{imageops::FilterType, ImageReader, RgbaImage};
use std::path::Path;

/// Loads the launcher logo and scales it to exactly `size`x`size` pixels.
pub fn load_logo(path: &Path, size: u32) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open logo {}", path.display()))?
        .with_guessed_format()
        .context("Failed to detect logo format")?
        .decode()
        .with_context(|| format!("Failed to decode logo {}", path.display()))?;

    Ok(img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8())
}
