use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::pipeline::{generate_map, MapSummary};
use crate::processing::{is_scanned_name, photo_matcher};
use crate::settings::Settings;
use crate::utils::{ensure_directory_exists, file_uri, open_browser};

/// Moves a chosen JPEG into the watched folder and regenerates the map.
/// The source file no longer exists at its old path afterwards.
///
/// Files the scanner would not pick up are rejected before anything moves.
pub fn upload_image(settings: &Settings, source: &Path) -> Result<MapSummary> {
    let file_name = source
        .file_name()
        .with_context(|| format!("Invalid file name: {}", source.display()))?;
    let matcher = photo_matcher(&settings.source_folder, &settings.extension_glob)?;
    if !is_scanned_name(&matcher, Path::new(file_name)) {
        bail!(
            "{} does not match '{}'",
            source.display(),
            settings.extension_glob
        );
    }

    ensure_directory_exists(&settings.source_folder)
        .with_context(|| format!("Failed to create {}", settings.source_folder.display()))?;

    let destination = settings.source_folder.join(file_name);
    move_file(source, &destination)?;
    tracing::info!("Uploaded {} -> {}", source.display(), destination.display());

    generate_map(settings)
}

/// Regenerates the map and opens it in the default browser.
pub fn open_map(settings: &Settings) -> Result<MapSummary> {
    let summary = generate_map(settings)?;
    let url = file_uri(&summary.map_path);
    open_browser(&url).with_context(|| format!("Failed to open {}", url))?;
    Ok(summary)
}

fn move_file(source: &Path, destination: &Path) -> Result<()> {
    if std::fs::rename(source, destination).is_ok() {
        return Ok(());
    }
    // rename cannot cross filesystems
    std::fs::copy(source, destination).with_context(|| {
        format!("Failed to copy {} to {}", source.display(), destination.display())
    })?;
    std::fs::remove_file(source)
        .with_context(|| format!("Failed to remove {}", source.display()))?;
    Ok(())
}
