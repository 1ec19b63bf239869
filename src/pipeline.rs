use anyhow::Result;
use std::path::PathBuf;

use crate::html_template::write_map;
use crate::processing::scan_folder;
use crate::settings::Settings;
use crate::table::build_table;

/// What one full run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSummary {
    pub map_path: PathBuf,
    pub total_files: usize,
    pub markers: usize,
    pub skipped: usize,
    pub missing_timestamps: usize,
}

/// Scans the source folder, builds the time-ordered table and writes the map.
pub fn generate_map(settings: &Settings) -> Result<MapSummary> {
    let report = scan_folder(&settings.source_folder, &settings.extension_glob)?;
    let table = build_table(&report.photos);
    let map_path = write_map(&table, settings)?;

    let summary = MapSummary {
        map_path,
        total_files: report.total_files,
        markers: table.len(),
        skipped: report.skipped.len(),
        missing_timestamps: table.missing_timestamp_count(),
    };
    tracing::info!(
        "Map generated: {} markers from {} files ({} skipped, {} without timestamp)",
        summary.markers,
        summary.total_files,
        summary.skipped,
        summary.missing_timestamps
    );
    Ok(summary)
}
