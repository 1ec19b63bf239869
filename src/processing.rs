use anyhow::{Context, Result};
use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::exif_parser::{dms_to_decimal, read_exif_metadata, CoordError, ExifMetadata, ExtractError};

/// Location data pulled from one photo, before the timestamp is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedPhoto {
    /// Absolute path of the source file
    pub filepath: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    /// Raw EXIF timestamp text, parsed later by the table builder
    pub datetime: Option<String>,
}

/// Why a file produced no record.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("image does not contain spatial data: missing {0}")]
    MissingField(&'static str),
    #[error("spatial data is invalid: {0}")]
    InvalidLocation(#[from] CoordError),
}

pub enum ScanOutcome {
    Located(ScannedPhoto),
    Skipped(SkipReason),
}

/// Everything one folder scan found.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Keyed by source path so iteration order is stable
    pub photos: BTreeMap<String, ScannedPhoto>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Located photos that carry no timestamp
    pub missing_timestamps: Vec<PathBuf>,
    pub total_files: usize,
}

/// Case-sensitive matcher for `glob`, relative to `root`.
pub fn photo_matcher(root: &Path, glob: &str) -> Result<Override> {
    OverrideBuilder::new(root)
        .add(glob)
        .with_context(|| format!("Invalid extension glob '{}'", glob))?
        .build()
        .with_context(|| format!("Invalid extension glob '{}'", glob))
}

/// Whether a file placed directly in `root` under `file_name` would be scanned.
pub fn is_scanned_name(matcher: &Override, file_name: &Path) -> bool {
    matcher.matched(file_name, false).is_whitelist()
}

/// Recursively lists files under `root` whose name matches `glob`, sorted by path.
pub fn find_photo_files(root: &Path, glob: &str) -> Result<Vec<PathBuf>> {
    let overrides = photo_matcher(root, glob)?;

    // Visit everything a plain recursive glob would, hidden and ignored files included
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .overrides(overrides)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let files = walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable directory entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().map_or(false, |ft| ft.is_file()))
        .map(|e| e.into_path())
        .collect();

    Ok(files)
}

/// Extracts location data from a single file.
pub fn scan_file(path: &Path) -> ScanOutcome {
    let metadata = match read_exif_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => return ScanOutcome::Skipped(e.into()),
    };
    match locate(path, metadata) {
        Ok(photo) => ScanOutcome::Located(photo),
        Err(reason) => ScanOutcome::Skipped(reason),
    }
}

fn locate(path: &Path, metadata: ExifMetadata) -> Result<ScannedPhoto, SkipReason> {
    let lat_dms = metadata
        .gps_latitude
        .as_deref()
        .ok_or(SkipReason::MissingField("gps_latitude"))?;
    let lat_ref = metadata
        .gps_latitude_ref
        .as_deref()
        .ok_or(SkipReason::MissingField("gps_latitude_ref"))?;
    let lon_dms = metadata
        .gps_longitude
        .as_deref()
        .ok_or(SkipReason::MissingField("gps_longitude"))?;
    let lon_ref = metadata
        .gps_longitude_ref
        .as_deref()
        .ok_or(SkipReason::MissingField("gps_longitude_ref"))?;

    let latitude = dms_to_decimal(lat_dms, lat_ref)?;
    let longitude = dms_to_decimal(lon_dms, lon_ref)?;

    let filepath = std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .to_string();

    Ok(ScannedPhoto {
        filepath,
        latitude,
        longitude,
        altitude: metadata.signed_altitude(),
        datetime: metadata.datetime,
    })
}

/// Scans `root` for photos and collects every one with usable location data.
/// Per-file problems are recorded in the report and never abort the scan.
pub fn scan_folder(root: &Path, glob: &str) -> Result<ScanReport> {
    tracing::info!("Scanning photos directory: {}", root.display());

    let mut report = ScanReport::default();
    if !root.exists() {
        tracing::warn!("Photos directory not found: {}", root.display());
        return Ok(report);
    }

    let files = find_photo_files(root, glob)?;
    report.total_files = files.len();
    tracing::info!("Found {} files matching '{}'", files.len(), glob);

    for path in files {
        match scan_file(&path) {
            ScanOutcome::Located(photo) => {
                if photo.datetime.is_none() {
                    tracing::warn!(
                        "Photo {} does not contain datetime information",
                        path.display()
                    );
                    report.missing_timestamps.push(path.clone());
                }
                tracing::debug!(
                    "{}: {:.6}, {:.6}",
                    path.display(),
                    photo.latitude,
                    photo.longitude
                );
                report
                    .photos
                    .insert(path.to_string_lossy().to_string(), photo);
            }
            ScanOutcome::Skipped(reason) => {
                tracing::warn!("Skipping {}: {}", path.display(), reason);
                report.skipped.push((path, reason));
            }
        }
    }

    tracing::info!(
        "Scan finished: {} located, {} skipped, {} without timestamp",
        report.photos.len(),
        report.skipped.len(),
        report.missing_timestamps.len()
    );

    Ok(report)
}
