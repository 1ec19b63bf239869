use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::colormap::{plasma_hex, rank_scalars};
use crate::constants::EXIF_DATETIME_FORMAT;
use crate::processing::ScannedPhoto;

// One located photo with its parsed timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    pub filepath: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRow {
    pub record: PhotoRecord,
    /// Position in time order mapped onto [0, 1]
    pub color_scalar: f64,
}

impl PhotoRow {
    pub fn color_hex(&self) -> String {
        plasma_hex(self.color_scalar)
    }
}

/// Located photos in ascending time order. Rows without a timestamp come last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoTable {
    pub rows: Vec<PhotoRow>,
    /// Raw timestamps that did not match the EXIF layout, with their file
    pub invalid_timestamps: Vec<(String, String)>,
}

impl PhotoTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn missing_timestamp_count(&self) -> usize {
        self.rows.iter().filter(|r| r.record.timestamp.is_none()).count()
    }
}

pub fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT).ok()
}

/// Parses timestamps, sorts by time and assigns each row its color scalar.
pub fn build_table(photos: &BTreeMap<String, ScannedPhoto>) -> PhotoTable {
    let mut invalid_timestamps = Vec::new();

    let mut records: Vec<PhotoRecord> = photos
        .values()
        .map(|photo| {
            let timestamp = photo.datetime.as_deref().and_then(|raw| {
                let parsed = parse_exif_datetime(raw);
                if parsed.is_none() {
                    tracing::warn!("Photo {} has malformed datetime '{}'", photo.filepath, raw);
                    invalid_timestamps.push((photo.filepath.clone(), raw.to_string()));
                }
                parsed
            });

            PhotoRecord {
                filepath: photo.filepath.clone(),
                latitude: photo.latitude,
                longitude: photo.longitude,
                altitude: photo.altitude,
                timestamp,
            }
        })
        .collect();

    // Stable: equal timestamps and all untimed rows keep path order
    records.sort_by(|a, b| match (a.timestamp, b.timestamp) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let rows = records
        .into_iter()
        .zip(rank_scalars(photos.len()))
        .map(|(record, color_scalar)| PhotoRow { record, color_scalar })
        .collect();

    PhotoTable {
        rows,
        invalid_timestamps,
    }
}
