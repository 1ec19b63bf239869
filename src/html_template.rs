use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{TOOLTIP_DATETIME_FORMAT, TOOLTIP_WIDTH_PX};
use crate::settings::Settings;
use crate::table::{PhotoRow, PhotoTable};
use crate::utils::{ensure_directory_exists, file_uri};

/// Corner pair handed to `fitBounds`, as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

/// Marker payload embedded in the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub radius: f64,
    pub tooltip: String,
}

/// Viewport around all photos padded by `margin` degrees.
///
/// The corners pair the largest latitude with the smallest longitude and
/// vice versa. Leaflet normalizes any two opposite corners into a box, so
/// the result covers every photo plus the margin on each side.
pub fn compute_viewport(rows: &[PhotoRow], margin: f64) -> Option<Viewport> {
    let first = rows.first()?;
    let (mut min_lat, mut max_lat) = (first.record.latitude, first.record.latitude);
    let (mut min_lng, mut max_lng) = (first.record.longitude, first.record.longitude);

    for row in &rows[1..] {
        min_lat = min_lat.min(row.record.latitude);
        max_lat = max_lat.max(row.record.latitude);
        min_lng = min_lng.min(row.record.longitude);
        max_lng = max_lng.max(row.record.longitude);
    }

    Some(Viewport {
        south_west: [max_lat + margin, min_lng - margin],
        north_east: [min_lat - margin, max_lng + margin],
    })
}

pub fn tooltip_html(row: &PhotoRow) -> String {
    let photo_url = file_uri(Path::new(&row.record.filepath));
    let date_line = row
        .record
        .timestamp
        .map(|ts| format!("\n    <p>{}</p>", ts.format(TOOLTIP_DATETIME_FORMAT)))
        .unwrap_or_default();

    format!(
        "<div style=\"width: {}px;\">\n    <img src=\"{}\" alt=\"photo\" style=\"width: 100%;\"/>{}\n</div>",
        TOOLTIP_WIDTH_PX,
        escape_html_attr(&photo_url),
        date_line
    )
}

fn escape_html_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn build_markers(table: &PhotoTable, radius: f64) -> Vec<MapMarker> {
    table
        .rows
        .iter()
        .map(|row| MapMarker {
            lat: row.record.latitude,
            lng: row.record.longitude,
            color: row.color_hex(),
            radius,
            tooltip: tooltip_html(row),
        })
        .collect()
}

/// JSON safe to inline inside a `<script>` block.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("Failed to serialize map data")?;
    Ok(json.replace("</", "<\\/"))
}

/// Builds the complete Leaflet page for a sorted, colored table.
pub fn render_map_html(table: &PhotoTable, settings: &Settings) -> Result<String> {
    let markers = build_markers(table, settings.marker_radius);
    let viewport = compute_viewport(&table.rows, settings.margin_degrees);

    let view_js = match viewport {
        Some(v) => format!(
            "map.fitBounds([{}, {}]);",
            script_json(&v.south_west)?,
            script_json(&v.north_east)?
        ),
        None => "map.setView([0, 0], 2);".to_string(),
    };

    let html = MAP_HTML
        .replace("/*MARKERS_PLACEHOLDER*/", &script_json(&markers)?)
        .replace("/*VIEW_PLACEHOLDER*/", &view_js);
    Ok(html)
}

/// Writes the map document, overwriting any previous one, and returns its resolved path.
pub fn write_map(table: &PhotoTable, settings: &Settings) -> Result<PathBuf> {
    let html = render_map_html(table, settings)?;

    if let Some(parent) = settings.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&settings.output_path, html)
        .with_context(|| format!("Failed to write map to {}", settings.output_path.display()))?;

    let resolved = std::fs::canonicalize(&settings.output_path)
        .with_context(|| format!("Failed to resolve {}", settings.output_path.display()))?;
    tracing::info!("Map saved to {} ({} markers)", resolved.display(), table.len());
    Ok(resolved)
}

// HTML template for the map page
const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Photo2Map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <style>
        html, body { height: 100%; margin: 0; padding: 0; }
        #map { height: 100%; width: 100%; }
    </style>
</head>
<body>
    <div id="map"></div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        const map = L.map('map');

        L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
            maxZoom: 19,
            attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
        }).addTo(map);

        const markers = /*MARKERS_PLACEHOLDER*/;

        markers.forEach(m => {
            L.circleMarker([m.lat, m.lng], {
                color: m.color,
                fillColor: m.color,
                fill: true,
                radius: m.radius
            })
            .bindTooltip(m.tooltip, { sticky: true })
            .addTo(map);
        });

        /*VIEW_PLACEHOLDER*/
    </script>
</body>
</html>
"#;
