use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_EXTENSION_GLOB, DEFAULT_MARGIN_DEGREES, DEFAULT_MARKER_RADIUS,
    DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_FOLDER,
};

/// Everything the pipeline needs to know. Passed explicitly into every run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Watched folder that is scanned and receives uploads
    pub source_folder: PathBuf,
    pub extension_glob: String,
    pub output_path: PathBuf,
    /// Padding added around the photo extents, in degrees
    pub margin_degrees: f64,
    pub marker_radius: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_folder: PathBuf::from(DEFAULT_SOURCE_FOLDER),
            extension_glob: DEFAULT_EXTENSION_GLOB.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            margin_degrees: DEFAULT_MARGIN_DEGREES,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parses `key = value` lines. Unknown keys are ignored; bad, negative or
    /// non-finite numbers keep their default.
    pub fn parse(content: &str) -> Self {
        let mut settings = Settings::default();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"');

            match key.trim() {
                "source_folder" => settings.source_folder = PathBuf::from(value),
                "extension_glob" => settings.extension_glob = value.to_string(),
                "output_path" => settings.output_path = PathBuf::from(value),
                "margin_degrees" => match parse_length(value) {
                    Some(margin) => settings.margin_degrees = margin,
                    None => tracing::warn!("Ignoring invalid margin_degrees '{}'", value),
                },
                "marker_radius" => match parse_length(value).filter(|r| *r > 0.0) {
                    Some(radius) => settings.marker_radius = radius,
                    None => tracing::warn!("Ignoring invalid marker_radius '{}'", value),
                },
                other => tracing::debug!("Unknown config key '{}'", other),
            }
        }

        settings
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Creating config directory")?;
            }
        }

        let mut content = String::new();
        content.push_str("# Photo2Map Configuration File\n");
        content.push_str(&format!("source_folder = \"{}\"\n", self.source_folder.display()));
        content.push_str(&format!("extension_glob = \"{}\"\n", self.extension_glob));
        content.push_str(&format!("output_path = \"{}\"\n", self.output_path.display()));
        content.push_str(&format!("margin_degrees = {}\n", self.margin_degrees));
        content.push_str(&format!("marker_radius = {}\n", self.marker_radius));

        std::fs::write(config_path, content).context("Failed to write to config file")?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push(CONFIG_FILE_NAME);
        path
    }
}

/// A finite, non-negative number.
fn parse_length(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
