//! Photo2Map: reads GPS tags from a folder of photos and renders them as an
//! interactive Leaflet map, colored by capture time.

pub mod colormap;
pub mod commands;
pub mod constants;
pub mod exif_parser;
pub mod html_template;
pub mod image_processing;
pub mod launcher;
pub mod pipeline;
pub mod processing;
pub mod settings;
pub mod table;
pub mod utils;

pub use pipeline::{generate_map, MapSummary};
pub use settings::Settings;
