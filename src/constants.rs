// Configuration defaults
pub const CONFIG_FILE_NAME: &str = "photo2map.ini";
pub const DEFAULT_SOURCE_FOLDER: &str = "images";
pub const DEFAULT_EXTENSION_GLOB: &str = "*.jpg";
pub const DEFAULT_OUTPUT_FILE: &str = "map.html";
pub const DEFAULT_MARGIN_DEGREES: f64 = 3.0;
pub const DEFAULT_MARKER_RADIUS: f64 = 6.0;

// EXIF timestamp layout, e.g. "2023:05:01 14:30:00"
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
// Minute precision shown in tooltips
pub const TOOLTIP_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const TOOLTIP_WIDTH_PX: u32 = 200;

// Launcher window
pub const WINDOW_TITLE: &str = "Photo2Map";
pub const WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
pub const LOGO_FILE: &str = "Photo2Map.png";
pub const LOGO_SIZE: u32 = 100;
pub const UPLOAD_EXTENSION: &str = "jpg";
pub const UPLOAD_ERROR_TITLE: &str = "Upload Error";
pub const UPLOAD_ERROR_MESSAGE: &str =
    "An error occurred during upload. Please ensure you are uploading a valid .jpg image.";
