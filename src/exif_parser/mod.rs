pub mod generic;
pub mod jpeg;

pub use generic::{dms_to_decimal, CoordError, ExifMetadata};
pub use jpeg::{read_exif_metadata, ExtractError};
