use super::generic::ExifMetadata;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot open file: {0}")]
    Open(#[from] std::io::Error),
    #[error("unsupported or corrupt image metadata: {0}")]
    Unreadable(#[from] exif::Error),
}

/// Opens one image and reads its orientation, location and time tags.
pub fn read_exif_metadata(path: &Path) -> Result<ExifMetadata, ExtractError> {
    let file = File::open(path)?;
    let mut buf_reader = BufReader::new(file);
    let mut exif_reader = exif::Reader::new();
    exif_reader.continue_on_error(true); // Tolerate non-standard EXIF structures

    match exif_reader.read_from_container(&mut buf_reader) {
        Ok(exif) => Ok(ExifMetadata::from_exif(&exif)),
        Err(exif::Error::PartialResult(partial)) => {
            let (exif, errors) = partial.into_inner();
            tracing::debug!(
                "{}: accepted partial EXIF ({} recoverable errors)",
                path.display(),
                errors.len()
            );
            Ok(ExifMetadata::from_exif(&exif))
        }
        Err(e) => Err(ExtractError::Unreadable(e)),
    }
}
