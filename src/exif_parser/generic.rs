use exif::{Exif, In, Tag, Value};
use thiserror::Error;

/// Errors produced while turning a degrees/minutes/seconds triple into decimal degrees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("incorrect hemisphere reference: expecting one of 'N', 'S', 'E' or 'W', got '{0}' instead")]
    InvalidHemisphere(String),
    #[error("expected degrees, minutes and seconds, got {0} components")]
    MalformedDms(usize),
    #[error("coordinate component is not a finite number")]
    NotFinite,
}

/// Tags read from one photo. Every field is optional; nothing is converted
/// beyond unpacking the raw EXIF value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifMetadata {
    pub orientation: Option<u32>,
    pub gps_latitude: Option<Vec<f64>>,
    pub gps_latitude_ref: Option<String>,
    pub gps_longitude: Option<Vec<f64>>,
    pub gps_longitude_ref: Option<String>,
    pub gps_altitude: Option<f64>,
    pub gps_altitude_ref: Option<u8>,
    /// Raw "YYYY:MM:DD HH:MM:SS" text
    pub datetime: Option<String>,
}

impl ExifMetadata {
    pub fn from_exif(exif: &Exif) -> Self {
        let orientation = exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|f| f.value.get_uint(0));

        // DateTime first, then the capture time
        let datetime = [Tag::DateTime, Tag::DateTimeOriginal]
            .iter()
            .find_map(|&tag| ascii_field(exif, tag));

        Self {
            orientation,
            gps_latitude: rational_triple(exif, Tag::GPSLatitude),
            gps_latitude_ref: ascii_field(exif, Tag::GPSLatitudeRef),
            gps_longitude: rational_triple(exif, Tag::GPSLongitude),
            gps_longitude_ref: ascii_field(exif, Tag::GPSLongitudeRef),
            gps_altitude: exif
                .get_field(Tag::GPSAltitude, In::PRIMARY)
                .and_then(|f| match f.value {
                    Value::Rational(ref v) => v.first().map(|r| r.to_f64()),
                    _ => None,
                }),
            gps_altitude_ref: exif
                .get_field(Tag::GPSAltitudeRef, In::PRIMARY)
                .and_then(|f| match f.value {
                    Value::Byte(ref v) => v.first().copied(),
                    _ => None,
                }),
            datetime,
        }
    }

    /// Altitude in meters, negative when the reference marks it below sea level.
    pub fn signed_altitude(&self) -> Option<f64> {
        self.gps_altitude.map(|alt| match self.gps_altitude_ref {
            Some(1) => -alt,
            _ => alt,
        })
    }
}

fn rational_triple(exif: &Exif, tag: Tag) -> Option<Vec<f64>> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Rational(ref vec) => Some(vec.iter().map(|r| r.to_f64()).collect()),
        _ => None,
    }
}

fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref vec) => vec
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_end_matches('\0').trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Converts degrees/minutes/seconds plus a hemisphere reference into signed
/// decimal degrees. S and W (any case) are negative, N and E positive; any
/// other reference is rejected.
pub fn dms_to_decimal(dms: &[f64], reference: &str) -> Result<f64, CoordError> {
    let sign = match reference.trim().to_uppercase().as_str() {
        "W" | "S" => -1.0,
        "E" | "N" => 1.0,
        _ => return Err(CoordError::InvalidHemisphere(reference.to_string())),
    };

    let [d, m, s] = dms else {
        return Err(CoordError::MalformedDms(dms.len()));
    };
    if !(d.is_finite() && m.is_finite() && s.is_finite()) {
        return Err(CoordError::NotFinite);
    }

    Ok(sign * (d + m / 60.0 + s / 3600.0))
}
