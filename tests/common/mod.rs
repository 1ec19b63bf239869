#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;
use std::path::Path;

/// Tags to embed in a synthesized JPEG.
#[derive(Default, Clone)]
pub struct PhotoFixture {
    /// ((deg, min, sec), ref)
    pub latitude: Option<((u32, u32, u32), &'static str)>,
    pub longitude: Option<((u32, u32, u32), &'static str)>,
    pub altitude: Option<(u32, u8)>,
    pub datetime: Option<&'static str>,
    pub datetime_original: Option<&'static str>,
}

impl PhotoFixture {
    pub fn at(lat: (u32, u32, u32), lat_ref: &'static str, lon: (u32, u32, u32), lon_ref: &'static str) -> Self {
        Self {
            latitude: Some((lat, lat_ref)),
            longitude: Some((lon, lon_ref)),
            ..Default::default()
        }
    }

    pub fn taken(mut self, datetime: &'static str) -> Self {
        self.datetime = Some(datetime);
        self
    }

    pub fn captured(mut self, datetime: &'static str) -> Self {
        self.datetime_original = Some(datetime);
        self
    }

    pub fn altitude(mut self, meters: u32, below_sea_level: bool) -> Self {
        self.altitude = Some((meters, below_sea_level as u8));
        self
    }
}

fn dms((d, m, s): (u32, u32, u32)) -> Value {
    Value::Rational(vec![
        Rational::from((d, 1)),
        Rational::from((m, 1)),
        Rational::from((s, 1)),
    ])
}

fn ascii(text: &str) -> Value {
    Value::Ascii(vec![text.as_bytes().to_vec()])
}

fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

/// Writes a minimal JPEG (SOI, APP1 Exif, EOI) carrying the fixture's tags.
pub fn write_jpeg(path: &Path, fixture: &PhotoFixture) {
    let mut fields = vec![field(Tag::Orientation, Value::Short(vec![1]))];

    if let Some((lat, lat_ref)) = fixture.latitude {
        fields.push(field(Tag::GPSLatitude, dms(lat)));
        fields.push(field(Tag::GPSLatitudeRef, ascii(lat_ref)));
    }
    if let Some((lon, lon_ref)) = fixture.longitude {
        fields.push(field(Tag::GPSLongitude, dms(lon)));
        fields.push(field(Tag::GPSLongitudeRef, ascii(lon_ref)));
    }
    if let Some((meters, reference)) = fixture.altitude {
        fields.push(field(Tag::GPSAltitude, Value::Rational(vec![Rational::from((meters, 1))])));
        fields.push(field(Tag::GPSAltitudeRef, Value::Byte(vec![reference])));
    }
    if let Some(datetime) = fixture.datetime {
        fields.push(field(Tag::DateTime, ascii(datetime)));
    }
    if let Some(datetime) = fixture.datetime_original {
        fields.push(field(Tag::DateTimeOriginal, ascii(datetime)));
    }

    let mut writer = Writer::new();
    for f in &fields {
        writer.push_field(f);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("write TIFF");
    let tiff = tiff.into_inner();

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture dir");
    }
    std::fs::write(path, jpeg).expect("write JPEG fixture");
}

/// Pulls the embedded marker array back out of a rendered page.
pub fn markers_in(html: &str) -> Vec<serde_json::Value> {
    let start = html.find("const markers = ").expect("markers declaration") + "const markers = ".len();
    let end = start + html[start..].find(";\n").expect("markers terminator");
    serde_json::from_str(&html[start..end]).expect("markers JSON")
}
