//! GeoJSON output for fetched feature collections.
//!
//! Collections serialize as a `FeatureCollection` document with the service's
//! CRS recorded as a `crs` foreign member, so downstream tools see the same
//! reference system the service reported.

use std::io::Write;

use geojson::JsonObject;

use crate::error::WriteError;
use crate::feature::{FeatureCollection, FeatureRecord};

fn to_geojson_collection(collection: &FeatureCollection) -> geojson::FeatureCollection {
    let features = collection
        .records
        .iter()
        .map(FeatureRecord::to_geojson)
        .collect();

    let mut foreign_members = JsonObject::new();
    foreign_members.insert(
        "crs".to_string(),
        serde_json::json!({
            "type": "name",
            "properties": { "name": collection.crs }
        }),
    );

    geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    }
}

/// Serialize a collection as `GeoJSON` and write it to `writer`.
///
/// The document ends with a trailing newline.
///
/// # Errors
///
/// Returns [`WriteError::Encode`] when serialization fails and
/// [`WriteError::Io`] when the underlying writer rejects the bytes.
pub fn write_geojson<W: Write>(
    writer: &mut W,
    collection: &FeatureCollection,
) -> Result<(), WriteError> {
    let document = to_geojson_collection(collection);
    serde_json::to_writer(&mut *writer, &document)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Serialize a collection as a `GeoJSON` string.
///
/// # Errors
///
/// Returns [`WriteError::Encode`] when serialization fails.
pub fn to_geojson_string(collection: &FeatureCollection) -> Result<String, WriteError> {
    let document = to_geojson_collection(collection);
    Ok(serde_json::to_string(&document)?)
}
