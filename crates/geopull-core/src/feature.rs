//! Typed feature records and the collections that accumulate them.
//!
//! A feature service hands back `GeoJSON` features; this module materializes
//! them into records with owned properties and `geo-types` geometries, and
//! converts them back to `GeoJSON` on the way out.

use std::fmt;

use geo_types::Geometry;
use geojson::{Feature, Geometry as GeoJsonGeometry, JsonObject};

use crate::error::DecodeError;

/// Decoded feature with materialized properties and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub properties: JsonObject,
    pub geometry: Option<Geometry<f64>>,
}

impl FeatureRecord {
    /// Convert a `GeoJSON` feature into a record.
    ///
    /// `index` is the feature's position within the response it came from
    /// and is carried into any error for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Feature`] when the feature's geometry cannot
    /// be represented as a `geo-types` geometry.
    pub fn from_geojson(feature: Feature, index: usize) -> Result<Self, DecodeError> {
        let geometry = match feature.geometry {
            Some(geometry) => Some(convert_geometry(geometry, index)?),
            None => None,
        };

        let properties = feature.properties.unwrap_or_default();

        Ok(Self {
            properties,
            geometry,
        })
    }

    /// Convert the record back into a `GeoJSON` feature.
    #[must_use]
    pub fn to_geojson(&self) -> Feature {
        Feature {
            bbox: None,
            geometry: self
                .geometry
                .as_ref()
                .map(|geometry| GeoJsonGeometry::new(geojson::Value::from(geometry))),
            id: None,
            properties: Some(self.properties.clone()),
            foreign_members: None,
        }
    }
}

fn convert_geometry(geometry: GeoJsonGeometry, index: usize) -> Result<Geometry<f64>, DecodeError> {
    geometry.try_into().map_err(|err| DecodeError::Feature {
        index,
        message: format!("failed to convert GeoJSON geometry: {err}"),
    })
}

impl fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geom = if self.geometry.is_some() {
            "Some(Geometry)"
        } else {
            "None"
        };
        write!(
            f,
            "FeatureRecord(properties={} keys, geometry={geom})",
            self.properties.len()
        )
    }
}

/// Ordered set of records fetched from one layer, tagged with the coordinate
/// reference system the service reported.
///
/// Record order is the order the service returned them in; position in
/// `records` is the only row identity the collection keeps.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    /// CRS name as reported by the service (e.g. "EPSG:4326")
    pub crs: String,
    /// Records in service order
    pub records: Vec<FeatureRecord>,
}

impl FeatureCollection {
    /// Create an empty collection tagged with `crs`.
    #[must_use]
    pub fn new(crs: impl Into<String>) -> Self {
        Self {
            crs: crs.into(),
            records: Vec::new(),
        }
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
