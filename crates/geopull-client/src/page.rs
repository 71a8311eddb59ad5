//! Decoding of one feature-service response body into a typed page.
//!
//! The ArcGIS REST `f=geojson` response is a `FeatureCollection` document
//! with two service extensions the plain `GeoJSON` model does not carry: a
//! top-level `crs` member naming the reference system, and a top-level
//! `properties.exceededTransferLimit` flag signalling that more records
//! remain beyond this page.

use geopull_core::{DecodeError, FeatureRecord};
use serde_json::Value;

/// One page of a feature-service response.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePage {
    /// Records in the order the service returned them
    pub records: Vec<FeatureRecord>,
    /// CRS name the service reported for this page
    pub crs: String,
    /// The service's continuation flag. `None` when the response did not
    /// carry one, which the portal uses interchangeably with `false`.
    pub exceeded_transfer_limit: Option<bool>,
}

impl FeaturePage {
    /// Whether the service explicitly said more records remain.
    ///
    /// An absent flag reads as `false`; the portal drops the flag on final
    /// pages instead of sending `false`.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.exceeded_transfer_limit.unwrap_or(false)
    }
}

/// Decode one response body into a [`FeaturePage`].
///
/// Decoding is all-or-nothing: a body that parses but is missing a required
/// field, or that contains a single malformed feature, yields an error and
/// no page.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidJson`] when the body is not JSON,
/// [`DecodeError::MissingField`] when the `features` array or the CRS name
/// is absent, and [`DecodeError::Feature`] when a feature cannot be
/// converted to a record.
pub fn decode_page(body: &str) -> Result<FeaturePage, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|source| DecodeError::InvalidJson { source })?;

    let features = value
        .get("features")
        .and_then(Value::as_array)
        .ok_or(DecodeError::MissingField { field: "features" })?;

    let crs = value
        .pointer("/crs/properties/name")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField {
            field: "crs.properties.name",
        })?
        .to_string();

    let exceeded_transfer_limit = value
        .pointer("/properties/exceededTransferLimit")
        .and_then(Value::as_bool);

    let mut records = Vec::with_capacity(features.len());
    for (index, raw) in features.iter().enumerate() {
        let feature: geojson::Feature =
            serde_json::from_value(raw.clone()).map_err(|err| DecodeError::Feature {
                index,
                message: format!("not a GeoJSON feature: {err}"),
            })?;
        records.push(FeatureRecord::from_geojson(feature, index)?);
    }

    Ok(FeaturePage {
        records,
        crs,
        exceeded_transfer_limit,
    })
}
