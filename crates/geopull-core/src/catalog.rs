//! Registry of known ONS Open Geography Portal feature-service layers.
//!
//! Each entry points at the `/query` endpoint of a hosted feature layer so
//! callers can fetch by a short name instead of pasting service URLs. The
//! registry is static; layers the portal retires stay here until removed by
//! hand.

use std::fmt;

/// Geometry kind a layer serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerGeometry {
    /// Point features (e.g. population-weighted centroids)
    Point,
    /// Polygon features (e.g. statistical boundaries)
    Polygon,
}

impl LayerGeometry {
    /// Human-readable name of the geometry kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for LayerGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A known feature-service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Short identifier used on the command line (e.g. "oa-centroids")
    pub short_name: &'static str,
    /// Full descriptive name of the dataset
    pub long_name: &'static str,
    /// Query endpoint URL (ends in `/query`)
    pub endpoint: &'static str,
    /// Attribute that uniquely identifies a feature (e.g. "OA21CD")
    pub id_field: &'static str,
    /// Geometry kind the layer serves
    pub geometry: LayerGeometry,
}

impl Layer {
    /// Creates a new layer entry.
    #[must_use]
    pub const fn new(
        short_name: &'static str,
        long_name: &'static str,
        endpoint: &'static str,
        id_field: &'static str,
        geometry: LayerGeometry,
    ) -> Self {
        Self {
            short_name,
            long_name,
            endpoint,
            id_field,
            geometry,
        }
    }
}

/// Returns the complete registry of known layers.
///
/// All entries are hosted on the ONS Open Geography Portal and serve
/// `GeoJSON` over the ArcGIS REST query protocol.
///
/// # Examples
///
/// ```
/// use geopull_core::catalog::layers;
///
/// let all = layers();
/// assert!(!all.is_empty());
/// assert!(all.iter().all(|l| l.endpoint.ends_with("/query")));
/// ```
#[must_use]
pub fn layers() -> Vec<Layer> {
    use LayerGeometry::{Point, Polygon};

    vec![
        Layer::new(
            "oa-centroids",
            "Output Areas (December 2021) Population Weighted Centroids",
            "https://services1.arcgis.com/ESMARspQHYMw9BZ9/arcgis/rest/services/Output_Areas_2021_PWC_V3/FeatureServer/0/query",
            "OA21CD",
            Point,
        ),
        Layer::new(
            "oa-boundaries",
            "Output Areas (December 2021) Boundaries EW BGC",
            "https://services1.arcgis.com/ESMARspQHYMw9BZ9/arcgis/rest/services/Output_Areas_2021_EW_BGC_V2/FeatureServer/0/query",
            "OA21CD",
            Polygon,
        ),
        Layer::new(
            "lsoa-boundaries",
            "Lower layer Super Output Areas (December 2021) Boundaries EW BGC",
            "https://services1.arcgis.com/ESMARspQHYMw9BZ9/arcgis/rest/services/Lower_layer_Super_Output_Areas_2021_EW_BGC_V3/FeatureServer/0/query",
            "LSOA21CD",
            Polygon,
        ),
        Layer::new(
            "lad-boundaries",
            "Local Authority Districts (December 2022) Boundaries UK BGC",
            "https://services1.arcgis.com/ESMARspQHYMw9BZ9/arcgis/rest/services/Local_Authority_Districts_December_2022_UK_BGC_V2/FeatureServer/0/query",
            "LAD22CD",
            Polygon,
        ),
    ]
}

/// Finds a layer by its short name (case-insensitive).
///
/// Returns `None` if no layer with the given name exists in the registry.
///
/// # Examples
///
/// ```
/// use geopull_core::catalog::find_layer;
///
/// let layer = find_layer("oa-centroids").expect("known layer");
/// assert_eq!(layer.id_field, "OA21CD");
///
/// assert!(find_layer("not-a-layer").is_none());
/// ```
#[must_use]
pub fn find_layer(name: &str) -> Option<Layer> {
    layers()
        .into_iter()
        .find(|l| l.short_name.eq_ignore_ascii_case(name))
}

/// Returns all layer short names in alphabetically sorted order.
#[must_use]
pub fn layer_names() -> Vec<&'static str> {
    let mut names: Vec<_> = layers().iter().map(|l| l.short_name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_layer() {
        let layer = find_layer("oa-centroids");
        assert!(layer.is_some());
        assert_eq!(layer.unwrap().geometry, LayerGeometry::Point);
    }

    #[test]
    fn test_find_layer_case_insensitive() {
        let layer = find_layer("OA-Centroids");
        assert!(layer.is_some());
        assert_eq!(layer.unwrap().short_name, "oa-centroids");
    }

    #[test]
    fn test_find_layer_unknown() {
        assert!(find_layer("wards-2011").is_none());
    }

    #[test]
    fn test_layer_names_sorted_and_unique() {
        let names = layer_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), layers().len());
    }

    #[test]
    fn test_endpoints_are_https_query_urls() {
        for layer in layers() {
            assert!(
                layer.endpoint.starts_with("https://"),
                "{} endpoint is not https",
                layer.short_name
            );
            assert!(
                layer.endpoint.ends_with("/query"),
                "{} endpoint is not a query URL",
                layer.short_name
            );
        }
    }

    #[test]
    fn test_layer_geometry_display() {
        assert_eq!(LayerGeometry::Point.to_string(), "Point");
        assert_eq!(LayerGeometry::Polygon.to_string(), "Polygon");
    }
}
