//! Display utilities for formatting CLI output.
//!
//! This module provides table row structures and formatting functions for
//! presenting catalog layers and fetch results in a human-readable format.

use std::path::Path;

use geo_types::Geometry;
use tabled::{Table, Tabled};

use geopull_core::FeatureCollection;
use geopull_core::catalog::Layer;

/// Table row representation for displaying catalog layer information.
#[derive(Tabled)]
pub struct LayerRow {
    /// Short identifier for the layer (e.g., `oa-centroids`).
    #[tabled(rename = "Name")]
    pub name: String,
    /// Full descriptive name of the dataset.
    #[tabled(rename = "Description")]
    pub description: String,
    /// Geometry kind the layer serves.
    #[tabled(rename = "Geometry")]
    pub geometry: String,
    /// Attribute that uniquely identifies a feature.
    #[tabled(rename = "ID Field")]
    pub id_field: String,
}

/// Table row representation for the geometry breakdown of a fetch.
#[derive(Tabled)]
pub struct GeometryKindRow {
    /// Geometry kind name (e.g., `Point`, `Polygon`).
    #[tabled(rename = "Geometry")]
    pub kind: String,
    /// Number of records with that geometry kind.
    #[tabled(rename = "Count")]
    pub count: usize,
}

/// Display the layer catalog in a formatted table.
pub fn display_layers(layers: &[Layer]) {
    println!("\nKnown layers ({} total):\n", layers.len());

    let rows: Vec<LayerRow> = layers
        .iter()
        .map(|l| LayerRow {
            name: l.short_name.to_string(),
            description: l.long_name.to_string(),
            geometry: l.geometry.to_string(),
            id_field: l.id_field.to_string(),
        })
        .collect();

    let table = Table::new(rows).to_string();
    println!("{table}");
}

/// Display a summary of a completed fetch.
///
/// Prints the dataset label, CRS, record count, and output path, followed by
/// a table breaking the records down by geometry kind.
pub fn display_fetch_summary(dataset: &str, collection: &FeatureCollection, output: &Path) {
    println!("\nDataset: {dataset}");
    println!("CRS: {}", collection.crs);
    println!("Records: {}", collection.len());
    println!("Written to: {}", output.display());

    let counts = geometry_kind_counts(collection);
    if !counts.is_empty() {
        println!("\n=== Geometries ===");

        let rows: Vec<GeometryKindRow> = counts
            .into_iter()
            .map(|(kind, count)| GeometryKindRow { kind, count })
            .collect();

        let table = Table::new(rows).to_string();
        println!("{table}");
    }
}

/// Count records by geometry kind, in first-seen order.
fn geometry_kind_counts(collection: &FeatureCollection) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in &collection.records {
        let kind = match &record.geometry {
            Some(geometry) => geometry_kind(geometry),
            None => "(no geometry)",
        };
        match counts.iter_mut().find(|(name, _)| name == kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((kind.to_string(), 1)),
        }
    }
    counts
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
