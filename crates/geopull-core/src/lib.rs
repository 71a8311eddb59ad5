//! `geopull-core` is the core library for the `geopull` project, providing the
//! typed feature model shared by the client and the CLI.
//!
//! This crate includes:
//! - **Layer Catalog**: A static registry of known ONS Open Geography Portal layers.
//! - **Data Structures**: Feature records and collections with `geo-types` geometries.
//! - **Output**: `GeoJSON` serialization that preserves the service's CRS.
//! - **Munge Utilities**: Snapped-coordinate deviation measurement.
//!
//! The `catalog` module exposes the static layer registry consumed by the CLI
//! and other parts of the system.

pub mod catalog;
pub mod error;
pub mod feature;
pub mod munge;
pub mod writer;

// Re-export commonly used types
pub use error::{DecodeError, WriteError};
pub use feature::{FeatureCollection, FeatureRecord};
