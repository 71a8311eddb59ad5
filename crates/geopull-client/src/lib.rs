//! `geopull-client` is the blocking HTTP client for the `geopull` project.
//!
//! It speaks the ArcGIS REST `/query` protocol used by the ONS Open
//! Geography Portal:
//! - **Single-page fetch**: one GET, one decoded page, typed errors.
//! - **Pagination driver**: follows `exceededTransferLimit` across pages and
//!   concatenates records in service order.
//!
//! All I/O is synchronous; a fetch call returns only when the data is
//! complete or an error has been raised.

pub mod error;
pub mod fetch;
pub mod page;
pub mod query;

// Re-export commonly used types
pub use error::FetchError;
pub use fetch::{FeatureClient, fetch_all, fetch_page};
pub use page::{FeaturePage, decode_page};
pub use query::FeatureQuery;
