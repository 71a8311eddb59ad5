//! Blocking page fetch and the pagination driver.
//!
//! One call maps to one HTTP GET; the pagination driver chains calls by
//! advancing the record offset until the service stops reporting that more
//! records remain. Requests are never retried, so a failing page surfaces
//! immediately instead of producing a partial dataset.

use geopull_core::FeatureCollection;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use url::Url;

use crate::error::FetchError;
use crate::page::{FeaturePage, decode_page};
use crate::query::FeatureQuery;

/// Blocking client for ArcGIS-style feature services.
pub struct FeatureClient {
    http: Client,
}

impl Default for FeatureClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureClient {
    /// Creates a client with default HTTP settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Creates a client backed by a caller-configured HTTP client, e.g. one
    /// with a request timeout or a proxy.
    #[must_use]
    pub fn with_http(http: Client) -> Self {
        Self { http }
    }

    /// Fetch and decode one page of features.
    ///
    /// Issues a single GET against `endpoint` with the query's wire
    /// parameters and decodes the `GeoJSON` body. The query is not advanced;
    /// calling this twice with the same query fetches the same page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] when the service answers with a
    /// non-success HTTP status, [`FetchError::Transport`] when no response
    /// arrives, and [`FetchError::Decode`] when the body cannot be decoded.
    pub fn fetch_page(
        &self,
        endpoint: &Url,
        query: &FeatureQuery,
    ) -> Result<FeaturePage, FetchError> {
        debug!("Requesting {} at offset {}", endpoint, query.offset());
        let response = self
            .http
            .get(endpoint.clone())
            .query(&query.to_params())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                url: response.url().to_string(),
            });
        }

        let body = response.text()?;
        let page = decode_page(&body)?;
        debug!(
            "Decoded {} record(s), crs {}",
            page.records.len(),
            page.crs
        );
        Ok(page)
    }

    /// Fetch every page of a query and concatenate the records.
    ///
    /// Pages are requested in sequence. After each page the offset advances
    /// by the number of records received, and fetching continues while the
    /// service reports `exceededTransferLimit: true`. A `false` flag ends
    /// the fetch; so does an absent flag, which the portal sends on final
    /// pages instead of `false`.
    ///
    /// Record order in the result is page order, and within a page the order
    /// the service returned.
    ///
    /// # Errors
    ///
    /// Any page failing fails the whole fetch with that page's error;
    /// records from earlier pages are discarded rather than returned
    /// partially.
    pub fn fetch_all(
        &self,
        endpoint: &Url,
        mut query: FeatureQuery,
    ) -> Result<FeatureCollection, FetchError> {
        let FeaturePage {
            records,
            crs,
            exceeded_transfer_limit,
        } = self.fetch_page(endpoint, &query)?;

        let mut collection = FeatureCollection::new(crs);
        let mut received = records.len();
        let mut flag = exceeded_transfer_limit;
        collection.records.extend(records);
        let mut pages = 1usize;

        loop {
            match flag {
                Some(false) => break,
                None => {
                    debug!("Continuation flag absent; treating as final page");
                    break;
                },
                Some(true) if received == 0 => {
                    warn!(
                        "Service reported more pages but sent no records; stopping at offset {}",
                        query.offset()
                    );
                    break;
                },
                Some(true) => query.advance(received),
            }

            let page = self.fetch_page(endpoint, &query)?;
            pages += 1;
            if page.crs != collection.crs {
                warn!(
                    "CRS changed from {} to {} at offset {}; keeping the first",
                    collection.crs,
                    page.crs,
                    query.offset()
                );
            }
            received = page.records.len();
            flag = page.exceeded_transfer_limit;
            collection.records.extend(page.records);
        }

        info!(
            "Fetched {} record(s) over {} page(s)",
            collection.len(),
            pages
        );
        Ok(collection)
    }
}

/// Fetch one page with a default client.
///
/// # Errors
///
/// See [`FeatureClient::fetch_page`].
pub fn fetch_page(endpoint: &Url, query: &FeatureQuery) -> Result<FeaturePage, FetchError> {
    FeatureClient::new().fetch_page(endpoint, query)
}

/// Fetch every page with a default client.
///
/// # Errors
///
/// See [`FeatureClient::fetch_all`].
pub fn fetch_all(endpoint: &Url, query: FeatureQuery) -> Result<FeatureCollection, FetchError> {
    FeatureClient::new().fetch_all(endpoint, query)
}
