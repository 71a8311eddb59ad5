//! Query parameters for the ArcGIS REST `/query` protocol.

/// Parameters for one feature-service query.
///
/// A query owns its parameters outright; nothing outside the pagination
/// driver mutates the offset, so two fetches built from the same values
/// always ask the service the same questions.
///
/// # Examples
///
/// ```
/// use geopull_client::FeatureQuery;
///
/// let query = FeatureQuery::new()
///     .with_where("LAD22CD = 'E09000007'")
///     .with_out_sr(27700)
///     .with_page_size(2000);
/// assert_eq!(query.offset(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureQuery {
    where_clause: String,
    out_fields: String,
    out_sr: u32,
    page_size: Option<u32>,
    offset: u64,
}

impl Default for FeatureQuery {
    /// An unfiltered query: every record, every field, WGS84 output,
    /// service-chosen page size, offset zero.
    fn default() -> Self {
        Self {
            where_clause: "1=1".to_string(),
            out_fields: "*".to_string(),
            out_sr: 4326,
            page_size: None,
            offset: 0,
        }
    }
}

impl FeatureQuery {
    /// Creates the default query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attribute filter expression (the `where` parameter).
    #[must_use]
    pub fn with_where(mut self, where_clause: impl Into<String>) -> Self {
        self.where_clause = where_clause.into();
        self
    }

    /// Sets the comma-separated list of fields to request (`outFields`).
    #[must_use]
    pub fn with_out_fields(mut self, out_fields: impl Into<String>) -> Self {
        self.out_fields = out_fields.into();
        self
    }

    /// Sets the output spatial reference identifier (`outSR`).
    #[must_use]
    pub fn with_out_sr(mut self, out_sr: u32) -> Self {
        self.out_sr = out_sr;
        self
    }

    /// Caps the number of records requested per page (`resultRecordCount`).
    ///
    /// The service may still return fewer records than requested; its own
    /// transfer limit wins when it is lower.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the starting record offset (`resultOffset`). Usually left at zero.
    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// The attribute filter expression.
    #[must_use]
    pub fn where_clause(&self) -> &str {
        &self.where_clause
    }

    /// The requested fields.
    #[must_use]
    pub fn out_fields(&self) -> &str {
        &self.out_fields
    }

    /// The output spatial reference identifier.
    #[must_use]
    pub fn out_sr(&self) -> u32 {
        self.out_sr
    }

    /// The per-page record cap, if one was set.
    #[must_use]
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// The current record offset.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Advance the offset by the number of records just received.
    pub(crate) fn advance(&mut self, records: usize) {
        self.offset += records as u64;
    }

    /// Render the query as wire parameters, always requesting `GeoJSON`.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("where", self.where_clause.clone()),
            ("outFields", self.out_fields.clone()),
            ("outSR", self.out_sr.to_string()),
            ("f", "geojson".to_string()),
            ("resultOffset", self.offset.to_string()),
        ];
        if let Some(page_size) = self.page_size {
            params.push(("resultRecordCount", page_size.to_string()));
        }
        params
    }
}
