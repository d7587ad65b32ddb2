use tracing::info;

use crate::data_models::{ResultSet, SearchQuery};
use crate::error::Result;
use crate::tmdb::TmdbClient;

/// Free text in, person summaries out.
///
/// Calls are independent: overlapping searches are not coordinated or
/// cancelled here, so whoever renders must discard stale answers itself.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    client: TmdbClient,
}

impl SearchPipeline {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// Blank input fails with `Validation` before any request is made.
    /// Otherwise exactly one GET; upstream order is kept as-is.
    pub async fn search(&self, raw_input: &str) -> Result<ResultSet> {
        let query = SearchQuery::parse(raw_input)?;
        let results = self.client.search_person(query.as_str()).await?;
        info!(query = query.as_str(), count = results.len(), "person search done");
        Ok(results)
    }
}
