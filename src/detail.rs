use tracing::{info, warn};

use crate::data_models::PersonDetail;
use crate::error::{LookupError, Result};
use crate::tmdb::TmdbClient;

/// Resolves a person by name, then fetches their movie credits.
///
/// Only the name survives from a result card, so the person is searched
/// again and the first hit is taken as the match. The credits request waits
/// on that lookup because it needs the resolved id.
#[derive(Debug, Clone)]
pub struct DetailPipeline {
    client: TmdbClient,
}

impl DetailPipeline {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// `NotFound` when the name matches nobody; no credits request then.
    /// A failed credits request yields an empty filmography, not an error.
    pub async fn load(&self, person_name: &str) -> Result<PersonDetail> {
        let summary = self
            .client
            .search_person(person_name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound {
                name: person_name.to_string(),
            })?;

        let filmography = match self.client.movie_credits(summary.id).await {
            Ok(cast) => cast,
            Err(e) => {
                warn!(person_id = summary.id, "credits unavailable, showing none: {:#}", e);
                Vec::new()
            }
        };

        info!(
            person_id = summary.id,
            films = filmography.len(),
            "person detail loaded"
        );
        Ok(PersonDetail {
            summary,
            filmography,
        })
    }
}
