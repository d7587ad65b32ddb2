//! Shared request helper for the upstream movie-metadata API.
//!
//! Every request is `base URL + endpoint + "?" + query string`, with the
//! credential always sent as the first `api_key` parameter. Values are
//! percent-encoded (a space becomes `%20`, not `+`).

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::data_models::{MovieCreditsResponse, PersonSearchResponse, PersonSummary, TitledEntry};
use crate::error::{LookupError, Result};

pub const SEARCH_PERSON_ENDPOINT: &str = "/search/person";

#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> reqwest::Result<TmdbClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(TmdbClient {
            http: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    pub fn search_person_url(&self, name: &str) -> String {
        self.endpoint_url(SEARCH_PERSON_ENDPOINT, &[("query", name)])
    }

    pub fn movie_credits_url(&self, person_id: u64) -> String {
        self.endpoint_url(
            &format!("/person/{person_id}/movie_credits"),
            &[("language", self.language.as_str())],
        )
    }

    /// Single GET, no retries. Transport failures become `Network`, non-2xx
    /// becomes `Upstream`, a body of the wrong shape becomes `Decode`.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, url: &str) -> Result<T> {
        debug!(endpoint, "GET upstream");
        // without_url: the url carries the credential
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            debug!(endpoint, %status, "upstream rejected request");
            return Err(LookupError::Upstream { status });
        }

        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Network(e.without_url()))?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn search_person(&self, name: &str) -> Result<Vec<PersonSummary>> {
        let url = self.search_person_url(name);
        let response: PersonSearchResponse = self.get_json(SEARCH_PERSON_ENDPOINT, &url).await?;
        Ok(response.results)
    }

    pub async fn movie_credits(&self, person_id: u64) -> Result<Vec<TitledEntry>> {
        let url = self.movie_credits_url(person_id);
        let response: MovieCreditsResponse = self.get_json("/person/{id}/movie_credits", &url).await?;
        Ok(response.cast)
    }
}
