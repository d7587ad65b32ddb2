use serde::Deserialize;

use crate::error::{LookupError, Result};

/// User input, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw_input: &str) -> Result<SearchQuery> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::Validation);
        }
        Ok(SearchQuery(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A credited work or known-for entry. Upstream uses `title` for movies and
/// `name` for tv; an entry with neither keeps an empty title.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawTitledEntry")]
pub struct TitledEntry {
    pub title: String,
}

#[derive(Deserialize)]
struct RawTitledEntry {
    title: Option<String>,
    name: Option<String>,
}

impl From<RawTitledEntry> for TitledEntry {
    fn from(raw: RawTitledEntry) -> Self {
        // empty strings are falsy upstream-side too, so "" falls through to name
        let title = raw
            .title
            .filter(|t| !t.is_empty())
            .or(raw.name)
            .unwrap_or_default();
        TitledEntry { title }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PersonSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub known_for: Option<Vec<TitledEntry>>,
}

impl PersonSummary {
    /// Full image reference, falling back to `default_image` when upstream
    /// has no (or an empty) profile path.
    pub fn image_url(&self, image_base_url: &str, default_image: &str) -> String {
        match self.profile_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{image_base_url}{path}"),
            _ => default_image.to_string(),
        }
    }
}

/// Search results in upstream relevance order. Empty is a normal outcome.
pub type ResultSet = Vec<PersonSummary>;

#[derive(Debug, Clone, PartialEq)]
pub struct PersonDetail {
    pub summary: PersonSummary,
    pub filmography: Vec<TitledEntry>,
}

/// `GET /search/person` body.
#[derive(Deserialize, Debug)]
pub struct PersonSearchResponse {
    pub results: Vec<PersonSummary>,
}

/// `GET /person/{id}/movie_credits` body.
#[derive(Deserialize, Debug)]
pub struct MovieCreditsResponse {
    pub cast: Vec<TitledEntry>,
}
