//! Render models for the presentation layer.
//!
//! Pipeline outcomes are converted here; every `LookupError` becomes a
//! user-facing message and never reaches the page as a failure.

use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::data_models::{PersonDetail, PersonSummary, ResultSet};
use crate::error::{DETAILS_NOT_FOUND, LookupError, Result};

pub const NO_RESULTS: &str = "No actors found. Please try a different search.";
pub const NO_FILMS: &str = "No films found for this actor.";

#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub base_url: String,
    pub default_image: String,
}

impl ImageSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.image_base_url.clone(),
            default_image: config.default_image.clone(),
        }
    }

    pub fn resolve(&self, person: &PersonSummary) -> String {
        person.image_url(&self.base_url, &self.default_image)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u64,
    pub name: String,
    pub image: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    Prompt { message: String },
    Failed { message: String },
    Empty { message: String },
    Cards { cards: Vec<Card> },
}

impl ResultsView {
    pub fn from_outcome(outcome: Result<ResultSet>, images: &ImageSettings) -> Self {
        match outcome {
            Ok(results) if results.is_empty() => ResultsView::Empty {
                message: NO_RESULTS.to_string(),
            },
            Ok(results) => ResultsView::Cards {
                cards: results
                    .iter()
                    .map(|person| Card {
                        id: person.id,
                        name: person.name.clone(),
                        image: images.resolve(person),
                    })
                    .collect(),
            },
            Err(LookupError::Validation) => ResultsView::Prompt {
                message: LookupError::Validation.user_message().to_string(),
            },
            Err(e) => {
                warn!("search failed: {}", e);
                ResultsView::Failed {
                    message: e.user_message().to_string(),
                }
            }
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    /// Zero matches, or the identity lookup itself failed.
    NotFound {
        message: String,
    },
    Profile {
        id: u64,
        name: String,
        image: String,
        known_for: String,
        popularity: String,
        filmography: Vec<String>,
        filmography_note: Option<String>,
    },
}

impl DetailView {
    pub fn from_outcome(outcome: Result<PersonDetail>, images: &ImageSettings) -> Self {
        let detail = match outcome {
            Ok(detail) => detail,
            Err(e) => {
                if !matches!(e, LookupError::NotFound { .. }) {
                    warn!("detail lookup failed: {}", e);
                }
                return DetailView::NotFound {
                    message: DETAILS_NOT_FOUND.to_string(),
                };
            }
        };

        let person = &detail.summary;
        let known_for = match &person.known_for {
            // blank titles are kept, so "A, , B" is possible
            Some(entries) => format!(
                "Known for: {}",
                entries
                    .iter()
                    .map(|e| e.title.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            None => "Known for: N/A".to_string(),
        };
        let popularity = match person.popularity {
            Some(p) => format!("Popularity: {p}"),
            None => "Popularity: N/A".to_string(),
        };
        let filmography: Vec<String> = detail.filmography.iter().map(|f| f.title.clone()).collect();
        let filmography_note = filmography.is_empty().then(|| NO_FILMS.to_string());

        DetailView::Profile {
            id: person.id,
            name: person.name.clone(),
            image: images.resolve(person),
            known_for,
            popularity,
            filmography,
            filmography_note,
        }
    }
}
