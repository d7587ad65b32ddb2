use reqwest::StatusCode;
use thiserror::Error;

pub const ENTER_A_NAME: &str = "Please enter an actor's name.";
pub const GENERIC_FAILURE: &str = "Something went wrong while searching. Please try again.";
pub const DETAILS_NOT_FOUND: &str = "Actor details not found. Please try again.";

#[derive(Error, Debug)]
pub enum LookupError {
    /// Empty or whitespace-only input; never reaches the network.
    #[error("search query is empty")]
    Validation,
    #[error("request to upstream failed: {0}")]
    Network(#[source] reqwest::Error),
    /// Non-2xx answer. A missing or bad credential lands here as 401.
    #[error("upstream responded with status {status}")]
    Upstream { status: StatusCode },
    #[error("no person matched {name:?}")]
    NotFound { name: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;

impl LookupError {
    /// Text shown to the user in place of results.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::Validation => ENTER_A_NAME,
            LookupError::NotFound { .. } => DETAILS_NOT_FOUND,
            LookupError::Network(_) | LookupError::Upstream { .. } | LookupError::Decode(_) => {
                GENERIC_FAILURE
            }
        }
    }
}
