use serde::Deserialize;

/// `?query=` of `/api/search`. Missing is the same as empty.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// `?name=` of `/api/person`, the name shown on the selected card.
#[derive(Debug, Deserialize)]
pub struct PersonParams {
    #[serde(default)]
    pub name: String,
}
