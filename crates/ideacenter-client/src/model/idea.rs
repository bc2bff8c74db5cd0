// Idea model types

use serde::{Deserialize, Serialize};

/// Body sent to create and edit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl IdeaRequest {
    pub fn new(title: &str, description: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }
}

/// Idea as returned by the listing endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Idea {
    /// Whether title and description match the given request
    pub fn matches(&self, request: &IdeaRequest) -> bool {
        self.title == request.title && self.description == request.description
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
