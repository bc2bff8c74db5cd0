// Common model types

use serde::{Deserialize, Serialize};

/// Message envelope returned by create and edit
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub msg: String,
    /// Only present on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea_id: Option<String>,
}
