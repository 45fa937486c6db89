use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for a rank command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for a project command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub profile: serde_json::Map<String, serde_json::Value>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
