use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use validator::Validate;
use crate::models::domain::{MatchCandidate, Relationship, VisibilityTier};

/// One operation read from the command line boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    Rank(RankRequest),
    Project(ProjectRequest),
}

/// Request to rank people-to-follow suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub reference: MatchCandidate,
    #[serde(default)]
    pub candidates: Vec<MatchCandidate>,
    #[serde(default, alias = "exclude_ids", rename = "excludeIds")]
    pub exclude_ids: HashSet<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to redact a profile record for a viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub record: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub policy: HashMap<String, VisibilityTier>,
    pub relationship: Relationship,
}
