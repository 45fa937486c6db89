use std::collections::HashSet;
use crate::models::MatchCandidate;

/// Check whether a candidate may be suggested to the reference user
///
/// This is Stage 1 of the ranking pipeline: the reference user and
/// anyone in `exclude_ids` are never suggested.
#[inline]
pub fn is_eligible(candidate: &MatchCandidate, reference_id: &str, exclude_ids: &HashSet<String>) -> bool {
    candidate.user_id != reference_id && !exclude_ids.contains(&candidate.user_id)
}
