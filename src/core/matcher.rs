use std::collections::HashSet;
use crate::core::{distance::distance_label, filters::is_eligible, scoring::calculate_match_score};
use crate::error::MatchError;
use crate::models::{MatchCandidate, MatchResult};

/// Default number of suggestions returned by [`MatchScorer::rank_candidates`]
pub const DEFAULT_LIMIT: usize = 20;

/// Ranks people-to-follow suggestions for a reference user
///
/// # Pipeline Stages
/// 1. Drop excluded users, the reference user, and users without a location
/// 2. Score by distance and clinical similarity
/// 3. Stable sort by score, descending
/// 4. Truncate to the limit
#[derive(Debug, Clone)]
pub struct MatchScorer {
    default_limit: usize,
}

impl MatchScorer {
    pub fn new(default_limit: usize) -> Self {
        Self { default_limit }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank candidates against a reference user
    ///
    /// # Arguments
    /// * `reference` - The user suggestions are built for
    /// * `candidates` - Candidate pool, usually pre-sampled by the data layer
    /// * `exclude_ids` - Users that must not be suggested (e.g. already followed)
    /// * `limit` - Maximum number of results, `None` for the scorer default
    ///
    /// # Errors
    /// [`MatchError::MissingLocation`] when the reference has no usable location.
    /// Candidates without one are silently dropped.
    pub fn rank_candidates(
        &self,
        reference: &MatchCandidate,
        candidates: Vec<MatchCandidate>,
        exclude_ids: &HashSet<String>,
        limit: Option<usize>,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let origin = reference.subject().ok_or_else(|| MatchError::MissingLocation {
            user_id: reference.user_id.clone(),
        })?;

        let limit = limit.unwrap_or(self.default_limit);
        let pool_size = candidates.len();

        let mut ranked: Vec<MatchResult> = candidates
            .into_iter()
            .filter(|candidate| is_eligible(candidate, &reference.user_id, exclude_ids))
            .filter_map(|candidate| {
                let subject = candidate.subject()?;

                Some(MatchResult {
                    distance_label: distance_label(&origin, &subject),
                    score: calculate_match_score(&origin, &subject),
                    user_id: candidate.user_id,
                })
            })
            .collect();

        // sort_by is stable: equal scores keep their input order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let scored = ranked.len();
        ranked.truncate(limit);

        tracing::debug!(
            "Ranked suggestions for {}: pool={}, scored={}, returned={}",
            reference.user_id,
            pool_size,
            scored,
            ranked.len()
        );

        Ok(ranked)
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
