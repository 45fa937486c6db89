use serde_json::{Map, Value};
use crate::models::{Relationship, VisibilityPolicy, VisibilityTier};

/// Projects profile records down to the fields a viewer may see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFilter {
    fallback: VisibilityTier,
}

impl VisibilityFilter {
    /// Filter that treats fields with no policy and no default as public
    pub fn new() -> Self {
        Self::with_fallback(VisibilityTier::Public)
    }

    /// Filter with a custom tier for fields with no policy and no default
    pub fn with_fallback(fallback: VisibilityTier) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> VisibilityTier {
        self.fallback
    }

    /// Copy the keys of `record` the viewer is entitled to see
    ///
    /// Withheld keys are left out entirely rather than nulled. The owner
    /// always gets the whole record; private fields never reach anyone else.
    pub fn project(
        &self,
        record: &Map<String, Value>,
        policy: &VisibilityPolicy,
        relationship: Relationship,
        defaults: &VisibilityPolicy,
    ) -> Map<String, Value> {
        if relationship.is_owner {
            return record.clone();
        }

        record
            .iter()
            .filter(|(key, _)| {
                let tier = policy.effective_tier(key, defaults, self.fallback);
                let visible = is_visible(tier, relationship);
                if !visible {
                    tracing::trace!("Withholding {} ({:?})", key, tier);
                }
                visible
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Project with the public fallback
pub fn project(
    record: &Map<String, Value>,
    policy: &VisibilityPolicy,
    relationship: Relationship,
    defaults: &VisibilityPolicy,
) -> Map<String, Value> {
    VisibilityFilter::new().project(record, policy, relationship, defaults)
}

/// Whether a field at `tier` is visible under `relationship`
#[inline]
pub fn is_visible(tier: VisibilityTier, relationship: Relationship) -> bool {
    if relationship.is_owner {
        return true;
    }

    match tier {
        VisibilityTier::Public => true,
        VisibilityTier::Followers => relationship.is_follower,
        VisibilityTier::Private => false,
    }
}
