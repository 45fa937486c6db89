// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AccessibilityPrefs, ClinicalProfile, CpSubtype, GeoPoint, GmfcsLevel, MatchCandidate, MatchResult,
    MatchSubject, ProfileField, ProfileFields, Relationship, ScoreBreakdown, UnknownField, VisibilityPolicy,
    VisibilityTier,
};
pub use requests::{Command, ProjectRequest, RankRequest};
pub use responses::{ErrorResponse, ProjectResponse, RankResponse};
