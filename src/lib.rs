//! CP Social core - people matching and profile privacy for a cerebral palsy community network
//!
//! This library provides the two pieces of domain logic the web application relies on:
//! ranking people-to-follow suggestions by proximity and clinical similarity, and
//! redacting profile records according to each member's field-level visibility policy.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, distance_label, project, MatchScorer, VisibilityFilter};
pub use error::{Error, MatchError};
pub use models::{
    ClinicalProfile, CpSubtype, GeoPoint, GmfcsLevel, MatchCandidate, MatchResult, MatchSubject, ProfileField,
    Relationship, VisibilityPolicy, VisibilityTier,
};
