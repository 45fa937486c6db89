// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod visibility;

pub use distance::{describe_distance, distance_label, distance_miles};
pub use filters::is_eligible;
pub use matcher::{MatchScorer, DEFAULT_LIMIT};
pub use scoring::{calculate_match_score, score_breakdown};
pub use visibility::{is_visible, project, VisibilityFilter};
