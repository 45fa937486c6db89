use crate::core::distance::distance_miles;
use crate::models::{ClinicalProfile, MatchSubject, ScoreBreakdown};

/// Distance sub-score buckets as (exclusive upper bound in miles, points)
const DISTANCE_BUCKETS: [(f64, u8); 5] = [(10.0, 50), (25.0, 40), (50.0, 30), (100.0, 20), (250.0, 10)];

/// Points for anything at or beyond the last bucket
const DISTANCE_FLOOR: u8 = 5;

const SUBTYPE_MATCH: u8 = 30;
const SUBTYPE_NEUTRAL: u8 = 10;
const GMFCS_NEUTRAL: u8 = 10;

/// Calculate a match score (0-100) for a candidate relative to a reference user
///
/// Scoring formula:
/// score = min(100,
///     distance_score +     # 0-50, closer = higher
///     subtype_score +      # 0-30, same CP subtype = higher
///     gmfcs_score          # 0-20, closer GMFCS level = higher
/// )
pub fn calculate_match_score(reference: &MatchSubject, candidate: &MatchSubject) -> u8 {
    score_breakdown(reference, candidate).total()
}

/// Component scores behind [`calculate_match_score`]
pub fn score_breakdown(reference: &MatchSubject, candidate: &MatchSubject) -> ScoreBreakdown {
    let miles = distance_miles(&reference.location, &candidate.location);

    ScoreBreakdown {
        distance: distance_score(miles),
        subtype: subtype_score(&reference.clinical, &candidate.clinical),
        gmfcs: gmfcs_score(&reference.clinical, &candidate.clinical),
    }
}

/// Distance sub-score (5-50)
/// Buckets are half-open, so a tie on a bound lands in the looser bucket
#[inline]
pub fn distance_score(miles: f64) -> u8 {
    DISTANCE_BUCKETS
        .iter()
        .find(|(bound, _)| miles < *bound)
        .map(|(_, points)| *points)
        .unwrap_or(DISTANCE_FLOOR)
}

/// CP subtype sub-score (10 or 30)
/// Unknown or absent on either side is neutral
#[inline]
pub fn subtype_score(a: &ClinicalProfile, b: &ClinicalProfile) -> u8 {
    match (a.known_subtype(), b.known_subtype()) {
        (Some(x), Some(y)) if x == y => SUBTYPE_MATCH,
        _ => SUBTYPE_NEUTRAL,
    }
}

/// GMFCS sub-score (5-20)
#[inline]
pub fn gmfcs_score(a: &ClinicalProfile, b: &ClinicalProfile) -> u8 {
    match (a.known_gmfcs(), b.known_gmfcs()) {
        (Some(x), Some(y)) => match x.abs_diff(y) {
            0 => 20,
            1 => 15,
            2 => 10,
            _ => 5,
        },
        _ => GMFCS_NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CpSubtype, GeoPoint, GmfcsLevel};

    fn clinical(subtype: Option<CpSubtype>, gmfcs: Option<GmfcsLevel>) -> ClinicalProfile {
        ClinicalProfile::new(subtype, gmfcs)
    }

    #[test]
    fn test_distance_score_buckets() {
        assert_eq!(distance_score(0.0), 50);
        assert_eq!(distance_score(9.99), 50);
        assert_eq!(distance_score(24.9), 40);
        assert_eq!(distance_score(49.9), 30);
        assert_eq!(distance_score(99.9), 20);
        assert_eq!(distance_score(249.9), 10);
        assert_eq!(distance_score(5000.0), 5);
    }

    #[test]
    fn test_distance_score_bounds_are_exclusive() {
        assert_eq!(distance_score(10.0), 40);
        assert_eq!(distance_score(25.0), 30);
        assert_eq!(distance_score(50.0), 20);
        assert_eq!(distance_score(100.0), 10);
        assert_eq!(distance_score(250.0), 5);
    }

    #[test]
    fn test_subtype_score() {
        let spastic = clinical(Some(CpSubtype::Spastic), None);
        let ataxic = clinical(Some(CpSubtype::Ataxic), None);
        let unknown = clinical(Some(CpSubtype::Unknown), None);
        let absent = clinical(None, None);

        assert_eq!(subtype_score(&spastic, &spastic), 30);
        assert_eq!(subtype_score(&spastic, &ataxic), 10);
        assert_eq!(subtype_score(&unknown, &spastic), 10);
        assert_eq!(subtype_score(&spastic, &unknown), 10);
        assert_eq!(subtype_score(&unknown, &unknown), 10);
        assert_eq!(subtype_score(&absent, &spastic), 10);
    }

    #[test]
    fn test_gmfcs_score() {
        let level = |l| clinical(None, Some(l));

        assert_eq!(gmfcs_score(&level(GmfcsLevel::III), &level(GmfcsLevel::III)), 20);
        assert_eq!(gmfcs_score(&level(GmfcsLevel::III), &level(GmfcsLevel::II)), 15);
        assert_eq!(gmfcs_score(&level(GmfcsLevel::I), &level(GmfcsLevel::III)), 10);
        assert_eq!(gmfcs_score(&level(GmfcsLevel::I), &level(GmfcsLevel::IV)), 5);
        assert_eq!(gmfcs_score(&level(GmfcsLevel::V), &level(GmfcsLevel::I)), 5);
        assert_eq!(gmfcs_score(&level(GmfcsLevel::Unknown), &level(GmfcsLevel::I)), 10);
        assert_eq!(gmfcs_score(&clinical(None, None), &level(GmfcsLevel::V)), 10);
    }

    #[test]
    fn test_calculate_match_score_maximum() {
        let profile = clinical(Some(CpSubtype::Dyskinetic), Some(GmfcsLevel::II));
        let here = MatchSubject::new(GeoPoint::new(40.7128, -74.0060), profile);

        let breakdown = score_breakdown(&here, &here);
        assert_eq!(breakdown, ScoreBreakdown { distance: 50, subtype: 30, gmfcs: 20 });
        assert_eq!(calculate_match_score(&here, &here), 100);
    }

    #[test]
    fn test_total_is_clamped() {
        let oversized = ScoreBreakdown { distance: 90, subtype: 90, gmfcs: 90 };
        assert_eq!(oversized.total(), 100);
    }
}
