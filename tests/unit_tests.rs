// Unit tests for CP Social core

use cp_social_core::core::{
    distance::{describe_distance, distance_label, distance_miles},
    scoring::{calculate_match_score, distance_score, gmfcs_score, score_breakdown, subtype_score},
    visibility::is_visible,
};
use cp_social_core::models::{
    ClinicalProfile, CpSubtype, GeoPoint, GmfcsLevel, MatchSubject, Relationship, VisibilityTier,
};

const ALL_SUBTYPES: [Option<CpSubtype>; 6] = [
    None,
    Some(CpSubtype::Spastic),
    Some(CpSubtype::Dyskinetic),
    Some(CpSubtype::Ataxic),
    Some(CpSubtype::Mixed),
    Some(CpSubtype::Unknown),
];

const ALL_LEVELS: [Option<GmfcsLevel>; 7] = [
    None,
    Some(GmfcsLevel::I),
    Some(GmfcsLevel::II),
    Some(GmfcsLevel::III),
    Some(GmfcsLevel::IV),
    Some(GmfcsLevel::V),
    Some(GmfcsLevel::Unknown),
];

fn subject(lat: f64, lon: f64, subtype: Option<CpSubtype>, gmfcs: Option<GmfcsLevel>) -> MatchSubject {
    MatchSubject::new(GeoPoint::new(lat, lon), ClinicalProfile::new(subtype, gmfcs))
}

#[test]
fn test_distance_known_value() {
    // One degree of latitude along a meridian is ~69.09 miles
    let a = GeoPoint::new(37.0, -122.0);
    let b = GeoPoint::new(38.0, -122.0);

    let miles = distance_miles(&a, &b);
    assert!((miles - 69.09).abs() < 0.1, "Expected ~69.09mi, got {}", miles);
}

#[test]
fn test_distance_buckets_at_exact_bounds() {
    assert_eq!(distance_score(10.0), 40);
    assert_eq!(distance_score(25.0), 30);
    assert_eq!(distance_score(50.0), 20);
    assert_eq!(distance_score(100.0), 10);
    assert_eq!(distance_score(250.0), 5);
}

#[test]
fn test_distance_buckets_just_inside() {
    assert_eq!(distance_score(9.999), 50);
    assert_eq!(distance_score(24.999), 40);
    assert_eq!(distance_score(49.999), 30);
    assert_eq!(distance_score(99.999), 20);
    assert_eq!(distance_score(249.999), 10);
}

#[test]
fn test_neutral_subtype_baseline() {
    let unknown = ClinicalProfile::new(Some(CpSubtype::Unknown), None);
    let spastic = ClinicalProfile::new(Some(CpSubtype::Spastic), None);
    let dyskinetic = ClinicalProfile::new(Some(CpSubtype::Dyskinetic), None);

    let unknown_vs_spastic = subtype_score(&unknown, &spastic);
    let spastic_vs_unknown = subtype_score(&spastic, &unknown);
    let both_unknown = subtype_score(&unknown, &unknown);

    assert_eq!(unknown_vs_spastic, 10);
    assert_eq!(spastic_vs_unknown, 10);
    assert_eq!(both_unknown, 10);
    // A real mismatch scores the same baseline, never less
    assert_eq!(subtype_score(&spastic, &dyskinetic), 10);
}

#[test]
fn test_gmfcs_monotonic_then_plateau() {
    let at = |level| ClinicalProfile::new(None, Some(level));
    let reference = at(GmfcsLevel::I);

    let by_difference: Vec<u8> = [GmfcsLevel::I, GmfcsLevel::II, GmfcsLevel::III, GmfcsLevel::IV, GmfcsLevel::V]
        .iter()
        .map(|&level| gmfcs_score(&reference, &at(level)))
        .collect();

    assert_eq!(by_difference, vec![20, 15, 10, 5, 5]);
    for pair in by_difference[..4].windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

#[test]
fn test_gmfcs_unknown_is_neutral() {
    let unknown = ClinicalProfile::new(None, Some(GmfcsLevel::Unknown));
    let absent = ClinicalProfile::default();
    let level_five = ClinicalProfile::new(None, Some(GmfcsLevel::V));

    assert_eq!(gmfcs_score(&unknown, &level_five), 10);
    assert_eq!(gmfcs_score(&absent, &level_five), 10);
    assert_eq!(gmfcs_score(&unknown, &absent), 10);
}

#[test]
fn test_score_bounded_and_symmetric() {
    let points = [(37.77, -122.42), (37.93, -122.42), (38.5, -121.0), (40.7128, -74.0060)];

    for &(lat_a, lon_a) in &points {
        for &(lat_b, lon_b) in &points {
            for subtype_a in ALL_SUBTYPES {
                for subtype_b in ALL_SUBTYPES {
                    for level_a in ALL_LEVELS {
                        for level_b in ALL_LEVELS {
                            let a = subject(lat_a, lon_a, subtype_a, level_a);
                            let b = subject(lat_b, lon_b, subtype_b, level_b);

                            let forward = calculate_match_score(&a, &b);
                            let backward = calculate_match_score(&b, &a);

                            assert!(forward <= 100);
                            assert!(forward >= 20, "Minimum is 5 + 10 + 5, got {}", forward);
                            assert_eq!(forward, backward);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_breakdown_components() {
    let reference = subject(37.77, -122.42, Some(CpSubtype::Spastic), Some(GmfcsLevel::III));
    let candidate = subject(37.93, -122.42, Some(CpSubtype::Spastic), Some(GmfcsLevel::II));

    let breakdown = score_breakdown(&reference, &candidate);

    assert_eq!(breakdown.distance, 40);
    assert_eq!(breakdown.subtype, 30);
    assert_eq!(breakdown.gmfcs, 15);
    assert_eq!(breakdown.total(), 85);
}

#[test]
fn test_distance_label_uses_rounded_miles() {
    let here = subject(37.77, -122.42, None, None);

    assert_eq!(distance_label(&here, &subject(37.775, -122.42, None, None)), "Less than 1 mile away");
    assert_eq!(distance_label(&here, &subject(37.7845, -122.42, None, None)), "1 mile away");
    assert_eq!(distance_label(&here, &subject(37.87, -122.42, None, None)), "7 miles away");
    assert_eq!(distance_label(&here, &subject(38.27, -122.42, None, None)), "About 35 miles away");
    assert_eq!(distance_label(&here, &subject(38.77, -122.42, None, None)), "Within 70 miles");
}

#[test]
fn test_describe_distance_rounds_to_tens() {
    assert_eq!(describe_distance(54.4), "Within 50 miles");
    assert_eq!(describe_distance(55.0), "Within 60 miles");
    assert_eq!(describe_distance(104.0), "Within 100 miles");
}

#[test]
fn test_visibility_gate() {
    assert!(is_visible(VisibilityTier::Followers, Relationship::follower()));
    assert!(!is_visible(VisibilityTier::Followers, Relationship::stranger()));
    assert!(!is_visible(VisibilityTier::Private, Relationship::follower()));
    assert!(is_visible(VisibilityTier::Private, Relationship::owner()));
}

#[test]
fn test_relationship_between() {
    assert_eq!(Relationship::between("u1", "u1", false), Relationship::owner());
    assert_eq!(Relationship::between("u2", "u1", true), Relationship::follower());
    assert_eq!(Relationship::between("u2", "u1", false), Relationship::stranger());
}
