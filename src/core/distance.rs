use geo::{HaversineDistance, Point};
use crate::models::{GeoPoint, MatchSubject};

/// Meters per statute mile
const METERS_PER_MILE: f64 = 1609.344;

/// Great-circle distance between two points in miles
///
/// Uses the haversine formula with the mean Earth radius.
#[inline]
pub fn distance_miles(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let from = Point::new(a.longitude, a.latitude);
    let to = Point::new(b.longitude, b.latitude);

    from.haversine_distance(&to) / METERS_PER_MILE
}

/// Human-readable distance between two users
pub fn distance_label(reference: &MatchSubject, candidate: &MatchSubject) -> String {
    describe_distance(distance_miles(&reference.location, &candidate.location))
}

/// Describe a mileage the way the suggestion list shows it
///
/// The mileage is rounded to a whole number first; beyond 50 miles it is
/// further rounded to the nearest 10.
pub fn describe_distance(miles: f64) -> String {
    let rounded = miles.round().max(0.0) as u64;

    match rounded {
        0 => "Less than 1 mile away".to_string(),
        1 => "1 mile away".to_string(),
        n if n < 10 => format!("{} miles away", n),
        n if n < 50 => format!("About {} miles away", n),
        n => {
            let tens = (n as f64 / 10.0).round() as u64 * 10;
            format!("Within {} miles", tens)
        }
    }
}
