//! Planar distance approximation and the farthest-pair scan.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, PointSet, Region};

/// Approximate distance in meters between two coordinate pairs, treating the
/// region as a flat plane with fixed meters-per-degree factors per axis.
/// Only valid for points inside (or near) the region the factors were chosen
/// for; this is not a geodesic formula.
pub fn planar_distance_m(p1: &Coordinates, p2: &Coordinates, region: &Region) -> f64 {
    let lat_diff = p2.lat - p1.lat;
    let lon_diff = p2.lon - p1.lon;
    ((lat_diff * region.meters_per_deg_lat).powi(2)
        + (lon_diff * region.meters_per_deg_lon).powi(2))
    .sqrt()
}

/// The two point names farthest apart, with their distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarthestPair {
    pub first: String,
    pub second: String,
    pub distance_m: f64,
}

/// Scan every ordered pair of points, self-pairs included, and return the
/// farthest one. `None` only for an empty set.
///
/// The running maximum updates on `>=`, so among equally distant pairs the
/// one visited last wins. Iteration follows insertion order, which makes the
/// winner deterministic: with exactly two distinct points the reversed pair
/// `(second, first)` is the last one at the maximum, and with all points
/// coincident both names are the last inserted name (the final self-pair ties
/// at zero). Callers depend on this exact tie-break.
pub fn farthest_pair(points: &PointSet, region: &Region) -> Option<FarthestPair> {
    let mut best: Option<FarthestPair> = None;
    let mut max_distance = 0.0_f64;

    for (name_1, p1) in points.iter() {
        for (name_2, p2) in points.iter() {
            let distance = planar_distance_m(p1, p2, region);
            if distance >= max_distance {
                max_distance = distance;
                best = Some(FarthestPair {
                    first: name_1.to_string(),
                    second: name_2.to_string(),
                    distance_m: distance,
                });
            }
        }
    }

    best
}
