use serde::{Deserialize, Serialize};

use crate::constants::{
    METERS_PER_DEG_LAT, METERS_PER_DEG_LON, ROI_LAT_MAX, ROI_LAT_MIN, ROI_LON_MAX, ROI_LON_MIN,
};
use crate::models::Coordinates;

/// Axis-aligned geographic box together with the planar conversion
/// coefficients that are valid inside it.
///
/// All coordinate validation and distance arithmetic goes through a `Region`
/// value rather than the raw constants, so tests can substitute a different
/// box or different coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
    /// Meters per degree of latitude inside the box.
    pub meters_per_deg_lat: f64,
    /// Meters per degree of longitude inside the box.
    pub meters_per_deg_lon: f64,
}

impl Default for Region {
    /// The compiled-in region of interest (western Lisbon area).
    fn default() -> Self {
        Region {
            lon_min: ROI_LON_MIN,
            lon_max: ROI_LON_MAX,
            lat_min: ROI_LAT_MIN,
            lat_max: ROI_LAT_MAX,
            meters_per_deg_lat: METERS_PER_DEG_LAT,
            meters_per_deg_lon: METERS_PER_DEG_LON,
        }
    }
}

impl Region {
    /// Whether the coordinates fall inside the box. Bounds are inclusive.
    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        (self.lon_min..=self.lon_max).contains(&coordinates.lon)
            && (self.lat_min..=self.lat_max).contains(&coordinates.lat)
    }
}
