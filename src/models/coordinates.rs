use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees.
///
/// Carries no range checks of its own: interactive readers and the random
/// sampler only produce values inside the configured [`Region`], and
/// [`Region::contains`] is the check for anything arriving another way.
///
/// [`Region`]: crate::models::Region
/// [`Region::contains`]: crate::models::Region::contains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinates { lon, lat }
    }
}
