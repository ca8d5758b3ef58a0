//! Point collection: one name prompt per point, coordinates either typed in
//! or sampled uniformly from the region.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rand::{Rng, RngExt};

use crate::error::Result;
use crate::input::Prompter;
use crate::models::{Coordinates, PointSet, Region};

/// Where coordinates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The user types longitude and latitude for each point.
    UserProvided,
    /// Longitude and latitude are drawn uniformly from the region.
    Random,
}

impl Mode {
    /// The answers accepted at the mode prompt, in display order.
    pub const CHOICES: [&'static str; 2] = ["u", "r"];
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "u" => Ok(Mode::UserProvided),
            "r" => Ok(Mode::Random),
            _ => Err(format!("Invalid mode: {}. Use 'u' or 'r'", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::UserProvided => write!(f, "u"),
            Mode::Random => write!(f, "r"),
        }
    }
}

/// Collect `count` named points.
///
/// Runs exactly `count` prompt iterations. Names are free-form and not
/// deduplicated up front: a repeated name overwrites the earlier entry, so
/// the returned set can hold fewer than `count` points. Every coordinate
/// lies inside `region`, typed ones because the readers enforce the bounds,
/// sampled ones by construction.
pub fn collect_points<R: BufRead, W: Write, G: Rng>(
    prompter: &mut Prompter<R, W>,
    count: usize,
    mode: Mode,
    region: &Region,
    rng: &mut G,
) -> Result<PointSet> {
    let mut points = PointSet::new();

    for i in 1..=count {
        let name = prompter.read_name(&format!("Name for point {}: ", i))?;
        let coordinates = match mode {
            Mode::UserProvided => {
                let lon = prompter.read_decimal("Longitude: ", region.lon_min, region.lon_max)?;
                let lat = prompter.read_decimal("Latitude: ", region.lat_min, region.lat_max)?;
                Coordinates::new(lon, lat)
            }
            Mode::Random => {
                let lon = rng.random_range(region.lon_min..=region.lon_max);
                let lat = rng.random_range(region.lat_min..=region.lat_max);
                tracing::debug!("Sampled ({:.6}, {:.6}) for '{}'", lon, lat, name);
                Coordinates::new(lon, lat)
            }
        };
        points.insert(name, coordinates);
    }

    Ok(points)
}
