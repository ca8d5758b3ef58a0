//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Runtime knobs (output path, RNG seed) live in [`Config`](crate::config::Config).

// --- Region of interest (western Lisbon area) ---
// Every collected point must fall inside this box, whether typed in or
// randomly sampled. The planar distance coefficients below are only valid
// near these latitudes.

/// Southern edge of the region of interest, degrees.
pub const ROI_LAT_MIN: f64 = 38.7;
/// Northern edge of the region of interest, degrees.
pub const ROI_LAT_MAX: f64 = 38.78;
/// Western edge of the region of interest, degrees.
pub const ROI_LON_MIN: f64 = -9.2;
/// Eastern edge of the region of interest, degrees.
pub const ROI_LON_MAX: f64 = -9.1;

// --- Planar conversion coefficients ---

/// Meters per degree of latitude.
pub const METERS_PER_DEG_LAT: f64 = 111_120.0;
/// Meters per degree of longitude at the region's latitude (~38.7 N).
/// Roughly `METERS_PER_DEG_LAT * cos(lat)`, frozen so results are stable.
pub const METERS_PER_DEG_LON: f64 = 86_672.0;

// --- Point collection limits ---

/// Fewest points a session may collect. Two are needed for a pair.
pub const MIN_POINT_COUNT: i64 = 2;
/// Most points a session may collect.
pub const MAX_POINT_COUNT: i64 = 10;

// --- Plot defaults ---

/// Default scatter plot output path. Overridden by `PLOT_OUTPUT`.
pub const DEFAULT_PLOT_PATH: &str = "scatter.svg";
/// Plot canvas width in pixels.
pub const PLOT_WIDTH_PX: u32 = 800;
/// Plot canvas height in pixels.
pub const PLOT_HEIGHT_PX: u32 = 600;
/// Radius of each point marker in pixels.
pub const POINT_MARKER_RADIUS_PX: i32 = 4;
/// Vertical offset of a point's name label above its marker, pixels.
pub const POINT_LABEL_OFFSET_PX: i32 = 16;
/// Fraction of the data span added as margin on each side of the axes.
pub const AXIS_MARGIN_FRACTION: f64 = 0.05;
/// Minimum axis span in degrees, so coincident points still get a frame.
pub const MIN_AXIS_SPAN_DEG: f64 = 1e-3;
