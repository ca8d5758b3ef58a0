//! Scatter plot output.
//!
//! Rendering sits behind the [`Renderer`] trait so the interactive flow does
//! not care whether a plot file is produced. [`SvgScatter`] writes an SVG
//! scatter plot; [`NoopRenderer`] drops the points, for headless runs and
//! tests that only exercise the flow.

use std::path::PathBuf;

use plotters::prelude::*;

use crate::constants::{
    AXIS_MARGIN_FRACTION, MIN_AXIS_SPAN_DEG, PLOT_HEIGHT_PX, PLOT_WIDTH_PX,
    POINT_LABEL_OFFSET_PX, POINT_MARKER_RADIUS_PX,
};
use crate::error::{AppError, Result};
use crate::models::PointSet;

pub trait Renderer {
    /// Render the collected points. Must not mutate them.
    fn render(&self, points: &PointSet) -> Result<()>;
}

/// Writes a scatter plot as an SVG file: longitude on x, latitude on y, a
/// grid, and each point's name drawn just above its marker.
pub struct SvgScatter {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SvgScatter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SvgScatter {
            path: path.into(),
            width: PLOT_WIDTH_PX,
            height: PLOT_HEIGHT_PX,
        }
    }
}

impl Renderer for SvgScatter {
    fn render(&self, points: &PointSet) -> Result<()> {
        let root = SVGBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let Some(((lon_lo, lon_hi), (lat_lo, lat_hi))) = padded_bounds(points) else {
            // Nothing to plot. Still emit a valid, blank SVG.
            root.present().map_err(render_err)?;
            return Ok(());
        };

        let mut chart = ChartBuilder::on(&root)
            .caption("Scatter Plot of Points", ("sans-serif", 22).into_font())
            .margin(18)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(lon_lo..lon_hi, lat_lo..lat_hi)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Lon")
            .y_desc("Lat")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(points.iter().map(|(name, coordinates)| {
                EmptyElement::at((coordinates.lon, coordinates.lat))
                    + Circle::new((0, 0), POINT_MARKER_RADIUS_PX, BLUE.filled())
                    + Text::new(
                        name.to_string(),
                        (0, -POINT_LABEL_OFFSET_PX),
                        ("sans-serif", 13).into_font(),
                    )
            }))
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        tracing::info!("Scatter plot written to {}", self.path.display());
        Ok(())
    }
}

/// Discards the points. For test and headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&self, _points: &PointSet) -> Result<()> {
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

/// Axis ranges covering the data envelope plus a margin, or `None` for an
/// empty set. A minimum span keeps coincident points from collapsing the
/// axes to zero width.
fn padded_bounds(points: &PointSet) -> Option<((f64, f64), (f64, f64))> {
    if points.is_empty() {
        return None;
    }

    let mut lon_lo = f64::INFINITY;
    let mut lon_hi = f64::NEG_INFINITY;
    let mut lat_lo = f64::INFINITY;
    let mut lat_hi = f64::NEG_INFINITY;

    for (_, coordinates) in points.iter() {
        lon_lo = lon_lo.min(coordinates.lon);
        lon_hi = lon_hi.max(coordinates.lon);
        lat_lo = lat_lo.min(coordinates.lat);
        lat_hi = lat_hi.max(coordinates.lat);
    }

    Some((pad_span(lon_lo, lon_hi), pad_span(lat_lo, lat_hi)))
}

fn pad_span(lo: f64, hi: f64) -> (f64, f64) {
    let margin = (hi - lo) * AXIS_MARGIN_FRACTION;
    let (lo, hi) = (lo - margin, hi + margin);
    if hi - lo >= MIN_AXIS_SPAN_DEG {
        return (lo, hi);
    }
    let pad = (MIN_AXIS_SPAN_DEG - (hi - lo)) / 2.0;
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn set(points: &[(&str, f64, f64)]) -> PointSet {
        let mut out = PointSet::new();
        for (name, lon, lat) in points {
            out.insert(*name, Coordinates::new(*lon, *lat));
        }
        out
    }

    #[test]
    fn svg_contains_axis_titles_and_point_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scatter.svg");
        let points = set(&[
            ("harbor", -9.18, 38.71),
            ("castle", -9.13, 38.76),
            ("park", -9.15, 38.74),
        ]);

        SvgScatter::new(&path).render(&points).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
        assert!(svg.contains("Scatter Plot of Points"));
        assert!(svg.contains("Lon"));
        assert!(svg.contains("Lat"));
        for name in ["harbor", "castle", "park"] {
            assert!(svg.contains(name), "missing label {name}");
        }
    }

    #[test]
    fn coincident_points_still_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.svg");
        let points = set(&[("a", -9.15, 38.74), ("b", -9.15, 38.74)]);

        SvgScatter::new(&path).render(&points).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_set_renders_a_blank_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        SvgScatter::new(&path).render(&PointSet::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_a_render_error() {
        let points = set(&[("a", -9.15, 38.74)]);
        let result = SvgScatter::new("/no/such/directory/out.svg").render(&points);
        assert!(matches!(result, Err(AppError::Render(_))));
    }

    #[test]
    fn noop_renderer_accepts_anything() {
        NoopRenderer.render(&PointSet::new()).unwrap();
        NoopRenderer.render(&set(&[("a", -9.15, 38.74)])).unwrap();
    }

    #[test]
    fn bounds_pad_the_envelope() {
        let points = set(&[("w", -9.2, 38.7), ("e", -9.1, 38.78)]);
        let ((lon_lo, lon_hi), (lat_lo, lat_hi)) = padded_bounds(&points).unwrap();

        assert!(lon_lo < -9.2 && lon_hi > -9.1);
        assert!(lat_lo < 38.7 && lat_hi > 38.78);
        let lon_margin = 0.1 * AXIS_MARGIN_FRACTION;
        assert!((lon_lo - (-9.2 - lon_margin)).abs() < 1e-12);
        assert!((lon_hi - (-9.1 + lon_margin)).abs() < 1e-12);
    }

    #[test]
    fn bounds_enforce_a_minimum_span() {
        let points = set(&[("only", -9.15, 38.74)]);
        let ((lon_lo, lon_hi), (lat_lo, lat_hi)) = padded_bounds(&points).unwrap();

        assert!((lon_hi - lon_lo - MIN_AXIS_SPAN_DEG).abs() < 1e-12);
        assert!((lat_hi - lat_lo - MIN_AXIS_SPAN_DEG).abs() < 1e-12);
        assert!(((lon_lo + lon_hi) / 2.0 - (-9.15)).abs() < 1e-12);
        assert!(((lat_lo + lat_hi) / 2.0 - 38.74).abs() < 1e-12);
    }

    #[test]
    fn empty_set_has_no_bounds() {
        assert!(padded_bounds(&PointSet::new()).is_none());
    }
}
