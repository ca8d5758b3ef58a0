//! The interactive flow, end to end.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::collect::{collect_points, Mode};
use crate::constants::{MAX_POINT_COUNT, MIN_POINT_COUNT};
use crate::distance::{farthest_pair, FarthestPair};
use crate::error::{AppError, Result};
use crate::input::Prompter;
use crate::models::{PointSet, Region};
use crate::render::Renderer;

/// Everything a finished session produced, for callers that want to inspect
/// more than the printed transcript.
#[derive(Debug)]
pub struct SessionOutcome {
    pub points: PointSet,
    pub farthest: Option<FarthestPair>,
}

/// Run one session: ask for the point count and mode, collect the points,
/// report the farthest pair on the prompter's output, then render.
///
/// The farthest-pair line is printed before rendering, so the answer is out
/// even if plot output fails. `farthest` is always `Some` here: at least two
/// collection prompts run, and inserting never leaves the set empty.
pub fn run<R: BufRead, W: Write, G: Rng>(
    prompter: &mut Prompter<R, W>,
    region: &Region,
    rng: &mut G,
    renderer: &dyn Renderer,
) -> Result<SessionOutcome> {
    let count = prompter.read_integer("Number of points: ", MIN_POINT_COUNT, MAX_POINT_COUNT)?;
    let raw_mode = prompter.read_choice("User provided (u) or random (r): ", &Mode::CHOICES)?;
    let mode: Mode = raw_mode.parse().map_err(AppError::InvalidMode)?;

    tracing::info!("Collecting {} points (mode: {})", count, mode);
    let points = collect_points(prompter, count as usize, mode, region, rng)?;

    let farthest = farthest_pair(&points, region);
    if let Some(pair) = &farthest {
        prompter.write_line(&format!(
            "{} and {} are farthest apart",
            pair.first, pair.second
        ))?;
        tracing::info!(
            "Farthest pair: '{}' and '{}', {:.1} m apart",
            pair.first,
            pair.second,
            pair.distance_m
        );
    }

    renderer.render(&points)?;

    Ok(SessionOutcome { points, farthest })
}
