use farpoint::input::Prompter;
use farpoint::models::{Coordinates, PointSet};
use std::io::Cursor;

/// A prompter fed from a canned input script, writing to an in-memory buffer.
#[allow(dead_code)]
pub fn scripted_prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Everything the prompter wrote, as text.
#[allow(dead_code)]
pub fn transcript(prompter: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(prompter.writer()).into_owned()
}

/// Build a point set from `(name, lon, lat)` triples, in order.
#[allow(dead_code)]
pub fn point_set(points: &[(&str, f64, f64)]) -> PointSet {
    let mut out = PointSet::new();
    for (name, lon, lat) in points {
        out.insert(*name, Coordinates::new(*lon, *lat));
    }
    out
}
