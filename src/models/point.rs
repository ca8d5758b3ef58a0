use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Named points in insertion order.
///
/// Names are unique: re-inserting an existing name replaces its coordinates
/// but keeps its original position. Iteration order is part of the contract,
/// the farthest-pair tie-break depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointSet {
    entries: Vec<(String, Coordinates)>,
}

impl PointSet {
    pub fn new() -> Self {
        PointSet::default()
    }

    /// Insert or overwrite a named point.
    pub fn insert(&mut self, name: impl Into<String>, coordinates: Coordinates) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = coordinates,
            None => self.entries.push((name, coordinates)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Coordinates> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, coordinates)| coordinates)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Coordinates)> {
        self.entries
            .iter()
            .map(|(name, coordinates)| (name.as_str(), coordinates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut points = PointSet::new();
        points.insert("beta", Coordinates::new(-9.15, 38.72));
        points.insert("alpha", Coordinates::new(-9.12, 38.75));
        points.insert("gamma", Coordinates::new(-9.18, 38.71));

        let names: Vec<&str> = points.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn reinsert_overwrites_in_place() {
        let mut points = PointSet::new();
        points.insert("a", Coordinates::new(-9.15, 38.72));
        points.insert("b", Coordinates::new(-9.12, 38.75));
        points.insert("a", Coordinates::new(-9.19, 38.77));

        assert_eq!(points.len(), 2);
        let names: Vec<&str> = points.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(points.get("a"), Some(&Coordinates::new(-9.19, 38.77)));
    }

    #[test]
    fn get_missing_name() {
        let points = PointSet::new();
        assert!(points.is_empty());
        assert!(points.get("nowhere").is_none());
    }
}
