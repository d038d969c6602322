//! Resolve a start / inflection / end triple to one deterministic route.

use log::warn;
use serde::{Deserialize, Serialize};

use super::path::{
    Path, PathSegment, get_all_paths_between_two_points, get_turn_count, has_crossing, has_u_turn,
    join_paths,
};
use crate::element::Axis;
use crate::geometry::Coord;

/// A user-drawn line described by its endpoints and a biasing middle point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreePointLine {
    pub start: Coord,
    pub inflection: Coord,
    pub end: Coord,
}

impl ThreePointLine {
    /// A straight two-point line: the inflection sits on the start
    pub fn straight(start: Coord, end: Coord) -> Self {
        Self {
            start,
            inflection: start,
            end,
        }
    }
}

/// Cartesian product of two candidate sets, first set varying slowest
pub fn get_path_combinations(first: &[Path], second: &[Path]) -> Vec<Path> {
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| join_paths(a, b)))
        .collect()
}

fn starts_vertical(path: &Path) -> bool {
    path.first().map(PathSegment::axis) == Some(Axis::Vertical)
}

/// First vertical-first candidate, else the first candidate
fn prefer_vertical_first(mut candidates: Vec<Path>) -> Option<Path> {
    let idx = candidates.iter().position(starts_vertical).unwrap_or(0);
    if candidates.is_empty() {
        None
    } else {
        Some(candidates.swap_remove(idx))
    }
}

/// The single route drawn for `line`.
///
/// Candidates containing a U-turn or an interior crossing are discarded,
/// then the fewest turns win, then a vertical first leg, then list order.
pub fn get_canonical_path(line: &ThreePointLine) -> Path {
    let ThreePointLine { start, inflection, end } = *line;

    if inflection == start || inflection == end {
        let paths = get_all_paths_between_two_points(start, end);
        return prefer_vertical_first(paths).unwrap_or_default();
    }

    let to_inflection = get_all_paths_between_two_points(start, inflection);
    let from_inflection = get_all_paths_between_two_points(inflection, end);

    if start == end && start.is_colinear_with(inflection) {
        // Out to the inflection and straight back.
        return join_paths(&to_inflection[0], &from_inflection[0]);
    }

    let combinations = get_path_combinations(&to_inflection, &from_inflection);
    let survivors: Vec<Path> = combinations
        .iter()
        .filter(|path| !has_u_turn(path) && !has_crossing(path))
        .cloned()
        .collect();

    let Some(min_turns) = survivors.iter().map(|path| get_turn_count(path)).min() else {
        warn!("no route for {start} -> {inflection} -> {end} survived filtering, using first candidate");
        return combinations.into_iter().next().unwrap_or_default();
    };

    let fewest_turns: Vec<Path> = survivors
        .into_iter()
        .filter(|path| get_turn_count(path) == min_turns)
        .collect();
    prefer_vertical_first(fewest_turns).unwrap_or_default()
}
