//! Connectivity search for win detection
//!
//! A color wins when a chain of its own cells joins its two assigned edges:
//! Red bridges the bottom row to the top row, Blue bridges the right column
//! to the left column. Detection runs a breadth-first shortest-path
//! expansion from every occupied start-edge cell and keeps the shortest
//! reconstructed chain across all sources.

use crate::game::Color;
use crate::grid::{Grid, Pos};
use rustc_hash::FxHashMap;

/// Cells of `color`'s start edge, most distant coordinate first
fn start_cells(grid: &Grid, color: Color) -> Vec<Pos> {
    match color {
        Color::Red => (0..grid.width())
            .rev()
            .map(|x| Pos::new(x, grid.height() - 1))
            .collect(),
        Color::Blue => (0..grid.height())
            .rev()
            .map(|y| Pos::new(grid.width() - 1, y))
            .collect(),
    }
}

/// Cells of `color`'s goal edge, in ascending coordinate order
fn goal_cells(grid: &Grid, color: Color) -> Vec<Pos> {
    match color {
        Color::Red => (0..grid.width()).map(|x| Pos::new(x, 0)).collect(),
        Color::Blue => (0..grid.height()).map(|y| Pos::new(0, y)).collect(),
    }
}

/// Shortest winning chain for `color`, listed goal edge first, or an empty
/// vector when the edges are not connected. On a board one cell deep a
/// single occupied cell sits on both edges and wins outright.
pub fn winning_path(grid: &Grid, color: Color) -> Vec<Pos> {
    let mut best: Vec<Pos> = Vec::new();

    for source in start_cells(grid, color) {
        if grid.cell(source) != Some(color) {
            continue;
        }

        let (distances, predecessors) = expand(grid, color, source);

        // Nearest reached goal cell for this source
        let closest = goal_cells(grid, color)
            .into_iter()
            .filter_map(|pos| distances.get(&pos).map(|&d| (pos, d)))
            .min_by_key(|&(_, d)| d);

        if let Some((goal, distance)) = closest {
            // Keep only a strictly shorter chain than the best so far
            if best.is_empty() || (distance as usize + 1) < best.len() {
                best = reconstruct(&predecessors, goal);
            }
        }
    }

    best
}

/// Breadth-first expansion over same-colored cells from `source`,
/// recording every visited cell's distance and predecessor
fn expand(
    grid: &Grid,
    color: Color,
    source: Pos,
) -> (FxHashMap<Pos, u32>, FxHashMap<Pos, Pos>) {
    let mut distances = FxHashMap::default();
    let mut predecessors = FxHashMap::default();
    distances.insert(source, 0);

    let mut frontier = vec![source];
    let mut distance = 0;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &pos in &frontier {
            for neighbor in pos.neighbors(grid.width(), grid.height()) {
                if grid.cell(neighbor) == Some(color) && !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, distance + 1);
                    predecessors.insert(neighbor, pos);
                    next.push(neighbor);
                }
            }
        }
        distance += 1;
        frontier = next;
    }

    (distances, predecessors)
}

/// Walk predecessor links from the goal cell back to the source
fn reconstruct(predecessors: &FxHashMap<Pos, Pos>, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(&previous) = predecessors.get(&cursor) {
        path.push(previous);
        cursor = previous;
    }
    path
}
