//! Grid geometry and cell storage

use crate::game::Color;
use serde::{Deserialize, Serialize};

/// One addressable grid position, `None` while empty
pub type Cell = Option<Color>;

/// Grid coordinates: column `x` grows rightwards, row `y` grows downwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u32,
    pub y: u32,
}

impl Pos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The six hex neighbors of this position that lie inside a
    /// `width x height` grid. Offsets leaving the grid are dropped,
    /// never clamped back onto the edge.
    pub fn neighbors(self, width: u32, height: u32) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = self.x as i64 + dx as i64;
            let ny = self.y as i64 + dy as i64;
            let inside = nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64;
            inside.then(|| Pos::new(nx as u32, ny as u32))
        })
    }
}

/// Neighbor offsets (dx, dy) on the hex-connected rectangular grid.
/// Each cell touches its four orthogonal neighbors plus one diagonal pair.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
];

/// A `width x height` field of cells. The board hands out clones of this
/// as read-only snapshots, so it carries no game state beyond occupancy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Occupant of `pos`, or `None` for an empty cell.
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Pos, color: Color) {
        let index = self.index(pos);
        self.cells[index] = Some(color);
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Number of cells occupied by `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Rows top to bottom, each a slice of `width` cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.contains(pos), "position {:?} outside {}x{} grid", pos, self.width, self.height);
        pos.y as usize * self.width as usize + pos.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_set(pos: Pos, width: u32, height: u32) -> Vec<Pos> {
        pos.neighbors(width, height).collect()
    }

    #[test]
    fn test_interior_cell_has_six_neighbors() {
        let n = neighbor_set(Pos::new(1, 1), 3, 3);
        assert_eq!(n.len(), 6);
    }

    #[test]
    fn test_corner_neighbors_are_excluded_not_clamped() {
        // Acute corners keep 2 neighbors, obtuse corners keep 3
        let top_left = neighbor_set(Pos::new(0, 0), 3, 3);
        assert_eq!(top_left, vec![Pos::new(1, 0), Pos::new(0, 1)]);

        let bottom_right = neighbor_set(Pos::new(2, 2), 3, 3);
        assert_eq!(bottom_right, vec![Pos::new(1, 2), Pos::new(2, 1)]);

        let top_right = neighbor_set(Pos::new(2, 0), 3, 3);
        assert_eq!(top_right.len(), 3);
        let bottom_left = neighbor_set(Pos::new(0, 2), 3, 3);
        assert_eq!(bottom_left.len(), 3);

        // No corner is ever its own neighbor
        for pos in [Pos::new(0, 0), Pos::new(2, 0), Pos::new(0, 2), Pos::new(2, 2)] {
            assert!(!neighbor_set(pos, 3, 3).contains(&pos));
        }
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbor_set(Pos::new(0, 0), 1, 1), vec![]);
    }

    #[test]
    fn test_grid_starts_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.cell(Pos::new(x, y)), None);
            }
        }
        assert!(!grid.is_full());
    }

    #[test]
    fn test_count_tracks_occupancy() {
        let mut grid = Grid::new(2, 2);
        grid.set(Pos::new(0, 0), Color::Red);
        grid.set(Pos::new(1, 1), Color::Red);
        grid.set(Pos::new(0, 1), Color::Blue);
        assert_eq!(grid.count(Color::Red), 2);
        assert_eq!(grid.count(Color::Blue), 1);
        assert!(!grid.is_full());
        grid.set(Pos::new(1, 0), Color::Blue);
        assert!(grid.is_full());
    }
}
