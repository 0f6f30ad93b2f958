//! Board state machine: sizing, placement legality, turn order, outcome

use crate::error::BoardError;
use crate::grid::{Grid, Pos};
use crate::search;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player color. Red connects the bottom row to the top row; Blue connects
/// the right column to the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            _ => Err(BoardError::InvalidColor),
        }
    }
}

/// Result of a win check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Undecided,
    WonBy(Color),
}

/// A submitted move: either a target cell or a concession
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    target: Option<Pos>,
}

impl Move {
    /// Move targeting `(x, y)`. Coordinates that cannot name a grid cell
    /// (negative or beyond `u32::MAX`) are rejected here; the grid's own
    /// bounds are only known to the board and are checked on placement.
    pub fn position(x: i64, y: i64) -> Result<Self, BoardError> {
        let x = u32::try_from(x).map_err(|_| BoardError::InvalidPosition)?;
        let y = u32::try_from(y).map_err(|_| BoardError::InvalidPosition)?;
        Ok(Self {
            target: Some(Pos::new(x, y)),
        })
    }

    /// A concession: forfeits the game to the opponent, carries no position
    pub fn concede() -> Self {
        Self { target: None }
    }

    pub fn is_concession(&self) -> bool {
        self.target.is_none()
    }

    pub fn target(&self) -> Option<Pos> {
        self.target
    }
}

/// The Hex board: grid state, move legality, and lazy win detection.
///
/// Constructed unsized; `configure` allocates the grid exactly once. The
/// next color to move is derived from the occupancy counts and the
/// designated first mover, never stored. A decided outcome (won or
/// conceded) is cached and permanent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    grid: Option<Grid>,
    first_mover: Option<Color>,
    winner: Option<Color>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time grid allocation. Every cell starts empty.
    pub fn configure(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        if width < 1 || height < 1 {
            return Err(BoardError::InvalidSize);
        }
        if self.grid.is_some() {
            return Err(BoardError::AlreadySized);
        }
        self.grid = Some(Grid::new(width, height));
        Ok(())
    }

    /// Sets the color that opens the game. Until a first mover is
    /// designated, every placement fails the turn check.
    pub fn designate_first_mover(&mut self, color: Color) {
        self.first_mover = Some(color);
    }

    pub fn first_mover(&self) -> Option<Color> {
        self.first_mover
    }

    /// Submit a move for `color`. A concession records the opponent as the
    /// permanent winner and bypasses every placement check. Otherwise the
    /// checks run in order: board configured, turn order, bounds, occupancy.
    pub fn place(&mut self, color: Color, mv: Move) -> Result<(), BoardError> {
        if mv.is_concession() {
            self.record_concession(color);
            return Ok(());
        }
        let target = mv.target().ok_or(BoardError::InvalidPosition)?;

        let grid = self.grid.as_ref().ok_or(BoardError::NoBoard)?;

        // Strict alternation from the derived counts: the opener moves on
        // equal counts, the other color moves while the counts are unequal.
        let balanced = grid.count(Color::Red) == grid.count(Color::Blue);
        match self.first_mover {
            Some(opener) if (color == opener) == balanced => {}
            _ => return Err(BoardError::InvalidColor),
        }

        if !grid.contains(target) {
            return Err(BoardError::InvalidPosition);
        }
        if grid.cell(target).is_some() {
            return Err(BoardError::PositionTaken);
        }

        // Checks passed, grid is present
        self.grid
            .as_mut()
            .ok_or(BoardError::NoBoard)?
            .set(target, color);
        Ok(())
    }

    /// Marks the opponent of `color` as the permanent winner
    pub fn record_concession(&mut self, color: Color) {
        self.winner = Some(color.opponent());
    }

    /// Lazy win check. A recorded win or concession is returned without
    /// searching; otherwise Red then Blue are searched for a completed
    /// connection and the first winner found is cached.
    pub fn check_winner(&mut self) -> Result<Outcome, BoardError> {
        let grid = self.grid.as_ref().ok_or(BoardError::NoBoard)?;
        if let Some(color) = self.winner {
            return Ok(Outcome::WonBy(color));
        }
        for color in [Color::Red, Color::Blue] {
            if !search::winning_path(grid, color).is_empty() {
                self.winner = Some(color);
                return Ok(Outcome::WonBy(color));
            }
        }
        Ok(Outcome::Undecided)
    }

    /// Shortest chain joining `color`'s two edges, goal edge first, or an
    /// empty vector when no connection exists. Supplementary to
    /// `check_winner`, e.g. for highlighting the winning chain.
    pub fn winning_path(&self, color: Color) -> Result<Vec<Pos>, BoardError> {
        let grid = self.grid.as_ref().ok_or(BoardError::NoBoard)?;
        Ok(search::winning_path(grid, color))
    }

    /// Owned read-only view of the grid for presentation and move sources
    pub fn snapshot(&self) -> Result<Grid, BoardError> {
        self.grid.clone().ok_or(BoardError::NoBoard)
    }
}
