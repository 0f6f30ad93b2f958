//! Hexgame Core - Rules engine for the board game Hex
//!
//! This crate provides the game logic for Hex:
//! - Grid geometry (rectangular grid with hex adjacency)
//! - Move legality and strict turn alternation
//! - Win detection via breadth-first connectivity search
//! - Concessions and cached outcomes
//!
//! It performs no I/O; move input and board rendering live in the
//! consuming crate.

pub mod error;
pub mod game;
pub mod grid;
pub mod search;

// Re-exports for convenient access
pub use error::BoardError;
pub use game::{Board, Color, Move, Outcome};
pub use grid::{Cell, Grid, Pos};
pub use search::winning_path;
