//! Hexgame CLI - local two-player Hex on the console
//!
//! Wires the core rules engine to the terminal: a human move source
//! reading coordinates from stdin, a text renderer, and the session turn
//! loop that alternates the two players until the board reports a winner.

pub mod player;
pub mod render;
pub mod session;

pub use player::{HumanPlayer, MoveSource, NoValidMoves};
pub use render::render;
pub use session::Session;
