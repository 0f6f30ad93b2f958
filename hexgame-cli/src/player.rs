//! Move sources
//!
//! A move source produces the next move for one color given a read-only
//! grid snapshot. The console human player lives here; the session treats
//! every source alike, so tests can drive games with scripted sources.

use hexgame_core::{Color, Grid, Move};
use std::io::{self, BufRead, Write};

/// The grid is full and no outcome has been reached; the color that could
/// not move loses immediately.
#[derive(Debug, thiserror::Error)]
#[error("no valid moves remain")]
pub struct NoValidMoves;

/// Supplies moves for one color
pub trait MoveSource {
    fn next_move(&mut self, view: &Grid) -> Result<Move, NoValidMoves>;
}

/// Human player reading moves from stdin
pub struct HumanPlayer {
    color: Color,
}

impl HumanPlayer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl MoveSource for HumanPlayer {
    fn next_move(&mut self, view: &Grid) -> Result<Move, NoValidMoves> {
        if view.is_full() {
            return Err(NoValidMoves);
        }

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{}'s move (x y, or 'concede'): ", self.color);
            let _ = io::stdout().flush();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                // Closed stdin counts as a concession rather than looping
                Ok(0) | Err(_) => return Ok(Move::concede()),
                Ok(_) => {}
            }

            match parse_move(line.trim()) {
                Ok(mv) => return Ok(mv),
                Err(message) => println!("{message}"),
            }
        }
    }
}

/// Parse a move line: two whitespace-separated coordinates, or `concede`
pub fn parse_move(input: &str) -> Result<Move, String> {
    if input.eq_ignore_ascii_case("concede") {
        return Ok(Move::concede());
    }

    let mut parts = input.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected 'x y' or 'concede', got '{input}'"));
    };
    let x: i64 = x.parse().map_err(|_| format!("'{x}' is not a number"))?;
    let y: i64 = y.parse().map_err(|_| format!("'{y}' is not a number"))?;

    Move::position(x, y).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let mv = parse_move("2 3").unwrap();
        assert!(!mv.is_concession());
        let target = mv.target().unwrap();
        assert_eq!((target.x, target.y), (2, 3));
    }

    #[test]
    fn test_parse_concession() {
        assert!(parse_move("concede").unwrap().is_concession());
        assert!(parse_move("CONCEDE").unwrap().is_concession());
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!(parse_move("").is_err());
        assert!(parse_move("1").is_err());
        assert!(parse_move("1 2 3").is_err());
        assert!(parse_move("one two").is_err());
    }

    #[test]
    fn test_parse_rejects_negative_coordinates() {
        assert!(parse_move("-1 0").is_err());
        assert!(parse_move("0 -4").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_coordinates() {
        // 2^32 overflows a grid coordinate and must not wrap to (0, 0)
        assert!(parse_move("4294967296 0").is_err());
        assert!(parse_move("0 9223372036854775807").is_err());
    }
}
