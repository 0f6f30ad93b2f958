//! Session: player assignment and the turn loop

use crate::player::MoveSource;
use crate::render::render;
use anyhow::Context;
use hexgame_core::{Board, BoardError, Color, Outcome};
use tracing::{info, warn};

/// The requested color already has a player
#[derive(Debug, thiserror::Error)]
#[error("color {0} is already assigned to a player")]
pub struct ColorAlreadyAssigned(pub Color);

/// Owns the board and the two move sources and runs the game to completion
#[derive(Default)]
pub struct Session {
    board: Board,
    red: Option<Box<dyn MoveSource>>,
    blue: Option<Box<dyn MoveSource>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_size(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        self.board.configure(width, height)
    }

    /// Attach a move source to a color; each color is assigned at most once
    pub fn assign(
        &mut self,
        color: Color,
        source: Box<dyn MoveSource>,
    ) -> Result<(), ColorAlreadyAssigned> {
        let slot = match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
        };
        if slot.is_some() {
            return Err(ColorAlreadyAssigned(color));
        }
        *slot = Some(source);
        Ok(())
    }

    pub fn first_mover(&mut self, color: Color) {
        self.board.designate_first_mover(color);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Alternate the two players until the board reports a winner.
    ///
    /// Rejected placements on an occupied or out-of-range cell keep the
    /// turn with the same color; a concession or a source with no valid
    /// moves ends the game in the opponent's favor.
    pub fn play(&mut self) -> anyhow::Result<Color> {
        let mut active = self
            .board
            .first_mover()
            .context("no first mover designated")?;

        loop {
            let view = self.board.snapshot()?;
            println!("{}", render(&view));

            let source = match active {
                Color::Red => self.red.as_mut(),
                Color::Blue => self.blue.as_mut(),
            }
            .with_context(|| format!("no player assigned to {active}"))?;

            match source.next_move(&view) {
                Ok(mv) if mv.is_concession() => {
                    info!(color = %active, "player conceded");
                    self.board.record_concession(active);
                }
                Ok(mv) => {
                    if let Err(err) = self.board.place(active, mv) {
                        match err {
                            BoardError::PositionTaken | BoardError::InvalidPosition => {
                                // Retryable: the same color moves again
                                println!("{err}");
                                continue;
                            }
                            other => return Err(other.into()),
                        }
                    }
                }
                Err(_) => {
                    warn!(color = %active, "no valid moves remain");
                    self.board.record_concession(active);
                }
            }

            if let Outcome::WonBy(winner) = self.board.check_winner()? {
                println!("{}", render(&self.board.snapshot()?));
                println!("Winner: {winner}");
                return Ok(winner);
            }

            active = active.opponent();
        }
    }
}
