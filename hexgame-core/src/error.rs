//! Error types for board operations

/// Everything a board operation can refuse. All variants are recoverable
/// by the caller; the board never retries internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A requested dimension was below 1
    #[error("board dimensions must each be at least 1")]
    InvalidSize,

    /// The grid was already sized by an earlier call
    #[error("board has already been sized")]
    AlreadySized,

    /// A grid operation was attempted before the board was configured
    #[error("no board has been configured")]
    NoBoard,

    /// A color tried to move out of turn, or before a first mover was designated
    #[error("it is not that color's turn to move")]
    InvalidColor,

    /// Coordinates were negative or fell outside the grid
    #[error("position lies outside the board")]
    InvalidPosition,

    /// The target cell is already occupied
    #[error("position is already taken")]
    PositionTaken,
}
