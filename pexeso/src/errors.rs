use crate::Point;

/// The error type for [`Board::generate()`](crate::Board::generate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidBoardSize {
    pub size: usize,
}

impl std::error::Error for InvalidBoardSize {}

impl std::fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Can't generate a board of size {}", self.size)
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    Empty,
    NotSquare { row: usize },
    InvalidSymbol { ch: char },
    SymbolNotPaired { ch: char },
}

impl std::error::Error for BoardFromStrErr {}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::Empty => write!(f, "The board has no rows"),
            BoardFromStrErr::NotSquare { row } =>
                write!(f, "Row {} does not have as many cells as the board has rows", row),
            BoardFromStrErr::InvalidSymbol { ch } =>
                write!(f, "'{}' is not a valid symbol", ch),
            BoardFromStrErr::SymbolNotPaired { ch } =>
                write!(f, "Symbol '{}' does not appear exactly twice", ch),
        }
    }
}

/// The error type for flipping a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalFlip {
    OutOfBounds { point: Point },
    EmptyCell { point: Point },
    AlreadyMatched { point: Point },
}

impl std::error::Error for IllegalFlip {}

impl std::fmt::Display for IllegalFlip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalFlip::OutOfBounds { point } =>
                write!(f, "Cell {} is outside of the board", point),
            IllegalFlip::EmptyCell { point } =>
                write!(f, "Cell {} is empty and can't be flipped", point),
            IllegalFlip::AlreadyMatched { point } =>
                write!(f, "Cell {} is already part of a matched pair", point),
        }
    }
}
