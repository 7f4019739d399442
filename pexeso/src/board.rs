use std::collections::BTreeMap;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{BoardFromStrErr, InvalidBoardSize, Point};

/// Characters used to display the first symbols of a board.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// The face of a card. Exactly two cells of a board carry the same symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// The `n`-th symbol, i.e. `A` for 0, `B` for 1 and so on.
    pub fn nth(n: u32) -> Self {
        Self(n)
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ALPHABET
            .iter()
            .position(|&c| char::from(c) == ch)
            .map(|idx| Self(idx as u32))
    }

    /// The single character representing this symbol, if there is one.
    pub fn to_char(self) -> Option<char> {
        ALPHABET.get(self.0 as usize).map(|&c| char::from(c))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_char() {
            Some(ch) => write!(f, "{}", ch),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// A square grid of face-down cards.
///
/// Never changes after it has been generated. What is face-up and what has been
/// matched is tracked separately by a [`Table`](crate::Table).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, `None` marks the unusable cell of a board with an odd number of cells.
    cells: Vec<Option<Symbol>>,
}

impl Board {
    /// Deals `size * size / 2` pairs onto randomly shuffled cells.
    ///
    /// If the number of cells is odd, one cell stays empty. Fails for size 0, and
    /// for sizes whose cells or symbols can't be counted.
    pub fn generate(size: usize, rng: &mut StdRng) -> Result<Self, InvalidBoardSize> {
        let num_cells = size
            .checked_mul(size)
            .filter(|&num_cells| num_cells > 0)
            .ok_or(InvalidBoardSize { size })?;
        if u32::try_from(num_cells / 2).is_err() {
            return Err(InvalidBoardSize { size });
        }
        let num_cards = num_cells / 2 * 2;
        let mut positions: Vec<Point> = Point::all(size).collect();
        positions.shuffle(rng);

        let mut cells = vec![None; num_cells];
        for (card_idx, point) in positions.into_iter().take(num_cards).enumerate() {
            // Fits, since there are at most u32::MAX pairs
            cells[point.index(size)] = Some(Symbol::nth((card_idx / 2) as u32));
        }
        Ok(Self { size, cells })
    }

    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_pairs(&self) -> usize {
        self.cells.iter().flatten().count() / 2
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }

    /// The symbol at this point, or `None` if the cell is empty or out of bounds.
    pub fn symbol_at(&self, point: Point) -> Option<Symbol> {
        if self.contains(point) {
            self.cells[point.index(self.size)]
        } else {
            None
        }
    }

    pub fn is_empty(&self, point: Point) -> bool {
        self.contains(point) && self.cells[point.index(self.size)].is_none()
    }

    /// The cells that carry no symbol. At most one for generated boards.
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        Point::all(self.size).filter(|&point| self.is_empty(point))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        Point::all(self.size)
    }
}

/// Parses one line per row, `.` standing for an empty cell.
///
/// ```
/// use pexeso::{Board, Point, Symbol};
/// let board: Board = "AB\nBA".parse().unwrap();
/// assert_eq!(board.symbol_at(Point::new(1, 0)), Symbol::from_char('B'));
/// ```
impl FromStr for Board {
    type Err = BoardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardFromStrErr::Empty);
        }
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(BoardFromStrErr::NotSquare { row: row_idx });
            }
            for ch in row.chars() {
                if ch == '.' {
                    cells.push(None);
                    continue;
                }
                let symbol = Symbol::from_char(ch).ok_or(BoardFromStrErr::InvalidSymbol { ch })?;
                *counts.entry(ch).or_default() += 1;
                cells.push(Some(symbol));
            }
        }
        if let Some((&ch, _)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(BoardFromStrErr::SymbolNotPaired { ch });
        }
        Ok(Self { size, cells })
    }
}
