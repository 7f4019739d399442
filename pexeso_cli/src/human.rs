use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use pexeso::{visualize_table, Player, Point, Symbol, TableView};
use tracing::debug;

use crate::Language;

/// Why a line typed by the player does not select a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two integers.
    Malformed,
    OutOfBounds,
    AlreadyRevealed,
    EmptyCell,
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Expected two integers separated by whitespace"),
            InputError::OutOfBounds => write!(f, "Coordinates are outside of the board"),
            InputError::AlreadyRevealed => write!(f, "The card is already face-up"),
            InputError::EmptyCell => write!(f, "The cell is empty"),
        }
    }
}

/// Parses a line of the form `x y`.
pub fn parse_coordinates(line: &str) -> Result<(i64, i64), InputError> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(InputError::Malformed);
    };
    let x = x.parse().map_err(coordinate_error)?;
    let y = y.parse().map_err(coordinate_error)?;
    Ok((x, y))
}

/// A number too large to parse is still a number, just not one on the board.
fn coordinate_error(err: ParseIntError) -> InputError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfBounds,
        _ => InputError::Malformed,
    }
}

/// Checks that `(x, y)` is a face-down card on the board.
pub fn validate_selection(view: &TableView<'_>, x: i64, y: i64) -> Result<Point, InputError> {
    let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
        return Err(InputError::OutOfBounds);
    };
    let point = Point::new(x, y);
    if !view.contains(point) {
        Err(InputError::OutOfBounds)
    } else if view.is_empty(point) {
        Err(InputError::EmptyCell)
    } else if view.is_revealed(point) {
        Err(InputError::AlreadyRevealed)
    } else {
        Ok(point)
    }
}

pub fn read_selection(line: &str, view: &TableView<'_>) -> Result<Point, InputError> {
    let (x, y) = parse_coordinates(line)?;
    validate_selection(view, x, y)
}

/// The player at the console.
///
/// Asks for coordinates until they select a face-down card, and shows the
/// table after each of their flips.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    language: Language,
    // Should always be empty before and after choose_flip().
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, language: Language) -> Self {
        Self {
            input,
            output,
            language,
            buf: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_flip(&mut self, view: &TableView<'_>) -> anyhow::Result<Point> {
        loop {
            write!(self.output, "{}", self.language.prompt())?;
            self.output.flush()?;
            self.buf.clear();
            let num_bytes_read = self.input.read_until(b'\n', &mut self.buf)?;
            if num_bytes_read == 0 {
                anyhow::bail!("Input ended before a card was chosen");
            }
            let selection = std::str::from_utf8(&self.buf)
                .map_err(|_| InputError::Malformed)
                .and_then(|line| read_selection(line, view));
            self.buf.clear();
            match selection {
                Ok(point) => return Ok(point),
                Err(err) => {
                    debug!(%err, "Rejected input");
                    writeln!(self.output, "{}", self.language.input_error(err))?;
                }
            }
        }
    }

    fn observe(&mut self, view: &TableView<'_>, _point: Point, _symbol: Symbol) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}", visualize_table(view))?;
        Ok(())
    }
}
