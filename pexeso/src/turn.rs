use tracing::debug;

use crate::{Board, IllegalFlip, Player, Point, Symbol, Table, TableView};

/// A single card turned over during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flip {
    pub point: Point,
    pub symbol: Symbol,
}

/// Summarizes the outcome of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Both cards stay face-up, and the same player goes again.
    Match,
    /// Both cards were turned face-down again.
    NoMatch,
}

/// The error type for [`execute_turn()`].
#[derive(Debug)]
pub enum TurnError {
    /// The player failed to come up with a move, e.g. because its input was closed.
    Player(anyhow::Error),
    IllegalFlip(IllegalFlip),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Player(err) => Some(&**err),
            TurnError::IllegalFlip(err) => Some(err),
        }
    }
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::Player(_) => write!(f, "The player could not choose a card"),
            TurnError::IllegalFlip(_) => write!(f, "The player chose a card that can't be flipped"),
        }
    }
}

/// Lets the player flip two cards and compares them.
///
/// On a match, the two cards are marked as matched. Otherwise both are hidden
/// again. If anything goes wrong, the table is left as it was before the turn.
pub fn execute_turn(
    board: &Board,
    table: &mut Table,
    player: &mut dyn Player,
) -> Result<(Flip, Flip, TurnOutcome), TurnError> {
    let first = flip(board, table, player)?;
    let second = match flip(board, table, player) {
        Ok(second) => second,
        Err(err) => {
            table.hide(first.point);
            return Err(err);
        }
    };

    let outcome = if first.symbol == second.symbol && first.point != second.point {
        table.mark_matched(first.point, second.point);
        TurnOutcome::Match
    } else {
        table.hide(first.point);
        table.hide(second.point);
        TurnOutcome::NoMatch
    };
    debug!(first = %first.point, second = %second.point, ?outcome, "Turn executed");
    Ok((first, second, outcome))
}

fn flip(board: &Board, table: &mut Table, player: &mut dyn Player) -> Result<Flip, TurnError> {
    let point = player
        .choose_flip(&TableView::new(board, table))
        .map_err(TurnError::Player)?;
    let was_revealed = table.is_revealed(point);
    let symbol = table.flip(board, point).map_err(TurnError::IllegalFlip)?;
    if let Err(err) = player.observe(&TableView::new(board, table), point, symbol) {
        if !was_revealed {
            table.hide(point);
        }
        return Err(TurnError::Player(err));
    }
    Ok(Flip { point, symbol })
}
