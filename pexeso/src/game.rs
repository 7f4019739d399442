use std::cmp::Ordering;

use tracing::{debug, info};

use crate::{execute_turn, Board, Flip, Player, Table, TableView, TurnOutcome};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Bot,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Bot,
            Seat::Bot => Seat::Human,
        }
    }
}

/// The state of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    BotTurn,
    GameOver,
}

impl Phase {
    pub fn turn_of(seat: Seat) -> Phase {
        match seat {
            Seat::Human => Phase::HumanTurn,
            Seat::Bot => Phase::BotTurn,
        }
    }

    /// Whose turn it is, or `None` once the game is over.
    pub fn to_move(self) -> Option<Seat> {
        match self {
            Phase::HumanTurn => Some(Seat::Human),
            Phase::BotTurn => Some(Seat::Bot),
            Phase::GameOver => None,
        }
    }

    /// A match lets the same seat go again, anything else passes the turn.
    /// The game is over as soon as a seat reaches the winning score or no pairs are left.
    fn after_turn(seat: Seat, outcome: TurnOutcome, score: Score, winning_score: u32, exhausted: bool) -> Phase {
        if score.human >= winning_score || score.bot >= winning_score || exhausted {
            return Phase::GameOver;
        }
        match outcome {
            TurnOutcome::Match => Phase::turn_of(seat),
            TurnOutcome::NoMatch => Phase::turn_of(seat.other()),
        }
    }
}

/// Number of pairs found by each seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub bot: u32,
}

impl Score {
    pub fn of(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human,
            Seat::Bot => self.bot,
        }
    }

    fn increment(&mut self, seat: Seat) {
        match seat {
            Seat::Human => self.human += 1,
            Seat::Bot => self.bot += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won { seat: Seat },
    Tie,
}

/// Everything that happened in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: Seat,
    pub first: Flip,
    pub second: Flip,
    pub outcome: TurnOutcome,
}

/// A game between a human and a bot. The human goes first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    table: Table,
    score: Score,
    phase: Phase,
    winning_score: u32,
}

impl Game {
    pub fn new(board: Board, winning_score: u32) -> Self {
        let table = Table::new(&board);
        let phase = if table.all_matched(&board) {
            Phase::GameOver
        } else {
            Phase::HumanTurn
        };
        Self {
            board,
            table,
            score: Score::default(),
            phase,
            winning_score,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn view(&self) -> TableView<'_> {
        TableView::new(&self.board, &self.table)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Lets both players reset their state for this board.
    pub fn introduce_players(&self, human: &mut dyn Player, bot: &mut dyn Player) {
        let view = self.view();
        human.new_game(&view);
        bot.new_game(&view);
    }

    /// Plays a single turn of whoever is to move.
    ///
    /// Returns an error when the game is already over, when the player fails to
    /// choose a card, or when the chosen card can't be flipped. In these cases
    /// the game state is unchanged.
    pub fn play_turn<'p>(
        &mut self,
        human: &'p mut dyn Player,
        bot: &'p mut dyn Player,
    ) -> anyhow::Result<TurnReport> {
        let Some(seat) = self.phase.to_move() else {
            anyhow::bail!("The game is already over");
        };
        let (mover, other): (&mut dyn Player, &mut dyn Player) = match seat {
            Seat::Human => (human, bot),
            Seat::Bot => (bot, human),
        };

        let (first, second, outcome) = execute_turn(&self.board, &mut self.table, mover)?;
        if outcome == TurnOutcome::Match {
            self.score.increment(seat);
            mover.pair_matched(first.point, second.point);
            other.pair_matched(first.point, second.point);
        }

        self.phase = Phase::after_turn(
            seat,
            outcome,
            self.score,
            self.winning_score,
            self.table.all_matched(&self.board),
        );
        debug!(?seat, ?outcome, human = self.score.human, bot = self.score.bot, phase = ?self.phase);
        if self.phase == Phase::GameOver {
            info!(human = self.score.human, bot = self.score.bot, "Game over");
        }

        Ok(TurnReport {
            seat,
            first,
            second,
            outcome,
        })
    }

    /// The winner by score, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let result = match self.score.human.cmp(&self.score.bot) {
            Ordering::Less => GameResult::Won { seat: Seat::Bot },
            Ordering::Equal => GameResult::Tie,
            Ordering::Greater => GameResult::Won { seat: Seat::Human },
        };
        Some(result)
    }
}
