use pexeso::{GameResult, Score, Seat, TurnOutcome, TurnReport};
use serde::{Deserialize, Serialize};

use crate::InputError;

/// The language of all text shown to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "cs")]
    #[value(name = "cs")]
    Czech,
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
}

/// Czech plural of "pair" for a count.
fn pairs_cs(num: u32) -> &'static str {
    match num {
        1 => "pár",
        2..=4 => "páry",
        _ => "párů",
    }
}

impl Language {
    pub fn welcome(self, size: usize, winning_score: u32) -> String {
        match self {
            Language::Czech => format!(
                "Vítej ve hře PEXESO ({size}x{size}) proti AI botovi! Vyhrává ten, kdo získá {winning_score} {}.",
                pairs_cs(winning_score)
            ),
            Language::English => format!(
                "Welcome to PEXESO ({size}x{size}) against the AI bot! The first to find {winning_score} pairs wins."
            ),
        }
    }

    pub fn on_turn(self, seat: Seat) -> &'static str {
        match (self, seat) {
            (Language::Czech, Seat::Human) => "Na tahu je: Ty",
            (Language::Czech, Seat::Bot) => "Na tahu je: BOT",
            (Language::English, Seat::Human) => "Your turn",
            (Language::English, Seat::Bot) => "The bot's turn",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Language::Czech => "Zadej souřadnice (x y): ",
            Language::English => "Enter coordinates (x y): ",
        }
    }

    pub fn input_error(self, err: InputError) -> &'static str {
        match (self, err) {
            (Language::Czech, InputError::Malformed) => "Zadej dvě čísla oddělená mezerou.",
            (Language::Czech, _) => "Neplatné souřadnice nebo karta už byla otočena.",
            (Language::English, InputError::Malformed) => "Enter two numbers separated by a space.",
            (Language::English, _) => "Invalid coordinates, or the card is already face-up.",
        }
    }

    /// What happened in a turn, as one or two lines.
    pub fn turn_summary(self, report: &TurnReport) -> String {
        let TurnReport {
            seat,
            first,
            second,
            outcome,
        } = *report;
        let outcome_line = match (self, seat, outcome) {
            (Language::Czech, Seat::Human, TurnOutcome::Match) => "Správně! Máš pár!",
            (Language::Czech, Seat::Human, TurnOutcome::NoMatch) => "Špatně. Zkusíš to příště.",
            (Language::Czech, Seat::Bot, TurnOutcome::Match) => "Bot našel pár!",
            (Language::Czech, Seat::Bot, TurnOutcome::NoMatch) => "Bot nenašel pár.",
            (Language::English, Seat::Human, TurnOutcome::Match) => "Correct! You found a pair!",
            (Language::English, Seat::Human, TurnOutcome::NoMatch) => "Wrong. Better luck next time.",
            (Language::English, Seat::Bot, TurnOutcome::Match) => "The bot found a pair!",
            (Language::English, Seat::Bot, TurnOutcome::NoMatch) => "The bot did not find a pair.",
        };
        match seat {
            Seat::Human => String::from(outcome_line),
            Seat::Bot => {
                let (flipped, and) = match self {
                    Language::Czech => ("Bot otočil", "a"),
                    Language::English => ("The bot flipped", "and"),
                };
                format!(
                    "{} {} → {} {} {} → {}\n{}",
                    flipped,
                    first.point,
                    first.symbol,
                    and,
                    second.point,
                    second.symbol,
                    outcome_line
                )
            }
        }
    }

    pub fn score(self, score: Score) -> String {
        match self {
            Language::Czech => format!("Skóre – Ty: {}, Bot: {}", score.human, score.bot),
            Language::English => format!("Score – You: {}, Bot: {}", score.human, score.bot),
        }
    }

    pub fn game_over(self) -> &'static str {
        match self {
            Language::Czech => "Konec hry!",
            Language::English => "Game over!",
        }
    }

    pub fn result(self, result: GameResult) -> &'static str {
        match (self, result) {
            (Language::Czech, GameResult::Won { seat: Seat::Human }) => "Vyhrál jsi!",
            (Language::Czech, GameResult::Won { seat: Seat::Bot }) => "Vyhrál bot!",
            (Language::Czech, GameResult::Tie) => "Remíza!",
            (Language::English, GameResult::Won { seat: Seat::Human }) => "You won!",
            (Language::English, GameResult::Won { seat: Seat::Bot }) => "The bot won!",
            (Language::English, GameResult::Tie) => "It's a tie!",
        }
    }
}

#[cfg(test)]
mod tests {
    use pexeso::{Flip, Point, Symbol};

    use super::*;

    #[test]
    fn czech_plurals() {
        assert!(Language::Czech.welcome(5, 3).ends_with("získá 3 páry."));
        assert!(Language::Czech.welcome(5, 1).ends_with("získá 1 pár."));
        assert!(Language::Czech.welcome(6, 5).ends_with("získá 5 párů."));
    }

    #[test]
    fn bot_turn_summary() {
        let report = TurnReport {
            seat: Seat::Bot,
            first: Flip {
                point: Point::new(1, 2),
                symbol: Symbol::nth(0),
            },
            second: Flip {
                point: Point::new(0, 0),
                symbol: Symbol::nth(1),
            },
            outcome: TurnOutcome::NoMatch,
        };
        assert_eq!(
            Language::Czech.turn_summary(&report),
            "Bot otočil (1, 2) → A a (0, 0) → B\nBot nenašel pár."
        );
        assert_eq!(
            Language::English.turn_summary(&report),
            "The bot flipped (1, 2) → A and (0, 0) → B\nThe bot did not find a pair."
        );
    }

    #[test]
    fn malformed_and_invalid_input_have_different_messages() {
        for language in [Language::Czech, Language::English] {
            assert_ne!(
                language.input_error(InputError::Malformed),
                language.input_error(InputError::AlreadyRevealed)
            );
            assert_eq!(
                language.input_error(InputError::OutOfBounds),
                language.input_error(InputError::EmptyCell)
            );
        }
    }
}
