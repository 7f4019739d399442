use std::io::{BufRead, Write};

use anyhow::Context;
use pexeso::{visualize_table, Game, GameResult, Player, Seat};

use crate::HumanPlayer;

/// Plays a game to the end, talking to the human through their input and output.
///
/// Returns an error only on I/O failure, e.g. when the input ends.
pub fn play_console_game<R: BufRead, W: Write>(
    game: &mut Game,
    human: &mut HumanPlayer<R, W>,
    bot: &mut dyn Player,
) -> anyhow::Result<GameResult> {
    let language = human.language();
    game.introduce_players(&mut *human, &mut *bot);
    writeln!(
        human.output(),
        "{}",
        language.welcome(game.board().size(), game.winning_score())
    )?;

    while let Some(seat) = game.phase().to_move() {
        writeln!(human.output(), "\n{}", language.on_turn(seat))?;
        if seat == Seat::Human {
            writeln!(human.output(), "{}", visualize_table(&game.view()))?;
        }
        let report = game.play_turn(&mut *human, &mut *bot)?;
        writeln!(human.output(), "{}", language.turn_summary(&report))?;
        writeln!(human.output(), "\n{}", language.score(game.score()))?;
    }

    let result = game
        .result()
        .context("The game loop ended before the game was over")?;
    writeln!(human.output(), "\n{}", language.game_over())?;
    writeln!(human.output(), "{}", language.result(result))?;
    Ok(result)
}
