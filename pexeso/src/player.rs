use crate::{Point, Symbol, TableView};

/// A source of moves: the human at the console, or a bot.
///
/// Each turn consists of two calls to [`Player::choose_flip`], each followed by
/// [`Player::observe`] with the card that was turned over.
pub trait Player {
    /// Resets any state from a previous game.
    fn new_game(&mut self, _view: &TableView<'_>) {}

    /// Picks the next card to flip.
    fn choose_flip(&mut self, view: &TableView<'_>) -> anyhow::Result<Point>;

    /// Called after each of the player's own flips, before the cards are compared.
    fn observe(&mut self, _view: &TableView<'_>, _point: Point, _symbol: Symbol) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called for every pair found by either player.
    fn pair_matched(&mut self, _first: Point, _second: Point) {}
}
