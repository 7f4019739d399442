use pexeso::{Player, Point, Symbol, TableView};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::BotState;

/// The computer opponent: remembers the cards it flipped itself, and goes for
/// pairs it knows about before trying random cards.
#[derive(Clone, Debug)]
pub struct MemoryBot {
    state: BotState,
    rng: StdRng,
}

impl MemoryBot {
    pub fn new(rng: StdRng) -> Self {
        Self {
            state: BotState::new(0),
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }
}

impl Player for MemoryBot {
    fn new_game(&mut self, view: &TableView<'_>) {
        self.state = BotState::new(view.size());
        // Empty cells are visible to everyone, and never worth a flip
        for point in view.points().filter(|&point| view.is_empty(point)) {
            self.state.exclude(point);
        }
    }

    fn choose_flip(&mut self, _view: &TableView<'_>) -> anyhow::Result<Point> {
        self.state
            .choose_move(&mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No cards are left in play"))
    }

    fn observe(&mut self, _view: &TableView<'_>, point: Point, symbol: Symbol) -> anyhow::Result<()> {
        self.state.observe(point, symbol);
        Ok(())
    }

    fn pair_matched(&mut self, first: Point, second: Point) {
        self.state.mark_matched(first, second);
    }
}
