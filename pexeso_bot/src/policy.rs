use std::collections::BTreeSet;

use pexeso::{Point, Symbol};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::BotMemory;

/// Everything the bot knows during a game.
///
/// Since [`BotState::choose_move()`] returns a single card, the state also
/// remembers the first card of a turn in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotState {
    size: usize,
    memory: BotMemory,
    /// Cards that are out of play: matched pairs, and empty cells.
    matched: BTreeSet<Point>,
    pending_first_flip: Option<Point>,
}

impl BotState {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            memory: BotMemory::new(),
            matched: BTreeSet::new(),
            pending_first_flip: None,
        }
    }

    pub fn memory(&self) -> &BotMemory {
        &self.memory
    }

    pub fn matched(&self) -> &BTreeSet<Point> {
        &self.matched
    }

    pub fn pending_first_flip(&self) -> Option<Point> {
        self.pending_first_flip
    }

    pub fn observe(&mut self, point: Point, symbol: Symbol) {
        self.memory.observe(point, symbol);
    }

    pub fn mark_matched(&mut self, first: Point, second: Point) {
        self.matched.insert(first);
        self.matched.insert(second);
    }

    /// Never consider this cell again, e.g. because it is empty.
    pub fn exclude(&mut self, point: Point) {
        self.matched.insert(point);
    }

    /// Picks the next card to flip.
    ///
    /// In order of preference:
    /// 1. A symbol that has been seen on two cards still in play. The first
    ///    call of a turn returns the first of these cards, the second call the
    ///    second one, found by scanning the memory anew.
    /// 2. If a first card has been flipped, another card with the same symbol.
    /// 3. A random card that is still in play.
    ///
    /// Returns `None` only if all cards are out of play.
    pub fn choose_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Point> {
        if let Some(point) = self.recall_known_pair() {
            return Some(point);
        }
        if let Some(point) = self.partner_of_pending() {
            return Some(point);
        }
        self.explore(rng)
    }

    fn recall_known_pair(&mut self) -> Option<Point> {
        let matched = &self.matched;
        let (symbol, unmatched) = self.memory.groups().find_map(|(symbol, points)| {
            let unmatched: Vec<Point> = points
                .iter()
                .copied()
                .filter(|point| !matched.contains(point))
                .take(2)
                .collect();
            (unmatched.len() == 2).then_some((symbol, unmatched))
        })?;

        // The second card is not checked against the pending one; if the
        // memory changed in between, the two cards can have different symbols.
        let point = match self.pending_first_flip.take() {
            None => {
                self.pending_first_flip = Some(unmatched[0]);
                unmatched[0]
            }
            Some(_) => unmatched[1],
        };
        debug!(%symbol, %point, "Recalled known pair");
        Some(point)
    }

    fn partner_of_pending(&mut self) -> Option<Point> {
        let pending = self.pending_first_flip?;
        let partner = self
            .memory
            .groups()
            .filter(|(_, points)| points.contains(&pending))
            .flat_map(|(_, points)| points.iter().copied())
            .find(|&point| point != pending && !self.matched.contains(&point))?;
        self.pending_first_flip = None;
        debug!(%pending, %partner, "Found partner of first card");
        Some(partner)
    }

    fn explore<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Point> {
        let candidates: Vec<Point> = Point::all(self.size)
            .filter(|point| !self.matched.contains(point))
            .collect();
        let point = *candidates.choose(rng)?;
        if self.pending_first_flip.is_none() {
            self.pending_first_flip = Some(point);
        }
        debug!(%point, num_candidates = candidates.len(), "Exploring");
        Some(point)
    }
}
