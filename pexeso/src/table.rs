use std::collections::BTreeSet;

use crate::{Board, IllegalFlip, Point, Symbol};

/// The mutable overlay on top of a [`Board`]: which cards are face-up, and
/// which have been matched for good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    size: usize,
    /// Row-major. Empty cells start out revealed and stay that way.
    revealed: Vec<bool>,
    /// Only ever grows.
    matched: BTreeSet<Point>,
}

impl Table {
    pub fn new(board: &Board) -> Self {
        let size = board.size();
        let mut revealed = vec![false; size * size];
        for point in board.empty_cells() {
            revealed[point.index(size)] = true;
        }
        Self {
            size,
            revealed,
            matched: BTreeSet::new(),
        }
    }

    pub fn is_revealed(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size && self.revealed[point.index(self.size)]
    }

    pub fn is_matched(&self, point: Point) -> bool {
        self.matched.contains(&point)
    }

    pub fn matched(&self) -> &BTreeSet<Point> {
        &self.matched
    }

    /// Turns a card face-up and returns its symbol.
    ///
    /// Flipping a card that is already face-up but not matched is allowed, and
    /// has no further effect.
    pub fn flip(&mut self, board: &Board, point: Point) -> Result<Symbol, IllegalFlip> {
        if !board.contains(point) {
            return Err(IllegalFlip::OutOfBounds { point });
        }
        if self.is_matched(point) {
            return Err(IllegalFlip::AlreadyMatched { point });
        }
        let symbol = board
            .symbol_at(point)
            .ok_or(IllegalFlip::EmptyCell { point })?;
        self.revealed[point.index(self.size)] = true;
        Ok(symbol)
    }

    /// Turns a card face-down again. Matched cards stay face-up.
    pub fn hide(&mut self, point: Point) {
        if point.x < self.size && point.y < self.size && !self.is_matched(point) {
            self.revealed[point.index(self.size)] = false;
        }
    }

    /// Leaves both cards face-up permanently.
    pub fn mark_matched(&mut self, first: Point, second: Point) {
        for point in [first, second] {
            self.revealed[point.index(self.size)] = true;
            self.matched.insert(point);
        }
    }

    /// Whether no pair is left to be found.
    pub fn all_matched(&self, board: &Board) -> bool {
        self.matched.len() >= board.num_pairs() * 2
    }
}

/// What a player is allowed to see of the game: the board size, empty cells,
/// and the symbols of face-up cards.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    board: &'a Board,
    table: &'a Table,
}

impl<'a> TableView<'a> {
    pub fn new(board: &'a Board, table: &'a Table) -> Self {
        Self { board, table }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.board.contains(point)
    }

    pub fn is_revealed(&self, point: Point) -> bool {
        self.table.is_revealed(point)
    }

    pub fn is_matched(&self, point: Point) -> bool {
        self.table.is_matched(point)
    }

    pub fn is_empty(&self, point: Point) -> bool {
        self.board.is_empty(point)
    }

    /// The symbol of a face-up card, `None` for face-down and empty cells.
    pub fn visible_symbol(&self, point: Point) -> Option<Symbol> {
        if self.is_revealed(point) {
            self.board.symbol_at(point)
        } else {
            None
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        self.board.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        "AAB\nBC.\nC..".parse().unwrap()
    }

    #[test]
    fn empty_cells_start_revealed() {
        let board = board();
        let table = Table::new(&board);
        assert!(table.is_revealed(Point::new(2, 1)));
        assert!(!table.is_revealed(Point::new(0, 0)));
        assert!(table.matched().is_empty());
    }

    #[test]
    fn hiding_restores_previous_state() {
        let board = board();
        let mut table = Table::new(&board);
        let before = table.clone();
        let first = Point::new(0, 0);
        let second = Point::new(2, 0);
        assert_eq!(table.flip(&board, first), Ok(Symbol::nth(0)));
        assert_eq!(table.flip(&board, second), Ok(Symbol::nth(1)));
        assert!(table.is_revealed(first) && table.is_revealed(second));
        table.hide(first);
        table.hide(second);
        assert_eq!(table, before);
    }

    #[test]
    fn illegal_flips() {
        let board = board();
        let mut table = Table::new(&board);
        let outside = Point::new(3, 0);
        assert_eq!(
            table.flip(&board, outside),
            Err(IllegalFlip::OutOfBounds { point: outside })
        );
        let empty = Point::new(2, 1);
        assert_eq!(
            table.flip(&board, empty),
            Err(IllegalFlip::EmptyCell { point: empty })
        );
        table.mark_matched(Point::new(0, 0), Point::new(1, 0));
        assert_eq!(
            table.flip(&board, Point::new(1, 0)),
            Err(IllegalFlip::AlreadyMatched {
                point: Point::new(1, 0)
            })
        );
    }

    #[test]
    fn matched_cards_stay_face_up() {
        let board = board();
        let mut table = Table::new(&board);
        table.mark_matched(Point::new(0, 0), Point::new(1, 0));
        table.hide(Point::new(0, 0));
        assert!(table.is_revealed(Point::new(0, 0)));
        assert!(!table.all_matched(&board));
        table.mark_matched(Point::new(2, 0), Point::new(0, 1));
        table.mark_matched(Point::new(1, 1), Point::new(0, 2));
        assert!(table.all_matched(&board));
    }

    #[test]
    fn view_only_shows_face_up_symbols() {
        let board = board();
        let mut table = Table::new(&board);
        table.flip(&board, Point::new(1, 1)).unwrap();
        let view = TableView::new(&board, &table);
        assert_eq!(view.visible_symbol(Point::new(1, 1)), Some(Symbol::nth(2)));
        assert_eq!(view.visible_symbol(Point::new(0, 0)), None);
        assert_eq!(view.visible_symbol(Point::new(2, 2)), None);
        assert!(view.is_empty(Point::new(2, 2)));
    }
}
