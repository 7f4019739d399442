use pexeso::{Point, Symbol};

/// Where the bot has seen which symbol.
///
/// Symbols are kept in the order in which they were first seen, and the points
/// of each symbol in the order in which they were seen. Only points the bot has
/// flipped itself end up in here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotMemory {
    groups: Vec<(Symbol, Vec<Point>)>,
}

impl BotMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers that `point` shows `symbol`. Observing the same card again has no effect.
    pub fn observe(&mut self, point: Point, symbol: Symbol) {
        match self.groups.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, points)) => {
                if !points.contains(&point) {
                    points.push(point);
                }
            }
            None => self.groups.push((symbol, vec![point])),
        }
    }

    /// All symbols seen so far with their points, in order of first observation.
    pub fn groups(&self) -> impl Iterator<Item = (Symbol, &[Point])> + '_ {
        self.groups
            .iter()
            .map(|(symbol, points)| (*symbol, points.as_slice()))
    }

    pub fn points_of(&self, symbol: Symbol) -> &[Point] {
        self.groups()
            .find(|(s, _)| *s == symbol)
            .map(|(_, points)| points)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn observing_twice_changes_nothing(observations: Vec<(u8, u8, u8)>) -> bool {
            let mut memory = BotMemory::new();
            for &(x, y, s) in &observations {
                memory.observe(Point::new(usize::from(x % 6), usize::from(y % 6)), Symbol::nth(u32::from(s % 8)));
            }
            let before = memory.clone();
            for &(x, y, s) in &observations {
                memory.observe(Point::new(usize::from(x % 6), usize::from(y % 6)), Symbol::nth(u32::from(s % 8)));
            }
            memory == before
        }
    }

    #[test]
    fn keeps_order_of_first_observation() {
        let mut memory = BotMemory::new();
        let (a, b) = (Symbol::nth(0), Symbol::nth(1));
        memory.observe(Point::new(1, 1), b);
        memory.observe(Point::new(0, 0), a);
        memory.observe(Point::new(2, 1), b);
        memory.observe(Point::new(1, 1), b);

        let symbols: Vec<Symbol> = memory.groups().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec![b, a]);
        assert_eq!(memory.points_of(b), &[Point::new(1, 1), Point::new(2, 1)]);
        assert_eq!(memory.points_of(Symbol::nth(5)), &[] as &[Point]);
    }
}
