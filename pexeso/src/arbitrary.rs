use quickcheck::{Arbitrary, Gen};

/// A board size small enough to keep property tests fast.
#[derive(Clone, Copy, Debug)]
pub struct BoardSize(pub usize);

impl Arbitrary for BoardSize {
    fn arbitrary(g: &mut Gen) -> Self {
        BoardSize(usize::arbitrary(g) % 12 + 1)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((1..self.0).rev().map(BoardSize))
    }
}
