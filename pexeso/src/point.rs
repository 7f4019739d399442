/// A cell coordinate on the board.
///
/// `x` is the column and `y` the row, both counted from the top left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Iterates over all points of a `size` x `size` board in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Point> {
        (0..size).flat_map(move |y| (0..size).map(move |x| Point { x, y }))
    }

    pub(crate) fn index(self, size: usize) -> usize {
        self.y * size + self.x
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
