pub use board::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use point::*;
pub use table::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod player;
mod point;
mod table;
mod turn;
mod visualization;
