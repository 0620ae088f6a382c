mod board;
mod mark;
mod moves;

pub use board::*;
pub use mark::*;
pub use moves::*;
