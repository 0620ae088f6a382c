pub mod ai;
pub mod human_player;
pub mod player;

pub use human_player::HumanPlayer;
pub use player::{GameResult, Player};
