//! Core Connect Four game logic: board representation, player identities, and
//! the turn-by-turn game engine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, Mark, Position, COLS, ROWS, WIN_LENGTH};
pub use engine::{GameEngine, GameOutcome};
pub use player::{ActivePlayer, Player};
