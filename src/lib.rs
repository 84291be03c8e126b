//! # Connect Four
//!
//! A two-player Connect Four game for the terminal: players take turns dropping
//! marks into a 6x7 grid until one of them lines up four or the board fills.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, turn engine
//! - [`shell`]: Prompts and output; the engine's only way to reach players
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod shell;
