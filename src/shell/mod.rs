//! Player-facing input and output. The engine only talks to players through
//! the [`Shell`] trait; [`ConsoleShell`] is the line-based terminal version.

mod console;

pub use console::{parse_column, ConsoleShell};

use crate::error::ShellError;
use crate::game::{ActivePlayer, Board};

/// The narrow interface the game engine uses to reach the players.
pub trait Shell {
    /// Ask for the name of the player in `seat`.
    fn prompt_name(&mut self, seat: ActivePlayer) -> Result<String, ShellError>;

    /// Ask `player` for a move. `available` holds the 0-based columns that
    /// accept a drop; the returned column is 0-based too.
    fn prompt_move(&mut self, player: &str, available: &[usize]) -> Result<usize, ShellError>;

    fn render_board(&mut self, board: &Board) -> Result<(), ShellError>;

    /// Report the end of the game. `None` means a draw.
    fn announce_result(&mut self, winner: Option<&str>) -> Result<(), ShellError>;
}
