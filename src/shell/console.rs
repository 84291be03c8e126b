use std::io::{BufRead, Write};

use tracing::debug;

use super::Shell;
use crate::error::ShellError;
use crate::game::{ActivePlayer, Board};

/// Parse a 1-indexed column typed by a player.
///
/// Returns the 0-based column, or `None` if the text is not a number or the
/// column is not among `available`.
pub fn parse_column(input: &str, available: &[usize]) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    let column = number.checked_sub(1)?;
    available.contains(&column).then_some(column)
}

fn format_columns(available: &[usize]) -> String {
    available
        .iter()
        .map(|col| (col + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Line-based prompts over any reader/writer pair (stdin/stdout in the binary).
pub struct ConsoleShell<R, W> {
    input: R,
    output: W,
    max_attempts: Option<usize>,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleShell {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Give up on a move prompt after this many rejected entries.
    /// `None` keeps asking until input runs out.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str, what: &'static str) -> Result<String, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed(what));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Shell for ConsoleShell<R, W> {
    fn prompt_name(&mut self, seat: ActivePlayer) -> Result<String, ShellError> {
        self.ask(&format!("Enter name for player {}: ", seat.number()), "name")
    }

    fn prompt_move(&mut self, player: &str, available: &[usize]) -> Result<usize, ShellError> {
        let prompt = format!("Enter move for {player}: ");
        let mut rejected = 0;
        loop {
            let line = self.ask(&prompt, "move")?;
            if let Some(column) = parse_column(&line, available) {
                return Ok(column);
            }

            rejected += 1;
            debug!(input = %line, rejected, "rejected move input");
            writeln!(
                self.output,
                "Available columns are: {}",
                format_columns(available)
            )?;

            if self.max_attempts.is_some_and(|max| rejected >= max) {
                return Err(ShellError::AttemptsExhausted {
                    what: "move",
                    attempts: rejected,
                });
            }
        }
    }

    fn render_board(&mut self, board: &Board) -> Result<(), ShellError> {
        write!(self.output, "{board}")?;
        self.output.flush()?;
        Ok(())
    }

    fn announce_result(&mut self, winner: Option<&str>) -> Result<(), ShellError> {
        match winner {
            Some(name) => writeln!(self.output, "Congratulations, {name}!")?,
            None => writeln!(self.output, "It's a draw")?,
        }
        self.output.flush()?;
        Ok(())
    }
}
