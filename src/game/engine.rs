use rand::Rng;
use tracing::{debug, info, warn};

use super::board::{Board, Mark, Position};
use super::player::{ActivePlayer, Player};
use crate::error::{MoveError, ShellError};
use crate::shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(ActivePlayer),
    Draw,
}

/// Board state, turn tracking and win/draw evaluation for one game.
///
/// Moves are made in three steps that callers must keep in order:
/// [`resolve_drop`](Self::resolve_drop), [`apply_move`](Self::apply_move), then
/// [`evaluate_win`](Self::evaluate_win) / [`record_winner`](Self::record_winner)
/// *before* [`advance_turn`](Self::advance_turn). [`play_move`](Self::play_move)
/// does all of it.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active_player: ActivePlayer,
    winner: Option<ActivePlayer>,
    player1: Option<Player>,
    player2: Option<Player>,
}

impl GameEngine {
    /// Empty board; the starting player is drawn from `rng`.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            ActivePlayer::Player1
        } else {
            ActivePlayer::Player2
        };
        Self::with_state(Board::new(), first)
    }

    /// Start from an explicit board and player to move.
    pub fn with_state(board: Board, active_player: ActivePlayer) -> Self {
        GameEngine {
            board,
            active_player,
            winner: None,
            player1: None,
            player2: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> ActivePlayer {
        self.active_player
    }

    pub fn winner(&self) -> Option<ActivePlayer> {
        self.winner
    }

    /// Fill in both player identities.
    ///
    /// Meant to be called once per game; a later call replaces both.
    pub fn assign_players(&mut self, player1: Player, player2: Player) {
        self.player1 = Some(player1);
        self.player2 = Some(player2);
    }

    pub fn player(&self, seat: ActivePlayer) -> Option<&Player> {
        match seat {
            ActivePlayer::Player1 => self.player1.as_ref(),
            ActivePlayer::Player2 => self.player2.as_ref(),
        }
    }

    /// The seat's name, or "player N" when no identity was assigned.
    pub fn display_name(&self, seat: ActivePlayer) -> String {
        self.player(seat)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| seat.to_string())
    }

    pub fn available_columns(&self) -> Vec<usize> {
        self.board.available_columns()
    }

    pub fn is_board_filled(&self) -> bool {
        self.board.is_full()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_board_filled() || self.winner.is_some()
    }

    /// `None` while the game is in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner {
            Some(seat) => Some(GameOutcome::Winner(seat)),
            None if self.is_board_filled() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    pub fn resolve_drop(&self, column: usize) -> Result<Position, MoveError> {
        self.board.resolve_drop(column)
    }

    /// Write `mark` at `pos`. `pos` must come from `resolve_drop` on the
    /// current board.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) {
        self.board.place(pos, mark);
    }

    pub fn advance_turn(&mut self) {
        self.active_player = self.active_player.other();
    }

    pub fn current_mark(&self) -> Mark {
        self.active_player.mark()
    }

    /// Does `last_move` complete a line for the player who is still active?
    pub fn evaluate_win(&self, last_move: Position) -> bool {
        self.board.is_winning_position(last_move, self.current_mark())
    }

    /// Credit the active player with the win. The first recorded winner sticks.
    pub fn record_winner(&mut self) {
        if self.winner.is_none() {
            info!(winner = %self.active_player, "winner recorded");
            self.winner = Some(self.active_player);
        }
    }

    /// Drop the active player's mark into `column` and finish the turn.
    pub fn play_move(&mut self, column: usize) -> Result<Position, MoveError> {
        let pos = self.resolve_drop(column)?;
        self.apply_move(pos, self.current_mark());
        debug!(
            player = %self.active_player,
            row = pos.row,
            col = pos.col,
            "move applied"
        );

        if self.evaluate_win(pos) {
            self.record_winner();
        }
        self.advance_turn();
        Ok(pos)
    }

    /// Prompt for and play moves until the game is over.
    pub fn run_turn_cycle<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<(), ShellError> {
        while !self.is_game_over() {
            shell.render_board(&self.board)?;

            let name = self.display_name(self.active_player);
            let available = self.available_columns();
            let column = shell.prompt_move(&name, &available)?;

            if let Err(err) = self.play_move(column) {
                warn!(%err, column, "rejected move from shell");
            }
        }
        shell.render_board(&self.board)?;
        Ok(())
    }

    /// Ask for both names, play the game out and announce the result.
    pub fn run_session<S: Shell + ?Sized>(
        &mut self,
        shell: &mut S,
    ) -> Result<GameOutcome, ShellError> {
        let player1 = Player::new(shell.prompt_name(ActivePlayer::Player1)?);
        let player2 = Player::new(shell.prompt_name(ActivePlayer::Player2)?);
        info!(player1 = %player1.name, player2 = %player2.name, first = %self.active_player, "session started");
        self.assign_players(player1, player2);

        self.run_turn_cycle(shell)?;

        // The turn cycle only returns once the game is over.
        let outcome = self.outcome().unwrap_or(GameOutcome::Draw);
        match outcome {
            GameOutcome::Winner(seat) => {
                let name = self.display_name(seat);
                shell.announce_result(Some(&name))?;
            }
            GameOutcome::Draw => shell.announce_result(None)?,
        }
        info!(?outcome, "session finished");
        Ok(outcome)
    }
}
