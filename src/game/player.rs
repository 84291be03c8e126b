use std::fmt;

use super::board::Mark;

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivePlayer {
    Player1,
    Player2,
}

impl ActivePlayer {
    /// Get the other player
    pub fn other(self) -> ActivePlayer {
        match self {
            ActivePlayer::Player1 => ActivePlayer::Player2,
            ActivePlayer::Player2 => ActivePlayer::Player1,
        }
    }

    /// Player 1 plays X, player 2 plays O.
    pub fn mark(self) -> Mark {
        match self {
            ActivePlayer::Player1 => Mark::X,
            ActivePlayer::Player2 => Mark::O,
        }
    }

    /// 1-based seat number, as shown to players.
    pub fn number(self) -> u8 {
        match self {
            ActivePlayer::Player1 => 1,
            ActivePlayer::Player2 => 2,
        }
    }
}

impl fmt::Display for ActivePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// A player's identity. Carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(ActivePlayer::Player1.other(), ActivePlayer::Player2);
        assert_eq!(ActivePlayer::Player2.other(), ActivePlayer::Player1);
    }

    #[test]
    fn test_mark_bijection() {
        assert_eq!(ActivePlayer::Player1.mark(), Mark::X);
        assert_eq!(ActivePlayer::Player2.mark(), Mark::O);
    }

    #[test]
    fn test_display() {
        assert_eq!(ActivePlayer::Player2.to_string(), "player 2");
        assert_eq!(Player::new("Ada").name, "Ada");
    }
}
