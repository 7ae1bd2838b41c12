use std::fmt;

use crate::error::InputError;

/// Seat number of a player: one moves first in every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Number shown to players (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Inverse of [`PlayerId::number`], for building boards from digits.
    #[cfg(test)]
    pub(crate) fn from_number(number: u8) -> Option<PlayerId> {
        match number {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A trimmed, non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<PlayerName, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyName);
        }
        Ok(PlayerName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An identified player. Only the turn controller hands out ids, so a
/// player's id never changes once the game has started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: PlayerName,
    id: PlayerId,
}

impl Player {
    pub(crate) fn new(name: PlayerName, id: PlayerId) -> Self {
        Player { name, id }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
}

/// Both seats of a game, indexed by [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Seats([Player; 2]);

impl Seats {
    pub(crate) fn new(one: PlayerName, two: PlayerName) -> Self {
        Seats([Player::new(one, PlayerId::One), Player::new(two, PlayerId::Two)])
    }

    pub(crate) fn get(&self, id: PlayerId) -> &Player {
        &self.0[id.index()]
    }
}
