// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Player progression vocabulary.
//!
//! [`PlayerLevel`] is the rank the player has earned, named for how many
//! kalimba notes they know. It only ever goes up. [`PlayerMode`] is the
//! current interaction context and changes abruptly; the two are orthogonal.

use thiserror::Error;

/// The player's earned rank. Derives `Ord` so that "unlocked at or after"
/// checks read as plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum PlayerLevel {
    NewGame,
    OneNote,
    TwoNotes,
    ThreeNotes,
    FourNotes,
    FiveNotes,
    SixNotes,
    SevenNotes,
}

/// The current interaction context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlayerMode {
    Normal,
    Talking,
    Performing,
}

#[derive(Debug, Error)]
pub(crate) enum ProgressionError {
    #[error("player level {0} is out of range (levels are 0 through 7)")]
    LevelOutOfRange(u8),
}

impl PlayerLevel {
    pub(crate) fn next(self) -> Option<PlayerLevel> {
        match self {
            PlayerLevel::NewGame => Some(PlayerLevel::OneNote),
            PlayerLevel::OneNote => Some(PlayerLevel::TwoNotes),
            PlayerLevel::TwoNotes => Some(PlayerLevel::ThreeNotes),
            PlayerLevel::ThreeNotes => Some(PlayerLevel::FourNotes),
            PlayerLevel::FourNotes => Some(PlayerLevel::FiveNotes),
            PlayerLevel::FiveNotes => Some(PlayerLevel::SixNotes),
            PlayerLevel::SixNotes => Some(PlayerLevel::SevenNotes),
            PlayerLevel::SevenNotes => None,
        }
    }

    /// Human-readable form for the status line.
    pub(crate) fn title(self) -> &'static str {
        match self {
            PlayerLevel::NewGame => "New Game",
            PlayerLevel::OneNote => "One Note",
            PlayerLevel::TwoNotes => "Two Notes",
            PlayerLevel::ThreeNotes => "Three Notes",
            PlayerLevel::FourNotes => "Four Notes",
            PlayerLevel::FiveNotes => "Five Notes",
            PlayerLevel::SixNotes => "Six Notes",
            PlayerLevel::SevenNotes => "Seven Notes",
        }
    }
}

impl PlayerMode {
    pub(crate) fn title(self) -> &'static str {
        match self {
            PlayerMode::Normal => "Roaming",
            PlayerMode::Talking => "Talking",
            PlayerMode::Performing => "Performing",
        }
    }
}

impl TryFrom<u8> for PlayerLevel {
    type Error = ProgressionError;

    /// Converts the numeric form used by the configuration file. Anything
    /// outside 0..=7 is a configuration error the caller must treat as
    /// fatal.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlayerLevel::NewGame),
            1 => Ok(PlayerLevel::OneNote),
            2 => Ok(PlayerLevel::TwoNotes),
            3 => Ok(PlayerLevel::ThreeNotes),
            4 => Ok(PlayerLevel::FourNotes),
            5 => Ok(PlayerLevel::FiveNotes),
            6 => Ok(PlayerLevel::SixNotes),
            7 => Ok(PlayerLevel::SevenNotes),
            _ => Err(ProgressionError::LevelOutOfRange(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(PlayerLevel::NewGame < PlayerLevel::OneNote);
        assert!(PlayerLevel::SixNotes < PlayerLevel::SevenNotes);
    }

    #[test]
    fn next_walks_the_whole_ladder() {
        let mut level = PlayerLevel::NewGame;
        let mut steps = 0;
        while let Some(up) = level.next() {
            assert!(up > level);
            level = up;
            steps += 1;
        }
        assert_eq!(level, PlayerLevel::SevenNotes);
        assert_eq!(steps, 7);
    }

    #[test]
    fn numeric_levels_convert_within_range() {
        assert_eq!(PlayerLevel::try_from(0).unwrap(), PlayerLevel::NewGame);
        assert_eq!(PlayerLevel::try_from(7).unwrap(), PlayerLevel::SevenNotes);
        assert!(PlayerLevel::try_from(8).is_err());
        assert!(PlayerLevel::try_from(255).is_err());
    }
}
