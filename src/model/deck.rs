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

//! The control deck vocabulary.
//!
//! Eight fixed buttons make up the on-screen deck. A button's visual
//! identity (its label) never changes; what activating it *means* depends on
//! the current player mode, which is resolved elsewhere. Each button is also
//! one kalimba tine, so every button has a note.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::progression::PlayerLevel;

/// One of the eight on-screen deck buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DeckButton {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Bard,
}

/// A kalimba note, labelled "1" through "7" plus "B".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Note {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    B,
}

#[derive(Debug, Error)]
pub(crate) enum DeckError {
    #[error("no deck button named \"{0}\"")]
    UnknownButton(String),
}

impl DeckButton {
    pub(crate) const ALL: [DeckButton; 8] = [
        DeckButton::One,
        DeckButton::Two,
        DeckButton::Three,
        DeckButton::Four,
        DeckButton::Five,
        DeckButton::Six,
        DeckButton::Seven,
        DeckButton::Bard,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            DeckButton::One => 0,
            DeckButton::Two => 1,
            DeckButton::Three => 2,
            DeckButton::Four => 3,
            DeckButton::Five => 4,
            DeckButton::Six => 5,
            DeckButton::Seven => 6,
            DeckButton::Bard => 7,
        }
    }

    /// The fixed identity label painted on the button face.
    pub(crate) fn label(self) -> &'static str {
        match self {
            DeckButton::One => "1",
            DeckButton::Two => "2",
            DeckButton::Three => "3",
            DeckButton::Four => "4",
            DeckButton::Five => "5",
            DeckButton::Six => "6",
            DeckButton::Seven => "7",
            DeckButton::Bard => "B",
        }
    }

    /// The tine this button strikes while performing.
    pub(crate) fn note(self) -> Note {
        match self {
            DeckButton::One => Note::One,
            DeckButton::Two => Note::Two,
            DeckButton::Three => Note::Three,
            DeckButton::Four => Note::Four,
            DeckButton::Five => Note::Five,
            DeckButton::Six => Note::Six,
            DeckButton::Seven => Note::Seven,
            DeckButton::Bard => Note::B,
        }
    }

    /// The player level at which this button first appears.
    ///
    /// The unlock order is not the button order: progression hands the
    /// player movement first, then the kalimba, and combat last.
    pub(crate) fn unlocked_at(self) -> PlayerLevel {
        match self {
            DeckButton::Five => PlayerLevel::NewGame,
            DeckButton::Bard => PlayerLevel::OneNote,
            DeckButton::Four => PlayerLevel::TwoNotes,
            DeckButton::Three => PlayerLevel::ThreeNotes,
            DeckButton::Two => PlayerLevel::FourNotes,
            DeckButton::Six => PlayerLevel::FiveNotes,
            DeckButton::One => PlayerLevel::SixNotes,
            DeckButton::Seven => PlayerLevel::SevenNotes,
        }
    }

    pub(crate) fn is_unlocked(self, level: PlayerLevel) -> bool {
        level >= self.unlocked_at()
    }
}

impl Note {
    pub(crate) fn button(self) -> DeckButton {
        match self {
            Note::One => DeckButton::One,
            Note::Two => DeckButton::Two,
            Note::Three => DeckButton::Three,
            Note::Four => DeckButton::Four,
            Note::Five => DeckButton::Five,
            Note::Six => DeckButton::Six,
            Note::Seven => DeckButton::Seven,
            Note::B => DeckButton::Bard,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.button().label())
    }
}

impl FromStr for DeckButton {
    type Err = DeckError;

    /// Parses the token forms the console accepts: "1".."7", "b" or "bard".
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "1" => Ok(DeckButton::One),
            "2" => Ok(DeckButton::Two),
            "3" => Ok(DeckButton::Three),
            "4" => Ok(DeckButton::Four),
            "5" => Ok(DeckButton::Five),
            "6" => Ok(DeckButton::Six),
            "7" => Ok(DeckButton::Seven),
            "b" | "bard" => Ok(DeckButton::Bard),
            _ => Err(DeckError::UnknownButton(token.to_string())),
        }
    }
}
