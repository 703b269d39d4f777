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

//! Domain models and core data structures.
//!
//! This module defines the closed vocabularies the rest of the application
//! dispatches over: the deck buttons and their notes, the player's
//! progression level and mode, and the physical-channel input actions.
//! Everything here is a plain enum so that routing is an exhaustive match
//! rather than a string comparison with a fallback branch.

mod deck;
mod input;
mod progression;

pub(crate) use deck::{DeckButton, Note};
pub(crate) use input::{InputAction, InputPhase};
pub(crate) use progression::{PlayerLevel, PlayerMode, ProgressionError};
