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

//! Physical-channel input vocabulary.

use crate::model::deck::Note;

/// A named action delivered by the physical channel.
///
/// Gameplay actions mean the same thing in every mode; notes are only ever
/// produced by the performing input context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputAction {
    Advance,
    Retreat,
    Ascend,
    Guard,
    Crouch,
    Strike,
    Cast,
    Perform,
    Continue,
    Note(Note),
}

/// The press/release phase of a physical input event. Phases drive visual
/// feedback only; command invocation rides the separate performed flag of
/// the same event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputPhase {
    Press,
    Release,
}
