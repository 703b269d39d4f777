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

//! Physical-input feedback on the on-screen deck.
//!
//! Pressing a key and tapping its on-screen twin must look identical, so
//! the press/release phase of every routed physical event is mirrored onto
//! the bound button's appearance.

use crate::control::surface::ControlSurface;
use crate::model::{DeckButton, InputPhase};

pub(crate) struct FeedbackController;

impl FeedbackController {
    pub(crate) fn on_phase(
        &self,
        button: DeckButton,
        phase: InputPhase,
        surface: &mut dyn ControlSurface,
    ) {
        match phase {
            InputPhase::Press => surface.submit(button),
            InputPhase::Release => surface.deselect(button),
        }
    }
}
