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

//! The seam between the control core and whatever draws the deck.

use crate::model::DeckButton;

/// Per-button primitives of the on-screen control subsystem.
///
/// `submit` and `deselect` are the pressed/released appearance signals;
/// they carry no gameplay meaning.
pub(crate) trait ControlSurface {
    fn set_visible(&mut self, button: DeckButton, visible: bool);
    fn submit(&mut self, button: DeckButton);
    fn deselect(&mut self, button: DeckButton);
}
