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

//! The on-screen control deck.
//!
//! Eight buttons in a fixed row. The view owns the per-button visible and
//! pressed state the control core drives through [`ControlSurface`], and it
//! remembers where each button was drawn so mouse clicks can be resolved
//! back to a button.

pub(crate) mod render;

use ratatui::layout::{Position, Rect};

use crate::control::surface::ControlSurface;
use crate::model::DeckButton;

pub(crate) struct DeckView {
    visible: [bool; 8],
    pressed: [bool; 8],
    areas: [Option<Rect>; 8],
}

impl DeckView {
    pub(crate) fn new() -> Self {
        Self {
            visible: [false; 8],
            pressed: [false; 8],
            areas: [None; 8],
        }
    }

    pub(crate) fn is_visible(&self, button: DeckButton) -> bool {
        self.visible[button.index()]
    }

    pub(crate) fn is_pressed(&self, button: DeckButton) -> bool {
        self.pressed[button.index()]
    }

    /// Clears every pressed flag. Used when the active key map changes, so
    /// a held key from the old map cannot leave its button lit.
    pub(crate) fn release_all(&mut self) {
        self.pressed = [false; 8];
    }

    /// Resolves a terminal cell to the visible button drawn there, if any.
    /// Hidden buttons have no area and therefore cannot be hit.
    pub(crate) fn hit(&self, column: u16, row: u16) -> Option<DeckButton> {
        let position = Position::new(column, row);
        DeckButton::ALL
            .into_iter()
            .find(|button| self.areas[button.index()].is_some_and(|area| area.contains(position)))
    }
}

impl ControlSurface for DeckView {
    fn set_visible(&mut self, button: DeckButton, visible: bool) {
        let index = button.index();
        self.visible[index] = visible;
        if !visible {
            self.pressed[index] = false;
            self.areas[index] = None;
        }
    }

    fn submit(&mut self, button: DeckButton) {
        self.pressed[button.index()] = true;
    }

    fn deselect(&mut self, button: DeckButton) {
        self.pressed[button.index()] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_drawn_buttons_can_be_hit() {
        let mut deck = DeckView::new();
        deck.set_visible(DeckButton::Five, true);
        deck.areas[DeckButton::Five.index()] = Some(Rect::new(10, 2, 8, 3));

        assert_eq!(deck.hit(12, 3), Some(DeckButton::Five));
        assert_eq!(deck.hit(0, 0), None);
    }

    #[test]
    fn hiding_a_button_clears_its_pressed_state_and_area() {
        let mut deck = DeckView::new();
        deck.set_visible(DeckButton::Two, true);
        deck.areas[DeckButton::Two.index()] = Some(Rect::new(0, 0, 8, 3));
        deck.submit(DeckButton::Two);
        assert!(deck.is_pressed(DeckButton::Two));

        deck.set_visible(DeckButton::Two, false);

        assert!(!deck.is_pressed(DeckButton::Two));
        assert_eq!(deck.hit(1, 1), None);
    }

    #[test]
    fn submit_and_deselect_toggle_the_pressed_look() {
        let mut deck = DeckView::new();
        deck.set_visible(DeckButton::Bard, true);

        deck.submit(DeckButton::Bard);
        assert!(deck.is_pressed(DeckButton::Bard));

        deck.deselect(DeckButton::Bard);
        assert!(!deck.is_pressed(DeckButton::Bard));
    }
}
