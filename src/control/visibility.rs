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

//! Progression-gated deck visibility.
//!
//! Two concerns decide what the player sees: the level unlocks buttons
//! cumulatively, and talking overrides everything except the continue
//! button (Five). The controller is a two-state machine so that leaving a
//! conversation restores exactly the latest level's set, even if the level
//! changed while the deck was hidden.

use crate::control::surface::ControlSurface;
use crate::model::{DeckButton, PlayerLevel, PlayerMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeckState {
    Showing(PlayerLevel),
    DialogueHidden(PlayerLevel),
}

pub(crate) struct VisibilityController {
    state: DeckState,
}

impl VisibilityController {
    /// Creates the controller and applies the starting level's set.
    pub(crate) fn new(level: PlayerLevel, surface: &mut dyn ControlSurface) -> Self {
        apply_level(level, surface);
        Self {
            state: DeckState::Showing(level),
        }
    }

    /// Shows exactly the cumulative set for `level`. While hidden for a
    /// conversation, only the saved level is updated; the new set applies
    /// when the conversation ends.
    pub(crate) fn on_level_changed(&mut self, level: PlayerLevel, surface: &mut dyn ControlSurface) {
        match self.state {
            DeckState::Showing(_) => {
                apply_level(level, surface);
                self.state = DeckState::Showing(level);
            }
            DeckState::DialogueHidden(_) => {
                self.state = DeckState::DialogueHidden(level);
            }
        }
    }

    pub(crate) fn on_mode_changed(&mut self, mode: PlayerMode, surface: &mut dyn ControlSurface) {
        match (self.state, mode == PlayerMode::Talking) {
            (DeckState::Showing(level), true) => {
                apply_talking(surface);
                self.state = DeckState::DialogueHidden(level);
            }
            (DeckState::DialogueHidden(level), false) => {
                apply_level(level, surface);
                self.state = DeckState::Showing(level);
            }
            _ => {}
        }
    }
}

fn apply_level(level: PlayerLevel, surface: &mut dyn ControlSurface) {
    for button in DeckButton::ALL {
        surface.set_visible(button, button.is_unlocked(level));
    }
}

// Everything except the continue button goes away while talking.
fn apply_talking(surface: &mut dyn ControlSurface) {
    for button in DeckButton::ALL {
        surface.set_visible(button, button == DeckButton::Five);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockSurface {
        visible: [bool; 8],
    }

    impl MockSurface {
        fn shown(&self) -> Vec<DeckButton> {
            DeckButton::ALL
                .into_iter()
                .filter(|b| self.visible[b.index()])
                .collect()
        }
    }

    impl ControlSurface for MockSurface {
        fn set_visible(&mut self, button: DeckButton, visible: bool) {
            self.visible[button.index()] = visible;
        }

        fn submit(&mut self, _button: DeckButton) {}

        fn deselect(&mut self, _button: DeckButton) {}
    }

    // The unlock order, one button per level.
    fn expected_set(level: PlayerLevel) -> Vec<DeckButton> {
        let order = [
            DeckButton::Five,
            DeckButton::Bard,
            DeckButton::Four,
            DeckButton::Three,
            DeckButton::Two,
            DeckButton::Six,
            DeckButton::One,
            DeckButton::Seven,
        ];
        let mut set: Vec<DeckButton> = order.into_iter().take(level as usize + 1).collect();
        set.sort_by_key(|b| b.index());
        set
    }

    #[test]
    fn each_level_shows_exactly_its_cumulative_set() {
        for level in [
            PlayerLevel::NewGame,
            PlayerLevel::OneNote,
            PlayerLevel::TwoNotes,
            PlayerLevel::ThreeNotes,
            PlayerLevel::FourNotes,
            PlayerLevel::FiveNotes,
            PlayerLevel::SixNotes,
            PlayerLevel::SevenNotes,
        ] {
            let mut surface = MockSurface::default();
            VisibilityController::new(level, &mut surface);

            let mut shown = surface.shown();
            shown.sort_by_key(|b| b.index());
            assert_eq!(shown, expected_set(level), "level {level:?}");
        }
    }

    #[test]
    fn a_new_game_shows_only_the_continue_button() {
        let mut surface = MockSurface::default();
        VisibilityController::new(PlayerLevel::NewGame, &mut surface);

        assert_eq!(surface.shown(), vec![DeckButton::Five]);
    }

    #[test]
    fn talking_hides_everything_except_five() {
        let mut surface = MockSurface::default();
        let mut controller = VisibilityController::new(PlayerLevel::SevenNotes, &mut surface);

        controller.on_mode_changed(PlayerMode::Talking, &mut surface);

        assert_eq!(surface.shown(), vec![DeckButton::Five]);
    }

    #[test]
    fn leaving_talking_restores_the_level_set() {
        let mut surface = MockSurface::default();
        let mut controller = VisibilityController::new(PlayerLevel::ThreeNotes, &mut surface);

        controller.on_mode_changed(PlayerMode::Talking, &mut surface);
        controller.on_mode_changed(PlayerMode::Normal, &mut surface);

        assert_eq!(surface.shown(), expected_set(PlayerLevel::ThreeNotes));
    }

    #[test]
    fn a_level_gained_while_talking_applies_on_return() {
        let mut surface = MockSurface::default();
        let mut controller = VisibilityController::new(PlayerLevel::NewGame, &mut surface);

        controller.on_mode_changed(PlayerMode::Talking, &mut surface);
        controller.on_level_changed(PlayerLevel::TwoNotes, &mut surface);
        // Still hidden mid-conversation.
        assert_eq!(surface.shown(), vec![DeckButton::Five]);

        controller.on_mode_changed(PlayerMode::Normal, &mut surface);
        assert_eq!(surface.shown(), expected_set(PlayerLevel::TwoNotes));
    }

    #[test]
    fn repeating_a_level_change_is_idempotent() {
        let mut surface = MockSurface::default();
        let mut controller = VisibilityController::new(PlayerLevel::FourNotes, &mut surface);

        controller.on_level_changed(PlayerLevel::FourNotes, &mut surface);
        controller.on_level_changed(PlayerLevel::FourNotes, &mut surface);

        assert_eq!(surface.shown(), expected_set(PlayerLevel::FourNotes));
    }

    #[test]
    fn mode_changes_that_do_not_cross_talking_change_nothing() {
        let mut surface = MockSurface::default();
        let mut controller = VisibilityController::new(PlayerLevel::FiveNotes, &mut surface);

        controller.on_mode_changed(PlayerMode::Performing, &mut surface);
        assert_eq!(surface.shown(), expected_set(PlayerLevel::FiveNotes));

        controller.on_mode_changed(PlayerMode::Normal, &mut surface);
        assert_eq!(surface.shown(), expected_set(PlayerLevel::FiveNotes));
    }
}
