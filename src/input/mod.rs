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

//! Keyboard adapter for the physical channel.
//!
//! One key map per input context, and only the active context's map is
//! consulted; that is what restricts which actions can reach the router in
//! each mode. The shell switches the active context whenever the player
//! mode changes. Keys with no entry in the active map are dropped here,
//! silently.

use crossterm::event::KeyCode;

use crate::model::{InputAction, Note, PlayerMode};

/// The active key map. Mirrors the player mode one-to-one, but the mapping
/// is owned by the shell, not by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputContext {
    Gameplay,
    Talking,
    Performing,
}

impl InputContext {
    pub(crate) fn for_mode(mode: PlayerMode) -> Self {
        match mode {
            PlayerMode::Normal => InputContext::Gameplay,
            PlayerMode::Talking => InputContext::Talking,
            PlayerMode::Performing => InputContext::Performing,
        }
    }
}

pub(crate) struct Keymap {
    context: InputContext,
}

impl Keymap {
    pub(crate) fn new() -> Self {
        Self {
            context: InputContext::Gameplay,
        }
    }

    pub(crate) fn switch_context(&mut self, context: InputContext) {
        self.context = context;
    }

    pub(crate) fn action_for(&self, code: KeyCode) -> Option<InputAction> {
        match self.context {
            InputContext::Gameplay => gameplay_action(code),
            InputContext::Talking => talking_action(code),
            InputContext::Performing => performing_action(code),
        }
    }
}

fn gameplay_action(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Char('d') | KeyCode::Right => Some(InputAction::Advance),
        KeyCode::Char('a') | KeyCode::Left => Some(InputAction::Retreat),
        KeyCode::Char('w') | KeyCode::Up => Some(InputAction::Ascend),
        KeyCode::Char('g') => Some(InputAction::Guard),
        KeyCode::Char('c') => Some(InputAction::Crouch),
        KeyCode::Char('s') => Some(InputAction::Strike),
        KeyCode::Char('m') => Some(InputAction::Cast),
        KeyCode::Char('b') => Some(InputAction::Perform),
        _ => None,
    }
}

fn talking_action(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::Continue),
        _ => None,
    }
}

fn performing_action(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Char('1') => Some(InputAction::Note(Note::One)),
        KeyCode::Char('2') => Some(InputAction::Note(Note::Two)),
        KeyCode::Char('3') => Some(InputAction::Note(Note::Three)),
        KeyCode::Char('4') => Some(InputAction::Note(Note::Four)),
        KeyCode::Char('5') => Some(InputAction::Note(Note::Five)),
        KeyCode::Char('6') => Some(InputAction::Note(Note::Six)),
        KeyCode::Char('7') => Some(InputAction::Note(Note::Seven)),
        KeyCode::Char('b') => Some(InputAction::Perform),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gameplay_keys_map_to_gameplay_actions() {
        let keymap = Keymap::new();

        assert_eq!(keymap.action_for(KeyCode::Char('g')), Some(InputAction::Guard));
        assert_eq!(keymap.action_for(KeyCode::Right), Some(InputAction::Advance));
        assert_eq!(keymap.action_for(KeyCode::Char('1')), None);
    }

    #[test]
    fn talking_context_only_continues() {
        let mut keymap = Keymap::new();
        keymap.switch_context(InputContext::Talking);

        assert_eq!(keymap.action_for(KeyCode::Enter), Some(InputAction::Continue));
        assert_eq!(keymap.action_for(KeyCode::Char(' ')), Some(InputAction::Continue));
        assert_eq!(keymap.action_for(KeyCode::Char('g')), None);
        assert_eq!(keymap.action_for(KeyCode::Char('3')), None);
    }

    #[test]
    fn performing_context_maps_digits_to_notes() {
        let mut keymap = Keymap::new();
        keymap.switch_context(InputContext::Performing);

        assert_eq!(
            keymap.action_for(KeyCode::Char('3')),
            Some(InputAction::Note(Note::Three))
        );
        assert_eq!(keymap.action_for(KeyCode::Char('b')), Some(InputAction::Perform));
        assert_eq!(keymap.action_for(KeyCode::Char('s')), None);
    }

    #[test]
    fn contexts_follow_modes() {
        assert_eq!(
            InputContext::for_mode(PlayerMode::Performing),
            InputContext::Performing
        );
        assert_eq!(InputContext::for_mode(PlayerMode::Normal), InputContext::Gameplay);
    }
}
