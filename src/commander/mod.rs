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

//! Command-line input logic and state management.
//!
//! The `:`-activated console is the demo's stand-in for the game manager:
//! it owns pausing, levelling, mode switches and conversation starts, and
//! it can deliver raw on-screen tokens (`tap <button>`) straight into the
//! router's token path.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::events::AppEvent;
use crate::model::{PlayerLevel, PlayerMode};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the console. Returns `true` when the
    /// event was consumed and must not reach the gameplay key maps.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = &event else {
            return false;
        };

        if self.active {
            // Swallow releases too; a console keystroke must not leak its
            // release into the gameplay maps.
            if key_event.kind == KeyEventKind::Release {
                return true;
            }

            match key_event.code {
                KeyCode::Esc => {
                    self.input.reset();
                    self.active = false;
                }

                KeyCode::Enter => {
                    let buffer = self.input.value().trim().to_string();
                    if !buffer.is_empty() {
                        self.run_command(&buffer, event_tx);
                    }
                    self.input.reset();
                    self.active = false;
                }

                _ => {
                    self.input.handle_event(&event);
                }
            }

            true
        } else {
            match key_event.code {
                KeyCode::Char(':') if key_event.kind == KeyEventKind::Press => {
                    self.active = true;
                    true
                }

                _ => false,
            }
        }
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        let event = match parts.as_slice() {
            ["q"] | ["quit"] => AppEvent::ExitApplication,

            ["pause"] => AppEvent::SetPaused(true),
            ["resume"] => AppEvent::SetPaused(false),

            ["talk"] => AppEvent::StartDialogue,
            ["normal"] => AppEvent::SetMode(PlayerMode::Normal),
            ["bard"] => AppEvent::SetMode(PlayerMode::Performing),

            ["levelup"] => AppEvent::LevelUp,
            ["level", value] => match parse_level(value) {
                Ok(level) => AppEvent::SetLevel(level),
                Err(message) => AppEvent::Error(message),
            },

            ["tap", token] => AppEvent::Tap(token.to_string()),

            [command, ..] => AppEvent::Error(format!("unknown command \"{command}\"")),

            [] => return,
        };

        event_tx.send(event).ok();
    }
}

fn parse_level(value: &str) -> Result<PlayerLevel, String> {
    let numeric: u8 = value
        .parse()
        .map_err(|_| format!("\"{value}\" is not a level number"))?;
    PlayerLevel::try_from(numeric).map_err(|err| err.to_string())
}
