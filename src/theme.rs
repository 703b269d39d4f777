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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) deck_label_colour: Color,

    pub(crate) feed_action_fg: Color,
    pub(crate) feed_note_fg: Color,
    pub(crate) feed_dialogue_fg: Color,
    pub(crate) feed_system_fg: Color,
    pub(crate) feed_error_fg: Color,

    pub(crate) status_fg: Color,
    pub(crate) paused_fg: Color,

    pub(crate) commander_colour: Color,
    pub(crate) commander_bg_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 22, 34),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),

            deck_label_colour: Color::Rgb(235, 219, 178),

            feed_action_fg: Color::Rgb(212, 212, 212),
            feed_note_fg: Color::Rgb(250, 189, 47),
            feed_dialogue_fg: Color::Rgb(179, 157, 219),
            feed_system_fg: Color::Rgb(140, 160, 140),
            feed_error_fg: Color::Rgb(220, 110, 110),

            status_fg: Color::Rgb(162, 161, 166),
            paused_fg: Color::Rgb(250, 120, 80),

            commander_colour: Color::Rgb(235, 219, 178),
            commander_bg_colour: Color::Rgb(40, 36, 56),
        }
    }
}
