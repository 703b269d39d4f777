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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The screen is a fixed vertical
//! stack: the scene (activity feed), the control deck, a status line and
//! the console line.

mod commander;
mod scene;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    components::deck::render::draw_deck,
    render::{commander::draw_commander, scene::draw_scene, status::draw_status},
};

/// Renders the user interface to the terminal frame.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_scene(f, outer[0], app);

    {
        let mut deck = app.deck.borrow_mut();
        draw_deck(f, outer[1], &mut deck, app.progression.mode(), &app.theme);
    }

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);
}
