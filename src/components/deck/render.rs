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

//! Render the control deck.
//!
//! Each visible button is drawn as a bordered cell with its fixed identity
//! label on top and its current meaning underneath. The caption comes from
//! the same resolution function the router uses, so the deck always shows
//! what a tap would actually do.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::components::deck::DeckView;
use crate::control::router::resolve_tap;
use crate::model::{DeckButton, PlayerMode};
use crate::theme::Theme;

const CELL_WIDTH: u16 = 11;

pub(crate) fn draw_deck(
    f: &mut Frame,
    area: Rect,
    deck: &mut DeckView,
    mode: PlayerMode,
    theme: &Theme,
) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH); 8])
        .flex(Flex::Center)
        .split(area);

    for button in DeckButton::ALL {
        let cell = cells[button.index()];

        if !deck.is_visible(button) {
            deck.areas[button.index()] = None;
            continue;
        }
        // Remember where the button landed so clicks can find it.
        deck.areas[button.index()] = Some(cell);

        let pressed = deck.is_pressed(button);
        let (border_style, face_style) = if pressed {
            (
                Style::default().fg(theme.accent_colour),
                Style::default()
                    .fg(theme.background_colour)
                    .bg(theme.accent_colour),
            )
        } else {
            (
                Style::default().fg(theme.border_colour),
                Style::default().fg(theme.deck_label_colour),
            )
        };

        let caption = resolve_tap(button, mode)
            .first()
            .map(|command| command.caption())
            .unwrap_or_default();

        let face = Paragraph::new(vec![
            Line::styled(button.label(), face_style.add_modifier(Modifier::BOLD)),
            Line::styled(caption, face_style),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(face, cell);
    }
}
