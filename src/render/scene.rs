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

//! Render the scene: the activity feed the demo player narrates into.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, player::FeedKind, theme::Theme};

pub(crate) fn draw_scene(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .title(" The Road ");

    let inner_height = area.height.saturating_sub(2) as usize;

    // Show the newest entries, oldest first.
    let visible = app
        .player
        .feed
        .iter()
        .rev()
        .take(inner_height)
        .collect::<Vec<_>>();

    let lines = visible
        .into_iter()
        .rev()
        .map(|entry| {
            Line::styled(
                entry.text.clone(),
                Style::default().fg(feed_colour(&app.theme, entry.kind)),
            )
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn feed_colour(theme: &Theme, kind: FeedKind) -> Color {
    match kind {
        FeedKind::Action => theme.feed_action_fg,
        FeedKind::Note => theme.feed_note_fg,
        FeedKind::Dialogue => theme.feed_dialogue_fg,
        FeedKind::System => theme.feed_system_fg,
        FeedKind::Error => theme.feed_error_fg,
    }
}
