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

//! Render the status line: level, mode, paused indicator and a key hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(" Level: ", Style::default().fg(theme.status_fg)),
        Span::styled(
            app.progression.level().title(),
            Style::default().fg(theme.accent_colour),
        ),
        Span::styled("  Mode: ", Style::default().fg(theme.status_fg)),
        Span::styled(
            app.progression.mode().title(),
            Style::default().fg(theme.accent_colour),
        ),
    ];

    if app.progression.is_paused() {
        spans.push(Span::styled(
            "  PAUSED",
            Style::default()
                .fg(theme.paused_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        "  (: console, q quits)",
        Style::default().fg(theme.status_fg),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
