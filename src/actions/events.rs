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

//! The application event type and main event loop.
//!
//! Every key, mouse tap, console request and tick arrives on one channel
//! and is handled synchronously, one event at a time. Progression
//! mutations requested by commands also travel through this channel, which
//! keeps every store notification on a clean stack.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    control::{router, surface::ControlSurface},
    input::InputContext,
    model::{InputPhase, PlayerLevel, PlayerMode},
    player::FeedKind,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Input(Event),

    Tap(String),

    SetMode(PlayerMode),
    SetLevel(PlayerLevel),
    LevelUp,
    SetPaused(bool),
    StartDialogue,

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event
/// channel is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Input(event) => handle_input(app, event)?,
            AppEvent::Tap(token) => handle_tap_token(app, &token),
            AppEvent::SetMode(mode) => handle_set_mode(app, mode),
            AppEvent::SetLevel(level) => handle_set_level(app, level),
            AppEvent::LevelUp => handle_level_up(app),
            AppEvent::SetPaused(paused) => handle_set_paused(app, paused),
            AppEvent::StartDialogue => handle_start_dialogue(app)?,
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick | _ => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_input(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            Ok(())
        }
        // Resizes just fall through to the redraw.
        _ => Ok(()),
    }
}

/// Routes one keyboard event: quit chords first, then the console, then
/// the active gameplay key map.
fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    // The console gets first refusal while it is open.
    if app.commander.handle_event(Event::Key(key), &app.event_tx) {
        return Ok(());
    }

    let phase = match key.kind {
        KeyEventKind::Press => InputPhase::Press,
        KeyEventKind::Release => InputPhase::Release,
        KeyEventKind::Repeat => return Ok(()),
    };
    let performed = phase == InputPhase::Press;

    if key.code == KeyCode::Char('q') && performed {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if let Some(action) = app.keymap.action_for(key.code) {
        {
            let mut deck = app.deck.borrow_mut();
            app.router.dispatch_key(
                action,
                phase,
                performed,
                &app.progression,
                &mut app.player,
                &mut *deck,
            );
        }

        // Terminals without release reporting never send the matching
        // release, so schedule the deselect for the next tick.
        if performed && !app.key_release_supported {
            app.pending_release.push(router::bind(action).0);
        }
    }

    Ok(())
}

/// Resolves a left click on the deck to an on-screen activation.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let hit = app.deck.borrow().hit(mouse.column, mouse.row);
        if let Some(button) = hit {
            app.router
                .dispatch_tap(button, &app.progression, &mut app.player);

            // The deck's own pressed flash; released on the next tick.
            app.deck.borrow_mut().submit(button);
            app.pending_release.push(button);
        }
    }
}

fn handle_tap_token(app: &mut App, token: &str) {
    app.router
        .dispatch_tap_token(token, &app.progression, &mut app.player);
}

fn handle_set_mode(app: &mut App, mode: PlayerMode) {
    app.progression.set_mode(mode);
    // The active key map follows the mode; held buttons from the previous
    // map must not stay lit.
    app.keymap.switch_context(InputContext::for_mode(mode));
    app.deck.borrow_mut().release_all();
}

fn handle_set_level(app: &mut App, level: PlayerLevel) {
    if level < app.progression.level() {
        app.player
            .push(FeedKind::Error, "Levels are never taken away.");
        return;
    }

    app.progression.set_level(level);
    app.player
        .push(FeedKind::System, format!("Level set: {}.", level.title()));
}

fn handle_level_up(app: &mut App) {
    match app.progression.level().next() {
        Some(level) => {
            app.progression.set_level(level);
            app.player.push(
                FeedKind::System,
                format!("You learn a new note: {}.", level.title()),
            );
        }
        None => app
            .player
            .push(FeedKind::System, "You already know every song."),
    }
}

fn handle_set_paused(app: &mut App, paused: bool) {
    app.progression.set_paused(paused);
    let line = if paused {
        "The world holds its breath."
    } else {
        "The world stirs again."
    };
    app.player.push(FeedKind::System, line);
}

fn handle_start_dialogue(app: &mut App) -> Result<()> {
    if app.progression.mode() == PlayerMode::Talking {
        return Ok(());
    }

    app.player.begin_dialogue();
    app.event_tx.send(AppEvent::SetMode(PlayerMode::Talking))?;
    Ok(())
}

fn handle_error(app: &mut App, message: String) {
    log::error!("{message}");
    app.player.push(FeedKind::Error, message);
}

fn handle_tick(app: &mut App) {
    let mut deck = app.deck.borrow_mut();
    for button in app.pending_release.drain(..) {
        deck.deselect(button);
    }
}
