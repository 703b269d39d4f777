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

//! # Bardeck.
//!
//! A terminal demo of a bard-adventure control layer: one deck of eight
//! on-screen buttons, driven by two input channels.
//!
//! * The **keyboard** is the physical channel. Key presses fire commands
//!   and light up the matching on-screen button; with a terminal that
//!   reports key releases, holding a key holds the button.
//! * The **mouse** is the on-screen channel. What a click means depends on
//!   the player's current mode; what is clickable at all depends on the
//!   player's level.
//! * The **console** (`:`) stands in for the game manager that owns
//!   progression: it levels the player up, starts conversations, pauses
//!   the world.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash. All state
//! lives on the main thread; input and tick threads only forward events
//! into a `std::sync::mpsc` channel, and all dispatch and visibility work
//! happens synchronously while handling one event.

mod actions;
mod commander;
mod components;
mod config;
mod control;
mod input;
mod model;
mod player;
mod render;
mod state;
mod theme;

use std::{
    cell::RefCell,
    fs::File,
    io,
    rc::Rc,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    actions::events::{AppEvent, process_events},
    commander::Commander,
    components::DeckView,
    control::{router::ActionRouter, visibility::VisibilityController},
    input::Keymap,
    model::{DeckButton, PlayerLevel, PlayerMode},
    player::{FeedKind, Player},
    state::{Progression, StateChange, Subscription},
    theme::Theme,
};

const LOG_FILE: &str = "bardeck.log";

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub progression: Progression,

    pub router: ActionRouter,
    pub keymap: Keymap,
    pub player: Player,
    pub commander: Commander,

    pub deck: Rc<RefCell<DeckView>>,
    pub pending_release: Vec<DeckButton>,
    pub key_release_supported: bool,

    _visibility_sub: Subscription,
}

impl App {
    /// Create a new instance of application state, with the deck already
    /// showing the starting level's buttons.
    pub fn new(start_level: PlayerLevel) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let progression = Progression::new(start_level, PlayerMode::Normal);
        let deck = Rc::new(RefCell::new(DeckView::new()));

        let mut visibility = VisibilityController::new(start_level, &mut *deck.borrow_mut());
        let visibility_sub = progression.subscribe({
            let deck = Rc::clone(&deck);
            move |change| {
                let mut deck = deck.borrow_mut();
                match change {
                    StateChange::Level(level) => visibility.on_level_changed(level, &mut *deck),
                    StateChange::Mode(mode) => visibility.on_mode_changed(mode, &mut *deck),
                }
            }
        });

        let player = Player::new(progression.clone(), event_tx.clone());

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            progression,
            router: ActionRouter::new(),
            keymap: Keymap::new(),
            player,
            commander: Commander::new(),
            deck,
            pending_release: Vec::new(),
            key_release_supported: false,
            _visibility_sub: visibility_sub,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging, loads and validates the configuration, initializes the
/// application state, manages the terminal lifecycle, and returns an error
/// if any part of the execution fails.
fn main() -> Result<()> {
    init_logging().context("Failed to initialise logging")?;

    let config = config::load_config();
    let start_level = config
        .initial_level()
        .context("Invalid start_level in configuration")?;

    let mut app = App::new(start_level);

    let mut terminal = setup_terminal(&mut app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal, app.key_release_supported);

    res.context("Application error occurred")
}

/// Routes the `log` facade to a file. The TUI owns the terminal, so the
/// logger must not write there.
fn init_logging() -> Result<()> {
    let log_file = File::create(LOG_FILE).context("Failed to create log file")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and captures the
///   mouse.
/// * Asks for key release reporting where the terminal supports the Kitty
///   keyboard protocol.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &mut App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Must be probed before entering raw mode.
    app.key_release_supported = supports_keyboard_enhancement().unwrap_or(false);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    if app.key_release_supported {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("Failed to enable key release reporting")?;
        log::info!("key release reporting enabled");
    } else {
        log::warn!("terminal lacks key release reporting; pressed buttons release on the next tick");
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is designed to
/// be "best-effort" and does not return a result, as it is typically called
/// during cleanup.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    key_release_supported: bool,
) {
    if key_release_supported {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags).ok();
    }
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .ok();
    disable_raw_mode().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background threads and enters the main event
/// loop.
///
/// Two long-running threads are spawned: one forwarding terminal events and
/// one sending a periodic tick (the minimum "frame rate", and when deferred
/// button releases happen). After that, control passes to
/// [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Forward raw terminal events (keys, mouse, resizes) to the event loop.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event) = event::read() {
                tx_input.send(AppEvent::Input(event)).ok();
            }
        }
    });

    // Periodic tick.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.player
        .push(FeedKind::System, "You wake at the roadside inn.");
    app.player.push(
        FeedKind::System,
        "Walk with the arrow keys, type : for the console.",
    );

    // Application event loop, process events until the user quits.
    process_events(terminal, app)
}
