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

//! The demo gameplay subsystems.
//!
//! [`Player`] implements the three capability traits the router invokes
//! and narrates everything into an activity feed the scene view renders.
//! It never mutates the progression store synchronously; when a command
//! implies a mode change it sends an application event, so every mutation
//! is serialized through the main loop.

use std::sync::mpsc::Sender;

use crate::actions::events::AppEvent;
use crate::control::command::{Actions, Movement, Performance};
use crate::model::{Note, PlayerMode};
use crate::state::Progression;

const FEED_CAPACITY: usize = 200;

const INNKEEPER: &[&str] = &[
    "Innkeeper: Back again, minstrel? The roads are crawling tonight.",
    "Innkeeper: They say the pass won't open until someone plays the old song.",
    "Innkeeper: Seven notes, the story goes. You know... you hold a kalimba.",
    "Innkeeper: Go on then. And mind the wolves.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedKind {
    Action,
    Note,
    Dialogue,
    System,
    Error,
}

#[derive(Debug)]
pub(crate) struct FeedEntry {
    pub(crate) kind: FeedKind,
    pub(crate) text: String,
}

struct Dialogue {
    lines: &'static [&'static str],
    next: usize,
}

pub(crate) struct Player {
    progression: Progression,
    event_tx: Sender<AppEvent>,
    dialogue: Option<Dialogue>,
    pub(crate) feed: Vec<FeedEntry>,
}

impl Player {
    pub(crate) fn new(progression: Progression, event_tx: Sender<AppEvent>) -> Self {
        Self {
            progression,
            event_tx,
            dialogue: None,
            feed: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: FeedKind, text: impl Into<String>) {
        self.feed.push(FeedEntry {
            kind,
            text: text.into(),
        });
        if self.feed.len() > FEED_CAPACITY {
            self.feed.remove(0);
        }
    }

    /// Opens the demo conversation and speaks its first line. The caller is
    /// expected to move the player mode to talking.
    pub(crate) fn begin_dialogue(&mut self) {
        self.push(FeedKind::Dialogue, INNKEEPER[0]);
        self.dialogue = Some(Dialogue {
            lines: INNKEEPER,
            next: 1,
        });
    }
}

impl Movement for Player {
    fn advance(&mut self) {
        self.push(FeedKind::Action, "You step forward.");
    }

    fn retreat_step(&mut self) {
        self.push(FeedKind::Action, "You step back.");
    }

    fn ascend(&mut self) {
        self.push(FeedKind::Action, "You climb.");
    }
}

impl Actions for Player {
    fn guard(&mut self) {
        self.push(FeedKind::Action, "You raise your guard.");
    }

    fn crouch(&mut self) {
        self.push(FeedKind::Action, "You crouch low.");
    }

    fn strike(&mut self) {
        self.push(FeedKind::Action, "You attack!");
    }

    fn cast(&mut self) {
        self.push(FeedKind::Action, "You weave a spell.");
    }

    // Entering performance a second time puts the kalimba away again; the
    // mode change itself travels through the event loop.
    fn enter_performance(&mut self) {
        if self.progression.mode() == PlayerMode::Performing {
            self.push(FeedKind::System, "You lower the kalimba.");
            self.event_tx
                .send(AppEvent::SetMode(PlayerMode::Normal))
                .ok();
        } else {
            self.push(FeedKind::System, "You raise the kalimba.");
            self.event_tx
                .send(AppEvent::SetMode(PlayerMode::Performing))
                .ok();
        }
    }

    fn advance_narrative(&mut self) {
        let Some(dialogue) = &mut self.dialogue else {
            return;
        };

        if dialogue.next < dialogue.lines.len() {
            let line = dialogue.lines[dialogue.next];
            dialogue.next += 1;
            self.push(FeedKind::Dialogue, line);
        } else {
            self.dialogue = None;
            self.push(FeedKind::System, "The conversation ends.");
            self.event_tx
                .send(AppEvent::SetMode(PlayerMode::Normal))
                .ok();
        }
    }
}

impl Performance for Player {
    fn play_note(&mut self, note: Note) {
        self.push(FeedKind::Note, format!("♪ {note}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayerLevel;
    use std::sync::mpsc;

    fn player() -> (Player, mpsc::Receiver<AppEvent>, Progression) {
        let (event_tx, event_rx) = mpsc::channel();
        let progression = Progression::new(PlayerLevel::OneNote, PlayerMode::Normal);
        (
            Player::new(progression.clone(), event_tx),
            event_rx,
            progression,
        )
    }

    #[test]
    fn performing_toggles_through_the_event_loop() {
        let (mut player, event_rx, progression) = player();

        player.enter_performance();
        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::SetMode(PlayerMode::Performing))
        ));

        progression.set_mode(PlayerMode::Performing);
        player.enter_performance();
        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::SetMode(PlayerMode::Normal))
        ));
    }

    #[test]
    fn a_dialogue_speaks_every_line_then_releases_the_player() {
        let (mut player, event_rx, _progression) = player();

        player.begin_dialogue();
        for _ in 0..INNKEEPER.len() {
            player.advance_narrative();
        }

        let spoken = player
            .feed
            .iter()
            .filter(|entry| entry.kind == FeedKind::Dialogue)
            .count();
        assert_eq!(spoken, INNKEEPER.len());
        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::SetMode(PlayerMode::Normal))
        ));
    }

    #[test]
    fn advancing_the_narrative_outside_a_dialogue_is_harmless() {
        let (mut player, _event_rx, _progression) = player();

        player.advance_narrative();

        assert!(player.feed.is_empty());
    }

    #[test]
    fn the_feed_is_bounded() {
        let (mut player, _event_rx, _progression) = player();

        for _ in 0..(FEED_CAPACITY + 50) {
            player.advance();
        }

        assert_eq!(player.feed.len(), FEED_CAPACITY);
    }
}
