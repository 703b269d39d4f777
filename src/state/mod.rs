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

//! The observable progression store.
//!
//! [`Progression`] owns the player's level, mode and paused flag on behalf
//! of the shell. The control layer never mutates it; it reads current
//! values through the getters and reacts to changes through subscriptions.
//! Watchers are delivered synchronously on the mutating call's stack, and a
//! [`Subscription`] unregisters its watcher when dropped, so setup and
//! teardown stay symmetric on every exit path.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::model::{PlayerLevel, PlayerMode};

/// A change broadcast to watchers. Pausing is not broadcast; it is polled
/// at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StateChange {
    Level(PlayerLevel),
    Mode(PlayerMode),
}

type Watcher = Box<dyn FnMut(StateChange)>;

struct Shared {
    level: Cell<PlayerLevel>,
    mode: Cell<PlayerMode>,
    paused: Cell<bool>,
    watchers: RefCell<Vec<(u64, Watcher)>>,
    next_watcher_id: Cell<u64>,
}

/// Handle to the shared progression state. Cloning is cheap; all clones
/// observe the same values.
#[derive(Clone)]
pub(crate) struct Progression {
    shared: Rc<Shared>,
}

/// Keeps a watcher registered for as long as it is held.
pub(crate) struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Progression {
    pub(crate) fn new(level: PlayerLevel, mode: PlayerMode) -> Self {
        Self {
            shared: Rc::new(Shared {
                level: Cell::new(level),
                mode: Cell::new(mode),
                paused: Cell::new(false),
                watchers: RefCell::new(Vec::new()),
                next_watcher_id: Cell::new(0),
            }),
        }
    }

    pub(crate) fn level(&self) -> PlayerLevel {
        self.shared.level.get()
    }

    pub(crate) fn mode(&self) -> PlayerMode {
        self.shared.mode.get()
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.shared.paused.get()
    }

    /// Raises the player's level. Progression is cumulative; a regressive
    /// value is refused so the control layer never observes a revoked
    /// unlock.
    pub(crate) fn set_level(&self, level: PlayerLevel) {
        if level < self.level() {
            log::warn!(
                "refusing to lower player level from {:?} to {:?}",
                self.level(),
                level
            );
            return;
        }

        self.shared.level.set(level);
        self.notify(StateChange::Level(level));
    }

    pub(crate) fn set_mode(&self, mode: PlayerMode) {
        self.shared.mode.set(mode);
        self.notify(StateChange::Mode(mode));
    }

    pub(crate) fn set_paused(&self, paused: bool) {
        self.shared.paused.set(paused);
    }

    /// Registers a watcher for level and mode changes. The watcher stays
    /// registered until the returned [`Subscription`] is dropped.
    pub(crate) fn subscribe(&self, watcher: impl FnMut(StateChange) + 'static) -> Subscription {
        let id = self.shared.next_watcher_id.get();
        self.shared.next_watcher_id.set(id + 1);
        self.shared
            .watchers
            .borrow_mut()
            .push((id, Box::new(watcher)));

        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    // Delivery happens on the mutating caller's stack. Watchers may read
    // the current values but must not subscribe or unsubscribe from inside
    // a notification.
    fn notify(&self, change: StateChange) {
        for (_, watcher) in self.shared.watchers.borrow_mut().iter_mut() {
            watcher(change);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.watchers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording() -> (Progression, Rc<RefCell<Vec<StateChange>>>, Subscription) {
        let progression = Progression::new(PlayerLevel::NewGame, PlayerMode::Normal);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = progression.subscribe(move |change| sink.borrow_mut().push(change));
        (progression, seen, subscription)
    }

    #[test]
    fn watchers_see_level_and_mode_changes() {
        let (progression, seen, _subscription) = recording();

        progression.set_level(PlayerLevel::OneNote);
        progression.set_mode(PlayerMode::Talking);

        assert_eq!(
            *seen.borrow(),
            vec![
                StateChange::Level(PlayerLevel::OneNote),
                StateChange::Mode(PlayerMode::Talking),
            ]
        );
        assert_eq!(progression.level(), PlayerLevel::OneNote);
        assert_eq!(progression.mode(), PlayerMode::Talking);
    }

    #[test]
    fn dropping_the_subscription_unregisters_the_watcher() {
        let (progression, seen, subscription) = recording();

        drop(subscription);
        progression.set_level(PlayerLevel::OneNote);

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn level_never_goes_down() {
        let (progression, seen, _subscription) = recording();

        progression.set_level(PlayerLevel::ThreeNotes);
        progression.set_level(PlayerLevel::OneNote);

        assert_eq!(progression.level(), PlayerLevel::ThreeNotes);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn pausing_is_polled_not_broadcast() {
        let (progression, seen, _subscription) = recording();

        progression.set_paused(true);

        assert!(progression.is_paused());
        assert!(seen.borrow().is_empty());
    }
}
