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

//! Input-to-command routing for both channels.
//!
//! Physical actions arrive already filtered by the active input context, so
//! they bind to a fixed command regardless of mode. On-screen taps carry no
//! such context; what a tap means is resolved against the current mode by
//! the pure [`resolve_tap`], which keeps the policy testable without any
//! input-delivery machinery.
//!
//! Both channels are no-ops while the game is paused, and every routed
//! physical event additionally mirrors its press/release phase onto the
//! bound button.

use crate::control::command::{Command, CommandTargets};
use crate::control::feedback::FeedbackController;
use crate::control::surface::ControlSurface;
use crate::model::{DeckButton, InputAction, InputPhase, PlayerMode};
use crate::state::Progression;

pub(crate) struct ActionRouter {
    feedback: FeedbackController,
}

impl ActionRouter {
    pub(crate) fn new() -> Self {
        Self {
            feedback: FeedbackController,
        }
    }

    /// Routes one physical-channel event.
    ///
    /// The command fires only on a performed event; the phase is forwarded
    /// to feedback either way, so a held key shows as a held button.
    pub(crate) fn dispatch_key(
        &mut self,
        action: InputAction,
        phase: InputPhase,
        performed: bool,
        progression: &Progression,
        targets: &mut dyn CommandTargets,
        surface: &mut dyn ControlSurface,
    ) {
        if progression.is_paused() {
            return;
        }

        let (button, command) = bind(action);
        if performed {
            command.invoke(targets);
        }

        self.feedback.on_phase(button, phase, surface);
    }

    /// Routes one on-screen activation.
    pub(crate) fn dispatch_tap(
        &mut self,
        button: DeckButton,
        progression: &Progression,
        targets: &mut dyn CommandTargets,
    ) {
        if progression.is_paused() {
            return;
        }

        for command in resolve_tap(button, progression.mode()) {
            command.invoke(targets);
        }
    }

    /// Routes an on-screen activation delivered as a raw token (the console
    /// path). An unknown token is logged and invokes nothing; it never
    /// disturbs later events.
    pub(crate) fn dispatch_tap_token(
        &mut self,
        token: &str,
        progression: &Progression,
        targets: &mut dyn CommandTargets,
    ) {
        if progression.is_paused() {
            return;
        }

        match token.parse::<DeckButton>() {
            Ok(button) => self.dispatch_tap(button, progression, targets),
            Err(err) => log::error!("tap ignored: {err}"),
        }
    }
}

/// The fixed binding from a physical action to its command and its
/// on-screen twin.
pub(crate) fn bind(action: InputAction) -> (DeckButton, Command) {
    match action {
        InputAction::Guard => (DeckButton::One, Command::Guard),
        InputAction::Crouch => (DeckButton::Two, Command::Crouch),
        InputAction::Retreat => (DeckButton::Three, Command::RetreatStep),
        InputAction::Ascend => (DeckButton::Four, Command::Ascend),
        InputAction::Advance => (DeckButton::Five, Command::Advance),
        InputAction::Strike => (DeckButton::Six, Command::Strike),
        InputAction::Cast => (DeckButton::Seven, Command::Cast),
        InputAction::Perform => (DeckButton::Bard, Command::EnterPerformance),
        InputAction::Continue => (DeckButton::Five, Command::AdvanceNarrative),
        InputAction::Note(note) => (note.button(), Command::PlayNote(note)),
    }
}

/// What does tapping `button` mean right now?
///
/// The performing branch and the talking branch are deliberately
/// independent checks rather than an `if`/`else if` chain; the default
/// command fires only when neither claimed the tap. A single-valued mode
/// means at most one of them applies to any given tap.
pub(crate) fn resolve_tap(button: DeckButton, mode: PlayerMode) -> Vec<Command> {
    let mut commands = Vec::with_capacity(2);

    if mode == PlayerMode::Performing {
        commands.push(Command::PlayNote(button.note()));
    }
    if mode == PlayerMode::Talking && button == DeckButton::Five {
        commands.push(Command::AdvanceNarrative);
    }
    if commands.is_empty() {
        commands.push(default_command(button));
    }

    commands
}

fn default_command(button: DeckButton) -> Command {
    match button {
        DeckButton::One => Command::Guard,
        DeckButton::Two => Command::Crouch,
        DeckButton::Three => Command::RetreatStep,
        DeckButton::Four => Command::Ascend,
        DeckButton::Five => Command::Advance,
        DeckButton::Six => Command::Strike,
        DeckButton::Seven => Command::Cast,
        DeckButton::Bard => Command::EnterPerformance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::command::{Actions, Movement, Performance};
    use crate::model::{Note, PlayerLevel};

    #[derive(Default)]
    struct MockTargets {
        calls: Vec<String>,
    }

    impl Movement for MockTargets {
        fn advance(&mut self) {
            self.calls.push("advance".into());
        }

        fn retreat_step(&mut self) {
            self.calls.push("retreat_step".into());
        }

        fn ascend(&mut self) {
            self.calls.push("ascend".into());
        }
    }

    impl Actions for MockTargets {
        fn guard(&mut self) {
            self.calls.push("guard".into());
        }

        fn crouch(&mut self) {
            self.calls.push("crouch".into());
        }

        fn strike(&mut self) {
            self.calls.push("strike".into());
        }

        fn cast(&mut self) {
            self.calls.push("cast".into());
        }

        fn enter_performance(&mut self) {
            self.calls.push("enter_performance".into());
        }

        fn advance_narrative(&mut self) {
            self.calls.push("advance_narrative".into());
        }
    }

    impl Performance for MockTargets {
        fn play_note(&mut self, note: Note) {
            self.calls.push(format!("play_note {note}"));
        }
    }

    #[derive(Default)]
    struct MockSurface {
        submits: Vec<DeckButton>,
        deselects: Vec<DeckButton>,
    }

    impl ControlSurface for MockSurface {
        fn set_visible(&mut self, _button: DeckButton, _visible: bool) {}

        fn submit(&mut self, button: DeckButton) {
            self.submits.push(button);
        }

        fn deselect(&mut self, button: DeckButton) {
            self.deselects.push(button);
        }
    }

    fn progression(mode: PlayerMode) -> Progression {
        Progression::new(PlayerLevel::SevenNotes, mode)
    }

    #[test]
    fn tap_while_performing_plays_the_note_not_the_default() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap(
            DeckButton::Three,
            &progression(PlayerMode::Performing),
            &mut targets,
        );

        assert_eq!(targets.calls, vec!["play_note 3"]);
    }

    #[test]
    fn tap_five_while_roaming_advances() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap(
            DeckButton::Five,
            &progression(PlayerMode::Normal),
            &mut targets,
        );

        assert_eq!(targets.calls, vec!["advance"]);
    }

    #[test]
    fn tap_five_while_talking_advances_the_narrative_only() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap(
            DeckButton::Five,
            &progression(PlayerMode::Talking),
            &mut targets,
        );

        assert_eq!(targets.calls, vec!["advance_narrative"]);
    }

    #[test]
    fn tap_off_five_while_talking_runs_the_default() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap(
            DeckButton::Three,
            &progression(PlayerMode::Talking),
            &mut targets,
        );

        assert_eq!(targets.calls, vec!["retreat_step"]);
    }

    #[test]
    fn bard_button_plays_its_note_while_performing() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap(
            DeckButton::Bard,
            &progression(PlayerMode::Performing),
            &mut targets,
        );

        assert_eq!(targets.calls, vec!["play_note B"]);
    }

    #[test]
    fn nothing_is_invoked_while_paused() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();
        let mut surface = MockSurface::default();
        let progression = progression(PlayerMode::Normal);
        progression.set_paused(true);

        router.dispatch_tap(DeckButton::Five, &progression, &mut targets);
        router.dispatch_tap_token("5", &progression, &mut targets);
        router.dispatch_key(
            InputAction::Guard,
            InputPhase::Press,
            true,
            &progression,
            &mut targets,
            &mut surface,
        );

        assert!(targets.calls.is_empty());
        assert!(surface.submits.is_empty());
        assert!(surface.deselects.is_empty());
    }

    #[test]
    fn unknown_token_invokes_nothing() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap_token("buttonZ", &progression(PlayerMode::Normal), &mut targets);

        assert!(targets.calls.is_empty());
    }

    #[test]
    fn known_token_taps_like_a_click() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();

        router.dispatch_tap_token("b", &progression(PlayerMode::Normal), &mut targets);

        assert_eq!(targets.calls, vec!["enter_performance"]);
    }

    #[test]
    fn key_press_invokes_and_submits_the_bound_button() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();
        let mut surface = MockSurface::default();

        router.dispatch_key(
            InputAction::Crouch,
            InputPhase::Press,
            true,
            &progression(PlayerMode::Normal),
            &mut targets,
            &mut surface,
        );

        assert_eq!(targets.calls, vec!["crouch"]);
        assert_eq!(surface.submits, vec![DeckButton::Two]);
        assert!(surface.deselects.is_empty());
    }

    #[test]
    fn key_release_only_deselects() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();
        let mut surface = MockSurface::default();

        router.dispatch_key(
            InputAction::Crouch,
            InputPhase::Release,
            false,
            &progression(PlayerMode::Normal),
            &mut targets,
            &mut surface,
        );

        assert!(targets.calls.is_empty());
        assert_eq!(surface.deselects, vec![DeckButton::Two]);
        assert!(surface.submits.is_empty());
    }

    #[test]
    fn note_key_plays_and_pulses_its_button() {
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();
        let mut surface = MockSurface::default();

        router.dispatch_key(
            InputAction::Note(Note::Seven),
            InputPhase::Press,
            true,
            &progression(PlayerMode::Performing),
            &mut targets,
            &mut surface,
        );

        assert_eq!(targets.calls, vec!["play_note 7"]);
        assert_eq!(surface.submits, vec![DeckButton::Seven]);
    }

    #[test]
    fn gameplay_keys_fire_in_any_mode() {
        // The active input context is what restricts arrivals; the router
        // itself trusts whatever it is handed.
        let mut router = ActionRouter::new();
        let mut targets = MockTargets::default();
        let mut surface = MockSurface::default();

        router.dispatch_key(
            InputAction::Advance,
            InputPhase::Press,
            true,
            &progression(PlayerMode::Performing),
            &mut targets,
            &mut surface,
        );

        assert_eq!(targets.calls, vec!["advance"]);
    }

    #[test]
    fn every_action_binds_to_its_twin_button() {
        assert_eq!(bind(InputAction::Guard).0, DeckButton::One);
        assert_eq!(bind(InputAction::Crouch).0, DeckButton::Two);
        assert_eq!(bind(InputAction::Retreat).0, DeckButton::Three);
        assert_eq!(bind(InputAction::Ascend).0, DeckButton::Four);
        assert_eq!(bind(InputAction::Advance).0, DeckButton::Five);
        assert_eq!(bind(InputAction::Strike).0, DeckButton::Six);
        assert_eq!(bind(InputAction::Cast).0, DeckButton::Seven);
        assert_eq!(bind(InputAction::Perform).0, DeckButton::Bard);
        assert_eq!(bind(InputAction::Continue).0, DeckButton::Five);
        assert_eq!(bind(InputAction::Note(Note::B)).0, DeckButton::Bard);
    }
}
