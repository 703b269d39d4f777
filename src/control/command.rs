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

//! Gameplay commands and the targets they land on.
//!
//! Targets are split into three capability traits so the demo player (and
//! the recording mocks in the tests) implement exactly what the router can
//! invoke. Every call is fire-and-forget; the router never inspects a
//! result.

use crate::model::Note;

/// Movement capabilities.
pub(crate) trait Movement {
    fn advance(&mut self);
    fn retreat_step(&mut self);
    fn ascend(&mut self);
}

/// Non-movement action capabilities.
pub(crate) trait Actions {
    fn guard(&mut self);
    fn crouch(&mut self);
    fn strike(&mut self);
    fn cast(&mut self);
    fn enter_performance(&mut self);
    fn advance_narrative(&mut self);
}

/// Kalimba capabilities.
pub(crate) trait Performance {
    fn play_note(&mut self, note: Note);
}

/// Everything the router can be pointed at.
pub(crate) trait CommandTargets: Movement + Actions + Performance {}

impl<T: Movement + Actions + Performance> CommandTargets for T {}

/// One resolved gameplay command, ready to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Advance,
    RetreatStep,
    Ascend,
    Guard,
    Crouch,
    Strike,
    Cast,
    EnterPerformance,
    AdvanceNarrative,
    PlayNote(Note),
}

impl Command {
    /// The single invoker: every resolved command funnels through here.
    pub(crate) fn invoke(self, targets: &mut dyn CommandTargets) {
        match self {
            Command::Advance => targets.advance(),
            Command::RetreatStep => targets.retreat_step(),
            Command::Ascend => targets.ascend(),
            Command::Guard => targets.guard(),
            Command::Crouch => targets.crouch(),
            Command::Strike => targets.strike(),
            Command::Cast => targets.cast(),
            Command::EnterPerformance => targets.enter_performance(),
            Command::AdvanceNarrative => targets.advance_narrative(),
            Command::PlayNote(note) => targets.play_note(note),
        }
    }

    /// Short caption shown under a deck button's identity label.
    pub(crate) fn caption(self) -> &'static str {
        match self {
            Command::Advance => "Step Fwd",
            Command::RetreatStep => "Step Bkd",
            Command::Ascend => "Climb",
            Command::Guard => "Guard",
            Command::Crouch => "Crouch",
            Command::Strike => "Attack",
            Command::Cast => "Magic",
            Command::EnterPerformance => "Kalimba",
            Command::AdvanceNarrative => "Next",
            Command::PlayNote(_) => "♪",
        }
    }
}
