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

//! The context-sensitive control core.
//!
//! This module is the heart of the application: it decides what an input
//! means right now and which buttons the player may see.
//!
//! # Organization
//!
//! * [`command`]: The ten gameplay commands and the capability traits they
//!   are invoked through.
//! * [`router`]: Resolves inputs from either channel to commands and
//!   invokes them.
//! * [`visibility`]: Derives the visible button set from level and mode.
//! * [`feedback`]: Mirrors physical press/release onto the on-screen
//!   buttons.
//! * [`surface`]: The seam to whatever renders the deck.

pub(crate) mod command;
pub(crate) mod feedback;
pub(crate) mod router;
pub(crate) mod surface;
pub(crate) mod visibility;
