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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

use crate::model::{PlayerLevel, ProgressionError};

const CONFIG_NAME: &str = "bardeck";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Numeric starting level, 0 (new game) through 7.
    pub(crate) start_level: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            start_level: 0,
        }
    }
}

impl AppConfig {
    /// The validated starting level. A value outside 0..=7 is a
    /// configuration error the caller must treat as fatal.
    pub(crate) fn initial_level(&self) -> Result<PlayerLevel, ProgressionError> {
        PlayerLevel::try_from(self.start_level)
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_config_starts_a_new_game() {
        assert_eq!(
            AppConfig::default().initial_level().unwrap(),
            PlayerLevel::NewGame
        );
    }

    #[test]
    fn out_of_range_levels_are_fatal() {
        let config = AppConfig {
            version: 1,
            start_level: 9,
        };
        assert!(config.initial_level().is_err());
    }
}
