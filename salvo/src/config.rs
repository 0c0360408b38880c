// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration of a game: board size, the fleet each side places, and how hard
//! automated placement tries before giving up.
use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

use crate::board::BoardSetup;

/// Board size used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Ship lengths used when no fleet is configured.
pub const DEFAULT_FLEET: [usize; 5] = [6, 4, 3, 3, 2];

/// Number of random samples tried per ship before automated placement gives up.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Error for configurations that could never produce a playable game.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The board has no cells.
    #[error("board size must be nonzero")]
    ZeroBoardSize,
    /// The fleet has no ships.
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    /// A ship in the fleet has length 0.
    #[error("ship {index} in the fleet has length 0")]
    ZeroLengthShip { index: usize },
    /// A ship is longer than the board is wide.
    #[error("ship of length {length} does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
    /// The board has more cells than can be addressed.
    #[error("a {size}x{size} board is too large")]
    BoardTooLarge { size: usize },
    /// The fleet covers more cells than the board has.
    #[error("fleet needs {cells} cells but the board only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    /// Automated placement was given no attempts at all.
    #[error("placement attempt budget must be nonzero")]
    ZeroAttemptBudget,
}

/// Error returned when parsing a [`Fleet`] from text.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseFleetError {
    /// One of the lengths was not a number.
    #[error("invalid ship length: {0}")]
    InvalidLength(#[from] ParseIntError),
    /// The lengths parsed but do not form a valid fleet.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// The ordered list of ship lengths a player has to place before play begins.
///
/// A fleet always has at least one ship and every length is nonzero.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fleet {
    lengths: Vec<usize>,
}

impl Fleet {
    /// Build a fleet from the given lengths, in placement order.
    pub fn new(lengths: Vec<usize>) -> Result<Self, ConfigError> {
        if lengths.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(index) = lengths.iter().position(|&len| len == 0) {
            return Err(ConfigError::ZeroLengthShip { index });
        }
        Ok(Self { lengths })
    }

    /// The ship lengths, in placement order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Total number of cells covered by the whole fleet.
    pub fn total_cells(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Length of the longest ship.
    pub fn longest(&self) -> usize {
        self.lengths.iter().copied().max().unwrap_or(0)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl FromStr for Fleet {
    type Err = ParseFleetError;

    /// Parse lengths separated by commas and/or whitespace, e.g. `"6,4,3,3,2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lengths = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<usize>, _>>()?;
        Ok(Fleet::new(lengths)?)
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lengths = self.lengths.iter();
        if let Some(first) = lengths.next() {
            write!(f, "{}", first)?;
        }
        for len in lengths {
            write!(f, ",{}", len)?;
        }
        Ok(())
    }
}

/// Settings shared by both sides of a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Width and height of each board.
    pub board_size: usize,
    /// Ships each side places.
    pub fleet: Fleet,
    /// Random samples tried per ship during automated placement.
    pub max_placement_attempts: usize,
}

impl GameConfig {
    /// Build a config with the given size and fleet and the default attempt budget.
    pub fn new(board_size: usize, fleet: Fleet) -> Self {
        Self {
            board_size,
            fleet,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Reject configurations whose fleet can never be placed on the board. Passing this
    /// check does not guarantee every arrangement fits, only that placement is not
    /// hopeless from the start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroAttemptBudget);
        }
        let longest = self.fleet.longest();
        if longest > self.board_size {
            return Err(ConfigError::ShipTooLong {
                length: longest,
                size: self.board_size,
            });
        }
        let capacity = self
            .board_size
            .checked_mul(self.board_size)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or(ConfigError::BoardTooLarge {
                size: self.board_size,
            })?;
        let cells = self.fleet.total_cells();
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }

    /// Start an empty placement-phase board for one side.
    pub fn new_board_setup(&self) -> BoardSetup {
        BoardSetup::new(self.board_size, self.fleet.clone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, Fleet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.fleet.lengths(), &[6, 4, 3, 3, 2]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn fleet_rejects_empty_and_zero() {
        assert_eq!(Fleet::new(vec![]), Err(ConfigError::EmptyFleet));
        assert_eq!(
            Fleet::new(vec![3, 0, 2]),
            Err(ConfigError::ZeroLengthShip { index: 1 })
        );
    }

    #[test]
    fn parse_fleet() {
        let fleet: Fleet = "6,4, 3 3,2".parse().unwrap();
        assert_eq!(fleet.lengths(), &[6, 4, 3, 3, 2]);
        assert_eq!(fleet.to_string(), "6,4,3,3,2");
        assert!(matches!(
            "3,x".parse::<Fleet>(),
            Err(ParseFleetError::InvalidLength(_))
        ));
        assert_eq!(
            "".parse::<Fleet>(),
            Err(ParseFleetError::Invalid(ConfigError::EmptyFleet))
        );
    }

    #[test]
    fn validate_rejects_unplaceable_fleets() {
        let long = GameConfig::new(3, Fleet::new(vec![4]).unwrap());
        assert_eq!(
            long.validate(),
            Err(ConfigError::ShipTooLong { length: 4, size: 3 })
        );

        let crowded = GameConfig::new(2, Fleet::new(vec![2, 2, 1]).unwrap());
        assert_eq!(
            crowded.validate(),
            Err(ConfigError::FleetTooLarge {
                cells: 5,
                capacity: 4
            })
        );

        let empty = GameConfig::new(0, Fleet::default());
        assert_eq!(empty.validate(), Err(ConfigError::ZeroBoardSize));

        let huge = GameConfig::new(1 << (usize::BITS / 2 + 1), Fleet::default());
        assert_eq!(
            huge.validate(),
            Err(ConfigError::BoardTooLarge {
                size: 1 << (usize::BITS / 2 + 1)
            })
        );

        let mut no_budget = GameConfig::default();
        no_budget.max_placement_attempts = 0;
        assert_eq!(no_budget.validate(), Err(ConfigError::ZeroAttemptBudget));
    }
}
