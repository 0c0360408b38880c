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

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    board::{Board, BoardSetup, Coordinate},
    config::{GameConfig, DEFAULT_MAX_PLACEMENT_ATTEMPTS},
    placement::PlacementError,
    ships::{Facing, Ship},
};

/// Places ships by rejection sampling: pick a uniformly random origin and facing, keep
/// the ship if the board accepts it, otherwise draw again.
///
/// Sampling is capped at `max_attempts` draws per ship. A fleet that does not fit would
/// otherwise keep drawing forever, so running out of attempts is reported as
/// [`PlacementError::RetriesExhausted`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RandomPlacement {
    max_attempts: usize,
}

impl RandomPlacement {
    /// Create a placer that draws at most `max_attempts` candidates per ship.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Create a placer using the attempt budget from the config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_placement_attempts)
    }

    /// Maximum number of candidates drawn per ship.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Place a single ship of the given length somewhere on the board, returning the
    /// ship that was placed.
    pub fn place_ship<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        setup: &mut BoardSetup,
        length: usize,
    ) -> Result<Ship, PlacementError> {
        let size = setup.size() as isize;
        if size > 0 {
            for attempt in 1..=self.max_attempts {
                let origin = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
                let facing: Facing = rng.gen();
                let ship = Ship::new(origin, facing, length);
                if setup.add_ship(ship).is_ok() {
                    trace!(length, attempt, "random placement accepted");
                    return Ok(ship);
                }
            }
        }
        Err(PlacementError::RetriesExhausted {
            length,
            attempts: self.max_attempts,
        })
    }

    /// Place every ship the board is still missing, in fleet order. Ships already on the
    /// board are left where they are.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        setup: &mut BoardSetup,
    ) -> Result<(), PlacementError> {
        for length in setup.pending_lengths() {
            self.place_ship(rng, setup, length)?;
        }
        debug!(ships = setup.ships().len(), "random fleet placed");
        Ok(())
    }

    /// Build a complete board for the given config with every ship placed at random.
    pub fn build_board<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GameConfig,
    ) -> Result<Board, PlacementError> {
        config.validate()?;
        let mut setup = config.new_board_setup();
        self.place_fleet(rng, &mut setup)?;
        setup.start().map_err(|_| PlacementError::FleetIncomplete)
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PLACEMENT_ATTEMPTS)
    }
}
