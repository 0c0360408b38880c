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

use std::fmt;

use tracing::{debug, trace};

use crate::{
    board::{Board, BoardSetup, Coordinate},
    placement::PlacementError,
    ships::{Facing, Ship},
};

/// Where the interactive controller is in building the fleet. `index` is the position
/// in the fleet of the ship being placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementState {
    /// No ship has been placed for fleet slot `index` yet.
    AwaitingFirstClick { index: usize },
    /// The ship for slot `index` is on the board but can still be rotated by clicking
    /// its origin again. Clicking anywhere else moves on to the next slot.
    AwaitingNextClick { index: usize, ship: Ship },
    /// Every ship in the fleet has been placed.
    Complete,
}

/// What the player should be asked to do next. The `Display` form is a stable key that
/// front ends map to their own wording.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementPrompt {
    /// Click where the ship of the given length should start.
    PlaceShip { length: usize },
    /// Click the last ship again to rotate it, or click elsewhere to start the ship of
    /// the given length.
    RotateOrPlaceNext { length: usize },
    /// The fleet is complete.
    Complete,
}

impl fmt::Display for PlacementPrompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementPrompt::PlaceShip { length } => write!(f, "AwaitingShip(length={})", length),
            PlacementPrompt::RotateOrPlaceNext { length } => {
                write!(f, "RotateOrPlaceNext(length={})", length)
            }
            PlacementPrompt::Complete => f.pad("PlacementComplete"),
        }
    }
}

/// Builds a fleet one click at a time, placing ships in fleet order.
///
/// A click places the current ship with its origin on the clicked cell, facing the
/// current direction. If it does not fit, the direction turns once and the player
/// clicks again. After a ship is placed, clicking its origin again rotates it in place,
/// and clicking any other cell starts the next ship there. The fleet completes as soon
/// as the last ship is placed.
#[derive(Debug, Clone)]
pub struct InteractivePlacement {
    setup: BoardSetup,
    facing: Facing,
    state: PlacementState,
}

impl InteractivePlacement {
    /// Start placing the fleet onto the given setup, with ships initially facing north.
    /// Ships already on the setup must be the first ships of the fleet, in order, and
    /// placement resumes after them.
    pub fn new(setup: BoardSetup) -> Result<Self, PlacementError> {
        Self::with_facing(setup, Facing::North)
    }

    /// Start placing the fleet onto the given setup with the given initial facing.
    pub fn with_facing(setup: BoardSetup, facing: Facing) -> Result<Self, PlacementError> {
        let state = resume_state(&setup)?;
        Ok(Self {
            setup,
            facing,
            state,
        })
    }

    /// The board being built.
    pub fn setup(&self) -> &BoardSetup {
        &self.setup
    }

    /// Current state of the controller.
    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// Facing the next candidate ship will be built with.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Returns true once every ship has been placed.
    pub fn is_complete(&self) -> bool {
        self.state == PlacementState::Complete
    }

    /// What the player should be asked to do next.
    pub fn prompt(&self) -> PlacementPrompt {
        let lengths = self.setup.fleet().lengths();
        let next = match self.state {
            PlacementState::AwaitingFirstClick { index } => lengths
                .get(index)
                .map(|&length| PlacementPrompt::PlaceShip { length }),
            PlacementState::AwaitingNextClick { index, .. } => lengths
                .get(index + 1)
                .map(|&length| PlacementPrompt::RotateOrPlaceNext { length }),
            PlacementState::Complete => None,
        };
        next.unwrap_or(PlacementPrompt::Complete)
    }

    /// Handle a click on the given cell and return the next prompt.
    pub fn click(&mut self, coord: Coordinate) -> Result<PlacementPrompt, PlacementError> {
        match self.state {
            PlacementState::Complete => return Err(PlacementError::AlreadyComplete),
            PlacementState::AwaitingFirstClick { index } => self.try_place(index, coord),
            PlacementState::AwaitingNextClick { index, ship } if ship.origin() == coord => {
                self.setup.remove_ship(&ship)?;
                self.facing = self.facing.next();
                trace!(%ship, facing = %self.facing, "rotating ship");
                self.try_place(index, coord);
            }
            PlacementState::AwaitingNextClick { index, .. } => self.try_place(index + 1, coord),
        }
        Ok(self.prompt())
    }

    /// Advance by one step of input, where `None` means nothing was clicked yet. Returns
    /// the prompt to show next.
    pub fn step(&mut self, input: Option<Coordinate>) -> Result<PlacementPrompt, PlacementError> {
        match input {
            Some(coord) => self.click(coord),
            None if self.is_complete() => Err(PlacementError::AlreadyComplete),
            None => Ok(self.prompt()),
        }
    }

    /// Try to place the ship for slot `index` at `origin` with the current facing.
    fn try_place(&mut self, index: usize, origin: Coordinate) {
        let length = match self.setup.fleet().lengths().get(index) {
            Some(&length) => length,
            None => {
                self.state = PlacementState::Complete;
                return;
            }
        };
        let ship = Ship::new(origin, self.facing, length);
        self.state = match self.setup.add_ship(ship) {
            Ok(()) if self.setup.ships().len() >= self.setup.fleet().len() => {
                debug!("interactive placement complete");
                PlacementState::Complete
            }
            Ok(()) => PlacementState::AwaitingNextClick { index, ship },
            Err(_) => {
                self.facing = self.facing.next();
                PlacementState::AwaitingFirstClick { index }
            }
        };
    }

    /// Finish placement. If the fleet is complete, returns the started [`Board`],
    /// otherwise returns self so placement can continue.
    pub fn finish(self) -> Result<Board, Self> {
        if !self.is_complete() {
            return Err(self);
        }
        // Complete is only entered once the ships match the fleet slot for slot, so the
        // setup always starts.
        let facing = self.facing;
        self.setup.start().map_err(|setup| {
            let state = resume_state(&setup).unwrap_or(PlacementState::Complete);
            Self {
                setup,
                facing,
                state,
            }
        })
    }

    /// Give up the controller and get back the setup as it currently stands.
    pub fn into_setup(self) -> BoardSetup {
        self.setup
    }
}

/// Work out where placement stands for the ships already on the setup. They must match
/// the start of the fleet slot for slot.
fn resume_state(setup: &BoardSetup) -> Result<PlacementState, PlacementError> {
    let lengths = setup.fleet().lengths();
    let placed = setup.ships();
    for (index, ship) in placed.iter().enumerate() {
        if lengths.get(index) != Some(&ship.len()) {
            return Err(PlacementError::OutOfOrder {
                index,
                length: ship.len(),
            });
        }
    }
    Ok(if placed.len() == lengths.len() {
        PlacementState::Complete
    } else {
        PlacementState::AwaitingFirstClick {
            index: placed.len(),
        }
    })
}
