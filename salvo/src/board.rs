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

//! Types that make up the game board.
//!
//! A board goes through two phases. During setup, a [`BoardSetup`] accepts and removes
//! ships. Once the fleet is complete, [`BoardSetup::start`] turns it into a [`Board`],
//! whose ships can no longer move and which only accepts shots.

use tracing::{debug, trace};

use crate::{config::Fleet, ships::Ship};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShipNotPlaced, ShotError},
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;

/// What a single cell looks like to whoever is drawing the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water that has not been shot, or a ship cell that is hidden.
    Water,
    /// An intact ship cell. Only produced when ships are revealed.
    Ship,
    /// A ship cell that has been shot.
    Hit,
    /// A water cell that has been shot.
    Miss,
}

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, but did not sink it.
    Hit(Ship),
    /// The shot sank the given ship, but the player has more ships left.
    Sunk(Ship),
    /// The shot sank the given ship, and all of the player's ships are now sunk.
    Defeated(Ship),
}

impl ShotOutcome {
    /// Get the ship that was hit.
    pub fn ship(&self) -> Option<&Ship> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(ref ship)
            | ShotOutcome::Sunk(ref ship)
            | ShotOutcome::Defeated(ref ship) => Some(ship),
        }
    }

    /// Returns true if the shot struck a ship.
    pub fn is_hit(&self) -> bool {
        self.ship().is_some()
    }
}

/// Represents a single player's board during play: a fixed set of ships and the record
/// of shots fired at them.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by ships, with shot markers.
    grid: Grid,

    /// The fleet the ships were placed from.
    fleet: Fleet,

    /// All ships on the board in placement order.
    ships: Vec<Ship>,
}

impl Board {
    fn new(grid: Grid, fleet: Fleet, ships: Vec<Ship>) -> Self {
        Self { grid, fleet, ships }
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// The fleet this board was built for.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// All ships on this board, in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Check whether the given cell can be shot: it must be on the grid and must not
    /// have been shot before.
    pub fn check_target(&self, coord: Coordinate) -> Result<(), CannotShootReason> {
        match self.grid.get(coord) {
            None => Err(CannotShootReason::OutOfBounds),
            Some(cell) if cell.shot => Err(CannotShootReason::AlreadyShot),
            Some(_) => Ok(()),
        }
    }

    /// Returns true if [`shoot`][Self::shoot] would accept the given cell.
    pub fn is_valid_target(&self, coord: Coordinate) -> bool {
        self.check_target(coord).is_ok()
    }

    /// Returns true if at least one cell has not been shot yet.
    pub fn has_valid_target(&self) -> bool {
        self.grid.iter().any(|(_, cell)| !cell.shot)
    }

    /// Get an iterator over all cells that can still be shot, row by row.
    pub fn valid_targets(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.grid
            .iter()
            .filter(|(_, cell)| !cell.shot)
            .map(|(coord, _)| coord)
    }

    /// Fire a shot at this board. If the cell is out of bounds or already shot, the
    /// board is unchanged and the error says why; otherwise the cell is recorded as a hit
    /// or a miss.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let hit_ship = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) if cell.shot => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, coord))
            }
            Some(cell) => {
                cell.shot = true;
                cell.ship
            }
        };
        let outcome = match hit_ship {
            None => ShotOutcome::Miss,
            Some(ship) if self.is_game_over() => ShotOutcome::Defeated(ship),
            Some(ship) if self.is_sunk(&ship) => ShotOutcome::Sunk(ship),
            Some(ship) => ShotOutcome::Hit(ship),
        };
        trace!(%coord, ?outcome, "shot resolved");
        if let ShotOutcome::Defeated(_) = outcome {
            debug!(%coord, "last ship sunk");
        }
        Ok(outcome)
    }

    /// Returns true if every cell of the given ship has been hit.
    pub fn is_sunk(&self, ship: &Ship) -> bool {
        ship.occupied_cells()
            .all(|coord| self.grid.get(coord).map_or(false, |cell| cell.shot))
    }

    /// Returns true if the cell was hit and the ship covering it has been sunk. This is
    /// public knowledge in the game, since sinking a ship is announced.
    pub fn is_cell_sunk(&self, coord: Coordinate) -> bool {
        match self.grid.get(coord) {
            Some(cell) if cell.shot => cell.ship.map_or(false, |ship| self.is_sunk(&ship)),
            _ => false,
        }
    }

    /// Returns true if every cell of every ship has been hit. Computed on each call.
    pub fn is_game_over(&self) -> bool {
        self.ships.iter().all(|ship| self.is_sunk(ship))
    }

    /// Number of ship cells that have not been hit yet.
    pub fn remaining_cells(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.ship.is_some() && !cell.shot)
            .count()
    }

    /// Get an iterator over every cell that was shot and struck a ship, row by row.
    pub fn hits(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.shot && cell.ship.is_some())
            .map(|(coord, _)| coord)
    }

    /// Get an iterator over every cell that was shot and struck only water, row by row.
    pub fn misses(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.shot && cell.ship.is_none())
            .map(|(coord, _)| coord)
    }

    /// Build the display view of this board, indexed as `grid[y][x]`. When
    /// `reveal_ships` is false, ship cells that have not been hit show as water.
    pub fn render_grid(&self, reveal_ships: bool) -> Vec<Vec<CellState>> {
        self.grid.render(reveal_ships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Facing;

    fn board(size: usize, ships: &[Ship]) -> Board {
        let fleet = Fleet::new(ships.iter().map(Ship::len).collect()).unwrap();
        let mut setup = BoardSetup::new(size, fleet);
        for &ship in ships {
            setup.add_ship(ship).unwrap();
        }
        setup.start().unwrap()
    }

    #[test]
    fn hit_then_repeat_then_miss() {
        let ship = Ship::new(Coordinate::new(2, 3), Facing::East, 3);
        let mut board = board(10, &[ship]);

        assert_eq!(
            board.shoot(Coordinate::new(2, 3)).unwrap(),
            ShotOutcome::Hit(ship)
        );
        let err = board.shoot(Coordinate::new(2, 3)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        assert_eq!(board.hits().count(), 1);

        assert_eq!(
            board.shoot(Coordinate::new(5, 5)).unwrap(),
            ShotOutcome::Miss
        );
        assert_eq!(board.misses().collect::<Vec<_>>(), vec![Coordinate::new(5, 5)]);
    }

    #[test]
    fn out_of_bounds_shot_is_rejected() {
        let mut board = board(4, &[Ship::new(Coordinate::new(0, 0), Facing::East, 2)]);
        for &coord in &[Coordinate::new(-1, 0), Coordinate::new(4, 0), Coordinate::new(0, 9)] {
            assert!(!board.is_valid_target(coord));
            assert_eq!(
                board.shoot(coord).unwrap_err().reason(),
                CannotShootReason::OutOfBounds
            );
        }
        assert_eq!(board.hits().count() + board.misses().count(), 0);
    }

    #[test]
    fn game_over_only_after_all_cells_hit() {
        let ship = Ship::new(Coordinate::new(0, 0), Facing::East, 2);
        let mut board = board(10, &[ship]);
        assert!(!board.is_game_over());
        assert_eq!(
            board.shoot(Coordinate::new(0, 0)).unwrap(),
            ShotOutcome::Hit(ship)
        );
        assert!(!board.is_game_over());
        assert_eq!(
            board.shoot(Coordinate::new(1, 0)).unwrap(),
            ShotOutcome::Defeated(ship)
        );
        assert!(board.is_game_over());
    }

    #[test]
    fn sinking_one_of_two_ships() {
        let small = Ship::new(Coordinate::new(0, 0), Facing::South, 1);
        let big = Ship::new(Coordinate::new(3, 3), Facing::West, 2);
        let mut board = board(5, &[small, big]);
        assert_eq!(
            board.shoot(Coordinate::new(0, 0)).unwrap(),
            ShotOutcome::Sunk(small)
        );
        assert!(board.is_sunk(&small));
        assert!(board.is_cell_sunk(Coordinate::new(0, 0)));
        assert!(!board.is_sunk(&big));
        assert_eq!(board.remaining_cells(), 2);
        assert!(!board.is_game_over());
    }

    #[test]
    fn render_hides_unhit_ships() {
        let ship = Ship::new(Coordinate::new(0, 0), Facing::East, 2);
        let mut board = board(3, &[ship]);
        board.shoot(Coordinate::new(0, 0)).unwrap();
        board.shoot(Coordinate::new(2, 2)).unwrap();

        let hidden = board.render_grid(false);
        assert_eq!(
            hidden[0],
            vec![CellState::Hit, CellState::Water, CellState::Water]
        );
        assert_eq!(hidden[2][2], CellState::Miss);

        let revealed = board.render_grid(true);
        assert_eq!(
            revealed[0],
            vec![CellState::Hit, CellState::Ship, CellState::Water]
        );
    }

    #[test]
    fn valid_targets_shrink_with_shots() {
        let mut board = board(2, &[Ship::new(Coordinate::new(1, 1), Facing::North, 1)]);
        assert_eq!(board.valid_targets().count(), 4);
        for coord in board.valid_targets().collect::<Vec<_>>() {
            board.shoot(coord).unwrap();
        }
        assert!(!board.has_valid_target());
        assert!(board.is_game_over());
    }
}
