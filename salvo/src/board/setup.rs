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

//! Implements the setup phase of the board.
use tracing::{debug, trace};

use crate::{
    board::{Board, CannotPlaceReason, CellState, Grid, PlaceError, ShipNotPlaced},
    config::Fleet,
    ships::Ship,
};

/// Setup phase for a [`Board`]. Allows placing and removing ships and does not allow
/// shooting.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Ship lengths that must be placed before the game can start.
    fleet: Fleet,

    /// Ships placed so far, in placement order.
    ships: Vec<Ship>,
}

impl BoardSetup {
    /// Begin setup by constructing an empty `size` x `size` board that must hold the
    /// given fleet.
    pub fn new(size: usize, fleet: Fleet) -> Self {
        Self {
            grid: Grid::new(size),
            fleet,
            ships: Vec::new(),
        }
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// The fleet this board must hold.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Ships placed so far, in the order they were added.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Check whether the ship could be added: every cell must be on the grid and none
    /// may be occupied by an already placed ship. Never modifies the board.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        for coord in ship.occupied_cells() {
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(cell) if cell.ship.is_some() => return Err(CannotPlaceReason::Overlaps),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Returns true if [`add_ship`][Self::add_ship] would accept the ship.
    pub fn is_valid_placement(&self, ship: &Ship) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Attempts to add the ship to the board. If the placement is not valid, the board is
    /// left untouched and the ship is handed back in the error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if let Err(reason) = self.check_placement(&ship) {
            trace!(%ship, %reason, "rejected placement");
            return Err(PlaceError::new(reason, ship));
        }
        // Already ensured that every position is valid and not occupied.
        for coord in ship.occupied_cells() {
            self.grid[coord].ship = Some(ship);
        }
        self.ships.push(ship);
        debug!(%ship, placed = self.ships.len(), fleet = self.fleet.len(), "placed ship");
        Ok(())
    }

    /// Remove a previously added ship. The ship must currently be on the board.
    pub fn remove_ship(&mut self, ship: &Ship) -> Result<(), ShipNotPlaced> {
        let idx = self
            .ships
            .iter()
            .position(|placed| placed == ship)
            .ok_or_else(|| ShipNotPlaced::new(*ship))?;
        let ship = self.ships.remove(idx);
        for coord in ship.occupied_cells() {
            // Only in-bounds ships are ever added, so indexing is fine.
            self.grid[coord].ship = None;
        }
        debug!(%ship, "removed ship");
        Ok(())
    }

    /// Lengths from the fleet that are not yet matched by a placed ship, in fleet order.
    pub fn pending_lengths(&self) -> Vec<usize> {
        let mut placed: Vec<usize> = self.ships.iter().map(Ship::len).collect();
        self.fleet
            .lengths()
            .iter()
            .copied()
            .filter(|len| match placed.iter().position(|p| p == len) {
                Some(i) => {
                    placed.swap_remove(i);
                    false
                }
                None => true,
            })
            .collect()
    }

    /// Returns true if the lengths of the placed ships are exactly the fleet's lengths.
    pub fn is_complete(&self) -> bool {
        let mut placed: Vec<usize> = self.ships.iter().map(Ship::len).collect();
        let mut required = self.fleet.lengths().to_vec();
        placed.sort_unstable();
        required.sort_unstable();
        placed == required
    }

    /// Build the display view of the board, indexed as `grid[y][x]`. Ships are always
    /// shown since the setup belongs to the player placing them.
    pub fn render_grid(&self) -> Vec<Vec<CellState>> {
        self.grid.render(true)
    }

    /// Tries to close the setup phase. If the fleet is complete, returns a [`Board`]
    /// with the current placements. Otherwise returns self unchanged.
    pub fn start(self) -> Result<Board, Self> {
        if !self.is_complete() {
            Err(self)
        } else {
            debug!(ships = self.ships.len(), size = self.grid.size, "fleet complete");
            Ok(Board::new(self.grid, self.fleet, self.ships))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Coordinate, ships::Facing};

    fn setup(size: usize, lengths: &[usize]) -> BoardSetup {
        BoardSetup::new(size, Fleet::new(lengths.to_vec()).unwrap())
    }

    fn ship(x: isize, y: isize, facing: Facing, len: usize) -> Ship {
        Ship::new(Coordinate::new(x, y), facing, len)
    }

    #[test]
    fn accepts_in_bounds_ship() {
        let mut board = setup(10, &[3]);
        let s = ship(2, 3, Facing::East, 3);
        assert!(board.is_valid_placement(&s));
        board.add_ship(s).unwrap();
        assert_eq!(board.ships(), &[s]);
    }

    #[test]
    fn rejects_out_of_bounds_ship() {
        let mut board = setup(10, &[3]);
        for &s in &[
            ship(0, 1, Facing::North, 3),
            ship(8, 0, Facing::East, 3),
            ship(0, 8, Facing::South, 3),
            ship(1, 0, Facing::West, 3),
        ] {
            let err = board.add_ship(s).unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
            assert_eq!(err.into_ship(), s);
        }
        assert!(board.ships().is_empty());
    }

    #[test]
    fn rejects_overlapping_ship_without_mutation() {
        let mut board = setup(10, &[3, 1]);
        board.add_ship(ship(2, 3, Facing::East, 3)).unwrap();
        let before = board.ships().to_vec();
        let err = board.add_ship(ship(3, 3, Facing::North, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlaps);
        assert_eq!(board.ships(), &before[..]);
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn remove_requires_placed_ship() {
        let mut board = setup(10, &[2]);
        let s = ship(0, 0, Facing::East, 2);
        assert_eq!(board.remove_ship(&s).unwrap_err().ship(), &s);
        board.add_ship(s).unwrap();
        board.remove_ship(&s).unwrap();
        assert!(board.ships().is_empty());
        // Cells are free again.
        assert!(board.is_valid_placement(&ship(1, 0, Facing::South, 2)));
    }

    #[test]
    fn pending_lengths_follow_fleet_order() {
        let mut board = setup(10, &[4, 3, 3, 2]);
        board.add_ship(ship(0, 0, Facing::East, 3)).unwrap();
        assert_eq!(board.pending_lengths(), vec![4, 3, 2]);
        board.add_ship(ship(0, 1, Facing::East, 2)).unwrap();
        assert_eq!(board.pending_lengths(), vec![4, 3]);
    }

    #[test]
    fn completes_on_matching_multiset() {
        let mut board = setup(10, &[2, 3]);
        assert!(!board.is_complete());
        board.add_ship(ship(0, 0, Facing::East, 3)).unwrap();
        assert!(!board.is_complete());
        board.add_ship(ship(0, 2, Facing::East, 2)).unwrap();
        assert!(board.is_complete());
    }

    #[test]
    fn start_requires_complete_fleet() {
        let board = setup(10, &[2]);
        let board = board.start().unwrap_err();
        let mut board = board;
        board.add_ship(ship(0, 0, Facing::South, 2)).unwrap();
        let board = board.start().unwrap();
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn render_shows_ships() {
        let mut board = setup(3, &[2]);
        board.add_ship(ship(0, 0, Facing::East, 2)).unwrap();
        let view = board.render_grid();
        assert_eq!(
            view[0],
            vec![CellState::Ship, CellState::Ship, CellState::Water]
        );
    }
}
