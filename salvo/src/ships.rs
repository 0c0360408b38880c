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

//! Types used for describing ships and the direction they face.
use std::fmt;

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Direction a ship extends in from its origin cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Facing {
    /// Towards row 0.
    North,
    /// Towards increasing columns.
    East,
    /// Towards increasing rows.
    South,
    /// Towards column 0.
    West,
}

impl Facing {
    /// All facings, in rotation order.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Get the facing that follows this one when rotating clockwise. Cycles
    /// North, East, South, West and back to North.
    pub fn next(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Unit step `(dx, dy)` taken when moving one cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    /// Get the coordinate `steps` cells away from `from` in this direction.
    pub fn advance(self, from: Coordinate, steps: isize) -> Coordinate {
        let (dx, dy) = self.delta();
        from.offset(dx * steps, dy * steps)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        })
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Facing> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Facing {
        Facing::ALL[rng.gen_range(0, Facing::ALL.len())]
    }
}

/// Placement descriptor for a single straight ship: the cell it starts on, the direction
/// it extends in, and how many cells long it is.
///
/// A `Ship` never changes once built. Rotating produces a new `Ship` at the same origin.
/// The cells it covers are derived on demand and are not checked against any board, so a
/// ship may cover cells outside the grid; boards reject such ships when they are added.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    origin: Coordinate,
    facing: Facing,
    len: usize,
}

impl Ship {
    /// Construct a ship of the given length. Panics if `len` is 0.
    pub fn new(origin: Coordinate, facing: Facing, len: usize) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        Self {
            origin,
            facing,
            len,
        }
    }

    /// The first cell of the ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The direction the ship extends in from its origin.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Get an iterator over the cells covered by this ship, starting with the origin and
    /// moving one step in the facing direction each time.
    pub fn occupied_cells(&self) -> OccupiedCells {
        OccupiedCells {
            ship: *self,
            next: 0,
        }
    }

    /// Returns true if this ship covers the given cell.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let dx = coord.x - self.origin.x;
        let dy = coord.y - self.origin.y;
        let steps = match self.facing.delta() {
            (0, step) if dx == 0 => dy * step,
            (step, 0) if dy == 0 => dx * step,
            _ => return false,
        };
        steps >= 0 && (steps as usize) < self.len
    }

    /// Get a copy of this ship turned to the next facing, keeping its origin and length.
    pub fn rotated(&self) -> Self {
        Self {
            facing: self.facing.next(),
            ..*self
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "length-{} ship at {} facing {}",
            self.len, self.origin, self.facing
        )
    }
}

/// Iterator over the cells covered by a [`Ship`].
#[derive(Debug, Clone)]
pub struct OccupiedCells {
    ship: Ship,
    next: usize,
}

impl Iterator for OccupiedCells {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.next < self.ship.len {
            let cell = self
                .ship
                .facing
                .advance(self.ship.origin, self.next as isize);
            self.next += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ship.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OccupiedCells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_rotation_cycles() {
        assert_eq!(Facing::North.next(), Facing::East);
        assert_eq!(Facing::East.next(), Facing::South);
        assert_eq!(Facing::South.next(), Facing::West);
        assert_eq!(Facing::West.next(), Facing::North);
    }

    #[test]
    fn east_facing_ship_cells() {
        let ship = Ship::new(Coordinate::new(2, 3), Facing::East, 3);
        let cells: Vec<_> = ship.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(2, 3),
                Coordinate::new(3, 3),
                Coordinate::new(4, 3)
            ]
        );
    }

    #[test]
    fn north_facing_ship_extends_towards_row_zero() {
        let ship = Ship::new(Coordinate::new(0, 1), Facing::North, 3);
        let cells: Vec<_> = ship.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 0),
                Coordinate::new(0, -1)
            ]
        );
    }

    #[test]
    fn single_cell_ship_is_just_origin() {
        for &facing in &Facing::ALL {
            let ship = Ship::new(Coordinate::new(5, 5), facing, 1);
            let cells: Vec<_> = ship.occupied_cells().collect();
            assert_eq!(cells, vec![Coordinate::new(5, 5)]);
        }
    }

    #[test]
    fn contains_matches_occupied_cells() {
        for &facing in &Facing::ALL {
            let ship = Ship::new(Coordinate::new(4, 4), facing, 3);
            for x in 0..9 {
                for y in 0..9 {
                    let coord = Coordinate::new(x, y);
                    assert_eq!(
                        ship.contains(coord),
                        ship.occupied_cells().any(|c| c == coord),
                        "{} / {}",
                        ship,
                        coord
                    );
                }
            }
        }
    }

    #[test]
    fn rotation_keeps_origin_and_length() {
        let ship = Ship::new(Coordinate::new(1, 2), Facing::West, 4);
        let rotated = ship.rotated();
        assert_eq!(rotated.origin(), ship.origin());
        assert_eq!(rotated.len(), 4);
        assert_eq!(rotated.facing(), Facing::North);
        assert_eq!(ship.facing(), Facing::West);
    }

    #[test]
    fn occupied_cells_reports_exact_size() {
        let ship = Ship::new(Coordinate::new(0, 0), Facing::South, 5);
        let mut cells = ship.occupied_cells();
        assert_eq!(cells.len(), 5);
        cells.next();
        assert_eq!(cells.len(), 4);
    }

    #[test]
    #[should_panic]
    fn zero_length_ship_panics() {
        Ship::new(Coordinate::new(0, 0), Facing::North, 0);
    }
}
