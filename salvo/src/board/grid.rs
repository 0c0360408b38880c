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

//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::ops::{Index, IndexMut};

use crate::{
    board::{CellState, Coordinate},
    ships::Ship,
};

/// A single cell in the player's grid.
#[derive(Debug, Clone, Default)]
pub(super) struct GridCell {
    /// The ship that occupies this cell, if any.
    pub(super) ship: Option<Ship>,

    /// Whether this cell has been shot at previously or not.
    pub(super) shot: bool,
}

impl GridCell {
    /// Display state of this cell. Shots take precedence over whatever was underneath.
    fn state(&self, reveal_ships: bool) -> CellState {
        match (self.shot, self.ship.is_some()) {
            (true, true) => CellState::Hit,
            (true, false) => CellState::Miss,
            (false, true) if reveal_ships => CellState::Ship,
            _ => CellState::Water,
        }
    }
}

/// Square grid structure shared between [`BoardSetup`] and [`Board`].
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Width and height of this grid.
    pub(super) size: usize,
    /// Cells that make up this grid, row by row.
    cells: Box<[GridCell]>,
}

impl Grid {
    /// Build an empty grid. Panics if `size * size` overflows, which
    /// [`GameConfig::validate`][crate::config::GameConfig::validate] rejects up front.
    pub(super) fn new(size: usize) -> Self {
        let count = size.checked_mul(size).expect("grid size overflows");
        let cells = (0..count).map(|_| Default::default()).collect();
        Self { size, cells }
    }

    /// Returns true if the coordinate lies inside this grid.
    pub(super) fn in_bounds(&self, coord: Coordinate) -> bool {
        self.try_linearize(coord).is_some()
    }

    /// Convert a coordinate to an index into `cells`. Returns `None` if the coordinate
    /// is out of bounds.
    fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    /// Convert an index into `cells` back into a [`Coordinate`].
    fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new((idx % self.size) as isize, (idx / self.size) as isize)
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&GridCell> {
        self.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut GridCell> {
        match self.try_linearize(coord) {
            Some(i) => self.cells.get_mut(i),
            None => None,
        }
    }

    /// Iterate all cells along with their coordinates, row by row.
    pub(super) fn iter(&self) -> impl '_ + Iterator<Item = (Coordinate, &GridCell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.un_linearize(i), cell))
    }

    /// Build the display view of this grid, indexed as `grid[y][x]`.
    pub(super) fn render(&self, reveal_ships: bool) -> Vec<Vec<CellState>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|cell| cell.state(reveal_ships)).collect())
            .collect()
    }
}

impl Index<Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_round_trips_in_bounds() {
        let grid = Grid::new(4);
        for (i, (coord, _)) in grid.iter().enumerate() {
            assert_eq!(grid.try_linearize(coord), Some(i));
        }
    }

    #[test]
    fn out_of_bounds_coordinates_have_no_cell() {
        let grid = Grid::new(3);
        assert!(grid.get(Coordinate::new(-1, 0)).is_none());
        assert!(grid.get(Coordinate::new(0, -1)).is_none());
        assert!(grid.get(Coordinate::new(3, 0)).is_none());
        assert!(grid.get(Coordinate::new(0, 3)).is_none());
        assert!(grid.get(Coordinate::new(2, 2)).is_some());
    }

    #[test]
    fn render_is_row_major() {
        let mut grid = Grid::new(2);
        grid[Coordinate::new(1, 0)].shot = true;
        let view = grid.render(true);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0], vec![CellState::Water, CellState::Miss]);
        assert_eq!(view[1], vec![CellState::Water, CellState::Water]);
    }

    #[test]
    #[should_panic(expected = "grid size overflows")]
    fn oversized_grid_panics() {
        Grid::new(usize::MAX);
    }

    #[test]
    fn empty_grid_renders_empty() {
        assert!(Grid::new(0).render(true).is_empty());
    }
}
