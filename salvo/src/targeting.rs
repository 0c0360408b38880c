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

//! Policies the automated side uses to pick where to shoot.
//!
//! The turn engine only asks a [`TargetingStrategy`] for a coordinate, so a smarter
//! policy can be dropped in without touching the engine. Strategies only look at what
//! the shooter is allowed to know: which cells were hit or missed, and which hit cells
//! belong to ships already sunk.

#[cfg(feature = "rng_gen")]
use rand::Rng;
#[cfg(feature = "rng_gen")]
use tracing::trace;

use crate::board::{Board, Coordinate};
#[cfg(feature = "rng_gen")]
use crate::ships::Facing;

/// Chooses the next cell to shoot on a board.
pub trait TargetingStrategy {
    /// Pick a cell for which [`Board::is_valid_target`] holds. Returns `None` only if
    /// every cell of the board has already been shot.
    fn select_target(&mut self, board: &Board) -> Option<Coordinate>;
}

impl<T: TargetingStrategy + ?Sized> TargetingStrategy for &mut T {
    fn select_target(&mut self, board: &Board) -> Option<Coordinate> {
        (**self).select_target(board)
    }
}

impl<T: TargetingStrategy + ?Sized> TargetingStrategy for Box<T> {
    fn select_target(&mut self, board: &Board) -> Option<Coordinate> {
        (**self).select_target(board)
    }
}

/// Shoots uniformly at random by drawing cells until an unshot one comes up.
///
/// Drawing slows down as the board fills, but always terminates since the board is first
/// checked for a remaining target.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct RandomTargeting<R> {
    rng: R,
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> RandomTargeting<R> {
    /// Create a random strategy drawing from the given generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Extract the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> TargetingStrategy for RandomTargeting<R> {
    fn select_target(&mut self, board: &Board) -> Option<Coordinate> {
        if !board.has_valid_target() {
            return None;
        }
        let size = board.size() as isize;
        loop {
            let coord = Coordinate::new(self.rng.gen_range(0, size), self.rng.gen_range(0, size));
            if board.is_valid_target(coord) {
                return Some(coord);
            }
        }
    }
}

/// Hunt/target strategy: while some hit belongs to a ship that is still afloat, shoot
/// next to it, preferring cells that continue a line of hits. Otherwise fall back to
/// random shots.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct HuntTargeting<R> {
    fallback: RandomTargeting<R>,
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> HuntTargeting<R> {
    /// Create a hunt strategy using the given generator for its random shots.
    pub fn new(rng: R) -> Self {
        Self {
            fallback: RandomTargeting::new(rng),
        }
    }

    /// Find an unshot neighbor of an open hit, preferring one that extends two hits in a
    /// row.
    fn follow_up(board: &Board) -> Option<Coordinate> {
        let open_hits: Vec<Coordinate> = board
            .hits()
            .filter(|&coord| !board.is_cell_sunk(coord))
            .collect();
        let is_open_hit = |coord: Coordinate| open_hits.contains(&coord);

        let mut fallback = None;
        for &hit in &open_hits {
            for &facing in &Facing::ALL {
                let target = facing.advance(hit, 1);
                if !board.is_valid_target(target) {
                    continue;
                }
                if is_open_hit(facing.advance(hit, -1)) {
                    return Some(target);
                }
                fallback = fallback.or(Some(target));
            }
        }
        fallback
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> TargetingStrategy for HuntTargeting<R> {
    fn select_target(&mut self, board: &Board) -> Option<Coordinate> {
        match Self::follow_up(board) {
            Some(coord) => {
                trace!(%coord, "following up on hit");
                Some(coord)
            }
            None => self.fallback.select_target(board),
        }
    }
}

#[cfg(all(test, feature = "rng_gen"))]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{board::BoardSetup, config::Fleet, ships::Ship};

    fn board(size: usize, ships: &[Ship]) -> Board {
        let fleet = Fleet::new(ships.iter().map(Ship::len).collect()).unwrap();
        let mut setup = BoardSetup::new(size, fleet);
        for &ship in ships {
            setup.add_ship(ship).unwrap();
        }
        setup.start().unwrap()
    }

    #[test]
    fn random_targets_are_always_valid() {
        let mut board = board(3, &[Ship::new(Coordinate::new(0, 0), Facing::East, 3)]);
        let mut strategy = RandomTargeting::new(StdRng::seed_from_u64(9));
        for _ in 0..9 {
            let coord = strategy.select_target(&board).unwrap();
            assert!(board.is_valid_target(coord));
            board.shoot(coord).unwrap();
        }
        assert_eq!(strategy.select_target(&board), None);
    }

    #[test]
    fn hunt_follows_line_of_hits() {
        let ship = Ship::new(Coordinate::new(2, 2), Facing::East, 4);
        let mut board = board(8, &[ship]);
        board.shoot(Coordinate::new(2, 2)).unwrap();
        board.shoot(Coordinate::new(3, 2)).unwrap();
        let mut strategy = HuntTargeting::new(StdRng::seed_from_u64(2));
        let target = strategy.select_target(&board).unwrap();
        assert!(
            target == Coordinate::new(4, 2) || target == Coordinate::new(1, 2),
            "unexpected target {}",
            target
        );
    }

    #[test]
    fn hunt_sinks_ship_after_first_hit() {
        let ship = Ship::new(Coordinate::new(4, 4), Facing::South, 3);
        let mut board = board(8, &[ship]);
        board.shoot(Coordinate::new(4, 5)).unwrap();
        let mut strategy = HuntTargeting::new(StdRng::seed_from_u64(4));
        // At most four misses around the first hit before the line is found, then the
        // remaining cells follow.
        let mut shots = 0;
        while !board.is_game_over() {
            let coord = strategy.select_target(&board).unwrap();
            board.shoot(coord).unwrap();
            shots += 1;
            assert!(shots <= 6, "hunt took too many shots");
        }
    }

    #[test]
    fn hunt_ignores_sunk_ships() {
        let small = Ship::new(Coordinate::new(0, 0), Facing::East, 1);
        let other = Ship::new(Coordinate::new(5, 5), Facing::East, 2);
        let mut board = board(6, &[small, other]);
        board.shoot(Coordinate::new(0, 0)).unwrap();
        assert_eq!(HuntTargeting::<StdRng>::follow_up(&board), None);
    }

    #[test]
    fn boxed_strategies_delegate() {
        let board = board(2, &[Ship::new(Coordinate::new(0, 0), Facing::East, 1)]);
        let mut strategy: Box<dyn TargetingStrategy> =
            Box::new(RandomTargeting::new(StdRng::seed_from_u64(0)));
        assert!(strategy.select_target(&board).is_some());
    }
}
