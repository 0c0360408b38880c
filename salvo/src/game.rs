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

//! The turn engine: two started boards, one per side, and strict alternation of shots
//! between the player and the automated opponent.
//!
//! The player's shots come from outside, one coordinate per call. The opponent's shots
//! come from a [`TargetingStrategy`]. A shot that is refused (out of bounds, or at a cell
//! already shot) does not use up the turn. After every accepted shot both boards are
//! checked and the game ends as soon as one fleet is fully destroyed.
use std::fmt;

use tracing::{debug, trace};

use crate::{
    board::{Board, Coordinate, ShotOutcome},
    targeting::TargetingStrategy,
};

pub use self::errors::TurnError;

mod errors;

/// One of the two sides of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The side whose shots are supplied by the caller.
    Player,
    /// The automated side, whose shots come from the targeting strategy.
    Opponent,
}

impl Side {
    /// Get the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        })
    }
}

/// State of the turn engine. The `Display` form is a stable key that front ends map to
/// their own wording.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TurnState {
    /// Waiting for the player to pick a cell on the opponent's board.
    AwaitingPlayerShot,
    /// Waiting for the opponent's strategy to fire at the player's board.
    AwaitingOpponentShot,
    /// The given side destroyed the other side's fleet. No more shots are accepted.
    GameOver(Side),
}

impl TurnState {
    /// The state in which the given side is due to shoot.
    fn awaiting(side: Side) -> Self {
        match side {
            Side::Player => TurnState::AwaitingPlayerShot,
            Side::Opponent => TurnState::AwaitingOpponentShot,
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TurnState::AwaitingPlayerShot => f.pad("AwaitingPlayerShot"),
            TurnState::AwaitingOpponentShot => f.pad("AwaitingOpponentShot"),
            TurnState::GameOver(winner) => write!(f, "GameOver(winner={})", winner),
        }
    }
}

/// A game in progress between the player and an automated opponent.
#[derive(Debug)]
pub struct Game<S> {
    /// The player's own fleet, which the opponent shoots at.
    player: Board,
    /// The opponent's fleet, which the player shoots at.
    opponent: Board,
    /// Picks the opponent's shots.
    strategy: S,
    state: TurnState,
    /// Accepted shots per side, indexed by [`Side::index`].
    shots: [usize; 2],
}

impl<S: TargetingStrategy> Game<S> {
    /// Start a game between the two boards. The player shoots first.
    pub fn new(player: Board, opponent: Board, strategy: S) -> Self {
        let state = winner_of(&player, &opponent)
            .map_or(TurnState::AwaitingPlayerShot, TurnState::GameOver);
        Self {
            player,
            opponent,
            strategy,
            state,
            shots: [0; 2],
        }
    }

    /// Current state of the turn engine.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Get the winner, or `None` if the game is still in progress.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The board holding the given side's fleet.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// The player's own fleet, which the opponent shoots at.
    pub fn player_board(&self) -> &Board {
        &self.player
    }

    /// The opponent's fleet, which the player shoots at.
    pub fn opponent_board(&self) -> &Board {
        &self.opponent
    }

    /// Number of accepted shots the given side has fired.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The opponent's targeting strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Fire the player's shot at the opponent's board. If the shot is refused, the
    /// player keeps the turn. Otherwise the turn passes to the opponent, unless the game
    /// ended.
    pub fn player_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, TurnError> {
        self.check_turn(Side::Player)?;
        let outcome = self.opponent.shoot(coord)?;
        trace!(%coord, ?outcome, "player shot");
        self.finish_turn(Side::Player);
        Ok(outcome)
    }

    /// Let the strategy pick a cell on the player's board and fire at it. Returns the
    /// cell that was shot and the outcome.
    pub fn opponent_shot(&mut self) -> Result<(Coordinate, ShotOutcome), TurnError> {
        self.check_turn(Side::Opponent)?;
        let coord = self
            .strategy
            .select_target(&self.player)
            .ok_or(TurnError::NoTargetAvailable)?;
        let outcome = self.player.shoot(coord)?;
        trace!(%coord, ?outcome, "opponent shot");
        self.finish_turn(Side::Opponent);
        Ok((coord, outcome))
    }

    /// Drive the engine by one step of input from the player, which may be `None` if no
    /// cell was picked yet. A valid player shot is followed immediately by the
    /// opponent's reply unless that shot ended the game. If the opponent's reply is
    /// still owed, `None` retries it and a cell from the player is refused as out of
    /// turn. Returns the new state.
    pub fn step(&mut self, input: Option<Coordinate>) -> Result<TurnState, TurnError> {
        match self.state {
            TurnState::GameOver(winner) => return Err(TurnError::AlreadyOver { winner }),
            TurnState::AwaitingOpponentShot if input.is_some() => {
                return Err(TurnError::OutOfTurn(Side::Player))
            }
            TurnState::AwaitingOpponentShot => {
                self.opponent_shot()?;
            }
            TurnState::AwaitingPlayerShot => {
                if let Some(coord) = input {
                    self.player_shot(coord)?;
                    if self.state == TurnState::AwaitingOpponentShot {
                        self.opponent_shot()?;
                    }
                }
            }
        }
        Ok(self.state)
    }

    /// Play the game to the end, taking the player's shots from `shooter`. Returns the
    /// winner.
    pub fn play_out<P>(&mut self, shooter: &mut P) -> Result<Side, TurnError>
    where
        P: TargetingStrategy + ?Sized,
    {
        loop {
            match self.state {
                TurnState::GameOver(winner) => return Ok(winner),
                TurnState::AwaitingPlayerShot => {
                    let coord = shooter
                        .select_target(&self.opponent)
                        .ok_or(TurnError::NoTargetAvailable)?;
                    self.player_shot(coord)?;
                }
                TurnState::AwaitingOpponentShot => {
                    self.opponent_shot()?;
                }
            }
        }
    }

    /// Give up the game and get back the player's and opponent's boards.
    pub fn into_boards(self) -> (Board, Board) {
        (self.player, self.opponent)
    }

    /// Check that it is the given side's turn.
    fn check_turn(&self, side: Side) -> Result<(), TurnError> {
        match self.state {
            TurnState::GameOver(winner) => Err(TurnError::AlreadyOver { winner }),
            state if state == TurnState::awaiting(side) => Ok(()),
            _ => Err(TurnError::OutOfTurn(side)),
        }
    }

    /// Record an accepted shot by `shooter` and move to the next state.
    fn finish_turn(&mut self, shooter: Side) {
        self.shots[shooter.index()] += 1;
        self.state = match winner_of(&self.player, &self.opponent) {
            Some(winner) => {
                debug!(
                    %winner,
                    player_shots = self.shots[0],
                    opponent_shots = self.shots[1],
                    "game over"
                );
                TurnState::GameOver(winner)
            }
            None => TurnState::awaiting(shooter.other()),
        };
    }
}

/// Decide the winner from the two fleets. If both are destroyed the player wins, since
/// the opponent never fires after a shot that ends the game.
fn winner_of(player: &Board, opponent: &Board) -> Option<Side> {
    if opponent.is_game_over() {
        Some(Side::Player)
    } else if player.is_game_over() {
        Some(Side::Opponent)
    } else {
        None
    }
}
