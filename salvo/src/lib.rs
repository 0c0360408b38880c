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

//! Game model and turn engine for two-player naval combat on a square grid.
//!
//! Each side builds a fleet on a private [`BoardSetup`][board::BoardSetup], either
//! click-by-click with [`InteractivePlacement`][placement::InteractivePlacement] or at
//! random with [`RandomPlacement`][placement::RandomPlacement]. Once the fleet is complete
//! the setup is started, producing a [`Board`][board::Board] that only accepts shots. Two
//! boards and a [`TargetingStrategy`][targeting::TargetingStrategy] for the automated side
//! make up a [`Game`][game::Game], which alternates shots until one fleet is destroyed.
//!
//! Drawing the grid and reading clicks or keys is left to the caller: boards expose
//! [`render_grid`][board::Board::render_grid] and the controllers accept one
//! [`Coordinate`][board::Coordinate] per step.

pub mod board;
pub mod config;
pub mod game;
pub mod placement;
pub mod ships;
pub mod targeting;

pub use crate::{
    board::{Board, BoardSetup, CellState, Coordinate, ShotOutcome},
    config::{Fleet, GameConfig},
    game::{Game, Side, TurnState},
    ships::{Facing, Ship},
};
