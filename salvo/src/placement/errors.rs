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

use thiserror::Error;

use crate::{board::ShipNotPlaced, config::ConfigError};

/// Errors raised while building a fleet.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// The configuration can never produce a complete fleet.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Random sampling did not find a free spot for a ship within the attempt budget.
    #[error("could not place ship of length {length} after {attempts} attempts")]
    RetriesExhausted { length: usize, attempts: usize },

    /// All ships were placed but the fleet still does not match the configuration.
    #[error("placed ships do not match the fleet")]
    FleetIncomplete,

    /// A ship already on the board does not match the fleet slot it would fill.
    #[error("ship {index} on the board has length {length}, out of fleet order")]
    OutOfOrder { index: usize, length: usize },

    /// The interactive controller already finished placing the fleet.
    #[error("fleet placement is already complete")]
    AlreadyComplete,

    /// A ship the controller tracked was missing from the board.
    #[error(transparent)]
    NotPlaced(#[from] ShipNotPlaced),
}
