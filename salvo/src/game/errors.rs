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

use crate::{board::ShotError, game::Side};

/// Reason why the turn engine refused a shot. The game state is unchanged.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The game is already over.
    #[error("the game is already over, {winner} won")]
    AlreadyOver { winner: Side },

    /// A side tried to shoot while it was the other side's turn.
    #[error("{0} attempted to shoot out of turn")]
    OutOfTurn(Side),

    /// The target cell could not be shot. The turn is not consumed.
    #[error(transparent)]
    InvalidShot(#[from] ShotError),

    /// The targeting strategy found nothing left to shoot.
    #[error("no valid target left on the board")]
    NoTargetAvailable,
}
