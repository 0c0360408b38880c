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

//! Controllers that fill a [`BoardSetup`][crate::board::BoardSetup] with a fleet.
//!
//! [`InteractivePlacement`] follows a player's clicks, one ship at a time.
//! [`RandomPlacement`] places ships for the automated side by rejection sampling. Both
//! work on the same setup type, so a player may place some ships by hand and hand the
//! rest to the random placer.

pub use self::{
    errors::PlacementError,
    interactive::{InteractivePlacement, PlacementPrompt, PlacementState},
};
#[cfg(feature = "rng_gen")]
pub use self::random::RandomPlacement;

mod errors;
mod interactive;
#[cfg(feature = "rng_gen")]
mod random;
