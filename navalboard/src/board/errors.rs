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
//! Errors used by the `Board`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship's owner is not player 1 or 2.
    #[error("invalid owner")]
    InvalidOwner,
    /// Part of the ship would lie outside the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the ship's cells is already occupied by another ship.
    #[error("the ship overlaps a ship that was already placed")]
    Overlapping,
}

/// Error caused when attempting to place a ship in an invalid position. Hands the
/// rejected ship back to the caller.
#[derive(Error)]
#[error("could not place ship at {}: {}", .ship.origin(), .reason)]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the [`Ship`] that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected [`Ship`] from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be attacked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,

    /// An attack has already been made on that cell.
    #[error("the target cell was already attacked")]
    DuplicateHit,
}

/// Error returned when trying to attack a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not attack {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be attacked.
    #[source]
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the attack failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the attacked cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
