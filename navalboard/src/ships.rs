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
//! Types used for defining ships and their shapes.
use thiserror::Error;

use crate::board::Coordinate;

pub use self::{linear::Line, owner::Owner};

mod linear;
mod owner;

/// Projection of a shape onto the grid relative to its origin: the cells the ship
/// occupies, starting at the origin.
pub type ShapeProjection = Vec<Coordinate>;

/// Placement orientation of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends along `x`.
    Horizontal,
    /// The ship extends along `y`.
    Vertical,
}

/// Error returned when constructing a ship with no length.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid ship: length must be positive and non-zero, got {length}")]
pub struct InvalidShip {
    length: usize,
}

impl InvalidShip {
    /// The length that was rejected.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single vessel: its shape, position, owner and damage.
///
/// The owner is kept as the raw player number given at construction. It is only
/// validated when the ship is placed on a [`Board`][crate::board::Board].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    shape: Line,
    origin: Coordinate,
    orientation: Orientation,
    owner: u8,
    hits: usize,
}

impl Ship {
    /// Construct an undamaged ship of the given length with its first cell at `(x, y)`.
    pub fn new(
        length: usize,
        x: isize,
        y: isize,
        orientation: Orientation,
        owner: u8,
    ) -> Result<Self, InvalidShip> {
        let shape = Line::try_new(length).ok_or(InvalidShip { length })?;
        Ok(Self {
            shape,
            origin: Coordinate::new(x, y),
            orientation,
            owner,
            hits: 0,
        })
    }

    /// Number of cells this ship spans.
    pub fn length(&self) -> usize {
        self.shape.len()
    }

    /// The cell the ship starts from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The direction the ship extends from its origin.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The player number this ship was built for.
    pub fn owner(&self) -> u8 {
        self.owner
    }

    /// How many times this ship has been hit.
    pub fn hits_taken(&self) -> usize {
        self.hits
    }

    /// Returns true once every cell of the ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.shape.len()
    }

    /// The cells this ship occupies, in order from its origin. Returns `None` if the
    /// ship extends past the range of [`Coordinate`].
    pub fn coords(&self) -> Option<ShapeProjection> {
        self.shape.project(self.origin, self.orientation)
    }

    /// The cell furthest from the origin. Returns `None` if it lies past the range of
    /// [`Coordinate`].
    pub fn end(&self) -> Option<Coordinate> {
        self.shape.end(self.origin, self.orientation)
    }

    /// Record one hit. Saturates at the ship's length.
    pub(crate) fn take_hit(&mut self) {
        if self.hits < self.shape.len() {
            self.hits += 1;
        }
    }
}
