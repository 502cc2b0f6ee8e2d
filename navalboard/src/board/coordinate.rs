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
use std::{convert::TryFrom, fmt};

/// The coordinates of a cell in the board.
///
/// Components are signed so that callers may name cells left of or above the board;
/// such coordinates are simply out of bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: isize,
    /// Vertical position of the cell.
    pub y: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Get the coordinate `dist` cells further along the `x` axis. Returns `None` on
    /// overflow.
    pub(crate) fn offset_x(self, dist: usize) -> Option<Self> {
        let dist = isize::try_from(dist).ok()?;
        self.x.checked_add(dist).map(|x| Self { x, ..self })
    }

    /// Get the coordinate `dist` cells further along the `y` axis. Returns `None` on
    /// overflow.
    pub(crate) fn offset_y(self, dist: usize) -> Option<Self> {
        let dist = isize::try_from(dist).ok()?;
        self.y.checked_add(dist).map(|y| Self { y, ..self })
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (isize, isize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
