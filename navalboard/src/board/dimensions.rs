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
//! Rectangular extent of a board.
use std::{borrow::Borrow, convert::TryFrom};

use crate::board::Coordinate;

/// Width and height of a board. Both are fixed at construction and nonzero.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()`, if either side
    /// exceeds `isize::max_value()`, or if `width` or `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 || isize::try_from(width.max(height)).is_err() {
            None
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies inside these dimensions.
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        self.try_linearize(coord).is_some()
    }

    /// Convert a coordinate to a row-major index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize<B: Borrow<Coordinate>>(&self, coord: B) -> Option<usize> {
        let c = coord.borrow();
        let x = usize::try_from(c.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(c.y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}
