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
//! Defines the cell grid backing a [`Board`][crate::board::Board].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, Dimensions, ShipKey};

/// A single cell in the board's grid.
#[derive(Debug, Default)]
pub(super) struct GridCell {
    /// The key of the active ship that occupies this cell, if any.
    pub(super) ship: Option<ShipKey>,

    /// Whether this cell has been attacked previously or not.
    pub(super) hit: bool,
}

/// Per-cell occupancy and attack state, indexed by [`Coordinate`].
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board, in row-major order.
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&GridCell> {
        self.dim.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
