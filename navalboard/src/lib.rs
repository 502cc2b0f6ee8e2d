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
//! State tracking for a game of Battleship played on a single shared board.
//!
//! Both players' ships live on one [`Board`]. Ships are placed with
//! [`Board::place_ship`], cells are attacked with [`Board::attack`], and the game is over
//! once every ship still afloat belongs to the same [`Owner`].
//!
//! ```
//! use navalboard::{AttackOutcome, Board, Orientation, Owner, Ship};
//!
//! let mut board = Board::new(10, 10);
//! board.place_ship(Ship::new(2, 0, 0, Orientation::Horizontal, 1)?)?;
//! board.place_ship(Ship::new(3, 4, 4, Orientation::Vertical, 2)?)?;
//!
//! assert_eq!(board.attack(0, 0)?.to_string(), "Hit at (0,0)");
//! let outcome = board.attack(1, 0)?;
//! assert_eq!(outcome.winner(), Some(Owner::P2));
//! assert!(matches!(outcome, AttackOutcome::Victory { .. }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod ships;

pub use crate::{
    board::{
        AttackOutcome, Board, CannotPlaceReason, CannotShootReason, Coordinate, Dimensions, Hit,
        PlaceError, Placed, ShipKey, ShotError,
    },
    ships::{InvalidShip, Orientation, Owner, Ship},
};
