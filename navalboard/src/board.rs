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
//! Types that make up the game board.

use std::fmt;

use enumflags2::BitFlags;
use log::{debug, info, trace};

use crate::ships::{Owner, Ship};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Stable handle to a ship placed on a [`Board`]. Keys are never reused on the same
/// board; the key of a sunk ship simply stops resolving.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipKey(usize);

/// Record of a coordinate that has been attacked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Hit {
    coord: Coordinate,
}

impl Hit {
    /// The attacked coordinate.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Receipt for a ship successfully added to the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placed {
    key: ShipKey,
    origin: Coordinate,
}

impl Placed {
    /// Key the placed ship can be looked up by.
    pub fn key(&self) -> ShipKey {
        self.key
    }

    /// Where the placed ship starts.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }
}

impl fmt::Display for Placed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ship added at {}", self.origin)
    }
}

/// Result of an accepted attack on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The attack did not hit anything.
    Miss(Coordinate),
    /// The attack hit the ship with the given key, but did not sink it.
    Hit(Coordinate, ShipKey),
    /// The attack sank the ship with the given key, and ships of both owners remain.
    Sunk(Coordinate, ShipKey),
    /// The attack sank the ship with the given key, and every remaining ship belongs
    /// to `winner`.
    Victory {
        coord: Coordinate,
        ship: ShipKey,
        winner: Owner,
    },
}

impl AttackOutcome {
    /// The attacked coordinate.
    pub fn coord(&self) -> Coordinate {
        match *self {
            AttackOutcome::Miss(coord)
            | AttackOutcome::Hit(coord, _)
            | AttackOutcome::Sunk(coord, _)
            | AttackOutcome::Victory { coord, .. } => coord,
        }
    }

    /// Get the key of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipKey> {
        match *self {
            AttackOutcome::Miss(_) => None,
            AttackOutcome::Hit(_, ship)
            | AttackOutcome::Sunk(_, ship)
            | AttackOutcome::Victory { ship, .. } => Some(ship),
        }
    }

    /// The winner, if this attack ended the game.
    pub fn winner(&self) -> Option<Owner> {
        match *self {
            AttackOutcome::Victory { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttackOutcome::Miss(coord) => write!(f, "Miss at {}", coord),
            AttackOutcome::Hit(coord, _) | AttackOutcome::Sunk(coord, _) => {
                write!(f, "Hit at {}", coord)
            }
            AttackOutcome::Victory { winner, .. } => write!(f, "{} wins", winner),
        }
    }
}

/// A ship owned by the board, along with its validated owner.
#[derive(Debug)]
struct PlacedShip {
    ship: Ship,
    owner: Owner,
}

/// A single shared ocean holding the ships of both players, along with the history of
/// every attack made on it.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships and cells attacked.
    grid: Grid,

    /// Ships indexed by [`ShipKey`]. Sunk ships leave an empty slot so keys stay valid
    /// and insertion order is preserved.
    ships: Vec<Option<PlacedShip>>,

    /// Every accepted attack, in order.
    hits: Vec<Hit>,
}

impl Board {
    /// Construct an empty board with the given height and width.
    /// Panics if either is 0. See [`Dimensions::new`].
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_dimensions(Dimensions::new(width, height))
    }

    /// Construct an empty board with the given height and width. Returns `None` if
    /// either is 0 or the board would be too large.
    pub fn try_new(height: usize, width: usize) -> Option<Self> {
        Dimensions::try_new(width, height).map(Self::with_dimensions)
    }

    /// Construct an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            hits: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Try to add the ship to the board.
    ///
    /// Checks, in order, that the owner is player 1 or 2, that every cell of the ship
    /// lies on the board, and that no cell is occupied by another ship. On failure the
    /// board is unchanged and the ship is returned inside the error.
    pub fn place_ship(&mut self, ship: Ship) -> Result<Placed, PlaceError> {
        let owner = match Owner::from_id(ship.owner()) {
            Some(owner) => owner,
            None => return Err(Self::reject(CannotPlaceReason::InvalidOwner, ship)),
        };
        // Ships are straight: both ends on the board puts every cell on it.
        let dim = self.grid.dim;
        let fits =
            dim.contains(ship.origin()) && ship.end().map_or(false, |end| dim.contains(end));
        if !fits {
            return Err(Self::reject(CannotPlaceReason::OutOfBounds, ship));
        }
        let cells = match ship.coords() {
            Some(cells) => cells,
            None => return Err(Self::reject(CannotPlaceReason::OutOfBounds, ship)),
        };
        if cells.iter().any(|c| self.grid[c].ship.is_some()) {
            return Err(Self::reject(CannotPlaceReason::Overlapping, ship));
        }

        let key = ShipKey(self.ships.len());
        // Already ensured that every position is valid and not occupied.
        for coord in cells.iter() {
            self.grid[coord].ship = Some(key);
        }
        let origin = ship.origin();
        debug!(
            "placed {:?} ship of length {} for {} at {}",
            ship.orientation(),
            ship.length(),
            owner,
            origin
        );
        self.ships.push(Some(PlacedShip { ship, owner }));
        Ok(Placed { key, origin })
    }

    fn reject(reason: CannotPlaceReason, ship: Ship) -> PlaceError {
        trace!("rejected ship at {}: {}", ship.origin(), reason);
        PlaceError::new(reason, ship)
    }

    /// Attack the cell at `(x, y)`, returning a result indicating why the attack was
    /// rejected or what it hit.
    ///
    /// An accepted attack is recorded before any ship is considered, and stays recorded
    /// whatever the outcome.
    pub fn attack(&mut self, x: isize, y: isize) -> Result<AttackOutcome, ShotError> {
        let coord = Coordinate::new(x, y);
        let hit_ship = match self.grid.get_mut(coord) {
            None => {
                trace!("attack at {} is out of bounds", coord);
                return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
            }
            Some(cell) if cell.hit => {
                trace!("attack at {} duplicates an earlier one", coord);
                return Err(ShotError::new(CannotShootReason::DuplicateHit, coord));
            }
            Some(cell) => {
                cell.hit = true;
                cell.ship
            }
        };
        self.hits.push(Hit { coord });

        let key = match hit_ship {
            Some(key) => key,
            None => {
                debug!("miss at {}", coord);
                return Ok(AttackOutcome::Miss(coord));
            }
        };
        let placed = match self.ships.get_mut(key.0).and_then(Option::as_mut) {
            Some(placed) => placed,
            // The grid only refers to ships that are still afloat.
            None => unreachable!("grid refers to missing ship {:?}", key),
        };
        placed.ship.take_hit();
        if !placed.ship.is_sunk() {
            debug!("hit {:?} at {}", key, coord);
            return Ok(AttackOutcome::Hit(coord, key));
        }

        self.sink(key);
        Ok(match self.winner() {
            Some(winner) => {
                info!("sank {:?} at {}; {} wins", key, coord, winner);
                AttackOutcome::Victory {
                    coord,
                    ship: key,
                    winner,
                }
            }
            None => {
                info!("sank {:?} at {}", key, coord);
                AttackOutcome::Sunk(coord, key)
            }
        })
    }

    /// Remove a sunk ship from play, freeing its cells for future placements.
    fn sink(&mut self, key: ShipKey) {
        if let Some(placed) = self.ships.get_mut(key.0).and_then(Option::take) {
            for coord in placed.ship.coords().into_iter().flatten() {
                if let Some(cell) = self.grid.get_mut(coord) {
                    cell.ship = None;
                }
            }
        }
    }

    /// Set of owners that still have at least one ship afloat.
    pub fn remaining_owners(&self) -> BitFlags<Owner> {
        self.active()
            .fold(BitFlags::empty(), |owners, placed| owners | placed.owner)
    }

    /// Returns true if every ship still afloat belongs to the same owner. A board with
    /// no ships afloat is not over, since there is nobody to declare the winner.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The owner of every remaining ship, if there is exactly one such owner.
    pub fn winner(&self) -> Option<Owner> {
        Owner::sole(self.remaining_owners())
    }

    /// Get an iterator over the ships still afloat, in the order they were placed.
    pub fn ships(&self) -> impl Iterator<Item = (ShipKey, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|placed| (ShipKey(i), &placed.ship)))
    }

    /// Get the ship with the given key, if it is still afloat.
    pub fn get_ship(&self, key: ShipKey) -> Option<&Ship> {
        self.ships
            .get(key.0)
            .and_then(Option::as_ref)
            .map(|placed| &placed.ship)
    }

    /// Get the ship afloat at the given coordinate, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<(ShipKey, &Ship)> {
        let key = self.grid.get(coord)?.ship?;
        self.get_ship(key).map(|ship| (key, ship))
    }

    /// Every attack accepted so far, in order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Returns true if the coordinate has already been attacked.
    pub fn was_attacked(&self, coord: Coordinate) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.hit)
    }

    fn active(&self) -> impl Iterator<Item = &PlacedShip> {
        self.ships.iter().filter_map(Option::as_ref)
    }
}

impl Default for Board {
    /// Construct an empty 10x10 board.
    fn default() -> Self {
        Self::with_dimensions(Dimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation::{Horizontal, Vertical};

    fn ship(length: usize, x: isize, y: isize, o: crate::ships::Orientation, owner: u8) -> Ship {
        Ship::new(length, x, y, o, owner).unwrap()
    }

    #[test]
    fn placement_reports_origin() {
        let mut board = Board::new(10, 10);
        let placed = board.place_ship(ship(5, 1, 0, Horizontal, 1)).unwrap();
        assert_eq!(placed.to_string(), "Ship added at (1,0)");
        assert_eq!(board.get_ship(placed.key()).map(Ship::length), Some(5));
    }

    #[test]
    fn owner_is_checked_before_geometry() {
        let mut board = Board::new(5, 5);
        let err = board.place_ship(ship(9, 0, 0, Horizontal, 3)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidOwner);
        let err = board.place_ship(ship(9, 0, 0, Horizontal, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidOwner);
        assert_eq!(board.ships().count(), 0);
    }

    #[test]
    fn extending_axis_is_bounds_checked() {
        let mut board = Board::new(4, 6);
        let err = board.place_ship(ship(3, 4, 0, Horizontal, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(board.place_ship(ship(3, 3, 0, Horizontal, 1)).is_ok());

        let err = board.place_ship(ship(2, 0, 3, Vertical, 2)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(board.place_ship(ship(2, 0, 2, Vertical, 2)).is_ok());
    }

    #[test]
    fn perpendicular_axis_is_bounds_checked() {
        let mut board = Board::new(4, 6);
        for bad in vec![
            ship(2, 0, 4, Horizontal, 1),
            ship(2, 0, -1, Horizontal, 1),
            ship(2, 6, 0, Vertical, 1),
            ship(2, -1, 0, Vertical, 1),
        ] {
            let err = board.place_ship(bad).unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        }
    }

    #[test]
    fn lengths_far_beyond_the_board_are_out_of_bounds() {
        let mut board = Board::new(10, 10);
        for &length in &[usize::max_value(), 1 << 36, 11] {
            for &o in &[Horizontal, Vertical] {
                let err = board.place_ship(ship(length, 0, 0, o, 1)).unwrap_err();
                assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
                assert_eq!(err.ship().length(), length);
            }
        }
        assert_eq!(board.ships().count(), 0);
    }

    #[test]
    fn overlapping_placement_is_rejected_and_returned() {
        let mut board = Board::new(10, 10);
        board.place_ship(ship(4, 2, 3, Horizontal, 1)).unwrap();
        let crossing = ship(3, 4, 1, Vertical, 2);
        let err = board.place_ship(crossing.clone()).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlapping);
        assert_eq!(err.into_ship(), crossing);
        assert!(board.place_ship(ship(3, 6, 1, Vertical, 2)).is_ok());
        assert_eq!(board.ships().count(), 2);
    }

    #[test]
    fn attack_on_empty_board_misses_then_duplicates() {
        let mut board = Board::new(10, 10);
        let outcome = board.attack(0, 0).unwrap();
        assert_eq!(outcome, AttackOutcome::Miss(Coordinate::new(0, 0)));
        assert_eq!(outcome.to_string(), "Miss at (0,0)");
        let err = board.attack(0, 0).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::DuplicateHit);
        assert_eq!(board.hits().len(), 1);
    }

    #[test]
    fn out_of_bounds_attacks_record_nothing() {
        let mut board = Board::new(3, 3);
        for &(x, y) in &[(3, 0), (0, 3), (-1, 0), (0, -1)] {
            let err = board.attack(x, y).unwrap_err();
            assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        }
        assert!(board.hits().is_empty());
    }

    #[test]
    fn hits_accumulate_until_the_ship_sinks() {
        let mut board = Board::new(10, 10);
        let a = board.place_ship(ship(2, 0, 0, Horizontal, 1)).unwrap().key();
        board.place_ship(ship(2, 0, 5, Horizontal, 1)).unwrap();
        board.place_ship(ship(1, 9, 9, Horizontal, 2)).unwrap();

        assert_eq!(
            board.attack(0, 0).unwrap(),
            AttackOutcome::Hit(Coordinate::new(0, 0), a)
        );
        assert_eq!(board.get_ship(a).map(Ship::hits_taken), Some(1));

        let outcome = board.attack(1, 0).unwrap();
        assert_eq!(outcome, AttackOutcome::Sunk(Coordinate::new(1, 0), a));
        assert_eq!(outcome.to_string(), "Hit at (1,0)");
        assert!(board.get_ship(a).is_none());
        assert!(board.ship_at(Coordinate::new(0, 0)).is_none());
        assert_eq!(board.ships().count(), 2);
        assert!(!board.is_game_over());
    }

    #[test]
    fn sinking_the_last_ship_of_an_owner_wins_for_the_other() {
        let mut board = Board::new(10, 10);
        board.place_ship(ship(1, 0, 0, Horizontal, 1)).unwrap();
        board.place_ship(ship(2, 5, 5, Vertical, 2)).unwrap();

        let outcome = board.attack(0, 0).unwrap();
        assert_eq!(outcome.winner(), Some(Owner::P2));
        assert_eq!(outcome.to_string(), "Player 2 wins");
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Owner::P2));
    }

    #[test]
    fn sinking_the_only_ship_leaves_no_winner() {
        let mut board = Board::new(10, 10);
        let key = board.place_ship(ship(1, 3, 3, Horizontal, 1)).unwrap().key();
        // A single owner on the board is already game over.
        assert!(board.is_game_over());
        assert_eq!(
            board.attack(3, 3).unwrap(),
            AttackOutcome::Sunk(Coordinate::new(3, 3), key)
        );
        assert!(!board.is_game_over());
        assert!(board.remaining_owners().is_empty());
    }

    #[test]
    fn sunk_ship_cells_can_be_reused() {
        let mut board = Board::new(10, 10);
        board.place_ship(ship(1, 4, 4, Horizontal, 1)).unwrap();
        board.place_ship(ship(1, 0, 0, Horizontal, 2)).unwrap();
        board.place_ship(ship(1, 9, 0, Horizontal, 2)).unwrap();
        board.attack(0, 0).unwrap();
        let placed = board.place_ship(ship(2, 0, 0, Vertical, 2)).unwrap();
        assert_eq!(placed.key(), ShipKey(3));
        // The cell stays attacked under the replacement.
        assert!(board.was_attacked(Coordinate::new(0, 0)));
        assert!(board.attack(0, 0).is_err());
    }

    #[test]
    fn ships_iterate_in_placement_order() {
        let mut board = Board::default();
        board.place_ship(ship(2, 0, 0, Horizontal, 1)).unwrap();
        board.place_ship(ship(3, 0, 2, Horizontal, 2)).unwrap();
        board.place_ship(ship(4, 0, 4, Horizontal, 1)).unwrap();
        let lengths: Vec<usize> = board.ships().map(|(_, s)| s.length()).collect();
        assert_eq!(lengths, vec![2, 3, 4]);
        assert_eq!(board.remaining_owners(), Owner::P1 | Owner::P2);
    }
}
