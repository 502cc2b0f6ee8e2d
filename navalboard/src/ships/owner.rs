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
use std::fmt;

use enumflags2::BitFlags;

/// The player a ship belongs to. Externally players are numbered `1` and `2`.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Owner {
    /// Player 1.
    P1 = 0b01,
    /// Player 2.
    P2 = 0b10,
}

impl Owner {
    /// Look up the owner with the given player number. Returns `None` for anything
    /// other than `1` or `2`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Owner::P1),
            2 => Some(Owner::P2),
            _ => None,
        }
    }

    /// The player number of this owner.
    pub fn id(self) -> u8 {
        match self {
            Owner::P1 => 1,
            Owner::P2 => 2,
        }
    }

    /// If the set holds exactly one owner, return it.
    pub fn sole(owners: BitFlags<Owner>) -> Option<Self> {
        [Owner::P1, Owner::P2]
            .iter()
            .copied()
            .find(|&owner| owners == BitFlags::from(owner))
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}
