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
use crate::{
    board::Coordinate,
    ships::{Orientation, ShapeProjection},
};

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Returns `None` if len is 0.
    pub fn try_new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Line(len))
        }
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project this line onto the grid starting at `start` and extending along
    /// `orientation`. Returns `None` if any cell's coordinate overflows.
    ///
    /// The projection is not bounds-checked against any board.
    pub fn project(&self, start: Coordinate, orientation: Orientation) -> Option<ShapeProjection> {
        (0..self.0)
            .map(|i| match orientation {
                Orientation::Horizontal => start.offset_x(i),
                Orientation::Vertical => start.offset_y(i),
            })
            .collect()
    }

    /// The last cell of this line when projected from `start`. Returns `None` if it
    /// overflows.
    pub fn end(&self, start: Coordinate, orientation: Orientation) -> Option<Coordinate> {
        match orientation {
            Orientation::Horizontal => start.offset_x(self.0 - 1),
            Orientation::Vertical => start.offset_y(self.0 - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_not_a_line() {
        assert_eq!(Line::try_new(0), None);
        assert_eq!(Line::try_new(3).map(|l| l.len()), Some(3));
    }

    #[test]
    fn horizontal_projection_extends_along_x() {
        let line = Line::try_new(3).unwrap();
        assert_eq!(
            line.project(Coordinate::new(1, 4), Orientation::Horizontal),
            Some(vec![
                Coordinate::new(1, 4),
                Coordinate::new(2, 4),
                Coordinate::new(3, 4)
            ])
        );
    }

    #[test]
    fn vertical_projection_extends_along_y() {
        let line = Line::try_new(2).unwrap();
        assert_eq!(
            line.project(Coordinate::new(0, 6), Orientation::Vertical),
            Some(vec![Coordinate::new(0, 6), Coordinate::new(0, 7)])
        );
    }

    #[test]
    fn overflowing_projection_is_rejected() {
        let line = Line::try_new(2).unwrap();
        assert_eq!(
            line.project(Coordinate::new(isize::MAX, 0), Orientation::Horizontal),
            None
        );
    }

    #[test]
    fn end_is_last_projected_cell() {
        let line = Line::try_new(4).unwrap();
        let start = Coordinate::new(2, -1);
        for &orientation in &[Orientation::Horizontal, Orientation::Vertical] {
            let cells = line.project(start, orientation).unwrap();
            assert_eq!(line.end(start, orientation), cells.last().copied());
        }
        assert_eq!(
            Line::try_new(1).unwrap().end(start, Orientation::Vertical),
            Some(start)
        );
    }

    #[test]
    fn end_of_huge_line_overflows() {
        let line = Line::try_new(usize::max_value()).unwrap();
        assert_eq!(line.end(Coordinate::new(0, 0), Orientation::Horizontal), None);
        let line = Line::try_new(1 << 36).unwrap();
        assert_eq!(
            line.end(Coordinate::new(0, 3), Orientation::Vertical),
            Some(Coordinate::new(0, 3 + ((1 << 36) - 1)))
        );
    }
}
