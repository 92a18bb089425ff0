//! The quarter-turn primitive shared by every table the cube keeps.
//!
//! A quarter turn of a face moves its four corners one step around
//! [`CORNER_CYCLE`] and its four edges one step around [`EDGE_CYCLE`]. The
//! same cycles drive the cubelet slots, the turned face's own labels and the
//! labels on the bordering rows of the neighbors.

use crate::face::Direction;

/// Corner positions of a face grid in clockwise order.
pub const CORNER_CYCLE: [usize; 4] = [0, 2, 8, 6];
/// Edge positions of a face grid in clockwise order.
pub const EDGE_CYCLE: [usize; 4] = [1, 5, 7, 3];

/// Four positions whose values rotate together. Clockwise moves the value
/// at position 0 to position 1, 1 to 2, 2 to 3 and 3 back to 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuarterCycle([usize; 4]);

impl QuarterCycle {
    #[must_use]
    pub const fn new(positions: [usize; 4]) -> Self {
        Self(positions)
    }

    /// Sends every position through `map`, keeping the cycle order.
    #[must_use]
    pub fn through(self, map: impl Fn(usize) -> usize) -> Self {
        Self(self.0.map(map))
    }

    /// Rotates the four values one step.
    ///
    /// # Panics
    ///
    /// If any position is out of bounds for `values`.
    pub fn apply<T: Copy>(self, values: &mut [T], direction: Direction) {
        let mut held = self.0.map(|position| values[position]);
        match direction {
            Direction::Clockwise => held.rotate_right(1),
            Direction::CounterClockwise => held.rotate_left(1),
        }
        for (position, value) in self.0.into_iter().zip(held) {
            values[position] = value;
        }
    }
}

/// Rotates the values held at four positions one step.
///
/// # Panics
///
/// If any position is out of bounds for `values`.
pub fn cycle4<T: Copy>(values: &mut [T], positions: [usize; 4], direction: Direction) {
    QuarterCycle::new(positions).apply(values, direction);
}

/// Applies a quarter turn to the nine values a face grid addresses, where
/// `indices[local]` is where the value for grid position `local` lives in
/// `values`. The center stays put.
///
/// # Panics
///
/// If any index is out of bounds for `values`.
pub fn permute_face<T: Copy>(values: &mut [T], indices: &[usize; 9], direction: Direction) {
    for cycle in [CORNER_CYCLE, EDGE_CYCLE] {
        QuarterCycle::new(cycle)
            .through(|local| indices[local])
            .apply(values, direction);
    }
}
