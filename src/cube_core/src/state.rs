//! The cube itself: which cubelet sits in each slot and which color shows at
//! each sticker position, plus the rotation engine that keeps both in step.

use std::{array, fmt, ops::Index};

use itertools::Itertools;
use log::trace;

use crate::{
    adjacency::{CUBELET_COUNT, STICKERS_PER_FACE, SlotId, Sticker, border_rows, face_slots},
    face::{Face, ParseMoveError, RotationCommand, parse_sequence},
    permutation::{cycle4, permute_face},
};

/// Cubelet occupancy of the 27 slots together with the color label of the
/// 54 stickers.
///
/// A fresh state is solved: slot `s` holds cubelet `s` and every sticker of
/// face `f` shows `f`. Rotations only ever permute both tables, so the
/// occupancy stays a bijection and every color keeps exactly nine stickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    cubelets: [u8; CUBELET_COUNT],
    labels: [[Face; STICKERS_PER_FACE]; 6],
}

const fn flat_index(sticker: Sticker) -> usize {
    sticker.face.index() * STICKERS_PER_FACE + sticker.local
}

impl CubeState {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        Self {
            cubelets: array::from_fn(|slot| slot as u8),
            labels: Face::ALL.map(|face| [face; STICKERS_PER_FACE]),
        }
    }

    /// A solved cube with `commands` applied in order.
    #[must_use]
    pub fn from_commands(commands: &[RotationCommand]) -> Self {
        let mut cube = Self::new();
        cube.rotate_all(commands);
        cube
    }

    /// Applies one quarter turn.
    ///
    /// The nine slots of the turned layer move around the corner and edge
    /// cycles, the turned face's own labels move with them, and the three
    /// bordering stickers on each of the four neighbors shift one neighbor
    /// along the ring. The other 42 stickers are untouched.
    pub fn rotate(&mut self, command: RotationCommand) {
        let RotationCommand { face, direction } = command;

        let slots = face_slots(face).map(usize::from);
        permute_face(&mut self.cubelets, &slots, direction);

        let labels = self.labels.as_flattened_mut();
        let own = array::from_fn(|local| flat_index(Sticker::new(face, local)));
        permute_face(labels, &own, direction);

        let rows = border_rows(face);
        for column in 0..3 {
            cycle4(labels, rows.map(|row| flat_index(row[column])), direction);
        }

        trace!("Rotated {command}");
    }

    pub fn rotate_all(&mut self, commands: &[RotationCommand]) {
        for &command in commands {
            self.rotate(command);
        }
    }

    /// Parses `notation` and applies it.
    ///
    /// # Errors
    ///
    /// If the notation is malformed. The state is left untouched in that
    /// case, even when a prefix of the sequence was valid.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), ParseMoveError> {
        let commands = parse_sequence(notation)?;
        self.rotate_all(&commands);
        Ok(())
    }

    /// The color currently showing at `local` on `side`.
    ///
    /// # Panics
    ///
    /// If `local` is not in `0..9`.
    #[must_use]
    pub fn current_face(&self, side: Face, local: usize) -> Face {
        self.labels[side.index()][local]
    }

    /// Like [`CubeState::current_face`], but `None` for an out of range
    /// local index.
    #[must_use]
    pub fn get_current_face(&self, side: Face, local: usize) -> Option<Face> {
        self.labels[side.index()].get(local).copied()
    }

    #[must_use]
    pub fn face_labels(&self, side: Face) -> &[Face; STICKERS_PER_FACE] {
        &self.labels[side.index()]
    }

    /// The cubelet currently occupying `slot`.
    ///
    /// # Panics
    ///
    /// If `slot` is not in `0..27`.
    #[must_use]
    pub fn cubelet_at(&self, slot: SlotId) -> u8 {
        self.cubelets[usize::from(slot)]
    }

    #[must_use]
    pub fn cubelets(&self) -> &[u8; CUBELET_COUNT] {
        &self.cubelets
    }

    /// The slot currently occupied by `cubelet`.
    #[must_use]
    pub fn slot_of(&self, cubelet: u8) -> Option<SlotId> {
        self.cubelets
            .iter()
            .position(|&occupant| occupant == cubelet)
            .and_then(|slot| SlotId::try_from(slot).ok())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::new()
    }

    /// Whether the occupancy table is a permutation of `0..27`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn is_cubelet_bijection(&self) -> bool {
        self.cubelets
            .iter()
            .copied()
            .sorted_unstable()
            .eq(0..CUBELET_COUNT as u8)
    }

    /// How many stickers show each color, indexed by `Face::index()`.
    #[must_use]
    pub fn label_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &label in self.labels.as_flattened() {
            counts[label.index()] += 1;
        }
        counts
    }

    fn net_row(&self, side: Face, row: usize) -> String {
        self.labels[side.index()][row * 3..row * 3 + 3]
            .iter()
            .join("")
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Sticker> for CubeState {
    type Output = Face;

    fn index(&self, sticker: Sticker) -> &Self::Output {
        &self.labels[sticker.face.index()][sticker.local]
    }
}

/// Unfolded net with UP on top, then LEFT FRONT RIGHT BACK, then DOWN.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "   {}", self.net_row(Face::Up, row))?;
        }
        for row in 0..3 {
            let belt = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|side| self.net_row(side, row))
                .join("");
            writeln!(f, "{belt}")?;
        }
        for row in 0..3 {
            writeln!(f, "   {}", self.net_row(Face::Down, row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::CENTER;

    fn cube(notation: &str) -> CubeState {
        CubeState::from_commands(&parse_sequence(notation).unwrap())
    }

    fn assert_labels(cube: &CubeState, expected: &[(Face, usize, Face)]) {
        for &(side, local, label) in expected {
            assert_eq!(
                cube.current_face(side, local),
                label,
                "where side={side} and local={local}"
            );
        }
    }

    fn assert_slots(cube: &CubeState, slots: &[SlotId], cubelets: &[u8]) {
        assert_eq!(slots.len(), cubelets.len());
        for (&slot, &cubelet) in slots.iter().zip(cubelets) {
            assert_eq!(cube.cubelet_at(slot), cubelet, "where slot={slot}");
        }
    }

    #[test]
    fn test_fresh_cube_is_solved() {
        let cube = CubeState::new();
        assert!(cube.is_solved());
        for side in Face::ALL {
            for local in 0..STICKERS_PER_FACE {
                assert_eq!(cube.current_face(side, local), side);
            }
        }
        assert_eq!(cube, CubeState::default());
    }

    #[test]
    fn test_labels_after_r() {
        use Face::{Back, Down, Front, Up};
        assert_labels(
            &cube("R"),
            &[
                (Front, 2, Down),
                (Front, 5, Down),
                (Front, 8, Down),
                (Up, 2, Front),
                (Up, 5, Front),
                (Up, 8, Front),
                (Back, 0, Up),
                (Back, 3, Up),
                (Back, 6, Up),
                (Down, 2, Back),
                (Down, 5, Back),
                (Down, 8, Back),
            ],
        );
    }

    #[test]
    fn test_labels_after_r_u() {
        use Face::{Back, Down, Front, Left, Right, Up};
        assert_labels(
            &cube("R U"),
            &[
                (Front, 0, Right),
                (Front, 1, Right),
                (Front, 2, Right),
                (Front, 5, Down),
                (Front, 8, Down),
                (Up, 6, Front),
                (Up, 7, Front),
                (Up, 8, Front),
                (Up, 2, Up),
                (Up, 5, Up),
                (Back, 0, Left),
                (Back, 1, Left),
                (Back, 2, Left),
                (Back, 3, Up),
                (Back, 6, Up),
                (Down, 2, Back),
                (Down, 5, Back),
                (Down, 8, Back),
            ],
        );
    }

    #[test]
    fn test_labels_after_f_l() {
        use Face::{Back, Down, Front, Left, Right, Up};
        assert_labels(
            &cube("F L"),
            &[
                (Front, 0, Up),
                (Front, 3, Up),
                (Front, 6, Left),
                (Up, 0, Back),
                (Up, 3, Back),
                (Up, 6, Back),
                (Up, 7, Left),
                (Up, 8, Left),
                (Back, 2, Down),
                (Back, 5, Down),
                (Back, 8, Right),
                (Left, 6, Down),
                (Left, 7, Down),
                (Left, 8, Down),
                (Down, 0, Front),
                (Down, 1, Right),
                (Down, 2, Right),
                (Down, 3, Front),
                (Down, 6, Front),
            ],
        );
    }

    #[test]
    fn test_turned_face_labels_move() {
        let mut cube = cube("R U");
        let before = *cube.face_labels(Face::Front);
        cube.rotate(RotationCommand::clockwise(Face::Front));
        let after = cube.face_labels(Face::Front);
        assert_eq!(after[2], before[0]);
        assert_eq!(after[5], before[1]);
        assert_eq!(after[6], before[8]);
        assert_eq!(after[CENTER], Face::Front);
    }

    #[test]
    fn test_counter_clockwise_slots() {
        assert_slots(
            &cube("F'"),
            &[18, 19, 20, 21, 23, 24, 25, 26],
            &[24, 21, 18, 25, 19, 26, 23, 20],
        );
        assert_slots(
            &cube("B'"),
            &[0, 1, 2, 3, 5, 6, 7, 8],
            &[2, 5, 8, 1, 7, 0, 3, 6],
        );
        assert_slots(
            &cube("L'"),
            &[18, 9, 0, 21, 3, 24, 15, 6],
            &[0, 3, 6, 9, 15, 18, 21, 24],
        );
        assert_slots(
            &cube("R'"),
            &[26, 17, 8, 23, 5, 20, 11, 2],
            &[8, 5, 2, 17, 11, 26, 23, 20],
        );
        assert_slots(
            &cube("U'"),
            &[6, 7, 8, 15, 17, 24, 25, 26],
            &[8, 17, 26, 7, 25, 6, 15, 24],
        );
    }

    #[test]
    fn test_down_slots() {
        let mut cube = cube("D'");
        assert_slots(
            &cube,
            &[0, 1, 2, 11, 20, 19, 18, 9],
            &[18, 9, 0, 1, 2, 11, 20, 19],
        );
        cube.rotate(RotationCommand::counter_clockwise(Face::Down));
        let half_turn_slots = [0, 1, 2, 11, 20, 19, 18, 9];
        let half_turn_cubelets = [20, 19, 18, 9, 0, 1, 2, 11];
        assert_slots(&cube, &half_turn_slots, &half_turn_cubelets);

        let mut cube = CubeState::new();
        cube.rotate(RotationCommand::clockwise(Face::Down));
        assert_slots(
            &cube,
            &[0, 1, 2, 11, 20, 19, 18, 9],
            &[2, 11, 20, 19, 18, 9, 0, 1],
        );
        cube.rotate(RotationCommand::clockwise(Face::Down));
        assert_slots(&cube, &half_turn_slots, &half_turn_cubelets);
    }

    #[test]
    fn test_composed_slots() {
        assert_slots(
            &cube("R' D'"),
            &[18, 19, 20, 11, 2, 9, 0, 1],
            &[26, 23, 20, 1, 0, 19, 18, 9],
        );
        assert_slots(
            &cube("R' D' R"),
            &[23, 20, 11, 2, 5, 8, 17, 26],
            &[1, 0, 11, 2, 5, 8, 17, 20],
        );

        let mut cube = cube("D");
        assert_slots(
            &cube,
            &[18, 19, 20, 9, 10, 11, 0, 1, 2],
            &[0, 9, 18, 1, 10, 19, 2, 11, 20],
        );
        cube.rotate(RotationCommand::clockwise(Face::Right));
        assert_slots(
            &cube,
            &[20, 23, 26, 11, 2, 5, 8, 17],
            &[20, 19, 18, 5, 8, 17, 26, 23],
        );
    }

    #[test]
    fn test_slot_lookup_both_ways() {
        let cube = cube("R U' F2 D");
        for slot in 0..CUBELET_COUNT as SlotId {
            assert_eq!(cube.slot_of(cube.cubelet_at(slot)), Some(slot));
        }
        assert_eq!(cube.slot_of(27), None);
        // The core never moves
        assert_eq!(cube.cubelet_at(13), 13);
    }

    #[test]
    fn test_out_of_range_local() {
        let cube = CubeState::new();
        assert_eq!(cube.get_current_face(Face::Up, 8), Some(Face::Up));
        assert_eq!(cube.get_current_face(Face::Up, 9), None);
        assert_eq!(cube[Sticker::new(Face::Left, 3)], Face::Left);
    }

    #[test]
    #[should_panic]
    fn test_current_face_panics_past_the_grid() {
        let _ = CubeState::new().current_face(Face::Front, 9);
    }

    #[test]
    fn test_malformed_notation_leaves_state_untouched() {
        let mut cube = cube("R U");
        let before = cube.clone();
        assert!(cube.apply_notation("F B Z L").is_err());
        assert_eq!(cube, before);
        cube.apply_notation("U' R'").unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn test_display_net() {
        let expected = "   UUU\n   UUU\n   UUU\n\
                        LLLFFFRRRBBB\nLLLFFFRRRBBB\nLLLFFFRRRBBB\n   \
                        DDD\n   DDD\n   DDD\n";
        assert_eq!(CubeState::new().to_string(), expected);

        let turned = cube("U").to_string();
        assert!(turned.contains("FFFRRRBBBLLL"));
    }
}
