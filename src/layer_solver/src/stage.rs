use std::fmt;

use cube_core::{
    CubeState, Face, Sticker,
    adjacency::{corner_stickers, edge_partner},
};

/// An edge sticker together with the face its partner sticker shows when
/// the piece is solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgePiece {
    pub side: Face,
    pub local: usize,
    pub expected_partner: Face,
}

impl EdgePiece {
    #[must_use]
    pub const fn new(side: Face, local: usize, expected_partner: Face) -> Self {
        Self {
            side,
            local,
            expected_partner,
        }
    }

    /// Whether both stickers of the edge show their own face.
    #[must_use]
    pub fn is_placed(&self, cube: &CubeState) -> bool {
        cube.get_current_face(self.side, self.local) == Some(self.side)
            && edge_partner(self.side, self.local).is_some_and(|partner| {
                partner.face == self.expected_partner && cube[partner] == self.expected_partner
            })
    }
}

/// The four edges of the bottom cross.
pub const BOTTOM_CROSS: [EdgePiece; 4] = [
    EdgePiece::new(Face::Down, 1, Face::Front),
    EdgePiece::new(Face::Down, 3, Face::Left),
    EdgePiece::new(Face::Down, 5, Face::Right),
    EdgePiece::new(Face::Down, 7, Face::Back),
];

/// The bottom corner slot below the lower right sticker of `side`.
#[must_use]
pub fn bottom_corner(side: Face) -> Option<[Sticker; 3]> {
    corner_stickers(side, 8)
}

/// Whether the bottom corner to the right of `side` is solved.
#[must_use]
pub fn is_corner_placed(cube: &CubeState, side: Face) -> bool {
    let Some(stickers) = bottom_corner(side) else {
        return false;
    };
    stickers.iter().all(|&s| cube[s] == s.face)
}

/// Milestones of the layer by layer method, in the order they are reached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolveStage {
    UnsolvedBottomCross,
    BottomCrossDone,
    BottomCornersDone,
}

impl SolveStage {
    #[must_use]
    pub fn of(cube: &CubeState) -> Self {
        if !BOTTOM_CROSS.iter().all(|piece| piece.is_placed(cube)) {
            SolveStage::UnsolvedBottomCross
        } else if !Face::SIDES.iter().all(|&side| is_corner_placed(cube, side)) {
            SolveStage::BottomCrossDone
        } else {
            SolveStage::BottomCornersDone
        }
    }
}

impl fmt::Display for SolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveStage::UnsolvedBottomCross => "unsolved bottom cross",
            SolveStage::BottomCrossDone => "bottom cross done",
            SolveStage::BottomCornersDone => "bottom corners done",
        };
        f.write_str(name)
    }
}
