use std::fmt;

use cube_core::{RotationCommand, format_sequence};

use crate::stage::SolveStage;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    Bottom,
    Middle,
    Top,
}

/// The moves a solve applied and how far it got.
///
/// Only the bottom layer is attempted. The middle and top layers are left
/// as the bottom layer algorithms leave them, which is reported through
/// [`LayerSolution::unsolved_layers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSolution {
    moves: Vec<RotationCommand>,
    stage: SolveStage,
}

impl LayerSolution {
    pub(crate) fn new(moves: Vec<RotationCommand>, stage: SolveStage) -> Self {
        Self { moves, stage }
    }

    /// Every applied quarter turn in order, ready to be replayed.
    #[must_use]
    pub fn moves(&self) -> &[RotationCommand] {
        &self.moves
    }

    #[must_use]
    pub fn into_moves(self) -> Vec<RotationCommand> {
        self.moves
    }

    #[must_use]
    pub fn stage(&self) -> SolveStage {
        self.stage
    }

    #[must_use]
    pub fn solved_layers(&self) -> &'static [Layer] {
        match self.stage {
            SolveStage::BottomCornersDone => &[Layer::Bottom],
            SolveStage::UnsolvedBottomCross | SolveStage::BottomCrossDone => &[],
        }
    }

    /// Layers that were not attempted.
    #[must_use]
    pub fn unsolved_layers(&self) -> &'static [Layer] {
        match self.stage {
            SolveStage::BottomCornersDone => &[Layer::Middle, Layer::Top],
            SolveStage::UnsolvedBottomCross | SolveStage::BottomCrossDone => {
                &[Layer::Bottom, Layer::Middle, Layer::Top]
            }
        }
    }
}

impl fmt::Display for LayerSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", format_sequence(&self.moves), self.stage)
    }
}
