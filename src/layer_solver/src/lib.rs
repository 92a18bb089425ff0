//! Partial layer by layer solver. Restores the bottom cross and the bottom
//! corners of a [`cube_core::CubeState`]; the middle and top layers are not
//! attempted.

#![warn(clippy::pedantic)]

pub mod config;
pub mod solution;
pub mod solver;
pub mod stage;

pub use config::SolverConfig;
pub use solution::{Layer, LayerSolution};
pub use solver::{LayerSolver, Solve, SolverError};
pub use stage::{BOTTOM_CROSS, EdgePiece, SolveStage};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
