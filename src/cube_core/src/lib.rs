//! Combinatorial model of a 3x3x3 Rubik's cube: cubelet occupancy, sticker
//! labels and the quarter turns that permute them.

#![warn(clippy::pedantic)]

pub mod adjacency;
pub mod config;
pub mod face;
pub mod permutation;
pub mod queue;
pub mod scramble;
pub mod state;

pub use adjacency::{SlotId, Sticker};
pub use config::{ConfigError, CubeConfig, ScrambleConfig};
pub use face::{
    Axis, Direction, Face, FaceError, ParseMoveError, RotationCommand, format_sequence,
    invert_sequence, parse_sequence,
};
pub use queue::CommandQueue;
pub use scramble::Scrambler;
pub use state::CubeState;
