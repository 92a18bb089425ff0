use fastrand::Rng;
use log::info;

use crate::{
    config::ScrambleConfig,
    face::{RotationCommand, format_sequence},
    state::CubeState,
};

/// Draws random quarter-turn sequences.
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: Rng,
    length: usize,
}

impl Scrambler {
    /// A scrambler seeded from entropy.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            rng: Rng::new(),
            length,
        }
    }

    /// A scrambler that always produces the same scrambles for the same
    /// seed.
    #[must_use]
    pub fn with_seed(length: usize, seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            length,
        }
    }

    #[must_use]
    pub fn from_config(config: &ScrambleConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.length, seed),
            None => Self::new(config.length),
        }
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Draws `length` commands uniformly from every face in both directions.
    pub fn scramble(&mut self) -> Vec<RotationCommand> {
        let turns = RotationCommand::QUARTER_TURNS;
        let commands: Vec<_> = (0..self.length)
            .map(|_| turns[self.rng.usize(..turns.len())])
            .collect();
        info!("Scrambling with {}", format_sequence(&commands));
        commands
    }
}

impl CubeState {
    /// A solved cube with a fresh scramble applied, along with the scramble.
    #[must_use]
    pub fn scrambled(scrambler: &mut Scrambler) -> (Self, Vec<RotationCommand>) {
        let commands = scrambler.scramble();
        (Self::from_commands(&commands), commands)
    }
}
