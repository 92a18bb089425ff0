use std::time::Instant;

use cube_core::{
    CubeState, Face, RotationCommand, Sticker,
    adjacency::{EDGE_POSITIONS, corner_stickers, edge_partner},
    format_sequence,
};
use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

use crate::{
    config::SolverConfig,
    solution::LayerSolution,
    stage::{SolveStage, is_corner_placed},
    start, success, working,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Step limit exceeded at stage \"{stage}\" after {moves} moves")]
    StepLimitExceeded { stage: SolveStage, moves: usize },
    #[error("The piece under {0:?} does not match any piece of a real cube")]
    InconsistentPiece(Sticker),
}

/// Faces searched for misplaced bottom edges, in order.
const EDGE_SCAN: [Face; 6] = [
    Face::Up,
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Left,
    Face::Down,
];

/// `R U R' U'` brings any corner twist back after six repetitions, so a
/// corner above its slot is inserted in at most five.
const MAX_TRIGGER_REPETITIONS: usize = 5;

const fn cw(face: Face) -> RotationCommand {
    RotationCommand::clockwise(face)
}

const fn ccw(face: Face) -> RotationCommand {
    RotationCommand::counter_clockwise(face)
}

fn right_of(side: usize) -> Face {
    Face::SIDES[(side + 1) % 4]
}

/// Clockwise UP turns that carry a top layer piece from above side `from`
/// to above side `to`. Each turn moves a piece one side to the left.
fn up_turns(from: usize, to: usize) -> usize {
    (from + 4 - to) % 4
}

fn align_up(turns: usize) -> Vec<RotationCommand> {
    match turns % 4 {
        0 => vec![],
        3 => vec![ccw(Face::Up)],
        n => vec![cw(Face::Up); n],
    }
}

/// The side `x` of two neighboring sides `{x, right_of(x)}`.
fn left_side_of_pair(a: Face, b: Face) -> Option<usize> {
    let (a, b) = (a.side_index()?, b.side_index()?);
    if (a + 1) % 4 == b {
        Some(a)
    } else if (b + 1) % 4 == a {
        Some(b)
    } else {
        None
    }
}

/// Moves for one bottom cross step, `None` once the cross is complete.
fn cross_step(cube: &CubeState) -> Result<Option<Vec<RotationCommand>>, SolverError> {
    for face in EDGE_SCAN {
        for local in EDGE_POSITIONS {
            if cube.current_face(face, local) != Face::Down {
                continue;
            }
            let sticker = Sticker::new(face, local);
            let partner =
                edge_partner(face, local).ok_or(SolverError::InconsistentPiece(sticker))?;
            if face == Face::Down && cube[partner] == partner.face {
                continue;
            }
            return edge_moves(sticker, partner, cube[partner]).map(Some);
        }
    }
    Ok(None)
}

/// Moves that insert the bottom edge showing DOWN at `sticker`, or lift it
/// to where the next step can insert it. `target` is the color of the
/// partner sticker and so the side the edge belongs under.
fn edge_moves(
    sticker: Sticker,
    partner: Sticker,
    target: Face,
) -> Result<Vec<RotationCommand>, SolverError> {
    let inconsistent = || SolverError::InconsistentPiece(sticker);
    let target_index = target.side_index().ok_or_else(inconsistent)?;

    let moves = match (sticker.face, sticker.local) {
        (Face::Up, _) => {
            let from = partner.face.side_index().ok_or_else(inconsistent)?;
            let mut moves = align_up(up_turns(from, target_index));
            moves.extend([cw(target), cw(target)]);
            moves
        }
        (Face::Down, _) => vec![cw(partner.face); 2],
        (side, 7) => vec![cw(side); 2],
        (side, 1) => {
            // Bring the piece in front of the side left of its target, then
            // swing it down into place from there
            let from = side.side_index().ok_or_else(inconsistent)?;
            let left_index = (target_index + 3) % 4;
            let left = Face::SIDES[left_index];
            let mut moves = align_up(up_turns(from, left_index));
            moves.extend([cw(left), ccw(target), ccw(left)]);
            moves
        }
        (_, 5) if target == partner.face => vec![ccw(target)],
        (_, 5) => vec![cw(partner.face), cw(Face::Up), ccw(partner.face)],
        (_, 3) if target == partner.face => vec![cw(target)],
        (_, 3) => vec![ccw(partner.face), cw(Face::Up), cw(partner.face)],
        _ => return Err(inconsistent()),
    };
    Ok(moves)
}

enum CornerStep {
    /// Turn UP with `setup`, then insert into the slot right of `slot_side`.
    Insert {
        setup: Vec<RotationCommand>,
        slot_side: usize,
    },
    /// Lift a wrong bottom corner into the top layer.
    Lift(Vec<RotationCommand>),
}

/// Top layer stickers where a bottom corner can show its DOWN color.
fn top_corner_stickers() -> impl Iterator<Item = Sticker> {
    [0, 2, 6, 8]
        .map(|local| Sticker::new(Face::Up, local))
        .into_iter()
        .chain(
            Face::SIDES
                .into_iter()
                .flat_map(|side| [Sticker::new(side, 0), Sticker::new(side, 2)]),
        )
}

/// The next bottom corner step, `None` once every bottom corner is solved.
fn corner_step(cube: &CubeState) -> Result<Option<CornerStep>, SolverError> {
    if let Some(sticker) = top_corner_stickers().find(|&sticker| cube[sticker] == Face::Down) {
        let inconsistent = || SolverError::InconsistentPiece(sticker);
        let stickers = corner_stickers(sticker.face, sticker.local).ok_or_else(inconsistent)?;

        let (a, b) = stickers
            .iter()
            .map(|&sticker| cube[sticker])
            .filter(|&color| color != Face::Down)
            .collect_tuple()
            .ok_or_else(inconsistent)?;
        let slot_side = left_side_of_pair(a, b).ok_or_else(inconsistent)?;

        let (p, q) = stickers
            .iter()
            .map(|sticker| sticker.face)
            .filter(|&face| face != Face::Up)
            .collect_tuple()
            .ok_or_else(inconsistent)?;
        let above = left_side_of_pair(p, q).ok_or_else(inconsistent)?;

        return Ok(Some(CornerStep::Insert {
            setup: align_up(up_turns(above, slot_side)),
            slot_side,
        }));
    }

    Ok(Face::SIDES
        .into_iter()
        .position(|side| !is_corner_placed(cube, side))
        .map(|side| {
            let right = right_of(side);
            CornerStep::Lift(vec![cw(right), cw(Face::Up), ccw(right)])
        }))
}

/// A working copy of the cube that remembers every move applied to it.
struct Recorder {
    cube: CubeState,
    moves: Vec<RotationCommand>,
}

impl Recorder {
    fn apply(&mut self, commands: &[RotationCommand]) {
        self.cube.rotate_all(commands);
        self.moves.extend_from_slice(commands);
    }
}

/// Layer by layer solver for the bottom layer: first the cross, then the
/// four corners.
///
/// Every step either inserts one piece without disturbing the pieces
/// already placed, or lifts a misplaced piece into the top layer from where
/// the next step inserts it.
#[derive(Debug, Clone, Default)]
pub struct LayerSolver {
    config: SolverConfig,
}

impl LayerSolver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the bottom layer of `cube` in place and returns the applied
    /// moves. The middle and top layers are not attempted.
    ///
    /// # Errors
    ///
    /// If the configured step limit is reached. `cube` is left untouched in
    /// that case.
    pub fn solve(&self, cube: &mut CubeState) -> Result<LayerSolution, SolverError> {
        info!(start!("Solving the bottom layer"));
        let start = Instant::now();

        let mut recorder = Recorder {
            cube: cube.clone(),
            moves: vec![],
        };
        let mut steps = 0;

        while let Some(commands) = cross_step(&recorder.cube)? {
            self.take_step(&mut steps, &recorder)?;
            debug!(
                working!("Cross step {}: {}"),
                steps,
                format_sequence(&commands)
            );
            recorder.apply(&commands);
        }
        debug!(
            working!("Bottom cross done after {} moves"),
            recorder.moves.len()
        );

        while let Some(step) = corner_step(&recorder.cube)? {
            self.take_step(&mut steps, &recorder)?;
            match step {
                CornerStep::Lift(commands) => {
                    debug!(
                        working!("Corner step {}: lifting with {}"),
                        steps,
                        format_sequence(&commands)
                    );
                    recorder.apply(&commands);
                }
                CornerStep::Insert { setup, slot_side } => {
                    debug!(
                        working!("Corner step {}: inserting right of {} after {}"),
                        steps,
                        Face::SIDES[slot_side],
                        format_sequence(&setup)
                    );
                    recorder.apply(&setup);
                    Self::insert_corner(&mut recorder, slot_side)?;
                }
            }
        }

        let stage = SolveStage::of(&recorder.cube);
        info!(
            success!("Bottom layer solved with {} moves in {:.3}s"),
            recorder.moves.len(),
            start.elapsed().as_secs_f64()
        );
        *cube = recorder.cube;
        Ok(LayerSolution::new(recorder.moves, stage))
    }

    fn take_step(&self, steps: &mut usize, recorder: &Recorder) -> Result<(), SolverError> {
        if *steps >= self.config.max_steps {
            return Err(SolverError::StepLimitExceeded {
                stage: SolveStage::of(&recorder.cube),
                moves: recorder.moves.len(),
            });
        }
        *steps += 1;
        Ok(())
    }

    /// Repeats `R U R' U'` on the side right of the slot until the corner
    /// sitting above it is solved.
    fn insert_corner(recorder: &mut Recorder, slot_side: usize) -> Result<(), SolverError> {
        let right = right_of(slot_side);
        let trigger = [cw(right), cw(Face::Up), ccw(right), ccw(Face::Up)];
        let slot = Face::SIDES[slot_side];

        for _ in 0..MAX_TRIGGER_REPETITIONS {
            if is_corner_placed(&recorder.cube, slot) {
                return Ok(());
            }
            recorder.apply(&trigger);
        }
        if is_corner_placed(&recorder.cube, slot) {
            Ok(())
        } else {
            Err(SolverError::InconsistentPiece(Sticker::new(slot, 8)))
        }
    }
}

/// Gives [`CubeState`] a `solve` operation using the default configuration.
pub trait Solve {
    /// # Errors
    ///
    /// See [`LayerSolver::solve`].
    fn solve(&mut self) -> Result<LayerSolution, SolverError>;
}

impl Solve for CubeState {
    fn solve(&mut self) -> Result<LayerSolution, SolverError> {
        LayerSolver::default().solve(self)
    }
}
