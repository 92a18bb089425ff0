//! The vocabulary of moves: which face is turned and in which sense.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, iter, str::FromStr};
use thiserror::Error;

/// One of the six outward-facing sides of the cube.
///
/// The discriminants index every per-face table in this crate, so they must
/// not be reordered without also reordering those tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// The sense of a quarter turn, as seen by a viewer looking straight at the
/// turned face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// World axis a face turns about. X points RIGHT, Y points UP and Z points
/// toward the FRONT.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// "Turn this face this way, one quarter turn."
///
/// Serialized in move notation (`R`, `R'`) so configuration files can name
/// commands directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RotationCommand {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceError {
    #[error("Face 0 means \"no face\" and cannot be turned or inspected")]
    NoFace,
    #[error("Face index out of range, expected a value between 1 and 6 but got {0}")]
    OutOfRange(u8),
    #[error("Unknown face {0:?}, expected one of F, B, L, R, U, D")]
    UnknownName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("Invalid face in move {token:?}: {source}")]
    InvalidFace {
        token: String,
        #[source]
        source: FaceError,
    },
    #[error("{0:?} is a half turn and cannot be expressed as a single rotation command")]
    HalfTurn(String),
}

impl Face {
    pub const ALL: [Self; 6] = {
        let v = [
            Face::Front,
            Face::Back,
            Face::Left,
            Face::Right,
            Face::Up,
            Face::Down,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The four faces around the UP/DOWN axis, each one to the right of the
    /// previous when the cube is seen upright.
    pub const SIDES: [Self; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Outward unit normal in world coordinates.
    #[must_use]
    pub const fn normal(self) -> [i8; 3] {
        match self {
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Left => [-1, 0, 0],
            Face::Right => [1, 0, 0],
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
        }
    }

    /// Position of a side face in [`Face::SIDES`], `None` for UP and DOWN.
    #[must_use]
    pub const fn side_index(self) -> Option<usize> {
        match self {
            Face::Front => Some(0),
            Face::Right => Some(1),
            Face::Back => Some(2),
            Face::Left => Some(3),
            Face::Up | Face::Down => None,
        }
    }

    const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }
}

/// Raw face numbers as used by callers that still speak the numeric
/// encoding, where 0 stands for "no face".
impl TryFrom<u8> for Face {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Err(FaceError::NoFace),
            1..=6 => Ok(Face::ALL[usize::from(value - 1)]),
            _ => Err(FaceError::OutOfRange(value)),
        }
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        // Six faces always fit
        #[allow(clippy::cast_possible_truncation)]
        let index = face.index() as u8;
        index + 1
    }
}

impl FromStr for Face {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Face::Front),
            "B" => Ok(Face::Back),
            "L" => Ok(Face::Left),
            "R" => Ok(Face::Right),
            "U" => Ok(Face::Up),
            "D" => Ok(Face::Down),
            _ => Err(FaceError::UnknownName(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Direction {
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl RotationCommand {
    /// Every face in both directions.
    pub const QUARTER_TURNS: [Self; 12] = {
        let mut v = [Self::clockwise(Face::Front); 12];
        let mut i = 0;
        while i < Face::ALL.len() {
            v[2 * i] = Self::clockwise(Face::ALL[i]);
            v[2 * i + 1] = Self::counter_clockwise(Face::ALL[i]);
            i += 1;
        }
        v
    };

    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    #[must_use]
    pub const fn counter_clockwise(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// The command that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }

    /// The world axis of the turn together with the sign of its right-handed
    /// angle. The animation layer multiplies the sign into the angle it
    /// interpolates.
    #[must_use]
    pub const fn axis_rotation(self) -> (Axis, i8) {
        let clockwise_sign = match self.face {
            Face::Down | Face::Left | Face::Back => 1,
            Face::Up | Face::Right | Face::Front => -1,
        };
        let sign = match self.direction {
            Direction::Clockwise => clockwise_sign,
            Direction::CounterClockwise => -clockwise_sign,
        };
        (self.face.axis(), sign)
    }
}

/// Parses a single notation token into a command and how many times it is
/// applied. `R` and `R'` are quarter turns, `R2` is two clockwise quarter
/// turns.
fn parse_token(token: &str) -> Result<(RotationCommand, usize), ParseMoveError> {
    let (face, direction, repeat) = if let Some(rest) = token.strip_suffix('\'') {
        (rest, Direction::CounterClockwise, 1)
    } else if let Some(rest) = token.strip_suffix('2') {
        (rest, Direction::Clockwise, 2)
    } else {
        (token, Direction::Clockwise, 1)
    };

    let face = face
        .parse::<Face>()
        .map_err(|source| ParseMoveError::InvalidFace {
            token: token.to_owned(),
            source,
        })?;
    Ok((RotationCommand::new(face, direction), repeat))
}

impl FromStr for RotationCommand {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)? {
            (command, 1) => Ok(command),
            _ => Err(ParseMoveError::HalfTurn(s.to_owned())),
        }
    }
}

impl TryFrom<String> for RotationCommand {
    type Error = ParseMoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RotationCommand> for String {
    fn from(command: RotationCommand) -> Self {
        command.to_string()
    }
}

impl fmt::Display for RotationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// Parses a whitespace separated move sequence such as `"R U2 R' U'"`.
///
/// # Errors
///
/// If any token is not valid notation. Nothing is returned for the tokens
/// that did parse.
pub fn parse_sequence(notation: &str) -> Result<Vec<RotationCommand>, ParseMoveError> {
    let mut commands = Vec::new();
    for token in notation.split_whitespace() {
        let (command, repeat) = parse_token(token)?;
        commands.extend(iter::repeat_n(command, repeat));
    }
    Ok(commands)
}

#[must_use]
pub fn format_sequence(commands: &[RotationCommand]) -> String {
    commands.iter().join(" ")
}

/// The sequence that undoes `commands`.
#[must_use]
pub fn invert_sequence(commands: &[RotationCommand]) -> Vec<RotationCommand> {
    commands
        .iter()
        .rev()
        .map(|command| command.inverse())
        .collect()
}
