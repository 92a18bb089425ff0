use std::fmt;

use crate::face::RotationCommand;

/// Commands waiting to be played back one at a time, for example by an
/// animation that needs several frames per quarter turn.
///
/// Consuming a command only advances a cursor, so the whole sequence can be
/// replayed with [`CommandQueue::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    commands: Vec<RotationCommand>,
    cursor: usize,
    cleared: bool,
    looping: bool,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: RotationCommand) {
        self.commands.push(command);
    }

    /// Whether a call to `next` would yield a command.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.commands.len()
    }

    #[must_use]
    pub fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Rewinds to the start and consumes the first command.
    pub fn reset(&mut self) -> Option<RotationCommand> {
        self.cursor = 0;
        self.next()
    }

    /// Drops every command. [`CommandQueue::has_been_cleared`] reports this
    /// until the next command is consumed.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
        self.cleared = true;
    }

    #[must_use]
    pub fn has_been_cleared(&self) -> bool {
        self.cleared
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn commands(&self) -> &[RotationCommand] {
        &self.commands
    }

    #[must_use]
    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Like `next`, but when looping is enabled it wraps around to the first
    /// command instead of running dry.
    pub fn next_looping(&mut self) -> Option<RotationCommand> {
        if self.looping && !self.has_next() {
            return self.reset();
        }
        self.next()
    }
}

impl Iterator for CommandQueue {
    type Item = RotationCommand;

    fn next(&mut self) -> Option<Self::Item> {
        let command = *self.commands.get(self.cursor)?;
        self.cursor += 1;
        self.cleared = false;
        Some(command)
    }
}

impl Extend<RotationCommand> for CommandQueue {
    fn extend<T: IntoIterator<Item = RotationCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl FromIterator<RotationCommand> for CommandQueue {
    fn from_iter<T: IntoIterator<Item = RotationCommand>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl From<Vec<RotationCommand>> for CommandQueue {
    fn from(commands: Vec<RotationCommand>) -> Self {
        Self {
            commands,
            ..Self::default()
        }
    }
}

impl fmt::Display for CommandQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            write!(f, "{command} -> ")?;
        }
        write!(f, "END")
    }
}
