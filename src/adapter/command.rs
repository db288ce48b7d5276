//! Render commands: engine -> adapter.
//!
//! The engine never draws anything. It describes what just became true -
//! "this token is showing face 3", "these two faded out", "the game is
//! won" - and the adapter turns that into sprites, animation, and audio on
//! whatever schedule suits it. State transitions inside the engine are
//! immediate and synchronous; any display delay before a flip-back or
//! lock-in becomes visible is the adapter's business.

use serde::{Deserialize, Serialize};

use crate::core::FaceValue;

/// A presentation command emitted by the session engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Show a token's face.
    Face {
        /// Token index.
        index: usize,
        /// The face to show.
        face: FaceValue,
    },

    /// Show a token face-down.
    Back {
        /// Token index.
        index: usize,
    },

    /// Fade a permanently matched token out of play.
    FadeOut {
        /// Token index.
        index: usize,
    },

    /// Flip a mismatched token back face-down.
    Reset {
        /// Token index.
        index: usize,
    },

    /// The last pair was found.
    Win,
}

/// Receiver for render commands - the engine/presentation seam.
///
/// The session calls into the sink synchronously while it mutates state.
/// Implementations should be cheap; defer real work (animation, I/O) to
/// the adapter's own scheduling.
pub trait PresentationSink {
    /// Handle one command.
    fn render(&mut self, command: RenderCommand);
}

/// Sink that records every command in order.
///
/// Drives tests and headless front-ends: run an operation, then drain the
/// log and act on it.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    commands: Vec<RenderCommand>,
}

impl CommandLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in emission order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Take all recorded commands, leaving the log empty.
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Count occurrences of an exact command.
    #[must_use]
    pub fn count(&self, command: &RenderCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }
}

impl PresentationSink for CommandLog {
    fn render(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }
}

/// Sink that discards every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn render(&mut self, _command: RenderCommand) {}
}
