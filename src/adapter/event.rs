//! Session events: adapter -> engine.
//!
//! User intent arrives as data. The adapter translates clicks, taps, or
//! key presses into `SessionEvent`s and feeds them to
//! `Session::handle_event`; the engine absorbs anything that arrives in an
//! invalid state, so the adapter never has to pre-validate.

use serde::{Deserialize, Serialize};

/// A user-intent event for the session engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The user selected a token.
    Selected {
        /// Token index.
        index: usize,
    },

    /// The user asked to start a new game on a `grid_size` x `grid_size`
    /// board.
    RequestStart {
        /// Board dimension (>= 2; smaller values are absorbed as no-ops).
        grid_size: usize,
    },

    /// The user abandoned the game in progress.
    RequestGiveUp,
}
