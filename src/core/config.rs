//! Session configuration.
//!
//! The engine hardcodes nothing about the face pool - the presentation
//! layer declares how many distinct faces it can draw, and allocation
//! selects pairs from that range.

use serde::{Deserialize, Serialize};

/// Configuration for a matching-game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of distinct faces available, i.e. face values are drawn from
    /// `0..face_count`. Must cover at least `cell_count / 2` pairs for any
    /// grid size the caller intends to start.
    pub face_count: usize,
}

impl SessionConfig {
    /// Create a configuration with the given face pool size.
    #[must_use]
    pub const fn new(face_count: usize) -> Self {
        Self { face_count }
    }
}
