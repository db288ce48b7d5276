//! The session record: a flat snapshot of a playthrough.
//!
//! The record is the on-disk shape of a session: elapsed time, grid size,
//! and three parallel arrays of per-token data, all of length
//! `cell_count(grid_size)`. Faces persist as `i64` with `-1` standing in
//! for an unassigned token.
//!
//! A pending selection is never captured. Saves happen between turns in
//! the reference flow, and if a caller snapshots mid-turn anyway the
//! `revealed` flags are the ground truth; the restored session simply has
//! no selection in flight.

use serde::{Deserialize, Serialize};

use super::PersistError;
use crate::board;
use crate::core::{FaceValue, GameRng, SessionConfig, Token};
use crate::session::Session;

/// Face sentinel for a token with no assigned face.
const UNASSIGNED_FACE: i64 = -1;

/// Flat serialized form of a `Session`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Accumulated play time in seconds.
    pub elapsed_time: f32,

    /// Board dimension.
    pub grid_size: usize,

    /// Per-token face values; `-1` = unassigned.
    pub face_values: Vec<i64>,

    /// Per-token matched flags.
    pub matched: Vec<bool>,

    /// Per-token revealed flags.
    pub revealed: Vec<bool>,
}

impl SessionRecord {
    /// Snapshot a session's persistable state.
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        let tokens = session.tokens();
        Self {
            elapsed_time: session.elapsed(),
            grid_size: session.grid_size(),
            face_values: tokens
                .iter()
                .map(|t| t.face.map_or(UNASSIGNED_FACE, |f| i64::from(f.raw())))
                .collect(),
            matched: tokens.iter().map(|t| t.matched).collect(),
            revealed: tokens.iter().map(|t| t.revealed).collect(),
        }
    }

    /// Validate this record against a configuration and rebuild a live
    /// session from it.
    ///
    /// The session comes back `InProgress` with an empty pending selection;
    /// `pairs_remaining` is recomputed from the unmatched token count.
    ///
    /// # Errors
    ///
    /// `PersistError::CorruptRecord` if the grid size is invalid, any array
    /// length disagrees with the grid size, the unmatched token count is
    /// odd, or a face value is out of range. A face of `-1` is tolerated
    /// only on a matched token, which never re-enters matching.
    pub fn restore(&self, config: SessionConfig, rng: GameRng) -> Result<Session, PersistError> {
        if self.grid_size < 2 {
            return Err(PersistError::CorruptRecord);
        }

        let cells = board::cell_count(self.grid_size);
        if self.face_values.len() != cells
            || self.matched.len() != cells
            || self.revealed.len() != cells
        {
            return Err(PersistError::CorruptRecord);
        }

        let unmatched = self.matched.iter().filter(|&&m| !m).count();
        if unmatched % 2 != 0 {
            return Err(PersistError::CorruptRecord);
        }

        let mut tokens = Vec::with_capacity(cells);
        for index in 0..cells {
            let raw = self.face_values[index];
            let matched = self.matched[index];

            let face = match raw {
                UNASSIGNED_FACE if matched => None,
                f if f >= 0 && (f as usize) < config.face_count => {
                    Some(FaceValue::new(f as u32))
                }
                _ => return Err(PersistError::CorruptRecord),
            };

            tokens.push(Token {
                index,
                face,
                revealed: self.revealed[index],
                matched,
            });
        }

        Ok(Session::from_restored(
            config,
            rng,
            self.grid_size,
            tokens,
            self.elapsed_time,
        ))
    }
}
