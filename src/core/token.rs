//! Tokens - the per-cell state of the matching board.
//!
//! A `Token` is one grid cell's playing piece: a hidden face value plus the
//! two flags the session mutates turn by turn (`revealed`, `matched`).
//! Tokens carry no presentation state; sprites, rotation, and fade-out all
//! live on the adapter side of the boundary.

use serde::{Deserialize, Serialize};

/// Identifies which face a token bears.
///
/// Two tokens match when their face values are equal. The engine never
/// interprets the value - presentation maps it to a sprite or glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceValue(pub u32);

impl FaceValue {
    /// Create a new face value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// One cell of the matching board.
///
/// ## Invariants
///
/// - `index` is assigned at creation and never changes.
/// - `face` is `None` only transiently, before allocation assigns it.
/// - A token becomes `matched` only while `revealed`; once matched it is
///   permanently excluded from selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Stable position within the grid (0-based, row-major).
    pub index: usize,

    /// The face this token bears. `None` = not yet allocated.
    pub face: Option<FaceValue>,

    /// Is the face currently showing?
    pub revealed: bool,

    /// Has this token been resolved as part of a found pair?
    pub matched: bool,
}

impl Token {
    /// Create a face-down token with no face assigned yet.
    #[must_use]
    pub fn unassigned(index: usize) -> Self {
        Self {
            index,
            face: None,
            revealed: false,
            matched: false,
        }
    }

    /// Create a face-down, unmatched token bearing the given face.
    #[must_use]
    pub fn with_face(index: usize, face: FaceValue) -> Self {
        Self {
            index,
            face: Some(face),
            revealed: false,
            matched: false,
        }
    }

    /// Check whether allocation has assigned this token a face.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.face.is_some()
    }

    /// Check whether this token can enter the pending selection.
    ///
    /// Matched tokens are out of play, revealed tokens are already showing,
    /// and unassigned tokens are not part of a dealt board.
    #[must_use]
    pub fn selectable(&self) -> bool {
        !self.matched && !self.revealed && self.is_assigned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_value_new() {
        let face = FaceValue::new(7);
        assert_eq!(face.raw(), 7);
        assert_eq!(face, FaceValue(7));
        assert_eq!(face.to_string(), "Face(7)");
    }

    #[test]
    fn test_token_unassigned() {
        let token = Token::unassigned(3);

        assert_eq!(token.index, 3);
        assert!(token.face.is_none());
        assert!(!token.is_assigned());
        assert!(!token.selectable()); // No face yet
    }

    #[test]
    fn test_token_with_face() {
        let token = Token::with_face(0, FaceValue::new(2));

        assert_eq!(token.face, Some(FaceValue::new(2)));
        assert!(!token.revealed);
        assert!(!token.matched);
        assert!(token.selectable());
    }

    #[test]
    fn test_token_selectable_excludes_revealed_and_matched() {
        let mut token = Token::with_face(0, FaceValue::new(0));

        token.revealed = true;
        assert!(!token.selectable());

        token.matched = true;
        token.revealed = false;
        assert!(!token.selectable());
    }

    #[test]
    fn test_token_serialization() {
        let mut token = Token::with_face(5, FaceValue::new(1));
        token.revealed = true;

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
