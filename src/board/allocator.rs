//! Pair allocation: assigning face values to board cells.
//!
//! Allocation runs in two passes:
//!
//! 1. **Face selection**: pick `cell_count / 2` distinct faces from the
//!    pool, re-probing linearly on a duplicate draw.
//! 2. **Placement**: drop each chosen face onto 2 random cells, re-probing
//!    linearly past cells that are already taken.
//!
//! Both loops terminate because each probe ring is finite and shrinks by
//! one slot per assignment. The RNG is injected, so a pinned seed yields a
//! pinned board.

use crate::core::{FaceValue, GameRng};

/// Allocation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The face pool cannot cover the number of pairs the board needs.
    InsufficientFaces {
        /// Pairs the board requires.
        needed: usize,
        /// Distinct faces available.
        available: usize,
    },
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocError::InsufficientFaces { needed, available } => write!(
                f,
                "insufficient faces: board needs {needed} distinct pairs, only {available} faces available"
            ),
        }
    }
}

impl std::error::Error for AllocError {}

/// Number of cells on a `grid_size` x `grid_size` board.
///
/// Odd grids drop one cell so the cell count stays even and every token
/// has a partner.
///
/// ```
/// use pairs_engine::board::cell_count;
///
/// assert_eq!(cell_count(2), 4);
/// assert_eq!(cell_count(3), 8); // 9 minus the odd cell
/// assert_eq!(cell_count(4), 16);
/// ```
#[must_use]
pub const fn cell_count(grid_size: usize) -> usize {
    grid_size * grid_size - grid_size % 2
}

/// Allocate paired face values across `cell_count` cells.
///
/// Returns one face per cell index; every face in the result appears on
/// exactly 2 cells. Pure apart from the injected RNG.
///
/// # Errors
///
/// `AllocError::InsufficientFaces` if `face_count < cell_count / 2`.
pub fn allocate(
    cell_count: usize,
    face_count: usize,
    rng: &mut GameRng,
) -> Result<Vec<FaceValue>, AllocError> {
    debug_assert!(cell_count % 2 == 0, "cell count must be even");

    let pairs = cell_count / 2;
    if face_count < pairs {
        return Err(AllocError::InsufficientFaces {
            needed: pairs,
            available: face_count,
        });
    }

    // Pass 1: draw distinct faces, stepping past duplicates.
    let mut drawn = vec![false; face_count];
    let mut selected = Vec::with_capacity(pairs);
    for _ in 0..pairs {
        let mut face = rng.gen_range(0..face_count);
        while drawn[face] {
            face = (face + 1) % face_count;
        }
        drawn[face] = true;
        selected.push(FaceValue::new(face as u32));
    }

    // Pass 2: place each face on 2 random unassigned cells.
    let mut cells: Vec<Option<FaceValue>> = vec![None; cell_count];
    for &face in &selected {
        for _ in 0..2 {
            let mut cell = rng.gen_range(0..cell_count);
            while cells[cell].is_some() {
                cell = (cell + 1) % cell_count;
            }
            cells[cell] = Some(face);
        }
    }

    // Every cell was assigned: 2 * pairs == cell_count.
    Ok(cells.into_iter().flatten().collect())
}
