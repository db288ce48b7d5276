//! Board allocator integration tests.
//!
//! The allocator's contract: every assigned face appears on exactly 2
//! cells, faces come from the configured pool, and the whole thing is a
//! pure function of its inputs plus the injected RNG.

use std::collections::HashMap;

use pairs_engine::{allocate, cell_count, AllocError, FaceValue, GameRng};
use proptest::prelude::*;

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_even_grids_use_every_cell() {
    assert_eq!(cell_count(2), 4);
    assert_eq!(cell_count(4), 16);
    assert_eq!(cell_count(6), 36);
}

#[test]
fn test_odd_grids_drop_one_cell() {
    // 3x3 plays with 8 cells, not 9 - the pair count stays whole.
    assert_eq!(cell_count(3), 8);
    assert_eq!(cell_count(5), 24);
}

// =============================================================================
// Contract
// =============================================================================

#[test]
fn test_insufficient_faces_is_fatal() {
    let mut rng = GameRng::new(42);

    let err = allocate(36, 17, &mut rng).unwrap_err();

    assert_eq!(
        err,
        AllocError::InsufficientFaces {
            needed: 18,
            available: 17,
        }
    );
}

#[test]
fn test_face_pool_boundary() {
    let mut rng = GameRng::new(42);

    // Exactly enough faces succeeds.
    assert!(allocate(36, 18, &mut rng).is_ok());
}

#[test]
fn test_same_seed_same_board() {
    let board1 = allocate(24, 30, &mut GameRng::new(1234)).unwrap();
    let board2 = allocate(24, 30, &mut GameRng::new(1234)).unwrap();

    assert_eq!(board1, board2);
}

// =============================================================================
// Properties
// =============================================================================

fn histogram(faces: &[FaceValue]) -> HashMap<FaceValue, usize> {
    let mut counts = HashMap::new();
    for &face in faces {
        *counts.entry(face).or_insert(0) += 1;
    }
    counts
}

proptest! {
    /// Every assigned face appears on exactly 2 cells and the assignment
    /// covers the whole board, for any grid size and any seed.
    #[test]
    fn prop_pairing_invariant(grid_size in 2usize..=8, seed in any::<u64>()) {
        let cells = cell_count(grid_size);
        let mut rng = GameRng::new(seed);

        let faces = allocate(cells, cells, &mut rng).unwrap();

        prop_assert_eq!(faces.len(), cells);
        for (&face, &count) in &histogram(&faces) {
            prop_assert_eq!(count, 2, "{} appears {} times", face, count);
        }
    }

    /// Faces always come from the configured pool.
    #[test]
    fn prop_faces_within_pool(grid_size in 2usize..=8, extra in 0usize..50, seed in any::<u64>()) {
        let cells = cell_count(grid_size);
        let face_count = cells / 2 + extra;
        let mut rng = GameRng::new(seed);

        let faces = allocate(cells, face_count, &mut rng).unwrap();

        for face in faces {
            prop_assert!((face.raw() as usize) < face_count);
        }
    }

    /// With a pool of exactly `pairs` faces, every face gets used.
    #[test]
    fn prop_exact_pool_exhausted(grid_size in 2usize..=8, seed in any::<u64>()) {
        let cells = cell_count(grid_size);
        let mut rng = GameRng::new(seed);

        let faces = allocate(cells, cells / 2, &mut rng).unwrap();

        prop_assert_eq!(histogram(&faces).len(), cells / 2);
    }
}
