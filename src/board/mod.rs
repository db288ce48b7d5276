//! Board geometry and pair allocation.

pub mod allocator;

pub use allocator::{allocate, cell_count, AllocError};
