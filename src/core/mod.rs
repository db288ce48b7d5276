//! Core engine types: tokens, RNG, configuration.
//!
//! This module contains the fundamental building blocks shared by the
//! allocator, the session state machine, and the persistence codec.

pub mod config;
pub mod rng;
pub mod token;

pub use config::SessionConfig;
pub use rng::GameRng;
pub use token::{FaceValue, Token};
