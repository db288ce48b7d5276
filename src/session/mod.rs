//! The game session: state machine, win detection, event dispatch.

pub mod machine;

pub use machine::{Session, SessionPhase};
