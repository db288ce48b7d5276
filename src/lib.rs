//! # pairs-engine
//!
//! A memory-matching ("pairs") card game session engine.
//!
//! A grid of face-down tokens is revealed two at a time; matching pairs
//! leave play, mismatches flip back, and the game ends when every pair is
//! found. This crate is the engine only - allocation, selection tracking,
//! win detection, and save/load. Rendering, animation, input, and audio
//! live on the far side of a narrow command/event boundary.
//!
//! ## Design Principles
//!
//! 1. **Engine renders nothing**: state transitions emit `RenderCommand`s
//!    into a `PresentationSink`; the adapter decides how and when they
//!    become visible.
//!
//! 2. **Explicit ownership**: the caller holds one `Session` per game.
//!    No singleton, no interior mutability, no locking.
//!
//! 3. **Spurious input is benign**: invalid-state calls are silent no-ops.
//!    Only allocation and load failures surface as errors.
//!
//! 4. **Deterministic by seed**: allocation randomness is injected via
//!    `GameRng`, so tests pin boards exactly.
//!
//! ## Modules
//!
//! - `core`: tokens, RNG, configuration
//! - `board`: geometry and pair allocation
//! - `session`: the state machine (Idle / InProgress / Complete)
//! - `adapter`: the presentation boundary (commands out, events in)
//! - `persist`: the flat record codec and the save slot
//!
//! ## Example
//!
//! ```
//! use pairs_engine::{CommandLog, GameRng, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::new(32), GameRng::new(42));
//! let mut log = CommandLog::new();
//!
//! session.start_game(4, &mut log)?;
//! assert_eq!(session.pairs_remaining(), 8);
//!
//! session.select_token(0, &mut log);
//! session.select_token(1, &mut log);
//! // A match faded both tokens out; a mismatch flipped both back.
//! # Ok::<(), pairs_engine::AllocError>(())
//! ```

pub mod adapter;
pub mod board;
pub mod core;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{FaceValue, GameRng, SessionConfig, Token};

pub use crate::board::{allocate, cell_count, AllocError};

pub use crate::session::{Session, SessionPhase};

pub use crate::adapter::{CommandLog, NullSink, PresentationSink, RenderCommand, SessionEvent};

pub use crate::persist::{
    MemoryStore, PersistError, SaveSlot, SessionRecord, SlotStore, SAVE_SLOT_KEY,
};
