//! Session persistence: the flat record codec and the save slot.
//!
//! Load failures are clean: a corrupt or missing record is reported and
//! nothing is restored. The caller treats both the same way it treats
//! "no saved game" - a no-op, not a crash.

pub mod record;
pub mod store;

pub use record::SessionRecord;
pub use store::{MemoryStore, SaveSlot, SlotStore, SAVE_SLOT_KEY};

/// Persistence failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistError {
    /// Nothing is saved in the slot.
    NoSavedGame,
    /// The saved data failed structural or range validation.
    CorruptRecord,
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::NoSavedGame => write!(f, "no saved game"),
            PersistError::CorruptRecord => write!(f, "saved game record is corrupt"),
        }
    }
}

impl std::error::Error for PersistError {}
