//! The save slot: one named record in a key-value store.
//!
//! Persistence is a single slot with overwrite semantics - at most one
//! saved game at a time, the newest save wins. The backing store is a
//! collaborator behind the `SlotStore` trait; `MemoryStore` ships as the
//! in-process implementation, and anything that can hold bytes under a
//! string key (a prefs file, a database row) can stand in for it.

use rustc_hash::FxHashMap;

use super::record::SessionRecord;
use super::PersistError;
use crate::core::{GameRng, SessionConfig};
use crate::session::Session;

/// Default key for the saved-game slot.
pub const SAVE_SLOT_KEY: &str = "saved_game";

/// Byte storage behind the save slot.
///
/// Reads and writes are synchronous and bounded; the engine never blocks
/// on anything slower than the implementation makes them.
pub trait SlotStore {
    /// Read the bytes under a key, if any.
    fn read(&self, key: &str) -> Option<Vec<u8>>;

    /// Write bytes under a key, replacing any previous value.
    fn write(&mut self, key: &str, bytes: Vec<u8>);

    /// Remove a key.
    fn remove(&mut self, key: &str);
}

/// In-memory `SlotStore`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, bytes: Vec<u8>) {
        self.entries.insert(key.to_string(), bytes);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The single saved-game slot.
#[derive(Clone, Debug)]
pub struct SaveSlot<S: SlotStore> {
    store: S,
    key: String,
}

impl<S: SlotStore> SaveSlot<S> {
    /// Create a slot over a store with the default key.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVE_SLOT_KEY)
    }

    /// Create a slot with a custom key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Is anything saved in this slot?
    #[must_use]
    pub fn has_save(&self) -> bool {
        self.store.read(&self.key).is_some()
    }

    /// Save a session, overwriting any previous save.
    ///
    /// # Errors
    ///
    /// `PersistError::CorruptRecord` if the record fails to encode, which
    /// indicates a bug rather than a runtime condition.
    pub fn save(&mut self, session: &Session) -> Result<(), PersistError> {
        let record = SessionRecord::capture(session);
        let bytes = bincode::serialize(&record).map_err(|_| PersistError::CorruptRecord)?;
        self.store.write(&self.key, bytes);
        Ok(())
    }

    /// Load the saved record without rebuilding a session.
    ///
    /// # Errors
    ///
    /// `PersistError::NoSavedGame` if the slot is empty;
    /// `PersistError::CorruptRecord` if the bytes fail to decode.
    pub fn load_record(&self) -> Result<SessionRecord, PersistError> {
        let bytes = self.store.read(&self.key).ok_or(PersistError::NoSavedGame)?;
        bincode::deserialize(&bytes).map_err(|_| PersistError::CorruptRecord)
    }

    /// Load and validate the saved game, rebuilding a live session.
    ///
    /// Failures never partially restore: on any error the caller's current
    /// state is untouched.
    ///
    /// # Errors
    ///
    /// `PersistError::NoSavedGame` if the slot is empty;
    /// `PersistError::CorruptRecord` if decoding or validation fails.
    pub fn load(&self, config: SessionConfig, rng: GameRng) -> Result<Session, PersistError> {
        self.load_record()?.restore(config, rng)
    }

    /// Delete any saved game.
    pub fn clear(&mut self) {
        self.store.remove(&self.key);
    }
}
