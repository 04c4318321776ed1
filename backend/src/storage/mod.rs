//! Persistence of the profile and task list.
//!
//! The browser's local storage is modelled as a plain string key-value store
//! ([`KeyValueStore`]); [`Persistence`] layers the two application records on
//! top of it.

pub mod memory;
pub mod persistence;
pub mod traits;

pub use memory::MemoryStore;
pub use persistence::{Persistence, Snapshot, PROFILE_KEY, TASKS_KEY};
pub use traits::{KeyValueStore, StorageError};
