//! TallyGrid Core
//!
//! Platform-agnostic scorekeeping logic for the TallyGrid least-count tracker.
//! This crate provides the roster rules, edit-lock state machine, and snapshot
//! codec without UI or platform-specific dependencies.
#![forbid(unsafe_code)]

pub mod lock;
pub mod roster;
pub mod snapshot;

// Re-export commonly used types
pub use lock::{EditLock, LockPhase};
pub use roster::{Player, Roster, ScoreInputError};
pub use snapshot::{
    MemoryStore, STORAGE_KEY, SnapshotError, SnapshotStore, StoreError, load_roster, save_roster,
};
