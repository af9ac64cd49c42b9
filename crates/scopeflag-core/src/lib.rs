//! scopeflag core - in-process, typed, hierarchically scoped flag registry
//!
//! This crate provides the foundational registry for attaching named,
//! strongly-typed, independently-parseable attributes to scoped contexts:
//! - Static [`FlagKind`] descriptors with pure parse/merge/render functions
//! - Type-erased [`FlagInstance`] values with checked re-typing on read
//! - [`FlagContainer`] chains with explicit local-vs-inherited query semantics
//! - Synchronous add/remove/update notification with subscriber fan-out
//! - Deferred resolution of raw values whose kinds are registered later
//! - Snapshot import/export at the serialization boundary
//!
//! The registry has no internal concurrency: all operations are synchronous
//! and assume a single logical owner thread.

pub mod builtins;
pub mod container;
pub mod errors;
pub mod events;
pub mod global;
pub mod instance;
pub mod kind;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use container::FlagContainer;
pub use errors::{FlagError, Result};
pub use events::{FlagEvent, FlagUpdateType, UpdateHandler};
pub use global::GlobalFlagContainer;
pub use instance::FlagInstance;
pub use kind::{ErasedKind, FlagKind, FlagValue, KindId};
pub use scopeflag_core_types::FlagName;
pub use snapshot::{import_snapshot, FlagSnapshot};
