//! Bulk import/export of container state
//!
//! A container's local map can be exported as an immutable name→rendered-string
//! snapshot for serialization, and a snapshot can be imported back by routing
//! each pair through the global name index and the kind's parse function.
//! Names the index cannot resolve are buffered as unknowns and bound later
//! when their kind is registered. The persistence format of the snapshot
//! itself is entirely the caller's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::container::FlagContainer;
use crate::errors::FlagError;
use crate::global::GlobalFlagContainer;

/// Immutable name→rendered-value view of a container's local map
///
/// Backed by a `BTreeMap` so iteration and serialization order are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSnapshot {
    flags: BTreeMap<String, String>,
}

impl FlagSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.flags.insert(name.into(), raw.into());
    }

    /// Get the raw value stored under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.flags
            .iter()
            .map(|(name, raw)| (name.as_str(), raw.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the snapshot holds no entries
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<(String, String)> for FlagSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

impl FlagContainer {
    /// Export the local map as a name→rendered-string snapshot
    ///
    /// Inherited values are not included; export what a scope explicitly
    /// overrides, nothing more.
    pub fn export_local(&self) -> FlagSnapshot {
        self.flag_map()
            .values()
            .map(|instance| (instance.name().as_str().to_string(), instance.render()))
            .collect()
    }
}

/// Import a snapshot into a container
///
/// Each pair is resolved through the global name index: recognized names are
/// parsed and stored via `add_flag`; unrecognized names are buffered with
/// `add_unknown_flag` for deferred resolution. Parse failures do not abort
/// the import; they are collected and returned so the caller can report each
/// one. An empty vector means every recognized entry was imported.
pub fn import_snapshot(
    container: &FlagContainer,
    global: &GlobalFlagContainer,
    snapshot: &FlagSnapshot,
) -> Vec<FlagError> {
    let mut failures = Vec::new();
    for (name, raw) in snapshot.iter() {
        match global.kind_by_name(name) {
            Some(kind) => match kind.parse_erased(raw) {
                Ok(instance) => container.add_flag(instance),
                Err(err) => failures.push(err),
            },
            None => container.add_unknown_flag(name, raw),
        }
    }
    failures
}
