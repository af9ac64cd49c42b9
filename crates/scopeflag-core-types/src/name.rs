//! Canonical flag names
//!
//! Every flag kind carries a compact PascalCase label (e.g. `WorldPermissionFlag`).
//! The canonical name is derived from that label exactly once: a trailing `Flag`
//! suffix is stripped, and the remainder is lower-cased with a `-` inserted
//! before every internal uppercase boundary (`WorldPermissionFlag` →
//! `world-permission`). The canonical name is the only string form used as a
//! serialization key or for string lookup, and lookup is case-insensitive.

use serde::{Deserialize, Serialize};

/// Canonical, lower-case, hyphen-separated name of a flag kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagName(String);

impl FlagName {
    /// Derive the canonical name from a PascalCase kind label
    ///
    /// A trailing `Flag` suffix is stripped before derivation, so `PvpFlag`
    /// and `Pvp` both yield `pvp`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.strip_suffix("Flag").unwrap_or(label);
        let mut name = String::with_capacity(trimmed.len() + 4);
        for (i, ch) in trimmed.chars().enumerate() {
            if ch.is_uppercase() {
                if i > 0 {
                    name.push('-');
                }
                name.extend(ch.to_lowercase());
            } else {
                name.push(ch);
            }
        }
        Self(name)
    }

    /// Create a name from an already-canonical string
    ///
    /// The input is lower-cased; no other normalization is applied. Used when
    /// keying raw name→value pairs from external sources.
    pub fn from_canonical(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FlagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FlagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
