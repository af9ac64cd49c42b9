//! Flag instances
//!
//! A [`FlagInstance`] is an immutable (kind, value) pair. Instances are only
//! produced through [`FlagKind::parse`](crate::kind::FlagKind::parse),
//! [`FlagKind::merge`](crate::kind::FlagKind::merge) or
//! [`FlagKind::of`](crate::kind::FlagKind::of), which preserves the contract
//! that only validated or previously-produced values exist as instances.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use scopeflag_core_types::FlagName;

use crate::kind::{ErasedKind, FlagValue, KindId};

/// Immutable (kind, value) pair
///
/// The value is stored type-erased; [`FlagInstance::value`] re-types it with a
/// checked downcast. Equality is defined on the kind identity plus the value,
/// so two instances of the same kind holding equal values are interchangeable.
#[derive(Clone)]
pub struct FlagInstance {
    kind: &'static dyn ErasedKind,
    value: Arc<dyn Any + Send + Sync>,
}

impl FlagInstance {
    pub(crate) fn new(kind: &'static dyn ErasedKind, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self { kind, value }
    }

    /// The kind this instance belongs to
    pub fn kind(&self) -> &'static dyn ErasedKind {
        self.kind
    }

    /// Identity of this instance's kind
    pub fn kind_id(&self) -> KindId {
        self.kind.id()
    }

    /// Canonical name of this instance's kind
    pub fn name(&self) -> &FlagName {
        self.kind.name()
    }

    /// Checked typed read of the stored value
    ///
    /// Returns `None` when `V` does not match the stored value's type.
    pub fn value<V: FlagValue>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Render the value to the string form accepted by the kind's parse function
    pub fn render(&self) -> String {
        let value: &dyn Any = self.value.as_ref();
        self.kind.render_value(value)
    }
}

impl PartialEq for FlagInstance {
    fn eq(&self, other: &Self) -> bool {
        if self.kind_id() != other.kind_id() {
            return false;
        }
        let a: &dyn Any = self.value.as_ref();
        let b: &dyn Any = other.value.as_ref();
        self.kind.value_eq(a, b)
    }
}

impl fmt::Debug for FlagInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagInstance")
            .field("flag", &self.name().as_str())
            .field("value", &self.render())
            .finish()
    }
}
