//! Flag kind descriptors
//!
//! A [`FlagKind`] is an immutable descriptor for one typed attribute: a stable
//! identity, a canonical name, an example value, and pure parse/merge/render
//! functions. Kinds are declared as `static` items and never constructed at
//! runtime; the address of the static is the kind's identity for the process
//! lifetime, so two kinds are never equal even when their value types are
//! structurally identical.
//!
//! [`ErasedKind`] is the object-safe view containers and events traffic in.
//! Values are stored type-erased and re-typed on read with a checked downcast,
//! so a mismatched read fails explicitly instead of risking undefined behavior.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};

use scopeflag_core_types::FlagName;

use crate::errors::{FlagError, Result};
use crate::instance::FlagInstance;

/// Marker trait for flag value types
pub trait FlagValue: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static> FlagValue for T {}

/// Opaque identity token for a flag kind
///
/// Derived from the address of the kind's `'static` descriptor. Containers key
/// their local maps by `KindId`, never by the derived canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindId(usize);

impl KindId {
    fn from_ptr(ptr: *const ()) -> Self {
        Self(ptr as usize)
    }
}

/// Immutable descriptor for one typed flag kind
///
/// The parse function returns only a failure reason; [`FlagKind::parse`] wraps
/// it into a [`FlagError::ParseFailure`] carrying the kind handle and the
/// offending input. The merge direction (which argument wins) is part of each
/// kind's contract and is documented on the kind's `static` item.
pub struct FlagKind<V: FlagValue> {
    label: &'static str,
    example: &'static str,
    name: OnceLock<FlagName>,
    parse_fn: fn(&str) -> std::result::Result<V, String>,
    merge_fn: fn(V, V) -> V,
    render_fn: fn(&V) -> String,
    default_fn: fn() -> V,
}

impl<V: FlagValue> FlagKind<V> {
    /// Define a new kind from a PascalCase label and its pure functions
    ///
    /// `render` must round-trip: `parse(render(v))` yields `v` for every value
    /// producible by `parse` or `merge`.
    pub const fn new(
        label: &'static str,
        example: &'static str,
        parse_fn: fn(&str) -> std::result::Result<V, String>,
        merge_fn: fn(V, V) -> V,
        render_fn: fn(&V) -> String,
        default_fn: fn() -> V,
    ) -> Self {
        Self {
            label,
            example,
            name: OnceLock::new(),
            parse_fn,
            merge_fn,
            render_fn,
            default_fn,
        }
    }

    /// Identity of this kind, stable for the process lifetime
    pub fn id(&self) -> KindId {
        KindId::from_ptr(self as *const Self as *const ())
    }

    /// The PascalCase label this kind was declared with
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// An example of a string that parses into a valid value
    pub fn example(&self) -> &'static str {
        self.example
    }

    /// Canonical name, derived from the label once and cached
    pub fn name(&self) -> &FlagName {
        self.name.get_or_init(|| FlagName::from_label(self.label))
    }

    /// Parse a raw string into an instance of this kind
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::ParseFailure`] when the input is rejected.
    pub fn parse(&'static self, raw: &str) -> Result<FlagInstance> {
        match (self.parse_fn)(raw) {
            Ok(value) => Ok(self.of(value)),
            Err(reason) => Err(FlagError::ParseFailure {
                kind: self,
                value: raw.to_string(),
                reason,
            }),
        }
    }

    /// Create an instance holding an already-validated value
    pub fn of(&'static self, value: V) -> FlagInstance {
        FlagInstance::new(self, Arc::new(value))
    }

    /// Merge two values per this kind's contract and wrap the result
    pub fn merge(&'static self, current: V, incoming: V) -> FlagInstance {
        self.of((self.merge_fn)(current, incoming))
    }

    /// Render a value to its string form
    pub fn render(&self, value: &V) -> String {
        (self.render_fn)(value)
    }

    /// The kind's default value
    pub fn default_value(&self) -> V {
        (self.default_fn)()
    }

    /// An instance holding the kind's default value
    pub fn default_instance(&'static self) -> FlagInstance {
        self.of(self.default_value())
    }
}

impl<V: FlagValue> fmt::Debug for FlagKind<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagKind")
            .field("label", &self.label)
            .field("name", &self.name().as_str())
            .finish()
    }
}

/// Object-safe view of a flag kind
///
/// This is the runtime handle used by containers, events, and string-oriented
/// callers that have no compile-time value type.
pub trait ErasedKind: Send + Sync + fmt::Debug {
    /// Identity of this kind
    fn id(&self) -> KindId;

    /// The PascalCase label this kind was declared with
    fn label(&self) -> &'static str;

    /// Canonical name of this kind
    fn name(&self) -> &FlagName;

    /// An example of a string that parses into a valid value
    fn example(&self) -> &str;

    /// Parse a raw string without a compile-time value type
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::ParseFailure`] when the input is rejected.
    fn parse_erased(&'static self, raw: &str) -> Result<FlagInstance>;

    /// An instance holding the kind's default value
    fn default_instance_erased(&'static self) -> FlagInstance;

    #[doc(hidden)]
    fn render_value(&self, value: &dyn Any) -> String;

    #[doc(hidden)]
    fn value_eq(&self, a: &dyn Any, b: &dyn Any) -> bool;
}

impl<V: FlagValue> ErasedKind for FlagKind<V> {
    fn id(&self) -> KindId {
        FlagKind::id(self)
    }

    fn label(&self) -> &'static str {
        FlagKind::label(self)
    }

    fn name(&self) -> &FlagName {
        FlagKind::name(self)
    }

    fn example(&self) -> &str {
        FlagKind::example(self)
    }

    fn parse_erased(&'static self, raw: &str) -> Result<FlagInstance> {
        self.parse(raw)
    }

    fn default_instance_erased(&'static self) -> FlagInstance {
        self.default_instance()
    }

    fn render_value(&self, value: &dyn Any) -> String {
        match value.downcast_ref::<V>() {
            Some(value) => (self.render_fn)(value),
            // Unreachable for instances built through this kind
            None => String::new(),
        }
    }

    fn value_eq(&self, a: &dyn Any, b: &dyn Any) -> bool {
        match (a.downcast_ref::<V>(), b.downcast_ref::<V>()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
