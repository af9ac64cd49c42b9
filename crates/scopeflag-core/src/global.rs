//! The global flag container
//!
//! The single root of every container chain in the process: pre-populated
//! with every builtin kind at construction, and the authoritative name→kind
//! index used for string-based lookup. Registration is an explicit call
//! during a defined startup phase; feature modules contributing their own
//! kinds call [`GlobalFlagContainer::register`] after construction, which
//! also resolves any values already buffered for those kinds in descendant
//! containers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use scopeflag_core_types::schema;

use crate::builtins;
use crate::container::FlagContainer;
use crate::errors::Result;
use crate::events::{FlagEvent, FlagUpdateType};
use crate::instance::FlagInstance;
use crate::kind::{ErasedKind, FlagKind, FlagValue, KindId};

type NameIndex = Rc<RefCell<HashMap<String, &'static dyn ErasedKind>>>;

/// Root container plus the authoritative name→kind index
pub struct GlobalFlagContainer {
    container: Rc<FlagContainer>,
    index: NameIndex,
}

impl GlobalFlagContainer {
    /// Create the root container and register every builtin kind
    ///
    /// The root's own handler maintains the name index from its own `Added`
    /// events, then the event fans out to every subscribed descendant (this is
    /// how deferred resolution propagates without polling).
    pub fn new() -> Self {
        let index: NameIndex = Rc::default();
        let handler_index = Rc::clone(&index);
        let container = FlagContainer::root_with_handler(move |event: &FlagEvent| {
            if event.update != FlagUpdateType::Added {
                return;
            }
            let name = event.kind.name().as_str().to_string();
            let previous = handler_index.borrow_mut().insert(name.clone(), event.kind);
            if let Some(previous) = previous {
                if previous.id() != event.kind.id() {
                    tracing::warn!(
                        component = "global",
                        event = schema::EVENT_NAME_COLLISION,
                        flag = %name,
                        previous = previous.label(),
                        replacement = event.kind.label(),
                        "canonical name collision: latest registration wins"
                    );
                }
            }
        });
        let global = Self { container, index };
        for kind in builtins::all() {
            global.register(kind);
        }
        global
    }

    /// The root container, used as the parent of every scope chain
    pub fn container(&self) -> &Rc<FlagContainer> {
        &self.container
    }

    /// Create a child container chained to the root
    pub fn child(&self) -> Rc<FlagContainer> {
        FlagContainer::with_parent(Rc::clone(&self.container))
    }

    /// Register a kind by storing its default instance in the root
    ///
    /// Safe to call after child containers exist: the `Added` event reaches
    /// every subscribed descendant, each of which re-attempts resolution of
    /// any value it buffered under the kind's canonical name.
    pub fn register(&self, kind: &'static dyn ErasedKind) {
        self.container.add_flag(kind.default_instance_erased());
    }

    /// Resolve a kind by canonical name, case-insensitively
    pub fn kind_by_name(&self, name: &str) -> Option<&'static dyn ErasedKind> {
        self.index.borrow().get(&name.to_lowercase()).copied()
    }

    /// Resolve a name to the effective root instance for its kind
    pub fn instance_by_name(&self, name: &str) -> Option<FlagInstance> {
        let kind = self.kind_by_name(name)?;
        self.container.get_flag(kind).ok()
    }

    /// Root lookup; never silently absent
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlagError::UnregisteredKind`] when the kind was never
    /// registered. That is a configuration error, not a runtime input error.
    pub fn get_flag(&self, kind: &'static dyn ErasedKind) -> Result<FlagInstance> {
        self.container.get_flag(kind)
    }

    /// Type-erased root lookup by identity
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlagError::UnregisteredKindId`] when the identity was
    /// never registered.
    pub fn get_flag_erased(&self, id: KindId) -> Result<FlagInstance> {
        self.container.get_flag_erased(id)
    }

    /// Typed root lookup
    ///
    /// # Errors
    ///
    /// Same contract as [`GlobalFlagContainer::get_flag`].
    pub fn get<V: FlagValue>(&self, kind: &'static FlagKind<V>) -> Result<V> {
        self.container.get(kind)
    }

    /// Number of registered kinds
    pub fn registered_count(&self) -> usize {
        self.index.borrow().len()
    }
}

impl Default for GlobalFlagContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GlobalFlagContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalFlagContainer")
            .field("registered", &self.registered_count())
            .finish()
    }
}
