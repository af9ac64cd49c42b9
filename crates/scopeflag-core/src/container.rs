//! Scoped flag containers
//!
//! A [`FlagContainer`] owns a local map from kind identity to instance, an
//! optional reference to a parent container, a subscriber list, and a buffer
//! of raw values whose kinds are not yet known. Resolution order is always
//! self before parent, so local overrides are strictly dominant regardless of
//! chain depth. At the top of every chain sits the global container (see
//! [`crate::global`]).
//!
//! Containers are single-threaded by design: no locking, synchronous
//! notification dispatch, one logical owner thread. Concurrent access must be
//! serialized by the caller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use scopeflag_core_types::{schema, FlagName};

use crate::errors::{FlagError, Result};
use crate::events::{FlagEvent, FlagUpdateType, UpdateHandler};
use crate::instance::FlagInstance;
use crate::kind::{ErasedKind, FlagKind, FlagValue, KindId};

/// A mutable, per-scope registry of flag instances with parent-chain inheritance
pub struct FlagContainer {
    parent: Option<Rc<FlagContainer>>,
    local: RefCell<HashMap<KindId, FlagInstance>>,
    handler: Option<UpdateHandler>,
    subscribers: RefCell<Vec<UpdateHandler>>,
    unknowns: RefCell<HashMap<FlagName, String>>,
}

impl FlagContainer {
    /// Create a top-level container with no parent
    pub fn root() -> Rc<Self> {
        Self::build(None, None)
    }

    /// Create a top-level container whose own handler is invoked before
    /// subscribers on every event
    pub fn root_with_handler(handler: impl Fn(&FlagEvent) + 'static) -> Rc<Self> {
        Self::build(None, Some(Rc::new(handler)))
    }

    /// Create a child container chained to `parent`
    ///
    /// The child subscribes to the highest ancestor of the chain (the global
    /// container for chains rooted there) so that registrations at the root
    /// resolve the child's buffered unknown values at any depth. The
    /// subscription holds only a weak reference: a dropped child is skipped,
    /// never invoked.
    pub fn with_parent(parent: Rc<FlagContainer>) -> Rc<Self> {
        Self::build(Some(parent), None)
    }

    /// Create a child container with a per-scope handler (e.g. a persistence
    /// hook that re-serializes the scope whenever a flag changes)
    pub fn with_parent_and_handler(
        parent: Rc<FlagContainer>,
        handler: impl Fn(&FlagEvent) + 'static,
    ) -> Rc<Self> {
        Self::build(Some(parent), Some(Rc::new(handler)))
    }

    fn build(parent: Option<Rc<FlagContainer>>, handler: Option<UpdateHandler>) -> Rc<Self> {
        let container = Rc::new(Self {
            parent,
            local: RefCell::new(HashMap::new()),
            handler,
            subscribers: RefCell::new(Vec::new()),
            unknowns: RefCell::new(HashMap::new()),
        });
        if let Some(parent) = &container.parent {
            // Registrations happen at the top of the chain, so the handler
            // must listen there regardless of this container's depth.
            let mut root = parent;
            while let Some(ancestor) = &root.parent {
                root = ancestor;
            }
            let weak: Weak<FlagContainer> = Rc::downgrade(&container);
            root.subscribe(move |event| {
                if let Some(child) = weak.upgrade() {
                    child.handle_unknowns(event);
                }
            });
        }
        container
    }

    /// The parent container, if this container has one
    pub fn parent(&self) -> Option<&Rc<FlagContainer>> {
        self.parent.as_ref()
    }

    /// Insert or replace an instance under its kind's identity
    ///
    /// Prior local presence decides whether subscribers observe `Added` or
    /// `Updated`. The container's own handler and every subscriber are invoked
    /// synchronously before this method returns.
    pub fn add_flag(&self, instance: FlagInstance) {
        let kind = instance.kind();
        let previous = self
            .local
            .borrow_mut()
            .insert(instance.kind_id(), instance.clone());
        let update = if previous.is_some() {
            FlagUpdateType::Updated
        } else {
            FlagUpdateType::Added
        };
        let event_name = if update == FlagUpdateType::Updated {
            schema::EVENT_FLAG_UPDATED
        } else {
            schema::EVENT_FLAG_ADDED
        };
        tracing::trace!(
            component = "container",
            event = event_name,
            flag = %kind.name(),
            "flag stored"
        );
        self.notify(&FlagEvent {
            kind,
            update,
            instance: Some(instance),
        });
    }

    /// Remove a flag from the local map, returning the previous instance
    ///
    /// Always emits `Removed`, even when the flag was never locally set.
    pub fn remove_flag(&self, kind: &'static dyn ErasedKind) -> Option<FlagInstance> {
        let previous = self.local.borrow_mut().remove(&kind.id());
        tracing::trace!(
            component = "container",
            event = schema::EVENT_FLAG_REMOVED,
            flag = %kind.name(),
            "flag removed"
        );
        self.notify(&FlagEvent {
            kind,
            update: FlagUpdateType::Removed,
            instance: previous.clone(),
        });
        previous
    }

    /// Add every instance, with per-item event semantics
    pub fn add_all<I>(&self, instances: I)
    where
        I: IntoIterator<Item = FlagInstance>,
    {
        for instance in instances {
            self.add_flag(instance);
        }
    }

    /// Add every locally stored instance of another container
    pub fn add_all_from(&self, other: &FlagContainer) {
        let instances: Vec<FlagInstance> = other.local.borrow().values().cloned().collect();
        self.add_all(instances);
    }

    /// Empty the local map without emitting per-item events
    ///
    /// Callers that need notification must diff before and after themselves.
    pub fn clear_local(&self) {
        self.local.borrow_mut().clear();
    }

    /// An owned view of the local map
    pub fn flag_map(&self) -> HashMap<KindId, FlagInstance> {
        self.local.borrow().clone()
    }

    /// Resolve a kind through the chain: self first, then ancestors
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnregisteredKind`] when no container in the chain,
    /// including the root, holds the kind. A chain rooted at the global
    /// container only produces this for kinds never registered, which is a
    /// programming error rather than a runtime input error.
    pub fn get_flag(&self, kind: &'static dyn ErasedKind) -> Result<FlagInstance> {
        if let Some(instance) = self.query_local(kind) {
            return Ok(instance);
        }
        match &self.parent {
            Some(parent) => parent.get_flag(kind),
            None => Err(FlagError::UnregisteredKind {
                label: kind.label().to_string(),
            }),
        }
    }

    /// Type-erased sibling of [`FlagContainer::get_flag`], for callers that
    /// only hold a runtime identity
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnregisteredKindId`] when the identity resolves
    /// nowhere in the chain.
    pub fn get_flag_erased(&self, id: KindId) -> Result<FlagInstance> {
        if let Some(instance) = self.local.borrow().get(&id).cloned() {
            return Ok(instance);
        }
        match &self.parent {
            Some(parent) => parent.get_flag_erased(id),
            None => Err(FlagError::UnregisteredKindId { id }),
        }
    }

    /// Typed convenience over [`FlagContainer::get_flag`]: resolve, downcast,
    /// clone the value
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnregisteredKind`] when the kind resolves nowhere
    /// in the chain, or [`FlagError::ValueTypeMismatch`] if the stored value
    /// does not hold `V` (possible only if a colliding identity was forged).
    pub fn get<V: FlagValue>(&self, kind: &'static FlagKind<V>) -> Result<V> {
        let instance = self.get_flag(kind)?;
        instance
            .value::<V>()
            .cloned()
            .ok_or_else(|| FlagError::ValueTypeMismatch {
                label: kind.label().to_string(),
            })
    }

    /// Local-only lookup, no parent traversal
    ///
    /// Distinguishes "this scope explicitly overrides the kind" from "this
    /// scope inherits the default."
    pub fn query_local(&self, kind: &'static dyn ErasedKind) -> Option<FlagInstance> {
        self.local.borrow().get(&kind.id()).cloned()
    }

    /// Merge a foreign-sourced value into this container
    ///
    /// The seam used to port configuration from another representation: the
    /// incoming value is merged with the current effective value (or the
    /// kind's default when the chain cannot resolve it) per the kind's merge
    /// contract, and the result is stored locally.
    pub fn merge_in<V: FlagValue>(&self, kind: &'static FlagKind<V>, incoming: V) {
        let current = self.get(kind).unwrap_or_else(|_| kind.default_value());
        self.add_flag(kind.merge(current, incoming));
    }

    /// Register a callback invoked on every add/remove/update in this container
    pub fn subscribe(&self, handler: impl Fn(&FlagEvent) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(handler));
    }

    /// Buffer a raw value whose kind is not yet known
    ///
    /// The value is stored under the canonical (lower-cased) form of `name`,
    /// overwriting any previous pending value for that name. It will be
    /// resolved when a kind with a matching canonical name is registered in
    /// the global container.
    pub fn add_unknown_flag(&self, name: &str, raw: impl Into<String>) {
        let raw = raw.into();
        tracing::debug!(
            component = "container",
            event = schema::EVENT_UNKNOWN_BUFFERED,
            flag = %name,
            "buffered value for unrecognized flag"
        );
        self.unknowns
            .borrow_mut()
            .insert(FlagName::from_canonical(name), raw);
    }

    /// React to a non-removal event from an ancestor container
    ///
    /// If the event's kind matches a buffered pending name, the buffered raw
    /// value is parsed through the now-known kind. Success stores the result
    /// via [`FlagContainer::add_flag`]; failure discards the pending entry
    /// without surfacing an error to any caller (logged at WARN only).
    pub fn handle_unknowns(&self, event: &FlagEvent) {
        if event.update == FlagUpdateType::Removed {
            return;
        }
        let pending = self.unknowns.borrow_mut().remove(event.kind.name());
        let Some(raw) = pending else {
            return;
        };
        match event.kind.parse_erased(&raw) {
            Ok(instance) => {
                tracing::debug!(
                    component = "container",
                    event = schema::EVENT_UNKNOWN_RESOLVED,
                    flag = %event.kind.name(),
                    "resolved buffered flag value"
                );
                self.add_flag(instance);
            }
            Err(err) => {
                tracing::warn!(
                    component = "container",
                    event = schema::EVENT_UNKNOWN_DROPPED,
                    flag = %event.kind.name(),
                    value = %raw,
                    reason = %err,
                    "dropping buffered flag value that failed to parse"
                );
            }
        }
    }

    /// Dispatch to the own handler, then subscribers in subscription order.
    /// The subscriber list is re-borrowed per call so a handler may subscribe
    /// further handlers; it must not re-enter this container's notification
    /// path.
    fn notify(&self, event: &FlagEvent) {
        if let Some(handler) = &self.handler {
            handler(event);
        }
        let mut index = 0;
        loop {
            let subscriber = {
                let subscribers = self.subscribers.borrow();
                match subscribers.get(index) {
                    Some(subscriber) => Rc::clone(subscriber),
                    None => break,
                }
            };
            subscriber(event);
            index += 1;
        }
    }
}

impl std::fmt::Debug for FlagContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagContainer")
            .field("local", &self.local.borrow().len())
            .field("pending", &self.unknowns.borrow().len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
