//! Change-notification plumbing
//!
//! Every mutation of a container's local map produces a [`FlagEvent`] that is
//! dispatched synchronously to the container's own handler (if any) and then
//! to every subscriber, in subscription order. Handlers must be fast and must
//! not re-enter the notification path of the container that invoked them.

use std::rc::Rc;

use crate::instance::FlagInstance;
use crate::kind::ErasedKind;

/// What happened to a flag in a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagUpdateType {
    /// A flag was added to a container that did not hold it locally
    Added,
    /// A flag was removed from a container (emitted even when nothing was
    /// locally stored; callers must tolerate removal of a never-set value)
    Removed,
    /// A flag already stored locally was replaced by a new instance
    Updated,
}

/// A single add/remove/update notification
#[derive(Debug, Clone)]
pub struct FlagEvent {
    /// The kind the event concerns
    pub kind: &'static dyn ErasedKind,
    /// What happened
    pub update: FlagUpdateType,
    /// The instance now stored (for adds/updates), or the previously stored
    /// instance (for removals); `None` for removals of a never-set flag
    pub instance: Option<FlagInstance>,
}

/// Callback invoked on every add/remove/update in a container
pub type UpdateHandler = Rc<dyn Fn(&FlagEvent)>;
