#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use scopeflag_core::{FlagContainer, FlagEvent, FlagUpdateType, GlobalFlagContainer};

/// Create a fresh global container with all builtins registered
pub fn new_global() -> GlobalFlagContainer {
    GlobalFlagContainer::new()
}

/// Recorded (flag name, update type) pairs, in dispatch order
pub type EventLog = Rc<RefCell<Vec<(String, FlagUpdateType)>>>;

/// Subscribe a recording handler to `container` and return the shared log
pub fn record_events(container: &FlagContainer) -> EventLog {
    let log: EventLog = Rc::default();
    let sink = Rc::clone(&log);
    container.subscribe(move |event: &FlagEvent| {
        sink.borrow_mut()
            .push((event.kind.name().as_str().to_string(), event.update));
    });
    log
}
