//! Canonical event names for structured logging
//!
//! These constants keep log events consistent across all registry operations.

pub const EVENT_FLAG_ADDED: &str = "flag_added";
pub const EVENT_FLAG_REMOVED: &str = "flag_removed";
pub const EVENT_FLAG_UPDATED: &str = "flag_updated";
pub const EVENT_UNKNOWN_BUFFERED: &str = "unknown_buffered";
pub const EVENT_UNKNOWN_RESOLVED: &str = "unknown_resolved";
pub const EVENT_UNKNOWN_DROPPED: &str = "unknown_dropped";
pub const EVENT_NAME_COLLISION: &str = "name_collision";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let names = [
            EVENT_FLAG_ADDED,
            EVENT_FLAG_REMOVED,
            EVENT_FLAG_UPDATED,
            EVENT_UNKNOWN_BUFFERED,
            EVENT_UNKNOWN_RESOLVED,
            EVENT_UNKNOWN_DROPPED,
            EVENT_NAME_COLLISION,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
