mod common;

use common::new_global;
use scopeflag_core::builtins::boolean::PVP;
use scopeflag_core::builtins::difficulty::{Difficulty, DIFFICULTY};
use scopeflag_core::builtins::strings::ALIAS;
use scopeflag_core::{import_snapshot, FlagKind, FlagSnapshot};

static LATE_TOGGLE: FlagKind<bool> = FlagKind::boolean("LateToggleFlag", false);

// ===== EXPORT =====

#[test]
fn test_export_covers_local_flags_only() {
    let global = new_global();
    let child = global.child();

    child.add_flag(PVP.of(false));
    child.add_flag(DIFFICULTY.of(Difficulty::Hard));

    let snapshot = child.export_local();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get("pvp"), Some("false"));
    assert_eq!(snapshot.get("difficulty"), Some("hard"));
    // Inherited root defaults are not exported
    assert_eq!(snapshot.get("alias"), None);
}

#[test]
fn test_export_serializes_deterministically() {
    let global = new_global();
    let child = global.child();

    child.add_flag(DIFFICULTY.of(Difficulty::Easy));
    child.add_flag(PVP.of(false));
    child.add_flag(ALIAS.of("Hub".to_string()));

    let serialized = serde_json::to_string(&child.export_local()).unwrap();
    assert_eq!(
        serialized,
        r#"{"alias":"Hub","difficulty":"easy","pvp":"false"}"#
    );

    let restored: FlagSnapshot = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, child.export_local());
}

// ===== IMPORT =====

#[test]
fn test_import_parses_recognized_names() {
    let global = new_global();
    let child = global.child();

    let mut snapshot = FlagSnapshot::new();
    snapshot.insert("pvp", "deny");
    snapshot.insert("difficulty", "peaceful");

    let failures = import_snapshot(&child, &global, &snapshot);
    assert!(failures.is_empty());
    assert_eq!(child.get(&PVP).unwrap(), false);
    assert_eq!(child.get(&DIFFICULTY).unwrap(), Difficulty::Peaceful);
}

#[test]
fn test_import_buffers_unrecognized_names_for_later() {
    let global = new_global();
    let child = global.child();

    let mut snapshot = FlagSnapshot::new();
    snapshot.insert("late-toggle", "yes");

    let failures = import_snapshot(&child, &global, &snapshot);
    assert!(failures.is_empty());
    assert!(child.query_local(&LATE_TOGGLE).is_none());

    global.register(&LATE_TOGGLE);
    assert_eq!(child.get(&LATE_TOGGLE).unwrap(), true);
}

#[test]
fn test_import_collects_parse_failures_and_continues() {
    let global = new_global();
    let child = global.child();

    let mut snapshot = FlagSnapshot::new();
    snapshot.insert("difficulty", "impossible");
    snapshot.insert("pvp", "no");

    let failures = import_snapshot(&child, &global, &snapshot);

    assert_eq!(failures.len(), 1);
    assert!(failures[0].is_recoverable());
    assert!(failures[0].to_string().contains("difficulty"));
    assert!(failures[0].to_string().contains("impossible"));

    // The valid entry was still imported
    assert_eq!(child.get(&PVP).unwrap(), false);
    assert!(child.query_local(&DIFFICULTY).is_none());
}

#[test]
fn test_export_import_round_trip() {
    let global = new_global();
    let source = global.child();

    source.add_flag(PVP.of(false));
    source.add_flag(ALIAS.of("Fancy Name".to_string()));
    source.add_flag(DIFFICULTY.of(Difficulty::Hard));

    let snapshot = source.export_local();
    let target = global.child();
    let failures = import_snapshot(&target, &global, &snapshot);

    assert!(failures.is_empty());
    assert_eq!(target.query_local(&PVP), source.query_local(&PVP));
    assert_eq!(target.query_local(&ALIAS), source.query_local(&ALIAS));
    assert_eq!(target.query_local(&DIFFICULTY), source.query_local(&DIFFICULTY));
}
