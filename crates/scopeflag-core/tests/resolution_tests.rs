mod common;

use common::new_global;
use scopeflag_core::builtins::boolean::{LOCAL_RESPAWN, PVP};
use scopeflag_core::builtins::difficulty::{Difficulty, DIFFICULTY};
use scopeflag_core::builtins::strings::ALIAS;
use scopeflag_core::{FlagContainer, FlagKind};

// ===== RESOLUTION PRECEDENCE =====

#[test]
fn test_leaf_inherits_root_value_through_three_levels() {
    let global = new_global();
    let mid = FlagContainer::with_parent(global.container().clone());
    let leaf = FlagContainer::with_parent(mid.clone());

    // Only the root holds the kind (its registered default)
    assert_eq!(leaf.get(&PVP).unwrap(), true);
    assert!(leaf.query_local(&PVP).is_none());
    assert!(mid.query_local(&PVP).is_none());
}

#[test]
fn test_mid_override_shadows_root_for_leaf() {
    let global = new_global();
    let mid = FlagContainer::with_parent(global.container().clone());
    let leaf = FlagContainer::with_parent(mid.clone());

    mid.add_flag(PVP.of(false));

    assert_eq!(leaf.get(&PVP).unwrap(), false);
    // The leaf still has no local entry of its own
    assert!(leaf.query_local(&PVP).is_none());
    // The root's value is unchanged
    assert_eq!(global.get(&PVP).unwrap(), true);
}

#[test]
fn test_local_override_dominates_regardless_of_depth() {
    let global = new_global();
    let mid = FlagContainer::with_parent(global.container().clone());
    let leaf = FlagContainer::with_parent(mid.clone());

    mid.add_flag(DIFFICULTY.of(Difficulty::Easy));
    leaf.add_flag(DIFFICULTY.of(Difficulty::Hard));

    assert_eq!(leaf.get(&DIFFICULTY).unwrap(), Difficulty::Hard);
    assert_eq!(mid.get(&DIFFICULTY).unwrap(), Difficulty::Easy);
}

#[test]
fn test_erased_lookup_follows_the_same_order() {
    let global = new_global();
    let child = global.child();

    child.add_flag(PVP.of(false));

    let local = child.get_flag_erased(PVP.id()).unwrap();
    assert_eq!(local.value::<bool>(), Some(&false));

    let inherited = child.get_flag_erased(DIFFICULTY.id()).unwrap();
    assert_eq!(inherited.value::<Difficulty>(), Some(&Difficulty::Normal));
}

// ===== FATAL LOOKUP =====

static DETACHED: FlagKind<bool> = FlagKind::boolean("DetachedFlag", false);

#[test]
fn test_lookup_of_unregistered_kind_fails_loudly() {
    let global = new_global();
    let child = global.child();

    let err = child.get(&DETACHED).unwrap_err();
    assert_eq!(err.code(), "ERR_UNREGISTERED_KIND");
    assert!(!err.is_recoverable());

    let err = child.get_flag_erased(DETACHED.id()).unwrap_err();
    assert_eq!(err.code(), "ERR_UNREGISTERED_KIND");
}

#[test]
fn test_detached_chain_fails_without_a_global_root() {
    let top = FlagContainer::root();
    let child = FlagContainer::with_parent(top);

    assert!(child.get_flag(&PVP).is_err());
}

// ===== CHECKED DOWNCAST =====

#[test]
fn test_mismatched_typed_read_returns_none() {
    let instance = PVP.of(true);
    assert!(instance.value::<String>().is_none());
    assert_eq!(instance.value::<bool>(), Some(&true));
}

// ===== END-TO-END SCENARIO =====

#[test]
fn test_boolean_and_string_scenario() {
    // Global with a boolean kind defaulting to false and a string kind
    // defaulting to the empty string.
    let global = new_global();
    let container = global.child();

    container.add_flag(LOCAL_RESPAWN.of(true));

    assert_eq!(container.get(&LOCAL_RESPAWN).unwrap(), true);
    assert!(container.query_local(&ALIAS).is_none());
    assert_eq!(container.get(&ALIAS).unwrap(), String::new());
}
