//! Builtin flag kinds
//!
//! Every kind declared here is registered with its default value when a
//! [`GlobalFlagContainer`](crate::global::GlobalFlagContainer) is constructed.
//! Third-party kinds are contributed later through
//! [`GlobalFlagContainer::register`](crate::global::GlobalFlagContainer::register).

pub mod boolean;
pub mod difficulty;
pub mod gamemode;
pub mod strings;

pub use difficulty::Difficulty;
pub use gamemode::GameMode;

use crate::kind::ErasedKind;

/// All builtin kinds, in registration order
pub fn all() -> Vec<&'static dyn ErasedKind> {
    vec![
        &gamemode::GAME_MODE,
        &boolean::LOCAL_RESPAWN,
        &boolean::FORCE_SPAWN,
        &boolean::PVP,
        &boolean::PVE,
        &strings::WORLD_PERMISSION,
        &strings::NETHER,
        &strings::END,
        &strings::PROFILE_GROUP,
        &difficulty::DIFFICULTY,
        &boolean::MOB_SPAWN,
        &boolean::CREATURE_SPAWN,
        &boolean::ADVANCEMENTS,
        &strings::RESPAWN_WORLD,
        &boolean::IGNORE_BEDS,
        &strings::ALIAS,
        &boolean::UNLOAD_SPAWN,
        &boolean::SAVE_WORLD,
    ]
}
