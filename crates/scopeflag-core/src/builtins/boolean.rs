//! Boolean flag machinery and builtin boolean kinds
//!
//! All boolean kinds share one token set and one merge contract: truthy
//! tokens are `1`, `yes`, `allow`, `true`; falsy tokens are `0`, `no`,
//! `deny`, `disallow`, `false` (case-insensitive). Merge is logical OR, so
//! combining scopes can only ever widen a permission, never narrow it.

use crate::kind::FlagKind;

const TRUTHY: [&str; 4] = ["1", "yes", "allow", "true"];
const FALSY: [&str; 5] = ["0", "no", "deny", "disallow", "false"];

fn parse_boolean(raw: &str) -> Result<bool, String> {
    let token = raw.to_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Ok(true)
    } else if FALSY.contains(&token.as_str()) {
        Ok(false)
    } else {
        Err("the value must be a boolean value (true/false)".to_string())
    }
}

fn merge_or(current: bool, incoming: bool) -> bool {
    current || incoming
}

fn render_boolean(value: &bool) -> String {
    value.to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl FlagKind<bool> {
    /// Define a boolean kind with the shared token set and OR-merge contract
    pub const fn boolean(label: &'static str, default: bool) -> FlagKind<bool> {
        FlagKind::new(
            label,
            "true",
            parse_boolean,
            merge_or,
            render_boolean,
            if default { default_true } else { default_false },
        )
    }
}

/// Whether player-versus-player combat is allowed in the scope
pub static PVP: FlagKind<bool> = FlagKind::boolean("PvpFlag", true);

/// Whether player-versus-environment combat is allowed in the scope
pub static PVE: FlagKind<bool> = FlagKind::boolean("PveFlag", true);

/// Whether hostile mobs may spawn
pub static MOB_SPAWN: FlagKind<bool> = FlagKind::boolean("MobSpawnFlag", true);

/// Whether passive creatures may spawn
pub static CREATURE_SPAWN: FlagKind<bool> = FlagKind::boolean("CreatureSpawnFlag", true);

/// Whether advancements may be granted
pub static ADVANCEMENTS: FlagKind<bool> = FlagKind::boolean("AdvancementFlag", true);

/// Whether respawns stay inside the scope instead of the default scope
pub static LOCAL_RESPAWN: FlagKind<bool> = FlagKind::boolean("LocalRespawnFlag", false);

/// Whether entry always teleports to the scope's spawn point
pub static FORCE_SPAWN: FlagKind<bool> = FlagKind::boolean("ForceSpawn", false);

/// Whether bed spawn points are ignored
pub static IGNORE_BEDS: FlagKind<bool> = FlagKind::boolean("IgnoreBedsFlag", false);

/// Whether the spawn area is unloaded when the scope is vacated
pub static UNLOAD_SPAWN: FlagKind<bool> = FlagKind::boolean("UnloadSpawnFlag", false);

/// Whether the scope's state is persisted on unload
pub static SAVE_WORLD: FlagKind<bool> = FlagKind::boolean("SaveWorldFlag", true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_and_falsy_tokens() {
        for token in ["1", "yes", "allow", "true", "TRUE", "Yes"] {
            assert_eq!(PVP.parse(token).unwrap().value::<bool>(), Some(&true), "{token}");
        }
        for token in ["0", "no", "deny", "disallow", "false", "FALSE"] {
            assert_eq!(PVP.parse(token).unwrap().value::<bool>(), Some(&false), "{token}");
        }
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let err = PVP.parse("maybe").unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("pvp"));
    }

    #[test]
    fn test_merge_is_logical_or() {
        assert_eq!(PVP.merge(false, true).value::<bool>(), Some(&true));
        assert_eq!(PVP.merge(true, false).value::<bool>(), Some(&true));
        assert_eq!(PVP.merge(true, true).value::<bool>(), Some(&true));
        assert_eq!(PVP.merge(false, false).value::<bool>(), Some(&false));
    }

    #[test]
    fn test_defaults() {
        assert!(PVP.default_value());
        assert!(!LOCAL_RESPAWN.default_value());
    }

    #[test]
    fn test_names() {
        assert_eq!(PVP.name().as_str(), "pvp");
        assert_eq!(IGNORE_BEDS.name().as_str(), "ignore-beds");
        assert_eq!(FORCE_SPAWN.name().as_str(), "force-spawn");
    }
}
