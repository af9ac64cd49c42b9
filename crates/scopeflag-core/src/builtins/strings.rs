//! String-valued builtin kinds
//!
//! All string kinds merge by replacement: the incoming value wins. An empty
//! string is always a valid value, never a parse error: it means "no
//! restriction" for the permission kind and "no link" for the world-name
//! kinds. World-name-valued kinds validate non-empty input against the world
//! naming rules (up to 16 alphanumeric characters, `-` and `_`).

use crate::kind::FlagKind;

/// Strip `&x` style formatting codes (an `&` followed by an alphanumeric)
fn strip_format_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '&' && chars.peek().is_some_and(|next| next.is_ascii_alphanumeric()) {
            chars.next();
        } else {
            out.push(ch);
        }
    }
    out
}

fn parse_alias(raw: &str) -> Result<String, String> {
    Ok(strip_format_codes(raw))
}

fn parse_permission(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        // Empty means "no restriction", never a parse error
        return Ok(String::new());
    }
    if raw
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_'))
    {
        Ok(raw.to_string())
    } else {
        Err("a permission node may only contain alphanumeric characters, -, . and _".to_string())
    }
}

fn parse_world_name(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        // Empty keeps the kind's unset default, never a parse error
        return Ok(String::new());
    }
    if raw.len() <= 16
        && raw
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'))
    {
        Ok(raw.to_string())
    } else {
        Err("a world name may only contain (up to) 16 alphanumeric characters, - and _".to_string())
    }
}

fn merge_replace(_current: String, incoming: String) -> String {
    incoming
}

fn render_string(value: &String) -> String {
    value.clone()
}

fn default_empty() -> String {
    String::new()
}

fn default_group() -> String {
    "default".to_string()
}

/// Display alias for the scope; formatting codes are stripped on parse.
/// Merge: replace.
pub static ALIAS: FlagKind<String> = FlagKind::new(
    "AliasFlag",
    "&cFancy World Name",
    parse_alias,
    merge_replace,
    render_string,
    default_empty,
);

/// Permission node required to enter the scope; empty means unrestricted.
/// Merge: replace.
pub static WORLD_PERMISSION: FlagKind<String> = FlagKind::new(
    "WorldPermissionFlag",
    "your.permission.node",
    parse_permission,
    merge_replace,
    render_string,
    default_empty,
);

/// Name of the scope respawns redirect to; empty means no redirect.
/// Merge: replace.
pub static RESPAWN_WORLD: FlagKind<String> = FlagKind::new(
    "RespawnWorldFlag",
    "world",
    parse_world_name,
    merge_replace,
    render_string,
    default_empty,
);

/// Name of the nether scope linked through portals; empty means no link.
/// Merge: replace.
pub static NETHER: FlagKind<String> = FlagKind::new(
    "NetherFlag",
    "nether_world",
    parse_world_name,
    merge_replace,
    render_string,
    default_empty,
);

/// Name of the end scope linked through portals; empty means no link.
/// Merge: replace.
pub static END: FlagKind<String> = FlagKind::new(
    "EndFlag",
    "end_world",
    parse_world_name,
    merge_replace,
    render_string,
    default_empty,
);

/// Player-profile group the scope belongs to. Merge: replace.
pub static PROFILE_GROUP: FlagKind<String> = FlagKind::new(
    "ProfileGroupFlag",
    "survival_worlds",
    parse_world_name,
    merge_replace,
    render_string,
    default_group,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_strips_format_codes() {
        let instance = ALIAS.parse("&cFancy &lWorld").unwrap();
        assert_eq!(instance.value::<String>().map(String::as_str), Some("Fancy World"));
    }

    #[test]
    fn test_alias_keeps_bare_ampersand() {
        let instance = ALIAS.parse("Rock & Stone").unwrap();
        assert_eq!(instance.value::<String>().map(String::as_str), Some("Rock & Stone"));
    }

    #[test]
    fn test_permission_accepts_node_characters() {
        let instance = WORLD_PERMISSION.parse("my.scope_permission-1").unwrap();
        assert_eq!(
            instance.value::<String>().map(String::as_str),
            Some("my.scope_permission-1")
        );
    }

    #[test]
    fn test_permission_empty_means_unrestricted() {
        let instance = WORLD_PERMISSION.parse("").unwrap();
        assert_eq!(instance, WORLD_PERMISSION.default_instance());
    }

    #[test]
    fn test_permission_rejects_other_characters() {
        let err = WORLD_PERMISSION.parse("no spaces allowed").unwrap_err();
        assert!(err.to_string().contains("world-permission"));
    }

    #[test]
    fn test_string_merge_replaces() {
        let merged = PROFILE_GROUP.merge("old".to_string(), "new".to_string());
        assert_eq!(merged.value::<String>().map(String::as_str), Some("new"));
    }

    #[test]
    fn test_world_name_accepts_valid_names() {
        for raw in ["world", "nether_world", "end-world", "World_16chars_ok"] {
            let instance = NETHER.parse(raw).unwrap();
            assert_eq!(instance.value::<String>().map(String::as_str), Some(raw));
        }
    }

    #[test]
    fn test_world_name_rejects_invalid_names() {
        let too_long = "a".repeat(17);
        for raw in [too_long.as_str(), "bad name", "bad.name", "wörld"] {
            assert!(RESPAWN_WORLD.parse(raw).is_err(), "{raw}");
            assert!(PROFILE_GROUP.parse(raw).is_err(), "{raw}");
            assert!(END.parse(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_world_name_empty_means_no_link() {
        let instance = NETHER.parse("").unwrap();
        assert_eq!(instance, NETHER.default_instance());
    }

    #[test]
    fn test_profile_group_defaults_to_shared_group() {
        assert_eq!(PROFILE_GROUP.default_value(), "default");
        assert_eq!(NETHER.name().as_str(), "nether");
        assert_eq!(END.name().as_str(), "end");
    }
}
