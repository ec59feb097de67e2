use serde_json::{Map, Value};

/// A logical feature flag and the keys that may carry its value, in
/// precedence order. The logical name is always first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagAlias {
    pub flag: &'static str,
    pub aliases: &'static [&'static str],
}

pub const FLAG_ALIASES: &[FlagAlias] = &[
    FlagAlias {
        flag: "chat_enabled",
        aliases: &["chat_enabled", "chatEnabled", "enableChat", "messaging"],
    },
    FlagAlias {
        flag: "stories_enabled",
        aliases: &["stories_enabled", "storiesEnabled", "enableStories"],
    },
    FlagAlias {
        flag: "video_upload_enabled",
        aliases: &[
            "video_upload_enabled",
            "videoUploadEnabled",
            "enableVideoUpload",
            "videoUploads",
        ],
    },
    FlagAlias {
        flag: "marketplace_enabled",
        aliases: &["marketplace_enabled", "marketplaceEnabled", "enableMarketplace"],
    },
    FlagAlias {
        flag: "dark_mode_enabled",
        aliases: &["dark_mode_enabled", "darkModeEnabled", "darkMode"],
    },
];

impl FlagAlias {
    /// First alias present in `flags` with a non-null value, coerced to bool.
    pub fn resolve(&self, flags: &Map<String, Value>) -> Option<bool> {
        self.aliases
            .iter()
            .filter_map(|key| flags.get(*key))
            .find(|value| !value.is_null())
            .map(coerce_bool)
    }
}

/// Whether `key` belongs to any alias chain.
pub fn is_aliased(key: &str) -> bool {
    FLAG_ALIASES.iter().any(|alias| alias.aliases.contains(&key))
}

/// Booleans as-is; numbers are true when non-zero; strings are true for
/// `true`/`1`/`yes`/`on` in any case; everything else is false.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}
