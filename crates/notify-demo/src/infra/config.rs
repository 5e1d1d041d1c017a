use std::collections::HashMap;

const PREFIX: &str = "NOTIFY_";

pub const CHANNELS: &str = "NOTIFY_CHANNELS";
pub const ROSTER: &str = "NOTIFY_ROSTER";
pub const UNSUBSCRIBE: &str = "NOTIFY_UNSUBSCRIBE";
pub const FINAL_MESSAGE: &str = "NOTIFY_FINAL_MESSAGE";

#[non_exhaustive]
pub struct Config {
    kv: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let kv = std::env::vars()
            .filter(|(k, _)| k.starts_with(PREFIX))
            .collect();

        Self { kv }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_map(kv: HashMap<String, String>) -> Self {
        Self { kv }
    }

    pub fn optional(&self, key: &str) -> Option<&str> {
        self.kv.get(key).map(|v| v.as_str())
    }

    pub fn optional_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.optional(key).unwrap_or(default)
    }

    /// Comma separated list. Blank items are dropped, items are not trimmed.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        self.optional(key).map(|raw| {
            raw.split(',')
                .filter(|item| !item.trim().is_empty())
                .map(String::from)
                .collect()
        })
    }
}
