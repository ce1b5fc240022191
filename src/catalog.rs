//! Message catalog for error localization

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Key-to-localized-string lookup keyed by locale.
///
/// `resolve` never fails: a missing entry yields `default`. Implementations
/// must be safe to call concurrently without coordination.
pub trait MessageCatalog: Send + Sync {
    fn resolve(&self, key: &str, locale: &str, default: &str) -> String;
}

/// In-memory catalog, locale -> key -> message.
///
/// Lookup order: exact locale, then the bare language (`ru-RU` -> `ru`),
/// then the caller's default. An empty catalog makes every lookup fall
/// through to the default.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    messages: HashMap<String, HashMap<String, String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file shaped `{ "locale": { "key": "message" } }`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog {}", path.display()))?;
        let messages: HashMap<String, HashMap<String, String>> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse message catalog {}", path.display()))?;
        Ok(Self { messages })
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.messages
            .entry(locale.into())
            .or_default()
            .insert(key.into(), message.into());
    }

    fn get(&self, locale: &str, key: &str) -> Option<&String> {
        self.messages.get(locale).and_then(|table| table.get(key))
    }
}

impl MessageCatalog for StaticCatalog {
    fn resolve(&self, key: &str, locale: &str, default: &str) -> String {
        if let Some(message) = self.get(locale, key) {
            return message.clone();
        }
        if let Some(language) = locale.split('-').next() {
            if language != locale {
                if let Some(message) = self.get(language, key) {
                    return message.clone();
                }
            }
        }
        default.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticCatalog {
        let mut catalog = StaticCatalog::new();
        catalog.insert("en", "error.not_found", "Not found");
        catalog.insert("ru", "error.not_found", "Не найдено");
        catalog.insert("ru-RU", "error.denied", "Доступ запрещён");
        catalog
    }

    #[test]
    fn test_exact_locale_hit() {
        assert_eq!(
            catalog().resolve("error.not_found", "en", "fallback"),
            "Not found"
        );
        assert_eq!(
            catalog().resolve("error.denied", "ru-RU", "fallback"),
            "Доступ запрещён"
        );
    }

    #[test]
    fn test_language_fallback() {
        // ru-RU has no entry for this key, bare ru does
        assert_eq!(
            catalog().resolve("error.not_found", "ru-RU", "fallback"),
            "Не найдено"
        );
    }

    #[test]
    fn test_miss_returns_default() {
        assert_eq!(
            catalog().resolve("error.unknown_key", "en", "error.unknown_key"),
            "error.unknown_key"
        );
        assert_eq!(
            StaticCatalog::new().resolve("anything", "en", "anything"),
            "anything"
        );
    }

    #[test]
    fn test_from_file_rejects_malformed_json() {
        let dir = std::env::temp_dir().join("error-responder-catalog-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(StaticCatalog::from_file(&path).is_err());
    }
}
