//! Site locales and the per-locale display-string dictionary.
//!
//! The site is bilingual (Spanish default, English). Regional tags fold
//! onto their base locale, mirroring the routing middleware's supported
//! list. Each locale carries a flat key→string dictionary built from an
//! embedded JSON file; consumers treat it as an opaque lookup so the
//! domain logic itself stays locale-independent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

/// All supported locales, default first.
pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::Es, Locale::En];

impl Locale {
    /// The locale unprefixed requests are redirected to.
    pub const DEFAULT: Locale = Locale::Es;

    /// Parse a URL/path locale tag. Regional variants (`es-AR`, `en-US`)
    /// fold onto their base locale; unknown tags are rejected.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "es" | "es-ar" => Some(Self::Es),
            "en" | "en-us" => Some(Self::En),
            _ => None,
        }
    }

    /// The canonical path segment for this locale.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The CMS language code for this locale.
    pub fn prismic_lang(self) -> &'static str {
        match self {
            Self::Es => "es-ar",
            Self::En => "en-us",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

const DICT_ES: &str = include_str!("../locales/es.json");
const DICT_EN: &str = include_str!("../locales/en.json");

/// Flat key→string lookup for one locale's display strings.
///
/// Built from the embedded JSON dictionary, with nested objects flattened
/// to dot-separated keys (`whatsapp.message_template`,
/// `steps.artist.title`, ...). Not an i18n framework: two locales, string
/// leaves only, no interpolation machinery.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Load the embedded dictionary for a locale.
    ///
    /// Fails only if the embedded JSON is malformed, which indicates a
    /// build problem rather than a runtime condition.
    pub fn load(locale: Locale) -> Result<Self, CoreError> {
        let raw = match locale {
            Locale::Es => DICT_ES,
            Locale::En => DICT_EN,
        };

        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
            CoreError::Internal(format!("Malformed embedded dictionary for '{locale}': {e}"))
        })?;

        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);

        Ok(Self { locale, entries })
    }

    /// The locale this dictionary belongs to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a display string by its dot-separated key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a display string, failing if the key is missing.
    pub fn require(&self, key: &str) -> Result<&str, CoreError> {
        self.get(key).ok_or_else(|| {
            CoreError::Internal(format!(
                "Missing dictionary key '{key}' for locale '{}'",
                self.locale
            ))
        })
    }

    /// Number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten nested JSON objects into dot-separated string entries.
/// Non-string leaves are skipped; the dictionaries only carry text.
fn flatten(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        serde_json::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Locale --

    #[test]
    fn parse_base_tags() {
        assert_eq!(Locale::parse("es"), Some(Locale::Es));
        assert_eq!(Locale::parse("en"), Some(Locale::En));
    }

    #[test]
    fn parse_folds_regional_variants() {
        assert_eq!(Locale::parse("es-AR"), Some(Locale::Es));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("ES-ar"), Some(Locale::Es));
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(Locale::parse("nl"), None);
        assert_eq!(Locale::parse("pt-BR"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn prismic_lang_mapping() {
        assert_eq!(Locale::Es.prismic_lang(), "es-ar");
        assert_eq!(Locale::En.prismic_lang(), "en-us");
    }

    #[test]
    fn default_locale_is_spanish() {
        assert_eq!(Locale::DEFAULT, Locale::Es);
    }

    // -- Dictionary --

    #[test]
    fn loads_both_locales() {
        for locale in SUPPORTED_LOCALES {
            let dict = Dictionary::load(locale).unwrap();
            assert!(!dict.is_empty());
            assert_eq!(dict.locale(), locale);
        }
    }

    #[test]
    fn nested_keys_are_flattened() {
        let dict = Dictionary::load(Locale::Es).unwrap();
        assert!(dict.get("whatsapp.phone_number").is_some());
        assert!(dict.get("steps.artist.title").is_some());
        assert!(dict.get("contact.form.name_label").is_some());
    }

    #[test]
    fn template_contains_all_tokens() {
        for locale in SUPPORTED_LOCALES {
            let dict = Dictionary::load(locale).unwrap();
            let template = dict.get("whatsapp.message_template").unwrap();
            for token in [
                "{artist}",
                "{instagram}",
                "{style}",
                "{description}",
                "{name}",
                "{email}",
                "{phone}",
                "{date}",
            ] {
                assert!(template.contains(token), "{locale}: missing {token}");
            }
        }
    }

    #[test]
    fn missing_key_returns_none() {
        let dict = Dictionary::load(Locale::En).unwrap();
        assert_eq!(dict.get("no.such.key"), None);
    }

    #[test]
    fn require_missing_key_fails() {
        let dict = Dictionary::load(Locale::En).unwrap();
        assert!(dict.require("no.such.key").is_err());
    }

    #[test]
    fn destination_number_matches_studio_line() {
        // Both dictionaries point at the same studio WhatsApp line.
        let es = Dictionary::load(Locale::Es).unwrap();
        let en = Dictionary::load(Locale::En).unwrap();
        assert_eq!(
            es.get("whatsapp.phone_number"),
            en.get("whatsapp.phone_number")
        );
    }
}
