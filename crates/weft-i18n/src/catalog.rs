#![forbid(unsafe_code)]

//! String catalog with locale fallback and interpolation.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: every lookup walks the chain exactly
//!    once, returning `None` if no locale provides the key.
//!
//! 2. **Interpolation is idempotent**: `format()` replaces `{name}` tokens
//!    using a single pass; nested or recursive substitution does not occur.
//!
//! 3. **Key fallback is visible**: `tr()` yields the key itself when no
//!    locale provides it, so a missing translation shows up in the UI
//!    instead of rendering blank.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in any locale | `get` returns `None`, `tr` returns the key |
//! | Missing locale | Locale not loaded | Falls through chain |
//! | Bad interpolation arg | `{name}` but no `name` arg | Token left as-is |
//! | Malformed source line | Line without `=` | `ParseError` |
//! | Repeated key in one source | Same key twice | `DuplicateKey` |

use std::collections::HashMap;

/// Locale identifier (e.g., `"en"`, `"en-US"`, `"de"`).
pub type Locale = String;

/// Errors from i18n operations.
#[derive(Debug, Clone)]
pub enum I18nError {
    /// A catalog source could not be parsed.
    ParseError(String),
    /// Duplicate key in the same locale source.
    DuplicateKey {
        /// Locale being loaded.
        locale: String,
        /// The repeated key.
        key: String,
    },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "parse error: {msg}"),
            Self::DuplicateKey { locale, key } => {
                write!(f, "duplicate key '{key}' in locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys in this locale.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Central string catalog with locale fallback.
///
/// # Example
///
/// ```
/// use weft_i18n::{LocaleStrings, StringCatalog};
///
/// let mut catalog = StringCatalog::new();
///
/// let mut en = LocaleStrings::new();
/// en.insert("greeting", "Hello");
/// en.insert("welcome", "Welcome, {name}!");
/// catalog.add_locale("en", en);
/// catalog.set_fallback_chain(vec!["en".into()]);
///
/// assert_eq!(catalog.get("en", "greeting"), Some("Hello"));
/// assert_eq!(
///     catalog.format("en", "welcome", &[("name", "Alice")]),
///     Some("Welcome, Alice!".into())
/// );
/// assert_eq!(catalog.tr("de", "greeting"), "Hello");
/// assert_eq!(catalog.tr("de", "no-such-key"), "no-such-key");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
    fallback_chain: Vec<Locale>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add strings for a locale, replacing any prior set.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// Parse a `key = value` source into a locale's string set.
    ///
    /// One entry per line; `#` starts a comment; blank lines are skipped.
    /// Values keep interior whitespace but are trimmed at both ends.
    /// Entries merge into any strings the locale already has; a key
    /// repeated *within one source* is an error.
    pub fn parse_locale(
        &mut self,
        locale: impl Into<String>,
        source: &str,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        let mut parsed = LocaleStrings::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(I18nError::ParseError(format!(
                    "line {}: expected 'key = value', got '{line}'",
                    idx + 1
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(I18nError::ParseError(format!("line {}: empty key", idx + 1)));
            }
            if parsed.get(key).is_some() {
                return Err(I18nError::DuplicateKey {
                    locale,
                    key: key.to_owned(),
                });
            }
            parsed.insert(key, value.trim());
        }

        let existing = self.locales.entry(locale).or_default();
        existing.strings.extend(parsed.strings);
        Ok(())
    }

    /// Set the fallback chain (tried in order when a key is missing).
    ///
    /// Example: `["de-AT", "de", "en"]` tries Austrian German, then
    /// generic German, then English.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain;
    }

    /// Look up a string by key.
    ///
    /// Tries the specified locale first, then walks the fallback chain.
    /// Returns `None` if no locale provides the key.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(s) = self.locales.get(locale).and_then(|ls| ls.get(key)) {
            return Some(s);
        }

        for fallback in &self.fallback_chain {
            if fallback == locale {
                continue; // Already tried
            }
            if let Some(s) = self.locales.get(fallback.as_str()).and_then(|ls| ls.get(key)) {
                return Some(s);
            }
        }

        None
    }

    /// Like [`get`](Self::get), but yields the key itself when missing.
    #[must_use]
    pub fn tr<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or(key)
    }

    /// Look up a string and perform `{name}` interpolation.
    ///
    /// Each `(name, value)` pair in `args` replaces `{name}` in the
    /// template string. Tokens without matching args are left as-is.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key)
            .map(|template| interpolate(template, args))
    }

    /// Look up a string and perform positional interpolation.
    ///
    /// `args[0]` replaces `{1}`, `args[1]` replaces `{2}`, and so on.
    #[must_use]
    pub fn format_positional(&self, locale: &str, key: &str, args: &[&str]) -> Option<String> {
        self.get(locale, key).map(|template| {
            let names: Vec<String> = (1..=args.len()).map(|i| i.to_string()).collect();
            let pairs: Vec<(&str, &str)> = names
                .iter()
                .map(String::as_str)
                .zip(args.iter().copied())
                .collect();
            interpolate(template, &pairs)
        })
    }

    /// All registered locale tags.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// Collect all unique keys across every registered locale.
    ///
    /// The result is sorted for deterministic output.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|ls| ls.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// Single-pass `{name}` interpolation. Unmatched tokens left as-is.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            // Try to read a token name until '}'
            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            if found_close {
                if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
                    result.push_str(value);
                } else {
                    // No match: leave token as-is
                    result.push('{');
                    result.push_str(&token);
                    result.push('}');
                }
            } else {
                // Unclosed brace: emit as-is
                result.push('{');
                result.push_str(&token);
            }
        } else {
            result.push(ch);
        }
    }

    result
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolate_never_panics(template in "\\PC{0,64}") {
            let _ = interpolate(&template, &[("name", "x")]);
        }

        #[test]
        fn interpolate_without_braces_is_identity(template in "[a-zA-Z0-9 .,!?]{0,64}") {
            prop_assert_eq!(interpolate(&template, &[("a", "b")]), template);
        }

        #[test]
        fn matched_tokens_are_replaced(value in "[a-z]{1,10}") {
            let out = interpolate("pre {name} post", &[("name", &value)]);
            prop_assert_eq!(out, format!("pre {value} post"));
        }

        #[test]
        fn lookup_never_panics(locale in "[a-z]{2}", key in "[a-z.-]{0,16}") {
            let mut catalog = StringCatalog::new();
            let mut en = LocaleStrings::new();
            en.insert("known", "value");
            catalog.add_locale("en", en);
            catalog.set_fallback_chain(vec!["en".into()]);
            let _ = catalog.get(&locale, &key);
        }
    }
}
