//! Per-locale message catalogs.
//!
//! A catalog is a flat `key -> string` map. Files on disk may nest objects;
//! nesting flattens to dotted keys (`{"nav": {"home": "Home"}}` becomes
//! `nav.home`).

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::locale::LocaleConfig;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no catalog for locale {0:?}")]
    Missing(String),
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog for {locale:?} is not valid JSON: {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for {locale:?} must be a JSON object")]
    NotAnObject { locale: String },
    #[error("catalog for {locale:?} has a non-string value at {key:?}")]
    InvalidEntry { locale: String, key: String },
    #[error("catalog for {locale:?} defines {key:?} more than once")]
    DuplicateKey { locale: String, key: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    messages: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>, messages: BTreeMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            messages,
        }
    }

    pub fn from_json(locale: impl Into<String>, raw: &str) -> Result<Self, CatalogError> {
        let locale = locale.into();
        let value: Value = serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
            locale: locale.clone(),
            source,
        })?;
        let Value::Object(root) = value else {
            return Err(CatalogError::NotAnObject { locale });
        };

        let mut messages = BTreeMap::new();
        let mut stack: Vec<(String, Value)> = root.into_iter().rev().collect();
        while let Some((key, value)) = stack.pop() {
            match value {
                // A flat "a.b" and a nested {"a": {"b"}} collide after flattening.
                Value::String(text) => match messages.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(text);
                    }
                    Entry::Occupied(slot) => {
                        let key = slot.key().clone();
                        return Err(CatalogError::DuplicateKey { locale, key });
                    }
                },
                Value::Object(children) => {
                    stack.extend(
                        children
                            .into_iter()
                            .rev()
                            .map(|(child, v)| (format!("{key}.{child}"), v)),
                    );
                }
                _ => return Err(CatalogError::InvalidEntry { locale, key }),
            }
        }

        Ok(Self { locale, messages })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Message for `key`, or the key itself so a gap shows up on the page
    /// instead of rendering nothing.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Message for `key`, or `fallback`.
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Keys present in `reference` but not here.
    pub fn missing_from<'a>(&self, reference: &'a Catalog) -> Vec<&'a str> {
        reference
            .keys()
            .filter(|key| !self.messages.contains_key(*key))
            .collect()
    }
}

/// Keyed lookup of catalogs by locale tag.
pub trait CatalogSource {
    fn load(&self, locale: &str) -> Result<Catalog, CatalogError>;
}

/// `<root>/<locale>.json` on disk.
#[derive(Clone, Debug)]
pub struct DirCatalogSource {
    root: PathBuf,
}

impl DirCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{locale}.json"))
    }
}

impl CatalogSource for DirCatalogSource {
    fn load(&self, locale: &str) -> Result<Catalog, CatalogError> {
        let path = self.path_for(locale);
        if !path.exists() {
            return Err(CatalogError::Missing(locale.to_string()));
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        Catalog::from_json(locale, &raw)
    }
}

/// Catalogs compiled into the binary, e.g. with `include_str!`.
#[derive(Clone, Copy, Debug)]
pub struct EmbeddedCatalogs {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedCatalogs {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn locales(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(locale, _)| *locale)
    }
}

impl CatalogSource for EmbeddedCatalogs {
    fn load(&self, locale: &str) -> Result<Catalog, CatalogError> {
        let (_, raw) = self
            .entries
            .iter()
            .find(|(tag, _)| *tag == locale)
            .ok_or_else(|| CatalogError::Missing(locale.to_string()))?;
        Catalog::from_json(locale, raw)
    }
}

/// Resolve `requested` against `config` and load that locale's catalog.
pub fn load_catalog<S: CatalogSource + ?Sized>(
    config: &LocaleConfig,
    source: &S,
    requested: Option<&str>,
) -> Result<Catalog, CatalogError> {
    let locale = config.resolve(requested);
    tracing::debug!(requested = ?requested, %locale, "loading catalog");
    source.load(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const EN: &str = r#"{"nav": {"home": "Home", "jobs": "Careers"}, "footer.tagline": "Advisory built for pressure."}"#;
    const FR: &str = r#"{"nav": {"home": "Accueil"}}"#;

    #[test]
    fn nested_objects_flatten_to_dotted_keys() {
        let catalog = Catalog::from_json("en", EN).expect("parse");
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["footer.tagline", "nav.home", "nav.jobs"]);
        assert_eq!(catalog.get("nav.jobs"), Some("Careers"));
    }

    #[test]
    fn text_falls_back_to_key() {
        let catalog = Catalog::from_json("en", EN).expect("parse");
        assert_eq!(catalog.text("nav.home"), "Home");
        assert_eq!(catalog.text("nav.unknown"), "nav.unknown");
        assert_eq!(catalog.text_or("nav.unknown", "Fallback"), "Fallback");
    }

    #[test]
    fn rejects_non_string_leaves() {
        let err = Catalog::from_json("en", r#"{"nav": {"count": 3}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { ref key, .. } if key == "nav.count"));
        assert!(matches!(
            Catalog::from_json("en", "[]"),
            Err(CatalogError::NotAnObject { .. })
        ));
        assert!(matches!(
            Catalog::from_json("en", "{"),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn flat_and_nested_spellings_of_a_key_collide() {
        let err = Catalog::from_json("en", r#"{"nav.home": "A", "nav": {"home": "B"}}"#)
            .unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicateKey { ref key, .. } if key == "nav.home"),
            "{err}"
        );
        assert!(Catalog::from_json("en", r#"{"nav.home": "A", "nav": {"jobs": "B"}}"#).is_ok());
    }

    #[test]
    fn missing_keys_against_reference() {
        let en = Catalog::from_json("en", EN).expect("en");
        let fr = Catalog::from_json("fr", FR).expect("fr");
        assert_eq!(fr.missing_from(&en), vec!["footer.tagline", "nav.jobs"]);
        assert!(en.missing_from(&fr).is_empty());
    }

    #[test]
    fn embedded_source_resolves_then_loads() {
        static ENTRIES: &[(&str, &str)] = &[("en", EN), ("fr", FR)];
        let source = EmbeddedCatalogs::new(ENTRIES);
        let config = LocaleConfig::language();

        let fr = load_catalog(&config, &source, Some("fr")).expect("fr");
        assert_eq!(fr.locale(), "fr");
        let fallback = load_catalog(&config, &source, Some("pt")).expect("default");
        assert_eq!(fallback.locale(), "en");
        assert!(matches!(source.load("de"), Err(CatalogError::Missing(_))));
    }

    #[test]
    fn dir_source_reads_locale_json() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("en-LR.json"), EN).expect("write");
        let source = DirCatalogSource::new(temp.path());

        let catalog = source.load("en-LR").expect("load");
        assert_eq!(catalog.text("nav.home"), "Home");
        assert!(matches!(source.load("fr-FR"), Err(CatalogError::Missing(tag)) if tag == "fr-FR"));
    }
}
