//! Supported locales, fallback resolution and locale-prefixed path routing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("locale set is empty")]
    Empty,
    #[error("locale {0:?} is listed more than once")]
    Duplicate(String),
    #[error("default locale {0:?} is not in the supported set")]
    DefaultNotSupported(String),
    #[error("unknown locale scheme {0:?} (expected \"regional\" or \"language\")")]
    UnknownScheme(String),
}

/// Which locale list the site routes with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleScheme {
    /// Country-qualified tags: `en-LR`, `en-SL`, `en-US`, `fr-FR`.
    #[default]
    Regional,
    /// Bare language tags: `en`, `fr`.
    Language,
}

impl LocaleScheme {
    pub fn config(self) -> LocaleConfig {
        match self {
            LocaleScheme::Regional => LocaleConfig::regional(),
            LocaleScheme::Language => LocaleConfig::language(),
        }
    }
}

impl FromStr for LocaleScheme {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regional" => Ok(LocaleScheme::Regional),
            "language" => Ok(LocaleScheme::Language),
            other => Err(LocaleError::UnknownScheme(other.to_string())),
        }
    }
}

/// Ordered set of supported locale tags plus the default.
///
/// Fixed once built; `default_locale` is always a member of `locales`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    locales: Vec<String>,
    default_locale: String,
}

impl LocaleConfig {
    pub fn new<I, S>(locales: I, default_locale: impl Into<String>) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for tag in locales {
            let tag = tag.into();
            if list.contains(&tag) {
                return Err(LocaleError::Duplicate(tag));
            }
            list.push(tag);
        }
        if list.is_empty() {
            return Err(LocaleError::Empty);
        }
        let default_locale = default_locale.into();
        if !list.contains(&default_locale) {
            return Err(LocaleError::DefaultNotSupported(default_locale));
        }
        Ok(Self {
            locales: list,
            default_locale,
        })
    }

    /// Liberia-first regional routing used by the live site.
    pub fn regional() -> Self {
        Self::from_static(&["en-LR", "en-SL", "en-US", "fr-FR"], "en-LR")
    }

    /// Language-only routing (`/en`, `/fr`).
    pub fn language() -> Self {
        Self::from_static(&["en", "fr"], "en")
    }

    fn from_static(locales: &[&str], default_locale: &str) -> Self {
        Self {
            locales: locales.iter().map(|s| s.to_string()).collect(),
            default_locale: default_locale.to_string(),
        }
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.locales.iter().any(|l| l == tag)
    }

    /// The requested tag if supported, otherwise the default. Exact,
    /// case-sensitive match.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(tag) if self.is_supported(tag) => tag,
            _ => &self.default_locale,
        }
    }
}

/// What the locale middleware does with a request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleRoute {
    /// Not a page route (API, build assets, files); leave it alone.
    Bypass,
    /// Already locale-prefixed. `rest` keeps its leading `/`.
    Localized { locale: String, rest: String },
    /// Needs a locale prefix.
    Redirect { location: String },
}

impl fmt::Display for LocaleRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleRoute::Bypass => f.write_str("bypass"),
            LocaleRoute::Localized { locale, rest } => write!(f, "localized {locale} {rest}"),
            LocaleRoute::Redirect { location } => write!(f, "redirect {location}"),
        }
    }
}

impl LocaleConfig {
    /// Route a request path. `preferred` is whatever locale hint the client
    /// sent (cookie, `Accept-Language`, navigator); unsupported hints fall
    /// back to the default.
    pub fn route_path(&self, path: &str, preferred: Option<&str>) -> LocaleRoute {
        let trimmed = path.trim_start_matches('/');
        if trimmed.starts_with("api") || trimmed.starts_with("_next") || trimmed.contains('.') {
            return LocaleRoute::Bypass;
        }

        let (first, rest) = match trimmed.split_once('/') {
            Some((first, rest)) => (first, format!("/{rest}")),
            None => (trimmed, "/".to_string()),
        };
        if self.is_supported(first) {
            return LocaleRoute::Localized {
                locale: first.to_string(),
                rest,
            };
        }

        let locale = self.resolve(preferred);
        let location = if trimmed.is_empty() {
            format!("/{locale}")
        } else {
            format!("/{locale}/{trimmed}")
        };
        LocaleRoute::Redirect { location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn presets_hold_their_default() {
        for cfg in [LocaleConfig::regional(), LocaleConfig::language()] {
            assert!(cfg.is_supported(cfg.default_locale()));
        }
        assert_eq!(LocaleConfig::regional().locales(), ["en-LR", "en-SL", "en-US", "fr-FR"]);
        assert_eq!(LocaleConfig::language().default_locale(), "en");
    }

    #[test]
    fn new_rejects_bad_sets() {
        assert_eq!(
            LocaleConfig::new(Vec::<String>::new(), "en"),
            Err(LocaleError::Empty)
        );
        assert_eq!(
            LocaleConfig::new(["en", "fr", "en"], "en"),
            Err(LocaleError::Duplicate("en".into()))
        );
        assert_eq!(
            LocaleConfig::new(["en", "fr"], "de"),
            Err(LocaleError::DefaultNotSupported("de".into()))
        );
        assert!(LocaleConfig::new(["en", "fr"], "fr").is_ok());
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let cfg = LocaleConfig::regional();
        assert_eq!(cfg.resolve(Some("xx")), "en-LR");
        assert_eq!(cfg.resolve(None), "en-LR");
        assert_eq!(cfg.resolve(Some("fr-FR")), "fr-FR");
        assert_eq!(cfg.resolve(Some("en-SL")), "en-SL");
        // Case matters.
        assert_eq!(cfg.resolve(Some("fr-fr")), "en-LR");
        // Bare language is not a member of the regional set.
        assert_eq!(cfg.resolve(Some("fr")), "en-LR");
    }

    #[test]
    fn scheme_parses_from_config_strings() {
        assert_eq!("regional".parse::<LocaleScheme>(), Ok(LocaleScheme::Regional));
        assert_eq!("language".parse::<LocaleScheme>(), Ok(LocaleScheme::Language));
        assert!("both".parse::<LocaleScheme>().is_err());
        assert_eq!(LocaleScheme::Language.config(), LocaleConfig::language());
    }

    #[test]
    fn middleware_skips_api_and_assets() {
        let cfg = LocaleConfig::regional();
        for path in ["/api/contact", "/_next/static/chunk.js", "/favicon.ico", "/img/logo.svg"] {
            assert_eq!(cfg.route_path(path, None), LocaleRoute::Bypass, "{path}");
        }
    }

    #[test]
    fn prefixed_paths_pass_through() {
        let cfg = LocaleConfig::regional();
        assert_eq!(
            cfg.route_path("/fr-FR", None),
            LocaleRoute::Localized {
                locale: "fr-FR".into(),
                rest: "/".into()
            }
        );
        assert_eq!(
            cfg.route_path("/en-SL/about/team", Some("fr-FR")),
            LocaleRoute::Localized {
                locale: "en-SL".into(),
                rest: "/about/team".into()
            }
        );
    }

    #[test]
    fn unprefixed_paths_redirect() {
        let cfg = LocaleConfig::regional();
        assert_eq!(
            cfg.route_path("/", None),
            LocaleRoute::Redirect {
                location: "/en-LR".into()
            }
        );
        assert_eq!(
            cfg.route_path("/careers", Some("fr-FR")),
            LocaleRoute::Redirect {
                location: "/fr-FR/careers".into()
            }
        );
        assert_eq!(
            cfg.route_path("/careers", Some("de-DE")),
            LocaleRoute::Redirect {
                location: "/en-LR/careers".into()
            }
        );
    }
}
