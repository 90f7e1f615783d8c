//! Startup: configuration, locale routing, catalog selection.

use tatcg_core::catalog::{Catalog, CatalogSource, EmbeddedCatalogs};
use tatcg_core::{LocaleConfig, LocaleRoute, SiteConfig};

const SITE_TOML: &str = include_str!("../Site.toml");

static CATALOGS: EmbeddedCatalogs = EmbeddedCatalogs::new(&[
    ("en-LR", include_str!("../../messages/en-LR.json")),
    ("en-SL", include_str!("../../messages/en-SL.json")),
    ("en-US", include_str!("../../messages/en-US.json")),
    ("fr-FR", include_str!("../../messages/fr-FR.json")),
    ("en", include_str!("../../messages/en.json")),
    ("fr", include_str!("../../messages/fr.json")),
]);

pub fn site_config() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Site.toml rejected, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// Locale to render in, and the URL to swap in if the path lacked a prefix.
#[derive(Debug, PartialEq, Eq)]
pub struct BootLocale {
    pub locale: String,
    pub replace_url: Option<String>,
}

pub fn boot_locale(locales: &LocaleConfig, path: &str, preferred: Option<&str>) -> BootLocale {
    match locales.route_path(path, preferred) {
        LocaleRoute::Localized { locale, .. } => BootLocale {
            locale,
            replace_url: None,
        },
        LocaleRoute::Redirect { location } => BootLocale {
            locale: locales.resolve(preferred).to_string(),
            replace_url: Some(location),
        },
        LocaleRoute::Bypass => BootLocale {
            locale: locales.resolve(preferred).to_string(),
            replace_url: None,
        },
    }
}

/// Catalog for `locale`, falling back to the default locale and then to an
/// empty catalog so the page still renders with raw keys.
pub fn catalog_for(locales: &LocaleConfig, locale: &str) -> Catalog {
    CATALOGS
        .load(locale)
        .or_else(|e| {
            tracing::warn!("{}; falling back to {}", e, locales.default_locale());
            CATALOGS.load(locales.default_locale())
        })
        .unwrap_or_else(|e| {
            tracing::error!("{}", e);
            Catalog::new(locale, Default::default())
        })
}
