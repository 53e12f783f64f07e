//! Site data embedded into the WASM binary.

use eatme_order::{CatalogError, Menu, SiteConfig, SiteDataSource};

const MENU_JSON: &str = include_str!("../static/assets/data/menu.json");
const SITE_JSON: &str = include_str!("../static/assets/data/site.json");

/// Loads the menu and site configuration compiled into the binary.
pub struct EmbeddedSiteData;

impl SiteDataSource for EmbeddedSiteData {
    fn load_menu(&self) -> Result<Menu, CatalogError> {
        Menu::from_json(MENU_JSON)
    }

    fn load_site_config(&self) -> Result<SiteConfig, CatalogError> {
        SiteConfig::from_json(SITE_JSON)
    }
}

/// Everything the page renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteData {
    pub menu: Menu,
    pub config: SiteConfig,
}

impl SiteData {
    /// Load both data files, logging failures and falling back to an empty
    /// menu or the default configuration.
    #[must_use]
    pub fn load(source: &impl SiteDataSource) -> Self {
        let menu = source.load_menu().unwrap_or_else(|e| {
            log::error!("Failed to load menu data: {e}");
            Menu::default()
        });
        let config = source.load_site_config().unwrap_or_else(|e| {
            log::error!("Failed to load site config: {e}");
            SiteConfig::default()
        });
        Self { menu, config }
    }

    /// Console log filter named by the site config; unknown names fall back
    /// to `Info`.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        self.config.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level {:?}; using info", self.config.log_level);
            log::LevelFilter::Info
        })
    }
}
