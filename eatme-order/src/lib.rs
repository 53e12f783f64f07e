//! EAT ME order engine
//!
//! Platform-agnostic logic behind the EAT ME menu site: price parsing and
//! totals, the order selection, the order message and its messaging deep link,
//! the menu catalog and the arithmetic behind the site's cosmetic effects.
//! This crate has no DOM or browser dependencies.

pub mod addons;
pub mod catalog;
pub mod config;
pub mod deeplink;
pub mod effects;
pub mod message;
pub mod numbers;
pub mod pricing;
pub mod selection;

// Re-export commonly used types
pub use addons::{AddOn, AddOnCatalog, AddOnId, default_label};
pub use catalog::{CatalogError, CategoryFilter, ItemImage, Menu, MenuCategory, MenuItem, MenuSection};
pub use config::{EffectsConfig, SiteConfig, Timings};
pub use deeplink::{MessagingEndpoint, decode_message};
pub use effects::{
    CounterTween, KeySequenceDetector, ParticleSpec, Rotation, particle_field,
};
pub use message::{MessageTemplate, format_order_message};
pub use pricing::{compute_total, format_price, parse_price, parse_price_or_zero};
pub use selection::{MenuEntry, OrderQuote, Quantity, Selection, SelectionState};

/// Source of the static site data.
///
/// The web crate embeds the JSON files in the binary; tests and tools can
/// read them from disk or build them in memory.
pub trait SiteDataSource {
    /// Load the menu catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu data cannot be read or fails validation.
    fn load_menu(&self) -> Result<Menu, CatalogError>;

    /// Load the site configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_site_config(&self) -> Result<SiteConfig, CatalogError>;
}
