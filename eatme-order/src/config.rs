//! Site-wide configuration loaded from `site.json`.
//!
//! Every field has a default so a partial file only overrides what it names.

use crate::catalog::CatalogError;
use crate::deeplink::MessagingEndpoint;
use crate::message::MessageTemplate;
use serde::{Deserialize, Serialize};

/// Delays and durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub submit_delay_ms: u32,
    pub toast_ms: u32,
    pub toast_exit_ms: u32,
    pub tagline_start_ms: u32,
    pub tagline_interval_ms: u32,
    pub tagline_fade_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub easter_egg_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            toast_ms: 5000,
            toast_exit_ms: 300,
            tagline_start_ms: 2000,
            tagline_interval_ms: 4000,
            tagline_fade_ms: 500,
            counter_duration_ms: 2000,
            counter_steps: 50,
            easter_egg_ms: 2000,
        }
    }
}

impl Timings {
    /// Interval between counter ticks.
    #[must_use]
    pub fn counter_step_ms(&self) -> u32 {
        self.counter_duration_ms / self.counter_steps.max(1)
    }
}

/// Tuning for the cosmetic effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
    pub parallax_factor: f64,
    /// Scroll offset past which the navbar turns solid
    pub navbar_scroll_threshold: f64,
    /// Fixed header height subtracted from smooth-scroll targets
    pub header_offset: f64,
    pub reveal_threshold: f64,
    pub stats_threshold: f64,
    pub stagger_step_s: f64,
    pub hero_stagger_s: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            parallax_factor: 0.1,
            navbar_scroll_threshold: 50.0,
            header_offset: 80.0,
            reveal_threshold: 0.1,
            stats_threshold: 0.5,
            stagger_step_s: 0.1,
            hero_stagger_s: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub messaging: MessagingEndpoint,
    pub message: MessageTemplate,
    pub taglines: Vec<String>,
    pub timings: Timings,
    pub effects: EffectsConfig,
    pub konami: Vec<String>,
    /// Console log level name (`error` through `trace`, or `off`)
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: String::from("EAT ME"),
            messaging: MessagingEndpoint::default(),
            message: MessageTemplate::default(),
            taglines: [
                "Don't resist temptation",
                "Indulge your desires",
                "Feed your cravings",
                "Taste the forbidden",
            ]
            .map(String::from)
            .to_vec(),
            timings: Timings::default(),
            effects: EffectsConfig::default(),
            konami: [
                "ArrowUp",
                "ArrowUp",
                "ArrowDown",
                "ArrowDown",
                "ArrowLeft",
                "ArrowRight",
                "ArrowLeft",
                "ArrowRight",
                "b",
                "a",
            ]
            .map(String::from)
            .to_vec(),
            log_level: String::from("info"),
        }
    }
}

impl SiteConfig {
    /// Parse site configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}
