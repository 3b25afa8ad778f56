use log::{warn, Level};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::reveal::RevealOptions;

/// Id of the optional `<script type="application/json">` block in index.html
/// that overrides the defaults below.
pub const SITE_CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub stats: StatsConfig,
    pub fade_in: FadeInConfig,
    pub grid: GridConfig,
    pub typing: TypingConfig,
    pub nav: NavConfig,
    /// Fraction of the window scroll applied to the hero particles.
    pub parallax_factor: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stats: StatsConfig::default(),
            fade_in: FadeInConfig::default(),
            grid: GridConfig::default(),
            typing: TypingConfig::default(),
            nav: NavConfig::default(),
            parallax_factor: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub tick_interval_ms: u32,
    pub steps: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            root_margin: "0px".to_string(),
            tick_interval_ms: 30,
            steps: 50,
        }
    }
}

impl StatsConfig {
    pub fn reveal_options(&self) -> RevealOptions {
        reveal_or_default(self.threshold, &self.root_margin)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: f64,
    pub transition: String,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            offset_px: 20.0,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

impl FadeInConfig {
    pub fn reveal_options(&self) -> RevealOptions {
        reveal_or_default(self.threshold, &self.root_margin)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_size: f64,
    pub base_alpha: f64,
    pub alpha_swing: f64,
    pub sway_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            base_alpha: 0.1,
            alpha_swing: 0.05,
            sway_px: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub char_interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            char_interval_ms: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Distance below the top of the viewport used to pick the active section.
    pub section_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_offset_px: 100.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        RevealOptions::new(self.stats.threshold, self.stats.root_margin.as_str())?;
        RevealOptions::new(self.fade_in.threshold, self.fade_in.root_margin.as_str())?;
        if self.stats.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.stats.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("counter tick"));
        }
        if self.typing.char_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("typing"));
        }
        Ok(())
    }

    /// Reads the overrides embedded in the host page, falling back to the
    /// defaults when the block is absent or unusable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SITE_CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring #{}: {}", SITE_CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

fn reveal_or_default(threshold: f64, root_margin: &str) -> RevealOptions {
    RevealOptions::new(threshold, root_margin).unwrap_or_else(|e| {
        warn!("{}, using default reveal options", e);
        RevealOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.stats.threshold, 0.5);
        assert_eq!(config.stats.tick_interval_ms, 30);
        assert_eq!(config.stats.steps, 50);
        assert_eq!(config.fade_in.threshold, 0.1);
        assert_eq!(config.fade_in.root_margin, "0px 0px -100px 0px");
        assert_eq!(config.grid.cell_size, 50.0);
        assert_eq!(config.typing.char_interval_ms, 50);
        assert_eq!(config.nav.section_offset_px, 100.0);
        assert_eq!(config.parallax_factor, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            SiteConfig::from_json(r#"{"stats": {"tick_interval_ms": 20}, "parallax_factor": 0.5}"#)
                .unwrap();
        assert_eq!(config.stats.tick_interval_ms, 20);
        assert_eq!(config.stats.steps, 50);
        assert_eq!(config.stats.threshold, 0.5);
        assert_eq!(config.parallax_factor, 0.5);
        assert_eq!(config.fade_in, FadeInConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            SiteConfig::from_json("{\"stats\": "),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_thresholds_are_rejected() {
        for bad in ["0", "1.5", "-0.2"] {
            let raw = format!(r#"{{"stats": {{"threshold": {bad}}}}}"#);
            assert!(
                matches!(
                    SiteConfig::from_json(&raw),
                    Err(ConfigError::ThresholdOutOfRange(_))
                ),
                "threshold {bad} accepted"
            );
        }
        assert!(SiteConfig::from_json(r#"{"fade_in": {"threshold": 1.0}}"#).is_ok());
    }

    #[test]
    fn zero_steps_and_intervals_are_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"stats": {"steps": 0}}"#),
            Err(ConfigError::ZeroSteps)
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"typing": {"char_interval_ms": 0}}"#),
            Err(ConfigError::ZeroInterval("typing"))
        ));
    }

    #[test]
    fn reveal_options_follow_config() {
        let config = SiteConfig::default();
        let options = config.stats.reveal_options();
        assert_eq!(options.threshold(), 0.5);
        assert_eq!(options.root_margin(), "0px");
    }
}
