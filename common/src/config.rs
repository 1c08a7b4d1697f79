//! Timing and layout constants, overridable from a JSON document.
//!
//! Every field has a default, so a partial override such as
//! `{"banner_policy": "replace"}` only changes what it names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happens to a visible success banner when a new one is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerPolicy {
    /// Banners pile up and each leaves on its own timer.
    #[default]
    Stack,
    /// A form owns one banner slot; the newcomer replaces the old banner.
    Replace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Delay before a field's danger border reverts.
    pub border_revert_ms: u32,
    /// Lifetime of a success banner.
    pub success_dismiss_ms: u32,
    /// Delay before the simulated submission logs its record.
    pub submit_delay_ms: u32,
    /// Quiet period of the search box before it logs.
    pub search_debounce_ms: u32,
    /// How long a "Liked" post button stays highlighted.
    pub like_flash_ms: u32,
    /// How long "Load More" stays disabled after a click.
    pub load_more_cooldown_ms: u32,
    /// Viewports at or below this width get the mobile menu toggle.
    pub mobile_breakpoint_px: u32,
    pub banner_policy: BannerPolicy,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            border_revert_ms: 3000,
            success_dismiss_ms: 2500,
            submit_delay_ms: 1500,
            search_debounce_ms: 300,
            like_flash_ms: 500,
            load_more_cooldown_ms: 1000,
            mobile_breakpoint_px: 768,
            banner_policy: BannerPolicy::Stack,
        }
    }
}

impl FeedbackConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid feedback config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = FeedbackConfig::from_json("{}").unwrap();
        assert_eq!(config, FeedbackConfig::default());
        assert_eq!(config.border_revert_ms, 3000);
        assert_eq!(config.success_dismiss_ms, 2500);
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.banner_policy, BannerPolicy::Stack);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            FeedbackConfig::from_json(r#"{"banner_policy":"replace","search_debounce_ms":50}"#)
                .unwrap();
        assert_eq!(config.banner_policy, BannerPolicy::Replace);
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.mobile_breakpoint_px, 768);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = FeedbackConfig::from_json("{banner_policy:").unwrap_err();
        assert!(err.to_string().starts_with("invalid feedback config"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(FeedbackConfig::from_json(r#"{"banner_policy":"queue"}"#).is_err());
    }
}
