use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    gesture::FingertipSampling,
};

/// Tunables for one tracking session. Every field has a default, so a TOML
/// file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub fingertip_sampling: FingertipSampling,
    /// Mean eye aspect ratio strictly below this counts as closed.
    pub blink_threshold: f32,
    /// Minimum change in pinch distance before a zoom fires.
    pub pinch_threshold: f32,
    pub zoom_gain: f32,
    /// Normalized-y to pixel factor for palm scrolling.
    pub scroll_gain: f32,
    pub voice_scroll_step: f32,
    /// Re-anchor the scroll on frames that are neither palm nor fist.
    pub refresh_anchor_on_interrupt: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fingertip_sampling: FingertipSampling::Range,
            blink_threshold: 0.2,
            pinch_threshold: 0.01,
            zoom_gain: 0.5,
            scroll_gain: 1000.0,
            voice_scroll_step: 100.0,
            refresh_anchor_on_interrupt: false,
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SessionConfig::from_toml("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SessionConfig::from_toml(
            r#"
            fingertip_sampling = "tips"
            scroll_gain = 500.0
            refresh_anchor_on_interrupt = true
            "#,
        )
        .unwrap();
        assert_eq!(config.fingertip_sampling, FingertipSampling::Tips);
        assert_eq!(config.scroll_gain, 500.0);
        assert!(config.refresh_anchor_on_interrupt);
        assert_eq!(config.blink_threshold, 0.2);
    }

    #[test]
    fn test_rejects_unknown_sampling() {
        let err = SessionConfig::from_toml(r#"fingertip_sampling = "knuckles""#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SessionConfig::load(Path::new("/nonexistent/gesture-pilot.toml")).unwrap_err();
        assert!(err.to_string().contains("gesture-pilot.toml"));
    }
}
