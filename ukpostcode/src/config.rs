use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// UK-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `postcode_core::Config` (flattened via serde)
/// - The six UK postcode shapes as the default shape list
///
/// # Example
///
/// ```rust
/// use ukpostcode::UkPostcodeConfig;
///
/// let config = UkPostcodeConfig::default();
/// assert_eq!(config.base().shapes.len(), 6);
/// let base_config = config.into_base();
/// // Use base_config with PostcodeEngine::from_config()
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UkPostcodeConfig {
    /// Base configuration fields (auto_space, restore_on_backspace, shapes)
    #[serde(flatten)]
    pub base: postcode_core::Config,
}

impl Default for UkPostcodeConfig {
    fn default() -> Self {
        let mut base = postcode_core::Config::default();
        base.shapes = crate::uk_postcode_formats();
        Self { base }
    }
}

impl UkPostcodeConfig {
    /// Load a TOML file. Keys left out keep their defaults; a missing or
    /// empty `shapes` list means the UK shapes. Shapes are validated here.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config
            .base
            .pattern_table()
            .with_context(|| format!("invalid shapes in {}", path.display()))?;
        Ok(config)
    }

    /// Parse a TOML string, filling in the UK shapes when none are given.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        if config.base.shapes.is_empty() {
            config.base.shapes = crate::uk_postcode_formats();
        }
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert this UK config into the base config for use with `PostcodeEngine`
    pub fn into_base(self) -> postcode_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &postcode_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut postcode_core::Config {
        &mut self.base
    }
}
