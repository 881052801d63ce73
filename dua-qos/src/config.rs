//! Deployment-level tuning of preset depths.
//!
//! A JSON document can replace the default depth of individual presets
//! without touching the code that asks for them:
//!
//! ```json
//! { "depth_overrides": { "visualization/marker": 3, "reliable/scan": 10 } }
//! ```
//!
//! Depths passed explicitly by the caller always win over the document.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogError, PresetKey};
use crate::qos::QosConfiguration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub depth_overrides: BTreeMap<PresetKey, usize>,
}

impl CatalogConfig {
    pub fn with_depth(mut self, key: PresetKey, depth: usize) -> Self {
        self.depth_overrides.insert(key, depth);
        self
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// The document is not valid JSON or does not match the schema. Unknown
    /// presets in `depth_overrides` also land here, since keys are checked
    /// while deserializing.
    Parse(serde_json::Error),
    Catalog(CatalogError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read QoS catalog config: {}", e),
            Self::Parse(e) => write!(f, "Invalid QoS catalog config: {}", e),
            Self::Catalog(e) => write!(f, "Invalid QoS catalog config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Catalog(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<CatalogError> for ConfigError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

/// Preset lookup with the deployment's depth overrides applied.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        info!(
            overrides = config.depth_overrides.len(),
            "Loaded QoS catalog config"
        );
        Ok(Self::new(config))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Reading QoS catalog config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Builds the preset named by `key`.
    ///
    /// Depth resolution order: `depth` if given, then the configured
    /// override, then the preset's own default.
    pub fn profile(&self, key: PresetKey, depth: Option<usize>) -> QosConfiguration {
        let depth = depth.or_else(|| {
            let configured = self.config.depth_overrides.get(&key).copied();
            if let Some(d) = configured {
                debug!(%key, depth = d, "Applying configured depth override");
            }
            configured
        });
        key.build(depth)
    }

    /// Same as [`Catalog::profile`], parsing `family/category` first.
    pub fn profile_by_name(
        &self,
        name: &str,
        depth: Option<usize>,
    ) -> Result<QosConfiguration, ConfigError> {
        let key: PresetKey = name.parse()?;
        Ok(self.profile(key, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Family};
    use crate::presets::{reliable, visualization};

    fn marker() -> PresetKey {
        PresetKey::new(Family::Visualization, Category::Marker).unwrap()
    }

    #[test]
    fn test_empty_config_uses_preset_defaults() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog.profile(marker(), None), visualization::get_marker_qos(None));
    }

    #[test]
    fn test_override_applies_without_explicit_depth() {
        let catalog =
            Catalog::from_json(r#"{"depth_overrides": {"visualization/marker": 3}}"#).unwrap();
        assert_eq!(catalog.profile(marker(), None).depth, 3);
        assert_eq!(catalog.profile(marker(), Some(8)).depth, 8);

        let scan = PresetKey::new(Family::Reliable, Category::Scan).unwrap();
        assert_eq!(catalog.profile(scan, None), reliable::get_scan_qos(None));
    }

    #[test]
    fn test_override_on_keep_all_preset_is_ignored() {
        let datum = PresetKey::new(Family::Reliable, Category::Datum).unwrap();
        let catalog = Catalog::new(CatalogConfig::default().with_depth(datum, 42));
        assert_eq!(catalog.profile(datum, None), reliable::get_datum_qos(None));
    }

    #[test]
    fn test_profile_resolves_every_key() {
        let mut config = CatalogConfig::default();
        for key in crate::catalog::presets() {
            config = config.with_depth(key, 2);
        }
        let catalog = Catalog::new(config);
        for key in crate::catalog::presets() {
            assert_eq!(catalog.profile(key, None), key.build(Some(2)), "{key}");
            assert_eq!(catalog.profile(key, Some(6)), key.build(Some(6)), "{key}");
        }
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let err = Catalog::from_json(r#"{"depth_overrides": {"persistent/marker": 3}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("persistent"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Catalog::from_json(r#"{"depths": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_profile_by_name() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.profile_by_name("reliable/image", Some(2)).unwrap(),
            reliable::get_image_qos(Some(2))
        );
        assert!(matches!(
            catalog.profile_by_name("reliable/marker", None),
            Err(ConfigError::Catalog(CatalogError::Unsupported { .. }))
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = CatalogConfig::default().with_depth(marker(), 4);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"visualization/marker\": 4"));
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.config(), &config);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("dua_qos_missing_catalog.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(Catalog::from_file(&path), Err(ConfigError::Io(_))));
    }
}
