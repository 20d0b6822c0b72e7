//! Convention configuration tree
//!
//! The tree is plain data: `general` settings plus
//! `conventions: {category: {convention: {enabled, params}}}`. A missing
//! category or entry reads as disabled. Parameters are decoded on demand
//! into the typed structs of [`params`], falling back to their defaults.

pub mod params;
pub mod preferences;

pub use preferences::Preferences;

use crate::conventions::ConventionId;
use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;
use types::{BalancedShapes, DistributionMode};

const DEFAULT_CONVENTIONS: &str = include_str!("../../conventions/default.yaml");

/// Settings that are not tied to a single convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub include_5422_in_balanced: bool,
    pub distribution_points: DistributionMode,
    pub predictor_min_confidence: f32,
    /// Treat an opposing 1♣ opening as strong and artificial.
    pub opponents_play_strong_club: bool,
    pub one_level_min_length: u8,
    pub two_level_min_length: u8,
    pub one_level_overcall_min_hcp: u8,
    pub two_level_overcall_min_hcp: u8,
    pub notrump_overcall_min_hcp: u8,
    pub notrump_overcall_max_hcp: u8,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            include_5422_in_balanced: false,
            distribution_points: DistributionMode::Shortness,
            predictor_min_confidence: 0.65,
            opponents_play_strong_club: false,
            one_level_min_length: 4,
            two_level_min_length: 5,
            one_level_overcall_min_hcp: 6,
            two_level_overcall_min_hcp: 10,
            notrump_overcall_min_hcp: 15,
            notrump_overcall_max_hcp: 18,
        }
    }
}

/// One convention's switch and raw parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConventionEntry {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "serde_yaml::Mapping::is_empty")]
    pub params: serde_yaml::Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConventionConfig {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub conventions: BTreeMap<String, BTreeMap<String, ConventionEntry>>,
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self::from_yaml_str(DEFAULT_CONVENTIONS)
            .expect("embedded default conventions must parse")
    }
}

impl ConventionConfig {
    /// A tree with every convention disabled.
    pub fn empty() -> Self {
        Self {
            general: GeneralSettings::default(),
            conventions: BTreeMap::new(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: ConventionConfig = serde_yaml::from_str(yaml)?;
        config.resolve_exclusive_groups();
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn entry(&self, id: ConventionId) -> Option<&ConventionEntry> {
        self.conventions
            .get(id.category().as_str())?
            .get(id.as_str())
    }

    fn entry_mut(&mut self, id: ConventionId) -> &mut ConventionEntry {
        self.conventions
            .entry(id.category().as_str().to_string())
            .or_default()
            .entry(id.as_str().to_string())
            .or_default()
    }

    pub fn is_enabled(&self, id: ConventionId) -> bool {
        self.entry(id).is_some_and(|entry| entry.enabled)
    }

    /// Enable `id`, disabling the other members of its exclusivity group.
    pub fn enable(&mut self, id: ConventionId) {
        if let Some(group) = id.group() {
            for &sibling in group.members() {
                if sibling != id && self.is_enabled(sibling) {
                    self.entry_mut(sibling).enabled = false;
                }
            }
        }
        self.entry_mut(id).enabled = true;
    }

    pub fn disable(&mut self, id: ConventionId) {
        if self.entry(id).is_some() {
            self.entry_mut(id).enabled = false;
        }
    }

    pub fn set_enabled(&mut self, id: ConventionId, enabled: bool) {
        if enabled {
            self.enable(id);
        } else {
            self.disable(id);
        }
    }

    /// Typed parameters for `id`. Missing params read as the defaults;
    /// malformed params are logged and also read as the defaults.
    pub fn params<P>(&self, id: ConventionId) -> P
    where
        P: DeserializeOwned + Default,
    {
        let Some(entry) = self.entry(id) else {
            return P::default();
        };
        if entry.params.is_empty() {
            return P::default();
        }
        match serde_yaml::from_value(serde_yaml::Value::Mapping(entry.params.clone())) {
            Ok(params) => params,
            Err(error) => {
                warn!(convention = %id, %error, "malformed convention params, using defaults");
                P::default()
            }
        }
    }

    pub fn set_param(&mut self, id: ConventionId, key: &str, value: impl Into<serde_yaml::Value>) {
        self.entry_mut(id)
            .params
            .insert(serde_yaml::Value::String(key.to_string()), value.into());
    }

    /// Apply persisted preferences on top of this tree.
    pub fn apply(&mut self, preferences: &Preferences) {
        for (name, &enabled) in &preferences.conventions {
            match name.parse::<ConventionId>() {
                Ok(id) => self.set_enabled(id, enabled),
                Err(_) => warn!(convention = %name, "ignoring preference for unknown convention"),
            }
        }
        if let Some(general) = &preferences.general {
            self.general = general.clone();
        }
    }

    pub fn balanced_shapes(&self) -> BalancedShapes {
        BalancedShapes::with_5422(self.general.include_5422_in_balanced)
    }

    /// Enabled conventions in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = ConventionId> + '_ {
        ConventionId::ALL
            .into_iter()
            .filter(move |&id| self.is_enabled(id))
    }

    fn resolve_exclusive_groups(&mut self) {
        for id in ConventionId::ALL {
            let Some(group) = id.group() else { continue };
            if !self.is_enabled(id) {
                continue;
            }
            let kept = group
                .members()
                .iter()
                .copied()
                .find(|&member| self.is_enabled(member));
            if let Some(kept) = kept.filter(|&kept| kept != id) {
                warn!(
                    convention = %id,
                    kept = %kept,
                    "mutually exclusive conventions enabled, disabling the later one"
                );
                self.entry_mut(id).enabled = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::params::{KeyCardEncoding, KeyCardParams, TakeoutDoubleParams};
    use super::*;

    #[test]
    fn test_default_tree_parses() {
        let config = ConventionConfig::default();
        assert!(config.is_enabled(ConventionId::StrongTwoClubs));
        assert!(config.is_enabled(ConventionId::Stayman));
        assert!(config.is_enabled(ConventionId::Dont));
        assert!(!config.is_enabled(ConventionId::Cappelletti));
        assert!(config.is_enabled(ConventionId::Blackwood));
        assert!(!config.is_enabled(ConventionId::RomanKeyCard));
        assert_eq!(config.general, GeneralSettings::default());
    }

    #[test]
    fn test_missing_entries_are_disabled() {
        let config = ConventionConfig::from_yaml_str("conventions: {}").unwrap();
        for id in ConventionId::ALL {
            assert!(!config.is_enabled(id));
        }
        let params: TakeoutDoubleParams = config.params(ConventionId::TakeoutDouble);
        assert_eq!(params, TakeoutDoubleParams::default());
    }

    #[test]
    fn test_enable_disables_group_siblings() {
        let mut config = ConventionConfig::default();
        config.enable(ConventionId::Cappelletti);
        assert!(config.is_enabled(ConventionId::Cappelletti));
        assert!(!config.is_enabled(ConventionId::Dont));
        assert!(!config.is_enabled(ConventionId::Landy));

        config.enable(ConventionId::RomanKeyCard);
        assert!(!config.is_enabled(ConventionId::Blackwood));
        assert!(config.is_enabled(ConventionId::Gerber));
    }

    #[test]
    fn test_loading_conflicting_group_keeps_first() {
        let yaml = r#"
conventions:
  defenses:
    landy: { enabled: true }
    dont: { enabled: true }
"#;
        let config = ConventionConfig::from_yaml_str(yaml).unwrap();
        assert!(config.is_enabled(ConventionId::Dont));
        assert!(!config.is_enabled(ConventionId::Landy));
    }

    #[test]
    fn test_malformed_params_read_as_defaults() {
        let yaml = r#"
conventions:
  competitive_actions:
    takeout_double:
      enabled: true
      params: { min_hcp: "lots" }
"#;
        let config = ConventionConfig::from_yaml_str(yaml).unwrap();
        let params: TakeoutDoubleParams = config.params(ConventionId::TakeoutDouble);
        assert_eq!(params, TakeoutDoubleParams::default());
    }

    #[test]
    fn test_set_param() {
        let mut config = ConventionConfig::default();
        config.set_param(ConventionId::RomanKeyCard, "encoding", "3014");
        let params: KeyCardParams = config.params(ConventionId::RomanKeyCard);
        assert_eq!(params.encoding, KeyCardEncoding::ThirtyFourteen);
    }

    #[test]
    fn test_yaml_round_trip_preserves_switches() {
        let mut config = ConventionConfig::default();
        config.disable(ConventionId::Michaels);
        let reloaded = ConventionConfig::from_yaml_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }
}
