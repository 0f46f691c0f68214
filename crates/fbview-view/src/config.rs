//! Display configuration for the response view

use serde::{Deserialize, Serialize};

/// Pass-through display hints for the host's presentation layer
///
/// None of these influence filtering or reconciliation; they ride along so a
/// host can persist and restore its view setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Group responses by team
    pub group_by_team: bool,
    /// Show a placeholder row for missing responses
    pub indicate_missing_responses: bool,
    /// Show the giver column
    pub show_giver: bool,
    /// Show the recipient column
    pub show_recipient: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_by_team: true,
            indicate_missing_responses: true,
            show_giver: true,
            show_recipient: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert!(config.group_by_team);
        assert!(config.indicate_missing_responses);
        assert!(config.show_giver);
        assert!(config.show_recipient);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DisplayConfig {
            show_recipient: false,
            ..Default::default()
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("show_recipient = false"));

        let config2: DisplayConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DisplayConfig = toml::from_str("group_by_team = false").unwrap();
        assert!(!config.group_by_team);
        assert!(config.show_giver);
    }
}
