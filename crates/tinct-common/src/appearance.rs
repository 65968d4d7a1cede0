use serde::{Deserialize, Serialize};

/// Where the dark-mode flag comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Ask the platform.
    #[default]
    System,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AppearanceMode::Dark).unwrap(), "\"dark\"");
        let mode: AppearanceMode = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(mode, AppearanceMode::System);
    }
}
