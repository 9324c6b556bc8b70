use serde::{Deserialize, Serialize};

/// Application settings from `Rehbar Settings.yaml`, overridable through
/// `REHBAR_*` environment variables.
///
/// Every field is defaulted so a missing or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for rotating log files
    pub log_dir: String,

    /// File name prefix for log files
    pub log_prefix: String,

    pub debug_mode: bool,

    /// Mirror log output to the console
    pub console_output: bool,

    /// Where the rendered page is written
    pub output_path: String,

    pub page_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            log_prefix: "rehbar".to_string(),
            debug_mode: false,
            console_output: true,
            output_path: "site/index.html".to_string(),
            page_title: "Rehbar - App for people".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_dir, "logs");
        assert_eq!(settings.log_prefix, "rehbar");
        assert!(!settings.debug_mode);
        assert!(settings.console_output);
        assert_eq!(settings.output_path, "site/index.html");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml_ng::from_str("debug_mode: true\n").unwrap();
        assert!(settings.debug_mode);
        assert_eq!(settings.page_title, "Rehbar - App for people");
    }
}
