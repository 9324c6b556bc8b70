use crate::models::{Catalog, CatalogFile, Settings};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Prefix for environment variable overrides (`REHBAR_DEBUG_MODE=true`, ...)
pub const ENV_PREFIX: &str = "REHBAR";

/// Configuration manager for loading and saving YAML configuration files.
///
/// Manages two files in the data directory:
/// - Settings (`Rehbar Settings.yaml`): logging and output options
/// - Catalog (`Rehbar Catalog.yaml`): categories and resources
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
    catalog_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing configuration files (e.g., "Rehbar Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join("Rehbar Settings.yaml"),
            catalog_path: config_dir.join("Rehbar Catalog.yaml"),
            config_dir,
        })
    }

    /// Load settings, layering environment overrides over the YAML file.
    ///
    /// A missing file is fine; every field has a default.
    pub fn load_settings(&self) -> Result<Settings> {
        self.load_settings_with_env(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings with an explicit environment source.
    ///
    /// Split out so tests can supply a fixed environment map.
    pub fn load_settings_with_env(&self, env: config::Environment) -> Result<Settings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
        }

        let settings: Settings = config::Config::builder()
            .add_source(
                config::File::new(self.settings_path.as_str(), config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(settings)
    }

    /// Save the settings file.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Load and validate the catalog file.
    ///
    /// # Returns
    /// The loaded Catalog, or the built-in catalog if the file doesn't exist
    pub fn load_catalog(&self) -> Result<Catalog> {
        if !self.catalog_path.exists() {
            tracing::warn!(
                "Catalog file not found at {}, using built-in catalog",
                self.catalog_path
            );
            return Ok(Catalog::builtin());
        }

        let file_contents = fs::read_to_string(&self.catalog_path)
            .with_context(|| format!("Failed to read catalog: {}", self.catalog_path))?;

        let file: CatalogFile = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse catalog: {}", self.catalog_path))?;

        let catalog = Catalog::try_from(file)
            .with_context(|| format!("Invalid catalog: {}", self.catalog_path))?;

        tracing::info!(
            "Loaded catalog from {} ({} resources)",
            self.catalog_path,
            catalog.resources().len()
        );
        Ok(catalog)
    }

    /// Save the catalog file.
    pub fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        let yaml_string = serde_yaml_ng::to_string(&catalog.to_file())
            .context("Failed to serialize catalog to YAML")?;

        fs::write(&self.catalog_path, yaml_string)
            .with_context(|| format!("Failed to write catalog: {}", self.catalog_path))?;

        tracing::info!("Saved catalog to {}", self.catalog_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }

    pub fn catalog_path(&self) -> &Utf8Path {
        &self.catalog_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogError;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    fn empty_env() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = Utf8PathBuf::try_from(temp_dir.path().join("Rehbar Data")).unwrap();

        let manager = ConfigManager::new(&nested).unwrap();
        assert!(manager.config_dir().exists());
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();
        let settings = manager.load_settings_with_env(empty_env()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_save_settings() {
        let (manager, _temp_dir) = create_test_config_manager();

        let settings = Settings {
            debug_mode: true,
            output_path: "out/page.html".to_string(),
            ..Settings::default()
        };
        manager.save_settings(&settings).unwrap();

        let loaded = manager.load_settings_with_env(empty_env()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_environment_overrides_file() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(manager.settings_path(), "log_prefix: from-file\n").unwrap();

        let mut vars = HashMap::new();
        vars.insert("REHBAR_LOG_PREFIX".to_string(), "from-env".to_string());
        let env = config::Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let loaded = manager.load_settings_with_env(env).unwrap();
        assert_eq!(loaded.log_prefix, "from-env");
    }

    #[test]
    fn test_missing_catalog_uses_builtin() {
        let (manager, _temp_dir) = create_test_config_manager();
        let catalog = manager.load_catalog().unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_load_save_catalog() {
        let (manager, _temp_dir) = create_test_config_manager();

        manager.save_catalog(&Catalog::builtin()).unwrap();
        let loaded = manager.load_catalog().unwrap();

        assert_eq!(loaded, Catalog::builtin());
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let (manager, _temp_dir) = create_test_config_manager();
        let yaml = "\
categories: [All, Health]
resources:
  - id: 1
    title: Clinic
    description: Walk-in care
    category: Housing
    link: '#'
";
        fs::write(manager.catalog_path(), yaml).unwrap();

        let err = manager.load_catalog().unwrap_err();
        assert!(err.to_string().starts_with("Invalid catalog"));
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownCategory { id: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_catalog_yaml() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(manager.catalog_path(), "categories: [All\n").unwrap();

        let err = manager.load_catalog().unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse catalog"));
    }
}
