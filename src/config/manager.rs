use super::{traits::ConfigSection, viewer::ViewerConfig};
use crate::error::ChartError;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub viewer: ViewerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.viewer.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a TOML file over the defaults. Keys the file leaves out keep their default.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ChartError> {
        let path = path.as_ref();

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()
            .map_err(|e| ChartError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| ChartError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        log::info!(
            "Loaded [{}] configuration from {}",
            ViewerConfig::section_name(),
            path.display()
        );
        self.config = config;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ChartError> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| ChartError::Configuration(format!("Failed to serialize: {}", e)))
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[viewer]\ntitle = \"Run 42\"\nmarker_radius = 6.0").unwrap();

        let mut manager = ConfigManager::new();
        manager.load_from_file(file.path()).unwrap();

        let viewer = &manager.get().viewer;
        assert_eq!(viewer.title, "Run 42");
        assert_eq!(viewer.marker_radius, 6.0);
        assert_eq!(viewer.window_width, ViewerConfig::default().window_width);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[viewer]\nline_width = -1.0").unwrap();

        let mut manager = ConfigManager::new();
        assert!(manager.load_from_file(file.path()).is_err());
        assert_eq!(manager.get(), &AppConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConfigManager::new();
        let err = manager.load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ChartError::Configuration(_)));
    }

    #[test]
    fn test_toml_round_trips_defaults() {
        let manager = ConfigManager::new();
        let text = manager.to_toml_string().unwrap();
        assert!(text.contains("[viewer]"));

        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
