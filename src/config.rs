//! Optional TOML configuration for the catalog runner.
//!
//! ```toml
//! [output]
//! color = false
//!
//! [run]
//! demos = ["composite", "strategy"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::catalog::Demo;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub output: OutputConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Demos in the order to run them. `None` runs the whole catalog.
    pub demos: Option<Vec<Demo>>,
}

impl CatalogConfig {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|err| CatalogError::config(path, err))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn selected_demos(&self) -> Vec<Demo> {
        match &self.run.demos {
            Some(demos) => demos.clone(),
            None => Demo::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CatalogConfig::from_toml("").unwrap();
        assert!(config.output.color);
        assert_eq!(config.selected_demos(), Demo::ALL.to_vec());
    }

    #[test]
    fn test_full_config() {
        let toml = "[output]\ncolor = false\n\n[run]\ndemos = [\"strategy\", \"composite\"]\n";
        let config = CatalogConfig::from_toml(toml).unwrap();
        assert!(!config.output.color);
        assert_eq!(
            config.selected_demos(),
            vec![Demo::Strategy, Demo::Composite]
        );
    }

    #[test]
    fn test_unknown_demo_rejected() {
        let err = CatalogConfig::from_toml("[run]\ndemos = [\"observer\"]\n").unwrap_err();
        assert!(err.to_string().contains("observer"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CatalogConfig::from_toml("[output]\ncolour = true\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[run]\ndemos = [\"mediator\"]").unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.selected_demos(), vec![Demo::Mediator]);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[run\ndemos = 3").unwrap();

        let result = CatalogConfig::load(file.path());
        assert!(matches!(result, Err(CatalogError::Config { .. })));
    }

    #[test]
    fn test_load_unknown_demo_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[run]\ndemos = [\"nope\"]").unwrap();

        let err = CatalogConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Config { .. }));
        let message = err.to_string();
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("nope"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CatalogConfig::load(Path::new("/nonexistent/patterns.toml"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
