//! Configuration management and validation.
//!
//! The importer's vocabularies are fixed at build time but can be extended
//! from a JSON file, so ledgers using other header spellings or footer
//! keywords can be imported without touching the code.

use crate::app::models::SaleField;
use crate::constants::{
    APP_CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_CLIENT_PLACEHOLDER, DEFAULT_STOP_WORDS,
    MIN_VEHICLE_YEAR,
};
use crate::{Error, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Importer configuration
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// {
///   "extra_aliases": { "carro": ["marca/modelo"] },
///   "extra_stop_words": ["acumulado"],
///   "reference_year": 2025
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Header aliases added on top of the built-in table
    pub extra_aliases: BTreeMap<SaleField, Vec<String>>,

    /// Footer keywords added on top of the built-in list
    pub extra_stop_words: Vec<String>,

    /// Year used for the upper model-year bound (None = current local year)
    pub reference_year: Option<i32>,

    /// Client name stored when the ledger leaves it blank
    pub client_placeholder: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            extra_aliases: BTreeMap::new(),
            extra_stop_words: Vec::new(),
            reference_year: None,
            client_placeholder: DEFAULT_CLIENT_PLACEHOLDER.to_string(),
        }
    }
}

impl ImporterConfig {
    /// Pin the reference year instead of reading the clock
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Add one header alias for a field
    pub fn with_alias(mut self, field: SaleField, alias: impl Into<String>) -> Self {
        self.extra_aliases
            .entry(field)
            .or_default()
            .push(alias.into());
        self
    }

    /// Add one footer keyword
    pub fn with_stop_word(mut self, word: impl Into<String>) -> Self {
        self.extra_stop_words.push(word.into());
        self
    }

    /// Replace the placeholder used for blank client names
    pub fn with_client_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.client_placeholder = placeholder.into();
        self
    }

    /// Year bounding vehicle model years from above (plus one)
    pub fn current_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Built-in stop words followed by the configured ones, lower-cased
    pub fn stop_words(&self) -> Vec<String> {
        DEFAULT_STOP_WORDS
            .iter()
            .map(|word| word.to_string())
            .chain(
                self.extra_stop_words
                    .iter()
                    .map(|word| word.trim().to_lowercase()),
            )
            .collect()
    }

    /// Check the configuration for values the importer cannot use
    pub fn validate(&self) -> Result<()> {
        for (field, aliases) in &self.extra_aliases {
            if let Some(blank) = aliases.iter().find(|alias| alias.trim().is_empty()) {
                return Err(Error::configuration(format!(
                    "Blank alias '{}' configured for field {}",
                    blank, field
                )));
            }
        }

        if self.extra_stop_words.iter().any(|word| word.trim().is_empty()) {
            return Err(Error::configuration("Blank stop word configured"));
        }

        if let Some(year) = self.reference_year {
            if year < MIN_VEHICLE_YEAR {
                return Err(Error::configuration(format!(
                    "Reference year {} is before the oldest accepted model year {}",
                    year, MIN_VEHICLE_YEAR
                )));
            }
        }

        if self.client_placeholder.trim().is_empty() {
            return Err(Error::configuration("Client placeholder must not be blank"));
        }

        Ok(())
    }

    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::config_parsing(path.display().to_string(), e))?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration file location under the user config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Load configuration with a layered approach
    ///
    /// An explicit path must exist; otherwise the default location is used
    /// when present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ImporterConfig::default();
        assert!(config.extra_aliases.is_empty());
        assert!(config.extra_stop_words.is_empty());
        assert_eq!(config.reference_year, None);
        assert_eq!(config.client_placeholder, DEFAULT_CLIENT_PLACEHOLDER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ImporterConfig::default()
            .with_reference_year(2025)
            .with_alias(SaleField::Carro, "marca/modelo")
            .with_alias(SaleField::Carro, "auto")
            .with_stop_word("Acumulado")
            .with_client_placeholder("Desconhecido");

        assert_eq!(config.current_year(), 2025);
        assert_eq!(config.extra_aliases[&SaleField::Carro].len(), 2);
        assert!(config.stop_words().contains(&"acumulado".to_string()));
        assert!(config.stop_words().contains(&"total".to_string()));
        assert_eq!(config.client_placeholder, "Desconhecido");
    }

    #[test]
    fn test_current_year_defaults_to_clock() {
        let config = ImporterConfig::default();
        assert_eq!(config.current_year(), chrono::Local::now().year());
    }

    #[test]
    fn test_validation_rejects_blank_values() {
        let blank_alias = ImporterConfig::default().with_alias(SaleField::Placa, "  ");
        assert!(blank_alias.validate().is_err());

        let blank_stop = ImporterConfig::default().with_stop_word("");
        assert!(blank_stop.validate().is_err());

        let blank_placeholder = ImporterConfig::default().with_client_placeholder(" ");
        assert!(blank_placeholder.validate().is_err());

        let ancient = ImporterConfig::default().with_reference_year(1950);
        assert!(ancient.validate().is_err());
    }

    #[test]
    fn test_from_file_partial_keys() {
        let file = write_config(
            r#"{ "extra_aliases": { "ano_carro": ["fabricado em"] }, "reference_year": 2024 }"#,
        );
        let config = ImporterConfig::from_file(file.path()).unwrap();

        assert_eq!(config.reference_year, Some(2024));
        assert_eq!(
            config.extra_aliases[&SaleField::AnoCarro],
            vec!["fabricado em".to_string()]
        );
        assert_eq!(config.client_placeholder, DEFAULT_CLIENT_PLACEHOLDER);
    }

    #[test]
    fn test_from_file_unknown_field_is_error() {
        let file = write_config(r#"{ "extra_aliases": { "marca": ["fabricante"] } }"#);
        let result = ImporterConfig::from_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParsing { .. })));
    }

    #[test]
    fn test_from_file_malformed_json() {
        let file = write_config("{ not json");
        assert!(matches!(
            ImporterConfig::from_file(file.path()),
            Err(Error::ConfigParsing { .. })
        ));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = ImporterConfig::load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_load_explicit_path() {
        let file = write_config(r#"{ "extra_stop_words": ["acumulado"] }"#);
        let config = ImporterConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.extra_stop_words, vec!["acumulado".to_string()]);
    }
}
