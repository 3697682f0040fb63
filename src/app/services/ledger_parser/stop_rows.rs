//! Summary and footer row recognition

use crate::config::ImporterConfig;

/// Recognizes rows such as "Total", "Saldo do mês" or "Resumo"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRowDetector {
    keywords: Vec<String>,
}

impl StopRowDetector {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn from_config(config: &ImporterConfig) -> Self {
        Self::new(config.stop_words())
    }

    /// True when the first non-empty cell starts with a stop keyword
    pub fn is_stop_row(&self, row: &[String]) -> bool {
        let Some(first) = row.iter().find(|cell| !cell.is_empty()) else {
            return false;
        };

        let first = first.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| first.starts_with(keyword.as_str()))
    }
}

impl Default for StopRowDetector {
    fn default() -> Self {
        Self::from_config(&ImporterConfig::default())
    }
}
