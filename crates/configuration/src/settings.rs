use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where the ledger snapshot files live. Defaults to the platform data
    /// directory under `khata/`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Categories applied on the very first run, before any were saved.
    #[serde(default)]
    pub seed_categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_categories: Vec::new(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("khata")
}
