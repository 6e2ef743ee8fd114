//! Bulk loader settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Directory holding the four CSV input files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Proceed with a load even when the reference tables already hold rows.
    #[serde(default)]
    pub allow_load_into_nonempty: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            allow_load_into_nonempty: false,
        }
    }
}
