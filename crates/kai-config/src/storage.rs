use std::path::PathBuf;

use serde::Deserialize;

/// Storage for generated audio and document files
///
/// Files are written once under a UUID name and served back from the
/// public mount; nothing here is ever updated or deleted by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory that backs the static mount
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// URL path the static mount is served under
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            public_path: default_public_path(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("static")
}

fn default_public_path() -> String {
    "/static".to_string()
}
