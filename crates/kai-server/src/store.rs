use std::path::PathBuf;

use kai_config::StorageConfig;
use uuid::Uuid;

/// Directory for synthesized audio under the storage root
const AUDIO_DIR: &str = "audio";
/// Directory for rendered documents under the storage root
const DOCS_DIR: &str = "docs";

/// Write-once store for generated files
///
/// Every file gets a fresh UUID name, so concurrent requests never contend
/// on a path and no two responses ever reference the same file.
pub struct MediaStore {
    root: PathBuf,
    public_path: String,
}

impl MediaStore {
    /// Create the store and its subdirectories
    ///
    /// # Errors
    ///
    /// Returns an error if a storage directory cannot be created
    pub async fn new(config: &StorageConfig) -> anyhow::Result<Self> {
        let root = config.root.clone();

        for dir in [AUDIO_DIR, DOCS_DIR] {
            tokio::fs::create_dir_all(root.join(dir))
                .await
                .map_err(|e| anyhow::anyhow!("failed to create storage directory {dir}: {e}"))?;
        }

        Ok(Self {
            root,
            public_path: config.public_path.trim_end_matches('/').to_string(),
        })
    }

    /// Write synthesized audio, returning its relative URL
    pub async fn save_audio(&self, audio: &[u8]) -> std::io::Result<String> {
        self.save(AUDIO_DIR, "mp3", audio).await
    }

    /// Write a rendered document, returning its relative URL
    pub async fn save_document(&self, document: &[u8]) -> std::io::Result<String> {
        self.save(DOCS_DIR, "pdf", document).await
    }

    async fn save(&self, dir: &str, extension: &str, bytes: &[u8]) -> std::io::Result<String> {
        let name = format!("{}.{extension}", Uuid::new_v4());
        let path = self.root.join(dir).join(&name);

        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), "stored generated file");

        Ok(format!("{}/{dir}/{name}", self.public_path))
    }
}
