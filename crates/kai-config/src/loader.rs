use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a provider credential or the synthesis voice
    /// is missing, or the static mount path is malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.llm.api_key.is_none() {
            anyhow::bail!("llm.api_key is required");
        }

        if self.tts.api_key.is_none() {
            anyhow::bail!("tts.api_key is required");
        }

        if self.tts.voice.trim().is_empty() {
            anyhow::bail!("tts.voice must not be empty");
        }

        if !self.storage.public_path.starts_with('/') {
            anyhow::bail!("storage.public_path must start with '/'");
        }

        Ok(())
    }
}
