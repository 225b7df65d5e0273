use std::path::PathBuf;

use clap::Parser;

/// Kai voice-coach backend
#[derive(Debug, Parser)]
#[command(name = "kai", about = "Conversation, summary, and speech relay for the Kai coach")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "kai.toml", env = "KAI_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "KAI_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
