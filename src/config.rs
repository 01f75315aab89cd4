//! Runtime configuration for the action server

use std::path::PathBuf;

/// Default port, matching the conventional action-server endpoint
pub const DEFAULT_PORT: u16 = 5055;

/// Default knowledge base directory, relative to the working directory
pub const DEFAULT_KNOWLEDGE_DIR: &str = "knowledge_base";

/// Action server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the knowledge base JSON documents
    pub knowledge_dir: PathBuf,

    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            knowledge_dir: PathBuf::from(DEFAULT_KNOWLEDGE_DIR),
            port: DEFAULT_PORT,
        }
    }
}
