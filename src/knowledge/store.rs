//! Load-once knowledge store

use std::path::PathBuf;
use std::sync::OnceLock;

use super::KnowledgeBase;
use crate::{Error, Result};

/// Lazily loads the knowledge base at most once per process
///
/// Concurrent first calls race safely behind [`OnceLock`]. A failed load is
/// cached for the life of the process: every later call sees the same error
/// until the server restarts with the files in place.
#[derive(Debug)]
pub struct KnowledgeStore {
    dir: PathBuf,
    loaded: OnceLock<Result<KnowledgeBase>>,
}

impl KnowledgeStore {
    /// Create a store reading from the given knowledge directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            loaded: OnceLock::new(),
        }
    }

    /// The knowledge base, loading it on first use
    ///
    /// # Errors
    ///
    /// Returns the cached load error if the knowledge files were missing or
    /// malformed when first requested
    pub fn get(&self) -> std::result::Result<&KnowledgeBase, &Error> {
        self.loaded
            .get_or_init(|| {
                tracing::info!(dir = %self.dir.display(), "loading knowledge base");
                KnowledgeBase::load(&self.dir)
            })
            .as_ref()
    }
}
