use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::base::KnowledgeBase;
use crate::models::Interaction;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read knowledge file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse knowledge file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize knowledge: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write knowledge file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// What the conversation engine needs from its memory.
pub trait KnowledgeStore {
    /// Answers known for an already normalized question.
    fn lookup(&self, normalized: &str) -> Option<&[String]>;

    /// Store an answer under a normalized question; duplicates are ignored.
    fn teach(&mut self, normalized: &str, answer: &str) -> bool;

    fn record(&mut self, interaction: Interaction);

    /// Persist the full snapshot. Blocks until written.
    fn save(&self) -> Result<(), StoreError>;
}

/// Knowledge base persisted as a single JSON document.
#[derive(Debug, Clone)]
pub struct KnowledgeFile {
    path: PathBuf,
    data: KnowledgeBase,
}

impl KnowledgeFile {
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            data: KnowledgeBase::default(),
        }
    }

    /// Load the file at `path`. A missing file is an empty knowledge base.
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::empty(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let data: KnowledgeBase =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, data })
    }

    /// Like `load`, but falls back to an empty knowledge base when the file
    /// cannot be read. The error is returned alongside so the caller can
    /// tell the user.
    pub fn load_or_empty(path: PathBuf) -> (Self, Option<StoreError>) {
        match Self::load(path.clone()) {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::error!("Failed to load knowledge: {}", e);
                (Self::empty(path), Some(e))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &KnowledgeBase {
        &self.data
    }
}

impl KnowledgeStore for KnowledgeFile {
    fn lookup(&self, normalized: &str) -> Option<&[String]> {
        self.data.lookup(normalized)
    }

    fn teach(&mut self, normalized: &str, answer: &str) -> bool {
        self.data.teach(normalized, answer)
    }

    fn record(&mut self, interaction: Interaction) {
        self.data.record(interaction);
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(&self.data).map_err(StoreError::Serialize)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
