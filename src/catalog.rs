use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::assembler::{self, AssembleError};
use crate::cipher::{self, CipherError};
use crate::config::CatalogSource;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("secret decode failed: {0}")]
    Secret(#[from] CipherError),
    #[error("no chunk list for index {0}")]
    MissingChunks(usize),
    #[error("no permutation ciphertext for index {0}")]
    MissingSequence(usize),
    #[error("no auth value for index {0}")]
    MissingAuth(usize),
    #[error("permutation for index {index} is not a JSON integer array: {source}")]
    SequenceParse {
        index: usize,
        source: serde_json::Error,
    },
    #[error("reassembly failed for index {index}: {source}")]
    Assemble {
        index: usize,
        source: AssembleError,
    },
}

/// A resolved catalog slot: final reassembled content plus the opaque auth
/// value that travelled alongside it. Immutable once stored.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub content: String,
    pub auth: Value,
}

/// Build lifecycle of the catalog. The build runs synchronously inside the
/// first `extract` call, so there is no observable in-between state; a
/// failed build is terminal for the rest of the process.
#[derive(Debug)]
enum BuildState {
    Empty,
    Ready(Vec<ResourceEntry>),
    Failed,
}

/// Lazily built, process-lifetime mapping from index to resolved entry.
/// The build is all-or-nothing: any missing or malformed input discards
/// partial results and pins the catalog at `Failed`.
pub struct ResourceCatalog {
    source: CatalogSource,
    state: BuildState,
    builds: usize,
}

impl ResourceCatalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            state: BuildState::Empty,
            builds: 0,
        }
    }

    /// Returns the content for `index`, triggering the one-time build on
    /// first call. Out-of-range indexes and failed builds yield `None`;
    /// no error surfaces past this point.
    pub fn extract(&mut self, index: usize) -> Option<&str> {
        if matches!(self.state, BuildState::Empty) {
            self.builds += 1;
            match self.prepare() {
                Ok(entries) => self.state = BuildState::Ready(entries),
                Err(e) => {
                    warn!(error = %e, "catalog build failed; marking terminal");
                    self.state = BuildState::Failed;
                }
            }
        }

        match &self.state {
            BuildState::Ready(entries) => entries.get(index).map(|e| e.content.as_str()),
            _ => None,
        }
    }

    /// Opaque auth value for an already-built slot.
    pub fn auth(&self, index: usize) -> Option<&Value> {
        match &self.state {
            BuildState::Ready(entries) => entries.get(index).map(|e| &e.auth),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, BuildState::Failed)
    }

    /// Number of times the build procedure has run. At most 1 under the
    /// build-once contract.
    pub fn build_count(&self) -> usize {
        self.builds
    }

    fn prepare(&self) -> Result<Vec<ResourceEntry>, CatalogError> {
        let key = cipher::decode_secret(&self.source.secret)?;

        let mut entries = Vec::with_capacity(self.source.count);
        for i in 0..self.source.count {
            let chunks = self
                .source
                .chunks
                .get(&i)
                .ok_or(CatalogError::MissingChunks(i))?;
            let seq_raw = self
                .source
                .sequences
                .get(&i)
                .ok_or(CatalogError::MissingSequence(i))?;
            let auth = self
                .source
                .auth
                .get(&i)
                .ok_or(CatalogError::MissingAuth(i))?;

            let seq: Vec<usize> = serde_json::from_str(&cipher::process(seq_raw, &key))
                .map_err(|source| CatalogError::SequenceParse { index: i, source })?;

            let decrypted: Vec<String> = chunks
                .iter()
                .map(|chunk| cipher::process(chunk, &key))
                .collect();

            let content = assembler::assemble(&decrypted, &seq)
                .map_err(|source| CatalogError::Assemble { index: i, source })?;

            debug!(index = i, len = content.len(), "catalog entry assembled");
            entries.push(ResourceEntry {
                content,
                auth: auth.clone(),
            });
        }

        Ok(entries)
    }
}
