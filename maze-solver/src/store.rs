use maze_world::{Direction, ParseDirectionError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access walk store {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("walk store {path} holds an unparsable record")]
    Parse {
        path: String,
        #[source]
        source: ParseDirectionError,
    },
}

/// Durable record of the single best-known walk, stored as one line of
/// comma-joined direction labels. Overwritten in place on every
/// improvement; no history is kept.
#[derive(Debug, Clone)]
pub struct WalkStore {
    path: PathBuf,
}

impl WalkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted walk. A missing file or an empty record means no
    /// prior run has saved anything yet.
    pub fn load(&self) -> Result<Option<Vec<Direction>>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.path.display().to_string(),
                    source: err,
                })
            }
        };

        let record = text.trim();
        if record.is_empty() {
            return Ok(None);
        }

        let mut walk = Vec::new();
        for label in record.split(',') {
            let direction = label.trim().parse().map_err(|source| StoreError::Parse {
                path: self.path.display().to_string(),
                source,
            })?;
            walk.push(direction);
        }
        Ok(Some(walk))
    }

    pub fn save(&self, walk: &[Direction]) -> Result<(), StoreError> {
        let labels: Vec<&str> = walk.iter().map(|d| d.as_str()).collect();
        let mut record = labels.join(",");
        record.push('\n');
        fs::write(&self.path, record).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}
