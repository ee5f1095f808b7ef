//! Rule book model and loader.
//!
//! The source file is a JSON array of sections, each with a title and an
//! ordered list of rules:
//!
//! ```json
//! [ { "title": "Safety", "rules": ["Wear a helmet", "No running"] } ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A titled group of rules, rendered as a heading plus an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub rules: Vec<String>,
}

/// Ordered sections of a rule book. Order drives numbering and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleDocument {
    pub sections: Vec<Section>,
}

impl RuleDocument {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Total number of rules across all sections
    pub fn rule_count(&self) -> usize {
        self.sections.iter().map(|s| s.rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Errors raised while loading the rule book
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not find {}, make sure it is in the working directory", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a rule book from `path`.
pub fn load_document(path: impl AsRef<Path>) -> Result<RuleDocument, LoadError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
