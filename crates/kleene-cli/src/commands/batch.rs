//! JSON test specifications.
//!
//! A specification is a list of batches, each naming one pattern and the
//! words to check against it:
//!
//! ```json
//! [{"name": "star", "regex": "a*", "test_strings": [{"input": "aa", "expected": true}]}]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestBatch {
    pub name: String,
    pub regex: String,
    pub test_strings: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid test specification '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_batches(path: &Path) -> Result<Vec<TestBatch>, BatchError> {
    let text = fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_batches(&text).map_err(|source| BatchError::Json {
        path: path.to_owned(),
        source,
    })
}

pub fn parse_batches(text: &str) -> Result<Vec<TestBatch>, serde_json::Error> {
    serde_json::from_str(text)
}
