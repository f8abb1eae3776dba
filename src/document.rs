use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// One biography file: its bare filename and decoded text.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub text: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Document::new(filename, decode_permissive(&bytes)))
}

/// Files directly inside `dir` whose name starts with `prefix` and ends with
/// `extension`, sorted by name. Subdirectories are not searched.
pub fn discover_documents(dir: &Path, prefix: &str, extension: &str) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| ExtractError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(prefix) && name.ends_with(extension) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
