//! File-based render cache
//!
//! Rendered numerals are memoized on disk: the artifact's existence at its
//! deterministic path short-circuits re-rendering. The policy lives behind a
//! trait so tests can observe (or replace) the caching behavior without
//! touching the drawing code.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Keyed artifact store: returns the path for a key, invoking the render
/// closure only when the artifact does not exist yet.
pub trait ArtifactCache {
    fn get_or_render<F>(&self, name: &str, render: F) -> Result<PathBuf, RenderError>
    where
        F: FnOnce(&Path) -> Result<(), RenderError>;
}

/// Directory-backed cache. Not safe under concurrent writers to the same
/// path; intended for a single sequential batch process.
#[derive(Debug, Clone)]
pub struct FileCache {
    directory: PathBuf,
}

impl FileCache {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ArtifactCache for FileCache {
    fn get_or_render<F>(&self, name: &str, render: F) -> Result<PathBuf, RenderError>
    where
        F: FnOnce(&Path) -> Result<(), RenderError>,
    {
        ensure_directory(&self.directory)?;

        let path = self.directory.join(name);
        if path.exists() {
            return Ok(path);
        }

        render(&path)?;
        Ok(path)
    }
}

/// Create a directory if needed, tolerating a concurrent creator: creation
/// failure is only an error if the directory still does not exist afterward.
pub fn ensure_directory(path: &Path) -> Result<(), RenderError> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(source) => Err(RenderError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }),
    }
}
