//! Persisted references to user-selected files.
//!
//! The original sandboxed application stored security-scoped bookmarks for
//! files the user picked outside its container. Here a bookmark is a plain
//! stored path with an explicit `resolve` operation: resolution can fail
//! (the file may have moved or been deleted) and callers decide what the
//! fallback is, rather than getting a throwing accessor.

use std::path::{Path, PathBuf};

use chordshell_common::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A resolvable reference to a user-selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBookmark {
    /// The location recorded when the user picked the file.
    path: PathBuf,
}

impl FileBookmark {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The stored location. May be stale; use [`resolve`](Self::resolve)
    /// before handing it to anything that reads the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the bookmark to a readable file.
    pub fn resolve(&self) -> AppResult<PathBuf> {
        if self.path.is_file() {
            Ok(self.path.clone())
        } else {
            Err(AppError::BookmarkUnresolvable {
                path: self.path.clone(),
            })
        }
    }

    /// File name component of the stored location, if it has one.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}
