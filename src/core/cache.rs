//! core::cache
//!
//! Deterministic on-disk location for materialized scripts.
//!
//! # Layout
//!
//! Every snippet name maps to exactly one file:
//!
//! ```text
//! <root>/<sha256(name) as hex>.<extension>
//! ```
//!
//! The key hashes the *name*, not the script body, so a later run of the
//! same snippet overwrites the earlier file. Files are never cleaned up.
//!
//! # Example
//!
//! ```
//! use snippets_run::core::cache::ScriptCache;
//! use std::path::PathBuf;
//!
//! let cache = ScriptCache::new(PathBuf::from("/tmp"));
//! let path = cache.script_path("hello", "mjs");
//! assert_eq!(
//!     path,
//!     PathBuf::from(
//!         "/tmp/2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824.mjs"
//!     )
//! );
//! ```

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Environment variable consulted for the cache root.
pub const TMPDIR_VAR: &str = "TMPDIR";

/// Errors from writing a script into the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to write script '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Compute the cache key for a snippet name.
///
/// Lowercase hex SHA-256 of the UTF-8 name, always 64 characters.
pub fn cache_key(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hex::encode(hasher.finalize())
}

/// Root directory under which materialized scripts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCache {
    root: PathBuf,
}

impl ScriptCache {
    /// Create a cache rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a cache rooted at `$TMPDIR`, or the platform temp dir.
    pub fn from_env() -> Self {
        Self::from_tmpdir(std::env::var_os(TMPDIR_VAR))
    }

    /// Create a cache from a `TMPDIR` value; unset or empty falls back to
    /// the platform temp dir.
    pub fn from_tmpdir(tmpdir: Option<OsString>) -> Self {
        let root = tmpdir
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);
        Self::new(root)
    }

    /// The cache root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the script for `name` is written to.
    pub fn script_path(&self, name: &str, extension: &str) -> PathBuf {
        self.root.join(format!("{}.{}", cache_key(name), extension))
    }

    /// Write `script` for `name`, replacing any earlier content.
    ///
    /// The body goes to a uniquely named temp file in the root that is then
    /// renamed over the destination, so the result never mixes old and new
    /// content and concurrent writers of the same name do not collide. The
    /// temp file is removed if any step fails.
    ///
    /// Returns the path written.
    pub fn write(
        &self,
        name: &str,
        extension: &str,
        script: &str,
    ) -> Result<PathBuf, CacheError> {
        let path = self.script_path(name, extension);

        fs::create_dir_all(&self.root).map_err(write_error(&self.root))?;

        let mut file = NamedTempFile::new_in(&self.root).map_err(write_error(&self.root))?;
        file.write_all(script.as_bytes())
            .map_err(write_error(file.path()))?;
        file.as_file().sync_all().map_err(write_error(file.path()))?;

        file.persist(&path).map_err(|e| write_error(&path)(e.error))?;

        Ok(path)
    }
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> CacheError {
    let path = path.to_path_buf();
    move |source| CacheError::Write { path, source }
}
