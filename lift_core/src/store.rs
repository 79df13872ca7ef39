//! JSON document persistence with file locking.
//!
//! Every persisted concern (accumulator, day logs, cycle tags, profiles) is a
//! single JSON document. Reads take a shared advisory lock; writes go to a temp
//! file in the same directory which is synced and renamed over the target.
//! Access is single-writer: concurrent writers are last-write-wins.

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a document's raw contents under a shared lock
///
/// Returns `Ok(None)` if the file does not exist.
fn read_locked(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let mut contents = String::new();
    let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
    file.unlock()?;
    read?;

    Ok(Some(contents))
}

/// Load a document, falling back to its default when absent or unreadable
///
/// Missing and corrupt documents are not errors: they are logged and treated
/// as empty.
pub fn load_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    Ok(load_optional(path)?.unwrap_or_default())
}

/// Load a document if it exists and parses
pub fn load_optional<T>(path: &Path) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let contents = match read_locked(path) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            tracing::debug!("No document at {:?}", path);
            return Ok(None);
        }
        Err(e) => {
            tracing::warn!("Unable to read {:?}: {}. Treating as empty.", path, e);
            return Ok(None);
        }
    };

    match serde_json::from_str::<T>(&contents) {
        Ok(doc) => {
            tracing::debug!("Loaded document from {:?}", path);
            Ok(Some(doc))
        }
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}. Treating as empty.", path, e);
            Ok(None)
        }
    }
}

/// Save a document atomically
///
/// 1. Write to a temp file next to the target
/// 2. Sync to disk
/// 3. Rename over the original
pub fn save<T>(path: &Path, doc: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let parent = path
        .parent()
        .ok_or_else(|| Error::Other(format!("Document path {:?} has no parent", path)))?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string_pretty(doc)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved document to {:?}", path);
    Ok(())
}
