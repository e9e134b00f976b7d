//! Disk I/O for record collections: load from file and atomic write.
//!
//! Each store file holds one JSON array of records. Writes go to a temp
//! file and rename over the target, so a crash mid-write leaves the old
//! snapshot intact rather than a truncated file. The rename-over approach
//! is close to atomic on most platforms; on FAT32 or network shares there
//! are no hard guarantees.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Reads and deserializes the record array at `path`.
///
/// Fails with [`Error::FileAbsent`] when the file does not exist and with
/// [`Error::Malformed`] when its content is not a record array (an empty
/// file counts as malformed). Callers that want load-or-init semantics use
/// [`load_or_init`] instead.
pub fn read_records<R>(path: &Path) -> Result<Vec<R>>
where
    R: DeserializeOwned,
{
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileAbsent(path.display().to_string()))
        }
        Err(e) => return Err(Error::Io(e.to_string())),
    };
    if bytes.is_empty() {
        return Err(Error::Malformed("empty file".into()));
    }
    serde_json::from_slice(&bytes).map_err(Error::from)
}

/// Serializes `records` and writes them to `<path>.tmp`, then renames over
/// `path`. Every save rewrites the whole array; there is no append path.
pub fn write_records<R>(path: &Path, records: &[R]) -> Result<()>
where
    R: Serialize,
{
    let bytes = serde_json::to_vec(records).map_err(Error::from)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    std::fs::write(&tmp, &bytes).map_err(|e| Error::Io(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| Error::Io(e.to_string()))?;
    Ok(())
}

/// Loads the record array at `path`, creating the file with an empty array
/// when it is missing and resetting it to an empty array when it cannot be
/// read as records. Both stores run this once at construction.
pub fn load_or_init<R>(path: &Path) -> Result<Vec<R>>
where
    R: Serialize + DeserializeOwned,
{
    match read_records(path) {
        Ok(records) => Ok(records),
        Err(Error::FileAbsent(_)) => {
            write_records::<R>(path, &[])?;
            Ok(Vec::new())
        }
        Err(Error::Malformed(msg)) => {
            tracing::warn!(path = %path.display(), "discarding unreadable store file: {msg}");
            write_records::<R>(path, &[])?;
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
