//! Unified error type for all store operations.
//!
//! Absent records are not errors here: lookups return `Option` and removals
//! return `bool`. The variants below cover uniqueness conflicts and
//! persistence failures only.

/// Things that can go wrong when using a store.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A record with the same natural key (product name, username) is
    /// already present.
    AlreadyExists(String),
    /// The backing file does not exist yet.
    FileAbsent(String),
    /// The backing file exists but does not parse as a record array.
    Malformed(String),
    /// File system problem (read, write, rename).
    Io(String),
    /// Failed to serialize the collection to bytes.
    Serialize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AlreadyExists(key) => write!(f, "already exists: {key}"),
            Error::FileAbsent(path) => write!(f, "file absent: {path}"),
            Error::Malformed(msg) => write!(f, "malformed store file: {msg}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Malformed(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
