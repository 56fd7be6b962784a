//! Plain-JSON garden store: the persistence collaborator's document shape,
//! read and written whole. No database, no merging — the caller owns
//! conflict resolution across sessions.

use crate::models::garden::Plant;
use core::fmt;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// Decode failure with the JSON path that failed, e.g.
    /// `[0].reminders[1].nextDue`.
    Decode {
        path: String,
        source: serde_json::Error,
    },
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "io error: {}", e),
            StoreError::Decode { path, source } => {
                write!(f, "invalid garden document at {}: {}", path, source)
            }
            StoreError::Encode(e) => write!(f, "encoding garden document failed: {}", e),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Decode { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

/// Load the garden document. A missing file is not an error here — callers
/// decide whether to seed a fresh garden.
pub fn load(path: &Path) -> Result<Option<Vec<Plant>>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::Io(e)),
    };
    decode(&raw).map(Some)
}

/// Decode a garden document, reporting the JSON path on failure.
pub fn decode(raw: &str) -> Result<Vec<Plant>, StoreError> {
    let deserializer = &mut serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(deserializer).map_err(|e| StoreError::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

/// Write the whole garden document back. Goes through a sibling temp file
/// and a rename so a crash mid-write cannot truncate the only copy.
pub fn save(path: &Path, plants: &[Plant]) -> Result<(), StoreError> {
    let body = serde_json::to_string_pretty(plants).map_err(StoreError::Encode)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
