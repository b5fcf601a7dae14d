//! Session file access

use std::path::Path;

use crate::error::StorageError;
use crate::Result;

/// Read a whole snapshot file into memory
pub fn read_session_file(path: &Path) -> Result<Vec<u8>> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(io_err)?;
    if !metadata.is_file() {
        return Err(StorageError::NotAFile(path.to_path_buf()));
    }

    let data = std::fs::read(path).map_err(io_err)?;

    tracing::info!(path = %path.display(), bytes = data.len(), "Read session file");

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recovery.jsonlz4");
        std::fs::write(&path, b"mozLz40\0\x03\0\0\0abc").unwrap();

        let data = read_session_file(&path).unwrap();
        assert_eq!(data, b"mozLz40\0\x03\0\0\0abc");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recovery.jsonlz4");

        match read_session_file(&path) {
            Err(StorageError::Io { path: got, source }) => {
                assert_eq!(got, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_session_file(dir.path());
        assert!(matches!(result, Err(StorageError::NotAFile(_))));
    }
}
