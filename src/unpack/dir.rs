//! Directory Unpacker
//!
//! Materializes `<root>/<name>` from disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::cache::Content;
use crate::error::{Result, UnpackError};
use crate::unpack::Unpacker;

/// Reads each book from a file named after it inside `root`.
#[derive(Debug, Clone)]
pub struct DirUnpacker {
    root: PathBuf,
}

impl DirUnpacker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Unpacker for DirUnpacker {
    async fn unpack(&self, name: &str) -> Result<Content> {
        validate_name(name)?;

        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!(name, size = bytes.len(), path = %path.display(), "read book from disk");
                Ok(Content::new(name, bytes))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(UnpackError::NotFound(name.to_string()))
            }
            Err(source) => Err(UnpackError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}

// == Name Validation ==
/// Book names address a single file directly under the root.
fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(UnpackError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("war_and_peace.txt").is_ok());
        assert!(validate_name("..hidden").is_ok());

        for bad in ["", ".", "..", "a/b", "../etc/passwd", "a\\b", "nul\0"] {
            assert!(
                matches!(validate_name(bad), Err(UnpackError::InvalidName(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_unpack_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dune"), b"A beginning is a very delicate time").unwrap();

        let unpacker = DirUnpacker::new(dir.path());
        let content = unpacker.unpack("dune").await.unwrap();

        assert_eq!(content.name(), "dune");
        assert_eq!(content.bytes(), b"A beginning is a very delicate time");
    }

    #[tokio::test]
    async fn test_unpack_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let unpacker = DirUnpacker::new(dir.path());

        let result = unpacker.unpack("missing").await;
        assert!(matches!(result, Err(UnpackError::NotFound(name)) if name == "missing"));
    }

    #[tokio::test]
    async fn test_unpack_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let unpacker = DirUnpacker::new(dir.path().join("books"));

        let result = unpacker.unpack("../secret").await;
        assert!(matches!(result, Err(UnpackError::InvalidName(_))));
    }

    #[tokio::test]
    async fn test_unpack_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("shelf")).unwrap();

        let unpacker = DirUnpacker::new(dir.path());
        let result = unpacker.unpack("shelf").await;

        assert!(matches!(result, Err(UnpackError::Io { .. })));
    }
}
