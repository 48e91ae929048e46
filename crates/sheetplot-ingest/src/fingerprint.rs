use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Size and SHA-256 digest of a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    pub size: u64,
    pub sha256: String,
}

/// Hash a file without loading it into memory. Failures here are plain
/// IO errors, not spreadsheet processing errors.
pub fn fingerprint_file(path: &Path) -> io::Result<FileFingerprint> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let size = io::copy(&mut file, &mut hasher)?;
    Ok(FileFingerprint {
        size,
        sha256: hex::encode(hasher.finalize()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"abc").unwrap();

        let fingerprint = fingerprint_file(&path).unwrap();
        assert_eq!(fingerprint.size, 3);
        assert_eq!(
            fingerprint.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(fingerprint_file(Path::new("/nonexistent/data.bin")).is_err());
    }
}
