use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{:x}", result)
}

pub fn hash_file(path: &Path) -> io::Result<String> {
    let data = fs::read(path)?;
    Ok(hash_bytes(&data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn hashes_bytes() {
        let hash = hash_bytes(b"hello world");
        assert_eq!(hash.len(), 64); // SHA-256 produces 64 hex chars
    }

    #[test]
    fn different_input_different_hash() {
        let hash1 = hash_bytes(b"data a");
        let hash2 = hash_bytes(b"data b");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn file_hash_matches_content_hash() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"test content").unwrap();

        let hash = hash_file(file.path()).unwrap();

        assert_eq!(
            hash.as_str(),
            "6ae8a75555209fd6c44157c0aed8016e763ff435a19cf186f76863140143ff72"
        );
    }

    #[test]
    fn nonexistent_file_returns_error() {
        let result = hash_file(Path::new("/nonexistent/file.cpp"));
        assert!(result.is_err());
    }
}
