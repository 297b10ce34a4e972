//! src/asset_resolve.rs
//!
//! Asset checks shared by `build.rs` and the crate.
//!
//! `build.rs` includes this file through `#[path]`, so it may only depend on
//! std and `thiserror`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Debug, Error)]
pub enum AssetResolutionError {
    #[error("asset `{name}` not found at {}", path.display())]
    Missing {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("asset `{name}` at {} could not be read: {source}", path.display())]
    Unreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("asset `{name}` at {} is not a PNG image", path.display())]
    NotPng { name: String, path: PathBuf },
}

/// Resolve `rel` under `root` and check that it holds a PNG.
pub fn resolve(root: &Path, name: &str, rel: &str) -> Result<PathBuf, AssetResolutionError> {
    let path = root.join(rel);
    let bytes = fs::read(&path).map_err(|source| {
        let name = name.to_string();
        let path = path.clone();
        if source.kind() == io::ErrorKind::NotFound {
            AssetResolutionError::Missing { name, path, source }
        } else {
            AssetResolutionError::Unreadable { name, path, source }
        }
    })?;
    check_png(name, &path, &bytes)?;
    Ok(path)
}

/// Fail unless `bytes` start with the PNG signature.
pub fn check_png(name: &str, path: &Path, bytes: &[u8]) -> Result<(), AssetResolutionError> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        Ok(())
    } else {
        Err(AssetResolutionError::NotPng {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_existing_png() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), PNG_SIGNATURE).unwrap();

        let path = resolve(dir.path(), "a", "a.png").unwrap();
        assert_eq!(path, dir.path().join("a.png"));
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = resolve(dir.path(), "architecture", "assets/3TierArch.png").unwrap_err();
        assert!(matches!(err, AssetResolutionError::Missing { ref name, .. } if name == "architecture"));
        assert!(err.to_string().starts_with("asset `architecture` not found at "));
    }

    #[test]
    fn non_png_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), "not an image").unwrap();

        let err = resolve(dir.path(), "a", "a.png").unwrap_err();
        assert!(matches!(err, AssetResolutionError::NotPng { .. }));
        assert!(err.to_string().ends_with("is not a PNG image"));
    }

    #[test]
    fn directory_is_unreadable_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a.png")).unwrap();

        let err = resolve(dir.path(), "a", "a.png").unwrap_err();
        assert!(matches!(err, AssetResolutionError::Unreadable { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn check_png_rejects_short_input() {
        assert!(check_png("a", Path::new("a.png"), &PNG_SIGNATURE[..4]).is_err());
    }
}
