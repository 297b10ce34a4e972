//! src/assets.rs
//!
//! Assets resolved by `build.rs`.
//!
//! The build script checks each manifest entry and exports its absolute path
//! as `ASSET_<NAME>`. A missing file never reaches this module: the build
//! stops first.

use std::path::Path;

use crate::asset_resolve::{AssetResolutionError, check_png};

/// A logical asset name bound to a resolved, bundled resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetPath {
    pub name: &'static str,
    pub path: &'static str,
    pub bytes: &'static [u8],
}

impl AssetPath {
    pub const fn new(name: &'static str, path: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, path, bytes }
    }

    /// File name portion of the resolved path.
    pub fn file_name(&self) -> &'static str {
        file_name(self.path)
    }
}

/// Last component of `path`, or the whole path when it has none.
pub fn file_name(path: &'static str) -> &'static str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Every asset the build pipeline resolved.
#[derive(Clone, Copy, Debug)]
pub struct AssetManifest {
    pub architecture: AssetPath,
}

impl AssetManifest {
    /// Manifest backed by the files bundled into this binary.
    pub const fn bundled() -> Self {
        Self {
            architecture: AssetPath::new(
                "architecture",
                env!("ASSET_ARCHITECTURE"),
                include_bytes!(env!("ASSET_ARCHITECTURE")),
            ),
        }
    }

    /// Re-check the embedded bytes of every asset.
    pub fn verify(&self) -> Result<(), AssetResolutionError> {
        let a = &self.architecture;
        check_png(a.name, Path::new(a.path), a.bytes)
    }
}
