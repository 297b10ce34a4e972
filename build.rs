//! build.rs
//!
//! Build-time asset resolution.
//!
//! Every entry of `ASSETS` maps a logical asset name to a file under the
//! crate root. The file must exist and carry a PNG signature, otherwise the
//! build fails and nothing gets packaged. Resolved paths are handed to the
//! crate as `ASSET_<NAME>` environment variables.

use std::path::PathBuf;
use std::process;

#[path = "src/asset_resolve.rs"]
mod asset_resolve;

/// Logical name -> path relative to the manifest directory.
const ASSETS: &[(&str, &str)] = &[("architecture", "assets/3TierArch.png")];

fn main() {
    let Ok(root) = std::env::var("CARGO_MANIFEST_DIR") else {
        eprintln!("error: CARGO_MANIFEST_DIR is not set");
        process::exit(1);
    };
    let root = PathBuf::from(root);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/asset_resolve.rs");

    for (name, rel) in ASSETS {
        println!("cargo:rerun-if-changed={}", rel);
        match asset_resolve::resolve(&root, name, rel) {
            Ok(path) => println!(
                "cargo:rustc-env=ASSET_{}={}",
                name.to_ascii_uppercase(),
                path.display()
            ),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }
}
