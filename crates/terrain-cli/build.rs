//! Embeds the version shown by `terrain --version`.
//!
//! Inside a git checkout this is `git describe` of the workspace (with a
//! `-dirty` suffix for uncommitted changes); otherwise the package version.

use std::path::Path;
use std::process::Command;

/// The workspace root holds `.git`; this crate lives two levels below it.
const GIT_DIR: &str = "../../.git";

fn main() {
    let git_dir = Path::new(GIT_DIR);
    if git_dir.exists() {
        println!("cargo:rerun-if-changed={}/HEAD", GIT_DIR);
        println!("cargo:rerun-if-changed={}/refs", GIT_DIR);
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }

    let version = describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=TERRAIN_VERSION={}", version);
}

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let described = described.strip_prefix('v').unwrap_or(described);

    (!described.is_empty()).then(|| described.to_string())
}
