//! Build script for the Aura CLI.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory (`<data dir>/aura/`) so a freshly built binary has a
//! ready-to-edit example next to where it looks for its `.env` file. The
//! application runs fine without any configuration (the catalog and the
//! AI assistant degrade to local-only mode), so a missing template is a
//! warning, never a build failure.

use std::{env, fs, path::PathBuf};

/// Installs `.env.example` into the local data directory.
///
/// Re-runs when the template changes (`cargo:rerun-if-changed`). Directory
/// creation and copy failures are propagated; a missing template only emits
/// a `cargo:warning`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("aura");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
