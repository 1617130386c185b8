//! Build script for lookupcli.
//!
//! Copies the `.env.example` template into the user's local data directory so
//! the expected configuration location is populated after installation:
//!
//! - Linux: `~/.local/share/lookupcli/.env.example`
//! - macOS: `~/Library/Application Support/lookupcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/lookupcli/.env.example`
//!
//! Nothing here is required for the build itself, so every failure is reported
//! as a cargo warning instead of aborting compilation.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_template() {
        println!("cargo:warning=cannot install .env.example: {}", e);
    }
}

fn copy_template() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("lookupcli");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(&env_example_path)?;
    fs::write(out_dir.join(".env.example"), contents)?;
    Ok(())
}
