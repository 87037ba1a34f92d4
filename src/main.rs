//! Modpack Bundler - profile management and bundle generation.
//!
//! This binary manages the profiles of a modpack project and packages the
//! project directory into a distributable bundle (deterministic manifest
//! plus zip archive) with proper error handling.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match modpack_bundler::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
