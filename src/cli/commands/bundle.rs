//! Bundle command execution.

use crate::error::{CliError, Result};
use crate::models::Project;
use std::path::Path;

/// Loads the project and runs the full bundle pipeline.
///
/// Contract: exit code 0 guarantees both artifacts exist at the project
/// root.
pub fn run(project_dir: &Path) -> Result<i32> {
    let project = Project::load(project_dir)?;
    crate::bundler::bundle(&project)?;

    let archive = project.path().join(format!("{}.zip", project.name()));
    if !archive.is_file() {
        return Err(CliError::ExecutionFailed {
            command: "bundle".to_string(),
            reason: format!("archive missing at {}", archive.display()),
        }
        .into());
    }
    println!(
        "Bundled {} ({} profiles) into {}",
        project.name(),
        project.profiles().len(),
        archive.display()
    );
    Ok(0)
}
