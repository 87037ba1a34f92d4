//! Profile management command execution.

use crate::cli::args::ProfileCommand;
use crate::error::Result;
use crate::models::{LoaderInfo, ProfileChanges, Project};
use std::path::Path;

/// Dispatches one profile subcommand against the project at `project_dir`.
pub fn run(project_dir: &Path, command: ProfileCommand) -> Result<i32> {
    let mut project = Project::load(project_dir)?;
    match command {
        ProfileCommand::Add {
            name,
            version,
            loader,
            loader_version,
        } => {
            let profile =
                project.add_profile(&name, version, LoaderInfo::new(loader, loader_version))?;
            println!(
                "Added profile {} at {}",
                profile.name(),
                profile.path().display()
            );
        }
        ProfileCommand::Edit {
            name,
            rename,
            version,
            loader,
            loader_version,
        } => {
            let changes = ProfileChanges {
                rename,
                version,
                loader,
                loader_version,
            };
            let profile = project.edit_profile(&name, changes)?;
            println!("Updated profile {}", profile.name());
        }
        ProfileCommand::Remove { name } => {
            project.remove_profile(&name)?;
            println!("Removed profile {name}");
        }
        ProfileCommand::List => {
            if project.profiles().is_empty() {
                println!("No profiles in {}", project.name());
            } else {
                for profile in project.profiles() {
                    println!(
                        "{}  {}  {} {}",
                        profile.name(),
                        profile.version(),
                        profile.loader_info().kind,
                        profile.loader_info().version
                    );
                }
            }
        }
    }
    Ok(0)
}
