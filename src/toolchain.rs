use crate::error::ExtractError;
use crate::parameters::profile::Profile;
use std::path::PathBuf;
use std::process::Command;

pub trait Toolchain {
    fn build(&self, profile: &Profile) -> Result<(), ExtractError>;
    fn list_entries(&self) -> Result<String, ExtractError>;
    fn disassemble(&self, profile: &Profile, index: u32) -> Result<String, ExtractError>;
}

pub struct CargoToolchain {
    pub manifest_path: Option<PathBuf>,
}

impl CargoToolchain {
    pub fn new(manifest_path: Option<PathBuf>) -> Self {
        CargoToolchain { manifest_path }
    }

    fn cargo(&self, subcommand: &str, args: Vec<String>) -> Command {
        let mut final_args = vec![subcommand.to_string()];

        if let Some(manifest_path) = &self.manifest_path {
            final_args.push("--manifest-path".to_string());
            final_args.push(manifest_path.display().to_string());
        }

        final_args.extend(args.into_iter());

        let mut command = Command::new("cargo");
        command.args(final_args);
        command
    }

    fn run_status(&self, subcommand: &str, args: Vec<String>) -> Result<(), ExtractError> {
        println!();

        let status = self.cargo(subcommand, args).status().map_err(|source| {
            ExtractError::CommandLaunch {
                command: format!("cargo {}", subcommand),
                source,
            }
        })?;

        println!();

        if !status.success() {
            return Err(ExtractError::CommandFailed {
                command: format!("cargo {}", subcommand),
                status,
            });
        }

        Ok(())
    }

    fn run_captured(&self, subcommand: &str, args: Vec<String>) -> Result<String, ExtractError> {
        let output = self.cargo(subcommand, args).output().map_err(|source| {
            ExtractError::CommandLaunch {
                command: format!("cargo {}", subcommand),
                source,
            }
        })?;

        if !output.status.success() {
            return Err(ExtractError::CommandFailed {
                command: format!("cargo {}", subcommand),
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Toolchain for CargoToolchain {
    fn build(&self, profile: &Profile) -> Result<(), ExtractError> {
        // Clean first so the artifact is rebuilt from scratch
        self.run_status(
            "clean",
            vec!["--profile".to_string(), profile.to_string()],
        )?;

        self.run_status(
            "build",
            vec![
                "--lib".to_string(),
                "--profile".to_string(),
                profile.to_string(),
            ],
        )
    }

    fn list_entries(&self) -> Result<String, ExtractError> {
        self.run_captured("asm", vec!["--lib".to_string()])
    }

    fn disassemble(&self, profile: &Profile, index: u32) -> Result<String, ExtractError> {
        self.run_captured(
            "asm",
            vec![
                "--lib".to_string(),
                "--profile".to_string(),
                profile.to_string(),
                index.to_string(),
            ],
        )
    }
}
