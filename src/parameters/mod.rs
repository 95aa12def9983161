pub mod profile;

use crate::cli::{BuildArgs, ExtractArgs};
use crate::parameters::profile::Profile;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub profile: Profile,
    pub manifest_path: Option<PathBuf>,

    pub output_path: PathBuf,
    pub start_index: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            profile: Profile::default(),
            manifest_path: None,

            output_path: PathBuf::from("fns.asm"),
            start_index: 4,
        }
    }
}

impl Parameters {
    pub fn apply_cli(&mut self, args: &BuildArgs) {
        if let Some(profile) = &args.profile {
            self.profile = Profile::named(profile.clone());
        }

        if let Some(manifest_path) = &args.manifest_path {
            self.manifest_path = Some(manifest_path.clone());
        }
    }

    pub fn apply_extract_cli(&mut self, args: &ExtractArgs) {
        self.apply_cli(&args.build);

        if let Some(output) = &args.output {
            self.output_path = output.clone();
        }

        if let Some(start_index) = args.start_index {
            self.start_index = start_index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_hold_the_built_in_constants() {
        let parameters = Parameters::default();

        assert_eq!(parameters.profile.name, "asm");
        assert_eq!(parameters.output_path, PathBuf::from("fns.asm"));
        assert_eq!(parameters.start_index, 4);
        assert!(parameters.manifest_path.is_none());
    }

    #[test]
    fn cli_overrides_replace_only_what_they_name() {
        let mut parameters = Parameters::default();

        parameters.apply_extract_cli(&ExtractArgs {
            build: BuildArgs {
                profile: Some("release".to_string()),
                manifest_path: None,
            },
            output: None,
            start_index: Some(0),
        });

        assert_eq!(parameters.profile.name, "release");
        assert_eq!(parameters.start_index, 0);
        assert_eq!(parameters.output_path, PathBuf::from("fns.asm"));
    }
}
