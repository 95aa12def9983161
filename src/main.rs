pub mod cli;
pub mod error;
pub mod extract;
pub mod filter;
pub mod listing;
pub mod parameters;
pub mod toolchain;

use crate::cli::Command;
use crate::error::ExtractError;
use crate::parameters::Parameters;
use crate::toolchain::{CargoToolchain, Toolchain};
use structopt::StructOpt;

pub fn main() {
    if let Err(error) = run() {
        eprintln!("error: {}", error);
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), ExtractError> {
    let command: Command = StructOpt::from_args();

    let mut parameters = Parameters::default();

    match &command {
        Command::Build(args) | Command::List(args) => parameters.apply_cli(args),
        Command::Extract(args) => parameters.apply_extract_cli(args),
    }

    let toolchain = CargoToolchain::new(parameters.manifest_path.clone());

    match command {
        Command::Build(_) => {
            toolchain.build(&parameters.profile)?;
        }
        Command::List(_) => {
            let listing = toolchain.list_entries()?;

            for entry in listing::entries(&listing) {
                println!("{:>4} {}", entry.index, entry.name);
            }
        }
        Command::Extract(_) => {
            extract::extract(&toolchain, &parameters)?;

            println!("Wrote {}", parameters.output_path.display());
        }
    }

    Ok(())
}
