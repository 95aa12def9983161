use std::path::PathBuf;
use structopt::*;

#[derive(Debug, StructOpt)]
pub struct BuildArgs {
    #[structopt(long)]
    pub profile: Option<String>,

    #[structopt(long, parse(from_os_str))]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct ExtractArgs {
    #[structopt(flatten)]
    pub build: BuildArgs,

    #[structopt(long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    #[structopt(long)]
    pub start_index: Option<u32>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "Build the library in the disassembly profile")]
    Build(BuildArgs),

    #[structopt(about = "List the entries the disassembler knows about")]
    List(BuildArgs),

    #[structopt(about = "Build, disassemble every entry and write the combined listing")]
    Extract(ExtractArgs),
}
