use clap::Parser;
use confpacket::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
