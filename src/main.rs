use clap::Parser;
use marketmind::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
