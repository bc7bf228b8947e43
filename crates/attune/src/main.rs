use anyhow::Context;
use clap::Parser;

use attune::cli::{execute, Cli};
use attune::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = execute(&cli).and_then(|out| {
        cli.destination()
            .write_text(&out)
            .context("failed to write output")
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
