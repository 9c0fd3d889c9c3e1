//! mvnfetch CLI
//!
//! Entry point for the mvnfetch command-line application.

use clap::Parser;

use mvnfetch::cli::output::display_error;
use mvnfetch::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    cli.output_config().init_tracing();

    // Run the command and handle errors
    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
