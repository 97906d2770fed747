//! Topica CLI binary.

use clap::Parser;
use std::process;
use topica::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = TopicaArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
