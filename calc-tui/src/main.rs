//! Standalone binary for the interactive terminal calculator.
//! Usage:
//!   calctui

mod app;

use clap::Command;

fn main() {
    Command::new("calctui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal calculator with BODMAS precedence")
        .get_matches();

    if let Err(err) = app::runner::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
