#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::run;
use crate::models::args::Cli;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run::run_suite(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            // Launcher and logger errors already carry their source in the message.
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        },
    }
}
