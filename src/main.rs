// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use log_tally::{app, cli::Args, config::AppConfig, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    match AppConfig::try_from(args).map_err(anyhow::Error::from).and_then(|config| app::run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("log_tally: {err}");
            ExitCode::FAILURE
        }
    }
}
