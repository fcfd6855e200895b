use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = cli::Cli::parse();
    commands::handle_target(&cli)
}
