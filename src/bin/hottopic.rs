// src/bin/hottopic.rs
use clap::Parser;
use colored::Colorize;
use hottopic_core::cli::{self, Cli};
use hottopic_core::exit::HotTopicExit;

fn main() -> HotTopicExit {
    let cli = Cli::parse();

    match cli::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            HotTopicExit::Error
        }
    }
}
