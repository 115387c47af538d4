#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod locate;
pub mod ops;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let args = cli::FixArgs::parse();
    command::fix::execute(args)
}
