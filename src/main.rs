//! Binary entry point for `googlesignin-fix`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = googlesignin_fix::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
