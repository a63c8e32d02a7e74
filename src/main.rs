mod cli;
mod domain;
mod errors;
mod prelude;
mod store;

use std::process::exit;

fn main() {
    env_logger::init();

    if let Err(e) = cli::run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
