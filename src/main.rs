extern crate env_logger;
extern crate glhello;
#[macro_use]
extern crate log;

use std::process;

use glhello::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Settings::default()) {
        error!("{}", err);
        process::exit(err.exit_code());
    }
}
