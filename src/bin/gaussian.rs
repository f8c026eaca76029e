#[macro_use] extern crate log;
extern crate env_logger;
extern crate gaussian_grid;

use std::io;
use std::process;

use gaussian_grid::{Config, run};

fn main() {
    env_logger::init();

    let config = Config::default();
    debug!("Config:\n{:?}", config);

    let stdout = io::stdout();
    if let Err(e) = run(&config, stdout.lock()) {
        error!("{}", e);
        eprintln!("gaussian: {}", e);
        process::exit(1);
    }
}
