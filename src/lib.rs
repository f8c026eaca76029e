// serialization
#[macro_use]
extern crate serde_derive;
extern crate serde;

// logging
#[macro_use]
extern crate log;

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::Config;

pub mod gaussian;
pub use gaussian::{gaussian, Gaussian};

pub mod grid;
pub use grid::{Grid, run};
