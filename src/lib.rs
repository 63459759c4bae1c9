pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{command::SumCommand, series::arithmetic_sum};
pub use utils::error::{Result, SumError};
