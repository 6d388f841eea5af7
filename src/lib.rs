pub mod config;
pub mod demo;
pub mod logging;
mod randomizer;

pub use config::Config;
pub use randomizer::*;
