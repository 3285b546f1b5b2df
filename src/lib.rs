#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod batch;
pub mod cli;
pub mod log_utils;
pub mod process;
