pub mod boundary;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod naming;
pub mod output;
pub mod release;
pub mod resolver;
pub mod ui;

pub use error::{ReleaseError, Result};
