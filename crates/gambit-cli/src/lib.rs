//! Terminal front end for playing gambit games.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;

pub use config::{SessionConfig, SessionOption};
pub use controller::Controller;
pub use error::CliError;
