#![warn(clippy::use_self)]

mod app;
pub mod components;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
pub mod shell;

pub use self::app::{App, INDEX};

#[cfg(feature = "cli")]
pub use self::{
    cli::{run, shell_document},
    shell::shell,
};

/// The `masthead.toml` shipped with the application.
pub const DEFAULT_CONFIG: &str = include_str!("../masthead.toml");
