use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{path}` is not a readable config file")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Styles(#[from] masthead_styles::Error),
    #[error("no profile named `{0}`")]
    UnknownProfile(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
