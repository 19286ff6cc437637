use thiserror::Error;

pub mod commands {
    pub mod ai;
    pub mod delete;
    pub mod export;
    pub mod generate;
    pub mod init;
    pub mod list;
    pub mod load;
    pub mod lock;
    pub mod save;
    pub mod show;
}

mod output;
mod workspace;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Chroma(#[from] libchroma::Error),
    #[error("{0}")]
    General(String),
}
