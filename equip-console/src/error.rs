//! app error

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("remote service answered status {0}")]
    RemoteStatus(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    MsgError(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
