use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),
    #[error("cipher error: {0}")]
    Cipher(#[from] crate::cipher::CipherError),
    #[error("other error: {0}")]
    Other(String),
}
