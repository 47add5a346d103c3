use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("{0}")]
    Validation(String),
    #[error("'{0}' is not a valid integer")]
    InvalidNumber(String),
    #[error("Input closed")]
    InputClosed,
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ShopError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
