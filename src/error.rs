use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("config error: {0}")]
    Config(String),
}
