use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid view size: width={width}, height={height}")]
    InvalidViewSize { width: f64, height: f64 },

    #[error("invalid range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("spacing must be finite and > 0, got {0}")]
    InvalidSpacing(f64),

    #[error("spacing would enumerate {count} positions (limit {limit})")]
    TooManySpacingPositions { count: u64, limit: u64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
