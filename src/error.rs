use thiserror::Error;

pub type ChartSpecResult<T> = Result<T, ChartSpecError>;

#[derive(Debug, Error)]
pub enum ChartSpecError {
    #[error("invalid chart dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed series `{series}`: {reason}")]
    MalformedSeries { series: String, reason: String },

    #[error("series `{series}` has {points} points but only {labels} labels")]
    LabelMismatch {
        series: String,
        points: usize,
        labels: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
