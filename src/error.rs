use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A band scale was queried with a category outside its domain.
    ///
    /// This is a pipeline contract violation: every category passed to a
    /// scale must come from the same view the scale was built from.
    #[error("category `{name}` is not part of the band scale domain")]
    UnknownCategory { name: String },

    #[error("dataset load failed: {0}")]
    DataLoad(String),
}
