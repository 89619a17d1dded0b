//! Dataset loading errors

/// Errors raised while turning raw JSON into a row collection.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The input is not valid JSON.
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("Dataset must be a JSON array of objects")]
    NotAnArray,

    /// An element of the dataset is not a JSON object.
    #[error("Dataset element {index} is not an object")]
    NotAnObject { index: usize },
}
