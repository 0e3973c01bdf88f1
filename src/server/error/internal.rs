use thiserror::Error;

use crate::model::api::UnknownVariantError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumerated column holds a value outside its closed set.
    ///
    /// Only possible when rows are written outside the API. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("Failed to parse stored value '{value}' of column {column}: {source}")]
    ParseStoredEnum {
        /// The column the value was read from
        column: &'static str,
        /// The raw stored value
        value: String,
        /// The underlying parse error
        #[source]
        source: UnknownVariantError,
    },
}
