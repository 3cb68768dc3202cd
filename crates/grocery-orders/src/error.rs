//! Order error types.

use thiserror::Error;

/// Errors that can occur while loading orders.
///
/// Mutations on [`Order`](crate::Order) never fail; they report
/// duplicate or missing products through their `bool` return values.
#[derive(Error, Debug)]
pub enum OrderError {
    /// The backing data source could not be read.
    #[error("Failed to read order source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line of the data source could not be parsed.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Order id is not a positive integer.
    #[error("Invalid order id: {0:?}")]
    InvalidOrderId(String),

    /// Price is not a decimal number.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

impl OrderError {
    /// Wrap a field-level error with the line it came from.
    pub(crate) fn at_line(line: usize, reason: impl ToString) -> Self {
        OrderError::MalformedRecord {
            line,
            reason: reason.to_string(),
        }
    }
}
