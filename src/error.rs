use thiserror::Error;

/// Error raised when a deflate stream cannot be decoded.
///
/// Every failure mode is the same caller-visible condition: the input is
/// not a well-formed deflate stream for the provided output buffer. The
/// payload names the first violated constraint.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("corrupt deflate stream: {0}")]
pub struct DataError(pub(crate) &'static str);

impl DataError {
    /// The first constraint the stream violated.
    pub fn reason(&self) -> &'static str {
        self.0
    }
}

pub type InflateResult<T> = Result<T, DataError>;
