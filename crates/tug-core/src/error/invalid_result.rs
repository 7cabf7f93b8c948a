use super::Error;

/// Error when a driver response has the wrong shape for the operation.
#[derive(Debug)]
pub(super) struct InvalidResultError {
    pub(super) message: String,
}

impl std::error::Error for InvalidResultError {}

impl core::fmt::Display for InvalidResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an error for a driver response with the wrong shape, e.g. an
    /// affected-row count where rows were expected.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResultError {
            message: message.into(),
        }))
    }
}
