use super::Error;

/// Error for a malformed or unsupported connection URL.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrlError {
    pub(super) message: String,
}

impl std::error::Error for InvalidConnectionUrlError {}

impl core::fmt::Display for InvalidConnectionUrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection url: {}", self.message)
    }
}

impl Error {
    /// Creates an error for a malformed or unsupported connection URL.
    pub fn invalid_connection_url(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrlError {
                message: message.into(),
            },
        ))
    }
}
