/// Errors that can occur while decoding query strings or action kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Percent-decoded bytes are not valid UTF-8
    InvalidPercentEncoding,
    /// Action type string is not one of the known kinds
    UnknownAction,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::UnknownAction => "Unknown action type",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
