use crate::{
    args,
    export,
    quads,
};

/// Error-type enum for the `quadset` crate.
/// Wraps the errors of each process stage.
#[derive(Debug)]
pub enum QuadsetError {
    ArgError(args::ArgError),
    QuadError(quads::QuadError),
    ExportError(export::ExportError),
    StringOnly(String),
}
impl std::fmt::Display for QuadsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadsetError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            QuadsetError::QuadError(error) => write!(f, "! QUAD LOADING ERROR:\n{}", error),
            QuadsetError::ExportError(error) => write!(f, "! EXPORT ERROR:\n{}", error),
            QuadsetError::StringOnly(error) => write!(f, "! QUADSET ERROR:\n- {}", error),
        }
    }
}
impl From<String> for QuadsetError {
    fn from(error: String) -> Self {
        QuadsetError::StringOnly(error)
    }
}
impl From<args::ArgError> for QuadsetError {
    fn from(error: args::ArgError) -> Self {
        QuadsetError::ArgError(error)
    }
}
impl From<quads::QuadError> for QuadsetError {
    fn from(error: quads::QuadError) -> Self {
        QuadsetError::QuadError(error)
    }
}
impl From<export::ExportError> for QuadsetError {
    fn from(error: export::ExportError) -> Self {
        QuadsetError::ExportError(error)
    }
}

/// Result type for the `quadset` crate.
pub type QuadsetResult<T> = std::result::Result<T, QuadsetError>;

/// Create a `QuadsetResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::QuadsetError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> QuadsetResult<T> {
    Err(QuadsetError::StringOnly(error_str.to_string()))
}
