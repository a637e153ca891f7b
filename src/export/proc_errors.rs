/// Export process error type.
#[derive(Debug)]
pub enum ExportError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Error while loading the quads to export.
    QuadError(crate::quads::QuadError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            ExportError::QuadError(error) => write!(f, "- Quad Error:\n{}", error),
            ExportError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for ExportError {
    fn from(error: crate::io::IoError) -> Self {
        ExportError::IoError(error)
    }
}
impl From<crate::quads::QuadError> for ExportError {
    fn from(error: crate::quads::QuadError) -> Self {
        ExportError::QuadError(error)
    }
}
impl From<String> for ExportError {
    fn from(error: String) -> Self {
        ExportError::StringOnly(error)
    }
}

/// Result type for the `export` module.
pub type ProcResult<T> = std::result::Result<T, ExportError>;

/// Create a `ExportError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(ExportError::StringOnly(error_str.to_string()))
}
