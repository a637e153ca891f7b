/// Argument and config parsing error type.
#[derive(Debug)]
pub enum ArgError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Serde JSON error.
    SerdeJsonError(serde_json::Error),
    /// Serde YAML error.
    SerdeYamlError(serde_yaml::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            ArgError::SerdeJsonError(error) => write!(f, "- JSON Serialization Error:\n{}", error),
            ArgError::SerdeYamlError(error) => write!(f, "- YAML Serialization Error:\n{}", error),
            ArgError::TomlSerError(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            ArgError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for ArgError {
    fn from(error: crate::io::IoError) -> Self {
        ArgError::IoError(error)
    }
}
impl From<serde_json::Error> for ArgError {
    fn from(error: serde_json::Error) -> Self {
        ArgError::SerdeJsonError(error)
    }
}
impl From<serde_yaml::Error> for ArgError {
    fn from(error: serde_yaml::Error) -> Self {
        ArgError::SerdeYamlError(error)
    }
}
impl From<toml::ser::Error> for ArgError {
    fn from(error: toml::ser::Error) -> Self {
        ArgError::TomlSerError(error)
    }
}
impl From<String> for ArgError {
    fn from(error: String) -> Self {
        ArgError::StringOnly(error)
    }
}

/// Result type for the `args` module.
pub type ProcResult<T> = std::result::Result<T, ArgError>;

/// Create a `ArgError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(ArgError::StringOnly(error_str.to_string()))
}
