/// Quad loading error type.
/// Every variant aborts the load, the caller never receives a partially built set.
#[derive(Debug)]
pub enum QuadError {
    /// A literal point that is not three numbers.
    MalformedPoint {
        source: String,
        quad: usize,
        attribute: String,
        value: String,
    },
    /// An attribute with a value of the wrong type.
    MalformedAttribute {
        source: String,
        quad: usize,
        attribute: String,
        value: String,
    },
    /// A required point attribute is absent.
    MissingAttribute {
        source: String,
        quad: usize,
        attribute: String,
    },
    /// An indexed point names a quad not yet loaded, or a vertex outside 0-3.
    IndexOutOfRange {
        source: String,
        quad: usize,
        attribute: String,
        ref_quad: usize,
        ref_vertex: usize,
        loaded: usize,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for QuadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadError::MalformedPoint { source, quad, attribute, value } =>
                write!(f, "- Malformed point {}=\"{}\" in quad {} of '{}'", attribute, value, quad, source),
            QuadError::MalformedAttribute { source, quad, attribute, value } =>
                write!(f, "- Malformed attribute {}=\"{}\" in quad {} of '{}'", attribute, value, quad, source),
            QuadError::MissingAttribute { source, quad, attribute } =>
                write!(f, "- Missing attribute '{}' in quad {} of '{}'", attribute, quad, source),
            QuadError::IndexOutOfRange { source, quad, attribute, ref_quad, ref_vertex, loaded } =>
                write!(f, "- Point {}=\"{}:{}\" in quad {} of '{}' is out of range ({} quads loaded, vertices 0-3)",
                    attribute, ref_quad, ref_vertex, quad, source, loaded),
            QuadError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<String> for QuadError {
    fn from(error: String) -> Self {
        QuadError::StringOnly(error)
    }
}

/// Result type for the `quads` module.
pub type ProcResult<T> = std::result::Result<T, QuadError>;

/// Create a `QuadError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(QuadError::StringOnly(error_str.to_string()))
}
