use std::fmt;

/// A recoverable condition met while loading a quad file.
/// Reported to a `DiagnosticSink`, loading carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The file could not be read or parsed. The set stays empty.
    SourceNotFound {
        source: String,
        cause: String,
    },
    /// The root element is not `quads`. The set stays empty.
    InvalidRoot {
        source: String,
        found: String,
    },
    /// A child of the root that is not a `quad`. The element is skipped.
    UnexpectedElement {
        source: String,
        tag: String,
    },
}
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SourceNotFound { source, cause } =>
                write!(f, "QuadSet '{}' not found.\n{}", source, cause),
            Diagnostic::InvalidRoot { source, found } =>
                write!(f, "QuadSet '{}' not found (root element is '{}', expected 'quads').", source, found),
            Diagnostic::UnexpectedElement { source, tag } =>
                write!(f, "Unsupported node type '{}' found in '{}' - ignored.", tag, source),
        }
    }
}

/// Receiver for loader diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;
impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

/// Keeps every diagnostic, in report order.
#[derive(Debug, Default, Clone)]
pub struct CollectSink {
    pub diagnostics: Vec<Diagnostic>,
}
impl CollectSink {
    pub fn new() -> Self {
        CollectSink::default()
    }
}
impl DiagnosticSink for CollectSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
