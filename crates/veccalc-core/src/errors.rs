use thiserror::Error;

/// Result type alias using VecCalcError
pub type Result<T> = std::result::Result<T, VecCalcError>;

/// Canonical error taxonomy for veccalc
///
/// Command-level variants (`ParseError`, `InvalidComponentKey`,
/// `UnknownVariable`, `InvalidName`, `ArityError`, `UnknownCommand`) are
/// caught at the dispatch boundary and reported as printed text; the
/// session continues. `MalformedStoreLine` and `Io` arise while loading or
/// writing the persisted file and abort the run instead.
#[derive(Debug, Error)]
pub enum VecCalcError {
    /// A component token is not a valid decimal
    #[error("Invalid component value '{token}': not a valid decimal")]
    ParseError { token: String },

    /// An alias character/index has no mapped component
    #[error("Invalid key. No component for '{key}'")]
    InvalidComponentKey { key: String },

    /// Lookup of a name not present in variables or constants
    #[error("Variable '{name}' does not exist")]
    UnknownVariable { name: String },

    /// A `set` target collides with a constant name or contains a reserved character
    #[error("Invalid variable name: '{name}' {reason}")]
    InvalidName { name: String, reason: String },

    /// Argument count outside the accepted range/set for the keyword
    #[error("'{keyword}' expects {expected} argument(s), got {actual}")]
    ArityError {
        keyword: String,
        expected: String,
        actual: usize,
    },

    /// Keyword not recognized by the interpreter
    #[error("Unknown command '{keyword}'")]
    UnknownCommand { keyword: String },

    /// A persisted line does not have exactly four tokens (fatal, load-time only)
    #[error("Error in variables file: should have 4 tokens in line '{line}'")]
    MalformedStoreLine { line: String },

    /// Filesystem failure while reading or writing the variables file
    #[error("Variables file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VecCalcError {
    /// Stable error code for programmatic handling and log fields
    pub fn code(&self) -> &'static str {
        match self {
            VecCalcError::ParseError { .. } => "ERR_PARSE",
            VecCalcError::InvalidComponentKey { .. } => "ERR_INVALID_COMPONENT_KEY",
            VecCalcError::UnknownVariable { .. } => "ERR_UNKNOWN_VARIABLE",
            VecCalcError::InvalidName { .. } => "ERR_INVALID_NAME",
            VecCalcError::ArityError { .. } => "ERR_ARITY",
            VecCalcError::UnknownCommand { .. } => "ERR_UNKNOWN_COMMAND",
            VecCalcError::MalformedStoreLine { .. } => "ERR_MALFORMED_STORE_LINE",
            VecCalcError::Io(_) => "ERR_IO",
        }
    }
}
