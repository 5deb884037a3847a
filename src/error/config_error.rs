/// Result type used throughout the translator.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while translating a configuration.
pub enum ConfigError {
    /// A line matched none of the recognised line forms.
    SyntaxError {
        /// The offending line, trimmed.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An evaluation referenced a constant that was never declared.
    UndefinedConstant {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was neither a number literal nor an array literal.
    InvalidValue {
        /// The rejected value text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array literal nests deeper than [`MAX_NESTING_DEPTH`].
    ///
    /// [`MAX_NESTING_DEPTH`]: crate::translator::parser::literal::MAX_NESTING_DEPTH
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ConfigError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::SyntaxError { line, .. }
            | Self::UndefinedConstant { line, .. }
            | Self::InvalidValue { line, .. }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SyntaxError { text, line } => {
                write!(f, "Error on line {line}: syntax error: {text}")
            },
            Self::UndefinedConstant { name, line } => {
                write!(f, "Error on line {line}: undefined constant: {name}")
            },
            Self::InvalidValue { text, line } => {
                write!(f, "Error on line {line}: invalid value: {text}")
            },
            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: arrays nested too deeply")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
