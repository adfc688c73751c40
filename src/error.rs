use thiserror::Error;

macro_rules! invalid_input {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidInput {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidInput {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only two failure modes exist. Everything else an algorithm can run into (an unreachable
/// target, a cycle in a dependency graph, a negative weight cycle) is a regular outcome and
/// is reported as the terminal step of the trace instead of an error.
///
/// # Error Categories
///
/// - [`Error::InvalidInput`] - The array or graph handed to an engine is malformed, of the wrong
///   shape for the selected algorithm, or exceeds the configured size limits
/// - [`Error::UnknownAlgorithm`] - The registry has no engine with the requested name
///
/// # Examples
///
/// ```rust
/// use algoscope::{Error, Registry, AlgorithmInput, RunParams};
///
/// let registry = Registry::new();
/// match registry.run_named("Shell", &AlgorithmInput::from(vec![3.0, 1.0]), &RunParams::default()) {
///     Err(Error::UnknownAlgorithm(name)) => assert_eq!(name, "Shell"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input could not be traced.
    ///
    /// Raised before any step is produced, for example when a graph references a neighbor
    /// id that is not one of its nodes, a start node is missing, an array contains a
    /// non-finite value, or the input exceeds the limits of the [`crate::EngineLimits`] in use.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was wrong with the input
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid input - {file}:{line}: {message}")]
    InvalidInput {
        /// The message to be printed for the InvalidInput error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The requested algorithm is not registered.
    ///
    /// The associated value is the identifier exactly as it was passed to the registry.
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl Error {
    /// Returns the human readable part of an [`Error::InvalidInput`], or the full display
    /// string for every other variant.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Error::InvalidInput { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_macro_records_location() {
        let err = invalid_input!("node {} is missing", 7);
        match &err {
            Error::InvalidInput {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "node 7 is missing");
                assert!(file.ends_with("error.rs"));
                assert!(*line > 0);
            }
            Error::UnknownAlgorithm(_) => panic!("wrong variant"),
        }
        assert_eq!(err.message(), "node 7 is missing");
    }

    #[test]
    fn test_unknown_algorithm_display() {
        let err = Error::UnknownAlgorithm("Shell".to_string());
        assert_eq!(err.to_string(), "Unknown algorithm 'Shell'");
        assert_eq!(err.message(), "Unknown algorithm 'Shell'");
    }
}
