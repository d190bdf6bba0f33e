use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every bundle converted without diagnostics (or not in strict mode)
    Success = 0,
    /// Missing, unhandled or rejected embedded libraries were reported in strict mode
    DiagnosticsReported = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid graph file, bad configuration, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DiagnosticsReported => write!(f, "Diagnostics Reported (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for bundle mavenization.
///
/// Validation variants abort a whole invocation; everything the walk can
/// recover from is recorded as diagnostic data instead of being raised.
#[derive(Debug, Error)]
pub enum MavenizeError {
    #[error("Bundle graph file not found: {path}\n\n💡 Hint: {suggestion}")]
    GraphFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse bundle graph file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that every [[bundle]] entry has a symbolic_name, version and location")]
    GraphParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Corrupt caller input: empty identities, bound-less ranges, bad option values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid option pattern '{pattern}': {reason}\n\n💡 Hint: Patterns are comma-separated alternatives of '.'-separated segments; '*' matches one segment, '**' any number, a leading '!' excludes")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid directive '{value}' for option '{key}'\n\n💡 Hint: Expected one of {expected}")]
    InvalidDirective {
        key: String,
        value: String,
        expected: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl MavenizeError {
    pub fn validation(message: impl Into<String>) -> Self {
        MavenizeError::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::DiagnosticsReported.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::DiagnosticsReported),
            "Diagnostics Reported (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_graph_file_not_found_display() {
        let error = MavenizeError::GraphFileNotFound {
            path: PathBuf::from("/test/bundles.toml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Bundle graph file not found"));
        assert!(display.contains("/test/bundles.toml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = MavenizeError::InvalidPattern {
            pattern: "org..foo".to_string(),
            reason: "empty segment".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("org..foo"));
        assert!(display.contains("empty segment"));
    }

    #[test]
    fn test_invalid_directive_display() {
        let error = MavenizeError::InvalidDirective {
            key: "org.foo/lib/a.jar".to_string(),
            value: "maybe".to_string(),
            expected: "mavenize, ignore".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("'maybe'"));
        assert!(display.contains("org.foo/lib/a.jar"));
        assert!(display.contains("mavenize, ignore"));
    }

    #[test]
    fn test_validation_helper() {
        let error = MavenizeError::validation("symbolic name must not be empty");
        assert_eq!(
            format!("{}", error),
            "Validation error: symbolic name must not be empty"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = MavenizeError::validation("boom").into();
        assert!(matches!(
            err.downcast_ref::<MavenizeError>(),
            Some(MavenizeError::Validation { .. })
        ));
    }
}
