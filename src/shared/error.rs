use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish argument mistakes from
/// failures that happened while building the SBOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the SBOM was generated and presented
    Success = 0,
    /// Application error (unreadable package tree, file I/O error, invalid input, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Resolved package tree not found: {path}\n\n💡 Hint: {suggestion}")]
    PackageTreeNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse resolved package tree: {path}\nDetails: {details}\n\n💡 Hint: The tree must be a JSON object as produced by `npm ls --json --all --long`")]
    PackageTreeParseError { path: PathBuf, details: String },

    #[error("Failed to parse lock file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the lock file is valid JSON")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to parse BOM document: {path}\nDetails: {details}\n\n💡 Hint: Additional BOMs must be CycloneDX XML documents")]
    BomDocumentParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for typed fields and builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to merge BOM documents\nDetails: {details}")]
    MergeError { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SbomError {
    /// Shorthand for a validation failure with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        SbomError::Validation {
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
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_package_tree_not_found_display() {
        let error = SbomError::PackageTreeNotFound {
            path: PathBuf::from("/test/path/package-tree.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Resolved package tree not found"));
        assert!(display.contains("/test/path/package-tree.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_package_tree_parse_error_display() {
        let error = SbomError::PackageTreeParseError {
            path: PathBuf::from("/test/package-tree.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse resolved package tree"));
        assert!(display.contains("expected value at line 1"));
        assert!(display.contains("npm ls --json"));
    }

    #[test]
    fn test_bom_document_parse_error_display() {
        let error = SbomError::BomDocumentParseError {
            path: PathBuf::from("/test/ext-bom.xml"),
            details: "unexpected end of file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse BOM document"));
        assert!(display.contains("/test/ext-bom.xml"));
        assert!(display.contains("CycloneDX XML"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/test/bom.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/bom.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = SbomError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("Directory does not exist"));
    }

    #[test]
    fn test_validation_shorthand() {
        let error = SbomError::validation("Version must be at least 1");
        assert_eq!(
            format!("{}", error),
            "Validation error: Version must be at least 1"
        );
    }

    #[test]
    fn test_security_error_display() {
        let error = SbomError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
