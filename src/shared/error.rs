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
    /// Success - zero or one manifest found, or duplicates in advisory mode
    Success = 0,
    /// Duplicate manifests were found and --deny-duplicates was requested
    DuplicatesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (descriptor parse error, file I/O error, etc.)
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
            ExitCode::DuplicatesDetected => write!(f, "Duplicates Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the manifest audit.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration descriptor not found: {path}\n\n💡 Hint: {suggestion}")]
    DescriptorNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse configuration descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the descriptor is valid TOML with a [[configuration]] array")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read archive: {path}\nDetails: {details}")]
    ArchiveReadError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}

/// A configuration whose artifacts could not be resolved.
///
/// This is the only failure kind recovered per configuration: the audit
/// records the configuration's name and continues with the next one.
/// Archive-read failures are a separate domain (`AuditError::ArchiveReadError`)
/// and never masquerade as resolution failures.
#[derive(Debug, Error)]
#[error("Could not resolve configuration: {name}")]
pub struct ResolutionError {
    /// Name of the configuration that failed to resolve
    pub name: String,
    /// Underlying cause, kept for the JSON report
    pub details: String,
}

impl ResolutionError {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }
}
