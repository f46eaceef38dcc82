use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph or root list was written
    Success = 0,
    /// Any failure after argument parsing (unknown package, pkg failure, I/O error, etc.)
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

/// Application-specific errors for dependency graph generation.
///
/// None of these are retried: the package database is assumed to be
/// internally consistent, so every variant aborts the run.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Unknown package: {name} (referenced by {referenced_by})\n\n💡 Hint: The package database reported a dependency that is not installed. Try `pkg check -d` to inspect it")]
    UnknownPackage { name: String, referenced_by: String },

    #[error("Invalid package name: {name:?}\nReason: {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Package query failed: {command}\nStatus: {status}\nDetails: {stderr}")]
    QueryFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Package query produced undecodable output: {command}\nDetails: {details}")]
    QueryOutputDecode { command: String, details: String },

    #[error("Malformed package query line: {line:?}\n\n💡 Hint: Expected exactly one '::' separator between package and dependency")]
    MalformedQueryLine { line: String },

    #[error("pkg binary unavailable: {path}\nReason: {reason}\n\n💡 Hint: Install pkg(8) or pass its location with --pkg")]
    PkgNotFound { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
