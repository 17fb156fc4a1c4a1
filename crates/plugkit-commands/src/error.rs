//! Error types for command loading

use std::path::PathBuf;
use thiserror::Error;

/// Command loading errors
///
/// Parsing never fails; every variant here is an I/O or path problem and
/// aborts the whole load.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Command root exists but is not a directory
    #[error("Command root {} is not a directory", .path.display())]
    NotADirectory {
        /// Offending path
        path: PathBuf,
    },

    /// Listing a directory under the command root failed
    #[error("Failed to scan {}: {source}", .path.display())]
    Scan {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading a command file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A command file path does not live under the command root
    #[error("{} is not under command root {}", .path.display(), .root.display())]
    OutsideRoot {
        /// Command root
        root: PathBuf,
        /// File path
        path: PathBuf,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, CommandError>;
