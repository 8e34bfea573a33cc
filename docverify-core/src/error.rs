use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Please select a file!")]
    NoSelection,

    #[error("parse error: {0}")]
    Parse(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, VerifyError>;
