use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Conflict(String),
    NotFound(String),
    CorruptData(String),
    Persistence(std::io::Error),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Conflict(name) => {
                write!(f, "Contact '{}' already exists", name)
            }
            AppError::NotFound(name) => {
                write!(f, "Contact '{}' not found", name)
            }
            AppError::CorruptData(detail) => {
                write!(f, "Contact file is corrupt: {}", detail)
            }
            AppError::Persistence(e) => {
                write!(f, "Failed to save contacts: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}
