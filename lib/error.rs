//! Errors

use std::fmt;

#[derive(Debug, Clone, Copy, PartialOrd, PartialEq, Ord, Eq)]
pub enum ErrorType {
    /// Configuration and site profile errors
    Config,

    /// Content extraction errors
    Extract,

    /// Network errors between the reader and the site
    Fetch,

    /// HTML parsing errors
    Html,

    /// IO errors
    Io,

    /// JSON parsing errors
    Json,

    /// When the site returns a non-success status
    Status,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Config => f.write_str("config"),
            ErrorType::Extract => f.write_str("extract"),
            ErrorType::Fetch => f.write_str("fetch"),
            ErrorType::Html => f.write_str("html"),
            ErrorType::Io => f.write_str("io"),
            ErrorType::Json => f.write_str("json"),
            ErrorType::Status => f.write_str("status"),
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub error_type: ErrorType,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.message)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::io(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Error {
        let mut err: &dyn std::error::Error = &error;
        while let Some(source) = err.source() {
            err = source;
        }
        Error::fetch(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::json(error)
    }
}

impl<'a> From<scraper::error::SelectorErrorKind<'a>> for Error {
    fn from(error: scraper::error::SelectorErrorKind<'a>) -> Self {
        Error::html(error)
    }
}

impl Error {
    pub fn config(msg: impl fmt::Display) -> Error {
        Error {
            error_type: ErrorType::Config,
            message: format!("{}", msg),
        }
    }

    pub fn extract(msg: impl fmt::Display) -> Error {
        Error {
            error_type: ErrorType::Extract,
            message: format!("{}", msg),
        }
    }

    pub fn fetch(msg: impl fmt::Display) -> Error {
        Error {
            error_type: ErrorType::Fetch,
            message: format!("{}", msg),
        }
    }

    pub fn html(msg: impl fmt::Display) -> Error {
        Error {
            error_type: ErrorType::Html,
            message: format!("{}", msg),
        }
    }

    pub fn io(msg: impl fmt::Display) -> Error {
        Error {
            error_type: ErrorType::Io,
            message: format!("{}", msg),
        }
    }

    pub fn json(msg: impl fmt::Display) -> Error {
        Error {
            error_type: ErrorType::Json,
            message: format!("{}", msg),
        }
    }

    pub fn status(status: u16) -> Error {
        Error {
            error_type: ErrorType::Status,
            message: format!("returned status {}", status),
        }
    }
}
