//! Error types for the status dashboard

use std::fmt;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug)]
pub enum DashboardError {
    /// IO operation failed
    Io(std::io::Error),

    /// HTTP request failed at the transport level
    Http(reqwest::Error),

    /// Page template failed to render
    Render(askama::Error),

    /// Configuration error
    Config(String),

    /// Probe did not complete within its bound
    Timeout(Duration),

    /// Dependency answered with something other than 200
    UnexpectedStatus(u16),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Io(err) => write!(f, "IO error: {}", err),
            DashboardError::Http(err) => write!(f, "HTTP error: {}", err),
            DashboardError::Render(err) => write!(f, "Render error: {}", err),
            DashboardError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DashboardError::Timeout(limit) => {
                write!(f, "Request timed out after {}ms", limit.as_millis())
            }
            DashboardError::UnexpectedStatus(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Io(err) => Some(err),
            DashboardError::Http(err) => Some(err),
            DashboardError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err)
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err)
    }
}
