// SPDX-License-Identifier: MPL-2.0

//! Error types for the guardian application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Location acquisition errors
    Location(LocationError),
    /// Map document errors
    Map(MapError),
    /// Invalid settings or command line options
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Location-specific errors
///
/// None of these reach the user: the safety map falls back to its default
/// center whenever acquisition fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The location service refused access
    PermissionDenied,
    /// A position was requested before permission was granted
    NotStarted,
    /// No fix arrived in time
    Timeout,
    /// The location service is not reachable
    ServiceUnavailable(String),
    /// Backend error (e.g., D-Bus)
    Backend(String),
}

/// Map document errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Marker data could not be serialized
    Serialization(String),
    /// The document could not be written
    Write(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Location(e) => write!(f, "Location error: {}", e),
            AppError::Map(e) => write!(f, "Map error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "Location permission denied"),
            LocationError::NotStarted => write!(f, "Location request not started"),
            LocationError::Timeout => write!(f, "Timed out waiting for a location fix"),
            LocationError::ServiceUnavailable(msg) => {
                write!(f, "Location service unavailable: {}", msg)
            }
            LocationError::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Serialization(msg) => write!(f, "Failed to serialize markers: {}", msg),
            MapError::Write(msg) => write!(f, "Failed to write map: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for LocationError {}
impl std::error::Error for MapError {}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        AppError::Location(err)
    }
}

impl From<MapError> for AppError {
    fn from(err: MapError) -> Self {
        AppError::Map(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::Write(err.to_string())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Serialization(err.to_string())
    }
}

impl From<zbus::Error> for LocationError {
    fn from(err: zbus::Error) -> Self {
        LocationError::Backend(err.to_string())
    }
}

impl From<zbus::fdo::Error> for LocationError {
    fn from(err: zbus::fdo::Error) -> Self {
        LocationError::Backend(err.to_string())
    }
}
