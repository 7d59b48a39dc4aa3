//! Error types for the catvisit engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these are fatal to the running process: every failure surfaces as a short
//! message and returns control to the caller for correction or retry.

use thiserror::Error;

/// Errors that can occur when talking to the geocoder gateway.
#[derive(Error, Debug)]
pub enum GeocodingError {
    /// The gateway could not resolve an address to a location
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Both addresses resolved but no route connects them
    #[error("No route found between the addresses")]
    RouteNotFound,

    /// The distance lookup exceeded the hard request timeout
    #[error("Connection timeout")]
    Timeout,

    /// Current-location lookup was refused by the gateway
    #[error("Location permission denied")]
    PermissionDenied,

    /// Failed to parse a gateway response
    #[error("Geocoder response parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("Geocoder transport error: {0}")]
    Transport(String),
}

/// Errors that can occur while building or confirming a quote.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The pricing tier table is empty; no price can be computed
    #[error("No pricing tiers configured")]
    InvalidConfiguration,

    /// No destination address was provided
    #[error("Destination address is missing")]
    MissingAddress,

    /// The base (origin) address has not been set in the settings
    #[error("Base address is not set")]
    MissingOrigin,

    /// No visit dates were selected
    #[error("No visit dates selected")]
    NoDatesSelected,

    /// The distance lookup failed
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),
}

/// Errors that can occur in the persistence layer.
///
/// Persistence failures are treated as non-fatal: in-memory state stays
/// authoritative for the session even when a write fails.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem read/write failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be serialized or deserialized
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic storage error with context
    #[error("Storage error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur while delivering a reminder alert.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No system notification mechanism is available or authorized
    #[error("System notifications unavailable: {0}")]
    Unavailable(String),

    /// The delivery attempt itself failed
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Errors that can occur when accessing the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard could not be opened (headless session, permission)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing clipboard contents failed
    #[error("Clipboard access failed: {0}")]
    Access(String),
}

/// Convenience type alias for Results with GeocodingError
pub type GeocodingResult<T> = Result<T, GeocodingError>;

/// Convenience type alias for Results with QuoteError
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with NotifyError
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Convenience type alias for Results with ClipboardError
pub type ClipboardResult<T> = Result<T, ClipboardError>;
