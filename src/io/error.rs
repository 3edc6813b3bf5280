//! Error types for grid preparation, catalog loading and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Module matrix handed to the grid preparer is empty or not square
    InvalidGrid {
        /// Description of what's wrong with the matrix
        reason: String,
    },

    /// User supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog file is not a valid JSON list of plate shapes
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Payload could not be encoded as a QR code
    QrEncoding {
        /// Length of the payload in bytes
        payload_len: usize,
        /// Underlying encoder error
        source: qrcode::types::QrError,
    },

    /// Failed to save the rendered mosaic
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Embedded font used for the instruction text could not be parsed
    FontLoad {
        /// Underlying font parser error
        source: ab_glyph::InvalidFont,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize placements for export
    Serialization {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid module grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CatalogParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::QrEncoding {
                payload_len,
                source,
            } => {
                write!(
                    f,
                    "Failed to encode {payload_len} byte payload as QR code: {source}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FontLoad { source } => {
                write!(f, "Failed to load instruction font: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to write placements to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogParse { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::QrEncoding { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FontLoad { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidGrid { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: impl Into<String>) -> MosaicError {
    MosaicError::InvalidGrid {
        reason: reason.into(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
