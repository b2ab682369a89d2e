//! Error types for texture composition and sample I/O

use crate::bitmap::ColorMode;
use std::fmt;
use std::path::PathBuf;

/// Size and colour mode of a bitmap taking part in a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Colour mode of the bitmap
    pub mode: ColorMode,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.mode, self.width, self.height)
    }
}

/// Main error type for all texture operations
#[derive(Debug)]
pub enum TextureError {
    /// Two bitmaps do not share the size (or mode) an operation needs
    ShapeMismatch {
        /// Operation that rejected its operands
        operation: &'static str,
        /// Shape of the left-hand operand
        left: Shape,
        /// Shape of the right-hand operand
        right: Shape,
    },

    /// A strategy received fewer or more samples than it consumes per group
    InsufficientSamples {
        /// Name of the strategy
        strategy: &'static str,
        /// Samples the strategy consumes per group
        required: usize,
        /// Samples actually handed over
        provided: usize,
    },

    /// No sample (or a zero-area bitmap) was supplied
    EmptyInput {
        /// What was empty
        context: &'static str,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Image mode or size not matching in {operation}: {left} vs {right}"
                )
            }
            Self::InsufficientSamples {
                strategy,
                required,
                provided,
            } => {
                write!(
                    f,
                    "Wrong number of samples for {strategy}: expected {required}, got {provided}"
                )
            }
            Self::EmptyInput { context } => write!(f, "Not enough samples: {context} is empty"),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for texture results
pub type Result<T> = std::result::Result<T, TextureError>;

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TextureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a shape mismatch error from two operand shapes
pub const fn shape_mismatch(operation: &'static str, left: Shape, right: Shape) -> TextureError {
    TextureError::ShapeMismatch {
        operation,
        left,
        right,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextureError {
    TextureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
