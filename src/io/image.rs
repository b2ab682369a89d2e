//! Sample decoding and texture export

use crate::bitmap::Bitmap;
use crate::io::error::{Result, TextureError};
use std::path::Path;

/// Decode an image file into a bitmap
///
/// The file handle is released as soon as decoding finishes, on success
/// and on failure alike.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    let image = image::open(path).map_err(|e| TextureError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Bitmap::from_dynamic(image))
}

/// Whether the file extension names a format the decoder understands
pub fn is_supported_image(path: &Path) -> bool {
    image::ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}

/// Write a bitmap to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_bitmap(bitmap: &Bitmap, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| TextureError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    bitmap.save(output_path)
}
