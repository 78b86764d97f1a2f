use std::path::{Path, PathBuf};

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::{Result, ViewerError};

/// File extensions offered in the open dialogs.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Decode an image file into an 8-bit RGB buffer. Any alpha channel is
/// dropped; higher bit depths are truncated to 8 bits per channel.
pub fn decode_image(path: &Path) -> Result<PixelBuffer> {
    let decode_err = |source| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_err)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    debug!(path = %path.display(), width = w, height = h, "decoded image");

    PixelBuffer::from_raw(w, h, rgb.into_raw())
}

/// Decode both images of a pair. Nothing is returned unless both succeed, so a
/// failure on the second file never leaves the views half-updated.
pub fn decode_pair(paths: &[PathBuf; 2]) -> Result<[PixelBuffer; 2]> {
    let first = decode_image(&paths[0])?;
    let second = decode_image(&paths[1])?;
    Ok([first, second])
}

/// File name for status messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
