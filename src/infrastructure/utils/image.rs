use std::{io, path::Path};
use tokio::fs;

use derive_more::Display;
use infer::{self, Infer};

/// Bytes and sniffed MIME type of a validated image upload.
#[derive(Debug)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Validates an uploaded image file for extension, type, and size.
///
/// - `original_filename`: The filename from TempFile::file_name()
/// - `file_path`: The path from TempFile::file.path()
/// - `max_size`: Max size in bytes
pub async fn read_image_file(
    original_filename: Option<&str>,
    file_path: &Path,
    max_size: usize
) -> Result<UploadedImage, ImageFileError> {
    // 1. Extension check - allow common web image extensions
    let allowed_exts = ["png", "jpg", "jpeg", "gif", "webp", "avif", "svg"];
    if let Some(name) = original_filename {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());
        if ext.as_deref().map_or(true, |e| !allowed_exts.contains(&e)) {
            return Err(ImageFileError::InvalidExtension);
        }
    } else {
        return Err(ImageFileError::InvalidExtension);
    }

    // 2. File size check
    let metadata = fs::metadata(file_path)
        .await
        .map_err(ImageFileError::IoError)?;
    if metadata.len() > max_size as u64 {
        return Err(ImageFileError::FileTooLarge);
    }

    // 3. Read file content
    let bytes = fs::read(file_path)
        .await
        .map_err(ImageFileError::IoError)?;
    if bytes.is_empty() {
        return Err(ImageFileError::EmptyFile);
    }

    // 4. MIME detection (tolerant mode - SVG and friends have no magic bytes)
    let infer = Infer::new();
    let content_type = match infer.get(&bytes) {
        Some(kind) => {
            if kind.matcher_type() != infer::MatcherType::Image {
                return Err(ImageFileError::InvalidType(kind.mime_type().to_string()));
            }
            Some(kind.mime_type().to_string())
        }
        None => None,
    };

    Ok(UploadedImage { bytes, content_type })
}

/// All errors related to image file handling.
#[derive(Debug, Display)]
pub enum ImageFileError {
    #[display("Invalid file extension. Only image files are allowed.")]
    InvalidExtension,

    #[display("Invalid file type: {_0}")]
    InvalidType(String),

    #[display("File is empty.")]
    EmptyFile,

    #[display("File size exceeds maximum allowed.")]
    FileTooLarge,

    #[display("Failed to read file: {_0}")]
    IoError(io::Error),
}
