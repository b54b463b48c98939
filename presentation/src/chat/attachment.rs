//! Reading image attachments from disk

use parley_domain::ImageAttachment;
use std::io;
use std::path::Path;

/// Read an image file into an attachment.
///
/// The bytes are passed through untouched; decoding happens when the
/// request is built, so an unreadable image surfaces as a chat error.
/// JPEG, PNG, GIF and WebP files decode; other formats fail at send time.
pub fn load_image(path: impl AsRef<Path>) -> io::Result<ImageAttachment> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "image file is empty"));
    }
    Ok(ImageAttachment::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let attachment = load_image(&path).unwrap();
        assert_eq!(attachment.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_load_image_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, []).unwrap();

        let err = load_image(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image("/definitely/not/here.png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
