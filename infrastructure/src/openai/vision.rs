//! Re-encoding of image attachments for vision requests.
//!
//! The attachment is decoded, encoded as JPEG (quality 70) with a PNG
//! fallback, and retried as JPEG quality 50 if the result exceeds the byte
//! limit.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use parley_application::GatewayError;
use parley_domain::ImageAttachment;
use tracing::{debug, warn};

/// Largest encoded payload the provider accepts.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10_000_000;

const PRIMARY_JPEG_QUALITY: u8 = 70;
const REDUCED_JPEG_QUALITY: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }
}

/// An image ready to be inlined into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime: ImageMime,
}

impl EncodedImage {
    /// `data:<mime>;base64,<payload>`
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime.as_str(),
            BASE64.encode(&self.bytes)
        )
    }
}

/// Decode and re-encode an attachment so it fits within `max_bytes`.
pub fn prepare_image(
    attachment: &ImageAttachment,
    max_bytes: usize,
) -> Result<EncodedImage, GatewayError> {
    let image = image::load_from_memory(attachment.bytes()).map_err(|e| {
        warn!("Could not decode image attachment: {}", e);
        GatewayError::ImageConversionFailed
    })?;

    let first = encode_jpeg(&image, PRIMARY_JPEG_QUALITY)
        .map(|bytes| EncodedImage {
            bytes,
            mime: ImageMime::Jpeg,
        })
        .or_else(|| {
            debug!("JPEG encoding failed, falling back to PNG");
            encode_png(&image).map(|bytes| EncodedImage {
                bytes,
                mime: ImageMime::Png,
            })
        })
        .ok_or(GatewayError::ImageConversionFailed)?;

    if first.bytes.len() <= max_bytes {
        return Ok(first);
    }

    debug!(
        "Encoded image is {} bytes (limit {}), retrying at quality {}",
        first.bytes.len(),
        max_bytes,
        REDUCED_JPEG_QUALITY
    );

    let reduced =
        encode_jpeg(&image, REDUCED_JPEG_QUALITY).ok_or(GatewayError::ImageConversionFailed)?;
    if reduced.len() > max_bytes {
        warn!(
            "Image still {} bytes after reducing quality (limit {})",
            reduced.len(),
            max_bytes
        );
        return Err(GatewayError::ImageConversionFailed);
    }

    Ok(EncodedImage {
        bytes: reduced,
        mime: ImageMime::Jpeg,
    })
}

pub(crate) fn encode_jpeg(image: &DynamicImage, quality: u8) -> Option<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .ok()?;
    Some(bytes)
}

pub(crate) fn encode_png(image: &DynamicImage) -> Option<Vec<u8>> {
    let rgba = image.to_rgba8();
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            ExtendedColorType::Rgba8,
        )
        .ok()?;
    Some(bytes)
}
