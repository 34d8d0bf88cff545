//! Company logo payloads.
//!
//! The API serves logos as raw image bytes. We do not decode pixels; a payload
//! counts as decoded when its leading bytes carry a known image signature.
//! Anything else is replaced by the fallback placeholder.

use strum_macros::Display;

/// Image container recognised from the payload signature.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Detects the format from the leading bytes of `bytes`.
    pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
        const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

        if bytes.starts_with(PNG) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(JPEG) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::Webp)
        } else {
            None
        }
    }
}

/// Logo image for a symbol, or the placeholder used in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// Symbol the logo was requested for.
    pub symbol: String,
    /// Raw image bytes; empty for the fallback.
    pub bytes: Vec<u8>,
    /// Detected format; `None` for the fallback.
    pub format: Option<ImageFormat>,
}

impl LogoImage {
    /// Wraps downloaded bytes, falling back when they are not a known image.
    pub fn from_bytes(symbol: &str, bytes: Vec<u8>) -> LogoImage {
        match ImageFormat::sniff(&bytes) {
            Some(format) => LogoImage {
                symbol: symbol.to_string(),
                bytes,
                format: Some(format),
            },
            None => LogoImage::fallback(symbol),
        }
    }

    /// Placeholder substituted when the real logo cannot be retrieved.
    pub fn fallback(symbol: &str) -> LogoImage {
        LogoImage {
            symbol: symbol.to_string(),
            bytes: Vec::new(),
            format: None,
        }
    }

    /// `true` when the payload decoded as an image.
    pub fn is_decoded(&self) -> bool {
        self.format.is_some()
    }

    /// `true` for the placeholder.
    pub fn is_fallback(&self) -> bool {
        !self.is_decoded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_known_signatures() {
        assert_eq!(
            ImageFormat::sniff(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::sniff(b"<html>not found</html>"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }

    #[test]
    fn undecodable_bytes_become_fallback() {
        let logo = LogoImage::from_bytes("AAPL", b"{\"error\":1}".to_vec());
        assert!(logo.is_fallback());
        assert!(logo.bytes.is_empty());
        assert_eq!(logo.symbol, "AAPL");
    }

    #[test]
    fn png_bytes_are_kept() {
        let bytes = b"\x89PNG\r\n\x1a\nrest".to_vec();
        let logo = LogoImage::from_bytes("AAPL", bytes.clone());
        assert!(logo.is_decoded());
        assert_eq!(logo.bytes, bytes);
        assert_eq!(logo.format.map(|f| f.to_string()).as_deref(), Some("png"));
    }
}
