//! Image decoding through the stb_image and tinyexr entry points bundled in
//! the sokol binary.
//!
//! Both decoders hand back a buffer the caller must release with a matching
//! free function. [`stb::Image`] and [`exr::Image`] own such a buffer and
//! release it exactly once, on drop.

pub mod exr;
pub mod stb;

/// Errors from the owning decode helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// stb_image rejected the input.
    Decode { reason: String },

    /// tinyexr returned a non-zero status.
    Exr { code: i32, message: String },

    /// The input is longer than the native `int` length parameter allows.
    InputTooLarge { len: usize },
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::Decode { reason } if reason.is_empty() => {
                write!(f, "Image decode failed")
            }
            ImageError::Decode { reason } => write!(f, "Image decode failed: {}", reason),
            ImageError::Exr { code, message } => {
                write!(f, "EXR load failed ({}): {}", code, message)
            }
            ImageError::InputTooLarge { len } => {
                write!(f, "Input of {} bytes exceeds the native size limit", len)
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// Result of an image decode.
pub type ImageResult<T> = Result<T, ImageError>;

/// Convert a buffer length to the native `int` size parameter.
fn native_len(len: usize) -> ImageResult<i32> {
    i32::try_from(len).map_err(|_| ImageError::InputTooLarge { len })
}

/// Element count of a `width * height * channels` buffer. Zero for
/// non-positive dimensions.
fn sample_count(width: i32, height: i32, channels: i32) -> usize {
    let dim = |v: i32| usize::try_from(v).unwrap_or(0);
    dim(width) * dim(height) * dim(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_beyond_int_are_rejected() {
        assert_eq!(native_len(1024), Ok(1024));
        assert_eq!(native_len(i32::MAX as usize), Ok(i32::MAX));
        let len = i32::MAX as usize + 1;
        assert_eq!(native_len(len), Err(ImageError::InputTooLarge { len }));
    }

    #[test]
    fn sample_count_ignores_negative_dimensions() {
        assert_eq!(sample_count(4, 2, 3), 24);
        assert_eq!(sample_count(-1, 2, 4), 0);
        assert_eq!(sample_count(0, 0, 4), 0);
    }

    #[test]
    fn errors_display_native_text() {
        let err = ImageError::Decode { reason: "unknown image type".into() };
        assert_eq!(err.to_string(), "Image decode failed: unknown image type");
        assert_eq!(
            ImageError::Decode { reason: String::new() }.to_string(),
            "Image decode failed"
        );
        let err = ImageError::Exr { code: -1, message: "Invalid magic number".into() };
        assert_eq!(err.to_string(), "EXR load failed (-1): Invalid magic number");
    }
}
