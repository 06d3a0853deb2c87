//! stb_image: PNG, JPEG, BMP, TGA, PSD, GIF, HDR and PIC decoding from memory.

use std::ffi::{c_char, c_void};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

use bytemuck::Pod;

use super::{ImageError, ImageResult, native_len, sample_count};
use crate::text;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for f32 {}
}

/// Pixel component type: `u8` for 8-bit loads, `f32` for linear float loads.
pub trait Sample: Pod + sealed::Sealed {
    #[doc(hidden)]
    unsafe fn load(
        buffer: *const u8,
        len: i32,
        x: *mut i32,
        y: *mut i32,
        channels_in_file: *mut i32,
        desired_channels: i32,
        flipped: bool,
    ) -> *mut Self;
}

impl Sample for u8 {
    unsafe fn load(
        buffer: *const u8,
        len: i32,
        x: *mut i32,
        y: *mut i32,
        channels_in_file: *mut i32,
        desired_channels: i32,
        flipped: bool,
    ) -> *mut Self {
        unsafe {
            if flipped {
                ffi::stbi_load_flipped_csharp(buffer, len, x, y, channels_in_file, desired_channels)
            } else {
                ffi::stbi_load_csharp(buffer, len, x, y, channels_in_file, desired_channels)
            }
        }
    }
}

impl Sample for f32 {
    unsafe fn load(
        buffer: *const u8,
        len: i32,
        x: *mut i32,
        y: *mut i32,
        channels_in_file: *mut i32,
        desired_channels: i32,
        flipped: bool,
    ) -> *mut Self {
        unsafe {
            if flipped {
                ffi::stbi_loadf_flipped_csharp(
                    buffer,
                    len,
                    x,
                    y,
                    channels_in_file,
                    desired_channels,
                )
            } else {
                ffi::stbi_loadf_csharp(buffer, len, x, y, channels_in_file, desired_channels)
            }
        }
    }
}

/// Decoded pixels owned by stb_image, released on drop.
#[derive(Debug)]
pub struct Image<T: Sample> {
    pixels: NonNull<T>,
    width: i32,
    height: i32,
    channels: i32,
    channels_in_file: i32,
    _owns: PhantomData<T>,
}

impl<T: Sample> Image<T> {
    /// Decode an encoded image. `desired_channels` of 0 keeps the file's
    /// channel count; 1 to 4 converts to that many.
    pub fn decode(bytes: &[u8], desired_channels: i32) -> ImageResult<Self> {
        Self::load(bytes, desired_channels, false)
    }

    /// Like [`Image::decode`], with the first row at the bottom.
    pub fn decode_flipped(bytes: &[u8], desired_channels: i32) -> ImageResult<Self> {
        Self::load(bytes, desired_channels, true)
    }

    fn load(bytes: &[u8], desired_channels: i32, flipped: bool) -> ImageResult<Self> {
        let len = native_len(bytes.len())?;
        let (mut width, mut height, mut channels_in_file) = (0, 0, 0);
        let raw = unsafe {
            T::load(
                bytes.as_ptr(),
                len,
                &mut width,
                &mut height,
                &mut channels_in_file,
                desired_channels,
                flipped,
            )
        };
        let pixels = NonNull::new(raw).ok_or_else(|| ImageError::Decode {
            reason: failure_reason(),
        })?;
        let channels = if desired_channels == 0 {
            channels_in_file
        } else {
            desired_channels
        };
        Ok(Self {
            pixels,
            width,
            height,
            channels,
            channels_in_file,
            _owns: PhantomData,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Components per pixel in [`Image::pixels`].
    pub fn channels(&self) -> i32 {
        self.channels
    }

    /// Components per pixel in the encoded file.
    pub fn channels_in_file(&self) -> i32 {
        self.channels_in_file
    }

    /// Row-major pixel data, `width * height * channels` components.
    pub fn pixels(&self) -> &[T] {
        let len = sample_count(self.width, self.height, self.channels);
        unsafe { slice::from_raw_parts(self.pixels.as_ptr(), len) }
    }

    /// The pixels as bytes, ready for a `gfx::Range`.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels())
    }
}

impl<T: Sample> Drop for Image<T> {
    fn drop(&mut self) {
        unsafe { ffi::stbi_image_free_csharp(self.pixels.as_ptr().cast()) };
    }
}

/// Why the last decode on this thread failed, `""` if unknown.
pub fn failure_reason() -> String {
    unsafe { text::to_string(ffi::stbi_failure_reason_csharp()) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn stbi_load_csharp(
            buffer: *const u8,
            len: i32,
            x: *mut i32,
            y: *mut i32,
            channels_in_file: *mut i32,
            desired_channels: i32,
        ) -> *mut u8;
        pub fn stbi_load_flipped_csharp(
            buffer: *const u8,
            len: i32,
            x: *mut i32,
            y: *mut i32,
            channels_in_file: *mut i32,
            desired_channels: i32,
        ) -> *mut u8;
        pub fn stbi_loadf_csharp(
            buffer: *const u8,
            len: i32,
            x: *mut i32,
            y: *mut i32,
            channels_in_file: *mut i32,
            desired_channels: i32,
        ) -> *mut f32;
        pub fn stbi_loadf_flipped_csharp(
            buffer: *const u8,
            len: i32,
            x: *mut i32,
            y: *mut i32,
            channels_in_file: *mut i32,
            desired_channels: i32,
        ) -> *mut f32;
        pub fn stbi_image_free_csharp(retval_from_stbi_load: *mut c_void);
        pub fn stbi_failure_reason_csharp() -> *const c_char;
    }
}
