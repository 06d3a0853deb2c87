//! tinyexr: OpenEXR decoding to RGBA float, and panorama to cubemap
//! conversion for image-based lighting.

use std::ffi::c_char;
use std::ptr::{self, NonNull};
use std::slice;

use super::{ImageError, ImageResult, native_len, sample_count};
use crate::text::{self, CStrArg};

/// Native status for success; failures are negative.
pub const SUCCESS: i32 = 0;

/// Decoded RGBA float pixels owned by tinyexr, released on drop.
#[derive(Debug)]
pub struct Image {
    rgba: NonNull<f32>,
    width: i32,
    height: i32,
}

impl Image {
    /// Decode an EXR file held in memory.
    pub fn decode(bytes: &[u8]) -> ImageResult<Self> {
        let size = native_len(bytes.len())?;
        let (mut width, mut height) = (0, 0);
        let mut rgba = ptr::null_mut();
        let mut err = ptr::null();
        let code = unsafe {
            ffi::EXRLoadFromMemory(
                bytes.as_ptr(),
                size,
                &mut width,
                &mut height,
                &mut rgba,
                &mut err,
            )
        };
        Self::finish(code, rgba, width, height, err)
    }

    /// Read and decode an EXR file.
    pub fn open(path: &str) -> ImageResult<Self> {
        let path = CStrArg::new(path);
        let (mut width, mut height) = (0, 0);
        let mut rgba = ptr::null_mut();
        let mut err = ptr::null();
        let code =
            unsafe { ffi::EXRLoad(path.as_ptr(), &mut width, &mut height, &mut rgba, &mut err) };
        Self::finish(code, rgba, width, height, err)
    }

    fn finish(
        code: i32,
        rgba: *mut f32,
        width: i32,
        height: i32,
        err: *const c_char,
    ) -> ImageResult<Self> {
        if code != SUCCESS {
            if !rgba.is_null() {
                unsafe { ffi::EXRFreeImage(rgba) };
            }
            return Err(ImageError::Exr {
                code,
                message: unsafe { take_error(err) },
            });
        }
        unsafe { take_error(err) };
        match NonNull::new(rgba) {
            Some(rgba) => Ok(Self { rgba, width, height }),
            None => Err(ImageError::Exr {
                code,
                message: failure_reason(),
            }),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Interleaved RGBA, `width * height * 4` floats.
    pub fn rgba(&self) -> &[f32] {
        let len = sample_count(self.width, self.height, 4);
        unsafe { slice::from_raw_parts(self.rgba.as_ptr(), len) }
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        unsafe { ffi::EXRFreeImage(self.rgba.as_ptr()) };
    }
}

/// Copy a native error message, then release it.
///
/// # Safety
///
/// `err` must be null or a message from a tinyexr load call, not yet freed.
unsafe fn take_error(err: *const c_char) -> String {
    if err.is_null() {
        return String::new();
    }
    let message = unsafe { text::to_string(err) };
    unsafe { ffi::EXRFreeErrorMessage(err) };
    message
}

/// `true` when `bytes` starts with a readable EXR header.
pub fn is_exr(bytes: &[u8]) -> bool {
    match native_len(bytes.len()) {
        Ok(size) => unsafe { ffi::EXRIsFromMemory(bytes.as_ptr(), size) == SUCCESS },
        Err(_) => false,
    }
}

/// The last recorded failure, `""` if none is available.
pub fn failure_reason() -> String {
    unsafe { text::to_string(ffi::EXRGetFailureReason()) }
}

/// Release a buffer returned by one of the `EXRConvertPanorama*` calls.
///
/// # Safety
///
/// `data` must come from a cubemap conversion and not have been freed.
pub unsafe fn free_cubemap_data(data: *mut u8) {
    unsafe { ffi::EXRFreeCubemapData(data) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn EXRLoadFromMemory(
            memory: *const u8,
            size: i32,
            width: *mut i32,
            height: *mut i32,
            out_rgba: *mut *mut f32,
            err: *mut *const c_char,
        ) -> i32;
        pub fn EXRLoad(
            filename: *const c_char,
            width: *mut i32,
            height: *mut i32,
            out_rgba: *mut *mut f32,
            err: *mut *const c_char,
        ) -> i32;
        pub fn EXRIsFromMemory(memory: *const u8, size: i32) -> i32;
        pub fn EXRFreeImage(rgba_data: *mut f32);
        pub fn EXRFreeErrorMessage(err: *const c_char);
        pub fn EXRGetFailureReason() -> *const c_char;

        // Panorama to cubemap. The returned buffer is released with
        // `EXRFreeCubemapData`.
        pub fn EXRConvertPanoramaToDiffuseCubemap(
            panorama_rgba: *const f32,
            pano_width: i32,
            pano_height: i32,
            cube_size: i32,
            sample_count: i32,
        ) -> *mut u8;
        pub fn EXRConvertPanoramaToDiffuseCubemapFace(
            panorama_rgba: *const f32,
            pano_width: i32,
            pano_height: i32,
            cube_size: i32,
            face_index: i32,
            sample_count: i32,
        ) -> *mut u8;
        pub fn EXRConvertPanoramaToSpecularCubemap(
            panorama_rgba: *const f32,
            pano_width: i32,
            pano_height: i32,
            cube_size: i32,
            roughness: f32,
            sample_count: i32,
        ) -> *mut u8;
        pub fn EXRConvertPanoramaToSpecularCubemapFace(
            panorama_rgba: *const f32,
            pano_width: i32,
            pano_height: i32,
            cube_size: i32,
            face_index: i32,
            roughness: f32,
            sample_count: i32,
        ) -> *mut u8;
        pub fn EXRFreeCubemapData(cubemap_data: *mut u8);
    }
}
