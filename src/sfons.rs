//! sokol_fontstash: a fontstash renderer backend drawing through sokol_gl.
//!
//! [`create`] returns a ready [`fontstash::Context`]. Call [`flush`] once per
//! frame after drawing text, before `sgl_draw`.

use std::ffi::c_void;

use crate::abi::zeroed_default;
use crate::fontstash;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Allocator {
    pub alloc_fn: Option<unsafe extern "C" fn(usize, *mut c_void) -> *mut c_void>,
    pub free_fn: Option<unsafe extern "C" fn(*mut c_void, *mut c_void)>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Desc {
    pub width: i32,
    pub height: i32,
    pub allocator: Allocator,
}

zeroed_default!(Allocator, Desc);

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn create(desc: &Desc) -> *mut fontstash::Context {
    unsafe { ffi::sfons_create(desc) }
}

pub unsafe fn destroy(ctx: *mut fontstash::Context) {
    unsafe { ffi::sfons_destroy(ctx) }
}

/// Upload atlas changes made since the last flush.
pub unsafe fn flush(ctx: *mut fontstash::Context) {
    unsafe { ffi::sfons_flush(ctx) }
}

/// Pack a color for [`fontstash::set_color`].
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    unsafe { ffi::sfons_rgba(r, g, b, a) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn sfons_create(desc: *const Desc) -> *mut fontstash::Context;
        pub fn sfons_destroy(ctx: *mut fontstash::Context);
        pub fn sfons_flush(ctx: *mut fontstash::Context);
        pub fn sfons_rgba(r: u8, g: u8, b: u8, a: u8) -> u32;
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn desc_layout() {
        assert_eq!(offset_of!(Desc, allocator), 8);
        assert_eq!(size_of::<Allocator>(), 24);
        assert_eq!(size_of::<Desc>(), 32);
    }

    #[test]
    fn zeroed_desc_lets_native_pick_defaults() {
        let desc = Desc::default();
        assert_eq!((desc.width, desc.height), (0, 0));
        assert!(desc.allocator.alloc_fn.is_none());
        assert!(desc.allocator.user_data.is_null());
    }
}
