//! fontstash: glyph atlas and text layout on top of stb_truetype.
//!
//! A [`Context`] is created with a renderer backend, usually through
//! [`crate::sfons::create`]. Text is passed as a `(start, end)` byte range,
//! so `&str` arguments cross without a copy and need no terminator.

use std::ffi::{c_char, c_void};

use bytemuck::{Pod, Zeroable};

use crate::abi::zeroed_default;
use crate::text::CStrArg;

/// Returned by font lookups that found nothing.
pub const INVALID: i32 = -1;

// Horizontal alignment.
pub const ALIGN_LEFT: i32 = 1 << 0;
pub const ALIGN_CENTER: i32 = 1 << 1;
pub const ALIGN_RIGHT: i32 = 1 << 2;
// Vertical alignment.
pub const ALIGN_TOP: i32 = 1 << 3;
pub const ALIGN_MIDDLE: i32 = 1 << 4;
pub const ALIGN_BOTTOM: i32 = 1 << 5;
pub const ALIGN_BASELINE: i32 = 1 << 6;

/// Atlas origin, for `Params::flags`.
pub const ZERO_TOPLEFT: u8 = 1;
pub const ZERO_BOTTOMLEFT: u8 = 2;

pub const GLYPH_BITMAP_OPTIONAL: i32 = 1;
pub const GLYPH_BITMAP_REQUIRED: i32 = 2;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    #[default]
    None,
    AtlasFull,
    ScratchFull,
    StatesOverflow,
    StatesUnderflow,
}

/// Opaque native font stash.
#[repr(C)]
pub struct Context {
    _opaque: [u8; 0],
}

/// One glyph: screen rectangle and atlas texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub x0: f32,
    pub y0: f32,
    pub s0: f32,
    pub t0: f32,
    pub x1: f32,
    pub y1: f32,
    pub s1: f32,
    pub t1: f32,
}

/// Glyph iterator state. Holds pointers into the text it was started on.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct TextIter {
    pub x: f32,
    pub y: f32,
    pub nextx: f32,
    pub nexty: f32,
    pub scale: f32,
    pub spacing: f32,
    pub codepoint: u32,
    pub isize: i16,
    pub iblur: i16,
    pub font: *mut c_void,
    pub prev_glyph_index: i32,
    pub str: *const c_char,
    pub next: *const c_char,
    pub end: *const c_char,
    pub utf8state: u32,
    pub bitmap_option: i32,
}

/// Renderer backend callbacks.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Params {
    pub width: i32,
    pub height: i32,
    pub flags: u8,
    pub user_ptr: *mut c_void,
    pub render_create: Option<unsafe extern "C" fn(*mut c_void, i32, i32) -> i32>,
    pub render_resize: Option<unsafe extern "C" fn(*mut c_void, i32, i32) -> i32>,
    pub render_update: Option<unsafe extern "C" fn(*mut c_void, *mut i32, *const u8)>,
    pub render_draw:
        Option<unsafe extern "C" fn(*mut c_void, *const f32, *const f32, *const u32, i32)>,
    pub render_delete: Option<unsafe extern "C" fn(*mut c_void)>,
}

zeroed_default!(TextIter, Params);

/// Start and one-past-end pointers of `text`.
fn text_range(text: &str) -> (*const c_char, *const c_char) {
    let range = text.as_bytes().as_ptr_range();
    (range.start.cast(), range.end.cast())
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn create_internal(params: &mut Params) -> *mut Context {
    unsafe { ffi::fonsCreateInternal(params) }
}

pub unsafe fn delete_internal(s: *mut Context) {
    unsafe { ffi::fonsDeleteInternal(s) }
}

/// Current atlas size as `(width, height)`.
pub unsafe fn get_atlas_size(s: *mut Context) -> (i32, i32) {
    let (mut width, mut height) = (0, 0);
    unsafe { ffi::fonsGetAtlasSize(s, &mut width, &mut height) };
    (width, height)
}

pub unsafe fn expand_atlas(s: *mut Context, width: i32, height: i32) -> i32 {
    unsafe { ffi::fonsExpandAtlas(s, width, height) }
}

pub unsafe fn reset_atlas(stash: *mut Context, width: i32, height: i32) -> i32 {
    unsafe { ffi::fonsResetAtlas(stash, width, height) }
}

/// Register a font from memory. Returns the font id or [`INVALID`].
///
/// With `free_data` false the stash borrows `data`, which must then outlive
/// the stash. With `free_data` true the stash releases it with `free()`, so
/// it must come from the C allocator.
pub unsafe fn add_font_mem(
    stash: *mut Context,
    name: &str,
    data: &mut [u8],
    free_data: bool,
) -> i32 {
    let Ok(data_size) = i32::try_from(data.len()) else {
        return INVALID;
    };
    let name = CStrArg::new(name);
    let free_data = i32::from(free_data);
    unsafe { ffi::fonsAddFontMem(stash, name.as_ptr(), data.as_mut_ptr(), data_size, free_data) }
}

pub unsafe fn get_font_by_name(s: *mut Context, name: &str) -> i32 {
    let name = CStrArg::new(name);
    unsafe { ffi::fonsGetFontByName(s, name.as_ptr()) }
}

pub unsafe fn add_fallback_font(stash: *mut Context, base: i32, fallback: i32) -> i32 {
    unsafe { ffi::fonsAddFallbackFont(stash, base, fallback) }
}

pub unsafe fn push_state(s: *mut Context) {
    unsafe { ffi::fonsPushState(s) }
}

pub unsafe fn pop_state(s: *mut Context) {
    unsafe { ffi::fonsPopState(s) }
}

pub unsafe fn clear_state(s: *mut Context) {
    unsafe { ffi::fonsClearState(s) }
}

pub unsafe fn set_size(s: *mut Context, size: f32) {
    unsafe { ffi::fonsSetSize(s, size) }
}

/// `color` is packed RGBA, see [`crate::sfons::rgba`].
pub unsafe fn set_color(s: *mut Context, color: u32) {
    unsafe { ffi::fonsSetColor(s, color) }
}

pub unsafe fn set_spacing(s: *mut Context, spacing: f32) {
    unsafe { ffi::fonsSetSpacing(s, spacing) }
}

pub unsafe fn set_blur(s: *mut Context, blur: f32) {
    unsafe { ffi::fonsSetBlur(s, blur) }
}

/// A combination of one `ALIGN_` horizontal and one vertical flag.
pub unsafe fn set_align(s: *mut Context, align: i32) {
    unsafe { ffi::fonsSetAlign(s, align) }
}

pub unsafe fn set_font(s: *mut Context, font: i32) {
    unsafe { ffi::fonsSetFont(s, font) }
}

/// Draw `text` at `(x, y)`; returns the x position after the last glyph.
pub unsafe fn draw_text(s: *mut Context, x: f32, y: f32, text: &str) -> f32 {
    let (start, end) = text_range(text);
    unsafe { ffi::fonsDrawText(s, x, y, start, end) }
}

/// Measure `text`. `bounds` receives `[xmin, ymin, xmax, ymax]`; the return
/// value is the horizontal advance.
pub unsafe fn text_bounds(
    s: *mut Context,
    x: f32,
    y: f32,
    text: &str,
    bounds: &mut [f32; 4],
) -> f32 {
    let (start, end) = text_range(text);
    unsafe { ffi::fonsTextBounds(s, x, y, start, end, bounds.as_mut_ptr()) }
}

/// Vertical extent of a line at `y`, as `(miny, maxy)`.
pub unsafe fn line_bounds(s: *mut Context, y: f32) -> (f32, f32) {
    let (mut miny, mut maxy) = (0.0, 0.0);
    unsafe { ffi::fonsLineBounds(s, y, &mut miny, &mut maxy) };
    (miny, maxy)
}

/// `(ascender, descender, line height)` of the current font and size.
pub unsafe fn vert_metrics(s: *mut Context) -> (f32, f32, f32) {
    let (mut ascender, mut descender, mut lineh) = (0.0, 0.0, 0.0);
    unsafe { ffi::fonsVertMetrics(s, &mut ascender, &mut descender, &mut lineh) };
    (ascender, descender, lineh)
}

/// Start iterating the glyphs of `text`.
///
/// # Safety
///
/// `stash` must be live, and `text` must outlive every
/// [`text_iter_next`] call on `iter`.
pub unsafe fn text_iter_init(
    stash: *mut Context,
    iter: &mut TextIter,
    x: f32,
    y: f32,
    text: &str,
) -> bool {
    let (start, end) = text_range(text);
    unsafe { ffi::fonsTextIterInit(stash, iter, x, y, start, end) != 0 }
}

/// Advance to the next glyph, writing its quad. `false` at the end.
pub unsafe fn text_iter_next(stash: *mut Context, iter: &mut TextIter, quad: &mut Quad) -> bool {
    unsafe { ffi::fonsTextIterNext(stash, iter, quad) != 0 }
}

/// The single-channel atlas pixels and their size. Owned by the stash.
pub unsafe fn get_texture_data(stash: *mut Context) -> (*const u8, i32, i32) {
    let (mut width, mut height) = (0, 0);
    let data = unsafe { ffi::fonsGetTextureData(stash, &mut width, &mut height) };
    (data.cast_const(), width, height)
}

/// The atlas region changed since the last call as `[x0, y0, x1, y1]`, or
/// `None` when nothing is dirty.
pub unsafe fn validate_texture(s: *mut Context) -> Option<[i32; 4]> {
    let mut dirty = [0; 4];
    let changed = unsafe { ffi::fonsValidateTexture(s, dirty.as_mut_ptr()) };
    (changed != 0).then_some(dirty)
}

pub unsafe fn draw_debug(s: *mut Context, x: f32, y: f32) {
    unsafe { ffi::fonsDrawDebug(s, x, y) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn fonsCreateInternal(params: *mut Params) -> *mut Context;
        pub fn fonsDeleteInternal(s: *mut Context);
        pub fn fonsGetAtlasSize(s: *mut Context, width: *mut i32, height: *mut i32);
        pub fn fonsExpandAtlas(s: *mut Context, width: i32, height: i32) -> i32;
        pub fn fonsResetAtlas(stash: *mut Context, width: i32, height: i32) -> i32;
        pub fn fonsAddFontMem(
            stash: *mut Context,
            name: *const c_char,
            data: *mut u8,
            data_size: i32,
            free_data: i32,
        ) -> i32;
        pub fn fonsGetFontByName(s: *mut Context, name: *const c_char) -> i32;
        pub fn fonsAddFallbackFont(stash: *mut Context, base: i32, fallback: i32) -> i32;
        pub fn fonsPushState(s: *mut Context);
        pub fn fonsPopState(s: *mut Context);
        pub fn fonsClearState(s: *mut Context);
        pub fn fonsSetSize(s: *mut Context, size: f32);
        pub fn fonsSetColor(s: *mut Context, color: u32);
        pub fn fonsSetSpacing(s: *mut Context, spacing: f32);
        pub fn fonsSetBlur(s: *mut Context, blur: f32);
        pub fn fonsSetAlign(s: *mut Context, align: i32);
        pub fn fonsSetFont(s: *mut Context, font: i32);
        pub fn fonsDrawText(
            s: *mut Context,
            x: f32,
            y: f32,
            string: *const c_char,
            end: *const c_char,
        ) -> f32;
        pub fn fonsTextBounds(
            s: *mut Context,
            x: f32,
            y: f32,
            string: *const c_char,
            end: *const c_char,
            bounds: *mut f32,
        ) -> f32;
        pub fn fonsLineBounds(s: *mut Context, y: f32, miny: *mut f32, maxy: *mut f32);
        pub fn fonsVertMetrics(
            s: *mut Context,
            ascender: *mut f32,
            descender: *mut f32,
            lineh: *mut f32,
        );
        pub fn fonsTextIterInit(
            stash: *mut Context,
            iter: *mut TextIter,
            x: f32,
            y: f32,
            str: *const c_char,
            end: *const c_char,
        ) -> i32;
        pub fn fonsTextIterNext(stash: *mut Context, iter: *mut TextIter, quad: *mut Quad) -> i32;
        pub fn fonsGetTextureData(
            stash: *mut Context,
            width: *mut i32,
            height: *mut i32,
        ) -> *mut u8;
        pub fn fonsValidateTexture(s: *mut Context, dirty: *mut i32) -> i32;
        pub fn fonsDrawDebug(s: *mut Context, x: f32, y: f32);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn quad_is_eight_floats() {
        assert_eq!(size_of::<Quad>(), 32);
        assert_eq!(offset_of!(Quad, s1), 24);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn iter_and_params_layout() {
        assert_eq!(offset_of!(TextIter, codepoint), 24);
        assert_eq!(offset_of!(TextIter, iblur), 30);
        assert_eq!(offset_of!(TextIter, font), 32);
        assert_eq!(offset_of!(TextIter, str), 48);
        assert_eq!(offset_of!(TextIter, utf8state), 72);
        assert_eq!(size_of::<TextIter>(), 80);

        assert_eq!(offset_of!(Params, flags), 8);
        assert_eq!(offset_of!(Params, user_ptr), 16);
        assert_eq!(offset_of!(Params, render_delete), 56);
        assert_eq!(size_of::<Params>(), 64);
    }

    #[test]
    fn text_range_spans_utf8_bytes() {
        let text = "grüße";
        let (start, end) = text_range(text);
        assert_eq!(end as usize - start as usize, text.len());
        assert_eq!(start, text.as_ptr().cast());

        let (start, end) = text_range("");
        assert_eq!(start, end);
    }

    #[test]
    fn alignment_flags_are_disjoint() {
        let all = [
            ALIGN_LEFT,
            ALIGN_CENTER,
            ALIGN_RIGHT,
            ALIGN_TOP,
            ALIGN_MIDDLE,
            ALIGN_BOTTOM,
            ALIGN_BASELINE,
        ];
        assert_eq!(all.iter().fold(0, |acc, f| acc | f), 0x7f);
    }
}
