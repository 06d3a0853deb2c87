// src/debugtext.rs
//
// sokol_debugtext: fixed-size bitmap text for debug overlays, with six
// embedded 8-bit home computer fonts. Printing goes to the current context,
// which is process-wide native state like sokol_gl's.

use std::ffi::{c_char, c_void};

use bytemuck::{Pod, Zeroable};

use crate::abi::{impl_handle, impl_range, zeroed_default};
use crate::logging::{LogFn, impl_bridged_logger};
use crate::gfx;
use crate::text::CStrArg;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    AddCommitListenerFailed,
    CommandBufferFull,
    ContextPoolExhausted,
    CannotDestroyDefaultContext,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Logger {
    pub func: Option<LogFn>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Context {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Range {
    pub ptr: *const c_void,
    pub size: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FontDesc {
    pub data: Range,
    pub first_char: u8,
    pub last_char: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ContextDesc {
    pub max_commands: i32,
    pub char_buf_size: i32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub tab_width: i32,
    pub color_format: gfx::PixelFormat,
    pub depth_format: gfx::PixelFormat,
    pub sample_count: i32,
}

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
    pub context_pool_size: i32,
    pub printf_buf_size: i32,
    pub fonts: [FontDesc; 8],
    pub context: ContextDesc,
    pub allocator: Allocator,
    pub logger: Logger,
}

impl_handle!(Context);
zeroed_default!(Logger, Range, FontDesc, ContextDesc, Allocator, Desc);

impl_range!(Range);
impl_bridged_logger!(Logger);

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::sdtx_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::sdtx_shutdown() }
}

crate::dispatch::aggregate! {
    pub fn font_kc853() -> FontDesc => sdtx_font_kc853 / sdtx_font_kc853_internal;
    pub fn font_kc854() -> FontDesc => sdtx_font_kc854 / sdtx_font_kc854_internal;
    pub fn font_z1013() -> FontDesc => sdtx_font_z1013 / sdtx_font_z1013_internal;
    pub fn font_cpc() -> FontDesc => sdtx_font_cpc / sdtx_font_cpc_internal;
    pub fn font_c64() -> FontDesc => sdtx_font_c64 / sdtx_font_c64_internal;
    pub fn font_oric() -> FontDesc => sdtx_font_oric / sdtx_font_oric_internal;
}

crate::dispatch::handle! {
    pub fn make_context(desc: &ContextDesc) -> Context => sdtx_make_context / sdtx_make_context_id;
}

pub fn destroy_context(ctx: Context) {
    unsafe { ffi::sdtx_destroy_context(ctx) }
}

pub fn set_context(ctx: Context) {
    unsafe { ffi::sdtx_set_context(ctx) }
}

crate::dispatch::handle! {
    pub fn get_context() -> Context => sdtx_get_context / sdtx_get_context_id;
    pub fn default_context() -> Context => sdtx_default_context / sdtx_default_context_id;
}

pub fn draw() {
    unsafe { ffi::sdtx_draw() }
}

pub fn context_draw(ctx: Context) {
    unsafe { ffi::sdtx_context_draw(ctx) }
}

pub fn draw_layer(layer_id: i32) {
    unsafe { ffi::sdtx_draw_layer(layer_id) }
}

pub fn context_draw_layer(ctx: Context, layer_id: i32) {
    unsafe { ffi::sdtx_context_draw_layer(ctx, layer_id) }
}

pub fn layer(layer_id: i32) {
    unsafe { ffi::sdtx_layer(layer_id) }
}

pub fn font(font_index: u32) {
    unsafe { ffi::sdtx_font(font_index) }
}

pub fn canvas(w: f32, h: f32) {
    unsafe { ffi::sdtx_canvas(w, h) }
}

pub fn origin(x: f32, y: f32) {
    unsafe { ffi::sdtx_origin(x, y) }
}

pub fn home() {
    unsafe { ffi::sdtx_home() }
}

pub fn pos(x: f32, y: f32) {
    unsafe { ffi::sdtx_pos(x, y) }
}

pub fn pos_x(x: f32) {
    unsafe { ffi::sdtx_pos_x(x) }
}

pub fn pos_y(y: f32) {
    unsafe { ffi::sdtx_pos_y(y) }
}

pub fn r#move(dx: f32, dy: f32) {
    unsafe { ffi::sdtx_move(dx, dy) }
}

pub fn move_x(dx: f32) {
    unsafe { ffi::sdtx_move_x(dx) }
}

pub fn move_y(dy: f32) {
    unsafe { ffi::sdtx_move_y(dy) }
}

pub fn crlf() {
    unsafe { ffi::sdtx_crlf() }
}

pub fn color3b(r: u8, g: u8, b: u8) {
    unsafe { ffi::sdtx_color3b(r, g, b) }
}

pub fn color3f(r: f32, g: f32, b: f32) {
    unsafe { ffi::sdtx_color3f(r, g, b) }
}

pub fn color4b(r: u8, g: u8, b: u8, a: u8) {
    unsafe { ffi::sdtx_color4b(r, g, b, a) }
}

pub fn color4f(r: f32, g: f32, b: f32, a: f32) {
    unsafe { ffi::sdtx_color4f(r, g, b, a) }
}

pub fn color1i(rgba: u32) {
    unsafe { ffi::sdtx_color1i(rgba) }
}

pub fn putc(c: u8) {
    unsafe { ffi::sdtx_putc(c) }
}

pub fn puts(str: &str) {
    let str = CStrArg::new(str);
    unsafe { ffi::sdtx_puts(str.as_ptr()) }
}

/// Print at most `len` bytes of `text`.
pub fn putr(text: &str, len: i32) {
    let len = len.clamp(0, i32::try_from(text.len()).unwrap_or(i32::MAX));
    unsafe { ffi::sdtx_putr(text.as_ptr().cast(), len) }
}

/// Print a preformatted string. Returns the number of bytes written.
///
/// Stands in for the variadic `sdtx_printf`; format on the Rust side with
/// `format!` and pass the result here.
pub fn print(text: &str) -> i32 {
    let text = CStrArg::new(text);
    unsafe { ffi::sdtx_print_wrapper(text.as_ptr()) }
}

crate::dispatch::aggregate! {
    pub fn get_cleared_fmt_buffer() -> Range
        => sdtx_get_cleared_fmt_buffer / sdtx_get_cleared_fmt_buffer_internal;
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn sdtx_setup(desc: *const Desc);
        pub fn sdtx_shutdown();
        #[cfg(not(feature = "web"))]
        pub fn sdtx_font_kc853() -> FontDesc;
        #[cfg(feature = "web")]
        pub fn sdtx_font_kc853_internal(result: *mut FontDesc);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_font_kc854() -> FontDesc;
        #[cfg(feature = "web")]
        pub fn sdtx_font_kc854_internal(result: *mut FontDesc);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_font_z1013() -> FontDesc;
        #[cfg(feature = "web")]
        pub fn sdtx_font_z1013_internal(result: *mut FontDesc);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_font_cpc() -> FontDesc;
        #[cfg(feature = "web")]
        pub fn sdtx_font_cpc_internal(result: *mut FontDesc);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_font_c64() -> FontDesc;
        #[cfg(feature = "web")]
        pub fn sdtx_font_c64_internal(result: *mut FontDesc);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_font_oric() -> FontDesc;
        #[cfg(feature = "web")]
        pub fn sdtx_font_oric_internal(result: *mut FontDesc);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_make_context(desc: *const ContextDesc) -> Context;
        #[cfg(feature = "web")]
        #[link_name = "sdtx_make_context"]
        pub fn sdtx_make_context_id(desc: *const ContextDesc) -> u32;
        pub fn sdtx_destroy_context(ctx: Context);
        pub fn sdtx_set_context(ctx: Context);
        #[cfg(not(feature = "web"))]
        pub fn sdtx_get_context() -> Context;
        #[cfg(feature = "web")]
        #[link_name = "sdtx_get_context"]
        pub fn sdtx_get_context_id() -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sdtx_default_context() -> Context;
        #[cfg(feature = "web")]
        #[link_name = "sdtx_default_context"]
        pub fn sdtx_default_context_id() -> u32;
        pub fn sdtx_draw();
        pub fn sdtx_context_draw(ctx: Context);
        pub fn sdtx_draw_layer(layer_id: i32);
        pub fn sdtx_context_draw_layer(ctx: Context, layer_id: i32);
        pub fn sdtx_layer(layer_id: i32);
        pub fn sdtx_font(font_index: u32);
        pub fn sdtx_canvas(w: f32, h: f32);
        pub fn sdtx_origin(x: f32, y: f32);
        pub fn sdtx_home();
        pub fn sdtx_pos(x: f32, y: f32);
        pub fn sdtx_pos_x(x: f32);
        pub fn sdtx_pos_y(y: f32);
        pub fn sdtx_move(dx: f32, dy: f32);
        pub fn sdtx_move_x(dx: f32);
        pub fn sdtx_move_y(dy: f32);
        pub fn sdtx_crlf();
        pub fn sdtx_color3b(r: u8, g: u8, b: u8);
        pub fn sdtx_color3f(r: f32, g: f32, b: f32);
        pub fn sdtx_color4b(r: u8, g: u8, b: u8, a: u8);
        pub fn sdtx_color4f(r: f32, g: f32, b: f32, a: f32);
        pub fn sdtx_color1i(rgba: u32);
        pub fn sdtx_putc(c: u8);
        pub fn sdtx_puts(str: *const c_char);
        pub fn sdtx_putr(str: *const c_char, len: i32);
        pub fn sdtx_print_wrapper(str: *const c_char) -> i32;
        #[cfg(not(feature = "web"))]
        pub fn sdtx_get_cleared_fmt_buffer() -> Range;
        #[cfg(feature = "web")]
        pub fn sdtx_get_cleared_fmt_buffer_internal(result: *mut Range);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn desc_layout() {
        assert_eq!(size_of::<FontDesc>(), 24);
        assert_eq!(offset_of!(FontDesc, first_char), 16);
        assert_eq!(offset_of!(FontDesc, last_char), 17);
        assert_eq!(size_of::<ContextDesc>(), 32);
        assert_eq!(offset_of!(Desc, fonts), 8);
        assert_eq!(offset_of!(Desc, context), 200);
        assert_eq!(offset_of!(Desc, allocator), 232);
        assert_eq!(offset_of!(Desc, logger), 256);
        assert_eq!(size_of::<Desc>(), 272);
    }

    #[test]
    fn font_slots() {
        let mut desc = Desc::default();
        assert_eq!(desc.fonts.len(), 8);
        let glyphs = [0xAA_u8; 2048];
        desc.fonts[7] = FontDesc {
            data: Range::from_slice(&glyphs),
            first_char: 0x20,
            last_char: 0x7F,
        };
        assert_eq!(desc.fonts[7].data.size, 2048);
        assert!(desc.fonts[0].data.is_empty());
    }
}
