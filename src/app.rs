//! sokol_app: window, event loop and input.
//!
//! `run` takes over the calling thread on most platforms and drives the
//! callbacks in `Desc`. Everything else queries or changes process-wide
//! window state owned by the native side, and must be called from the thread
//! running the callbacks.

use std::ffi::{c_char, c_void};

use crate::abi::{impl_range, zeroed_default};
use crate::logging::{LogFn, impl_bridged_logger};
use crate::text::{self, CStrArg};

pub const MAX_TOUCHPOINTS: usize = 8;
pub const MAX_MOUSEBUTTONS: usize = 3;
pub const MAX_KEYCODES: usize = 512;
pub const MAX_ICONIMAGES: usize = 8;
pub const MODIFIER_SHIFT: u32 = 1;
pub const MODIFIER_CTRL: u32 = 2;
pub const MODIFIER_ALT: u32 = 4;
pub const MODIFIER_SUPER: u32 = 8;
pub const MODIFIER_LMB: u32 = 256;
pub const MODIFIER_RMB: u32 = 512;
pub const MODIFIER_MMB: u32 = 1024;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventType {
    #[default]
    Invalid,
    KeyDown,
    KeyUp,
    Char,
    MouseDown,
    MouseUp,
    MouseScroll,
    MouseMove,
    MouseEnter,
    MouseLeave,
    TouchesBegan,
    TouchesMoved,
    TouchesEnded,
    TouchesCancelled,
    Resized,
    Iconified,
    Restored,
    Focused,
    Unfocused,
    Suspended,
    Resumed,
    QuitRequested,
    ClipboardPasted,
    FilesDropped,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Keycode {
    #[default]
    Invalid = 0,
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AndroidTooltype {
    #[default]
    Unknown = 0,
    Finger = 1,
    Stylus = 2,
    Mouse = 3,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mousebutton {
    #[default]
    Left = 0,
    Right = 1,
    Middle = 2,
    Invalid = 256,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    MacosInvalidNsopenglProfile,
    Win32LoadOpengl32DllFailed,
    Win32CreateHelperWindowFailed,
    Win32HelperWindowGetdcFailed,
    Win32DummyContextSetPixelformatFailed,
    Win32CreateDummyContextFailed,
    Win32DummyContextMakeCurrentFailed,
    Win32GetPixelformatAttribFailed,
    Win32WglFindPixelformatFailed,
    Win32WglDescribePixelformatFailed,
    Win32WglSetPixelformatFailed,
    Win32WglArbCreateContextRequired,
    Win32WglArbCreateContextProfileRequired,
    Win32WglOpenglVersionNotSupported,
    Win32WglOpenglProfileNotSupported,
    Win32WglIncompatibleDeviceContext,
    Win32WglCreateContextAttribsFailedOther,
    Win32D3d11CreateDeviceAndSwapchainWithDebugFailed,
    Win32D3d11GetIdxgifactoryFailed,
    Win32D3d11GetIdxgiadapterFailed,
    Win32D3d11QueryInterfaceIdxgidevice1Failed,
    Win32RegisterRawInputDevicesFailedMouseLock,
    Win32RegisterRawInputDevicesFailedMouseUnlock,
    Win32GetRawInputDataFailed,
    Win32DestroyiconForCursorFailed,
    LinuxGlxLoadLibglFailed,
    LinuxGlxLoadEntryPointsFailed,
    LinuxGlxExtensionNotFound,
    LinuxGlxQueryVersionFailed,
    LinuxGlxVersionTooLow,
    LinuxGlxNoGlxfbconfigs,
    LinuxGlxNoSuitableGlxfbconfig,
    LinuxGlxGetVisualFromFbconfigFailed,
    LinuxGlxRequiredExtensionsMissing,
    LinuxGlxCreateContextFailed,
    LinuxGlxCreateWindowFailed,
    LinuxX11CreateWindowFailed,
    LinuxEglBindOpenglApiFailed,
    LinuxEglBindOpenglEsApiFailed,
    LinuxEglGetDisplayFailed,
    LinuxEglInitializeFailed,
    LinuxEglNoConfigs,
    LinuxEglNoNativeVisual,
    LinuxEglGetVisualInfoFailed,
    LinuxEglCreateWindowSurfaceFailed,
    LinuxEglCreateContextFailed,
    LinuxEglMakeCurrentFailed,
    LinuxX11OpenDisplayFailed,
    LinuxX11QuerySystemDpiFailed,
    LinuxX11DroppedFileUriWrongScheme,
    LinuxX11FailedToBecomeOwnerOfClipboard,
    AndroidUnsupportedInputEventInputCb,
    AndroidUnsupportedInputEventMainCb,
    AndroidReadMsgFailed,
    AndroidWriteMsgFailed,
    AndroidMsgCreate,
    AndroidMsgResume,
    AndroidMsgPause,
    AndroidMsgFocus,
    AndroidMsgNoFocus,
    AndroidMsgSetNativeWindow,
    AndroidMsgSetInputQueue,
    AndroidMsgDestroy,
    AndroidUnknownMsg,
    AndroidLoopThreadStarted,
    AndroidLoopThreadDone,
    AndroidNativeActivityOnstart,
    AndroidNativeActivityOnresume,
    AndroidNativeActivityOnsaveinstancestate,
    AndroidNativeActivityOnwindowfocuschanged,
    AndroidNativeActivityOnpause,
    AndroidNativeActivityOnstop,
    AndroidNativeActivityOnnativewindowcreated,
    AndroidNativeActivityOnnativewindowdestroyed,
    AndroidNativeActivityOninputqueuecreated,
    AndroidNativeActivityOninputqueuedestroyed,
    AndroidNativeActivityOnconfigurationchanged,
    AndroidNativeActivityOnlowmemory,
    AndroidNativeActivityOndestroy,
    AndroidNativeActivityDone,
    AndroidNativeActivityOncreate,
    AndroidCreateThreadPipeFailed,
    AndroidNativeActivityCreateSuccess,
    WgpuDeviceLost,
    WgpuDeviceLog,
    WgpuDeviceUncapturedError,
    WgpuSwapchainCreateSurfaceFailed,
    WgpuSwapchainSurfaceGetCapabilitiesFailed,
    WgpuSwapchainCreateDepthStencilTextureFailed,
    WgpuSwapchainCreateDepthStencilViewFailed,
    WgpuSwapchainCreateMsaaTextureFailed,
    WgpuSwapchainCreateMsaaViewFailed,
    WgpuSwapchainGetcurrenttextureFailed,
    WgpuRequestDeviceStatusError,
    WgpuRequestDeviceStatusUnknown,
    WgpuRequestAdapterStatusUnavailable,
    WgpuRequestAdapterStatusError,
    WgpuRequestAdapterStatusUnknown,
    WgpuCreateInstanceFailed,
    ImageDataSizeMismatch,
    DroppedFilePathTooLong,
    ClipboardStringTooBig,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Html5FetchError {
    #[default]
    NoError,
    BufferTooSmall,
    Other,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseCursor {
    #[default]
    Default = 0,
    Arrow = 1,
    Ibeam = 2,
    Crosshair = 3,
    PointingHand = 4,
    ResizeEw = 5,
    ResizeNs = 6,
    ResizeNwse = 7,
    ResizeNesw = 8,
    ResizeAll = 9,
    NotAllowed = 10,
    Custom0 = 11,
    Custom1 = 12,
    Custom2 = 13,
    Custom3 = 14,
    Custom4 = 15,
    Custom5 = 16,
    Custom6 = 17,
    Custom7 = 18,
    Custom8 = 19,
    Custom9 = 20,
    Custom10 = 21,
    Custom11 = 22,
    Custom12 = 23,
    Custom13 = 24,
    Custom14 = 25,
    Custom15 = 26,
    Num = 27,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Touchpoint {
    pub identifier: usize,
    pub pos_x: f32,
    pub pos_y: f32,
    pub android_tooltype: AndroidTooltype,
    pub changed: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Event {
    pub frame_count: u64,
    pub r#type: EventType,
    pub key_code: Keycode,
    pub char_code: u32,
    pub key_repeat: bool,
    pub modifiers: u32,
    pub mouse_button: Mousebutton,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub num_touches: i32,
    pub touches: [Touchpoint; 8],
    pub window_width: i32,
    pub window_height: i32,
    pub framebuffer_width: i32,
    pub framebuffer_height: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Range {
    pub ptr: *const c_void,
    pub size: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageDesc {
    pub width: i32,
    pub height: i32,
    pub cursor_hotspot_x: i32,
    pub cursor_hotspot_y: i32,
    pub pixels: Range,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct IconDesc {
    pub sokol_default: bool,
    pub images: [ImageDesc; 8],
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
pub struct Logger {
    pub func: Option<LogFn>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Desc {
    pub init_cb: Option<unsafe extern "C" fn()>,
    pub frame_cb: Option<unsafe extern "C" fn()>,
    pub cleanup_cb: Option<unsafe extern "C" fn()>,
    pub event_cb: Option<unsafe extern "C" fn(*const Event)>,
    pub user_data: *mut c_void,
    pub init_userdata_cb: Option<unsafe extern "C" fn(*mut c_void)>,
    pub frame_userdata_cb: Option<unsafe extern "C" fn(*mut c_void)>,
    pub cleanup_userdata_cb: Option<unsafe extern "C" fn(*mut c_void)>,
    pub event_userdata_cb: Option<unsafe extern "C" fn(*const Event, *mut c_void)>,
    pub width: i32,
    pub height: i32,
    pub sample_count: i32,
    pub swap_interval: i32,
    pub high_dpi: bool,
    pub fullscreen: bool,
    pub alpha: bool,
    pub window_title: *const c_char,
    pub enable_clipboard: bool,
    pub clipboard_size: i32,
    pub enable_dragndrop: bool,
    pub max_dropped_files: i32,
    pub max_dropped_file_path_length: i32,
    pub icon: IconDesc,
    pub allocator: Allocator,
    pub logger: Logger,
    pub gl_major_version: i32,
    pub gl_minor_version: i32,
    pub win32_console_utf8: bool,
    pub win32_console_create: bool,
    pub win32_console_attach: bool,
    pub html5_canvas_selector: *const c_char,
    pub html5_canvas_resize: bool,
    pub html5_preserve_drawing_buffer: bool,
    pub html5_premultiplied_alpha: bool,
    pub html5_ask_leave_site: bool,
    pub html5_update_document_title: bool,
    pub html5_bubble_mouse_events: bool,
    pub html5_bubble_touch_events: bool,
    pub html5_bubble_wheel_events: bool,
    pub html5_bubble_key_events: bool,
    pub html5_bubble_char_events: bool,
    pub html5_use_emsc_set_main_loop: bool,
    pub html5_emsc_set_main_loop_simulate_infinite_loop: bool,
    pub ios_keyboard_resizes_canvas: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Html5FetchResponse {
    pub succeeded: bool,
    pub error_code: Html5FetchError,
    pub file_index: i32,
    pub data: Range,
    pub buffer: Range,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Html5FetchRequest {
    pub dropped_file_index: i32,
    pub callback: Option<unsafe extern "C" fn(*const Html5FetchResponse)>,
    pub buffer: Range,
    pub user_data: *mut c_void,
}

zeroed_default!(
    Touchpoint, Event, Range, ImageDesc, IconDesc, Allocator, Logger, Desc, Html5FetchResponse,
    Html5FetchRequest,
);

impl_range!(Range);
impl_bridged_logger!(Logger);

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn is_valid() -> bool {
    unsafe { ffi::sapp_isvalid() }
}

pub fn width() -> i32 {
    unsafe { ffi::sapp_width() }
}

pub fn widthf() -> f32 {
    unsafe { ffi::sapp_widthf() }
}

pub fn height() -> i32 {
    unsafe { ffi::sapp_height() }
}

pub fn heightf() -> f32 {
    unsafe { ffi::sapp_heightf() }
}

pub fn color_format() -> i32 {
    unsafe { ffi::sapp_color_format() }
}

pub fn depth_format() -> i32 {
    unsafe { ffi::sapp_depth_format() }
}

pub fn sample_count() -> i32 {
    unsafe { ffi::sapp_sample_count() }
}

pub fn high_dpi() -> bool {
    unsafe { ffi::sapp_high_dpi() }
}

pub fn dpi_scale() -> f32 {
    unsafe { ffi::sapp_dpi_scale() }
}

pub fn show_keyboard(show: bool) {
    unsafe { ffi::sapp_show_keyboard(show) }
}

pub fn keyboard_shown() -> bool {
    unsafe { ffi::sapp_keyboard_shown() }
}

pub fn is_fullscreen() -> bool {
    unsafe { ffi::sapp_is_fullscreen() }
}

pub fn toggle_fullscreen() {
    unsafe { ffi::sapp_toggle_fullscreen() }
}

pub fn show_mouse(show: bool) {
    unsafe { ffi::sapp_show_mouse(show) }
}

pub fn mouse_shown() -> bool {
    unsafe { ffi::sapp_mouse_shown() }
}

pub fn lock_mouse(dolock: bool) {
    unsafe { ffi::sapp_lock_mouse(dolock) }
}

pub fn mouse_locked() -> bool {
    unsafe { ffi::sapp_mouse_locked() }
}

pub fn set_mouse_cursor(cursor: MouseCursor) {
    unsafe { ffi::sapp_set_mouse_cursor(cursor) }
}

pub fn get_mouse_cursor() -> MouseCursor {
    unsafe { ffi::sapp_get_mouse_cursor() }
}

pub fn bind_mouse_cursor_image(cursor: MouseCursor, desc: &ImageDesc) -> MouseCursor {
    unsafe { ffi::sapp_bind_mouse_cursor_image(cursor, desc) }
}

pub fn unbind_mouse_cursor_image(cursor: MouseCursor) {
    unsafe { ffi::sapp_unbind_mouse_cursor_image(cursor) }
}

pub fn userdata() -> *mut c_void {
    unsafe { ffi::sapp_userdata() }
}

crate::dispatch::aggregate! {
    pub fn query_desc() -> Desc => sapp_query_desc / sapp_query_desc_internal;
}

pub fn request_quit() {
    unsafe { ffi::sapp_request_quit() }
}

pub fn cancel_quit() {
    unsafe { ffi::sapp_cancel_quit() }
}

pub fn quit() {
    unsafe { ffi::sapp_quit() }
}

pub fn consume_event() {
    unsafe { ffi::sapp_consume_event() }
}

pub fn frame_count() -> u64 {
    unsafe { ffi::sapp_frame_count() }
}

pub fn frame_duration() -> f64 {
    unsafe { ffi::sapp_frame_duration() }
}

pub fn set_clipboard_string(str: &str) {
    let str = CStrArg::new(str);
    unsafe { ffi::sapp_set_clipboard_string(str.as_ptr()) }
}

pub fn get_clipboard_string() -> String {
    unsafe { text::to_string(ffi::sapp_get_clipboard_string()) }
}

pub fn set_window_title(str: &str) {
    let str = CStrArg::new(str);
    unsafe { ffi::sapp_set_window_title(str.as_ptr()) }
}

pub fn set_icon(icon_desc: &IconDesc) {
    unsafe { ffi::sapp_set_icon(icon_desc) }
}

pub fn get_num_dropped_files() -> i32 {
    unsafe { ffi::sapp_get_num_dropped_files() }
}

pub fn get_dropped_file_path(index: i32) -> String {
    unsafe { text::to_string(ffi::sapp_get_dropped_file_path(index)) }
}

pub fn run(desc: &Desc) {
    unsafe { ffi::sapp_run(desc) }
}

pub fn egl_get_display() -> *mut c_void {
    unsafe { ffi::sapp_egl_get_display() }
}

pub fn egl_get_context() -> *mut c_void {
    unsafe { ffi::sapp_egl_get_context() }
}

pub fn html5_ask_leave_site(ask: bool) {
    unsafe { ffi::sapp_html5_ask_leave_site(ask) }
}

pub fn html5_get_dropped_file_size(index: i32) -> u32 {
    unsafe { ffi::sapp_html5_get_dropped_file_size(index) }
}

pub fn html5_fetch_dropped_file(request: &Html5FetchRequest) {
    unsafe { ffi::sapp_html5_fetch_dropped_file(request) }
}

pub fn metal_get_device() -> *mut c_void {
    unsafe { ffi::sapp_metal_get_device() }
}

pub fn metal_get_current_drawable() -> *mut c_void {
    unsafe { ffi::sapp_metal_get_current_drawable() }
}

pub fn metal_get_depth_stencil_texture() -> *mut c_void {
    unsafe { ffi::sapp_metal_get_depth_stencil_texture() }
}

pub fn metal_get_msaa_color_texture() -> *mut c_void {
    unsafe { ffi::sapp_metal_get_msaa_color_texture() }
}

pub fn macos_get_window() -> *mut c_void {
    unsafe { ffi::sapp_macos_get_window() }
}

pub fn ios_get_window() -> *mut c_void {
    unsafe { ffi::sapp_ios_get_window() }
}

pub fn d3d11_get_device() -> *mut c_void {
    unsafe { ffi::sapp_d3d11_get_device() }
}

pub fn d3d11_get_device_context() -> *mut c_void {
    unsafe { ffi::sapp_d3d11_get_device_context() }
}

pub fn d3d11_get_swap_chain() -> *mut c_void {
    unsafe { ffi::sapp_d3d11_get_swap_chain() }
}

pub fn d3d11_get_render_view() -> *mut c_void {
    unsafe { ffi::sapp_d3d11_get_render_view() }
}

pub fn d3d11_get_resolve_view() -> *mut c_void {
    unsafe { ffi::sapp_d3d11_get_resolve_view() }
}

pub fn d3d11_get_depth_stencil_view() -> *mut c_void {
    unsafe { ffi::sapp_d3d11_get_depth_stencil_view() }
}

pub fn win32_get_hwnd() -> *mut c_void {
    unsafe { ffi::sapp_win32_get_hwnd() }
}

pub fn wgpu_get_device() -> *mut c_void {
    unsafe { ffi::sapp_wgpu_get_device() }
}

pub fn wgpu_get_render_view() -> *mut c_void {
    unsafe { ffi::sapp_wgpu_get_render_view() }
}

pub fn wgpu_get_resolve_view() -> *mut c_void {
    unsafe { ffi::sapp_wgpu_get_resolve_view() }
}

pub fn wgpu_get_depth_stencil_view() -> *mut c_void {
    unsafe { ffi::sapp_wgpu_get_depth_stencil_view() }
}

pub fn gl_get_framebuffer() -> u32 {
    unsafe { ffi::sapp_gl_get_framebuffer() }
}

pub fn gl_get_major_version() -> i32 {
    unsafe { ffi::sapp_gl_get_major_version() }
}

pub fn gl_get_minor_version() -> i32 {
    unsafe { ffi::sapp_gl_get_minor_version() }
}

pub fn gl_is_gles() -> bool {
    unsafe { ffi::sapp_gl_is_gles() }
}

pub fn x11_get_window() -> *mut c_void {
    unsafe { ffi::sapp_x11_get_window() }
}

pub fn x11_get_display() -> *mut c_void {
    unsafe { ffi::sapp_x11_get_display() }
}

pub fn android_get_native_activity() -> *mut c_void {
    unsafe { ffi::sapp_android_get_native_activity() }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn sapp_isvalid() -> bool;
        pub fn sapp_width() -> i32;
        pub fn sapp_widthf() -> f32;
        pub fn sapp_height() -> i32;
        pub fn sapp_heightf() -> f32;
        pub fn sapp_color_format() -> i32;
        pub fn sapp_depth_format() -> i32;
        pub fn sapp_sample_count() -> i32;
        pub fn sapp_high_dpi() -> bool;
        pub fn sapp_dpi_scale() -> f32;
        pub fn sapp_show_keyboard(show: bool);
        pub fn sapp_keyboard_shown() -> bool;
        pub fn sapp_is_fullscreen() -> bool;
        pub fn sapp_toggle_fullscreen();
        pub fn sapp_show_mouse(show: bool);
        pub fn sapp_mouse_shown() -> bool;
        pub fn sapp_lock_mouse(dolock: bool);
        pub fn sapp_mouse_locked() -> bool;
        pub fn sapp_set_mouse_cursor(cursor: MouseCursor);
        pub fn sapp_get_mouse_cursor() -> MouseCursor;
        pub fn sapp_bind_mouse_cursor_image(
            cursor: MouseCursor,
            desc: *const ImageDesc,
        ) -> MouseCursor;
        pub fn sapp_unbind_mouse_cursor_image(cursor: MouseCursor);
        pub fn sapp_userdata() -> *mut c_void;
        #[cfg(not(feature = "web"))]
        pub fn sapp_query_desc() -> Desc;
        #[cfg(feature = "web")]
        pub fn sapp_query_desc_internal(result: *mut Desc);
        pub fn sapp_request_quit();
        pub fn sapp_cancel_quit();
        pub fn sapp_quit();
        pub fn sapp_consume_event();
        pub fn sapp_frame_count() -> u64;
        pub fn sapp_frame_duration() -> f64;
        pub fn sapp_set_clipboard_string(str: *const c_char);
        pub fn sapp_get_clipboard_string() -> *const c_char;
        pub fn sapp_set_window_title(str: *const c_char);
        pub fn sapp_set_icon(icon_desc: *const IconDesc);
        pub fn sapp_get_num_dropped_files() -> i32;
        pub fn sapp_get_dropped_file_path(index: i32) -> *const c_char;
        pub fn sapp_run(desc: *const Desc);
        pub fn sapp_egl_get_display() -> *mut c_void;
        pub fn sapp_egl_get_context() -> *mut c_void;
        pub fn sapp_html5_ask_leave_site(ask: bool);
        pub fn sapp_html5_get_dropped_file_size(index: i32) -> u32;
        pub fn sapp_html5_fetch_dropped_file(request: *const Html5FetchRequest);
        pub fn sapp_metal_get_device() -> *mut c_void;
        pub fn sapp_metal_get_current_drawable() -> *mut c_void;
        pub fn sapp_metal_get_depth_stencil_texture() -> *mut c_void;
        pub fn sapp_metal_get_msaa_color_texture() -> *mut c_void;
        pub fn sapp_macos_get_window() -> *mut c_void;
        pub fn sapp_ios_get_window() -> *mut c_void;
        pub fn sapp_d3d11_get_device() -> *mut c_void;
        pub fn sapp_d3d11_get_device_context() -> *mut c_void;
        pub fn sapp_d3d11_get_swap_chain() -> *mut c_void;
        pub fn sapp_d3d11_get_render_view() -> *mut c_void;
        pub fn sapp_d3d11_get_resolve_view() -> *mut c_void;
        pub fn sapp_d3d11_get_depth_stencil_view() -> *mut c_void;
        pub fn sapp_win32_get_hwnd() -> *mut c_void;
        pub fn sapp_wgpu_get_device() -> *mut c_void;
        pub fn sapp_wgpu_get_render_view() -> *mut c_void;
        pub fn sapp_wgpu_get_resolve_view() -> *mut c_void;
        pub fn sapp_wgpu_get_depth_stencil_view() -> *mut c_void;
        pub fn sapp_gl_get_framebuffer() -> u32;
        pub fn sapp_gl_get_major_version() -> i32;
        pub fn sapp_gl_get_minor_version() -> i32;
        pub fn sapp_gl_is_gles() -> bool;
        pub fn sapp_x11_get_window() -> *mut c_void;
        pub fn sapp_x11_get_display() -> *mut c_void;
        pub fn sapp_android_get_native_activity() -> *mut c_void;
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn event_layout() {
        assert_eq!(size_of::<Touchpoint>(), 24);
        assert_eq!(offset_of!(Touchpoint, android_tooltype), 16);
        assert_eq!(offset_of!(Touchpoint, changed), 20);

        assert_eq!(offset_of!(Event, r#type), 8);
        assert_eq!(offset_of!(Event, key_repeat), 20);
        assert_eq!(offset_of!(Event, modifiers), 24);
        assert_eq!(offset_of!(Event, mouse_x), 32);
        assert_eq!(offset_of!(Event, num_touches), 56);
        assert_eq!(offset_of!(Event, touches), 64);
        assert_eq!(offset_of!(Event, window_width), 256);
        assert_eq!(offset_of!(Event, framebuffer_height), 268);
        assert_eq!(size_of::<Event>(), 272);
    }

    #[test]
    fn touches_are_an_inline_array() {
        let mut event = Event::default();
        assert_eq!(event.touches.len(), MAX_TOUCHPOINTS);
        event.touches[MAX_TOUCHPOINTS - 1].pos_x = 12.5;
        event.num_touches = 1;
        let last = &event.touches[MAX_TOUCHPOINTS - 1];
        assert_eq!(last.pos_x, 12.5);
        assert!(!last.changed);
    }

    #[test]
    fn desc_bridged_logger() {
        let desc = Desc {
            width: 800,
            height: 600,
            logger: Logger::bridged(),
            ..Default::default()
        };
        assert!(desc.logger.func.is_some());
        assert!(desc.window_title.is_null());
        assert_eq!(desc.sample_count, 0);
    }

    #[test]
    fn event_type_values() {
        assert_eq!(EventType::Invalid as i32, 0);
        assert_eq!(EventType::KeyDown as i32, 1);
        assert_eq!(Keycode::Space as i32, 32);
        assert_eq!(Keycode::Escape as i32, 256);
    }
}
