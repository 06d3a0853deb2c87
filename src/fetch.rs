//! sokol_fetch: asynchronous loading of files and URLs.
//!
//! Requests are queued with [`send`] and make progress when [`dowork`] is
//! called once per frame. The response callback runs on the calling thread
//! inside `dowork`. Loaded data lands in a buffer the caller binds, either
//! up front in the request or from the callback with [`bind_buffer`].
//!
//! Failures arrive as `Response::failed` plus an [`Error`] code; this layer
//! passes them through as-is.

use std::ffi::{c_char, c_void};

use bytemuck::{Pod, Zeroable};

use crate::abi::{impl_handle, impl_range, zeroed_default};
use crate::logging::{LogFn, impl_bridged_logger};
use crate::text;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    FilePathUtf8DecodingFailed,
    SendQueueFull,
    RequestChannelIndexTooBig,
    RequestPathIsNull,
    RequestPathTooLong,
    RequestCallbackMissing,
    RequestChunkSizeGreaterBufferSize,
    RequestUserdataPtrIsSetButUserdataSizeIsNull,
    RequestUserdataPtrIsNullButUserdataSizeIsNot,
    RequestUserdataSizeTooBig,
    ClampingNumChannelsToMaxChannels,
    RequestPoolExhausted,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Error {
    #[default]
    NoError,
    FileNotFound,
    NoBuffer,
    BufferTooSmall,
    UnexpectedEof,
    InvalidHttpStatus,
    Cancelled,
    JsOther,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Logger {
    pub func: Option<LogFn>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Range {
    pub ptr: *const c_void,
    pub size: usize,
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
    pub max_requests: u32,
    pub num_channels: u32,
    pub num_lanes: u32,
    pub allocator: Allocator,
    pub logger: Logger,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Handle {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Response {
    pub handle: Handle,
    pub dispatched: bool,
    pub fetched: bool,
    pub paused: bool,
    pub finished: bool,
    pub failed: bool,
    pub cancelled: bool,
    pub error_code: Error,
    pub channel: u32,
    pub lane: u32,
    pub path: *const c_char,
    pub user_data: *mut c_void,
    pub data_offset: u32,
    pub data: Range,
    pub buffer: Range,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Request {
    pub channel: u32,
    pub path: *const c_char,
    pub callback: Option<unsafe extern "C" fn(*const Response)>,
    pub chunk_size: u32,
    pub buffer: Range,
    pub user_data: Range,
}

impl_handle!(Handle);
zeroed_default!(Logger, Range, Allocator, Desc, Response, Request);

impl_bridged_logger!(Logger);

impl_range!(Range);

impl Response {
    /// The request path.
    ///
    /// # Safety
    ///
    /// Only valid inside the response callback that received `self`.
    pub unsafe fn path_str(&self) -> String {
        unsafe { text::to_string(self.path) }
    }

    /// The bytes loaded by this step, empty unless `fetched` is set.
    ///
    /// # Safety
    ///
    /// Only valid inside the response callback that received `self`; the
    /// slice aliases the bound buffer.
    pub unsafe fn data_bytes(&self) -> &[u8] {
        if self.data.ptr.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.data.ptr.cast(), self.data.size) }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::sfetch_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::sfetch_shutdown() }
}

pub fn valid() -> bool {
    unsafe { ffi::sfetch_valid() }
}

crate::dispatch::aggregate! {
    pub fn desc() -> Desc => sfetch_desc / sfetch_desc_internal;
}

pub fn max_userdata_bytes() -> i32 {
    unsafe { ffi::sfetch_max_userdata_bytes() }
}

pub fn max_path() -> i32 {
    unsafe { ffi::sfetch_max_path() }
}

crate::dispatch::aggregate! {
    pub fn send(request: &Request) -> Handle => sfetch_send / sfetch_send_internal;
}

pub fn handle_valid(h: Handle) -> bool {
    unsafe { ffi::sfetch_handle_valid(h) }
}

pub fn dowork() {
    unsafe { ffi::sfetch_dowork() }
}

pub fn bind_buffer(h: Handle, buffer: Range) {
    unsafe { ffi::sfetch_bind_buffer(h, buffer) }
}

pub fn unbind_buffer(h: Handle) -> *mut c_void {
    unsafe { ffi::sfetch_unbind_buffer(h) }
}

pub fn cancel(h: Handle) {
    unsafe { ffi::sfetch_cancel(h) }
}

pub fn pause(h: Handle) {
    unsafe { ffi::sfetch_pause(h) }
}

pub fn r#continue(h: Handle) {
    unsafe { ffi::sfetch_continue(h) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn sfetch_setup(desc: *const Desc);
        pub fn sfetch_shutdown();
        pub fn sfetch_valid() -> bool;
        #[cfg(not(feature = "web"))]
        pub fn sfetch_desc() -> Desc;
        #[cfg(feature = "web")]
        pub fn sfetch_desc_internal(result: *mut Desc);
        pub fn sfetch_max_userdata_bytes() -> i32;
        pub fn sfetch_max_path() -> i32;
        #[cfg(not(feature = "web"))]
        pub fn sfetch_send(request: *const Request) -> Handle;
        #[cfg(feature = "web")]
        pub fn sfetch_send_internal(result: *mut Handle, request: *const Request);
        pub fn sfetch_handle_valid(h: Handle) -> bool;
        pub fn sfetch_dowork();
        pub fn sfetch_bind_buffer(h: Handle, buffer: Range);
        pub fn sfetch_unbind_buffer(h: Handle) -> *mut c_void;
        pub fn sfetch_cancel(h: Handle);
        pub fn sfetch_pause(h: Handle);
        pub fn sfetch_continue(h: Handle);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;
    use crate::abi::Handle as _;
    use crate::text::CStrArg;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn response_layout() {
        assert_eq!(offset_of!(Response, dispatched), 4);
        assert_eq!(offset_of!(Response, cancelled), 9);
        assert_eq!(offset_of!(Response, error_code), 12);
        assert_eq!(offset_of!(Response, path), 24);
        assert_eq!(offset_of!(Response, data_offset), 40);
        assert_eq!(offset_of!(Response, data), 48);
        assert_eq!(offset_of!(Response, buffer), 64);
        assert_eq!(size_of::<Response>(), 80);
    }

    #[test]
    fn response_views() {
        let payload = *b"hello sokol";
        let path = CStrArg::new("data/hello.txt");
        let response = Response {
            handle: Handle::from_id(3),
            fetched: true,
            path: path.as_ptr(),
            data: Range::from_slice(&payload[..5]),
            buffer: Range::from_slice(&payload),
            ..Default::default()
        };
        unsafe {
            assert_eq!(response.path_str(), "data/hello.txt");
            assert_eq!(response.data_bytes(), b"hello");
        }
        assert_eq!(response.error_code, Error::NoError);
    }

    #[test]
    fn empty_response_has_no_data() {
        let response = Response::default();
        unsafe {
            assert!(response.data_bytes().is_empty());
            assert_eq!(response.path_str(), "");
        }
    }
}
