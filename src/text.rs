// src/text.rs
//
// UTF-8 string marshaling across the native boundary.
//
// Native strings are NUL-terminated UTF-8. Two policies are provided:
//
// - `CStrArg`: temporary conversion at the call boundary. The buffer lives
//   until the end of the statement that made the call.
// - `OwnedCStr`: a buffer owned next to a struct whose `*const c_char` field
//   points into it. Writing a new value frees the previous buffer first.
//
// Both produce the same bytes on the wire.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

/// Build a C string from `s`, cutting at the first interior NUL.
fn terminated(s: &str) -> CString {
    let bytes = s.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    // No NUL left in bytes[..end].
    CString::new(&bytes[..end]).unwrap_or_default()
}

/// A `&str` converted for one native call.
pub struct CStrArg(CString);

impl CStrArg {
    pub fn new(s: &str) -> Self {
        Self(terminated(s))
    }

    /// Valid while `self` is alive.
    #[inline]
    pub fn as_ptr(&self) -> *const c_char {
        self.0.as_ptr()
    }
}

/// Copy a native string into a Rust `String`.
///
/// A null pointer comes back as an empty string. Invalid UTF-8 sequences are
/// replaced with U+FFFD and the rest of the text is kept.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated buffer that stays valid
/// for the duration of the call.
pub unsafe fn to_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let raw = unsafe { CStr::from_ptr(ptr) };
    raw.to_string_lossy().into_owned()
}

/// Owned storage for a string field of a native struct.
///
/// Every `set` releases the old buffer before the new one is stored, and the
/// buffer is released when the owner drops.
#[derive(Debug, Default)]
pub struct OwnedCStr {
    buf: Option<CString>,
}

impl OwnedCStr {
    pub fn new(value: &str) -> Self {
        Self {
            buf: Some(terminated(value)),
        }
    }

    pub fn set(&mut self, value: &str) {
        self.buf = None;
        self.buf = Some(terminated(value));
    }

    /// Store `value` and point `field` at the new buffer.
    ///
    /// The struct holding `field` must not be handed to native code after
    /// `self` is dropped or written again.
    pub fn assign(&mut self, field: &mut *const c_char, value: &str) {
        self.set(value);
        *field = self.as_ptr();
    }

    pub fn clear(&mut self) {
        self.buf = None;
    }

    /// Null when nothing has been stored.
    pub fn as_ptr(&self) -> *const c_char {
        self.buf.as_ref().map_or(ptr::null(), |s| s.as_ptr())
    }

    pub fn as_str(&self) -> &str {
        self.buf
            .as_ref()
            .and_then(|s| s.to_str().ok())
            .unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref().map(|s| s.as_bytes()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reads_as_empty() {
        assert_eq!(unsafe { to_string(ptr::null()) }, "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_dropped() {
        let raw = b"caf\xe9 menu\0";
        assert_eq!(unsafe { to_string(raw.as_ptr().cast()) }, "caf\u{fffd} menu");

        let raw = [0xff_u8, 0xfe, 0x00];
        assert_eq!(unsafe { to_string(raw.as_ptr().cast()) }, "\u{fffd}\u{fffd}");
    }

    #[test]
    fn call_argument_round_trips() {
        let arg = CStrArg::new("sokol ✓");
        assert_eq!(unsafe { to_string(arg.as_ptr()) }, "sokol ✓");
    }

    #[test]
    fn interior_nul_truncates() {
        let arg = CStrArg::new("abc\0def");
        assert_eq!(unsafe { to_string(arg.as_ptr()) }, "abc");
        assert_eq!(OwnedCStr::new("x\0y").as_bytes(), b"x");
    }

    #[test]
    fn owned_buffer_round_trips() {
        let mut owned = OwnedCStr::default();
        assert!(owned.as_ptr().is_null());
        assert_eq!(owned.as_str(), "");

        owned.set("first");
        assert_eq!(owned.as_str(), "first");
        assert_eq!(unsafe { to_string(owned.as_ptr()) }, "first");

        owned.set("zweite Zeichenkette");
        assert_eq!(owned.as_bytes(), "zweite Zeichenkette".as_bytes());

        owned.clear();
        assert!(owned.as_ptr().is_null());
    }

    #[test]
    fn assign_points_field_at_owned_buffer() {
        let mut desc = crate::app::Desc::default();
        let mut title = OwnedCStr::default();

        title.assign(&mut desc.window_title, "Triangle");
        assert_eq!(desc.window_title, title.as_ptr());
        assert_eq!(unsafe { to_string(desc.window_title) }, "Triangle");

        title.assign(&mut desc.window_title, "Cube");
        assert_eq!(unsafe { to_string(desc.window_title) }, "Cube");
    }

    #[test]
    fn both_policies_emit_identical_bytes() {
        let arg = CStrArg::new("héllo");
        let owned = OwnedCStr::new("héllo");
        let a = unsafe { CStr::from_ptr(arg.as_ptr()) }.to_bytes_with_nul();
        let b = unsafe { CStr::from_ptr(owned.as_ptr()) }.to_bytes_with_nul();
        assert_eq!(a, b);
    }
}
