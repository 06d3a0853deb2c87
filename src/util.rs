//! Asset path resolution for the Android app template.
//!
//! The template's native `fileutil` helper maps a relative asset name to
//! the path the platform loader expects. Other targets read assets
//! relative to the working directory and do not export it.

/// Strip prefixes that break asset lookup: `./`, `.\`, and a single
/// leading `/` or `\` (UNC-style `//` and `\\` are kept).
pub fn asset_name(filename: &str) -> &str {
    if let Some(rest) = filename.strip_prefix("./") {
        rest
    } else if let Some(rest) = filename.strip_prefix(".\\") {
        rest
    } else if filename.starts_with('/') && !filename.starts_with("//") {
        &filename[1..]
    } else if filename.starts_with('\\') && !filename.starts_with("\\\\") {
        &filename[1..]
    } else {
        filename
    }
}

#[cfg(target_os = "android")]
pub use android::*;

#[cfg(target_os = "android")]
mod android {
    use std::ffi::c_char;

    use super::asset_name;
    use crate::text::{self, CStrArg};

    const PATH_CAPACITY: usize = 1024;

    /// Resolve `filename` to a loadable path. Empty if the native side
    /// could not resolve it.
    pub fn file_path(filename: &str) -> String {
        let name = CStrArg::new(asset_name(filename));
        let mut buf = [0 as c_char; PATH_CAPACITY];
        unsafe {
            let path = ffi::fileutil_get_path(name.as_ptr(), buf.as_mut_ptr(), buf.len());
            text::to_string(path)
        }
    }

    pub mod ffi {
        use std::ffi::c_char;

        #[cfg_attr(feature = "link", link(name = "sokol"))]
        unsafe extern "C" {
            pub fn fileutil_get_path(
                filename: *const c_char,
                buf: *mut c_char,
                buf_size: usize,
            ) -> *const c_char;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_relative_and_rooted_prefixes() {
        assert_eq!(asset_name("./data/font.ttf"), "data/font.ttf");
        assert_eq!(asset_name(".\\data\\font.ttf"), "data\\font.ttf");
        assert_eq!(asset_name("/data/font.ttf"), "data/font.ttf");
        assert_eq!(asset_name("\\data"), "data");
    }

    #[test]
    fn keeps_network_paths_and_plain_names() {
        assert_eq!(asset_name("//server/share"), "//server/share");
        assert_eq!(asset_name("\\\\server\\share"), "\\\\server\\share");
        assert_eq!(asset_name("data/font.ttf"), "data/font.ttf");
        assert_eq!(asset_name(""), "");
    }
}
