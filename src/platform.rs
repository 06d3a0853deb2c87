// src/platform.rs
//
// Where each native binary is found on each target.
//
// This is configuration data and must track the native build: the iOS build
// ships every binary as an embedded framework, everything else links a plain
// shared library. The `#[link]` attributes in each module's `ffi` block are
// the compile-time form of the same table.

pub use crate::dispatch::{STRATEGY, Strategy};

/// A native binary this crate declares entry points against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NativeLibrary {
    /// sokol_app, sokol_gfx, sokol_gl, debugtext, shape, fetch, audio, time,
    /// glue, log, cgltf, fontstash, stb_image and tinyexr.
    Sokol,
    /// The ozz-animation utility wrapper.
    OzzUtil,
    /// spine-c plus sokol_spine.
    Spine,
}

/// How a binary's symbols are resolved on a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Linkage {
    /// A shared or static library found by name.
    Library,
    /// An embedded framework under `@rpath`.
    Framework,
}

impl NativeLibrary {
    pub const ALL: [NativeLibrary; 3] = [Self::Sokol, Self::OzzUtil, Self::Spine];

    /// Link name, as passed to `#[link(name = ...)]`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sokol => "sokol",
            Self::OzzUtil => "ozzutil",
            Self::Spine => "spine-c",
        }
    }

    /// Search path used when the binary ships as a framework.
    pub fn framework_path(self) -> String {
        let name = self.name();
        format!("@rpath/{name}.framework/{name}")
    }

    /// File name of the shared library on the current target.
    pub fn file_name(self) -> String {
        let name = self.name();
        if cfg!(target_os = "windows") {
            format!("{name}.dll")
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            format!("lib{name}.dylib")
        } else if cfg!(target_arch = "wasm32") {
            format!("lib{name}.a")
        } else {
            format!("lib{name}.so")
        }
    }

    /// Linkage on the current target.
    pub const fn linkage(self) -> Linkage {
        if cfg!(target_os = "ios") {
            Linkage::Framework
        } else {
            Linkage::Library
        }
    }

    /// The path the loader resolves on the current target.
    pub fn search_path(self) -> String {
        match self.linkage() {
            Linkage::Framework => self.framework_path(),
            Linkage::Library => self.file_name(),
        }
    }
}

/// `true` when the crate was built to emit `#[link]` attributes.
pub const LINKED: bool = cfg!(feature = "link");

/// Size and alignment of one mirrored struct, as compiled for this target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StructLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

macro_rules! layouts {
    ($($ty:path),+ $(,)?) => {
        &[$(StructLayout {
            name: stringify!($ty),
            size: std::mem::size_of::<$ty>(),
            align: std::mem::align_of::<$ty>(),
        }),+]
    };
}

/// The descriptor structs most likely to drift between native versions.
///
/// Compare against `sizeof`/`alignof` from the native headers when updating
/// the native libraries.
pub const LAYOUTS: &[StructLayout] = layouts![
    crate::app::Desc,
    crate::app::Event,
    crate::gfx::Desc,
    crate::gfx::BufferDesc,
    crate::gfx::ImageDesc,
    crate::gfx::PipelineDesc,
    crate::gfx::PassAction,
    crate::gfx::Bindings,
    crate::gfx::Environment,
    crate::audio::Desc,
    crate::fetch::Request,
    crate::fetch::Response,
    crate::gl::Desc,
    crate::debugtext::Desc,
    crate::shape::Buffer,
    crate::gltf::Data,
    crate::ozz::Desc,
    crate::spine::Desc,
    crate::fontstash::Params,
];

/// Look up a mirrored struct by its path, e.g. `crate::gfx::Desc`.
pub fn layout(name: &str) -> Option<StructLayout> {
    LAYOUTS.iter().find(|l| l.name == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_names_match_native_binaries() {
        let names: Vec<_> = NativeLibrary::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, ["sokol", "ozzutil", "spine-c"]);
    }

    #[test]
    fn framework_paths_use_rpath() {
        assert_eq!(
            NativeLibrary::Sokol.framework_path(),
            "@rpath/sokol.framework/sokol"
        );
        assert_eq!(
            NativeLibrary::Spine.framework_path(),
            "@rpath/spine-c.framework/spine-c"
        );
    }

    #[test]
    fn layout_table_matches_types() {
        let desc = layout("crate::gfx::BufferDesc").unwrap();
        assert_eq!(desc.size, std::mem::size_of::<crate::gfx::BufferDesc>());
        assert_eq!(desc.align, std::mem::align_of::<crate::gfx::BufferDesc>());
        assert!(layout("crate::gfx::Nope").is_none());
        assert!(LAYOUTS.iter().all(|l| l.size > 0 && l.size % l.align == 0));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_resolves_shared_objects() {
        assert_eq!(NativeLibrary::OzzUtil.linkage(), Linkage::Library);
        assert_eq!(NativeLibrary::OzzUtil.search_path(), "libozzutil.so");
    }
}
