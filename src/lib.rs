// src/lib.rs
//
// Bindings for the sokol headers and the companion libraries built into the
// same native binaries: cgltf, fontstash, stb_image, tinyexr, ozz-animation
// and spine-c.
//
// Each module mirrors one native module: its structs and enums byte for
// byte, a façade function per native function, and the raw `ffi` block.

mod abi;
pub mod dispatch;
pub mod logging;
pub mod platform;
pub mod text;

pub mod app;
pub mod audio;
pub mod debugtext;
pub mod fetch;
pub mod fontstash;
pub mod gfx;
pub mod gl;
pub mod gltf;
pub mod glue;
pub mod image;
pub mod ozz;
pub mod sfons;
pub mod shape;
pub mod spine;
pub mod time;
pub mod util;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use abi::Handle;
pub use dispatch::{STRATEGY, Strategy};
pub use image::ImageError;
