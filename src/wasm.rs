//! Browser entry points, compiled only with the `web` feature.
//!
//! The native libraries are linked into the same wasm module. These exports
//! let the JavaScript host set up logging and check the compiled layout
//! against the native build before calling in.
//!
//! ```javascript
//! import init, { sokol_init, sokol_struct_size } from './sokol.js';
//!
//! await init();
//! sokol_init();
//! console.assert(sokol_struct_size("crate::gfx::Desc") === expectedDescSize);
//! ```

use wasm_bindgen::prelude::*;

use crate::logging;
use crate::platform::{self, STRATEGY, Strategy};

/// Install the panic hook and console logger. Call once before anything else.
#[wasm_bindgen]
pub fn sokol_init() {
    logging::init();
    log::debug!("sokol bindings ready, dispatch {:?}", STRATEGY);
}

/// The active dispatch strategy, `"indirect"` under `web`.
#[wasm_bindgen]
pub fn sokol_dispatch_strategy() -> String {
    match STRATEGY {
        Strategy::NativeDirect => "direct".into(),
        Strategy::NativeIndirect => "indirect".into(),
    }
}

/// Compiled size of a mirrored struct, by path as listed in
/// `platform::LAYOUTS`.
#[wasm_bindgen]
pub fn sokol_struct_size(name: &str) -> Option<u32> {
    platform::layout(name).and_then(|l| u32::try_from(l.size).ok())
}

/// Compiled alignment of a mirrored struct.
#[wasm_bindgen]
pub fn sokol_struct_align(name: &str) -> Option<u32> {
    platform::layout(name).and_then(|l| u32::try_from(l.align).ok())
}
