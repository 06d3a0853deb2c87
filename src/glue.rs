//! sokol_glue: bridges sokol_app's window into sokol_gfx's environment and
//! swapchain descriptors.
//!
//! Both results are large structs and go through the dispatch selector.

use crate::gfx;

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

crate::dispatch::aggregate! {
    pub fn environment() -> gfx::Environment => sglue_environment / sglue_environment_internal;
    pub fn swapchain() -> gfx::Swapchain => sglue_swapchain / sglue_swapchain_internal;
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        #[cfg(not(feature = "web"))]
        pub fn sglue_environment() -> gfx::Environment;
        #[cfg(feature = "web")]
        pub fn sglue_environment_internal(result: *mut gfx::Environment);
        #[cfg(not(feature = "web"))]
        pub fn sglue_swapchain() -> gfx::Swapchain;
        #[cfg(feature = "web")]
        pub fn sglue_swapchain_internal(result: *mut gfx::Swapchain);
    }
}
