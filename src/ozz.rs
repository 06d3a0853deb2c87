//! ozz-animation utility: skinned character instances animated on the CPU
//! and uploaded to a shared joint texture.
//!
//! Instances are owned by the native side. Create them with
//! [`create_instance`] and release them with [`destroy_instance`].

use std::ffi::c_void;

use bytemuck::{Pod, Zeroable};

use crate::gfx;

/// Opaque native animation instance.
#[repr(C)]
pub struct Instance {
    _opaque: [u8; 0],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: u32,
    pub joint_indices: u32,
    pub joint_weights: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Desc {
    pub max_palette_joints: i32,
    pub max_instances: i32,
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::ozz_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::ozz_shutdown() }
}

crate::dispatch::aggregate! {
    pub fn joint_texture() -> gfx::Image => ozz_joint_texture / ozz_joint_texture_internal;
    pub fn joint_texture_view() -> gfx::View
        => ozz_joint_texture_view / ozz_joint_texture_view_internal;
    pub fn joint_sampler() -> gfx::Sampler => ozz_joint_sampler / ozz_joint_sampler_internal;
}

/// A new instance using character slot `index`. Null on failure.
pub fn create_instance(index: i32) -> *mut Instance {
    unsafe { ffi::ozz_create_instance(index) }
}

pub unsafe fn destroy_instance(ozz: *mut Instance) {
    unsafe { ffi::ozz_destroy_instance(ozz) }
}

/// The instance's skinned vertex buffer; invalid until the mesh is loaded.
///
/// # Safety
///
/// `ozz` must be a live instance from [`create_instance`].
pub unsafe fn vertex_buffer(ozz: *mut Instance) -> gfx::Buffer {
    #[cfg(not(feature = "web"))]
    {
        crate::dispatch::direct(|| unsafe { ffi::ozz_vertex_buffer(ozz) })
    }
    #[cfg(feature = "web")]
    {
        crate::dispatch::indirect(|result| unsafe { ffi::ozz_vertex_buffer_internal(result, ozz) })
    }
}

/// # Safety
///
/// `ozz` must be a live instance from [`create_instance`].
pub unsafe fn index_buffer(ozz: *mut Instance) -> gfx::Buffer {
    #[cfg(not(feature = "web"))]
    {
        crate::dispatch::direct(|| unsafe { ffi::ozz_index_buffer(ozz) })
    }
    #[cfg(feature = "web")]
    {
        crate::dispatch::indirect(|result| unsafe { ffi::ozz_index_buffer_internal(result, ozz) })
    }
}

pub unsafe fn all_loaded(ozz: *mut Instance) -> bool {
    unsafe { ffi::ozz_all_loaded(ozz) }
}

pub unsafe fn load_failed(ozz: *mut Instance) -> bool {
    unsafe { ffi::ozz_load_failed(ozz) }
}

pub unsafe fn load_skeleton(ozz: *mut Instance, data: &[u8]) {
    unsafe { ffi::ozz_load_skeleton(ozz, data.as_ptr().cast(), data.len()) }
}

pub unsafe fn load_animation(ozz: *mut Instance, data: &[u8]) {
    unsafe { ffi::ozz_load_animation(ozz, data.as_ptr().cast(), data.len()) }
}

pub unsafe fn load_mesh(ozz: *mut Instance, data: &[u8]) {
    unsafe { ffi::ozz_load_mesh(ozz, data.as_ptr().cast(), data.len()) }
}

pub unsafe fn set_load_failed(ozz: *mut Instance) {
    unsafe { ffi::ozz_set_load_failed(ozz) }
}

pub unsafe fn update_instance(ozz: *mut Instance, seconds: f64) {
    unsafe { ffi::ozz_update_instance(ozz, seconds) }
}

pub fn update_joint_texture() {
    unsafe { ffi::ozz_update_joint_texture() }
}

pub fn joint_texture_pixel_width() -> f32 {
    unsafe { ffi::ozz_joint_texture_pixel_width() }
}

pub unsafe fn joint_texture_u(ozz: *mut Instance) -> f32 {
    unsafe { ffi::ozz_joint_texture_u(ozz) }
}

pub unsafe fn joint_texture_v(ozz: *mut Instance) -> f32 {
    unsafe { ffi::ozz_joint_texture_v(ozz) }
}

pub unsafe fn num_triangle_indices(ozz: *mut Instance) -> i32 {
    unsafe { ffi::ozz_num_triangle_indices(ozz) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(
        all(feature = "link", target_os = "ios"),
        link(name = "ozzutil", kind = "framework")
    )]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "ozzutil"))]
    unsafe extern "C" {
        pub fn ozz_setup(desc: *const Desc);
        pub fn ozz_shutdown();
        #[cfg(not(feature = "web"))]
        pub fn ozz_joint_texture() -> gfx::Image;
        #[cfg(feature = "web")]
        pub fn ozz_joint_texture_internal(result: *mut gfx::Image);
        #[cfg(not(feature = "web"))]
        pub fn ozz_joint_texture_view() -> gfx::View;
        #[cfg(feature = "web")]
        pub fn ozz_joint_texture_view_internal(result: *mut gfx::View);
        #[cfg(not(feature = "web"))]
        pub fn ozz_joint_sampler() -> gfx::Sampler;
        #[cfg(feature = "web")]
        pub fn ozz_joint_sampler_internal(result: *mut gfx::Sampler);
        pub fn ozz_create_instance(index: i32) -> *mut Instance;
        pub fn ozz_destroy_instance(ozz: *mut Instance);
        #[cfg(not(feature = "web"))]
        pub fn ozz_vertex_buffer(ozz: *mut Instance) -> gfx::Buffer;
        #[cfg(feature = "web")]
        pub fn ozz_vertex_buffer_internal(result: *mut gfx::Buffer, ozz: *mut Instance);
        #[cfg(not(feature = "web"))]
        pub fn ozz_index_buffer(ozz: *mut Instance) -> gfx::Buffer;
        #[cfg(feature = "web")]
        pub fn ozz_index_buffer_internal(result: *mut gfx::Buffer, ozz: *mut Instance);
        pub fn ozz_all_loaded(ozz: *mut Instance) -> bool;
        pub fn ozz_load_failed(ozz: *mut Instance) -> bool;
        pub fn ozz_load_skeleton(ozz: *mut Instance, data: *const c_void, num_bytes: usize);
        pub fn ozz_load_animation(ozz: *mut Instance, data: *const c_void, num_bytes: usize);
        pub fn ozz_load_mesh(ozz: *mut Instance, data: *const c_void, num_bytes: usize);
        pub fn ozz_set_load_failed(ozz: *mut Instance);
        pub fn ozz_update_instance(ozz: *mut Instance, seconds: f64);
        pub fn ozz_update_joint_texture();
        pub fn ozz_joint_texture_pixel_width() -> f32;
        pub fn ozz_joint_texture_u(ozz: *mut Instance) -> f32;
        pub fn ozz_joint_texture_v(ozz: *mut Instance) -> f32;
        pub fn ozz_num_triangle_indices(ozz: *mut Instance) -> i32;
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn vertex_layout() {
        assert_eq!(size_of::<Vertex>(), 24);
        assert_eq!(offset_of!(Vertex, normal), 12);
        assert_eq!(offset_of!(Vertex, joint_indices), 16);
        assert_eq!(offset_of!(Vertex, joint_weights), 20);
    }

    #[test]
    fn desc_defaults_to_zero() {
        let desc = Desc::default();
        assert_eq!(desc, Desc { max_palette_joints: 0, max_instances: 0 });
        assert_eq!(size_of::<Desc>(), 8);
    }

    #[test]
    fn vertices_cast_to_bytes() {
        let vertices = [Vertex { position: [1.0, 2.0, 3.0], ..Default::default() }; 2];
        let range = gfx::Range::from_slice(&vertices);
        assert_eq!(range.size, 48);
    }
}
