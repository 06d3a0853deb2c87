//! sokol_shape: vertex and index data for planes, boxes, spheres, cylinders
//! and tori, written into caller-owned buffers.
//!
//! `build_*` takes a [`Buffer`] describing the free space and returns it
//! updated; `valid` turns false when the data did not fit. Use the
//! `*_sizes` calls to size the buffers first.

use std::ffi::c_void;

use bytemuck::{Pod, Zeroable};

use crate::abi::{impl_range, zeroed_default};
use crate::gfx;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Range {
    pub ptr: *const c_void,
    pub size: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub normal: u32,
    pub u: u16,
    pub v: u16,
    pub color: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ElementRange {
    pub base_element: u32,
    pub num_elements: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct SizesItem {
    pub num: u32,
    pub size: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Sizes {
    pub vertices: SizesItem,
    pub indices: SizesItem,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BufferItem {
    pub buffer: Range,
    pub data_size: usize,
    pub shape_offset: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Buffer {
    pub valid: bool,
    pub vertices: BufferItem,
    pub indices: BufferItem,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub width: f32,
    pub depth: f32,
    pub tiles: u16,
    pub color: u32,
    pub random_colors: bool,
    pub merge: bool,
    pub transform: Mat4,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BoxShape {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub tiles: u16,
    pub color: u32,
    pub random_colors: bool,
    pub merge: bool,
    pub transform: Mat4,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub radius: f32,
    pub slices: u16,
    pub stacks: u16,
    pub color: u32,
    pub random_colors: bool,
    pub merge: bool,
    pub transform: Mat4,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Cylinder {
    pub radius: f32,
    pub height: f32,
    pub slices: u16,
    pub stacks: u16,
    pub color: u32,
    pub random_colors: bool,
    pub merge: bool,
    pub transform: Mat4,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Torus {
    pub radius: f32,
    pub ring_radius: f32,
    pub sides: u16,
    pub rings: u16,
    pub color: u32,
    pub random_colors: bool,
    pub merge: bool,
    pub transform: Mat4,
}

zeroed_default!(Range, BufferItem, Buffer, Plane, BoxShape, Sphere, Cylinder, Torus);

impl_range!(Range);

impl Mat4 {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_array(values: [f32; 16]) -> Self {
        bytemuck::cast(values)
    }

    /// The 16 floats in memory order.
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// Flat view over the same storage; indexing is bounds-checked.
    pub fn as_slice(&self) -> &[f32] {
        self.as_array()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.as_mut_array()
    }
}

impl Buffer {
    /// Describe empty vertex and index storage for `build_*` to fill.
    ///
    /// The returned value points into both slices and must not outlive them.
    pub fn new(vertices: &mut [Vertex], indices: &mut [u16]) -> Self {
        Self {
            vertices: BufferItem {
                buffer: Range::from_mut_slice(vertices),
                ..Default::default()
            },
            indices: BufferItem {
                buffer: Range::from_mut_slice(indices),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

crate::dispatch::aggregate! {
    pub fn build_plane(buf: &Buffer, params: &Plane) -> Buffer
        => sshape_build_plane / sshape_build_plane_internal;
    pub fn build_box(buf: &Buffer, params: &BoxShape) -> Buffer
        => sshape_build_box / sshape_build_box_internal;
    pub fn build_sphere(buf: &Buffer, params: &Sphere) -> Buffer
        => sshape_build_sphere / sshape_build_sphere_internal;
    pub fn build_cylinder(buf: &Buffer, params: &Cylinder) -> Buffer
        => sshape_build_cylinder / sshape_build_cylinder_internal;
    pub fn build_torus(buf: &Buffer, params: &Torus) -> Buffer
        => sshape_build_torus / sshape_build_torus_internal;
    pub fn plane_sizes(tiles: u32) -> Sizes => sshape_plane_sizes / sshape_plane_sizes_internal;
    pub fn box_sizes(tiles: u32) -> Sizes => sshape_box_sizes / sshape_box_sizes_internal;
    pub fn sphere_sizes(slices: u32, stacks: u32) -> Sizes
        => sshape_sphere_sizes / sshape_sphere_sizes_internal;
    pub fn cylinder_sizes(slices: u32, stacks: u32) -> Sizes
        => sshape_cylinder_sizes / sshape_cylinder_sizes_internal;
    pub fn torus_sizes(sides: u32, rings: u32) -> Sizes
        => sshape_torus_sizes / sshape_torus_sizes_internal;
    pub fn element_range(buf: &Buffer) -> ElementRange
        => sshape_element_range / sshape_element_range_internal;
    pub fn vertex_buffer_desc(buf: &Buffer) -> gfx::BufferDesc
        => sshape_vertex_buffer_desc / sshape_vertex_buffer_desc_internal;
    pub fn index_buffer_desc(buf: &Buffer) -> gfx::BufferDesc
        => sshape_index_buffer_desc / sshape_index_buffer_desc_internal;
    pub fn vertex_buffer_layout_state() -> gfx::VertexBufferLayoutState
        => sshape_vertex_buffer_layout_state / sshape_vertex_buffer_layout_state_internal;
    pub fn position_vertex_attr_state() -> gfx::VertexAttrState
        => sshape_position_vertex_attr_state / sshape_position_vertex_attr_state_internal;
    pub fn normal_vertex_attr_state() -> gfx::VertexAttrState
        => sshape_normal_vertex_attr_state / sshape_normal_vertex_attr_state_internal;
    pub fn texcoord_vertex_attr_state() -> gfx::VertexAttrState
        => sshape_texcoord_vertex_attr_state / sshape_texcoord_vertex_attr_state_internal;
    pub fn color_vertex_attr_state() -> gfx::VertexAttrState
        => sshape_color_vertex_attr_state / sshape_color_vertex_attr_state_internal;
}

pub fn color_4f(r: f32, g: f32, b: f32, a: f32) -> u32 {
    unsafe { ffi::sshape_color_4f(r, g, b, a) }
}

pub fn color_3f(r: f32, g: f32, b: f32) -> u32 {
    unsafe { ffi::sshape_color_3f(r, g, b) }
}

pub fn color_4b(r: u8, g: u8, b: u8, a: u8) -> u32 {
    unsafe { ffi::sshape_color_4b(r, g, b, a) }
}

pub fn color_3b(r: u8, g: u8, b: u8) -> u32 {
    unsafe { ffi::sshape_color_3b(r, g, b) }
}

crate::dispatch::aggregate! {
    pub fn mat4(m: &[f32; 16]) -> Mat4 => sshape_mat4 / sshape_mat4_internal;
    pub fn mat4_transpose(m: &[f32; 16]) -> Mat4
        => sshape_mat4_transpose / sshape_mat4_transpose_internal;
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
        pub fn sshape_build_plane(buf: *const Buffer, params: *const Plane) -> Buffer;
        #[cfg(feature = "web")]
        pub fn sshape_build_plane_internal(
            result: *mut Buffer,
            buf: *const Buffer,
            params: *const Plane,
        );
        #[cfg(not(feature = "web"))]
        pub fn sshape_build_box(buf: *const Buffer, params: *const BoxShape) -> Buffer;
        #[cfg(feature = "web")]
        pub fn sshape_build_box_internal(
            result: *mut Buffer,
            buf: *const Buffer,
            params: *const BoxShape,
        );
        #[cfg(not(feature = "web"))]
        pub fn sshape_build_sphere(buf: *const Buffer, params: *const Sphere) -> Buffer;
        #[cfg(feature = "web")]
        pub fn sshape_build_sphere_internal(
            result: *mut Buffer,
            buf: *const Buffer,
            params: *const Sphere,
        );
        #[cfg(not(feature = "web"))]
        pub fn sshape_build_cylinder(buf: *const Buffer, params: *const Cylinder) -> Buffer;
        #[cfg(feature = "web")]
        pub fn sshape_build_cylinder_internal(
            result: *mut Buffer,
            buf: *const Buffer,
            params: *const Cylinder,
        );
        #[cfg(not(feature = "web"))]
        pub fn sshape_build_torus(buf: *const Buffer, params: *const Torus) -> Buffer;
        #[cfg(feature = "web")]
        pub fn sshape_build_torus_internal(
            result: *mut Buffer,
            buf: *const Buffer,
            params: *const Torus,
        );
        #[cfg(not(feature = "web"))]
        pub fn sshape_plane_sizes(tiles: u32) -> Sizes;
        #[cfg(feature = "web")]
        pub fn sshape_plane_sizes_internal(result: *mut Sizes, tiles: u32);
        #[cfg(not(feature = "web"))]
        pub fn sshape_box_sizes(tiles: u32) -> Sizes;
        #[cfg(feature = "web")]
        pub fn sshape_box_sizes_internal(result: *mut Sizes, tiles: u32);
        #[cfg(not(feature = "web"))]
        pub fn sshape_sphere_sizes(slices: u32, stacks: u32) -> Sizes;
        #[cfg(feature = "web")]
        pub fn sshape_sphere_sizes_internal(result: *mut Sizes, slices: u32, stacks: u32);
        #[cfg(not(feature = "web"))]
        pub fn sshape_cylinder_sizes(slices: u32, stacks: u32) -> Sizes;
        #[cfg(feature = "web")]
        pub fn sshape_cylinder_sizes_internal(result: *mut Sizes, slices: u32, stacks: u32);
        #[cfg(not(feature = "web"))]
        pub fn sshape_torus_sizes(sides: u32, rings: u32) -> Sizes;
        #[cfg(feature = "web")]
        pub fn sshape_torus_sizes_internal(result: *mut Sizes, sides: u32, rings: u32);
        #[cfg(not(feature = "web"))]
        pub fn sshape_element_range(buf: *const Buffer) -> ElementRange;
        #[cfg(feature = "web")]
        pub fn sshape_element_range_internal(result: *mut ElementRange, buf: *const Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sshape_vertex_buffer_desc(buf: *const Buffer) -> gfx::BufferDesc;
        #[cfg(feature = "web")]
        pub fn sshape_vertex_buffer_desc_internal(result: *mut gfx::BufferDesc, buf: *const Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sshape_index_buffer_desc(buf: *const Buffer) -> gfx::BufferDesc;
        #[cfg(feature = "web")]
        pub fn sshape_index_buffer_desc_internal(result: *mut gfx::BufferDesc, buf: *const Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sshape_vertex_buffer_layout_state() -> gfx::VertexBufferLayoutState;
        #[cfg(feature = "web")]
        pub fn sshape_vertex_buffer_layout_state_internal(
            result: *mut gfx::VertexBufferLayoutState,
        );
        #[cfg(not(feature = "web"))]
        pub fn sshape_position_vertex_attr_state() -> gfx::VertexAttrState;
        #[cfg(feature = "web")]
        pub fn sshape_position_vertex_attr_state_internal(result: *mut gfx::VertexAttrState);
        #[cfg(not(feature = "web"))]
        pub fn sshape_normal_vertex_attr_state() -> gfx::VertexAttrState;
        #[cfg(feature = "web")]
        pub fn sshape_normal_vertex_attr_state_internal(result: *mut gfx::VertexAttrState);
        #[cfg(not(feature = "web"))]
        pub fn sshape_texcoord_vertex_attr_state() -> gfx::VertexAttrState;
        #[cfg(feature = "web")]
        pub fn sshape_texcoord_vertex_attr_state_internal(result: *mut gfx::VertexAttrState);
        #[cfg(not(feature = "web"))]
        pub fn sshape_color_vertex_attr_state() -> gfx::VertexAttrState;
        #[cfg(feature = "web")]
        pub fn sshape_color_vertex_attr_state_internal(result: *mut gfx::VertexAttrState);
        pub fn sshape_color_4f(r: f32, g: f32, b: f32, a: f32) -> u32;
        pub fn sshape_color_3f(r: f32, g: f32, b: f32) -> u32;
        pub fn sshape_color_4b(r: u8, g: u8, b: u8, a: u8) -> u32;
        pub fn sshape_color_3b(r: u8, g: u8, b: u8) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sshape_mat4(m: *const [f32; 16]) -> Mat4;
        #[cfg(feature = "web")]
        pub fn sshape_mat4_internal(result: *mut Mat4, m: *const [f32; 16]);
        #[cfg(not(feature = "web"))]
        pub fn sshape_mat4_transpose(m: *const [f32; 16]) -> Mat4;
        #[cfg(feature = "web")]
        pub fn sshape_mat4_transpose_internal(result: *mut Mat4, m: *const [f32; 16]);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn mat4_index_view() {
        let mut mat = Mat4::default();
        for (i, v) in mat.as_mut_slice().iter_mut().enumerate() {
            *v = i as f32;
        }
        assert_eq!(mat.as_slice().len(), 16);
        assert_eq!(mat.as_slice()[5], 5.0);
        assert_eq!(mat.m[1][1], 5.0);
        assert_eq!(mat.m[3][3], 15.0);
    }

    #[test]
    #[should_panic]
    fn mat4_view_is_bounds_checked() {
        let mat = Mat4::IDENTITY;
        let i = std::hint::black_box(16);
        let _ = mat.as_slice()[i];
    }

    #[test]
    fn mat4_array_round_trip() {
        let values: [f32; 16] = std::array::from_fn(|i| i as f32 * 0.5);
        let mat = Mat4::from_array(values);
        assert_eq!(mat.as_array(), &values);
        assert_eq!(Mat4::IDENTITY.as_array()[15], 1.0);
    }

    #[test]
    fn layouts() {
        assert_eq!(size_of::<Mat4>(), 64);
        assert_eq!(size_of::<Vertex>(), 24);
        assert_eq!(offset_of!(Vertex, normal), 12);
        assert_eq!(offset_of!(Vertex, u), 16);
        assert_eq!(offset_of!(Vertex, color), 20);

        assert_eq!(offset_of!(Plane, tiles), 8);
        assert_eq!(offset_of!(Plane, color), 12);
        assert_eq!(offset_of!(Plane, random_colors), 16);
        assert_eq!(offset_of!(Plane, merge), 17);
        assert_eq!(offset_of!(Plane, transform), 20);
        assert_eq!(size_of::<Plane>(), 84);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn buffer_layout() {
        assert_eq!(size_of::<BufferItem>(), 32);
        assert_eq!(offset_of!(Buffer, vertices), 8);
        assert_eq!(offset_of!(Buffer, indices), 40);
        assert_eq!(size_of::<Buffer>(), 72);
    }

    #[test]
    fn buffer_points_at_caller_storage() {
        let mut vertices = vec![Vertex::default(); 64];
        let mut indices = vec![0_u16; 96];
        let buf = Buffer::new(&mut vertices, &mut indices);
        assert!(!buf.valid);
        assert_eq!(buf.vertices.buffer.size, 64 * 24);
        assert_eq!(buf.indices.buffer.size, 96 * 2);
        assert_eq!(buf.vertices.buffer.ptr, vertices.as_ptr().cast());
        assert_eq!(buf.vertices.data_size, 0);
    }
}
