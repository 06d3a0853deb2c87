//! sokol_gl: OpenGL 1.x style immediate-mode drawing on top of sokol_gfx.
//!
//! Most calls record into the *current context*, a process-wide selection
//! changed with [`set_context`]. Nothing here synchronizes access to it; all
//! recording must happen on one thread. The `context_*` variants take the
//! context explicitly.

use std::ffi::c_void;

use bytemuck::{Pod, Zeroable};

use crate::abi::{impl_handle, zeroed_default};
use crate::logging::{LogFn, impl_bridged_logger};
use crate::gfx;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    MakePipelineFailed,
    PipelinePoolExhausted,
    AddCommitListenerFailed,
    ContextPoolExhausted,
    CannotDestroyDefaultContext,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Logger {
    pub func: Option<LogFn>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pipeline {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Context {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ErrorState {
    pub any: bool,
    pub vertices_full: bool,
    pub uniforms_full: bool,
    pub commands_full: bool,
    pub stack_overflow: bool,
    pub stack_underflow: bool,
    pub no_context: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ContextDesc {
    pub max_vertices: i32,
    pub max_commands: i32,
    pub color_format: gfx::PixelFormat,
    pub depth_format: gfx::PixelFormat,
    pub sample_count: i32,
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
    pub max_vertices: i32,
    pub max_commands: i32,
    pub context_pool_size: i32,
    pub pipeline_pool_size: i32,
    pub color_format: gfx::PixelFormat,
    pub depth_format: gfx::PixelFormat,
    pub sample_count: i32,
    pub face_winding: gfx::FaceWinding,
    pub allocator: Allocator,
    pub logger: Logger,
}

impl_handle!(Pipeline, Context);
zeroed_default!(Logger, ErrorState, ContextDesc, Allocator, Desc);

impl_bridged_logger!(Logger);

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::sgl_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::sgl_shutdown() }
}

pub fn as_radians(deg: f32) -> f32 {
    unsafe { ffi::sgl_rad(deg) }
}

pub fn as_degrees(rad: f32) -> f32 {
    unsafe { ffi::sgl_deg(rad) }
}

crate::dispatch::aggregate! {
    pub fn get_error() -> ErrorState => sgl_error / sgl_error_internal;
    pub fn context_error(ctx: Context) -> ErrorState
        => sgl_context_error / sgl_context_error_internal;
    pub fn make_context(desc: &ContextDesc) -> Context
        => sgl_make_context / sgl_make_context_internal;
}

pub fn destroy_context(ctx: Context) {
    unsafe { ffi::sgl_destroy_context(ctx) }
}

/// Select the context later calls record into.
///
/// The selection is global native state and outlives any Rust value.
pub fn set_context(ctx: Context) {
    unsafe { ffi::sgl_set_context(ctx) }
}

crate::dispatch::aggregate! {
    pub fn get_context() -> Context => sgl_get_context / sgl_get_context_internal;
    pub fn default_context() -> Context => sgl_default_context / sgl_default_context_internal;
}

pub fn num_vertices() -> i32 {
    unsafe { ffi::sgl_num_vertices() }
}

pub fn num_commands() -> i32 {
    unsafe { ffi::sgl_num_commands() }
}

pub fn draw() {
    unsafe { ffi::sgl_draw() }
}

pub fn context_draw(ctx: Context) {
    unsafe { ffi::sgl_context_draw(ctx) }
}

pub fn draw_layer(layer_id: i32) {
    unsafe { ffi::sgl_draw_layer(layer_id) }
}

pub fn context_draw_layer(ctx: Context, layer_id: i32) {
    unsafe { ffi::sgl_context_draw_layer(ctx, layer_id) }
}

crate::dispatch::handle! {
    pub fn make_pipeline(desc: &gfx::PipelineDesc) -> Pipeline
        => sgl_make_pipeline / sgl_make_pipeline_id;
}

crate::dispatch::aggregate! {
    pub fn context_make_pipeline(ctx: Context, desc: &gfx::PipelineDesc) -> Pipeline
        => sgl_context_make_pipeline / sgl_context_make_pipeline_internal;
}

pub fn destroy_pipeline(pip: Pipeline) {
    unsafe { ffi::sgl_destroy_pipeline(pip) }
}

pub fn defaults() {
    unsafe { ffi::sgl_defaults() }
}

pub fn viewport(x: i32, y: i32, w: i32, h: i32, origin_top_left: bool) {
    unsafe { ffi::sgl_viewport(x, y, w, h, origin_top_left) }
}

pub fn viewportf(x: f32, y: f32, w: f32, h: f32, origin_top_left: bool) {
    unsafe { ffi::sgl_viewportf(x, y, w, h, origin_top_left) }
}

pub fn scissor_rect(x: i32, y: i32, w: i32, h: i32, origin_top_left: bool) {
    unsafe { ffi::sgl_scissor_rect(x, y, w, h, origin_top_left) }
}

pub fn scissor_rectf(x: f32, y: f32, w: f32, h: f32, origin_top_left: bool) {
    unsafe { ffi::sgl_scissor_rectf(x, y, w, h, origin_top_left) }
}

pub fn enable_texture() {
    unsafe { ffi::sgl_enable_texture() }
}

pub fn disable_texture() {
    unsafe { ffi::sgl_disable_texture() }
}

pub fn texture(tex_view: gfx::View, smp: gfx::Sampler) {
    unsafe { ffi::sgl_texture(tex_view, smp) }
}

pub fn layer(layer_id: i32) {
    unsafe { ffi::sgl_layer(layer_id) }
}

pub fn load_default_pipeline() {
    unsafe { ffi::sgl_load_default_pipeline() }
}

pub fn load_pipeline(pip: Pipeline) {
    unsafe { ffi::sgl_load_pipeline(pip) }
}

pub fn push_pipeline() {
    unsafe { ffi::sgl_push_pipeline() }
}

pub fn pop_pipeline() {
    unsafe { ffi::sgl_pop_pipeline() }
}

pub fn matrix_mode_modelview() {
    unsafe { ffi::sgl_matrix_mode_modelview() }
}

pub fn matrix_mode_projection() {
    unsafe { ffi::sgl_matrix_mode_projection() }
}

pub fn matrix_mode_texture() {
    unsafe { ffi::sgl_matrix_mode_texture() }
}

pub fn load_identity() {
    unsafe { ffi::sgl_load_identity() }
}

pub fn load_matrix(m: &[f32; 16]) {
    unsafe { ffi::sgl_load_matrix(m) }
}

pub fn load_transpose_matrix(m: &[f32; 16]) {
    unsafe { ffi::sgl_load_transpose_matrix(m) }
}

pub fn mult_matrix(m: &[f32; 16]) {
    unsafe { ffi::sgl_mult_matrix(m) }
}

pub fn mult_transpose_matrix(m: &[f32; 16]) {
    unsafe { ffi::sgl_mult_transpose_matrix(m) }
}

pub fn rotate(angle_rad: f32, x: f32, y: f32, z: f32) {
    unsafe { ffi::sgl_rotate(angle_rad, x, y, z) }
}

pub fn scale(x: f32, y: f32, z: f32) {
    unsafe { ffi::sgl_scale(x, y, z) }
}

pub fn translate(x: f32, y: f32, z: f32) {
    unsafe { ffi::sgl_translate(x, y, z) }
}

pub fn frustum(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) {
    unsafe { ffi::sgl_frustum(l, r, b, t, n, f) }
}

pub fn ortho(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) {
    unsafe { ffi::sgl_ortho(l, r, b, t, n, f) }
}

pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) {
    unsafe { ffi::sgl_perspective(fov_y, aspect, z_near, z_far) }
}

pub fn lookat(
    eye_x: f32,
    eye_y: f32,
    eye_z: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    up_x: f32,
    up_y: f32,
    up_z: f32,
) {
    unsafe { ffi::sgl_lookat(eye_x, eye_y, eye_z, center_x, center_y, center_z, up_x, up_y, up_z) }
}

pub fn push_matrix() {
    unsafe { ffi::sgl_push_matrix() }
}

pub fn pop_matrix() {
    unsafe { ffi::sgl_pop_matrix() }
}

pub fn t2f(u: f32, v: f32) {
    unsafe { ffi::sgl_t2f(u, v) }
}

pub fn c3f(r: f32, g: f32, b: f32) {
    unsafe { ffi::sgl_c3f(r, g, b) }
}

pub fn c4f(r: f32, g: f32, b: f32, a: f32) {
    unsafe { ffi::sgl_c4f(r, g, b, a) }
}

pub fn c3b(r: u8, g: u8, b: u8) {
    unsafe { ffi::sgl_c3b(r, g, b) }
}

pub fn c4b(r: u8, g: u8, b: u8, a: u8) {
    unsafe { ffi::sgl_c4b(r, g, b, a) }
}

pub fn c1i(rgba: u32) {
    unsafe { ffi::sgl_c1i(rgba) }
}

pub fn point_size(s: f32) {
    unsafe { ffi::sgl_point_size(s) }
}

pub fn begin_points() {
    unsafe { ffi::sgl_begin_points() }
}

pub fn begin_lines() {
    unsafe { ffi::sgl_begin_lines() }
}

pub fn begin_line_strip() {
    unsafe { ffi::sgl_begin_line_strip() }
}

pub fn begin_triangles() {
    unsafe { ffi::sgl_begin_triangles() }
}

pub fn begin_triangle_strip() {
    unsafe { ffi::sgl_begin_triangle_strip() }
}

pub fn begin_quads() {
    unsafe { ffi::sgl_begin_quads() }
}

pub fn v2f(x: f32, y: f32) {
    unsafe { ffi::sgl_v2f(x, y) }
}

pub fn v3f(x: f32, y: f32, z: f32) {
    unsafe { ffi::sgl_v3f(x, y, z) }
}

pub fn v2f_t2f(x: f32, y: f32, u: f32, v: f32) {
    unsafe { ffi::sgl_v2f_t2f(x, y, u, v) }
}

pub fn v3f_t2f(x: f32, y: f32, z: f32, u: f32, v: f32) {
    unsafe { ffi::sgl_v3f_t2f(x, y, z, u, v) }
}

pub fn v2f_c3f(x: f32, y: f32, r: f32, g: f32, b: f32) {
    unsafe { ffi::sgl_v2f_c3f(x, y, r, g, b) }
}

pub fn v2f_c3b(x: f32, y: f32, r: u8, g: u8, b: u8) {
    unsafe { ffi::sgl_v2f_c3b(x, y, r, g, b) }
}

pub fn v2f_c4f(x: f32, y: f32, r: f32, g: f32, b: f32, a: f32) {
    unsafe { ffi::sgl_v2f_c4f(x, y, r, g, b, a) }
}

pub fn v2f_c4b(x: f32, y: f32, r: u8, g: u8, b: u8, a: u8) {
    unsafe { ffi::sgl_v2f_c4b(x, y, r, g, b, a) }
}

pub fn v2f_c1i(x: f32, y: f32, rgba: u32) {
    unsafe { ffi::sgl_v2f_c1i(x, y, rgba) }
}

pub fn v3f_c3f(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) {
    unsafe { ffi::sgl_v3f_c3f(x, y, z, r, g, b) }
}

pub fn v3f_c3b(x: f32, y: f32, z: f32, r: u8, g: u8, b: u8) {
    unsafe { ffi::sgl_v3f_c3b(x, y, z, r, g, b) }
}

pub fn v3f_c4f(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32, a: f32) {
    unsafe { ffi::sgl_v3f_c4f(x, y, z, r, g, b, a) }
}

pub fn v3f_c4b(x: f32, y: f32, z: f32, r: u8, g: u8, b: u8, a: u8) {
    unsafe { ffi::sgl_v3f_c4b(x, y, z, r, g, b, a) }
}

pub fn v3f_c1i(x: f32, y: f32, z: f32, rgba: u32) {
    unsafe { ffi::sgl_v3f_c1i(x, y, z, rgba) }
}

pub fn v2f_t2f_c3f(x: f32, y: f32, u: f32, v: f32, r: f32, g: f32, b: f32) {
    unsafe { ffi::sgl_v2f_t2f_c3f(x, y, u, v, r, g, b) }
}

pub fn v2f_t2f_c3b(x: f32, y: f32, u: f32, v: f32, r: u8, g: u8, b: u8) {
    unsafe { ffi::sgl_v2f_t2f_c3b(x, y, u, v, r, g, b) }
}

pub fn v2f_t2f_c4f(x: f32, y: f32, u: f32, v: f32, r: f32, g: f32, b: f32, a: f32) {
    unsafe { ffi::sgl_v2f_t2f_c4f(x, y, u, v, r, g, b, a) }
}

pub fn v2f_t2f_c4b(x: f32, y: f32, u: f32, v: f32, r: u8, g: u8, b: u8, a: u8) {
    unsafe { ffi::sgl_v2f_t2f_c4b(x, y, u, v, r, g, b, a) }
}

pub fn v2f_t2f_c1i(x: f32, y: f32, u: f32, v: f32, rgba: u32) {
    unsafe { ffi::sgl_v2f_t2f_c1i(x, y, u, v, rgba) }
}

pub fn v3f_t2f_c3f(x: f32, y: f32, z: f32, u: f32, v: f32, r: f32, g: f32, b: f32) {
    unsafe { ffi::sgl_v3f_t2f_c3f(x, y, z, u, v, r, g, b) }
}

pub fn v3f_t2f_c3b(x: f32, y: f32, z: f32, u: f32, v: f32, r: u8, g: u8, b: u8) {
    unsafe { ffi::sgl_v3f_t2f_c3b(x, y, z, u, v, r, g, b) }
}

pub fn v3f_t2f_c4f(x: f32, y: f32, z: f32, u: f32, v: f32, r: f32, g: f32, b: f32, a: f32) {
    unsafe { ffi::sgl_v3f_t2f_c4f(x, y, z, u, v, r, g, b, a) }
}

pub fn v3f_t2f_c4b(x: f32, y: f32, z: f32, u: f32, v: f32, r: u8, g: u8, b: u8, a: u8) {
    unsafe { ffi::sgl_v3f_t2f_c4b(x, y, z, u, v, r, g, b, a) }
}

pub fn v3f_t2f_c1i(x: f32, y: f32, z: f32, u: f32, v: f32, rgba: u32) {
    unsafe { ffi::sgl_v3f_t2f_c1i(x, y, z, u, v, rgba) }
}

pub fn end() {
    unsafe { ffi::sgl_end() }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn sgl_setup(desc: *const Desc);
        pub fn sgl_shutdown();
        pub fn sgl_rad(deg: f32) -> f32;
        pub fn sgl_deg(rad: f32) -> f32;
        #[cfg(not(feature = "web"))]
        pub fn sgl_error() -> ErrorState;
        #[cfg(feature = "web")]
        pub fn sgl_error_internal(result: *mut ErrorState);
        #[cfg(not(feature = "web"))]
        pub fn sgl_context_error(ctx: Context) -> ErrorState;
        #[cfg(feature = "web")]
        pub fn sgl_context_error_internal(result: *mut ErrorState, ctx: Context);
        #[cfg(not(feature = "web"))]
        pub fn sgl_make_context(desc: *const ContextDesc) -> Context;
        #[cfg(feature = "web")]
        pub fn sgl_make_context_internal(result: *mut Context, desc: *const ContextDesc);
        pub fn sgl_destroy_context(ctx: Context);
        pub fn sgl_set_context(ctx: Context);
        #[cfg(not(feature = "web"))]
        pub fn sgl_get_context() -> Context;
        #[cfg(feature = "web")]
        pub fn sgl_get_context_internal(result: *mut Context);
        #[cfg(not(feature = "web"))]
        pub fn sgl_default_context() -> Context;
        #[cfg(feature = "web")]
        pub fn sgl_default_context_internal(result: *mut Context);
        pub fn sgl_num_vertices() -> i32;
        pub fn sgl_num_commands() -> i32;
        pub fn sgl_draw();
        pub fn sgl_context_draw(ctx: Context);
        pub fn sgl_draw_layer(layer_id: i32);
        pub fn sgl_context_draw_layer(ctx: Context, layer_id: i32);
        #[cfg(not(feature = "web"))]
        pub fn sgl_make_pipeline(desc: *const gfx::PipelineDesc) -> Pipeline;
        #[cfg(feature = "web")]
        #[link_name = "sgl_make_pipeline"]
        pub fn sgl_make_pipeline_id(desc: *const gfx::PipelineDesc) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sgl_context_make_pipeline(ctx: Context, desc: *const gfx::PipelineDesc) -> Pipeline;
        #[cfg(feature = "web")]
        pub fn sgl_context_make_pipeline_internal(
            result: *mut Pipeline,
            ctx: Context,
            desc: *const gfx::PipelineDesc,
        );
        pub fn sgl_destroy_pipeline(pip: Pipeline);
        pub fn sgl_defaults();
        pub fn sgl_viewport(x: i32, y: i32, w: i32, h: i32, origin_top_left: bool);
        pub fn sgl_viewportf(x: f32, y: f32, w: f32, h: f32, origin_top_left: bool);
        pub fn sgl_scissor_rect(x: i32, y: i32, w: i32, h: i32, origin_top_left: bool);
        pub fn sgl_scissor_rectf(x: f32, y: f32, w: f32, h: f32, origin_top_left: bool);
        pub fn sgl_enable_texture();
        pub fn sgl_disable_texture();
        pub fn sgl_texture(tex_view: gfx::View, smp: gfx::Sampler);
        pub fn sgl_layer(layer_id: i32);
        pub fn sgl_load_default_pipeline();
        pub fn sgl_load_pipeline(pip: Pipeline);
        pub fn sgl_push_pipeline();
        pub fn sgl_pop_pipeline();
        pub fn sgl_matrix_mode_modelview();
        pub fn sgl_matrix_mode_projection();
        pub fn sgl_matrix_mode_texture();
        pub fn sgl_load_identity();
        pub fn sgl_load_matrix(m: *const [f32; 16]);
        pub fn sgl_load_transpose_matrix(m: *const [f32; 16]);
        pub fn sgl_mult_matrix(m: *const [f32; 16]);
        pub fn sgl_mult_transpose_matrix(m: *const [f32; 16]);
        pub fn sgl_rotate(angle_rad: f32, x: f32, y: f32, z: f32);
        pub fn sgl_scale(x: f32, y: f32, z: f32);
        pub fn sgl_translate(x: f32, y: f32, z: f32);
        pub fn sgl_frustum(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32);
        pub fn sgl_ortho(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32);
        pub fn sgl_perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32);
        pub fn sgl_lookat(
            eye_x: f32,
            eye_y: f32,
            eye_z: f32,
            center_x: f32,
            center_y: f32,
            center_z: f32,
            up_x: f32,
            up_y: f32,
            up_z: f32,
        );
        pub fn sgl_push_matrix();
        pub fn sgl_pop_matrix();
        pub fn sgl_t2f(u: f32, v: f32);
        pub fn sgl_c3f(r: f32, g: f32, b: f32);
        pub fn sgl_c4f(r: f32, g: f32, b: f32, a: f32);
        pub fn sgl_c3b(r: u8, g: u8, b: u8);
        pub fn sgl_c4b(r: u8, g: u8, b: u8, a: u8);
        pub fn sgl_c1i(rgba: u32);
        pub fn sgl_point_size(s: f32);
        pub fn sgl_begin_points();
        pub fn sgl_begin_lines();
        pub fn sgl_begin_line_strip();
        pub fn sgl_begin_triangles();
        pub fn sgl_begin_triangle_strip();
        pub fn sgl_begin_quads();
        pub fn sgl_v2f(x: f32, y: f32);
        pub fn sgl_v3f(x: f32, y: f32, z: f32);
        pub fn sgl_v2f_t2f(x: f32, y: f32, u: f32, v: f32);
        pub fn sgl_v3f_t2f(x: f32, y: f32, z: f32, u: f32, v: f32);
        pub fn sgl_v2f_c3f(x: f32, y: f32, r: f32, g: f32, b: f32);
        pub fn sgl_v2f_c3b(x: f32, y: f32, r: u8, g: u8, b: u8);
        pub fn sgl_v2f_c4f(x: f32, y: f32, r: f32, g: f32, b: f32, a: f32);
        pub fn sgl_v2f_c4b(x: f32, y: f32, r: u8, g: u8, b: u8, a: u8);
        pub fn sgl_v2f_c1i(x: f32, y: f32, rgba: u32);
        pub fn sgl_v3f_c3f(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32);
        pub fn sgl_v3f_c3b(x: f32, y: f32, z: f32, r: u8, g: u8, b: u8);
        pub fn sgl_v3f_c4f(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32, a: f32);
        pub fn sgl_v3f_c4b(x: f32, y: f32, z: f32, r: u8, g: u8, b: u8, a: u8);
        pub fn sgl_v3f_c1i(x: f32, y: f32, z: f32, rgba: u32);
        pub fn sgl_v2f_t2f_c3f(x: f32, y: f32, u: f32, v: f32, r: f32, g: f32, b: f32);
        pub fn sgl_v2f_t2f_c3b(x: f32, y: f32, u: f32, v: f32, r: u8, g: u8, b: u8);
        pub fn sgl_v2f_t2f_c4f(x: f32, y: f32, u: f32, v: f32, r: f32, g: f32, b: f32, a: f32);
        pub fn sgl_v2f_t2f_c4b(x: f32, y: f32, u: f32, v: f32, r: u8, g: u8, b: u8, a: u8);
        pub fn sgl_v2f_t2f_c1i(x: f32, y: f32, u: f32, v: f32, rgba: u32);
        pub fn sgl_v3f_t2f_c3f(x: f32, y: f32, z: f32, u: f32, v: f32, r: f32, g: f32, b: f32);
        pub fn sgl_v3f_t2f_c3b(x: f32, y: f32, z: f32, u: f32, v: f32, r: u8, g: u8, b: u8);
        pub fn sgl_v3f_t2f_c4f(
            x: f32,
            y: f32,
            z: f32,
            u: f32,
            v: f32,
            r: f32,
            g: f32,
            b: f32,
            a: f32,
        );
        pub fn sgl_v3f_t2f_c4b(x: f32, y: f32, z: f32, u: f32, v: f32, r: u8, g: u8, b: u8, a: u8);
        pub fn sgl_v3f_t2f_c1i(x: f32, y: f32, z: f32, u: f32, v: f32, rgba: u32);
        pub fn sgl_end();
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn error_state_is_seven_flags() {
        assert_eq!(size_of::<ErrorState>(), 7);
        assert_eq!(offset_of!(ErrorState, no_context), 6);

        let mut err = ErrorState::default();
        err.any = true;
        err.stack_overflow = true;
        let raw: [u8; 7] = unsafe { std::mem::transmute(err) };
        assert_eq!(raw, [1, 0, 0, 0, 1, 0, 0]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn desc_layout() {
        assert_eq!(size_of::<ContextDesc>(), 20);
        assert_eq!(offset_of!(Desc, face_winding), 28);
        assert_eq!(offset_of!(Desc, allocator), 32);
        assert_eq!(offset_of!(Desc, logger), 56);
        assert_eq!(size_of::<Desc>(), 72);
    }

    #[test]
    fn context_handles_compare_by_id() {
        assert_eq!(Context { id: 0x0001_0001 }, Context { id: 0x0001_0001 });
        assert_ne!(Context::default(), Context { id: 1 });
    }
}
