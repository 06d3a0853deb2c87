//! sokol_spine: Spine 2D skeletal animation rendered through sokol_gfx.
//!
//! Resources (contexts, atlases, skeletons, skinsets, instances) are pooled
//! handles. Sub-objects such as bones and animations are addressed by an
//! index pair (owner id, index) and are valid while their owner is.
//!
//! Names come back as fixed-size [`InlineString`]s inside the info structs.

use std::ffi::{c_char, c_void};

use bytemuck::{Pod, Zeroable};

use crate::abi::{impl_handle, impl_range, zeroed_default};
use crate::gfx;
use crate::logging::{LogFn, impl_bridged_logger};
use crate::text::CStrArg;

pub const INVALID_ID: u32 = 0;
pub const MAX_SKINSET_SKINS: usize = 32;
pub const MAX_STRING_SIZE: usize = 61;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResourceState {
    #[default]
    Initial,
    Alloc,
    Valid,
    Failed,
    Invalid,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    ContextPoolExhausted,
    AtlasPoolExhausted,
    SkeletonPoolExhausted,
    SkinsetPoolExhausted,
    InstancePoolExhausted,
    CannotDestroyDefaultContext,
    AtlasDescNoData,
    SpineAtlasCreationFailed,
    SgAllocImageFailed,
    SgAllocViewFailed,
    SgAllocSamplerFailed,
    SkeletonDescNoData,
    SkeletonDescNoAtlas,
    SkeletonAtlasNotValid,
    CreateSkeletonDataFromJsonFailed,
    CreateSkeletonDataFromBinaryFailed,
    SkinsetDescNoSkeleton,
    SkinsetSkeletonNotValid,
    SkinsetInvalidSkinHandle,
    InstanceDescNoSkeleton,
    InstanceSkeletonNotValid,
    InstanceAtlasNotValid,
    SpineSkeletonCreationFailed,
    SpineAnimationstateCreationFailed,
    SpineSkeletonclippingCreationFailed,
    CommandBufferFull,
    VertexBufferFull,
    IndexBufferFull,
    StringTruncated,
    AddCommitListenerFailed,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Context {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Atlas {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Skeleton {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Instance {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Skinset {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Image {
    pub atlas_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct AtlasPage {
    pub atlas_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Anim {
    pub skeleton_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Bone {
    pub skeleton_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Slot {
    pub skeleton_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Event {
    pub skeleton_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Iktarget {
    pub skeleton_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Skin {
    pub skeleton_id: u32,
    pub index: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Range {
    pub ptr: *const c_void,
    pub size: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [f32; 16],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct InlineString {
    pub valid: bool,
    pub truncated: bool,
    pub len: u8,
    pub cstr: [u8; MAX_STRING_SIZE],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LayerTransform {
    pub size: Vec2,
    pub origin: Vec2,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BoneTransform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub shear: Vec2,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ContextDesc {
    pub max_vertices: i32,
    pub max_commands: i32,
    pub color_format: gfx::PixelFormat,
    pub depth_format: gfx::PixelFormat,
    pub sample_count: i32,
    pub color_write_mask: gfx::ColorMask,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ContextInfo {
    pub num_vertices: i32,
    pub num_indices: i32,
    pub num_commands: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageInfo {
    pub valid: bool,
    pub sgimage: gfx::Image,
    pub sgview: gfx::View,
    pub sgsampler: gfx::Sampler,
    pub min_filter: gfx::Filter,
    pub mag_filter: gfx::Filter,
    pub mipmap_filter: gfx::Filter,
    pub wrap_u: gfx::Wrap,
    pub wrap_v: gfx::Wrap,
    pub width: i32,
    pub height: i32,
    pub premul_alpha: bool,
    pub filename: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AtlasOverrides {
    pub min_filter: gfx::Filter,
    pub mag_filter: gfx::Filter,
    pub mipmap_filter: gfx::Filter,
    pub wrap_u: gfx::Wrap,
    pub wrap_v: gfx::Wrap,
    pub premul_alpha_enabled: bool,
    pub premul_alpha_disabled: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AtlasDesc {
    pub data: Range,
    pub r#override: AtlasOverrides,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AtlasPageInfo {
    pub valid: bool,
    pub atlas: Atlas,
    pub image: ImageInfo,
    pub overrides: AtlasOverrides,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SkeletonDesc {
    pub atlas: Atlas,
    pub prescale: f32,
    pub anim_default_mix: f32,
    pub json_data: *const c_char,
    pub binary_data: Range,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SkinsetDesc {
    pub skeleton: Skeleton,
    pub skins: [Skin; MAX_SKINSET_SKINS],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AnimInfo {
    pub valid: bool,
    pub index: i32,
    pub duration: f32,
    pub name: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BoneInfo {
    pub valid: bool,
    pub index: i32,
    pub parent_bone: Bone,
    pub length: f32,
    pub pose: BoneTransform,
    pub color: gfx::Color,
    pub name: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SlotInfo {
    pub valid: bool,
    pub index: i32,
    pub bone: Bone,
    pub color: gfx::Color,
    pub attachment_name: InlineString,
    pub name: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct IktargetInfo {
    pub valid: bool,
    pub index: i32,
    pub target_bone: Bone,
    pub name: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SkinInfo {
    pub valid: bool,
    pub index: i32,
    pub name: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct EventInfo {
    pub valid: bool,
    pub index: i32,
    pub int_value: i32,
    pub float_value: f32,
    pub volume: f32,
    pub balance: f32,
    pub name: InlineString,
    pub string_value: InlineString,
    pub audio_path: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct TriggeredEventInfo {
    pub valid: bool,
    pub event: Event,
    pub time: f32,
    pub int_value: i32,
    pub float_value: f32,
    pub volume: f32,
    pub balance: f32,
    pub string_value: InlineString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct InstanceDesc {
    pub skeleton: Skeleton,
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
pub struct Logger {
    pub func: Option<LogFn>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Desc {
    pub max_vertices: i32,
    pub max_commands: i32,
    pub context_pool_size: i32,
    pub atlas_pool_size: i32,
    pub skeleton_pool_size: i32,
    pub skinset_pool_size: i32,
    pub instance_pool_size: i32,
    pub color_format: gfx::PixelFormat,
    pub depth_format: gfx::PixelFormat,
    pub sample_count: i32,
    pub color_write_mask: gfx::ColorMask,
    pub allocator: Allocator,
    pub logger: Logger,
}

impl_handle!(Context, Atlas, Skeleton, Instance, Skinset);
zeroed_default!(
    Range, InlineString, ContextDesc, ImageInfo, AtlasOverrides, AtlasDesc, AtlasPageInfo,
    SkeletonDesc, SkinsetDesc, AnimInfo, BoneInfo, SlotInfo, IktargetInfo, SkinInfo, EventInfo,
    TriggeredEventInfo, InstanceDesc, Allocator, Logger, Desc,
);

impl_range!(Range);
impl_bridged_logger!(Logger);

impl InlineString {
    /// The stored text, up to `len` bytes.
    ///
    /// Returns `""` when `valid` is false, even if `len` and `cstr` hold
    /// leftover bytes: sokol_spine sets `valid` only for strings it filled
    /// in, so anything else is not a name. Truncated names end at the last
    /// whole character that fit.
    pub fn as_str(&self) -> &str {
        if !self.valid {
            return "";
        }
        let len = usize::from(self.len).min(self.cstr.len());
        let bytes = &self.cstr[..len];
        match std::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::sspine_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::sspine_shutdown() }
}

pub fn make_context(desc: &ContextDesc) -> Context {
    unsafe { ffi::sspine_make_context(desc) }
}

pub fn destroy_context(ctx: Context) {
    unsafe { ffi::sspine_destroy_context(ctx) }
}

pub fn set_context(ctx: Context) {
    unsafe { ffi::sspine_set_context(ctx) }
}

pub fn get_context() -> Context {
    unsafe { ffi::sspine_get_context() }
}

pub fn default_context() -> Context {
    unsafe { ffi::sspine_default_context() }
}

pub fn get_context_info(ctx: Context) -> ContextInfo {
    unsafe { ffi::sspine_get_context_info(ctx) }
}

pub fn make_atlas(desc: &AtlasDesc) -> Atlas {
    unsafe { ffi::sspine_make_atlas(desc) }
}

pub fn make_skeleton(desc: &SkeletonDesc) -> Skeleton {
    unsafe { ffi::sspine_make_skeleton(desc) }
}

pub fn make_skinset(desc: &SkinsetDesc) -> Skinset {
    unsafe { ffi::sspine_make_skinset(desc) }
}

pub fn make_instance(desc: &InstanceDesc) -> Instance {
    unsafe { ffi::sspine_make_instance(desc) }
}

pub fn destroy_atlas(atlas: Atlas) {
    unsafe { ffi::sspine_destroy_atlas(atlas) }
}

pub fn destroy_skeleton(skeleton: Skeleton) {
    unsafe { ffi::sspine_destroy_skeleton(skeleton) }
}

pub fn destroy_skinset(skinset: Skinset) {
    unsafe { ffi::sspine_destroy_skinset(skinset) }
}

pub fn destroy_instance(instance: Instance) {
    unsafe { ffi::sspine_destroy_instance(instance) }
}

pub fn set_skinset(instance: Instance, skinset: Skinset) {
    unsafe { ffi::sspine_set_skinset(instance, skinset) }
}

pub fn update_instance(instance: Instance, delta_time: f32) {
    unsafe { ffi::sspine_update_instance(instance, delta_time) }
}

pub fn num_triggered_events(instance: Instance) -> i32 {
    unsafe { ffi::sspine_num_triggered_events(instance) }
}

pub fn get_triggered_event_info(
    instance: Instance,
    triggered_event_index: i32,
) -> TriggeredEventInfo {
    unsafe { ffi::sspine_get_triggered_event_info(instance, triggered_event_index) }
}

pub fn draw_instance_in_layer(instance: Instance, layer: i32) {
    unsafe { ffi::sspine_draw_instance_in_layer(instance, layer) }
}

pub fn context_draw_instance_in_layer(ctx: Context, instance: Instance, layer: i32) {
    unsafe { ffi::sspine_context_draw_instance_in_layer(ctx, instance, layer) }
}

pub fn layer_transform_to_mat4(tform: &LayerTransform) -> Mat4 {
    unsafe { ffi::sspine_layer_transform_to_mat4(tform) }
}

pub fn draw_layer(layer: i32, tform: &LayerTransform) {
    unsafe { ffi::sspine_draw_layer(layer, tform) }
}

pub fn context_draw_layer(ctx: Context, layer: i32, tform: &LayerTransform) {
    unsafe { ffi::sspine_context_draw_layer(ctx, layer, tform) }
}

pub fn get_context_resource_state(context: Context) -> ResourceState {
    unsafe { ffi::sspine_get_context_resource_state(context) }
}

pub fn get_atlas_resource_state(atlas: Atlas) -> ResourceState {
    unsafe { ffi::sspine_get_atlas_resource_state(atlas) }
}

pub fn get_skeleton_resource_state(skeleton: Skeleton) -> ResourceState {
    unsafe { ffi::sspine_get_skeleton_resource_state(skeleton) }
}

pub fn get_skinset_resource_state(skinset: Skinset) -> ResourceState {
    unsafe { ffi::sspine_get_skinset_resource_state(skinset) }
}

pub fn get_instance_resource_state(instance: Instance) -> ResourceState {
    unsafe { ffi::sspine_get_instance_resource_state(instance) }
}

pub fn context_valid(context: Context) -> bool {
    unsafe { ffi::sspine_context_valid(context) }
}

pub fn atlas_valid(atlas: Atlas) -> bool {
    unsafe { ffi::sspine_atlas_valid(atlas) }
}

pub fn skeleton_valid(skeleton: Skeleton) -> bool {
    unsafe { ffi::sspine_skeleton_valid(skeleton) }
}

pub fn instance_valid(instance: Instance) -> bool {
    unsafe { ffi::sspine_instance_valid(instance) }
}

pub fn skinset_valid(skinset: Skinset) -> bool {
    unsafe { ffi::sspine_skinset_valid(skinset) }
}

pub fn get_skeleton_atlas(skeleton: Skeleton) -> Atlas {
    unsafe { ffi::sspine_get_skeleton_atlas(skeleton) }
}

pub fn get_instance_skeleton(instance: Instance) -> Skeleton {
    unsafe { ffi::sspine_get_instance_skeleton(instance) }
}

pub fn num_images(atlas: Atlas) -> i32 {
    unsafe { ffi::sspine_num_images(atlas) }
}

pub fn image_by_index(atlas: Atlas, index: i32) -> Image {
    unsafe { ffi::sspine_image_by_index(atlas, index) }
}

pub fn image_valid(image: Image) -> bool {
    unsafe { ffi::sspine_image_valid(image) }
}

pub fn image_equal(first: Image, second: Image) -> bool {
    unsafe { ffi::sspine_image_equal(first, second) }
}

pub fn get_image_info(image: Image) -> ImageInfo {
    unsafe { ffi::sspine_get_image_info(image) }
}

pub fn num_atlas_pages(atlas: Atlas) -> i32 {
    unsafe { ffi::sspine_num_atlas_pages(atlas) }
}

pub fn atlas_page_by_index(atlas: Atlas, index: i32) -> AtlasPage {
    unsafe { ffi::sspine_atlas_page_by_index(atlas, index) }
}

pub fn atlas_page_valid(page: AtlasPage) -> bool {
    unsafe { ffi::sspine_atlas_page_valid(page) }
}

pub fn atlas_page_equal(first: AtlasPage, second: AtlasPage) -> bool {
    unsafe { ffi::sspine_atlas_page_equal(first, second) }
}

pub fn get_atlas_page_info(page: AtlasPage) -> AtlasPageInfo {
    unsafe { ffi::sspine_get_atlas_page_info(page) }
}

pub fn set_position(instance: Instance, position: Vec2) {
    unsafe { ffi::sspine_set_position(instance, position) }
}

pub fn set_scale(instance: Instance, scale: Vec2) {
    unsafe { ffi::sspine_set_scale(instance, scale) }
}

pub fn set_color(instance: Instance, color: gfx::Color) {
    unsafe { ffi::sspine_set_color(instance, color) }
}

pub fn get_position(instance: Instance) -> Vec2 {
    unsafe { ffi::sspine_get_position(instance) }
}

pub fn get_scale(instance: Instance) -> Vec2 {
    unsafe { ffi::sspine_get_scale(instance) }
}

pub fn get_color(instance: Instance) -> gfx::Color {
    unsafe { ffi::sspine_get_color(instance) }
}

pub fn num_anims(skeleton: Skeleton) -> i32 {
    unsafe { ffi::sspine_num_anims(skeleton) }
}

pub fn anim_by_name(skeleton: Skeleton, name: &str) -> Anim {
    let name = CStrArg::new(name);
    unsafe { ffi::sspine_anim_by_name(skeleton, name.as_ptr()) }
}

pub fn anim_by_index(skeleton: Skeleton, index: i32) -> Anim {
    unsafe { ffi::sspine_anim_by_index(skeleton, index) }
}

pub fn anim_valid(anim: Anim) -> bool {
    unsafe { ffi::sspine_anim_valid(anim) }
}

pub fn anim_equal(first: Anim, second: Anim) -> bool {
    unsafe { ffi::sspine_anim_equal(first, second) }
}

pub fn get_anim_info(anim: Anim) -> AnimInfo {
    unsafe { ffi::sspine_get_anim_info(anim) }
}

pub fn clear_animation_tracks(instance: Instance) {
    unsafe { ffi::sspine_clear_animation_tracks(instance) }
}

pub fn clear_animation_track(instance: Instance, track_index: i32) {
    unsafe { ffi::sspine_clear_animation_track(instance, track_index) }
}

pub fn set_animation(instance: Instance, anim: Anim, track_index: i32, r#loop: bool) {
    unsafe { ffi::sspine_set_animation(instance, anim, track_index, r#loop) }
}

pub fn add_animation(instance: Instance, anim: Anim, track_index: i32, r#loop: bool, delay: f32) {
    unsafe { ffi::sspine_add_animation(instance, anim, track_index, r#loop, delay) }
}

pub fn set_empty_animation(instance: Instance, track_index: i32, mix_duration: f32) {
    unsafe { ffi::sspine_set_empty_animation(instance, track_index, mix_duration) }
}

pub fn add_empty_animation(instance: Instance, track_index: i32, mix_duration: f32, delay: f32) {
    unsafe { ffi::sspine_add_empty_animation(instance, track_index, mix_duration, delay) }
}

pub fn num_bones(skeleton: Skeleton) -> i32 {
    unsafe { ffi::sspine_num_bones(skeleton) }
}

pub fn bone_by_name(skeleton: Skeleton, name: &str) -> Bone {
    let name = CStrArg::new(name);
    unsafe { ffi::sspine_bone_by_name(skeleton, name.as_ptr()) }
}

pub fn bone_by_index(skeleton: Skeleton, index: i32) -> Bone {
    unsafe { ffi::sspine_bone_by_index(skeleton, index) }
}

pub fn bone_valid(bone: Bone) -> bool {
    unsafe { ffi::sspine_bone_valid(bone) }
}

pub fn bone_equal(first: Bone, second: Bone) -> bool {
    unsafe { ffi::sspine_bone_equal(first, second) }
}

pub fn get_bone_info(bone: Bone) -> BoneInfo {
    unsafe { ffi::sspine_get_bone_info(bone) }
}

pub fn set_bone_transform(instance: Instance, bone: Bone, transform: &BoneTransform) {
    unsafe { ffi::sspine_set_bone_transform(instance, bone, transform) }
}

pub fn set_bone_position(instance: Instance, bone: Bone, position: Vec2) {
    unsafe { ffi::sspine_set_bone_position(instance, bone, position) }
}

pub fn set_bone_rotation(instance: Instance, bone: Bone, rotation: f32) {
    unsafe { ffi::sspine_set_bone_rotation(instance, bone, rotation) }
}

pub fn set_bone_scale(instance: Instance, bone: Bone, scale: Vec2) {
    unsafe { ffi::sspine_set_bone_scale(instance, bone, scale) }
}

pub fn set_bone_shear(instance: Instance, bone: Bone, shear: Vec2) {
    unsafe { ffi::sspine_set_bone_shear(instance, bone, shear) }
}

pub fn get_bone_transform(instance: Instance, bone: Bone) -> BoneTransform {
    unsafe { ffi::sspine_get_bone_transform(instance, bone) }
}

pub fn get_bone_position(instance: Instance, bone: Bone) -> Vec2 {
    unsafe { ffi::sspine_get_bone_position(instance, bone) }
}

pub fn get_bone_rotation(instance: Instance, bone: Bone) -> f32 {
    unsafe { ffi::sspine_get_bone_rotation(instance, bone) }
}

pub fn get_bone_scale(instance: Instance, bone: Bone) -> Vec2 {
    unsafe { ffi::sspine_get_bone_scale(instance, bone) }
}

pub fn get_bone_shear(instance: Instance, bone: Bone) -> Vec2 {
    unsafe { ffi::sspine_get_bone_shear(instance, bone) }
}

pub fn get_bone_world_position(instance: Instance, bone: Bone) -> Vec2 {
    unsafe { ffi::sspine_get_bone_world_position(instance, bone) }
}

pub fn bone_local_to_world(instance: Instance, bone: Bone, local_pos: Vec2) -> Vec2 {
    unsafe { ffi::sspine_bone_local_to_world(instance, bone, local_pos) }
}

pub fn bone_world_to_local(instance: Instance, bone: Bone, world_pos: Vec2) -> Vec2 {
    unsafe { ffi::sspine_bone_world_to_local(instance, bone, world_pos) }
}

pub fn num_slots(skeleton: Skeleton) -> i32 {
    unsafe { ffi::sspine_num_slots(skeleton) }
}

pub fn slot_by_name(skeleton: Skeleton, name: &str) -> Slot {
    let name = CStrArg::new(name);
    unsafe { ffi::sspine_slot_by_name(skeleton, name.as_ptr()) }
}

pub fn slot_by_index(skeleton: Skeleton, index: i32) -> Slot {
    unsafe { ffi::sspine_slot_by_index(skeleton, index) }
}

pub fn slot_valid(slot: Slot) -> bool {
    unsafe { ffi::sspine_slot_valid(slot) }
}

pub fn slot_equal(first: Slot, second: Slot) -> bool {
    unsafe { ffi::sspine_slot_equal(first, second) }
}

pub fn get_slot_info(slot: Slot) -> SlotInfo {
    unsafe { ffi::sspine_get_slot_info(slot) }
}

pub fn set_slot_color(instance: Instance, slot: Slot, color: gfx::Color) {
    unsafe { ffi::sspine_set_slot_color(instance, slot, color) }
}

pub fn get_slot_color(instance: Instance, slot: Slot) -> gfx::Color {
    unsafe { ffi::sspine_get_slot_color(instance, slot) }
}

pub fn num_events(skeleton: Skeleton) -> i32 {
    unsafe { ffi::sspine_num_events(skeleton) }
}

pub fn event_by_name(skeleton: Skeleton, name: &str) -> Event {
    let name = CStrArg::new(name);
    unsafe { ffi::sspine_event_by_name(skeleton, name.as_ptr()) }
}

pub fn event_by_index(skeleton: Skeleton, index: i32) -> Event {
    unsafe { ffi::sspine_event_by_index(skeleton, index) }
}

pub fn event_valid(event: Event) -> bool {
    unsafe { ffi::sspine_event_valid(event) }
}

pub fn event_equal(first: Event, second: Event) -> bool {
    unsafe { ffi::sspine_event_equal(first, second) }
}

pub fn get_event_info(event: Event) -> EventInfo {
    unsafe { ffi::sspine_get_event_info(event) }
}

pub fn num_iktargets(skeleton: Skeleton) -> i32 {
    unsafe { ffi::sspine_num_iktargets(skeleton) }
}

pub fn iktarget_by_name(skeleton: Skeleton, name: &str) -> Iktarget {
    let name = CStrArg::new(name);
    unsafe { ffi::sspine_iktarget_by_name(skeleton, name.as_ptr()) }
}

pub fn iktarget_by_index(skeleton: Skeleton, index: i32) -> Iktarget {
    unsafe { ffi::sspine_iktarget_by_index(skeleton, index) }
}

pub fn iktarget_valid(iktarget: Iktarget) -> bool {
    unsafe { ffi::sspine_iktarget_valid(iktarget) }
}

pub fn iktarget_equal(first: Iktarget, second: Iktarget) -> bool {
    unsafe { ffi::sspine_iktarget_equal(first, second) }
}

pub fn get_iktarget_info(iktarget: Iktarget) -> IktargetInfo {
    unsafe { ffi::sspine_get_iktarget_info(iktarget) }
}

pub fn set_iktarget_world_pos(instance: Instance, iktarget: Iktarget, world_pos: Vec2) {
    unsafe { ffi::sspine_set_iktarget_world_pos(instance, iktarget, world_pos) }
}

pub fn num_skins(skeleton: Skeleton) -> i32 {
    unsafe { ffi::sspine_num_skins(skeleton) }
}

pub fn skin_by_name(skeleton: Skeleton, name: &str) -> Skin {
    let name = CStrArg::new(name);
    unsafe { ffi::sspine_skin_by_name(skeleton, name.as_ptr()) }
}

pub fn skin_by_index(skeleton: Skeleton, index: i32) -> Skin {
    unsafe { ffi::sspine_skin_by_index(skeleton, index) }
}

pub fn skin_valid(skin: Skin) -> bool {
    unsafe { ffi::sspine_skin_valid(skin) }
}

pub fn skin_equal(first: Skin, second: Skin) -> bool {
    unsafe { ffi::sspine_skin_equal(first, second) }
}

pub fn get_skin_info(skin: Skin) -> SkinInfo {
    unsafe { ffi::sspine_get_skin_info(skin) }
}

pub fn set_skin(instance: Instance, skin: Skin) {
    unsafe { ffi::sspine_set_skin(instance, skin) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(
        all(feature = "link", target_os = "ios"),
        link(name = "spine-c", kind = "framework")
    )]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "spine-c"))]
    unsafe extern "C" {
        pub fn sspine_setup(desc: *const Desc);
        pub fn sspine_shutdown();
        pub fn sspine_make_context(desc: *const ContextDesc) -> Context;
        pub fn sspine_destroy_context(ctx: Context);
        pub fn sspine_set_context(ctx: Context);
        pub fn sspine_get_context() -> Context;
        pub fn sspine_default_context() -> Context;
        pub fn sspine_get_context_info(ctx: Context) -> ContextInfo;
        pub fn sspine_make_atlas(desc: *const AtlasDesc) -> Atlas;
        pub fn sspine_make_skeleton(desc: *const SkeletonDesc) -> Skeleton;
        pub fn sspine_make_skinset(desc: *const SkinsetDesc) -> Skinset;
        pub fn sspine_make_instance(desc: *const InstanceDesc) -> Instance;
        pub fn sspine_destroy_atlas(atlas: Atlas);
        pub fn sspine_destroy_skeleton(skeleton: Skeleton);
        pub fn sspine_destroy_skinset(skinset: Skinset);
        pub fn sspine_destroy_instance(instance: Instance);
        pub fn sspine_set_skinset(instance: Instance, skinset: Skinset);
        pub fn sspine_update_instance(instance: Instance, delta_time: f32);
        pub fn sspine_num_triggered_events(instance: Instance) -> i32;
        pub fn sspine_get_triggered_event_info(
            instance: Instance,
            triggered_event_index: i32,
        ) -> TriggeredEventInfo;
        pub fn sspine_draw_instance_in_layer(instance: Instance, layer: i32);
        pub fn sspine_context_draw_instance_in_layer(ctx: Context, instance: Instance, layer: i32);
        pub fn sspine_layer_transform_to_mat4(tform: *const LayerTransform) -> Mat4;
        pub fn sspine_draw_layer(layer: i32, tform: *const LayerTransform);
        pub fn sspine_context_draw_layer(ctx: Context, layer: i32, tform: *const LayerTransform);
        pub fn sspine_get_context_resource_state(context: Context) -> ResourceState;
        pub fn sspine_get_atlas_resource_state(atlas: Atlas) -> ResourceState;
        pub fn sspine_get_skeleton_resource_state(skeleton: Skeleton) -> ResourceState;
        pub fn sspine_get_skinset_resource_state(skinset: Skinset) -> ResourceState;
        pub fn sspine_get_instance_resource_state(instance: Instance) -> ResourceState;
        pub fn sspine_context_valid(context: Context) -> bool;
        pub fn sspine_atlas_valid(atlas: Atlas) -> bool;
        pub fn sspine_skeleton_valid(skeleton: Skeleton) -> bool;
        pub fn sspine_instance_valid(instance: Instance) -> bool;
        pub fn sspine_skinset_valid(skinset: Skinset) -> bool;
        pub fn sspine_get_skeleton_atlas(skeleton: Skeleton) -> Atlas;
        pub fn sspine_get_instance_skeleton(instance: Instance) -> Skeleton;
        pub fn sspine_num_images(atlas: Atlas) -> i32;
        pub fn sspine_image_by_index(atlas: Atlas, index: i32) -> Image;
        pub fn sspine_image_valid(image: Image) -> bool;
        pub fn sspine_image_equal(first: Image, second: Image) -> bool;
        pub fn sspine_get_image_info(image: Image) -> ImageInfo;
        pub fn sspine_num_atlas_pages(atlas: Atlas) -> i32;
        pub fn sspine_atlas_page_by_index(atlas: Atlas, index: i32) -> AtlasPage;
        pub fn sspine_atlas_page_valid(page: AtlasPage) -> bool;
        pub fn sspine_atlas_page_equal(first: AtlasPage, second: AtlasPage) -> bool;
        pub fn sspine_get_atlas_page_info(page: AtlasPage) -> AtlasPageInfo;
        pub fn sspine_set_position(instance: Instance, position: Vec2);
        pub fn sspine_set_scale(instance: Instance, scale: Vec2);
        pub fn sspine_set_color(instance: Instance, color: gfx::Color);
        pub fn sspine_get_position(instance: Instance) -> Vec2;
        pub fn sspine_get_scale(instance: Instance) -> Vec2;
        pub fn sspine_get_color(instance: Instance) -> gfx::Color;
        pub fn sspine_num_anims(skeleton: Skeleton) -> i32;
        pub fn sspine_anim_by_name(skeleton: Skeleton, name: *const c_char) -> Anim;
        pub fn sspine_anim_by_index(skeleton: Skeleton, index: i32) -> Anim;
        pub fn sspine_anim_valid(anim: Anim) -> bool;
        pub fn sspine_anim_equal(first: Anim, second: Anim) -> bool;
        pub fn sspine_get_anim_info(anim: Anim) -> AnimInfo;
        pub fn sspine_clear_animation_tracks(instance: Instance);
        pub fn sspine_clear_animation_track(instance: Instance, track_index: i32);
        pub fn sspine_set_animation(instance: Instance, anim: Anim, track_index: i32, r#loop: bool);
        pub fn sspine_add_animation(
            instance: Instance,
            anim: Anim,
            track_index: i32,
            r#loop: bool,
            delay: f32,
        );
        pub fn sspine_set_empty_animation(instance: Instance, track_index: i32, mix_duration: f32);
        pub fn sspine_add_empty_animation(
            instance: Instance,
            track_index: i32,
            mix_duration: f32,
            delay: f32,
        );
        pub fn sspine_num_bones(skeleton: Skeleton) -> i32;
        pub fn sspine_bone_by_name(skeleton: Skeleton, name: *const c_char) -> Bone;
        pub fn sspine_bone_by_index(skeleton: Skeleton, index: i32) -> Bone;
        pub fn sspine_bone_valid(bone: Bone) -> bool;
        pub fn sspine_bone_equal(first: Bone, second: Bone) -> bool;
        pub fn sspine_get_bone_info(bone: Bone) -> BoneInfo;
        pub fn sspine_set_bone_transform(
            instance: Instance,
            bone: Bone,
            transform: *const BoneTransform,
        );
        pub fn sspine_set_bone_position(instance: Instance, bone: Bone, position: Vec2);
        pub fn sspine_set_bone_rotation(instance: Instance, bone: Bone, rotation: f32);
        pub fn sspine_set_bone_scale(instance: Instance, bone: Bone, scale: Vec2);
        pub fn sspine_set_bone_shear(instance: Instance, bone: Bone, shear: Vec2);
        pub fn sspine_get_bone_transform(instance: Instance, bone: Bone) -> BoneTransform;
        pub fn sspine_get_bone_position(instance: Instance, bone: Bone) -> Vec2;
        pub fn sspine_get_bone_rotation(instance: Instance, bone: Bone) -> f32;
        pub fn sspine_get_bone_scale(instance: Instance, bone: Bone) -> Vec2;
        pub fn sspine_get_bone_shear(instance: Instance, bone: Bone) -> Vec2;
        pub fn sspine_get_bone_world_position(instance: Instance, bone: Bone) -> Vec2;
        pub fn sspine_bone_local_to_world(instance: Instance, bone: Bone, local_pos: Vec2) -> Vec2;
        pub fn sspine_bone_world_to_local(instance: Instance, bone: Bone, world_pos: Vec2) -> Vec2;
        pub fn sspine_num_slots(skeleton: Skeleton) -> i32;
        pub fn sspine_slot_by_name(skeleton: Skeleton, name: *const c_char) -> Slot;
        pub fn sspine_slot_by_index(skeleton: Skeleton, index: i32) -> Slot;
        pub fn sspine_slot_valid(slot: Slot) -> bool;
        pub fn sspine_slot_equal(first: Slot, second: Slot) -> bool;
        pub fn sspine_get_slot_info(slot: Slot) -> SlotInfo;
        pub fn sspine_set_slot_color(instance: Instance, slot: Slot, color: gfx::Color);
        pub fn sspine_get_slot_color(instance: Instance, slot: Slot) -> gfx::Color;
        pub fn sspine_num_events(skeleton: Skeleton) -> i32;
        pub fn sspine_event_by_name(skeleton: Skeleton, name: *const c_char) -> Event;
        pub fn sspine_event_by_index(skeleton: Skeleton, index: i32) -> Event;
        pub fn sspine_event_valid(event: Event) -> bool;
        pub fn sspine_event_equal(first: Event, second: Event) -> bool;
        pub fn sspine_get_event_info(event: Event) -> EventInfo;
        pub fn sspine_num_iktargets(skeleton: Skeleton) -> i32;
        pub fn sspine_iktarget_by_name(skeleton: Skeleton, name: *const c_char) -> Iktarget;
        pub fn sspine_iktarget_by_index(skeleton: Skeleton, index: i32) -> Iktarget;
        pub fn sspine_iktarget_valid(iktarget: Iktarget) -> bool;
        pub fn sspine_iktarget_equal(first: Iktarget, second: Iktarget) -> bool;
        pub fn sspine_get_iktarget_info(iktarget: Iktarget) -> IktargetInfo;
        pub fn sspine_set_iktarget_world_pos(
            instance: Instance,
            iktarget: Iktarget,
            world_pos: Vec2,
        );
        pub fn sspine_num_skins(skeleton: Skeleton) -> i32;
        pub fn sspine_skin_by_name(skeleton: Skeleton, name: *const c_char) -> Skin;
        pub fn sspine_skin_by_index(skeleton: Skeleton, index: i32) -> Skin;
        pub fn sspine_skin_valid(skin: Skin) -> bool;
        pub fn sspine_skin_equal(first: Skin, second: Skin) -> bool;
        pub fn sspine_get_skin_info(skin: Skin) -> SkinInfo;
        pub fn sspine_set_skin(instance: Instance, skin: Skin);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;
    use crate::abi::Handle;

    fn inline(text: &str) -> InlineString {
        let mut s = InlineString::default();
        let n = text.len().min(MAX_STRING_SIZE - 1);
        s.cstr[..n].copy_from_slice(&text.as_bytes()[..n]);
        s.len = n as u8;
        s.valid = true;
        s.truncated = n < text.len();
        s
    }

    #[test]
    fn inline_string_layout() {
        assert_eq!(size_of::<InlineString>(), 64);
        assert_eq!(offset_of!(InlineString, len), 2);
        assert_eq!(offset_of!(InlineString, cstr), 3);
    }

    #[test]
    fn inline_string_reads_len_bytes() {
        assert_eq!(inline("walk").as_str(), "walk");
        assert_eq!(InlineString::default().as_str(), "");

        let long = "x".repeat(100);
        let s = inline(&long);
        assert!(s.truncated);
        assert_eq!(s.as_str().len(), 60);
    }

    #[test]
    fn invalid_inline_string_ignores_leftover_bytes() {
        let mut s = inline("idle");
        s.valid = false;
        assert_eq!(s.len, 4);
        assert_eq!(s.as_str(), "");
    }

    #[test]
    fn inline_string_drops_split_characters() {
        let mut s = inline("aé");
        // cut inside the two-byte 'é'
        s.len = 2;
        assert_eq!(s.as_str(), "a");
    }

    #[test]
    fn info_layouts() {
        assert_eq!(offset_of!(ImageInfo, filename), 45);
        assert_eq!(size_of::<ImageInfo>(), 112);
        assert_eq!(offset_of!(AnimInfo, name), 12);
        assert_eq!(size_of::<AnimInfo>(), 76);
        assert_eq!(size_of::<BoneTransform>(), 28);
        assert_eq!(offset_of!(BoneInfo, color), 48);
        assert_eq!(size_of::<BoneInfo>(), 128);
        assert_eq!(size_of::<SkinsetDesc>(), 4 + MAX_SKINSET_SKINS * 8);
    }

    #[test]
    fn index_pairs_compare_by_owner_and_index() {
        let a = Bone { skeleton_id: 1, index: 3 };
        assert_eq!(a, Bone { skeleton_id: 1, index: 3 });
        assert_ne!(a, Bone { skeleton_id: 2, index: 3 });
        assert!(!Skeleton::default().is_valid());
        assert_eq!(Instance::from_id(9).id(), 9);
    }
}
