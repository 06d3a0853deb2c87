//! cgltf: glTF 2.0 / GLB parsing.
//!
//! The parsed document is a graph of native structs linked by raw pointers.
//! [`Document`] owns one parse result and frees it on drop; the pointers
//! inside stay valid for as long as the `Document` is alive. A document
//! parsed from memory also borrows the input bytes, since GLB chunks are
//! read in place.

use std::ffi::{c_char, c_void};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use bytemuck::{Pod, Zeroable};

use crate::abi::zeroed_default;
use crate::text::CStrArg;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileType {
    #[default]
    Invalid,
    Gltf,
    Glb,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseResult {
    #[default]
    Success,
    DataTooShort,
    UnknownFormat,
    InvalidJson,
    InvalidGltf,
    InvalidOptions,
    FileNotFound,
    IoError,
    OutOfMemory,
    LegacyGltf,
    MaxEnum,
}

impl ParseResult {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Success => "success",
            Self::DataTooShort => "data too short",
            Self::UnknownFormat => "unknown format",
            Self::InvalidJson => "invalid JSON",
            Self::InvalidGltf => "invalid glTF",
            Self::InvalidOptions => "invalid options",
            Self::FileNotFound => "file not found",
            Self::IoError => "I/O error",
            Self::OutOfMemory => "out of memory",
            Self::LegacyGltf => "legacy glTF (1.0) is not supported",
            Self::MaxEnum => "unknown cgltf result",
        };
        f.write_str(text)
    }
}

impl std::error::Error for ParseResult {}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferViewType {
    #[default]
    Invalid,
    Indices,
    Vertices,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeType {
    #[default]
    Invalid,
    Position,
    Normal,
    Tangent,
    Texcoord,
    Color,
    Joints,
    Weights,
    Custom,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentType {
    #[default]
    Invalid,
    R8,
    R8u,
    R16,
    R16u,
    R32u,
    R32f,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Type {
    #[default]
    Invalid,
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    #[default]
    Invalid,
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    #[default]
    Opaque,
    Mask,
    Blend,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationPathType {
    #[default]
    Invalid,
    Translation,
    Rotation,
    Scale,
    Weights,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InterpolationType {
    #[default]
    Linear,
    Step,
    CubicSpline,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraType {
    #[default]
    Invalid,
    Perspective,
    Orthographic,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LightType {
    #[default]
    Invalid,
    Directional,
    Point,
    Spot,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataFreeMethod {
    #[default]
    None,
    FileRelease,
    MemoryFree,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeshoptCompressionMode {
    #[default]
    Invalid,
    Attributes,
    Triangles,
    Indices,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeshoptCompressionFilter {
    #[default]
    None,
    Octahedral,
    Quaternion,
    Exponential,
    MaxEnum,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterType {
    #[default]
    Undefined = 0,
    Nearest = 9728,
    Linear = 9729,
    NearestMipmapNearest = 9984,
    LinearMipmapNearest = 9985,
    NearestMipmapLinear = 9986,
    LinearMipmapLinear = 9987,
}

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WrapMode(pub i32);

impl WrapMode {
    pub const CLAMP_TO_EDGE: Self = Self(33071);
    pub const MIRRORED_REPEAT: Self = Self(33648);
    pub const REPEAT: Self = Self(10497);
}

/// Loads `path` into memory, storing the byte count and a pointer to the data.
pub type ReadFn = unsafe extern "C" fn(
    *const MemoryOptions,
    *const FileOptions,
    *const c_char,
    *mut usize,
    *mut *mut c_void,
) -> ParseResult;

/// Releases data returned by a [`ReadFn`].
pub type ReleaseFn = unsafe extern "C" fn(*const MemoryOptions, *const FileOptions, *mut c_void);

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MemoryOptions {
    pub alloc_func: Option<unsafe extern "C" fn(*mut c_void, usize) -> *mut c_void>,
    pub free_func: Option<unsafe extern "C" fn(*mut c_void, *mut c_void)>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FileOptions {
    pub read: Option<ReadFn>,
    pub release: Option<ReleaseFn>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Options {
    pub r#type: FileType,
    pub json_token_count: usize,
    pub memory: MemoryOptions,
    pub file: FileOptions,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Extras {
    pub start_offset: usize,
    pub end_offset: usize,
    pub data: *mut c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Extension {
    pub name: *mut c_char,
    pub data: *mut c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Buffer {
    pub name: *mut c_char,
    pub size: usize,
    pub uri: *mut c_char,
    pub data: *mut c_void,
    pub data_free_method: DataFreeMethod,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MeshoptCompression {
    pub buffer: *mut Buffer,
    pub offset: usize,
    pub size: usize,
    pub stride: usize,
    pub count: usize,
    pub mode: MeshoptCompressionMode,
    pub filter: MeshoptCompressionFilter,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BufferView {
    pub name: *mut c_char,
    pub buffer: *mut Buffer,
    pub offset: usize,
    pub size: usize,
    pub stride: usize,
    pub r#type: BufferViewType,
    pub data: *mut c_void,
    pub has_meshopt_compression: i32,
    pub meshopt_compression: MeshoptCompression,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AccessorSparse {
    pub count: usize,
    pub indices_buffer_view: *mut BufferView,
    pub indices_byte_offset: usize,
    pub indices_component_type: ComponentType,
    pub values_buffer_view: *mut BufferView,
    pub values_byte_offset: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Accessor {
    pub name: *mut c_char,
    pub component_type: ComponentType,
    pub normalized: i32,
    pub r#type: Type,
    pub offset: usize,
    pub count: usize,
    pub stride: usize,
    pub buffer_view: *mut BufferView,
    pub has_min: i32,
    pub min: [f32; 16],
    pub has_max: i32,
    pub max: [f32; 16],
    pub is_sparse: i32,
    pub sparse: AccessorSparse,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Attribute {
    pub name: *mut c_char,
    pub r#type: AttributeType,
    pub index: i32,
    pub data: *mut Accessor,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Image {
    pub name: *mut c_char,
    pub uri: *mut c_char,
    pub buffer_view: *mut BufferView,
    pub mime_type: *mut c_char,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Sampler {
    pub name: *mut c_char,
    pub mag_filter: FilterType,
    pub min_filter: FilterType,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Texture {
    pub name: *mut c_char,
    pub image: *mut Image,
    pub sampler: *mut Sampler,
    pub has_basisu: i32,
    pub basisu_image: *mut Image,
    pub has_webp: i32,
    pub webp_image: *mut Image,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TextureTransform {
    pub offset: [f32; 2],
    pub rotation: f32,
    pub scale: [f32; 2],
    pub has_texcoord: i32,
    pub texcoord: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct TextureView {
    pub texture: *mut Texture,
    pub texcoord: i32,
    pub scale: f32,
    pub has_transform: i32,
    pub transform: TextureTransform,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PbrMetallicRoughness {
    pub base_color_texture: TextureView,
    pub metallic_roughness_texture: TextureView,
    pub base_color_factor: [f32; 4],
    pub metallic_factor: f32,
    pub roughness_factor: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PbrSpecularGlossiness {
    pub diffuse_texture: TextureView,
    pub specular_glossiness_texture: TextureView,
    pub diffuse_factor: [f32; 4],
    pub specular_factor: [f32; 3],
    pub glossiness_factor: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Clearcoat {
    pub clearcoat_texture: TextureView,
    pub clearcoat_roughness_texture: TextureView,
    pub clearcoat_normal_texture: TextureView,
    pub clearcoat_factor: f32,
    pub clearcoat_roughness_factor: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Transmission {
    pub transmission_texture: TextureView,
    pub transmission_factor: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Ior {
    pub ior: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Specular {
    pub specular_texture: TextureView,
    pub specular_color_texture: TextureView,
    pub specular_color_factor: [f32; 3],
    pub specular_factor: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Volume {
    pub thickness_texture: TextureView,
    pub thickness_factor: f32,
    pub attenuation_color: [f32; 3],
    pub attenuation_distance: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Sheen {
    pub sheen_color_texture: TextureView,
    pub sheen_color_factor: [f32; 3],
    pub sheen_roughness_texture: TextureView,
    pub sheen_roughness_factor: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct EmissiveStrength {
    pub emissive_strength: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Iridescence {
    pub iridescence_factor: f32,
    pub iridescence_texture: TextureView,
    pub iridescence_ior: f32,
    pub iridescence_thickness_min: f32,
    pub iridescence_thickness_max: f32,
    pub iridescence_thickness_texture: TextureView,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct DiffuseTransmission {
    pub diffuse_transmission_texture: TextureView,
    pub diffuse_transmission_factor: f32,
    pub diffuse_transmission_color_factor: [f32; 3],
    pub diffuse_transmission_color_texture: TextureView,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Anisotropy {
    pub anisotropy_strength: f32,
    pub anisotropy_rotation: f32,
    pub anisotropy_texture: TextureView,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Dispersion {
    pub dispersion: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub name: *mut c_char,
    pub has_pbr_metallic_roughness: i32,
    pub has_pbr_specular_glossiness: i32,
    pub has_clearcoat: i32,
    pub has_transmission: i32,
    pub has_volume: i32,
    pub has_ior: i32,
    pub has_specular: i32,
    pub has_sheen: i32,
    pub has_emissive_strength: i32,
    pub has_iridescence: i32,
    pub has_diffuse_transmission: i32,
    pub has_anisotropy: i32,
    pub has_dispersion: i32,
    pub pbr_metallic_roughness: PbrMetallicRoughness,
    pub pbr_specular_glossiness: PbrSpecularGlossiness,
    pub clearcoat: Clearcoat,
    pub ior: Ior,
    pub specular: Specular,
    pub sheen: Sheen,
    pub transmission: Transmission,
    pub volume: Volume,
    pub emissive_strength: EmissiveStrength,
    pub iridescence: Iridescence,
    pub diffuse_transmission: DiffuseTransmission,
    pub anisotropy: Anisotropy,
    pub dispersion: Dispersion,
    pub normal_texture: TextureView,
    pub occlusion_texture: TextureView,
    pub emissive_texture: TextureView,
    pub emissive_factor: [f32; 3],
    pub alpha_mode: AlphaMode,
    pub alpha_cutoff: f32,
    pub double_sided: i32,
    pub unlit: i32,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MaterialMapping {
    pub variant: usize,
    pub material: *mut Material,
    pub extras: Extras,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MorphTarget {
    pub attributes: *mut Attribute,
    pub attributes_count: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct DracoMeshCompression {
    pub buffer_view: *mut BufferView,
    pub attributes: *mut Attribute,
    pub attributes_count: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MeshGpuInstancing {
    pub attributes: *mut Attribute,
    pub attributes_count: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Primitive {
    pub r#type: PrimitiveType,
    pub indices: *mut Accessor,
    pub material: *mut Material,
    pub attributes: *mut Attribute,
    pub attributes_count: usize,
    pub targets: *mut MorphTarget,
    pub targets_count: usize,
    pub extras: Extras,
    pub has_draco_mesh_compression: i32,
    pub draco_mesh_compression: DracoMeshCompression,
    pub mappings: *mut MaterialMapping,
    pub mappings_count: usize,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Mesh {
    pub name: *mut c_char,
    pub primitives: *mut Primitive,
    pub primitives_count: usize,
    pub weights: *mut f32,
    pub weights_count: usize,
    pub target_names: *mut *mut c_char,
    pub target_names_count: usize,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Skin {
    pub name: *mut c_char,
    pub joints: *mut *mut Node,
    pub joints_count: usize,
    pub skeleton: *mut Node,
    pub inverse_bind_matrices: *mut Accessor,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CameraPerspective {
    pub has_aspect_ratio: i32,
    pub aspect_ratio: f32,
    pub yfov: f32,
    pub has_zfar: i32,
    pub zfar: f32,
    pub znear: f32,
    pub extras: Extras,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CameraOrthographic {
    pub xmag: f32,
    pub ymag: f32,
    pub zfar: f32,
    pub znear: f32,
    pub extras: Extras,
}

/// Projection parameters; `Camera::type` says which member is live.
#[repr(C)]
#[derive(Copy, Clone)]
pub union CameraData {
    pub perspective: CameraPerspective,
    pub orthographic: CameraOrthographic,
}

impl fmt::Debug for CameraData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraData").finish_non_exhaustive()
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub name: *mut c_char,
    pub r#type: CameraType,
    pub data: CameraData,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

impl Camera {
    pub fn perspective(&self) -> Option<&CameraPerspective> {
        match self.r#type {
            // SAFETY: the tag selects the live member.
            CameraType::Perspective => Some(unsafe { &self.data.perspective }),
            _ => None,
        }
    }

    pub fn orthographic(&self) -> Option<&CameraOrthographic> {
        match self.r#type {
            // SAFETY: the tag selects the live member.
            CameraType::Orthographic => Some(unsafe { &self.data.orthographic }),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub name: *mut c_char,
    pub color: [f32; 3],
    pub intensity: f32,
    pub r#type: LightType,
    pub range: f32,
    pub spot_inner_cone_angle: f32,
    pub spot_outer_cone_angle: f32,
    pub extras: Extras,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub name: *mut c_char,
    pub parent: *mut Node,
    pub children: *mut *mut Node,
    pub children_count: usize,
    pub skin: *mut Skin,
    pub mesh: *mut Mesh,
    pub camera: *mut Camera,
    pub light: *mut Light,
    pub weights: *mut f32,
    pub weights_count: usize,
    pub has_translation: i32,
    pub has_rotation: i32,
    pub has_scale: i32,
    pub has_matrix: i32,
    pub translation: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    pub matrix: [f32; 16],
    pub extras: Extras,
    pub has_mesh_gpu_instancing: i32,
    pub mesh_gpu_instancing: MeshGpuInstancing,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Scene {
    pub name: *mut c_char,
    pub nodes: *mut *mut Node,
    pub nodes_count: usize,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AnimationSampler {
    pub input: *mut Accessor,
    pub output: *mut Accessor,
    pub interpolation: InterpolationType,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AnimationChannel {
    pub sampler: *mut AnimationSampler,
    pub target_node: *mut Node,
    pub target_path: AnimationPathType,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Animation {
    pub name: *mut c_char,
    pub samplers: *mut AnimationSampler,
    pub samplers_count: usize,
    pub channels: *mut AnimationChannel,
    pub channels_count: usize,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MaterialVariant {
    pub name: *mut c_char,
    pub extras: Extras,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Asset {
    pub copyright: *mut c_char,
    pub generator: *mut c_char,
    pub version: *mut c_char,
    pub min_version: *mut c_char,
    pub extras: Extras,
    pub extensions_count: usize,
    pub extensions: *mut Extension,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Data {
    pub file_type: FileType,
    pub file_data: *mut c_void,
    pub asset: Asset,
    pub meshes: *mut Mesh,
    pub meshes_count: usize,
    pub materials: *mut Material,
    pub materials_count: usize,
    pub accessors: *mut Accessor,
    pub accessors_count: usize,
    pub buffer_views: *mut BufferView,
    pub buffer_views_count: usize,
    pub buffers: *mut Buffer,
    pub buffers_count: usize,
    pub images: *mut Image,
    pub images_count: usize,
    pub textures: *mut Texture,
    pub textures_count: usize,
    pub samplers: *mut Sampler,
    pub samplers_count: usize,
    pub skins: *mut Skin,
    pub skins_count: usize,
    pub cameras: *mut Camera,
    pub cameras_count: usize,
    pub lights: *mut Light,
    pub lights_count: usize,
    pub nodes: *mut Node,
    pub nodes_count: usize,
    pub scenes: *mut Scene,
    pub scenes_count: usize,
    pub scene: *mut Scene,
    pub animations: *mut Animation,
    pub animations_count: usize,
    pub variants: *mut MaterialVariant,
    pub variants_count: usize,
    pub extras: Extras,
    pub data_extensions_count: usize,
    pub data_extensions: *mut Extension,
    pub extensions_used: *mut *mut c_char,
    pub extensions_used_count: usize,
    pub extensions_required: *mut *mut c_char,
    pub extensions_required_count: usize,
    pub json: *const c_char,
    pub json_size: usize,
    pub bin: *const c_void,
    pub bin_size: usize,
    pub memory: MemoryOptions,
    pub file: FileOptions,
}

zeroed_default!(
    MemoryOptions, FileOptions, Options, Extras, Extension, Buffer, MeshoptCompression, BufferView,
    AccessorSparse, Accessor, Attribute, Image, Sampler, Texture, TextureView, PbrMetallicRoughness,
    PbrSpecularGlossiness, Clearcoat, Transmission, Specular, Volume, Sheen, Iridescence,
    DiffuseTransmission, Anisotropy, Material, MaterialMapping, MorphTarget, DracoMeshCompression,
    MeshGpuInstancing, Primitive, Mesh, Skin, CameraPerspective, CameraOrthographic, CameraData,
    Camera, Light, Node, Scene, AnimationSampler, AnimationChannel, Animation, MaterialVariant,
    Asset, Data,
);

// ═══════════════════════════════════════════════════════════════════════════
// Document
// ═══════════════════════════════════════════════════════════════════════════

/// View `count` items at `ptr`; null or empty gives an empty slice.
///
/// # Safety
///
/// A non-null `ptr` must point to `count` initialised items that outlive `'a`.
unsafe fn native_slice<'a, T>(ptr: *const T, count: usize) -> &'a [T] {
    if ptr.is_null() || count == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, count) }
    }
}

/// A parsed glTF document, freed with `cgltf_free` on drop.
///
/// `'a` is the lifetime of the bytes it was parsed from. The native parser
/// points `json` and `bin` into that buffer, and `load_buffers` hands `bin`
/// on to the first buffer, so the input must stay alive and unchanged:
///
/// ```compile_fail,E0597
/// use sokol::gltf::{Document, Options};
///
/// let options = Options::default();
/// let doc = {
///     let bytes = vec![0_u8; 64];
///     Document::parse(&options, &bytes)
/// };
/// drop(doc);
/// ```
#[derive(Debug)]
pub struct Document<'a> {
    data: NonNull<Data>,
    _input: PhantomData<&'a [u8]>,
}

impl<'a> Document<'a> {
    /// Parse a glTF or GLB document held in memory.
    pub fn parse(options: &Options, bytes: &'a [u8]) -> Result<Self, ParseResult> {
        let mut out = ptr::null_mut();
        let result =
            unsafe { ffi::cgltf_parse(options, bytes.as_ptr().cast(), bytes.len(), &mut out) };
        Self::from_parse(result, out)
    }

    fn from_parse(result: ParseResult, out: *mut Data) -> Result<Self, ParseResult> {
        match NonNull::new(out) {
            Some(data) if result.is_success() => Ok(Self {
                data,
                _input: PhantomData,
            }),
            Some(data) => {
                unsafe { ffi::cgltf_free(data.as_ptr()) };
                Err(result)
            }
            None if result.is_success() => Err(ParseResult::InvalidGltf),
            None => Err(result),
        }
    }

    /// Load external and embedded buffers, resolving relative URIs
    /// against `gltf_path`.
    pub fn load_buffers(&mut self, options: &Options, gltf_path: &str) -> Result<(), ParseResult> {
        let gltf_path = CStrArg::new(gltf_path);
        unsafe { ffi::cgltf_load_buffers(options, self.data.as_ptr(), gltf_path.as_ptr()) }
            .into_result()
    }

    pub fn validate(&self) -> Result<(), ParseResult> {
        unsafe { ffi::cgltf_validate(self.data.as_ptr()) }.into_result()
    }

    pub fn data(&self) -> &Data {
        unsafe { self.data.as_ref() }
    }

    /// The raw parse result, for the index and accessor calls.
    pub fn as_ptr(&self) -> *mut Data {
        self.data.as_ptr()
    }

    pub fn meshes(&self) -> &[Mesh] {
        let d = self.data();
        unsafe { native_slice(d.meshes, d.meshes_count) }
    }

    pub fn materials(&self) -> &[Material] {
        let d = self.data();
        unsafe { native_slice(d.materials, d.materials_count) }
    }

    pub fn accessors(&self) -> &[Accessor] {
        let d = self.data();
        unsafe { native_slice(d.accessors, d.accessors_count) }
    }

    pub fn images(&self) -> &[Image] {
        let d = self.data();
        unsafe { native_slice(d.images, d.images_count) }
    }

    pub fn textures(&self) -> &[Texture] {
        let d = self.data();
        unsafe { native_slice(d.textures, d.textures_count) }
    }

    pub fn cameras(&self) -> &[Camera] {
        let d = self.data();
        unsafe { native_slice(d.cameras, d.cameras_count) }
    }

    pub fn nodes(&self) -> &[Node] {
        let d = self.data();
        unsafe { native_slice(d.nodes, d.nodes_count) }
    }

    pub fn scenes(&self) -> &[Scene] {
        let d = self.data();
        unsafe { native_slice(d.scenes, d.scenes_count) }
    }

    pub fn animations(&self) -> &[Animation] {
        let d = self.data();
        unsafe { native_slice(d.animations, d.animations_count) }
    }
}

impl Document<'static> {
    /// Read and parse a `.gltf` or `.glb` file. The native side owns the
    /// file contents, so the document borrows nothing.
    pub fn parse_file(options: &Options, path: &str) -> Result<Self, ParseResult> {
        let path = CStrArg::new(path);
        let mut out = ptr::null_mut();
        let result = unsafe { ffi::cgltf_parse_file(options, path.as_ptr(), &mut out) };
        Self::from_parse(result, out)
    }
}

impl Drop for Document<'_> {
    fn drop(&mut self) {
        unsafe { ffi::cgltf_free(self.data.as_ptr()) };
    }
}

impl Mesh {
    pub fn primitives(&self) -> &[Primitive] {
        unsafe { native_slice(self.primitives, self.primitives_count) }
    }
}

impl Primitive {
    pub fn attributes(&self) -> &[Attribute] {
        unsafe { native_slice(self.attributes, self.attributes_count) }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub unsafe fn parse(
    options: &Options,
    data: *const c_void,
    size: usize,
    out_data: *mut *mut Data,
) -> ParseResult {
    unsafe { ffi::cgltf_parse(options, data, size, out_data) }
}

pub unsafe fn parse_file(options: &Options, path: &str, out_data: *mut *mut Data) -> ParseResult {
    let path = CStrArg::new(path);
    unsafe { ffi::cgltf_parse_file(options, path.as_ptr(), out_data) }
}

pub unsafe fn load_buffers(options: &Options, data: *mut Data, gltf_path: &str) -> ParseResult {
    let gltf_path = CStrArg::new(gltf_path);
    unsafe { ffi::cgltf_load_buffers(options, data, gltf_path.as_ptr()) }
}

pub unsafe fn load_buffer_base64(
    options: &Options,
    size: usize,
    base64: &str,
    out_data: *mut *mut c_void,
) -> ParseResult {
    let base64 = CStrArg::new(base64);
    unsafe { ffi::cgltf_load_buffer_base64(options, size, base64.as_ptr(), out_data) }
}

pub unsafe fn decode_string(string: *mut c_char) -> usize {
    unsafe { ffi::cgltf_decode_string(string) }
}

pub unsafe fn decode_uri(uri: *mut c_char) -> usize {
    unsafe { ffi::cgltf_decode_uri(uri) }
}

pub unsafe fn validate(data: *mut Data) -> ParseResult {
    unsafe { ffi::cgltf_validate(data) }
}

pub unsafe fn free(data: *mut Data) {
    unsafe { ffi::cgltf_free(data) }
}

pub fn node_transform_local(node: &Node, out_matrix: &mut [f32; 16]) {
    unsafe { ffi::cgltf_node_transform_local(node, out_matrix.as_mut_ptr()) }
}

pub fn node_transform_world(node: &Node, out_matrix: &mut [f32; 16]) {
    unsafe { ffi::cgltf_node_transform_world(node, out_matrix.as_mut_ptr()) }
}

pub fn buffer_view_data(view: &BufferView) -> *mut u8 {
    unsafe { ffi::cgltf_buffer_view_data(view) }
}

pub fn find_accessor(prim: &Primitive, r#type: AttributeType, index: i32) -> *mut Accessor {
    unsafe { ffi::cgltf_find_accessor(prim, r#type, index) }
}

pub unsafe fn accessor_read_float(
    accessor: &Accessor,
    index: usize,
    out: *mut f32,
    element_size: usize,
) -> i32 {
    unsafe { ffi::cgltf_accessor_read_float(accessor, index, out, element_size) }
}

pub fn accessor_read_uint(
    accessor: &Accessor,
    index: usize,
    out: &mut u32,
    element_size: usize,
) -> i32 {
    unsafe { ffi::cgltf_accessor_read_uint(accessor, index, out, element_size) }
}

pub fn accessor_read_index(accessor: &Accessor, index: usize) -> usize {
    unsafe { ffi::cgltf_accessor_read_index(accessor, index) }
}

pub fn num_components(r#type: Type) -> usize {
    unsafe { ffi::cgltf_num_components(r#type) }
}

pub fn component_size(component_type: ComponentType) -> usize {
    unsafe { ffi::cgltf_component_size(component_type) }
}

pub fn calc_size(r#type: Type, component_type: ComponentType) -> usize {
    unsafe { ffi::cgltf_calc_size(r#type, component_type) }
}

pub unsafe fn accessor_unpack_floats(
    accessor: &Accessor,
    out: *mut f32,
    float_count: usize,
) -> usize {
    unsafe { ffi::cgltf_accessor_unpack_floats(accessor, out, float_count) }
}

pub unsafe fn accessor_unpack_indices(
    accessor: &Accessor,
    out: *mut c_void,
    out_component_size: usize,
    index_count: usize,
) -> usize {
    unsafe { ffi::cgltf_accessor_unpack_indices(accessor, out, out_component_size, index_count) }
}

pub unsafe fn copy_extras_json(
    data: &Data,
    extras: &Extras,
    dest: *mut c_void,
    dest_size: &mut usize,
) -> ParseResult {
    unsafe { ffi::cgltf_copy_extras_json(data, extras, dest, dest_size) }
}

pub fn mesh_index(data: &Data, object: &Mesh) -> usize {
    unsafe { ffi::cgltf_mesh_index(data, object) }
}

pub fn material_index(data: &Data, object: &Material) -> usize {
    unsafe { ffi::cgltf_material_index(data, object) }
}

pub fn accessor_index(data: &Data, object: &Accessor) -> usize {
    unsafe { ffi::cgltf_accessor_index(data, object) }
}

pub fn buffer_view_index(data: &Data, object: &BufferView) -> usize {
    unsafe { ffi::cgltf_buffer_view_index(data, object) }
}

pub fn buffer_index(data: &Data, object: &Buffer) -> usize {
    unsafe { ffi::cgltf_buffer_index(data, object) }
}

pub fn image_index(data: &Data, object: &Image) -> usize {
    unsafe { ffi::cgltf_image_index(data, object) }
}

pub fn texture_index(data: &Data, object: &Texture) -> usize {
    unsafe { ffi::cgltf_texture_index(data, object) }
}

pub fn sampler_index(data: &Data, object: &Sampler) -> usize {
    unsafe { ffi::cgltf_sampler_index(data, object) }
}

pub fn skin_index(data: &Data, object: &Skin) -> usize {
    unsafe { ffi::cgltf_skin_index(data, object) }
}

pub fn camera_index(data: &Data, object: &Camera) -> usize {
    unsafe { ffi::cgltf_camera_index(data, object) }
}

pub fn light_index(data: &Data, object: &Light) -> usize {
    unsafe { ffi::cgltf_light_index(data, object) }
}

pub fn node_index(data: &Data, object: &Node) -> usize {
    unsafe { ffi::cgltf_node_index(data, object) }
}

pub fn scene_index(data: &Data, object: &Scene) -> usize {
    unsafe { ffi::cgltf_scene_index(data, object) }
}

pub fn animation_index(data: &Data, object: &Animation) -> usize {
    unsafe { ffi::cgltf_animation_index(data, object) }
}

pub fn animation_sampler_index(animation: &Animation, object: &AnimationSampler) -> usize {
    unsafe { ffi::cgltf_animation_sampler_index(animation, object) }
}

pub fn animation_channel_index(animation: &Animation, object: &AnimationChannel) -> usize {
    unsafe { ffi::cgltf_animation_channel_index(animation, object) }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn cgltf_parse(
            options: *const Options,
            data: *const c_void,
            size: usize,
            out_data: *mut *mut Data,
        ) -> ParseResult;
        pub fn cgltf_parse_file(
            options: *const Options,
            path: *const c_char,
            out_data: *mut *mut Data,
        ) -> ParseResult;
        pub fn cgltf_load_buffers(
            options: *const Options,
            data: *mut Data,
            gltf_path: *const c_char,
        ) -> ParseResult;
        pub fn cgltf_load_buffer_base64(
            options: *const Options,
            size: usize,
            base64: *const c_char,
            out_data: *mut *mut c_void,
        ) -> ParseResult;
        pub fn cgltf_decode_string(string: *mut c_char) -> usize;
        pub fn cgltf_decode_uri(uri: *mut c_char) -> usize;
        pub fn cgltf_validate(data: *mut Data) -> ParseResult;
        pub fn cgltf_free(data: *mut Data);
        pub fn cgltf_node_transform_local(node: *const Node, out_matrix: *mut f32);
        pub fn cgltf_node_transform_world(node: *const Node, out_matrix: *mut f32);
        pub fn cgltf_buffer_view_data(view: *const BufferView) -> *mut u8;
        pub fn cgltf_find_accessor(
            prim: *const Primitive,
            r#type: AttributeType,
            index: i32,
        ) -> *mut Accessor;
        pub fn cgltf_accessor_read_float(
            accessor: *const Accessor,
            index: usize,
            out: *mut f32,
            element_size: usize,
        ) -> i32;
        pub fn cgltf_accessor_read_uint(
            accessor: *const Accessor,
            index: usize,
            out: *mut u32,
            element_size: usize,
        ) -> i32;
        pub fn cgltf_accessor_read_index(accessor: *const Accessor, index: usize) -> usize;
        pub fn cgltf_num_components(r#type: Type) -> usize;
        pub fn cgltf_component_size(component_type: ComponentType) -> usize;
        pub fn cgltf_calc_size(r#type: Type, component_type: ComponentType) -> usize;
        pub fn cgltf_accessor_unpack_floats(
            accessor: *const Accessor,
            out: *mut f32,
            float_count: usize,
        ) -> usize;
        pub fn cgltf_accessor_unpack_indices(
            accessor: *const Accessor,
            out: *mut c_void,
            out_component_size: usize,
            index_count: usize,
        ) -> usize;
        pub fn cgltf_copy_extras_json(
            data: *const Data,
            extras: *const Extras,
            dest: *mut c_void,
            dest_size: *mut usize,
        ) -> ParseResult;
        pub fn cgltf_mesh_index(data: *const Data, object: *const Mesh) -> usize;
        pub fn cgltf_material_index(data: *const Data, object: *const Material) -> usize;
        pub fn cgltf_accessor_index(data: *const Data, object: *const Accessor) -> usize;
        pub fn cgltf_buffer_view_index(data: *const Data, object: *const BufferView) -> usize;
        pub fn cgltf_buffer_index(data: *const Data, object: *const Buffer) -> usize;
        pub fn cgltf_image_index(data: *const Data, object: *const Image) -> usize;
        pub fn cgltf_texture_index(data: *const Data, object: *const Texture) -> usize;
        pub fn cgltf_sampler_index(data: *const Data, object: *const Sampler) -> usize;
        pub fn cgltf_skin_index(data: *const Data, object: *const Skin) -> usize;
        pub fn cgltf_camera_index(data: *const Data, object: *const Camera) -> usize;
        pub fn cgltf_light_index(data: *const Data, object: *const Light) -> usize;
        pub fn cgltf_node_index(data: *const Data, object: *const Node) -> usize;
        pub fn cgltf_scene_index(data: *const Data, object: *const Scene) -> usize;
        pub fn cgltf_animation_index(data: *const Data, object: *const Animation) -> usize;
        pub fn cgltf_animation_sampler_index(
            animation: *const Animation,
            object: *const AnimationSampler,
        ) -> usize;
        pub fn cgltf_animation_channel_index(
            animation: *const Animation,
            object: *const AnimationChannel,
        ) -> usize;
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn camera_projections_share_storage() {
        assert_eq!(offset_of!(CameraData, perspective), 0);
        assert_eq!(offset_of!(CameraData, orthographic), 0);
        assert_eq!(
            size_of::<CameraData>(),
            size_of::<CameraPerspective>().max(size_of::<CameraOrthographic>())
        );
    }

    #[test]
    fn camera_tag_selects_projection() {
        let mut camera = Camera {
            r#type: CameraType::Orthographic,
            ..Default::default()
        };
        camera.data.orthographic = CameraOrthographic {
            xmag: 2.0,
            ymag: 1.5,
            ..Default::default()
        };
        assert!(camera.perspective().is_none());
        assert_eq!(camera.orthographic().map(|o| o.xmag), Some(2.0));

        assert!(Camera::default().orthographic().is_none());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn layouts() {
        assert_eq!(size_of::<Extras>(), 24);
        assert_eq!(size_of::<CameraPerspective>(), 48);
        assert_eq!(size_of::<CameraOrthographic>(), 40);
        assert_eq!(offset_of!(Camera, r#type), 8);
        assert_eq!(offset_of!(Camera, data), 16);
        assert_eq!(size_of::<Camera>(), 104);

        assert_eq!(size_of::<TextureTransform>(), 28);
        assert_eq!(offset_of!(Options, memory), 16);
        assert_eq!(offset_of!(Options, file), 40);
        assert_eq!(offset_of!(Node, translation), 96);
        assert_eq!(offset_of!(Node, matrix), 136);
    }

    #[test]
    fn zero_init_is_native_default() {
        let options = Options::default();
        assert_eq!(options.r#type, FileType::Invalid);
        assert!(options.file.read.is_none());
        assert!(options.memory.alloc_func.is_none());
        assert_eq!(WrapMode::default(), WrapMode(0));
    }

    #[test]
    fn parse_result_maps_to_result() {
        assert_eq!(ParseResult::Success.into_result(), Ok(()));
        assert_eq!(ParseResult::FileNotFound.into_result(), Err(ParseResult::FileNotFound));
        assert_eq!(ParseResult::InvalidJson.to_string(), "invalid JSON");
    }

    #[test]
    fn empty_counts_give_empty_views() {
        let mesh = Mesh::default();
        assert!(mesh.primitives().is_empty());
        assert!(Primitive::default().attributes().is_empty());
    }
}
