//! sokol_gfx: resources, passes and draw calls.
//!
//! Resource constructors (`make_*`, `alloc_*`) return handles. A handle with
//! id 0 means creation failed; any later failure shows up through the
//! `query_*_state` calls. Handles are weak references; the native resource
//! pools own everything.
//!
//! Descriptor structs default to all-zero, which sokol_gfx reads as "use the
//! default for this field". `query_*_defaults` shows what the native side
//! fills in.

use std::ffi::{c_char, c_void};

use bytemuck::{Pod, Zeroable};

use crate::abi::{impl_handle, impl_range, zeroed_default};
use crate::logging::{LogFn, impl_bridged_logger};
use crate::text::CStrArg;

pub const INVALID_ID: u32 = 0;
pub const NUM_INFLIGHT_FRAMES: usize = 2;
pub const MAX_COLOR_ATTACHMENTS: usize = 8;
pub const MAX_UNIFORMBLOCK_MEMBERS: usize = 16;
pub const MAX_VERTEX_ATTRIBUTES: usize = 16;
pub const MAX_MIPMAPS: usize = 16;
pub const MAX_VERTEXBUFFER_BINDSLOTS: usize = 8;
pub const MAX_UNIFORMBLOCK_BINDSLOTS: usize = 8;
pub const MAX_VIEW_BINDSLOTS: usize = 32;
pub const MAX_SAMPLER_BINDSLOTS: usize = 12;
pub const MAX_TEXTURE_SAMPLER_PAIRS: usize = 32;
pub const MAX_PORTABLE_COLOR_ATTACHMENTS: usize = 4;
pub const MAX_PORTABLE_TEXTURE_BINDINGS_PER_STAGE: usize = 16;
pub const MAX_PORTABLE_STORAGEBUFFER_BINDINGS_PER_STAGE: usize = 8;
pub const MAX_PORTABLE_STORAGEIMAGE_BINDINGS_PER_STAGE: usize = 4;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    #[default]
    Glcore,
    Gles3,
    D3d11,
    MetalIos,
    MetalMacos,
    MetalSimulator,
    Wgpu,
    Dummy,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    #[default]
    Default,
    None,
    R8,
    R8sn,
    R8ui,
    R8si,
    R16,
    R16sn,
    R16ui,
    R16si,
    R16f,
    Rg8,
    Rg8sn,
    Rg8ui,
    Rg8si,
    R32ui,
    R32si,
    R32f,
    Rg16,
    Rg16sn,
    Rg16ui,
    Rg16si,
    Rg16f,
    Rgba8,
    Srgb8a8,
    Rgba8sn,
    Rgba8ui,
    Rgba8si,
    Bgra8,
    Rgb10a2,
    Rg11b10f,
    Rgb9e5,
    Rg32ui,
    Rg32si,
    Rg32f,
    Rgba16,
    Rgba16sn,
    Rgba16ui,
    Rgba16si,
    Rgba16f,
    Rgba32ui,
    Rgba32si,
    Rgba32f,
    Depth,
    DepthStencil,
    Bc1Rgba,
    Bc2Rgba,
    Bc3Rgba,
    Bc3Srgba,
    Bc4R,
    Bc4Rsn,
    Bc5Rg,
    Bc5Rgsn,
    Bc6hRgbf,
    Bc6hRgbuf,
    Bc7Rgba,
    Bc7Srgba,
    Etc2Rgb8,
    Etc2Srgb8,
    Etc2Rgb8a1,
    Etc2Rgba8,
    Etc2Srgb8a8,
    EacR11,
    EacR11sn,
    EacRg11,
    EacRg11sn,
    Astc4x4Rgba,
    Astc4x4Srgba,
    Num,
}

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
pub enum IndexType {
    #[default]
    Default,
    None,
    Uint16,
    Uint32,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageType {
    #[default]
    Default,
    Dim2,
    Cube,
    Dim3,
    Array,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageSampleType {
    #[default]
    Default,
    Float,
    Depth,
    Sint,
    Uint,
    UnfilterableFloat,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SamplerType {
    #[default]
    Default,
    Filtering,
    Nonfiltering,
    Comparison,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    #[default]
    Default,
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    Default,
    Nearest,
    Linear,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Wrap {
    #[default]
    Default,
    Repeat,
    ClampToEdge,
    ClampToBorder,
    MirroredRepeat,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderColor {
    #[default]
    Default,
    TransparentBlack,
    OpaqueBlack,
    OpaqueWhite,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    #[default]
    Invalid,
    Float,
    Float2,
    Float3,
    Float4,
    Int,
    Int2,
    Int3,
    Int4,
    Uint,
    Uint2,
    Uint3,
    Uint4,
    Byte4,
    Byte4n,
    Ubyte4,
    Ubyte4n,
    Short2,
    Short2n,
    Ushort2,
    Ushort2n,
    Short4,
    Short4n,
    Ushort4,
    Ushort4n,
    Uint10N2,
    Half2,
    Half4,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VertexStep {
    #[default]
    Default,
    PerVertex,
    PerInstance,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UniformType {
    #[default]
    Invalid,
    Float,
    Float2,
    Float3,
    Float4,
    Int,
    Int2,
    Int3,
    Int4,
    Mat4,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UniformLayout {
    #[default]
    Default,
    Native,
    Std140,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CullMode {
    #[default]
    Default,
    None,
    Front,
    Back,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FaceWinding {
    #[default]
    Default,
    Ccw,
    Cw,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompareFunc {
    #[default]
    Default,
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StencilOp {
    #[default]
    Default,
    Keep,
    Zero,
    Replace,
    IncrClamp,
    DecrClamp,
    Invert,
    IncrWrap,
    DecrWrap,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    #[default]
    Default,
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstColor,
    OneMinusDstColor,
    DstAlpha,
    OneMinusDstAlpha,
    SrcAlphaSaturated,
    BlendColor,
    OneMinusBlendColor,
    BlendAlpha,
    OneMinusBlendAlpha,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendOp {
    #[default]
    Default,
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
    Num,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMask {
    #[default]
    Default = 0,
    None = 16,
    R = 1,
    G = 2,
    Rg = 3,
    B = 4,
    Rb = 5,
    Gb = 6,
    Rgb = 7,
    A = 8,
    Ra = 9,
    Ga = 10,
    Rga = 11,
    Ba = 12,
    Rba = 13,
    Gba = 14,
    Rgba = 15,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadAction {
    #[default]
    Default,
    Clear,
    Load,
    Dontcare,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StoreAction {
    #[default]
    Default,
    Store,
    Dontcare,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewType {
    #[default]
    Invalid,
    Storagebuffer,
    Storageimage,
    Texture,
    Colorattachment,
    Resolveattachment,
    Depthstencilattachment,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    #[default]
    None,
    Vertex,
    Fragment,
    Compute,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShaderAttrBaseType {
    #[default]
    Undefined,
    Float,
    Sint,
    Uint,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    GlTextureFormatNotSupported,
    Gl3DTexturesNotSupported,
    GlArrayTexturesNotSupported,
    GlStoragebufferGlslBindingOutOfRange,
    GlStorageimageGlslBindingOutOfRange,
    GlShaderCompilationFailed,
    GlShaderLinkingFailed,
    GlVertexAttributeNotFoundInShader,
    GlUniformblockNameNotFoundInShader,
    GlImageSamplerNameNotFoundInShader,
    GlFramebufferStatusUndefined,
    GlFramebufferStatusIncompleteAttachment,
    GlFramebufferStatusIncompleteMissingAttachment,
    GlFramebufferStatusUnsupported,
    GlFramebufferStatusIncompleteMultisample,
    GlFramebufferStatusUnknown,
    D3d11FeatureLevel0Detected,
    D3d11CreateBufferFailed,
    D3d11CreateBufferSrvFailed,
    D3d11CreateBufferUavFailed,
    D3d11CreateDepthTextureUnsupportedPixelFormat,
    D3d11CreateDepthTextureFailed,
    D3d11Create2DTextureUnsupportedPixelFormat,
    D3d11Create2DTextureFailed,
    D3d11Create2DSrvFailed,
    D3d11Create3DTextureUnsupportedPixelFormat,
    D3d11Create3DTextureFailed,
    D3d11Create3DSrvFailed,
    D3d11CreateMsaaTextureFailed,
    D3d11CreateSamplerStateFailed,
    D3d11UniformblockHlslRegisterBOutOfRange,
    D3d11StoragebufferHlslRegisterTOutOfRange,
    D3d11StoragebufferHlslRegisterUOutOfRange,
    D3d11ImageHlslRegisterTOutOfRange,
    D3d11StorageimageHlslRegisterUOutOfRange,
    D3d11SamplerHlslRegisterSOutOfRange,
    D3d11LoadD3dcompiler47DllFailed,
    D3d11ShaderCompilationFailed,
    D3d11ShaderCompilationOutput,
    D3d11CreateConstantBufferFailed,
    D3d11CreateInputLayoutFailed,
    D3d11CreateRasterizerStateFailed,
    D3d11CreateDepthStencilStateFailed,
    D3d11CreateBlendStateFailed,
    D3d11CreateRtvFailed,
    D3d11CreateDsvFailed,
    D3d11CreateUavFailed,
    D3d11MapForUpdateBufferFailed,
    D3d11MapForAppendBufferFailed,
    D3d11MapForUpdateImageFailed,
    MetalCreateBufferFailed,
    MetalTextureFormatNotSupported,
    MetalCreateTextureFailed,
    MetalCreateSamplerFailed,
    MetalShaderCompilationFailed,
    MetalShaderCreationFailed,
    MetalShaderCompilationOutput,
    MetalShaderEntryNotFound,
    MetalUniformblockMslBufferSlotOutOfRange,
    MetalStoragebufferMslBufferSlotOutOfRange,
    MetalStorageimageMslTextureSlotOutOfRange,
    MetalImageMslTextureSlotOutOfRange,
    MetalSamplerMslSamplerSlotOutOfRange,
    MetalCreateCpsFailed,
    MetalCreateCpsOutput,
    MetalCreateRpsFailed,
    MetalCreateRpsOutput,
    MetalCreateDssFailed,
    WgpuBindgroupsPoolExhausted,
    WgpuBindgroupscacheSizeGreaterOne,
    WgpuBindgroupscacheSizePow2,
    WgpuCreatebindgroupFailed,
    WgpuCreateBufferFailed,
    WgpuCreateTextureFailed,
    WgpuCreateTextureViewFailed,
    WgpuCreateSamplerFailed,
    WgpuCreateShaderModuleFailed,
    WgpuShaderCreateBindgroupLayoutFailed,
    WgpuUniformblockWgslGroup0BindingOutOfRange,
    WgpuTextureWgslGroup1BindingOutOfRange,
    WgpuStoragebufferWgslGroup1BindingOutOfRange,
    WgpuStorageimageWgslGroup1BindingOutOfRange,
    WgpuSamplerWgslGroup1BindingOutOfRange,
    WgpuCreatePipelineLayoutFailed,
    WgpuCreateRenderPipelineFailed,
    WgpuCreateComputePipelineFailed,
    IdenticalCommitListener,
    CommitListenerArrayFull,
    TraceHooksNotEnabled,
    DeallocBufferInvalidState,
    DeallocImageInvalidState,
    DeallocSamplerInvalidState,
    DeallocShaderInvalidState,
    DeallocPipelineInvalidState,
    DeallocViewInvalidState,
    InitBufferInvalidState,
    InitImageInvalidState,
    InitSamplerInvalidState,
    InitShaderInvalidState,
    InitPipelineInvalidState,
    InitViewInvalidState,
    UninitBufferInvalidState,
    UninitImageInvalidState,
    UninitSamplerInvalidState,
    UninitShaderInvalidState,
    UninitPipelineInvalidState,
    UninitViewInvalidState,
    FailBufferInvalidState,
    FailImageInvalidState,
    FailSamplerInvalidState,
    FailShaderInvalidState,
    FailPipelineInvalidState,
    FailViewInvalidState,
    BufferPoolExhausted,
    ImagePoolExhausted,
    SamplerPoolExhausted,
    ShaderPoolExhausted,
    PipelinePoolExhausted,
    ViewPoolExhausted,
    BeginpassTooManyColorAttachments,
    BeginpassTooManyResolveAttachments,
    BeginpassAttachmentsAlive,
    DrawWithoutBindings,
    ShaderdescTooManyVertexstageTextures,
    ShaderdescTooManyFragmentstageTextures,
    ShaderdescTooManyComputestageTextures,
    ShaderdescTooManyVertexstageStoragebuffers,
    ShaderdescTooManyFragmentstageStoragebuffers,
    ShaderdescTooManyComputestageStoragebuffers,
    ShaderdescTooManyVertexstageStorageimages,
    ShaderdescTooManyFragmentstageStorageimages,
    ShaderdescTooManyComputestageStorageimages,
    ShaderdescTooManyVertexstageTexturesamplerpairs,
    ShaderdescTooManyFragmentstageTexturesamplerpairs,
    ShaderdescTooManyComputestageTexturesamplerpairs,
    ValidateBufferdescCanary,
    ValidateBufferdescImmutableDynamicStream,
    ValidateBufferdescSeparateBufferTypes,
    ValidateBufferdescExpectNonzeroSize,
    ValidateBufferdescExpectMatchingDataSize,
    ValidateBufferdescExpectZeroDataSize,
    ValidateBufferdescExpectNoData,
    ValidateBufferdescExpectData,
    ValidateBufferdescStoragebufferSupported,
    ValidateBufferdescStoragebufferSizeMultiple4,
    ValidateImagedataNodata,
    ValidateImagedataDataSize,
    ValidateImagedescCanary,
    ValidateImagedescImmutableDynamicStream,
    ValidateImagedescImagetype2DNumslices,
    ValidateImagedescImagetypeCubeNumslices,
    ValidateImagedescImagetypeArrayNumslices,
    ValidateImagedescImagetype3DNumslices,
    ValidateImagedescNumslices,
    ValidateImagedescWidth,
    ValidateImagedescHeight,
    ValidateImagedescNonrtPixelformat,
    ValidateImagedescMsaaButNoAttachment,
    ValidateImagedescDepth3DImage,
    ValidateImagedescAttachmentExpectImmutable,
    ValidateImagedescAttachmentExpectNoData,
    ValidateImagedescAttachmentPixelformat,
    ValidateImagedescAttachmentResolveExpectNoMsaa,
    ValidateImagedescAttachmentNoMsaaSupport,
    ValidateImagedescAttachmentMsaaNumMipmaps,
    ValidateImagedescAttachmentMsaa3DImage,
    ValidateImagedescAttachmentMsaaCubeImage,
    ValidateImagedescAttachmentMsaaArrayImage,
    ValidateImagedescStorageimagePixelformat,
    ValidateImagedescStorageimageExpectNoMsaa,
    ValidateImagedescInjectedNoData,
    ValidateImagedescDynamicNoData,
    ValidateImagedescCompressedImmutable,
    ValidateSamplerdescCanary,
    ValidateSamplerdescAnistropicRequiresLinearFiltering,
    ValidateShaderdescCanary,
    ValidateShaderdescVertexSource,
    ValidateShaderdescFragmentSource,
    ValidateShaderdescComputeSource,
    ValidateShaderdescVertexSourceOrBytecode,
    ValidateShaderdescFragmentSourceOrBytecode,
    ValidateShaderdescComputeSourceOrBytecode,
    ValidateShaderdescInvalidShaderCombo,
    ValidateShaderdescNoBytecodeSize,
    ValidateShaderdescMetalThreadsPerThreadgroupInitialized,
    ValidateShaderdescMetalThreadsPerThreadgroupMultiple32,
    ValidateShaderdescUniformblockNoContMembers,
    ValidateShaderdescUniformblockSizeIsZero,
    ValidateShaderdescUniformblockMetalBufferSlotCollision,
    ValidateShaderdescUniformblockHlslRegisterBCollision,
    ValidateShaderdescUniformblockWgslGroup0BindingCollision,
    ValidateShaderdescUniformblockNoMembers,
    ValidateShaderdescUniformblockUniformGlslName,
    ValidateShaderdescUniformblockSizeMismatch,
    ValidateShaderdescUniformblockArrayCount,
    ValidateShaderdescUniformblockStd140ArrayType,
    ValidateShaderdescViewStoragebufferMetalBufferSlotCollision,
    ValidateShaderdescViewStoragebufferHlslRegisterTCollision,
    ValidateShaderdescViewStoragebufferHlslRegisterUCollision,
    ValidateShaderdescViewStoragebufferGlslBindingCollision,
    ValidateShaderdescViewStoragebufferWgslGroup1BindingCollision,
    ValidateShaderdescViewStorageimageExpectComputeStage,
    ValidateShaderdescViewStorageimageMetalTextureSlotCollision,
    ValidateShaderdescViewStorageimageHlslRegisterUCollision,
    ValidateShaderdescViewStorageimageGlslBindingCollision,
    ValidateShaderdescViewStorageimageWgslGroup1BindingCollision,
    ValidateShaderdescViewTextureMetalTextureSlotCollision,
    ValidateShaderdescViewTextureHlslRegisterTCollision,
    ValidateShaderdescViewTextureWgslGroup1BindingCollision,
    ValidateShaderdescSamplerMetalSamplerSlotCollision,
    ValidateShaderdescSamplerHlslRegisterSCollision,
    ValidateShaderdescSamplerWgslGroup1BindingCollision,
    ValidateShaderdescTextureSamplerPairViewSlotOutOfRange,
    ValidateShaderdescTextureSamplerPairSamplerSlotOutOfRange,
    ValidateShaderdescTextureSamplerPairTextureStageMismatch,
    ValidateShaderdescTextureSamplerPairExpectTextureView,
    ValidateShaderdescTextureSamplerPairSamplerStageMismatch,
    ValidateShaderdescTextureSamplerPairGlslName,
    ValidateShaderdescNonfilteringSamplerRequired,
    ValidateShaderdescComparisonSamplerRequired,
    ValidateShaderdescTexviewNotReferencedByTextureSamplerPairs,
    ValidateShaderdescSamplerNotReferencedByTextureSamplerPairs,
    ValidateShaderdescAttrStringTooLong,
    ValidatePipelinedescCanary,
    ValidatePipelinedescShader,
    ValidatePipelinedescComputeShaderExpected,
    ValidatePipelinedescNoComputeShaderExpected,
    ValidatePipelinedescNoContAttrs,
    ValidatePipelinedescAttrBasetypeMismatch,
    ValidatePipelinedescLayoutStride4,
    ValidatePipelinedescAttrSemantics,
    ValidatePipelinedescShaderReadonlyStoragebuffers,
    ValidatePipelinedescBlendopMinmaxRequiresBlendfactorOne,
    ValidateViewdescCanary,
    ValidateViewdescUniqueViewtype,
    ValidateViewdescAnyViewtype,
    ValidateViewdescResourceAlive,
    ValidateViewdescResourceFailed,
    ValidateViewdescStoragebufferOffsetVsBufferSize,
    ValidateViewdescStoragebufferOffsetMultiple256,
    ValidateViewdescStoragebufferUsage,
    ValidateViewdescStorageimageUsage,
    ValidateViewdescColorattachmentUsage,
    ValidateViewdescResolveattachmentUsage,
    ValidateViewdescDepthstencilattachmentUsage,
    ValidateViewdescImageMiplevel,
    ValidateViewdescImage2DSlice,
    ValidateViewdescImageCubemapSlice,
    ValidateViewdescImageArraySlice,
    ValidateViewdescImage3DSlice,
    ValidateViewdescTextureExpectNoMsaa,
    ValidateViewdescTextureMiplevels,
    ValidateViewdescTexture2DSlices,
    ValidateViewdescTextureCubemapSlices,
    ValidateViewdescTextureArraySlices,
    ValidateViewdescTexture3DSlices,
    ValidateViewdescStorageimagePixelformat,
    ValidateViewdescColorattachmentPixelformat,
    ValidateViewdescDepthstencilattachmentPixelformat,
    ValidateViewdescResolveattachmentSamplecount,
    ValidateBeginpassCanary,
    ValidateBeginpassComputepassExpectNoAttachments,
    ValidateBeginpassSwapchainExpectWidth,
    ValidateBeginpassSwapchainExpectWidthNotset,
    ValidateBeginpassSwapchainExpectHeight,
    ValidateBeginpassSwapchainExpectHeightNotset,
    ValidateBeginpassSwapchainExpectSamplecount,
    ValidateBeginpassSwapchainExpectSamplecountNotset,
    ValidateBeginpassSwapchainExpectColorformat,
    ValidateBeginpassSwapchainExpectColorformatNotset,
    ValidateBeginpassSwapchainExpectDepthformatNotset,
    ValidateBeginpassSwapchainMetalExpectCurrentdrawable,
    ValidateBeginpassSwapchainMetalExpectCurrentdrawableNotset,
    ValidateBeginpassSwapchainMetalExpectDepthstenciltexture,
    ValidateBeginpassSwapchainMetalExpectDepthstenciltextureNotset,
    ValidateBeginpassSwapchainMetalExpectMsaacolortexture,
    ValidateBeginpassSwapchainMetalExpectMsaacolortextureNotset,
    ValidateBeginpassSwapchainD3d11ExpectRenderview,
    ValidateBeginpassSwapchainD3d11ExpectRenderviewNotset,
    ValidateBeginpassSwapchainD3d11ExpectResolveview,
    ValidateBeginpassSwapchainD3d11ExpectResolveviewNotset,
    ValidateBeginpassSwapchainD3d11ExpectDepthstencilview,
    ValidateBeginpassSwapchainD3d11ExpectDepthstencilviewNotset,
    ValidateBeginpassSwapchainWgpuExpectRenderview,
    ValidateBeginpassSwapchainWgpuExpectRenderviewNotset,
    ValidateBeginpassSwapchainWgpuExpectResolveview,
    ValidateBeginpassSwapchainWgpuExpectResolveviewNotset,
    ValidateBeginpassSwapchainWgpuExpectDepthstencilview,
    ValidateBeginpassSwapchainWgpuExpectDepthstencilviewNotset,
    ValidateBeginpassSwapchainGlExpectFramebufferNotset,
    ValidateBeginpassColorattachmentviewsContinuous,
    ValidateBeginpassColorattachmentviewAlive,
    ValidateBeginpassColorattachmentviewValid,
    ValidateBeginpassColorattachmentviewType,
    ValidateBeginpassColorattachmentviewImageAlive,
    ValidateBeginpassColorattachmentviewImageValid,
    ValidateBeginpassColorattachmentviewSizes,
    ValidateBeginpassColorattachmentviewSamplecount,
    ValidateBeginpassColorattachmentviewSamplecountsEqual,
    ValidateBeginpassResolveattachmentviewNoColorattachmentview,
    ValidateBeginpassResolveattachmentviewAlive,
    ValidateBeginpassResolveattachmentviewValid,
    ValidateBeginpassResolveattachmentviewType,
    ValidateBeginpassResolveattachmentviewImageAlive,
    ValidateBeginpassResolveattachmentviewImageValid,
    ValidateBeginpassResolveattachmentviewSizes,
    ValidateBeginpassDepthstencilattachmentviewsContinuous,
    ValidateBeginpassDepthstencilattachmentviewAlive,
    ValidateBeginpassDepthstencilattachmentviewValid,
    ValidateBeginpassDepthstencilattachmentviewType,
    ValidateBeginpassDepthstencilattachmentviewImageAlive,
    ValidateBeginpassDepthstencilattachmentviewImageValid,
    ValidateBeginpassDepthstencilattachmentviewSizes,
    ValidateBeginpassDepthstencilattachmentviewSamplecount,
    ValidateBeginpassAttachmentsExpected,
    ValidateAvpRenderpassExpected,
    ValidateAsrRenderpassExpected,
    ValidateApipPipelineValidId,
    ValidateApipPipelineExists,
    ValidateApipPipelineValid,
    ValidateApipPassExpected,
    ValidateApipPipelineShaderAlive,
    ValidateApipPipelineShaderValid,
    ValidateApipComputepassExpected,
    ValidateApipRenderpassExpected,
    ValidateApipSwapchainColorCount,
    ValidateApipSwapchainColorFormat,
    ValidateApipSwapchainDepthFormat,
    ValidateApipSwapchainSampleCount,
    ValidateApipAttachmentsAlive,
    ValidateApipColorattachmentsCount,
    ValidateApipColorattachmentsViewValid,
    ValidateApipColorattachmentsImageValid,
    ValidateApipColorattachmentsFormat,
    ValidateApipDepthstencilattachmentViewValid,
    ValidateApipDepthstencilattachmentImageValid,
    ValidateApipDepthstencilattachmentFormat,
    ValidateApipAttachmentSampleCount,
    ValidateAbndPassExpected,
    ValidateAbndEmptyBindings,
    ValidateAbndNoPipeline,
    ValidateAbndPipelineAlive,
    ValidateAbndPipelineValid,
    ValidateAbndPipelineShaderAlive,
    ValidateAbndPipelineShaderValid,
    ValidateAbndComputeExpectedNoVbufs,
    ValidateAbndComputeExpectedNoIbuf,
    ValidateAbndExpectedVbuf,
    ValidateAbndVbufAlive,
    ValidateAbndVbufUsage,
    ValidateAbndVbufOverflow,
    ValidateAbndExpectedNoIbuf,
    ValidateAbndExpectedIbuf,
    ValidateAbndIbufAlive,
    ValidateAbndIbufUsage,
    ValidateAbndIbufOverflow,
    ValidateAbndExpectedViewBinding,
    ValidateAbndViewAlive,
    ValidateAbndExpectTexview,
    ValidateAbndExpectSbview,
    ValidateAbndExpectSimgview,
    ValidateAbndTexviewImagetypeMismatch,
    ValidateAbndTexviewExpectedMultisampledImage,
    ValidateAbndTexviewExpectedNonMultisampledImage,
    ValidateAbndTexviewExpectedFilterableImage,
    ValidateAbndTexviewExpectedDepthImage,
    ValidateAbndSbviewReadwriteImmutable,
    ValidateAbndSimgviewComputePassExpected,
    ValidateAbndSimgviewImagetypeMismatch,
    ValidateAbndSimgviewAccessformat,
    ValidateAbndExpectedSamplerBinding,
    ValidateAbndUnexpectedSamplerCompareNever,
    ValidateAbndExpectedSamplerCompareNever,
    ValidateAbndExpectedNonfilteringSampler,
    ValidateAbndSamplerAlive,
    ValidateAbndSamplerValid,
    ValidateAbndTextureBindingVsDepthstencilAttachment,
    ValidateAbndTextureBindingVsColorAttachment,
    ValidateAbndTextureBindingVsResolveAttachment,
    ValidateAbndTextureVsStorageimageBinding,
    ValidateAuPassExpected,
    ValidateAuNoPipeline,
    ValidateAuPipelineAlive,
    ValidateAuPipelineValid,
    ValidateAuPipelineShaderAlive,
    ValidateAuPipelineShaderValid,
    ValidateAuNoUniformblockAtSlot,
    ValidateAuSize,
    ValidateDrawRenderpassExpected,
    ValidateDrawBaseelementGeZero,
    ValidateDrawNumelementsGeZero,
    ValidateDrawNuminstancesGeZero,
    ValidateDrawExRenderpassExpected,
    ValidateDrawExBaseelementGeZero,
    ValidateDrawExNumelementsGeZero,
    ValidateDrawExNuminstancesGeZero,
    ValidateDrawExBaseinstanceGeZero,
    ValidateDrawExBasevertexVsIndexed,
    ValidateDrawExBaseinstanceVsInstanced,
    ValidateDrawExBasevertexNotSupported,
    ValidateDrawExBaseinstanceNotSupported,
    ValidateDrawRequiredBindingsOrUniformsMissing,
    ValidateDispatchComputepassExpected,
    ValidateDispatchNumgroupsx,
    ValidateDispatchNumgroupsy,
    ValidateDispatchNumgroupsz,
    ValidateDispatchRequiredBindingsOrUniformsMissing,
    ValidateUpdatebufUsage,
    ValidateUpdatebufSize,
    ValidateUpdatebufOnce,
    ValidateUpdatebufAppend,
    ValidateAppendbufUsage,
    ValidateAppendbufSize,
    ValidateAppendbufUpdate,
    ValidateUpdimgUsage,
    ValidateUpdimgOnce,
    ValidationFailed,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Buffer {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Image {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Sampler {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Shader {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pipeline {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct View {
    pub id: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Range {
    pub ptr: *const c_void,
    pub size: usize,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PixelformatInfo {
    pub sample: bool,
    pub filter: bool,
    pub render: bool,
    pub blend: bool,
    pub msaa: bool,
    pub depth: bool,
    pub compressed: bool,
    pub read: bool,
    pub write: bool,
    pub bytes_per_pixel: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Features {
    pub origin_top_left: bool,
    pub image_clamp_to_border: bool,
    pub mrt_independent_blend_state: bool,
    pub mrt_independent_write_mask: bool,
    pub compute: bool,
    pub msaa_texture_bindings: bool,
    pub separate_buffer_types: bool,
    pub draw_base_vertex: bool,
    pub draw_base_instance: bool,
    pub gl_texture_views: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Limits {
    pub max_image_size_2d: i32,
    pub max_image_size_cube: i32,
    pub max_image_size_3d: i32,
    pub max_image_size_array: i32,
    pub max_image_array_layers: i32,
    pub max_vertex_attrs: i32,
    pub max_color_attachments: i32,
    pub max_texture_bindings_per_stage: i32,
    pub max_storage_buffer_bindings_per_stage: i32,
    pub max_storage_image_bindings_per_stage: i32,
    pub gl_max_vertex_uniform_components: i32,
    pub gl_max_combined_texture_image_units: i32,
    pub d3d11_max_unordered_access_views: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ColorAttachmentAction {
    pub load_action: LoadAction,
    pub store_action: StoreAction,
    pub clear_value: Color,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct DepthAttachmentAction {
    pub load_action: LoadAction,
    pub store_action: StoreAction,
    pub clear_value: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct StencilAttachmentAction {
    pub load_action: LoadAction,
    pub store_action: StoreAction,
    pub clear_value: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PassAction {
    pub colors: [ColorAttachmentAction; 8],
    pub depth: DepthAttachmentAction,
    pub stencil: StencilAttachmentAction,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MetalSwapchain {
    pub current_drawable: *mut c_void,
    pub depth_stencil_texture: *mut c_void,
    pub msaa_color_texture: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11Swapchain {
    pub render_view: *mut c_void,
    pub resolve_view: *mut c_void,
    pub depth_stencil_view: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuSwapchain {
    pub render_view: *mut c_void,
    pub resolve_view: *mut c_void,
    pub depth_stencil_view: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GlSwapchain {
    pub framebuffer: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Swapchain {
    pub width: i32,
    pub height: i32,
    pub sample_count: i32,
    pub color_format: PixelFormat,
    pub depth_format: PixelFormat,
    pub metal: MetalSwapchain,
    pub d3d11: D3d11Swapchain,
    pub wgpu: WgpuSwapchain,
    pub gl: GlSwapchain,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Attachments {
    pub colors: [View; 8],
    pub resolves: [View; 8],
    pub depth_stencil: View,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Pass {
    pub _start_canary: u32,
    pub compute: bool,
    pub action: PassAction,
    pub attachments: Attachments,
    pub swapchain: Swapchain,
    pub label: *const c_char,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Bindings {
    pub _start_canary: u32,
    pub vertex_buffers: [Buffer; 8],
    pub vertex_buffer_offsets: [i32; 8],
    pub index_buffer: Buffer,
    pub index_buffer_offset: i32,
    pub views: [View; 32],
    pub samplers: [Sampler; 12],
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BufferUsage {
    pub vertex_buffer: bool,
    pub index_buffer: bool,
    pub storage_buffer: bool,
    pub immutable: bool,
    pub dynamic_update: bool,
    pub stream_update: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BufferDesc {
    pub _start_canary: u32,
    pub size: usize,
    pub usage: BufferUsage,
    pub data: Range,
    pub label: *const c_char,
    pub gl_buffers: [u32; 2],
    pub mtl_buffers: [*mut c_void; 2],
    pub d3d11_buffer: *mut c_void,
    pub wgpu_buffer: *mut c_void,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageUsage {
    pub storage_image: bool,
    pub color_attachment: bool,
    pub resolve_attachment: bool,
    pub depth_stencil_attachment: bool,
    pub immutable: bool,
    pub dynamic_update: bool,
    pub stream_update: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageData {
    pub mip_levels: [Range; 16],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageDesc {
    pub _start_canary: u32,
    pub r#type: ImageType,
    pub usage: ImageUsage,
    pub width: i32,
    pub height: i32,
    pub num_slices: i32,
    pub num_mipmaps: i32,
    pub pixel_format: PixelFormat,
    pub sample_count: i32,
    pub data: ImageData,
    pub label: *const c_char,
    pub gl_textures: [u32; 2],
    pub gl_texture_target: u32,
    pub mtl_textures: [*mut c_void; 2],
    pub d3d11_texture: *mut c_void,
    pub wgpu_texture: *mut c_void,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SamplerDesc {
    pub _start_canary: u32,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub mipmap_filter: Filter,
    pub wrap_u: Wrap,
    pub wrap_v: Wrap,
    pub wrap_w: Wrap,
    pub min_lod: f32,
    pub max_lod: f32,
    pub border_color: BorderColor,
    pub compare: CompareFunc,
    pub max_anisotropy: u32,
    pub label: *const c_char,
    pub gl_sampler: u32,
    pub mtl_sampler: *mut c_void,
    pub d3d11_sampler: *mut c_void,
    pub wgpu_sampler: *mut c_void,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderFunction {
    pub source: *const c_char,
    pub bytecode: Range,
    pub entry: *const c_char,
    pub d3d11_target: *const c_char,
    pub d3d11_filepath: *const c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderVertexAttr {
    pub base_type: ShaderAttrBaseType,
    pub glsl_name: *const c_char,
    pub hlsl_sem_name: *const c_char,
    pub hlsl_sem_index: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GlslShaderUniform {
    pub r#type: UniformType,
    pub array_count: u16,
    pub glsl_name: *const c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderUniformBlock {
    pub stage: ShaderStage,
    pub size: u32,
    pub hlsl_register_b_n: u8,
    pub msl_buffer_n: u8,
    pub wgsl_group0_binding_n: u8,
    pub layout: UniformLayout,
    pub glsl_uniforms: [GlslShaderUniform; 16],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderTextureView {
    pub stage: ShaderStage,
    pub image_type: ImageType,
    pub sample_type: ImageSampleType,
    pub multisampled: bool,
    pub hlsl_register_t_n: u8,
    pub msl_texture_n: u8,
    pub wgsl_group1_binding_n: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderStorageBufferView {
    pub stage: ShaderStage,
    pub readonly: bool,
    pub hlsl_register_t_n: u8,
    pub hlsl_register_u_n: u8,
    pub msl_buffer_n: u8,
    pub wgsl_group1_binding_n: u8,
    pub glsl_binding_n: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderStorageImageView {
    pub stage: ShaderStage,
    pub image_type: ImageType,
    pub access_format: PixelFormat,
    pub writeonly: bool,
    pub hlsl_register_u_n: u8,
    pub msl_texture_n: u8,
    pub wgsl_group1_binding_n: u8,
    pub glsl_binding_n: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderView {
    pub texture: ShaderTextureView,
    pub storage_buffer: ShaderStorageBufferView,
    pub storage_image: ShaderStorageImageView,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderSampler {
    pub stage: ShaderStage,
    pub sampler_type: SamplerType,
    pub hlsl_register_s_n: u8,
    pub msl_sampler_n: u8,
    pub wgsl_group1_binding_n: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderTextureSamplerPair {
    pub stage: ShaderStage,
    pub view_slot: u8,
    pub sampler_slot: u8,
    pub glsl_name: *const c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct MtlShaderThreadsPerThreadgroup {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderDesc {
    pub _start_canary: u32,
    pub vertex_func: ShaderFunction,
    pub fragment_func: ShaderFunction,
    pub compute_func: ShaderFunction,
    pub attrs: [ShaderVertexAttr; 16],
    pub uniform_blocks: [ShaderUniformBlock; 8],
    pub views: [ShaderView; 32],
    pub samplers: [ShaderSampler; 12],
    pub texture_sampler_pairs: [ShaderTextureSamplerPair; 32],
    pub mtl_threads_per_threadgroup: MtlShaderThreadsPerThreadgroup,
    pub label: *const c_char,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct VertexBufferLayoutState {
    pub stride: i32,
    pub step_func: VertexStep,
    pub step_rate: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct VertexAttrState {
    pub buffer_index: i32,
    pub offset: i32,
    pub format: VertexFormat,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct VertexLayoutState {
    pub buffers: [VertexBufferLayoutState; 8],
    pub attrs: [VertexAttrState; 16],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct StencilFaceState {
    pub compare: CompareFunc,
    pub fail_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub pass_op: StencilOp,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct StencilState {
    pub enabled: bool,
    pub front: StencilFaceState,
    pub back: StencilFaceState,
    pub read_mask: u8,
    pub write_mask: u8,
    pub r#ref: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct DepthState {
    pub pixel_format: PixelFormat,
    pub compare: CompareFunc,
    pub write_enabled: bool,
    pub bias: f32,
    pub bias_slope_scale: f32,
    pub bias_clamp: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BlendState {
    pub enabled: bool,
    pub src_factor_rgb: BlendFactor,
    pub dst_factor_rgb: BlendFactor,
    pub op_rgb: BlendOp,
    pub src_factor_alpha: BlendFactor,
    pub dst_factor_alpha: BlendFactor,
    pub op_alpha: BlendOp,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ColorTargetState {
    pub pixel_format: PixelFormat,
    pub write_mask: ColorMask,
    pub blend: BlendState,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PipelineDesc {
    pub _start_canary: u32,
    pub compute: bool,
    pub shader: Shader,
    pub layout: VertexLayoutState,
    pub depth: DepthState,
    pub stencil: StencilState,
    pub color_count: i32,
    pub colors: [ColorTargetState; 8],
    pub primitive_type: PrimitiveType,
    pub index_type: IndexType,
    pub cull_mode: CullMode,
    pub face_winding: FaceWinding,
    pub sample_count: i32,
    pub blend_color: Color,
    pub alpha_to_coverage_enabled: bool,
    pub label: *const c_char,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BufferViewDesc {
    pub buffer: Buffer,
    pub offset: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageViewDesc {
    pub image: Image,
    pub mip_level: i32,
    pub slice: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct TextureViewRange {
    pub base: i32,
    pub count: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct TextureViewDesc {
    pub image: Image,
    pub mip_levels: TextureViewRange,
    pub slices: TextureViewRange,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ViewDesc {
    pub _start_canary: u32,
    pub texture: TextureViewDesc,
    pub storage_buffer: BufferViewDesc,
    pub storage_image: ImageViewDesc,
    pub color_attachment: ImageViewDesc,
    pub resolve_attachment: ImageViewDesc,
    pub depth_stencil_attachment: ImageViewDesc,
    pub label: *const c_char,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SlotInfo {
    pub state: ResourceState,
    pub res_id: u32,
    pub uninit_count: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct BufferInfo {
    pub slot: SlotInfo,
    pub update_frame_index: u32,
    pub append_frame_index: u32,
    pub append_pos: i32,
    pub append_overflow: bool,
    pub num_slots: i32,
    pub active_slot: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ImageInfo {
    pub slot: SlotInfo,
    pub upd_frame_index: u32,
    pub num_slots: i32,
    pub active_slot: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SamplerInfo {
    pub slot: SlotInfo,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ShaderInfo {
    pub slot: SlotInfo,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PipelineInfo {
    pub slot: SlotInfo,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ViewInfo {
    pub slot: SlotInfo,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsGl {
    pub num_bind_buffer: u32,
    pub num_active_texture: u32,
    pub num_bind_texture: u32,
    pub num_bind_sampler: u32,
    pub num_bind_image_texture: u32,
    pub num_use_program: u32,
    pub num_render_state: u32,
    pub num_vertex_attrib_pointer: u32,
    pub num_vertex_attrib_divisor: u32,
    pub num_enable_vertex_attrib_array: u32,
    pub num_disable_vertex_attrib_array: u32,
    pub num_uniform: u32,
    pub num_memory_barriers: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsD3d11Pass {
    pub num_om_set_render_targets: u32,
    pub num_clear_render_target_view: u32,
    pub num_clear_depth_stencil_view: u32,
    pub num_resolve_subresource: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsD3d11Pipeline {
    pub num_rs_set_state: u32,
    pub num_om_set_depth_stencil_state: u32,
    pub num_om_set_blend_state: u32,
    pub num_ia_set_primitive_topology: u32,
    pub num_ia_set_input_layout: u32,
    pub num_vs_set_shader: u32,
    pub num_vs_set_constant_buffers: u32,
    pub num_ps_set_shader: u32,
    pub num_ps_set_constant_buffers: u32,
    pub num_cs_set_shader: u32,
    pub num_cs_set_constant_buffers: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsD3d11Bindings {
    pub num_ia_set_vertex_buffers: u32,
    pub num_ia_set_index_buffer: u32,
    pub num_vs_set_shader_resources: u32,
    pub num_vs_set_samplers: u32,
    pub num_ps_set_shader_resources: u32,
    pub num_ps_set_samplers: u32,
    pub num_cs_set_shader_resources: u32,
    pub num_cs_set_samplers: u32,
    pub num_cs_set_unordered_access_views: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsD3d11Uniforms {
    pub num_update_subresource: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsD3d11Draw {
    pub num_draw_indexed_instanced: u32,
    pub num_draw_indexed: u32,
    pub num_draw_instanced: u32,
    pub num_draw: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsD3d11 {
    pub pass: FrameStatsD3d11Pass,
    pub pipeline: FrameStatsD3d11Pipeline,
    pub bindings: FrameStatsD3d11Bindings,
    pub uniforms: FrameStatsD3d11Uniforms,
    pub draw: FrameStatsD3d11Draw,
    pub num_map: u32,
    pub num_unmap: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsMetalIdpool {
    pub num_added: u32,
    pub num_released: u32,
    pub num_garbage_collected: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsMetalPipeline {
    pub num_set_blend_color: u32,
    pub num_set_cull_mode: u32,
    pub num_set_front_facing_winding: u32,
    pub num_set_stencil_reference_value: u32,
    pub num_set_depth_bias: u32,
    pub num_set_render_pipeline_state: u32,
    pub num_set_depth_stencil_state: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsMetalBindings {
    pub num_set_vertex_buffer: u32,
    pub num_set_vertex_buffer_offset: u32,
    pub num_skip_redundant_vertex_buffer: u32,
    pub num_set_vertex_texture: u32,
    pub num_skip_redundant_vertex_texture: u32,
    pub num_set_vertex_sampler_state: u32,
    pub num_skip_redundant_vertex_sampler_state: u32,
    pub num_set_fragment_buffer: u32,
    pub num_set_fragment_buffer_offset: u32,
    pub num_skip_redundant_fragment_buffer: u32,
    pub num_set_fragment_texture: u32,
    pub num_skip_redundant_fragment_texture: u32,
    pub num_set_fragment_sampler_state: u32,
    pub num_skip_redundant_fragment_sampler_state: u32,
    pub num_set_compute_buffer: u32,
    pub num_set_compute_buffer_offset: u32,
    pub num_skip_redundant_compute_buffer: u32,
    pub num_set_compute_texture: u32,
    pub num_skip_redundant_compute_texture: u32,
    pub num_set_compute_sampler_state: u32,
    pub num_skip_redundant_compute_sampler_state: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsMetalUniforms {
    pub num_set_vertex_buffer_offset: u32,
    pub num_set_fragment_buffer_offset: u32,
    pub num_set_compute_buffer_offset: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsMetal {
    pub idpool: FrameStatsMetalIdpool,
    pub pipeline: FrameStatsMetalPipeline,
    pub bindings: FrameStatsMetalBindings,
    pub uniforms: FrameStatsMetalUniforms,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsWgpuUniforms {
    pub num_set_bindgroup: u32,
    pub size_write_buffer: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsWgpuBindings {
    pub num_set_vertex_buffer: u32,
    pub num_skip_redundant_vertex_buffer: u32,
    pub num_set_index_buffer: u32,
    pub num_skip_redundant_index_buffer: u32,
    pub num_create_bindgroup: u32,
    pub num_discard_bindgroup: u32,
    pub num_set_bindgroup: u32,
    pub num_skip_redundant_bindgroup: u32,
    pub num_bindgroup_cache_hits: u32,
    pub num_bindgroup_cache_misses: u32,
    pub num_bindgroup_cache_collisions: u32,
    pub num_bindgroup_cache_invalidates: u32,
    pub num_bindgroup_cache_hash_vs_key_mismatch: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStatsWgpu {
    pub uniforms: FrameStatsWgpuUniforms,
    pub bindings: FrameStatsWgpuBindings,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ResourceStats {
    pub total_alive: u32,
    pub total_free: u32,
    pub allocated: u32,
    pub deallocated: u32,
    pub inited: u32,
    pub uninited: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FrameStats {
    pub frame_index: u32,
    pub num_passes: u32,
    pub num_apply_viewport: u32,
    pub num_apply_scissor_rect: u32,
    pub num_apply_pipeline: u32,
    pub num_apply_bindings: u32,
    pub num_apply_uniforms: u32,
    pub num_draw: u32,
    pub num_draw_ex: u32,
    pub num_dispatch: u32,
    pub num_update_buffer: u32,
    pub num_append_buffer: u32,
    pub num_update_image: u32,
    pub size_apply_uniforms: u32,
    pub size_update_buffer: u32,
    pub size_append_buffer: u32,
    pub size_update_image: u32,
    pub buffers: ResourceStats,
    pub images: ResourceStats,
    pub samplers: ResourceStats,
    pub views: ResourceStats,
    pub shaders: ResourceStats,
    pub pipelines: ResourceStats,
    pub gl: FrameStatsGl,
    pub d3d11: FrameStatsD3d11,
    pub metal: FrameStatsMetal,
    pub wgpu: FrameStatsWgpu,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct EnvironmentDefaults {
    pub color_format: PixelFormat,
    pub depth_format: PixelFormat,
    pub sample_count: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MetalEnvironment {
    pub device: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11Environment {
    pub device: *mut c_void,
    pub device_context: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuEnvironment {
    pub device: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Environment {
    pub defaults: EnvironmentDefaults,
    pub metal: MetalEnvironment,
    pub d3d11: D3d11Environment,
    pub wgpu: WgpuEnvironment,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CommitListener {
    pub func: Option<unsafe extern "C" fn(*mut c_void)>,
    pub user_data: *mut c_void,
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
    pub _start_canary: u32,
    pub buffer_pool_size: i32,
    pub image_pool_size: i32,
    pub sampler_pool_size: i32,
    pub shader_pool_size: i32,
    pub pipeline_pool_size: i32,
    pub view_pool_size: i32,
    pub uniform_buffer_size: i32,
    pub max_commit_listeners: i32,
    pub disable_validation: bool,
    pub enforce_portable_limits: bool,
    pub d3d11_shader_debugging: bool,
    pub mtl_force_managed_storage_mode: bool,
    pub mtl_use_command_buffer_with_retained_references: bool,
    pub wgpu_disable_bindgroups_cache: bool,
    pub wgpu_bindgroups_cache_size: i32,
    pub allocator: Allocator,
    pub logger: Logger,
    pub environment: Environment,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11BufferInfo {
    pub buf: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11ImageInfo {
    pub tex2d: *mut c_void,
    pub tex3d: *mut c_void,
    pub res: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11SamplerInfo {
    pub smp: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11ShaderInfo {
    pub cbufs: [*mut c_void; 8],
    pub vs: *mut c_void,
    pub fs: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11PipelineInfo {
    pub il: *mut c_void,
    pub rs: *mut c_void,
    pub dss: *mut c_void,
    pub bs: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct D3d11ViewInfo {
    pub srv: *mut c_void,
    pub uav: *mut c_void,
    pub rtv: *mut c_void,
    pub dsv: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MtlBufferInfo {
    pub buf: [*mut c_void; 2],
    pub active_slot: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MtlImageInfo {
    pub tex: [*mut c_void; 2],
    pub active_slot: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MtlSamplerInfo {
    pub smp: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MtlShaderInfo {
    pub vertex_lib: *mut c_void,
    pub fragment_lib: *mut c_void,
    pub vertex_func: *mut c_void,
    pub fragment_func: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct MtlPipelineInfo {
    pub rps: *mut c_void,
    pub dss: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuBufferInfo {
    pub buf: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuImageInfo {
    pub tex: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuSamplerInfo {
    pub smp: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuShaderInfo {
    pub vs_mod: *mut c_void,
    pub fs_mod: *mut c_void,
    pub bgl: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuPipelineInfo {
    pub render_pipeline: *mut c_void,
    pub compute_pipeline: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct WgpuViewInfo {
    pub view: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GlBufferInfo {
    pub buf: [u32; 2],
    pub active_slot: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GlImageInfo {
    pub tex: [u32; 2],
    pub tex_target: u32,
    pub active_slot: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GlSamplerInfo {
    pub smp: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GlShaderInfo {
    pub prog: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GlViewInfo {
    pub tex_view: [u32; 2],
    pub msaa_render_buffer: u32,
    pub msaa_resolve_frame_buffer: u32,
}

impl_handle!(Buffer, Image, Sampler, Shader, Pipeline, View);
zeroed_default!(
    Range, PixelformatInfo, Features, ColorAttachmentAction, DepthAttachmentAction,
    StencilAttachmentAction, PassAction, MetalSwapchain, D3d11Swapchain, WgpuSwapchain, Swapchain,
    Attachments, Pass, Bindings, BufferUsage, BufferDesc, ImageUsage, ImageData, ImageDesc,
    SamplerDesc, ShaderFunction, ShaderVertexAttr, GlslShaderUniform, ShaderUniformBlock,
    ShaderTextureView, ShaderStorageBufferView, ShaderStorageImageView, ShaderView, ShaderSampler,
    ShaderTextureSamplerPair, ShaderDesc, VertexBufferLayoutState, VertexAttrState,
    VertexLayoutState, StencilFaceState, StencilState, DepthState, BlendState, ColorTargetState,
    PipelineDesc, BufferViewDesc, ImageViewDesc, TextureViewDesc, ViewDesc, SlotInfo, BufferInfo,
    ImageInfo, SamplerInfo, ShaderInfo, PipelineInfo, ViewInfo, EnvironmentDefaults,
    MetalEnvironment, D3d11Environment, WgpuEnvironment, Environment, CommitListener, Allocator,
    Logger, Desc, D3d11BufferInfo, D3d11ImageInfo, D3d11SamplerInfo, D3d11ShaderInfo,
    D3d11PipelineInfo, D3d11ViewInfo, MtlBufferInfo, MtlImageInfo, MtlSamplerInfo, MtlShaderInfo,
    MtlPipelineInfo, WgpuBufferInfo, WgpuImageInfo, WgpuSamplerInfo, WgpuShaderInfo,
    WgpuPipelineInfo, WgpuViewInfo,
);

impl_range!(Range);
impl_bridged_logger!(Logger);

/// RGBA color, `sg_color`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
}

/// Opaque black, not the zero value: zero-initialised descriptors hold a
/// transparent black instead.
impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Slices shorter than 4 fall back to opaque black; extra elements are ignored.
impl From<&[f32]> for Color {
    fn from(values: &[f32]) -> Self {
        match values {
            [r, g, b, a, ..] => Self::rgba(*r, *g, *b, *a),
            _ => Self::default(),
        }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::sg_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::sg_shutdown() }
}

pub fn isvalid() -> bool {
    unsafe { ffi::sg_isvalid() }
}

pub fn reset_state_cache() {
    unsafe { ffi::sg_reset_state_cache() }
}

pub fn push_debug_group(name: &str) {
    let name = CStrArg::new(name);
    unsafe { ffi::sg_push_debug_group(name.as_ptr()) }
}

pub fn pop_debug_group() {
    unsafe { ffi::sg_pop_debug_group() }
}

pub fn add_commit_listener(listener: CommitListener) -> bool {
    unsafe { ffi::sg_add_commit_listener(listener) }
}

pub fn remove_commit_listener(listener: CommitListener) -> bool {
    unsafe { ffi::sg_remove_commit_listener(listener) }
}

crate::dispatch::handle! {
    pub fn make_buffer(desc: &BufferDesc) -> Buffer => sg_make_buffer / sg_make_buffer_id;
    pub fn make_image(desc: &ImageDesc) -> Image => sg_make_image / sg_make_image_id;
    pub fn make_sampler(desc: &SamplerDesc) -> Sampler => sg_make_sampler / sg_make_sampler_id;
    pub fn make_shader(desc: &ShaderDesc) -> Shader => sg_make_shader / sg_make_shader_id;
    pub fn make_pipeline(desc: &PipelineDesc) -> Pipeline => sg_make_pipeline / sg_make_pipeline_id;
    pub fn make_view(desc: &ViewDesc) -> View => sg_make_view / sg_make_view_id;
}

pub fn destroy_buffer(buf: Buffer) {
    unsafe { ffi::sg_destroy_buffer(buf) }
}

pub fn destroy_image(img: Image) {
    unsafe { ffi::sg_destroy_image(img) }
}

pub fn destroy_sampler(smp: Sampler) {
    unsafe { ffi::sg_destroy_sampler(smp) }
}

pub fn destroy_shader(shd: Shader) {
    unsafe { ffi::sg_destroy_shader(shd) }
}

pub fn destroy_pipeline(pip: Pipeline) {
    unsafe { ffi::sg_destroy_pipeline(pip) }
}

pub fn destroy_view(view: View) {
    unsafe { ffi::sg_destroy_view(view) }
}

pub fn update_buffer(buf: Buffer, data: &Range) {
    unsafe { ffi::sg_update_buffer(buf, data) }
}

pub fn update_image(img: Image, data: &ImageData) {
    unsafe { ffi::sg_update_image(img, data) }
}

pub fn append_buffer(buf: Buffer, data: &Range) -> i32 {
    unsafe { ffi::sg_append_buffer(buf, data) }
}

pub fn query_buffer_overflow(buf: Buffer) -> bool {
    unsafe { ffi::sg_query_buffer_overflow(buf) }
}

pub fn query_buffer_will_overflow(buf: Buffer, size: usize) -> bool {
    unsafe { ffi::sg_query_buffer_will_overflow(buf, size) }
}

pub fn begin_pass(pass: &Pass) {
    unsafe { ffi::sg_begin_pass(pass) }
}

pub fn apply_viewport(x: i32, y: i32, width: i32, height: i32, origin_top_left: bool) {
    unsafe { ffi::sg_apply_viewport(x, y, width, height, origin_top_left) }
}

pub fn apply_viewportf(x: f32, y: f32, width: f32, height: f32, origin_top_left: bool) {
    unsafe { ffi::sg_apply_viewportf(x, y, width, height, origin_top_left) }
}

pub fn apply_scissor_rect(x: i32, y: i32, width: i32, height: i32, origin_top_left: bool) {
    unsafe { ffi::sg_apply_scissor_rect(x, y, width, height, origin_top_left) }
}

pub fn apply_scissor_rectf(x: f32, y: f32, width: f32, height: f32, origin_top_left: bool) {
    unsafe { ffi::sg_apply_scissor_rectf(x, y, width, height, origin_top_left) }
}

pub fn apply_pipeline(pip: Pipeline) {
    unsafe { ffi::sg_apply_pipeline(pip) }
}

pub fn apply_bindings(bindings: &Bindings) {
    unsafe { ffi::sg_apply_bindings(bindings) }
}

pub fn apply_uniforms(ub_slot: i32, data: &Range) {
    unsafe { ffi::sg_apply_uniforms(ub_slot, data) }
}

pub fn draw(base_element: u32, num_elements: u32, num_instances: u32) {
    unsafe { ffi::sg_draw(base_element, num_elements, num_instances) }
}

pub fn draw_ex(
    base_element: i32,
    num_elements: i32,
    num_instances: i32,
    base_vertex: i32,
    base_instance: i32,
) {
    unsafe {
        ffi::sg_draw_ex(base_element, num_elements, num_instances, base_vertex, base_instance)
    }
}

pub fn dispatch(num_groups_x: i32, num_groups_y: i32, num_groups_z: i32) {
    unsafe { ffi::sg_dispatch(num_groups_x, num_groups_y, num_groups_z) }
}

pub fn end_pass() {
    unsafe { ffi::sg_end_pass() }
}

pub fn commit() {
    unsafe { ffi::sg_commit() }
}

crate::dispatch::aggregate! {
    pub fn query_desc() -> Desc => sg_query_desc / sg_query_desc_internal;
}

pub fn query_backend() -> Backend {
    unsafe { ffi::sg_query_backend() }
}

crate::dispatch::aggregate! {
    pub fn query_features() -> Features => sg_query_features / sg_query_features_internal;
    pub fn query_limits() -> Limits => sg_query_limits / sg_query_limits_internal;
    pub fn query_pixelformat(fmt: PixelFormat) -> PixelformatInfo
        => sg_query_pixelformat / sg_query_pixelformat_internal;
}

pub fn query_row_pitch(fmt: PixelFormat, width: i32, row_align_bytes: i32) -> i32 {
    unsafe { ffi::sg_query_row_pitch(fmt, width, row_align_bytes) }
}

pub fn query_surface_pitch(fmt: PixelFormat, width: i32, height: i32, row_align_bytes: i32) -> i32 {
    unsafe { ffi::sg_query_surface_pitch(fmt, width, height, row_align_bytes) }
}

pub fn query_buffer_state(buf: Buffer) -> ResourceState {
    unsafe { ffi::sg_query_buffer_state(buf) }
}

pub fn query_image_state(img: Image) -> ResourceState {
    unsafe { ffi::sg_query_image_state(img) }
}

pub fn query_sampler_state(smp: Sampler) -> ResourceState {
    unsafe { ffi::sg_query_sampler_state(smp) }
}

pub fn query_shader_state(shd: Shader) -> ResourceState {
    unsafe { ffi::sg_query_shader_state(shd) }
}

pub fn query_pipeline_state(pip: Pipeline) -> ResourceState {
    unsafe { ffi::sg_query_pipeline_state(pip) }
}

pub fn query_view_state(view: View) -> ResourceState {
    unsafe { ffi::sg_query_view_state(view) }
}

crate::dispatch::aggregate! {
    pub fn query_buffer_info(buf: Buffer) -> BufferInfo
        => sg_query_buffer_info / sg_query_buffer_info_internal;
    pub fn query_image_info(img: Image) -> ImageInfo
        => sg_query_image_info / sg_query_image_info_internal;
    pub fn query_sampler_info(smp: Sampler) -> SamplerInfo
        => sg_query_sampler_info / sg_query_sampler_info_internal;
    pub fn query_shader_info(shd: Shader) -> ShaderInfo
        => sg_query_shader_info / sg_query_shader_info_internal;
    pub fn query_pipeline_info(pip: Pipeline) -> PipelineInfo
        => sg_query_pipeline_info / sg_query_pipeline_info_internal;
    pub fn query_view_info(view: View) -> ViewInfo
        => sg_query_view_info / sg_query_view_info_internal;
    pub fn query_buffer_desc(buf: Buffer) -> BufferDesc
        => sg_query_buffer_desc / sg_query_buffer_desc_internal;
    pub fn query_image_desc(img: Image) -> ImageDesc
        => sg_query_image_desc / sg_query_image_desc_internal;
    pub fn query_sampler_desc(smp: Sampler) -> SamplerDesc
        => sg_query_sampler_desc / sg_query_sampler_desc_internal;
    pub fn query_shader_desc(shd: Shader) -> ShaderDesc
        => sg_query_shader_desc / sg_query_shader_desc_internal;
    pub fn query_pipeline_desc(pip: Pipeline) -> PipelineDesc
        => sg_query_pipeline_desc / sg_query_pipeline_desc_internal;
    pub fn query_view_desc(view: View) -> ViewDesc
        => sg_query_view_desc / sg_query_view_desc_internal;
    pub fn query_buffer_defaults(desc: &BufferDesc) -> BufferDesc
        => sg_query_buffer_defaults / sg_query_buffer_defaults_internal;
    pub fn query_image_defaults(desc: &ImageDesc) -> ImageDesc
        => sg_query_image_defaults / sg_query_image_defaults_internal;
    pub fn query_sampler_defaults(desc: &SamplerDesc) -> SamplerDesc
        => sg_query_sampler_defaults / sg_query_sampler_defaults_internal;
    pub fn query_shader_defaults(desc: &ShaderDesc) -> ShaderDesc
        => sg_query_shader_defaults / sg_query_shader_defaults_internal;
    pub fn query_pipeline_defaults(desc: &PipelineDesc) -> PipelineDesc
        => sg_query_pipeline_defaults / sg_query_pipeline_defaults_internal;
    pub fn query_view_defaults(desc: &ViewDesc) -> ViewDesc
        => sg_query_view_defaults / sg_query_view_defaults_internal;
}

pub fn query_buffer_size(buf: Buffer) -> usize {
    unsafe { ffi::sg_query_buffer_size(buf) }
}

crate::dispatch::aggregate! {
    pub fn query_buffer_usage(buf: Buffer) -> BufferUsage
        => sg_query_buffer_usage / sg_query_buffer_usage_internal;
}

pub fn query_image_type(img: Image) -> ImageType {
    unsafe { ffi::sg_query_image_type(img) }
}

pub fn query_image_width(img: Image) -> i32 {
    unsafe { ffi::sg_query_image_width(img) }
}

pub fn query_image_height(img: Image) -> i32 {
    unsafe { ffi::sg_query_image_height(img) }
}

pub fn query_image_num_slices(img: Image) -> i32 {
    unsafe { ffi::sg_query_image_num_slices(img) }
}

pub fn query_image_num_mipmaps(img: Image) -> i32 {
    unsafe { ffi::sg_query_image_num_mipmaps(img) }
}

pub fn query_image_pixelformat(img: Image) -> PixelFormat {
    unsafe { ffi::sg_query_image_pixelformat(img) }
}

crate::dispatch::aggregate! {
    pub fn query_image_usage(img: Image) -> ImageUsage
        => sg_query_image_usage / sg_query_image_usage_internal;
}

pub fn query_image_sample_count(img: Image) -> i32 {
    unsafe { ffi::sg_query_image_sample_count(img) }
}

pub fn query_view_type(view: View) -> ViewType {
    unsafe { ffi::sg_query_view_type(view) }
}

crate::dispatch::aggregate! {
    pub fn query_view_image(view: View) -> Image
        => sg_query_view_image / sg_query_view_image_internal;
    pub fn query_view_buffer(view: View) -> Buffer
        => sg_query_view_buffer / sg_query_view_buffer_internal;
}

crate::dispatch::handle! {
    pub fn alloc_buffer() -> Buffer => sg_alloc_buffer / sg_alloc_buffer_id;
    pub fn alloc_image() -> Image => sg_alloc_image / sg_alloc_image_id;
    pub fn alloc_sampler() -> Sampler => sg_alloc_sampler / sg_alloc_sampler_id;
    pub fn alloc_shader() -> Shader => sg_alloc_shader / sg_alloc_shader_id;
    pub fn alloc_pipeline() -> Pipeline => sg_alloc_pipeline / sg_alloc_pipeline_id;
    pub fn alloc_view() -> View => sg_alloc_view / sg_alloc_view_id;
}

pub fn dealloc_buffer(buf: Buffer) {
    unsafe { ffi::sg_dealloc_buffer(buf) }
}

pub fn dealloc_image(img: Image) {
    unsafe { ffi::sg_dealloc_image(img) }
}

pub fn dealloc_sampler(smp: Sampler) {
    unsafe { ffi::sg_dealloc_sampler(smp) }
}

pub fn dealloc_shader(shd: Shader) {
    unsafe { ffi::sg_dealloc_shader(shd) }
}

pub fn dealloc_pipeline(pip: Pipeline) {
    unsafe { ffi::sg_dealloc_pipeline(pip) }
}

pub fn dealloc_view(view: View) {
    unsafe { ffi::sg_dealloc_view(view) }
}

pub fn init_buffer(buf: Buffer, desc: &BufferDesc) {
    unsafe { ffi::sg_init_buffer(buf, desc) }
}

pub fn init_image(img: Image, desc: &ImageDesc) {
    unsafe { ffi::sg_init_image(img, desc) }
}

pub fn init_sampler(smg: Sampler, desc: &SamplerDesc) {
    unsafe { ffi::sg_init_sampler(smg, desc) }
}

pub fn init_shader(shd: Shader, desc: &ShaderDesc) {
    unsafe { ffi::sg_init_shader(shd, desc) }
}

pub fn init_pipeline(pip: Pipeline, desc: &PipelineDesc) {
    unsafe { ffi::sg_init_pipeline(pip, desc) }
}

pub fn init_view(view: View, desc: &ViewDesc) {
    unsafe { ffi::sg_init_view(view, desc) }
}

pub fn uninit_buffer(buf: Buffer) {
    unsafe { ffi::sg_uninit_buffer(buf) }
}

pub fn uninit_image(img: Image) {
    unsafe { ffi::sg_uninit_image(img) }
}

pub fn uninit_sampler(smp: Sampler) {
    unsafe { ffi::sg_uninit_sampler(smp) }
}

pub fn uninit_shader(shd: Shader) {
    unsafe { ffi::sg_uninit_shader(shd) }
}

pub fn uninit_pipeline(pip: Pipeline) {
    unsafe { ffi::sg_uninit_pipeline(pip) }
}

pub fn uninit_view(view: View) {
    unsafe { ffi::sg_uninit_view(view) }
}

pub fn fail_buffer(buf: Buffer) {
    unsafe { ffi::sg_fail_buffer(buf) }
}

pub fn fail_image(img: Image) {
    unsafe { ffi::sg_fail_image(img) }
}

pub fn fail_sampler(smp: Sampler) {
    unsafe { ffi::sg_fail_sampler(smp) }
}

pub fn fail_shader(shd: Shader) {
    unsafe { ffi::sg_fail_shader(shd) }
}

pub fn fail_pipeline(pip: Pipeline) {
    unsafe { ffi::sg_fail_pipeline(pip) }
}

pub fn fail_view(view: View) {
    unsafe { ffi::sg_fail_view(view) }
}

pub fn enable_frame_stats() {
    unsafe { ffi::sg_enable_frame_stats() }
}

pub fn disable_frame_stats() {
    unsafe { ffi::sg_disable_frame_stats() }
}

pub fn frame_stats_enabled() -> bool {
    unsafe { ffi::sg_frame_stats_enabled() }
}

crate::dispatch::aggregate! {
    pub fn query_frame_stats() -> FrameStats
        => sg_query_frame_stats / sg_query_frame_stats_internal;
}

pub fn d3d11_device() -> *mut c_void {
    unsafe { ffi::sg_d3d11_device() }
}

pub fn d3d11_device_context() -> *mut c_void {
    unsafe { ffi::sg_d3d11_device_context() }
}

crate::dispatch::aggregate! {
    pub fn d3d11_query_buffer_info(buf: Buffer) -> D3d11BufferInfo
        => sg_d3d11_query_buffer_info / sg_d3d11_query_buffer_info_internal;
    pub fn d3d11_query_image_info(img: Image) -> D3d11ImageInfo
        => sg_d3d11_query_image_info / sg_d3d11_query_image_info_internal;
    pub fn d3d11_query_sampler_info(smp: Sampler) -> D3d11SamplerInfo
        => sg_d3d11_query_sampler_info / sg_d3d11_query_sampler_info_internal;
    pub fn d3d11_query_shader_info(shd: Shader) -> D3d11ShaderInfo
        => sg_d3d11_query_shader_info / sg_d3d11_query_shader_info_internal;
    pub fn d3d11_query_pipeline_info(pip: Pipeline) -> D3d11PipelineInfo
        => sg_d3d11_query_pipeline_info / sg_d3d11_query_pipeline_info_internal;
    pub fn d3d11_query_view_info(view: View) -> D3d11ViewInfo
        => sg_d3d11_query_view_info / sg_d3d11_query_view_info_internal;
}

pub fn mtl_device() -> *mut c_void {
    unsafe { ffi::sg_mtl_device() }
}

pub fn mtl_render_command_encoder() -> *mut c_void {
    unsafe { ffi::sg_mtl_render_command_encoder() }
}

pub fn mtl_compute_command_encoder() -> *mut c_void {
    unsafe { ffi::sg_mtl_compute_command_encoder() }
}

crate::dispatch::aggregate! {
    pub fn mtl_query_buffer_info(buf: Buffer) -> MtlBufferInfo
        => sg_mtl_query_buffer_info / sg_mtl_query_buffer_info_internal;
    pub fn mtl_query_image_info(img: Image) -> MtlImageInfo
        => sg_mtl_query_image_info / sg_mtl_query_image_info_internal;
    pub fn mtl_query_sampler_info(smp: Sampler) -> MtlSamplerInfo
        => sg_mtl_query_sampler_info / sg_mtl_query_sampler_info_internal;
    pub fn mtl_query_shader_info(shd: Shader) -> MtlShaderInfo
        => sg_mtl_query_shader_info / sg_mtl_query_shader_info_internal;
    pub fn mtl_query_pipeline_info(pip: Pipeline) -> MtlPipelineInfo
        => sg_mtl_query_pipeline_info / sg_mtl_query_pipeline_info_internal;
}

pub fn wgpu_device() -> *mut c_void {
    unsafe { ffi::sg_wgpu_device() }
}

pub fn wgpu_queue() -> *mut c_void {
    unsafe { ffi::sg_wgpu_queue() }
}

pub fn wgpu_command_encoder() -> *mut c_void {
    unsafe { ffi::sg_wgpu_command_encoder() }
}

pub fn wgpu_render_pass_encoder() -> *mut c_void {
    unsafe { ffi::sg_wgpu_render_pass_encoder() }
}

pub fn wgpu_compute_pass_encoder() -> *mut c_void {
    unsafe { ffi::sg_wgpu_compute_pass_encoder() }
}

crate::dispatch::aggregate! {
    pub fn wgpu_query_buffer_info(buf: Buffer) -> WgpuBufferInfo
        => sg_wgpu_query_buffer_info / sg_wgpu_query_buffer_info_internal;
    pub fn wgpu_query_image_info(img: Image) -> WgpuImageInfo
        => sg_wgpu_query_image_info / sg_wgpu_query_image_info_internal;
    pub fn wgpu_query_sampler_info(smp: Sampler) -> WgpuSamplerInfo
        => sg_wgpu_query_sampler_info / sg_wgpu_query_sampler_info_internal;
    pub fn wgpu_query_shader_info(shd: Shader) -> WgpuShaderInfo
        => sg_wgpu_query_shader_info / sg_wgpu_query_shader_info_internal;
    pub fn wgpu_query_pipeline_info(pip: Pipeline) -> WgpuPipelineInfo
        => sg_wgpu_query_pipeline_info / sg_wgpu_query_pipeline_info_internal;
    pub fn wgpu_query_view_info(view: View) -> WgpuViewInfo
        => sg_wgpu_query_view_info / sg_wgpu_query_view_info_internal;
    pub fn gl_query_buffer_info(buf: Buffer) -> GlBufferInfo
        => sg_gl_query_buffer_info / sg_gl_query_buffer_info_internal;
    pub fn gl_query_image_info(img: Image) -> GlImageInfo
        => sg_gl_query_image_info / sg_gl_query_image_info_internal;
    pub fn gl_query_sampler_info(smp: Sampler) -> GlSamplerInfo
        => sg_gl_query_sampler_info / sg_gl_query_sampler_info_internal;
    pub fn gl_query_shader_info(shd: Shader) -> GlShaderInfo
        => sg_gl_query_shader_info / sg_gl_query_shader_info_internal;
    pub fn gl_query_view_info(view: View) -> GlViewInfo
        => sg_gl_query_view_info / sg_gl_query_view_info_internal;
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn sg_setup(desc: *const Desc);
        pub fn sg_shutdown();
        pub fn sg_isvalid() -> bool;
        pub fn sg_reset_state_cache();
        pub fn sg_push_debug_group(name: *const c_char);
        pub fn sg_pop_debug_group();
        pub fn sg_add_commit_listener(listener: CommitListener) -> bool;
        pub fn sg_remove_commit_listener(listener: CommitListener) -> bool;
        #[cfg(not(feature = "web"))]
        pub fn sg_make_buffer(desc: *const BufferDesc) -> Buffer;
        #[cfg(feature = "web")]
        #[link_name = "sg_make_buffer"]
        pub fn sg_make_buffer_id(desc: *const BufferDesc) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_make_image(desc: *const ImageDesc) -> Image;
        #[cfg(feature = "web")]
        #[link_name = "sg_make_image"]
        pub fn sg_make_image_id(desc: *const ImageDesc) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_make_sampler(desc: *const SamplerDesc) -> Sampler;
        #[cfg(feature = "web")]
        #[link_name = "sg_make_sampler"]
        pub fn sg_make_sampler_id(desc: *const SamplerDesc) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_make_shader(desc: *const ShaderDesc) -> Shader;
        #[cfg(feature = "web")]
        #[link_name = "sg_make_shader"]
        pub fn sg_make_shader_id(desc: *const ShaderDesc) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_make_pipeline(desc: *const PipelineDesc) -> Pipeline;
        #[cfg(feature = "web")]
        #[link_name = "sg_make_pipeline"]
        pub fn sg_make_pipeline_id(desc: *const PipelineDesc) -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_make_view(desc: *const ViewDesc) -> View;
        #[cfg(feature = "web")]
        #[link_name = "sg_make_view"]
        pub fn sg_make_view_id(desc: *const ViewDesc) -> u32;
        pub fn sg_destroy_buffer(buf: Buffer);
        pub fn sg_destroy_image(img: Image);
        pub fn sg_destroy_sampler(smp: Sampler);
        pub fn sg_destroy_shader(shd: Shader);
        pub fn sg_destroy_pipeline(pip: Pipeline);
        pub fn sg_destroy_view(view: View);
        pub fn sg_update_buffer(buf: Buffer, data: *const Range);
        pub fn sg_update_image(img: Image, data: *const ImageData);
        pub fn sg_append_buffer(buf: Buffer, data: *const Range) -> i32;
        pub fn sg_query_buffer_overflow(buf: Buffer) -> bool;
        pub fn sg_query_buffer_will_overflow(buf: Buffer, size: usize) -> bool;
        pub fn sg_begin_pass(pass: *const Pass);
        pub fn sg_apply_viewport(x: i32, y: i32, width: i32, height: i32, origin_top_left: bool);
        pub fn sg_apply_viewportf(x: f32, y: f32, width: f32, height: f32, origin_top_left: bool);
        pub fn sg_apply_scissor_rect(
            x: i32,
            y: i32,
            width: i32,
            height: i32,
            origin_top_left: bool,
        );
        pub fn sg_apply_scissor_rectf(
            x: f32,
            y: f32,
            width: f32,
            height: f32,
            origin_top_left: bool,
        );
        pub fn sg_apply_pipeline(pip: Pipeline);
        pub fn sg_apply_bindings(bindings: *const Bindings);
        pub fn sg_apply_uniforms(ub_slot: i32, data: *const Range);
        pub fn sg_draw(base_element: u32, num_elements: u32, num_instances: u32);
        pub fn sg_draw_ex(
            base_element: i32,
            num_elements: i32,
            num_instances: i32,
            base_vertex: i32,
            base_instance: i32,
        );
        pub fn sg_dispatch(num_groups_x: i32, num_groups_y: i32, num_groups_z: i32);
        pub fn sg_end_pass();
        pub fn sg_commit();
        #[cfg(not(feature = "web"))]
        pub fn sg_query_desc() -> Desc;
        #[cfg(feature = "web")]
        pub fn sg_query_desc_internal(result: *mut Desc);
        pub fn sg_query_backend() -> Backend;
        #[cfg(not(feature = "web"))]
        pub fn sg_query_features() -> Features;
        #[cfg(feature = "web")]
        pub fn sg_query_features_internal(result: *mut Features);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_limits() -> Limits;
        #[cfg(feature = "web")]
        pub fn sg_query_limits_internal(result: *mut Limits);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_pixelformat(fmt: PixelFormat) -> PixelformatInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_pixelformat_internal(result: *mut PixelformatInfo, fmt: PixelFormat);
        pub fn sg_query_row_pitch(fmt: PixelFormat, width: i32, row_align_bytes: i32) -> i32;
        pub fn sg_query_surface_pitch(
            fmt: PixelFormat,
            width: i32,
            height: i32,
            row_align_bytes: i32,
        ) -> i32;
        pub fn sg_query_buffer_state(buf: Buffer) -> ResourceState;
        pub fn sg_query_image_state(img: Image) -> ResourceState;
        pub fn sg_query_sampler_state(smp: Sampler) -> ResourceState;
        pub fn sg_query_shader_state(shd: Shader) -> ResourceState;
        pub fn sg_query_pipeline_state(pip: Pipeline) -> ResourceState;
        pub fn sg_query_view_state(view: View) -> ResourceState;
        #[cfg(not(feature = "web"))]
        pub fn sg_query_buffer_info(buf: Buffer) -> BufferInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_buffer_info_internal(result: *mut BufferInfo, buf: Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_image_info(img: Image) -> ImageInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_image_info_internal(result: *mut ImageInfo, img: Image);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_sampler_info(smp: Sampler) -> SamplerInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_sampler_info_internal(result: *mut SamplerInfo, smp: Sampler);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_shader_info(shd: Shader) -> ShaderInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_shader_info_internal(result: *mut ShaderInfo, shd: Shader);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_pipeline_info(pip: Pipeline) -> PipelineInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_pipeline_info_internal(result: *mut PipelineInfo, pip: Pipeline);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_view_info(view: View) -> ViewInfo;
        #[cfg(feature = "web")]
        pub fn sg_query_view_info_internal(result: *mut ViewInfo, view: View);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_buffer_desc(buf: Buffer) -> BufferDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_buffer_desc_internal(result: *mut BufferDesc, buf: Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_image_desc(img: Image) -> ImageDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_image_desc_internal(result: *mut ImageDesc, img: Image);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_sampler_desc(smp: Sampler) -> SamplerDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_sampler_desc_internal(result: *mut SamplerDesc, smp: Sampler);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_shader_desc(shd: Shader) -> ShaderDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_shader_desc_internal(result: *mut ShaderDesc, shd: Shader);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_pipeline_desc(pip: Pipeline) -> PipelineDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_pipeline_desc_internal(result: *mut PipelineDesc, pip: Pipeline);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_view_desc(view: View) -> ViewDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_view_desc_internal(result: *mut ViewDesc, view: View);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_buffer_defaults(desc: *const BufferDesc) -> BufferDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_buffer_defaults_internal(result: *mut BufferDesc, desc: *const BufferDesc);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_image_defaults(desc: *const ImageDesc) -> ImageDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_image_defaults_internal(result: *mut ImageDesc, desc: *const ImageDesc);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_sampler_defaults(desc: *const SamplerDesc) -> SamplerDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_sampler_defaults_internal(
            result: *mut SamplerDesc,
            desc: *const SamplerDesc,
        );
        #[cfg(not(feature = "web"))]
        pub fn sg_query_shader_defaults(desc: *const ShaderDesc) -> ShaderDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_shader_defaults_internal(result: *mut ShaderDesc, desc: *const ShaderDesc);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_pipeline_defaults(desc: *const PipelineDesc) -> PipelineDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_pipeline_defaults_internal(
            result: *mut PipelineDesc,
            desc: *const PipelineDesc,
        );
        #[cfg(not(feature = "web"))]
        pub fn sg_query_view_defaults(desc: *const ViewDesc) -> ViewDesc;
        #[cfg(feature = "web")]
        pub fn sg_query_view_defaults_internal(result: *mut ViewDesc, desc: *const ViewDesc);
        pub fn sg_query_buffer_size(buf: Buffer) -> usize;
        #[cfg(not(feature = "web"))]
        pub fn sg_query_buffer_usage(buf: Buffer) -> BufferUsage;
        #[cfg(feature = "web")]
        pub fn sg_query_buffer_usage_internal(result: *mut BufferUsage, buf: Buffer);
        pub fn sg_query_image_type(img: Image) -> ImageType;
        pub fn sg_query_image_width(img: Image) -> i32;
        pub fn sg_query_image_height(img: Image) -> i32;
        pub fn sg_query_image_num_slices(img: Image) -> i32;
        pub fn sg_query_image_num_mipmaps(img: Image) -> i32;
        pub fn sg_query_image_pixelformat(img: Image) -> PixelFormat;
        #[cfg(not(feature = "web"))]
        pub fn sg_query_image_usage(img: Image) -> ImageUsage;
        #[cfg(feature = "web")]
        pub fn sg_query_image_usage_internal(result: *mut ImageUsage, img: Image);
        pub fn sg_query_image_sample_count(img: Image) -> i32;
        pub fn sg_query_view_type(view: View) -> ViewType;
        #[cfg(not(feature = "web"))]
        pub fn sg_query_view_image(view: View) -> Image;
        #[cfg(feature = "web")]
        pub fn sg_query_view_image_internal(result: *mut Image, view: View);
        #[cfg(not(feature = "web"))]
        pub fn sg_query_view_buffer(view: View) -> Buffer;
        #[cfg(feature = "web")]
        pub fn sg_query_view_buffer_internal(result: *mut Buffer, view: View);
        #[cfg(not(feature = "web"))]
        pub fn sg_alloc_buffer() -> Buffer;
        #[cfg(feature = "web")]
        #[link_name = "sg_alloc_buffer"]
        pub fn sg_alloc_buffer_id() -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_alloc_image() -> Image;
        #[cfg(feature = "web")]
        #[link_name = "sg_alloc_image"]
        pub fn sg_alloc_image_id() -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_alloc_sampler() -> Sampler;
        #[cfg(feature = "web")]
        #[link_name = "sg_alloc_sampler"]
        pub fn sg_alloc_sampler_id() -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_alloc_shader() -> Shader;
        #[cfg(feature = "web")]
        #[link_name = "sg_alloc_shader"]
        pub fn sg_alloc_shader_id() -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_alloc_pipeline() -> Pipeline;
        #[cfg(feature = "web")]
        #[link_name = "sg_alloc_pipeline"]
        pub fn sg_alloc_pipeline_id() -> u32;
        #[cfg(not(feature = "web"))]
        pub fn sg_alloc_view() -> View;
        #[cfg(feature = "web")]
        #[link_name = "sg_alloc_view"]
        pub fn sg_alloc_view_id() -> u32;
        pub fn sg_dealloc_buffer(buf: Buffer);
        pub fn sg_dealloc_image(img: Image);
        pub fn sg_dealloc_sampler(smp: Sampler);
        pub fn sg_dealloc_shader(shd: Shader);
        pub fn sg_dealloc_pipeline(pip: Pipeline);
        pub fn sg_dealloc_view(view: View);
        pub fn sg_init_buffer(buf: Buffer, desc: *const BufferDesc);
        pub fn sg_init_image(img: Image, desc: *const ImageDesc);
        pub fn sg_init_sampler(smg: Sampler, desc: *const SamplerDesc);
        pub fn sg_init_shader(shd: Shader, desc: *const ShaderDesc);
        pub fn sg_init_pipeline(pip: Pipeline, desc: *const PipelineDesc);
        pub fn sg_init_view(view: View, desc: *const ViewDesc);
        pub fn sg_uninit_buffer(buf: Buffer);
        pub fn sg_uninit_image(img: Image);
        pub fn sg_uninit_sampler(smp: Sampler);
        pub fn sg_uninit_shader(shd: Shader);
        pub fn sg_uninit_pipeline(pip: Pipeline);
        pub fn sg_uninit_view(view: View);
        pub fn sg_fail_buffer(buf: Buffer);
        pub fn sg_fail_image(img: Image);
        pub fn sg_fail_sampler(smp: Sampler);
        pub fn sg_fail_shader(shd: Shader);
        pub fn sg_fail_pipeline(pip: Pipeline);
        pub fn sg_fail_view(view: View);
        pub fn sg_enable_frame_stats();
        pub fn sg_disable_frame_stats();
        pub fn sg_frame_stats_enabled() -> bool;
        #[cfg(not(feature = "web"))]
        pub fn sg_query_frame_stats() -> FrameStats;
        #[cfg(feature = "web")]
        pub fn sg_query_frame_stats_internal(result: *mut FrameStats);
        pub fn sg_d3d11_device() -> *mut c_void;
        pub fn sg_d3d11_device_context() -> *mut c_void;
        #[cfg(not(feature = "web"))]
        pub fn sg_d3d11_query_buffer_info(buf: Buffer) -> D3d11BufferInfo;
        #[cfg(feature = "web")]
        pub fn sg_d3d11_query_buffer_info_internal(result: *mut D3d11BufferInfo, buf: Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sg_d3d11_query_image_info(img: Image) -> D3d11ImageInfo;
        #[cfg(feature = "web")]
        pub fn sg_d3d11_query_image_info_internal(result: *mut D3d11ImageInfo, img: Image);
        #[cfg(not(feature = "web"))]
        pub fn sg_d3d11_query_sampler_info(smp: Sampler) -> D3d11SamplerInfo;
        #[cfg(feature = "web")]
        pub fn sg_d3d11_query_sampler_info_internal(result: *mut D3d11SamplerInfo, smp: Sampler);
        #[cfg(not(feature = "web"))]
        pub fn sg_d3d11_query_shader_info(shd: Shader) -> D3d11ShaderInfo;
        #[cfg(feature = "web")]
        pub fn sg_d3d11_query_shader_info_internal(result: *mut D3d11ShaderInfo, shd: Shader);
        #[cfg(not(feature = "web"))]
        pub fn sg_d3d11_query_pipeline_info(pip: Pipeline) -> D3d11PipelineInfo;
        #[cfg(feature = "web")]
        pub fn sg_d3d11_query_pipeline_info_internal(result: *mut D3d11PipelineInfo, pip: Pipeline);
        #[cfg(not(feature = "web"))]
        pub fn sg_d3d11_query_view_info(view: View) -> D3d11ViewInfo;
        #[cfg(feature = "web")]
        pub fn sg_d3d11_query_view_info_internal(result: *mut D3d11ViewInfo, view: View);
        pub fn sg_mtl_device() -> *mut c_void;
        pub fn sg_mtl_render_command_encoder() -> *mut c_void;
        pub fn sg_mtl_compute_command_encoder() -> *mut c_void;
        #[cfg(not(feature = "web"))]
        pub fn sg_mtl_query_buffer_info(buf: Buffer) -> MtlBufferInfo;
        #[cfg(feature = "web")]
        pub fn sg_mtl_query_buffer_info_internal(result: *mut MtlBufferInfo, buf: Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sg_mtl_query_image_info(img: Image) -> MtlImageInfo;
        #[cfg(feature = "web")]
        pub fn sg_mtl_query_image_info_internal(result: *mut MtlImageInfo, img: Image);
        #[cfg(not(feature = "web"))]
        pub fn sg_mtl_query_sampler_info(smp: Sampler) -> MtlSamplerInfo;
        #[cfg(feature = "web")]
        pub fn sg_mtl_query_sampler_info_internal(result: *mut MtlSamplerInfo, smp: Sampler);
        #[cfg(not(feature = "web"))]
        pub fn sg_mtl_query_shader_info(shd: Shader) -> MtlShaderInfo;
        #[cfg(feature = "web")]
        pub fn sg_mtl_query_shader_info_internal(result: *mut MtlShaderInfo, shd: Shader);
        #[cfg(not(feature = "web"))]
        pub fn sg_mtl_query_pipeline_info(pip: Pipeline) -> MtlPipelineInfo;
        #[cfg(feature = "web")]
        pub fn sg_mtl_query_pipeline_info_internal(result: *mut MtlPipelineInfo, pip: Pipeline);
        pub fn sg_wgpu_device() -> *mut c_void;
        pub fn sg_wgpu_queue() -> *mut c_void;
        pub fn sg_wgpu_command_encoder() -> *mut c_void;
        pub fn sg_wgpu_render_pass_encoder() -> *mut c_void;
        pub fn sg_wgpu_compute_pass_encoder() -> *mut c_void;
        #[cfg(not(feature = "web"))]
        pub fn sg_wgpu_query_buffer_info(buf: Buffer) -> WgpuBufferInfo;
        #[cfg(feature = "web")]
        pub fn sg_wgpu_query_buffer_info_internal(result: *mut WgpuBufferInfo, buf: Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sg_wgpu_query_image_info(img: Image) -> WgpuImageInfo;
        #[cfg(feature = "web")]
        pub fn sg_wgpu_query_image_info_internal(result: *mut WgpuImageInfo, img: Image);
        #[cfg(not(feature = "web"))]
        pub fn sg_wgpu_query_sampler_info(smp: Sampler) -> WgpuSamplerInfo;
        #[cfg(feature = "web")]
        pub fn sg_wgpu_query_sampler_info_internal(result: *mut WgpuSamplerInfo, smp: Sampler);
        #[cfg(not(feature = "web"))]
        pub fn sg_wgpu_query_shader_info(shd: Shader) -> WgpuShaderInfo;
        #[cfg(feature = "web")]
        pub fn sg_wgpu_query_shader_info_internal(result: *mut WgpuShaderInfo, shd: Shader);
        #[cfg(not(feature = "web"))]
        pub fn sg_wgpu_query_pipeline_info(pip: Pipeline) -> WgpuPipelineInfo;
        #[cfg(feature = "web")]
        pub fn sg_wgpu_query_pipeline_info_internal(result: *mut WgpuPipelineInfo, pip: Pipeline);
        #[cfg(not(feature = "web"))]
        pub fn sg_wgpu_query_view_info(view: View) -> WgpuViewInfo;
        #[cfg(feature = "web")]
        pub fn sg_wgpu_query_view_info_internal(result: *mut WgpuViewInfo, view: View);
        #[cfg(not(feature = "web"))]
        pub fn sg_gl_query_buffer_info(buf: Buffer) -> GlBufferInfo;
        #[cfg(feature = "web")]
        pub fn sg_gl_query_buffer_info_internal(result: *mut GlBufferInfo, buf: Buffer);
        #[cfg(not(feature = "web"))]
        pub fn sg_gl_query_image_info(img: Image) -> GlImageInfo;
        #[cfg(feature = "web")]
        pub fn sg_gl_query_image_info_internal(result: *mut GlImageInfo, img: Image);
        #[cfg(not(feature = "web"))]
        pub fn sg_gl_query_sampler_info(smp: Sampler) -> GlSamplerInfo;
        #[cfg(feature = "web")]
        pub fn sg_gl_query_sampler_info_internal(result: *mut GlSamplerInfo, smp: Sampler);
        #[cfg(not(feature = "web"))]
        pub fn sg_gl_query_shader_info(shd: Shader) -> GlShaderInfo;
        #[cfg(feature = "web")]
        pub fn sg_gl_query_shader_info_internal(result: *mut GlShaderInfo, shd: Shader);
        #[cfg(not(feature = "web"))]
        pub fn sg_gl_query_view_info(view: View) -> GlViewInfo;
        #[cfg(feature = "web")]
        pub fn sg_gl_query_view_info_internal(result: *mut GlViewInfo, view: View);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, offset_of, size_of};

    use super::*;

    const _: () = assert!(size_of::<Buffer>() == 4);
    const _: () = assert!(size_of::<Pipeline>() == 4);
    const _: () = assert!(size_of::<Color>() == 16);

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn buffer_desc_layout() {
        assert_eq!(size_of::<Range>(), 16);
        assert_eq!(size_of::<BufferUsage>(), 6);
        assert_eq!(offset_of!(BufferDesc, size), 8);
        assert_eq!(offset_of!(BufferDesc, usage), 16);
        assert_eq!(offset_of!(BufferDesc, data), 24);
        assert_eq!(offset_of!(BufferDesc, label), 40);
        assert_eq!(offset_of!(BufferDesc, gl_buffers), 48);
        assert_eq!(offset_of!(BufferDesc, mtl_buffers), 56);
        assert_eq!(offset_of!(BufferDesc, d3d11_buffer), 72);
        assert_eq!(offset_of!(BufferDesc, wgpu_buffer), 80);
        assert_eq!(offset_of!(BufferDesc, _end_canary), 88);
        assert_eq!(size_of::<BufferDesc>(), 96);
        assert_eq!(align_of::<BufferDesc>(), 8);
    }

    #[test]
    fn pass_action_layout() {
        assert_eq!(size_of::<ColorAttachmentAction>(), 24);
        assert_eq!(offset_of!(ColorAttachmentAction, clear_value), 8);
        assert_eq!(offset_of!(PassAction, depth), 192);
        assert_eq!(offset_of!(PassAction, stencil), 204);
        assert_eq!(size_of::<StencilAttachmentAction>(), 12);
        assert_eq!(size_of::<PassAction>(), 216);
    }

    #[test]
    fn bindings_layout() {
        assert_eq!(offset_of!(Bindings, vertex_buffers), 4);
        assert_eq!(offset_of!(Bindings, vertex_buffer_offsets), 36);
        assert_eq!(offset_of!(Bindings, index_buffer), 68);
        assert_eq!(offset_of!(Bindings, index_buffer_offset), 72);
        assert_eq!(offset_of!(Bindings, views), 76);
        assert_eq!(offset_of!(Bindings, samplers), 204);
        assert_eq!(offset_of!(Bindings, _end_canary), 252);
        assert_eq!(size_of::<Bindings>(), 256);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn setup_desc_layout() {
        assert_eq!(size_of::<Allocator>(), 24);
        assert_eq!(size_of::<Logger>(), 16);
        assert_eq!(offset_of!(Environment, metal), 16);
        assert_eq!(offset_of!(Environment, d3d11), 24);
        assert_eq!(offset_of!(Environment, wgpu), 40);
        assert_eq!(size_of::<Environment>(), 48);

        assert_eq!(offset_of!(Desc, max_commit_listeners), 32);
        assert_eq!(offset_of!(Desc, disable_validation), 36);
        assert_eq!(offset_of!(Desc, wgpu_disable_bindgroups_cache), 41);
        assert_eq!(offset_of!(Desc, wgpu_bindgroups_cache_size), 44);
        assert_eq!(offset_of!(Desc, allocator), 48);
        assert_eq!(offset_of!(Desc, logger), 72);
        assert_eq!(offset_of!(Desc, environment), 88);
        assert_eq!(offset_of!(Desc, _end_canary), 136);
        assert_eq!(size_of::<Desc>(), 144);
        assert_eq!(align_of::<Desc>(), 8);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn image_desc_layout() {
        assert_eq!(size_of::<ImageUsage>(), 7);
        assert_eq!(size_of::<ImageData>(), 256);
        assert_eq!(offset_of!(ImageDesc, usage), 8);
        assert_eq!(offset_of!(ImageDesc, width), 16);
        assert_eq!(offset_of!(ImageDesc, sample_count), 36);
        assert_eq!(offset_of!(ImageDesc, data), 40);
        assert_eq!(offset_of!(ImageDesc, label), 296);
        assert_eq!(offset_of!(ImageDesc, gl_textures), 304);
        assert_eq!(offset_of!(ImageDesc, gl_texture_target), 312);
        assert_eq!(offset_of!(ImageDesc, mtl_textures), 320);
        assert_eq!(offset_of!(ImageDesc, wgpu_texture), 344);
        assert_eq!(offset_of!(ImageDesc, _end_canary), 352);
        assert_eq!(size_of::<ImageDesc>(), 360);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn shader_desc_layout() {
        assert_eq!(size_of::<ShaderFunction>(), 48);
        assert_eq!(size_of::<ShaderVertexAttr>(), 32);
        assert_eq!(size_of::<GlslShaderUniform>(), 16);
        assert_eq!(offset_of!(ShaderUniformBlock, layout), 12);
        assert_eq!(offset_of!(ShaderUniformBlock, glsl_uniforms), 16);
        assert_eq!(size_of::<ShaderUniformBlock>(), 272);
        assert_eq!(size_of::<ShaderView>(), 48);
        assert_eq!(offset_of!(ShaderView, storage_buffer), 16);
        assert_eq!(offset_of!(ShaderView, storage_image), 28);
        assert_eq!(size_of::<ShaderSampler>(), 12);
        assert_eq!(size_of::<ShaderTextureSamplerPair>(), 16);

        assert_eq!(offset_of!(ShaderDesc, vertex_func), 8);
        assert_eq!(offset_of!(ShaderDesc, fragment_func), 56);
        assert_eq!(offset_of!(ShaderDesc, compute_func), 104);
        assert_eq!(offset_of!(ShaderDesc, attrs), 152);
        assert_eq!(offset_of!(ShaderDesc, uniform_blocks), 664);
        assert_eq!(offset_of!(ShaderDesc, views), 2840);
        assert_eq!(offset_of!(ShaderDesc, samplers), 4376);
        assert_eq!(offset_of!(ShaderDesc, texture_sampler_pairs), 4520);
        assert_eq!(offset_of!(ShaderDesc, mtl_threads_per_threadgroup), 5032);
        assert_eq!(offset_of!(ShaderDesc, label), 5048);
        assert_eq!(offset_of!(ShaderDesc, _end_canary), 5056);
        assert_eq!(size_of::<ShaderDesc>(), 5064);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn pipeline_desc_layout() {
        assert_eq!(size_of::<VertexLayoutState>(), 288);
        assert_eq!(size_of::<DepthState>(), 24);
        assert_eq!(offset_of!(StencilState, front), 4);
        assert_eq!(offset_of!(StencilState, read_mask), 36);
        assert_eq!(size_of::<StencilState>(), 40);
        assert_eq!(offset_of!(ColorTargetState, blend), 8);
        assert_eq!(size_of::<ColorTargetState>(), 36);

        assert_eq!(offset_of!(PipelineDesc, shader), 8);
        assert_eq!(offset_of!(PipelineDesc, layout), 12);
        assert_eq!(offset_of!(PipelineDesc, depth), 300);
        assert_eq!(offset_of!(PipelineDesc, stencil), 324);
        assert_eq!(offset_of!(PipelineDesc, color_count), 364);
        assert_eq!(offset_of!(PipelineDesc, colors), 368);
        assert_eq!(offset_of!(PipelineDesc, primitive_type), 656);
        assert_eq!(offset_of!(PipelineDesc, sample_count), 672);
        assert_eq!(offset_of!(PipelineDesc, blend_color), 676);
        assert_eq!(offset_of!(PipelineDesc, alpha_to_coverage_enabled), 692);
        assert_eq!(offset_of!(PipelineDesc, label), 696);
        assert_eq!(offset_of!(PipelineDesc, _end_canary), 704);
        assert_eq!(size_of::<PipelineDesc>(), 712);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn view_desc_layout() {
        assert_eq!(size_of::<TextureViewDesc>(), 20);
        assert_eq!(offset_of!(ViewDesc, texture), 4);
        assert_eq!(offset_of!(ViewDesc, storage_buffer), 24);
        assert_eq!(offset_of!(ViewDesc, storage_image), 32);
        assert_eq!(offset_of!(ViewDesc, color_attachment), 44);
        assert_eq!(offset_of!(ViewDesc, resolve_attachment), 56);
        assert_eq!(offset_of!(ViewDesc, depth_stencil_attachment), 68);
        assert_eq!(offset_of!(ViewDesc, label), 80);
        assert_eq!(offset_of!(ViewDesc, _end_canary), 88);
        assert_eq!(size_of::<ViewDesc>(), 96);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn pass_layout() {
        assert_eq!(offset_of!(Swapchain, depth_format), 16);
        assert_eq!(offset_of!(Swapchain, metal), 24);
        assert_eq!(offset_of!(Swapchain, d3d11), 48);
        assert_eq!(offset_of!(Swapchain, wgpu), 72);
        assert_eq!(offset_of!(Swapchain, gl), 96);
        assert_eq!(size_of::<Swapchain>(), 104);

        assert_eq!(size_of::<Attachments>(), 68);
        assert_eq!(offset_of!(Pass, compute), 4);
        assert_eq!(offset_of!(Pass, action), 8);
        assert_eq!(offset_of!(Pass, attachments), 224);
        assert_eq!(offset_of!(Pass, swapchain), 296);
        assert_eq!(offset_of!(Pass, label), 400);
        assert_eq!(offset_of!(Pass, _end_canary), 408);
        assert_eq!(size_of::<Pass>(), 416);
    }

    #[test]
    fn frame_stats_layout() {
        assert_eq!(size_of::<ResourceStats>(), 24);
        assert_eq!(size_of::<FrameStatsGl>(), 52);
        assert_eq!(size_of::<FrameStatsD3d11>(), 124);
        assert_eq!(size_of::<FrameStatsMetal>(), 136);
        assert_eq!(size_of::<FrameStatsWgpu>(), 60);

        assert_eq!(offset_of!(FrameStats, size_update_image), 64);
        assert_eq!(offset_of!(FrameStats, buffers), 68);
        assert_eq!(offset_of!(FrameStats, pipelines), 188);
        assert_eq!(offset_of!(FrameStats, gl), 212);
        assert_eq!(offset_of!(FrameStats, d3d11), 264);
        assert_eq!(offset_of!(FrameStats, metal), 388);
        assert_eq!(offset_of!(FrameStats, wgpu), 524);
        assert_eq!(size_of::<FrameStats>(), 584);
        assert_eq!(align_of::<FrameStats>(), 4);
    }

    #[test]
    fn inline_arrays_match_bind_slot_limits() {
        let bindings = Bindings::default();
        assert_eq!(bindings.vertex_buffers.len(), MAX_VERTEXBUFFER_BINDSLOTS);
        assert_eq!(bindings.views.len(), MAX_VIEW_BINDSLOTS);
        assert_eq!(bindings.samplers.len(), MAX_SAMPLER_BINDSLOTS);
        assert_eq!(PassAction::default().colors.len(), MAX_COLOR_ATTACHMENTS);
        assert_eq!(ImageData::default().mip_levels.len(), MAX_MIPMAPS);
    }

    #[test]
    fn inline_array_writes_land_in_place() {
        let mut bindings = Bindings::default();
        bindings.views[31] = View { id: 99 };
        bindings.vertex_buffers[0] = Buffer { id: 1 };

        let words: &[u32] = unsafe {
            std::slice::from_raw_parts(
                (&bindings as *const Bindings).cast::<u32>(),
                size_of::<Bindings>() / 4,
            )
        };
        assert_eq!(words[1], 1);
        assert_eq!(words[(offset_of!(Bindings, views) / 4) + 31], 99);
    }

    #[test]
    #[should_panic]
    fn inline_array_index_out_of_range_panics() {
        let action = PassAction::default();
        let slot = std::hint::black_box(MAX_COLOR_ATTACHMENTS);
        let _ = action.colors[slot];
    }

    #[test]
    fn bool_fields_are_single_bytes() {
        let mut usage = BufferUsage::default();
        usage.vertex_buffer = true;
        usage.immutable = false;
        let raw: [u8; 6] = unsafe { std::mem::transmute(usage) };
        assert_eq!(raw, [1, 0, 0, 0, 0, 0]);

        usage.immutable = true;
        let raw: [u8; 6] = unsafe { std::mem::transmute(usage) };
        assert_eq!(raw[offset_of!(BufferUsage, immutable)], 1);
    }

    #[test]
    fn image_type_discriminants() {
        assert_eq!(ImageType::Default as i32, 0);
        assert_eq!(ImageType::Dim2 as i32, 1);
        assert_eq!(ImageType::Cube as i32, 2);
        assert_eq!(ImageType::Dim3 as i32, 3);
    }

    #[test]
    fn color_defaults_to_opaque_black() {
        assert_eq!(Color::default(), Color::rgba(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::zeroed().a, 0.0);
        assert_eq!(PassAction::default().colors[0].clear_value.a, 0.0);
    }

    #[test]
    fn color_conversions() {
        assert_eq!(Color::from([0.25, 0.5, 0.75]), Color::rgba(0.25, 0.5, 0.75, 1.0));
        assert_eq!(Color::from([0.1, 0.2, 0.3, 0.4]).a, 0.4);
        assert_eq!(Color::from(&[0.5_f32, 0.5][..]), Color::BLACK);
        let color = Color::from(&[1.0_f32, 0.0, 0.0, 0.5, 9.0][..]);
        assert_eq!(color, Color::rgba(1.0, 0.0, 0.0, 0.5));
        assert_eq!(<[f32; 4]>::from(Color::WHITE), [1.0; 4]);
        assert_eq!(Color::WHITE.as_array()[3], 1.0);
    }
}
