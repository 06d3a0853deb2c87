// src/audio.rs
//
// sokol_audio: a minimal streaming backend. Samples are pushed from the
// main thread with `push` or pulled by the native audio thread through
// `Desc::stream_cb`. The stream callback runs on that thread.

use std::ffi::c_void;

use crate::abi::zeroed_default;
use crate::logging::{LogFn, impl_bridged_logger};

#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogItem {
    #[default]
    Ok,
    MallocFailed,
    AlsaSndPcmOpenFailed,
    AlsaFloatSamplesNotSupported,
    AlsaRequestedBufferSizeNotSupported,
    AlsaRequestedChannelCountNotSupported,
    AlsaSndPcmHwParamsSetRateNearFailed,
    AlsaSndPcmHwParamsFailed,
    AlsaPthreadCreateFailed,
    WasapiCreateEventFailed,
    WasapiCreateDeviceEnumeratorFailed,
    WasapiGetDefaultAudioEndpointFailed,
    WasapiDeviceActivateFailed,
    WasapiAudioClientInitializeFailed,
    WasapiAudioClientGetBufferSizeFailed,
    WasapiAudioClientGetServiceFailed,
    WasapiAudioClientSetEventHandleFailed,
    WasapiCreateThreadFailed,
    AaudioStreambuilderOpenStreamFailed,
    AaudioPthreadCreateFailed,
    AaudioRestartingStreamAfterError,
    UsingAaudioBackend,
    AaudioCreateStreambuilderFailed,
    CoreaudioNewOutputFailed,
    CoreaudioAllocateBufferFailed,
    CoreaudioStartFailed,
    BackendBufferSizeIsntMultipleOfPacketSize,
    VitaSceaudioOpenFailed,
    VitaPthreadCreateFailed,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Logger {
    pub func: Option<LogFn>,
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
pub struct Desc {
    pub sample_rate: i32,
    pub num_channels: i32,
    pub buffer_frames: i32,
    pub packet_frames: i32,
    pub num_packets: i32,
    pub stream_cb: Option<unsafe extern "C" fn(*mut f32, i32, i32)>,
    pub stream_userdata_cb: Option<unsafe extern "C" fn(*mut f32, i32, i32, *mut c_void)>,
    pub user_data: *mut c_void,
    pub allocator: Allocator,
    pub logger: Logger,
}

zeroed_default!(Logger, Allocator, Desc);

impl_bridged_logger!(Logger);

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup(desc: &Desc) {
    unsafe { ffi::saudio_setup(desc) }
}

pub fn shutdown() {
    unsafe { ffi::saudio_shutdown() }
}

pub fn isvalid() -> bool {
    unsafe { ffi::saudio_isvalid() }
}

pub fn userdata() -> *mut c_void {
    unsafe { ffi::saudio_userdata() }
}

crate::dispatch::aggregate! {
    pub fn query_desc() -> Desc => saudio_query_desc / saudio_query_desc_internal;
}

pub fn sample_rate() -> i32 {
    unsafe { ffi::saudio_sample_rate() }
}

pub fn buffer_frames() -> i32 {
    unsafe { ffi::saudio_buffer_frames() }
}

pub fn channels() -> i32 {
    unsafe { ffi::saudio_channels() }
}

pub fn suspended() -> bool {
    unsafe { ffi::saudio_suspended() }
}

pub fn expect() -> i32 {
    unsafe { ffi::saudio_expect() }
}

pub unsafe fn push(frames: *const f32, num_frames: i32) -> i32 {
    unsafe { ffi::saudio_push(frames, num_frames) }
}

/// Push interleaved samples. Returns the number of frames accepted.
///
/// Trailing samples that do not fill a whole frame are not pushed.
pub fn push_samples(samples: &[f32]) -> i32 {
    let frames = frame_count(samples.len(), channels());
    if frames == 0 {
        return 0;
    }
    unsafe { ffi::saudio_push(samples.as_ptr(), frames) }
}

fn frame_count(samples: usize, channels: i32) -> i32 {
    let channels = usize::try_from(channels).unwrap_or(0).max(1);
    i32::try_from(samples / channels).unwrap_or(i32::MAX)
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use super::*;

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn saudio_setup(desc: *const Desc);
        pub fn saudio_shutdown();
        pub fn saudio_isvalid() -> bool;
        pub fn saudio_userdata() -> *mut c_void;
        #[cfg(not(feature = "web"))]
        pub fn saudio_query_desc() -> Desc;
        #[cfg(feature = "web")]
        pub fn saudio_query_desc_internal(result: *mut Desc);
        pub fn saudio_sample_rate() -> i32;
        pub fn saudio_buffer_frames() -> i32;
        pub fn saudio_channels() -> i32;
        pub fn saudio_suspended() -> bool;
        pub fn saudio_expect() -> i32;
        pub fn saudio_push(frames: *const f32, num_frames: i32) -> i32;
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn desc_layout() {
        assert_eq!(offset_of!(Desc, num_packets), 16);
        assert_eq!(offset_of!(Desc, stream_cb), 24);
        assert_eq!(offset_of!(Desc, user_data), 40);
        assert_eq!(offset_of!(Desc, allocator), 48);
        assert_eq!(offset_of!(Desc, logger), 72);
        assert_eq!(size_of::<Desc>(), 88);
    }

    #[test]
    fn frames_from_interleaved_samples() {
        assert_eq!(frame_count(1024, 2), 512);
        assert_eq!(frame_count(1025, 2), 512);
        assert_eq!(frame_count(300, 1), 300);
        assert_eq!(frame_count(300, 0), 300);
        assert_eq!(frame_count(1, 2), 0);
    }

    unsafe extern "C" fn silence(buffer: *mut f32, num_frames: i32, num_channels: i32) {
        let len = (num_frames * num_channels) as usize;
        unsafe { std::slice::from_raw_parts_mut(buffer, len) }.fill(0.0);
    }

    #[test]
    fn stream_callback_is_native_callable() {
        let desc = Desc {
            num_channels: 2,
            stream_cb: Some(silence),
            logger: Logger::bridged(),
            ..Default::default()
        };
        let mut buffer = [1.0_f32; 8];
        let cb = desc.stream_cb.unwrap();
        unsafe { cb(buffer.as_mut_ptr(), 4, 2) };
        assert!(buffer.iter().all(|s| *s == 0.0));
    }
}
