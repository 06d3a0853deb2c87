// src/dispatch.rs
//
// Dispatch strategy for native functions that return an aggregate.
//
// Two shapes exist for the same logical call:
//
//   NATIVE_DIRECT    sg_query_desc() -> sg_desc
//   NATIVE_INDIRECT  sg_query_desc_internal(sg_desc* result)
//
// The choice is made once per build (`web` feature). Each bound module
// declares its aggregate-returning functions through `aggregate!` or
// `handle!`, which expand to one façade with a single signature and only the
// entry point for the active strategy compiled in.

use bytemuck::Zeroable;

use crate::abi::Handle;

/// How aggregate results cross the native boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The native function returns the struct by value.
    NativeDirect,
    /// An `_internal` variant writes the struct through a leading out-pointer.
    NativeIndirect,
}

/// The strategy compiled into this build.
#[cfg(not(feature = "web"))]
pub const STRATEGY: Strategy = Strategy::NativeDirect;

/// The strategy compiled into this build.
#[cfg(feature = "web")]
pub const STRATEGY: Strategy = Strategy::NativeIndirect;

/// NATIVE_DIRECT: the native call already produced the value.
#[inline(always)]
pub fn direct<T>(call: impl FnOnce() -> T) -> T {
    call()
}

/// NATIVE_INDIRECT: hand zeroed storage to the native call, then return it.
///
/// If the native side writes nothing the caller sees the zero value, which
/// is what every native query returns for "invalid".
#[inline(always)]
pub fn indirect<T: Zeroable>(call: impl FnOnce(*mut T)) -> T {
    let mut result = T::zeroed();
    call(&mut result);
    result
}

/// NATIVE_INDIRECT for handles: the entry point returns the bare id.
#[inline(always)]
pub fn indirect_handle<H: Handle>(call: impl FnOnce() -> u32) -> H {
    H::from_id(call())
}

/// Declare façades for aggregate-returning native functions.
///
/// ```ignore
/// crate::dispatch::aggregate! {
///     pub fn query_desc() -> Desc => sg_query_desc / sg_query_desc_internal;
/// }
/// ```
///
/// Arguments pass straight through; `&T` arguments coerce to `*const T`.
macro_rules! aggregate {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty
            => $direct:ident / $indirect:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[inline]
            $vis fn $name($($arg: $ty),*) -> $ret {
                #[cfg(not(feature = "web"))]
                {
                    $crate::dispatch::direct(|| unsafe { ffi::$direct($($arg),*) })
                }
                #[cfg(feature = "web")]
                {
                    $crate::dispatch::indirect(|result| unsafe {
                        ffi::$indirect(result, $($arg),*)
                    })
                }
            }
        )*
    };
}

/// Declare façades for handle-returning native functions.
///
/// Under NATIVE_INDIRECT the same native symbol is declared a second time,
/// returning `u32`, as `<name>_id`.
macro_rules! handle {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty
            => $direct:ident / $indirect:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[inline]
            $vis fn $name($($arg: $ty),*) -> $ret {
                #[cfg(not(feature = "web"))]
                {
                    $crate::dispatch::direct(|| unsafe { ffi::$direct($($arg),*) })
                }
                #[cfg(feature = "web")]
                {
                    $crate::dispatch::indirect_handle::<$ret>(|| unsafe {
                        ffi::$indirect($($arg),*)
                    })
                }
            }
        )*
    };
}

pub(crate) use aggregate;
pub(crate) use handle;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::gfx;

    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
    struct Size {
        w: i32,
        h: i32,
    }

    // Stand-ins for a native pair: `size()` and `size_internal(size* out)`.
    extern "C" fn native_size() -> Size {
        Size { w: 800, h: 600 }
    }

    unsafe extern "C" fn native_size_internal(result: *mut Size) {
        unsafe { *result = Size { w: 800, h: 600 } };
    }

    extern "C" fn native_make_buffer_id() -> u32 {
        0x0001_0003
    }

    #[test]
    fn indirect_writes_through_out_parameter() {
        let size = indirect(|result| unsafe { native_size_internal(result) });
        assert_eq!(size, Size { w: 800, h: 600 });
    }

    #[test]
    fn both_strategies_yield_identical_bits() {
        let a = direct(|| native_size());
        let b: Size = indirect(|result| unsafe { native_size_internal(result) });
        assert_eq!(bytemuck::bytes_of(&a), bytemuck::bytes_of(&b));
    }

    #[test]
    fn indirect_starts_from_zero() {
        let untouched: gfx::PixelformatInfo = indirect(|_| {});
        assert!(!untouched.sample);
        assert!(!untouched.render);

        let desc: app::Desc = indirect(|_| {});
        assert_eq!(desc.width, 0);
        assert!(desc.window_title.is_null());
        assert!(desc.init_cb.is_none());
    }

    #[test]
    fn handle_rebuilt_from_id() {
        let buf: gfx::Buffer = indirect_handle(|| native_make_buffer_id());
        assert_eq!(buf, gfx::Buffer { id: 0x0001_0003 });
        assert_eq!(direct(|| gfx::Buffer { id: 0x0001_0003 }), buf);
    }

    // Fake native pairs in the shape the bound modules declare. Each build
    // references only the entry points of its own strategy.
    #[allow(dead_code)]
    mod ffi {
        use super::Size;
        use crate::gfx;

        pub(super) unsafe extern "C" fn window_size() -> Size {
            Size { w: 800, h: 600 }
        }

        pub(super) unsafe extern "C" fn window_size_internal(result: *mut Size) {
            unsafe { *result = Size { w: 800, h: 600 } };
        }

        pub(super) unsafe extern "C" fn scaled(size: *const Size, by: i32) -> Size {
            let size = unsafe { *size };
            Size {
                w: size.w * by,
                h: size.h * by,
            }
        }

        pub(super) unsafe extern "C" fn scaled_internal(
            result: *mut Size,
            size: *const Size,
            by: i32,
        ) {
            unsafe { *result = scaled(size, by) };
        }

        pub(super) unsafe extern "C" fn make_buffer() -> gfx::Buffer {
            gfx::Buffer { id: 0x0001_0003 }
        }

        pub(super) unsafe extern "C" fn make_buffer_id() -> u32 {
            0x0001_0003
        }
    }

    crate::dispatch::aggregate! {
        fn window_size() -> Size => window_size / window_size_internal;
        fn scaled(size: &Size, by: i32) -> Size => scaled / scaled_internal;
    }

    crate::dispatch::handle! {
        fn make_buffer() -> gfx::Buffer => make_buffer / make_buffer_id;
    }

    #[test]
    fn aggregate_facade_returns_native_value() {
        assert_eq!(window_size(), Size { w: 800, h: 600 });
    }

    #[test]
    fn aggregate_facade_passes_arguments_through() {
        let half = Size { w: 400, h: 300 };
        assert_eq!(scaled(&half, 2), Size { w: 800, h: 600 });
        assert_eq!(scaled(&half, 0), Size::default());
    }

    #[test]
    fn handle_facade_returns_typed_handle() {
        let buf = make_buffer();
        assert_eq!(buf, gfx::Buffer { id: 0x0001_0003 });
        assert!(buf.is_valid());
    }

    #[test]
    fn strategy_follows_build_features() {
        if cfg!(feature = "web") {
            assert_eq!(STRATEGY, Strategy::NativeIndirect);
        } else {
            assert_eq!(STRATEGY, Strategy::NativeDirect);
        }
    }
}
