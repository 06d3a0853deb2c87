// src/abi.rs
//
// Shared pieces of the layout mirror: the handle trait and the macros every
// bound module uses to give its structs a C-style zero default.

use bytemuck::Zeroable;

/// An opaque resource id owned by a native library.
///
/// Handles are weak references. Holding one keeps nothing alive; the native
/// side decides whether an id is still valid.
pub trait Handle: Copy + Zeroable {
    /// Rebuild a handle from the raw id returned by the native side.
    fn from_id(id: u32) -> Self;

    /// The raw id.
    fn id(&self) -> u32;

    /// The invalid handle. Native constructors return it on failure.
    fn invalid() -> Self {
        Self::from_id(0)
    }

    /// `false` only for the all-zero id.
    ///
    /// This says nothing about whether the native resource still exists.
    /// Use the module's `query_*_state` call for that.
    fn is_valid(&self) -> bool {
        self.id() != 0
    }
}

/// Implement [`Handle`] for single-`id` structs.
macro_rules! impl_handle {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::abi::Handle for $ty {
                #[inline]
                fn from_id(id: u32) -> Self {
                    Self { id }
                }

                #[inline]
                fn id(&self) -> u32 {
                    self.id
                }
            }
        )+
    };
}

/// Give structs the all-zero bit pattern as their `Default`, like `= {0}` in C.
///
/// Only for structs whose fields are all valid when zeroed: integers, floats,
/// `bool`, raw pointers, `Option<fn>`, zero-discriminant enums and other such
/// structs.
macro_rules! zeroed_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            // SAFETY: every field of the listed types accepts the zero bit pattern.
            unsafe impl ::bytemuck::Zeroable for $ty {}

            impl ::core::default::Default for $ty {
                #[inline]
                fn default() -> Self {
                    <Self as ::bytemuck::Zeroable>::zeroed()
                }
            }
        )+
    };
}

/// Constructors for the native `{ ptr, size }` byte ranges.
///
/// A range borrows the data it was built from and must not be handed to
/// native code after that data is gone.
macro_rules! impl_range {
    ($ty:ty) => {
        impl $ty {
            /// View a slice of plain data as raw bytes. Empty slices map to null.
            pub fn from_slice<T: ::bytemuck::Pod>(data: &[T]) -> Self {
                let bytes: &[u8] = ::bytemuck::cast_slice(data);
                if bytes.is_empty() {
                    return Self::default();
                }
                Self {
                    ptr: bytes.as_ptr().cast(),
                    size: bytes.len(),
                }
            }

            /// View a mutable slice as a destination the native side writes into.
            pub fn from_mut_slice<T: ::bytemuck::Pod>(data: &mut [T]) -> Self {
                let bytes: &mut [u8] = ::bytemuck::cast_slice_mut(data);
                if bytes.is_empty() {
                    return Self::default();
                }
                Self {
                    ptr: bytes.as_mut_ptr().cast_const().cast(),
                    size: bytes.len(),
                }
            }

            /// View one value as raw bytes.
            pub fn from_ref<T: ::bytemuck::Pod>(value: &T) -> Self {
                Self::from_slice(::core::slice::from_ref(value))
            }

            pub fn is_empty(&self) -> bool {
                self.ptr.is_null() || self.size == 0
            }
        }
    };
}

pub(crate) use impl_handle;
pub(crate) use impl_range;
pub(crate) use zeroed_default;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx;

    #[test]
    fn handles_compare_by_id_only() {
        let a = gfx::Buffer::from_id(7);
        let b = gfx::Buffer { id: 7 };
        assert_eq!(a, b);
        assert_ne!(a, gfx::Buffer::from_id(8));
        assert_eq!(a.id(), 7);
    }

    #[test]
    fn zero_id_is_invalid() {
        assert!(!gfx::Image::invalid().is_valid());
        assert!(!gfx::Image::default().is_valid());
        assert!(gfx::Image::from_id(1).is_valid());
    }

    #[test]
    fn zeroed_default_matches_c_zero_init() {
        let desc = gfx::BufferDesc::default();
        assert_eq!(desc.size, 0);
        assert!(desc.data.ptr.is_null());
        assert!(desc.label.is_null());
        assert!(!desc.usage.vertex_buffer);
        assert!(desc.mtl_buffers.iter().all(|p| p.is_null()));
        assert!(desc.gl_buffers.iter().all(|id| *id == 0));
        assert!(desc.d3d11_buffer.is_null());
        assert_eq!(desc._end_canary, 0);
    }

    #[test]
    fn range_covers_slice_bytes() {
        let vertices = [0.0_f32, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0];
        let range = gfx::Range::from_slice(&vertices);
        assert_eq!(range.size, 36);
        assert_eq!(range.ptr, vertices.as_ptr().cast());

        let indices = [0_u16, 1, 2];
        assert_eq!(gfx::Range::from_slice(&indices).size, 6);
        assert_eq!(gfx::Range::from_ref(&[1.0_f32; 16]).size, 64);
    }

    #[test]
    fn empty_range_is_null() {
        let empty: [u32; 0] = [];
        let range = gfx::Range::from_slice(&empty);
        assert!(range.ptr.is_null());
        assert!(range.is_empty());
    }
}
