// tests/native.rs
//
// Calls through to the native sokol library. Needs the `link` feature and
// a built libsokol on the linker path.

#![cfg(feature = "link")]

use sokol::image::{exr, stb};
use sokol::{ImageError, shape, time};

#[test]
fn mat4_echoes_values_through_native_call() {
    let values: [f32; 16] = std::array::from_fn(|i| i as f32);
    let m = shape::mat4(&values);
    assert_eq!(m.as_array(), &values);

    let t = shape::mat4_transpose(&values);
    assert_eq!(t.m[0][1], values[4]);
    assert_eq!(t.m[1][0], values[1]);
}

#[test]
fn plane_sizes_and_build_agree() {
    let sizes = shape::plane_sizes(1);
    assert_eq!(sizes.vertices.num, 4);
    assert_eq!(sizes.indices.num, 6);
    assert_eq!(sizes.vertices.size as usize, 4 * size_of::<shape::Vertex>());
    assert_eq!(sizes.indices.size as usize, 6 * size_of::<u16>());

    let mut vertices = vec![shape::Vertex::default(); sizes.vertices.num as usize];
    let mut indices = vec![0_u16; sizes.indices.num as usize];
    let buf = shape::Buffer::new(&mut vertices, &mut indices);
    let params = shape::Plane {
        width: 1.0,
        depth: 1.0,
        tiles: 1,
        transform: shape::Mat4::IDENTITY,
        ..Default::default()
    };
    let buf = shape::build_plane(&buf, &params);
    assert!(buf.valid);
    assert_eq!(buf.vertices.data_size, sizes.vertices.size as usize);

    let range = shape::element_range(&buf);
    assert_eq!(range.base_element, 0);
    assert_eq!(range.num_elements, 6);
}

#[test]
fn plane_overflowing_storage_is_invalid() {
    let mut vertices = [shape::Vertex::default(); 2];
    let mut indices = [0_u16; 2];
    let buf = shape::Buffer::new(&mut vertices, &mut indices);
    let params = shape::Plane {
        tiles: 4,
        ..Default::default()
    };
    assert!(!shape::build_plane(&buf, &params).valid);
}

#[test]
fn time_is_monotonic() {
    time::setup();
    let start = time::now();
    let later = time::now();
    assert!(later >= start);
    // Backwards or equal tick pairs clamp to one tick.
    assert_eq!(time::diff(start, later), 1);
    assert!(time::sec(time::since(start)) >= 0.0);
}

#[test]
fn exr_rejects_junk() {
    let junk = b"definitely not an exr file";
    assert!(!exr::is_exr(junk));
    match exr::Image::decode(junk) {
        Err(ImageError::Exr { code, .. }) => assert!(code < exr::SUCCESS),
        other => panic!("expected an EXR error, got {other:?}"),
    }
}

#[test]
fn stb_rejects_junk() {
    let junk = [0_u8; 32];
    match stb::Image::<u8>::decode(&junk, 4) {
        Err(ImageError::Decode { .. }) => {}
        other => panic!("expected a decode error, got {other:?}"),
    }
}
