//! Stream-level behavior of the serialization front end.

use std::io::{Cursor, Seek, SeekFrom, Write};

use glkit_io::{
    BinarySerialize, Error, byte_len, read_array, read_array_opt, read_value, read_vec,
    write_array, write_array_opt, write_value,
};
use glkit_math::{GlType, IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

fn write_one_bytes<T: BinarySerialize>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    write_value(&mut buf, value).expect("write");
    buf
}

/// Round trips `values` one by one and compares raw bytes, so NaN payloads count.
fn assert_round_trip<T: BinarySerialize + bytemuck::Pod>(values: &[T]) {
    for v in values {
        let buf = write_one_bytes(v);
        assert_eq!(buf.len(), T::BYTE_SIZE);

        let mut src = Cursor::new(buf);
        let back: T = read_value(&mut src).expect("read");
        assert_eq!(bytemuck::bytes_of(&back), bytemuck::bytes_of(v));
        assert_eq!(src.position() as usize, T::BYTE_SIZE);
    }
}

fn odd_floats() -> [f32; 4] {
    [f32::from_bits(0x7fc0_1234), -0.0, f32::MIN_POSITIVE / 2.0, f32::INFINITY]
}

// ============================================================================
// Round trip identity
// ============================================================================

#[test]
fn round_trip_vectors_bit_exact() {
    let [nan, nz, sub, inf] = odd_floats();
    assert_round_trip(&[Vec2::new(1.5, -2.25), Vec2::new(nan, nz)]);
    assert_round_trip(&[Vec3::new(sub, inf, -inf), Vec3::new(0.1, 0.2, 0.3)]);
    assert_round_trip(&[Vec4::new(nan, sub, nz, 1e30), Vec4::W]);
    assert_round_trip(&[1.0f32, nan, nz]);
}

#[test]
fn round_trip_int_vectors() {
    assert_round_trip(&[IVec2::new(i32::MIN, i32::MAX)]);
    assert_round_trip(&[IVec3::new(-1, 0, 1)]);
    assert_round_trip(&[IVec4::new(7, -7, 1 << 30, -(1 << 30))]);
    assert_round_trip(&[42i32, -42]);
}

#[test]
fn round_trip_matrices() {
    let [nan, ..] = odd_floats();
    let mut weird = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    weird.cols[2][1] = nan;

    assert_round_trip(&[Mat2::from_angle(0.7), Mat2::IDENTITY]);
    assert_round_trip(&[Mat3::from_rotation_z(1.1), Mat3::diagonal(1.0, 2.0, 3.0)]);
    assert_round_trip(&[weird, Mat4::IDENTITY]);
}

// ============================================================================
// Bulk / single equivalence
// ============================================================================

#[test]
fn write_many_equals_concatenated_write_one() {
    let vs: Vec<Vec3> = (0..10).map(|i| Vec3::splat(i as f32 * 0.5)).collect();
    let mut bulk = Vec::new();
    write_array(&mut bulk, &vs, 3, 5).expect("bulk");

    let single: Vec<u8> = vs[3..8].iter().flat_map(write_one_bytes).collect();
    assert_eq!(bulk, single);

    let ms: Vec<Mat4> = (0..4).map(|i| Mat4::from_scale(Vec3::splat(i as f32))).collect();
    let mut bulk = Vec::new();
    write_array(&mut bulk, &ms, 1, 3).expect("bulk");
    let single: Vec<u8> = ms[1..4].iter().flat_map(write_one_bytes).collect();
    assert_eq!(bulk, single);
}

#[test]
fn sequential_read_one_reproduces_slice() {
    let vs = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec2::new(5.0, 6.0)];
    let mut buf = Vec::new();
    write_array(&mut buf, &vs, 1, 2).expect("write");

    let mut src = Cursor::new(buf);
    let a: Vec2 = read_value(&mut src).expect("a");
    let b: Vec2 = read_value(&mut src).expect("b");
    assert_eq!([a, b], vs[1..3]);
}

#[test]
fn read_array_fills_only_requested_slots() {
    let src_vals = [IVec3::new(1, 2, 3), IVec3::new(4, 5, 6)];
    let mut buf = Vec::new();
    write_array(&mut buf, &src_vals, 0, 2).expect("write");

    let mut out = [IVec3::new(9, 9, 9); 5];
    let n = read_array(&mut Cursor::new(buf), &mut out, 2, 2).expect("read");
    assert_eq!(n, 2);
    assert_eq!(out.len(), 5);
    assert_eq!(out[1], IVec3::new(9, 9, 9));
    assert_eq!(out[2..4], src_vals);
    assert_eq!(out[4], IVec3::new(9, 9, 9));
}

// ============================================================================
// Bounds rejection
// ============================================================================

#[test]
fn write_out_of_range_leaves_sink_empty() {
    let ms = [Mat3::IDENTITY; 4];
    let mut sink = Vec::new();
    let err = write_array(&mut sink, &ms, 3, 2).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { start: 3, count: 2, len: 4 }));
    assert!(sink.is_empty());

    let err = write_array(&mut sink, &ms, usize::MAX, 2).unwrap_err();
    assert!(err.is_range_error());
    assert!(sink.is_empty());
}

#[test]
fn read_out_of_range_leaves_source_untouched() {
    let mut src = Cursor::new(vec![0u8; 1024]);
    let mut out = [Vec4::ZERO; 3];
    let err = read_array(&mut src, &mut out, 2, 2).unwrap_err();
    assert!(err.is_range_error());
    assert_eq!(src.position(), 0);
    assert_eq!(out, [Vec4::ZERO; 3]);
}

#[test]
fn missing_array_rejected_before_io() {
    let mut sink = Vec::new();
    let err = write_array_opt::<Mat2, _>(&mut sink, None, 0, 1).unwrap_err();
    assert!(matches!(err, Error::NullArray));
    assert!(sink.is_empty());

    let mut src = Cursor::new(vec![0u8; 64]);
    let err = read_array_opt::<Mat4, _>(&mut src, None, 0, 1).unwrap_err();
    assert!(err.is_range_error());
    assert_eq!(src.position(), 0);

    let vs = [Vec2::X, Vec2::Y];
    write_array_opt(&mut sink, Some(&vs[..]), 0, 2).expect("present array");
    assert_eq!(sink.len(), 16);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn identity_mat3_consumes_36_bytes() {
    let m = Mat3::from_col_vecs(Vec3::X, Vec3::Y, Vec3::Z);
    let mut buf = write_one_bytes(&m);
    // trailing data must stay unread
    buf.extend_from_slice(&[0xAB; 8]);

    let mut src = Cursor::new(buf);
    let back: Mat3 = read_value(&mut src).expect("read");
    assert_eq!(back, Mat3::IDENTITY);
    assert_eq!(src.position(), 36);
}

#[test]
fn mat4_from_ten_bytes_is_end_of_stream() {
    let mut src = Cursor::new(vec![0x11u8; 10]);
    let err = read_value::<Mat4, _>(&mut src).unwrap_err();
    assert!(err.is_eof());
    assert!(matches!(err, Error::EndOfStream { needed: 64, completed: 0 }));
}

#[test]
fn bulk_read_reports_completed_elements() {
    let vs = [Vec3::X, Vec3::Y, Vec3::Z];
    let mut buf = Vec::new();
    write_array(&mut buf, &vs, 0, 3).expect("write");
    buf.truncate(buf.len() - 4);

    let mut out = [Vec3::ONE; 3];
    let err = read_array(&mut Cursor::new(buf), &mut out, 0, 3).unwrap_err();
    assert!(matches!(err, Error::EndOfStream { needed: 12, completed: 2 }));
    assert_eq!(out[..2], vs[..2]);
}

#[test]
fn column_major_record_order() {
    let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let buf = write_one_bytes(&m);
    let floats: Vec<f32> = buf
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(floats, [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
}

#[test]
fn ivec4_native_layout() {
    let buf = write_one_bytes(&IVec4::new(1, -2, 3, -4));
    let expected: Vec<u8> = [1i32, -2, 3, -4].iter().flat_map(|v| v.to_ne_bytes()).collect();
    assert_eq!(buf, expected);
}

// ============================================================================
// Files and metadata
// ============================================================================

#[test]
fn file_backed_round_trip() {
    let points: Vec<Vec4> = (0..100)
        .map(|i| Vec4::new(i as f32, -(i as f32), 0.5, 1.0))
        .collect();

    let mut file = tempfile::tempfile().expect("tempfile");
    write_array(&mut file, &points, 0, points.len()).expect("write");
    file.flush().expect("flush");
    file.seek(SeekFrom::Start(0)).expect("rewind");

    let back: Vec<Vec4> = read_vec(&mut file, points.len()).expect("read");
    assert_eq!(back, points);
}

fn check_desc<T: BinarySerialize + GlType>() {
    assert_eq!(T::DESC.byte_size(), T::BYTE_SIZE);
    assert_eq!(T::DESC.components(), T::COMPONENTS);
    assert_eq!(byte_len::<T>(3), Some(3 * T::BYTE_SIZE));
}

#[test]
fn gl_descriptor_sizes_match_records() {
    check_desc::<f32>();
    check_desc::<i32>();
    check_desc::<Vec2>();
    check_desc::<Vec3>();
    check_desc::<Vec4>();
    check_desc::<IVec2>();
    check_desc::<IVec3>();
    check_desc::<IVec4>();
    check_desc::<Mat2>();
    check_desc::<Mat3>();
    check_desc::<Mat4>();
}
