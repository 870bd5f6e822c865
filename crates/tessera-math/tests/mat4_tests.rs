// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use tessera_math::{Mat3, Mat4, Vec3, Vec4};

const EPS: f32 = 1e-6;

fn counting() -> Mat4 {
    Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ])
}

fn approx_vec3(a: Vec3, b: [f32; 3], eps: f32) {
    for (i, (x, y)) in a.to_array().iter().zip(b).enumerate() {
        assert!((x - y).abs() <= eps, "index {i}: {a} vs {b:?}");
    }
}

#[test]
fn identity_zero_and_diagonal() {
    assert_eq!(Mat4::IDENTITY, Mat4::diagonal(1.0));
    assert_eq!(Mat4::default(), Mat4::IDENTITY);
    assert_eq!(Mat4::ZERO.trace(), 0.0);
    assert_eq!(Mat4::diagonal(2.0).e33(), 2.0);
}

#[test]
fn indexing_is_row_major() {
    let m = counting();
    assert_eq!(m[0][3], 4.0);
    assert_eq!(m.e03(), 4.0);
    assert_eq!(m[3][0], 13.0);
    assert_eq!(m.e30(), 13.0);
    assert_eq!(m.at(2, 1), 10.0);
}

#[test]
fn multiply_and_trace() {
    let m = counting();
    let expected = Mat4::from_rows([
        [90.0, 100.0, 110.0, 120.0],
        [202.0, 228.0, 254.0, 280.0],
        [314.0, 356.0, 398.0, 440.0],
        [426.0, 484.0, 542.0, 600.0],
    ]);
    assert_eq!(m * m, expected);
    assert_eq!(m.multiply(&m), expected);
    let mut acc = m;
    acc *= &m;
    assert_eq!(acc, expected);
    assert_eq!(m.trace(), 34.0);
}

#[test]
fn add_sub_scale_and_hadamard() {
    let m = counting();
    assert_eq!(m + m, m * 2.0);
    assert_eq!(m - m, Mat4::ZERO);
    assert_eq!(2.0 * m, m.scale_by(2.0));
    assert_eq!(m.hadamard(&Mat4::IDENTITY), Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 6.0, 0.0, 0.0],
        [0.0, 0.0, 11.0, 0.0],
        [0.0, 0.0, 0.0, 16.0],
    ]));
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let t = counting().transpose();
    assert_eq!(t[0], [1.0, 5.0, 9.0, 13.0]);
    assert_eq!(t.transpose(), counting());
}

#[test]
fn inverse_of_integer_matrix() {
    let m = Mat4::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 2.0, 1.0, 2.0],
        [1.0, 1.0, 1.0, 0.0],
        [1.0, 4.0, 2.0, 3.0],
    ]);
    let expected = Mat4::from_rows([
        [-1.0, 2.0, 1.0, -1.0],
        [-2.0, 1.0, 1.0, 0.0],
        [3.0, -3.0, -1.0, 1.0],
        [1.0, 0.0, -1.0, 0.0],
    ]);
    let inv = m.inverse();
    assert!(inv.max_abs_diff(&expected) <= EPS, "{inv}");
    assert!((m * inv).max_abs_diff(&Mat4::IDENTITY) <= EPS);
}

#[test]
fn singular_matrix_inverts_to_identity() {
    let m = counting();
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Mat4::IDENTITY);
    assert!(m.try_inverse().is_none());
}

#[test]
fn diagonal_inverse_halves() {
    let inv = Mat4::from_rows([
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
    .inverse();
    assert_eq!(inv[0][0], 0.5);
    assert_eq!(inv[1][1], 0.5);
    assert_eq!(inv[2][2], 0.5);
    assert_eq!(inv[3][3], 1.0);
}

#[test]
fn translation_moves_points_not_directions() {
    let t = Mat4::translation(2.0, 2.0, 2.0);
    assert_eq!(t.transform_point(Vec3::new(1.0, 2.0, 3.0)).to_array(), [3.0, 4.0, 5.0]);
    assert_eq!(t.transform_direction(Vec3::new(1.0, 2.0, 3.0)).to_array(), [1.0, 2.0, 3.0]);
    assert_eq!((t * Vec4::new(1.0, 2.0, 3.0, 4.0)).to_array(), [9.0, 10.0, 11.0, 4.0]);
}

#[test]
fn axis_rotations_follow_right_hand_rule() {
    approx_vec3(Mat4::rotation_z(FRAC_PI_2).transform_direction(Vec3::UNIT_X), [0.0, 1.0, 0.0], EPS);
    approx_vec3(Mat4::rotation_x(FRAC_PI_2).transform_direction(Vec3::UNIT_Y), [0.0, 0.0, 1.0], EPS);
    approx_vec3(Mat4::rotation_y(FRAC_PI_2).transform_direction(Vec3::UNIT_X), [0.0, 0.0, -1.0], EPS);
}

#[test]
fn axis_angle_matches_axis_rotations() {
    for angle in [FRAC_PI_4, FRAC_PI_3, -1.0] {
        let pairs = [
            (Mat4::rotation_axis_angle(Vec3::UNIT_X, angle), Mat4::rotation_x(angle)),
            (Mat4::rotation_axis_angle(Vec3::UNIT_Y, angle), Mat4::rotation_y(angle)),
            (Mat4::rotation_axis_angle(Vec3::UNIT_Z, angle), Mat4::rotation_z(angle)),
        ];
        for (a, b) in pairs {
            assert!(a.max_abs_diff(&b) <= EPS, "{a}\n{b}");
        }
    }
}

#[test]
fn rotation_inverse_is_transpose() {
    let r = Mat4::rotation_axis_angle(Vec3::new(0.69, 2.0, 0.45), 0.75);
    assert!(r.inverse().max_abs_diff(&r.transpose()) <= 1e-5);
}

#[test]
fn axis_angle_rotations_are_orthonormal_for_unnormalized_axes() {
    for axis in [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.69, 2.0, 0.45),
        Vec3::new(-7.0, 0.1, 3.0),
        Vec3::new(0.001, 0.002, -0.003),
    ] {
        let r = Mat4::rotation_axis_angle(axis, 1.1);
        assert!((r * r.transpose()).max_abs_diff(&Mat4::IDENTITY) <= 1e-5, "{axis}");
        assert!((r.upper_left().determinant() - 1.0).abs() <= 1e-5);
    }
}

#[cfg(feature = "hardware-rsqrt")]
#[test]
fn approximate_rsqrt_does_not_leak_into_rotations() {
    let axis = Vec3::new(0.69, 2.0, 0.45);
    assert!((axis.normalize_exact().length() - 1.0).abs() <= 1e-6);
    assert!((axis.normalize().length() - 1.0).abs() <= 1e-3);
    let r = Mat4::rotation_axis_angle(axis, 0.75);
    assert!((r * r.transpose()).max_abs_diff(&Mat4::IDENTITY) <= 1e-5);
}

#[test]
fn mat3_round_trips_through_mat4() {
    let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
    let m4 = Mat4::from_mat3(&m3);
    assert_eq!(m4.upper_left(), m3);
    assert_eq!(m4[3], [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(m4[0][3], 0.0);
}

#[test]
fn display_prints_one_row_per_line() {
    let s = Mat4::IDENTITY.to_string();
    assert_eq!(s.lines().count(), 4);
    assert_eq!(s.lines().next(), Some("1, 0, 0, 0"));
}
