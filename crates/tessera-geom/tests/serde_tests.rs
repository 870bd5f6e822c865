// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
use tessera_geom::{Axis, Rect3, Transform};
use tessera_math::{Point3, Vec3};

#[test]
fn transform_keeps_its_cached_inverse_through_json() {
    let t = Transform::trs(
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(2.0, 2.0, 0.5),
        Some((Axis::Z, 30.0)),
    );
    let json = serde_json::to_string(&t).unwrap();
    let back: Transform = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
    assert_eq!(back.inverse_matrix(), t.inverse_matrix());
}

#[test]
fn rect_and_axis_round_trip() {
    let r = Rect3::new(Point3::new(0.0, 1.0, 2.0), Point3::new(-1.0, 4.0, 2.5));
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(serde_json::from_str::<Rect3>(&json).unwrap(), r);
    assert_eq!(serde_json::to_string(&Axis::Y).unwrap(), "\"Y\"");
}
