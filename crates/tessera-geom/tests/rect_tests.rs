// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use tessera_geom::{Rect2, Rect3};
use tessera_math::{Point2, Point3, Vec2, Vec3};

fn unit_cube() -> Rect3 {
    Rect3::from_bounds(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)
}

#[test]
fn two_point_constructor_orders_corners() {
    let r = Rect2::new(Point2::new(3.0, -1.0), Point2::new(1.0, 2.0));
    assert_eq!(r.min().to_array(), [1.0, -1.0]);
    assert_eq!(r.max().to_array(), [3.0, 2.0]);
    assert!(r.is_valid());
    assert_eq!(r.surface_area(), 6.0);
}

#[test]
fn union_and_intersection_identities() {
    let r = Rect3::new(Point3::new(-1.0, 2.0, 0.5), Point3::new(4.0, 3.0, -2.0));
    assert_eq!(r.union(&r), r);
    assert_eq!(r.union(&Rect3::EMPTY), r);
    assert_eq!(Rect3::EMPTY.union(&r), r);
    assert_eq!(r.intersection(&r), r);
    for c in r.corners() {
        assert!(r.contains_point(c));
        assert!(!r.contains_point_exclusive(c));
    }
}

#[test]
fn rect2_union_and_intersection_identities() {
    let r = Rect2::new(Point2::new(-1.0, 2.0), Point2::new(4.0, -3.0));
    assert_eq!(r.union(&r), r);
    assert_eq!(r.union(&Rect2::EMPTY), r);
    assert_eq!(Rect2::EMPTY.union(&r), r);
    assert_eq!(r.intersection(&r), r);
    assert!(!Rect2::EMPTY.overlaps(&r));
    for c in r.corners() {
        assert!(r.contains_point(c));
        assert!(!r.contains_point_exclusive(c));
    }
}

#[test]
fn rect2_from_points() {
    let pts = [Point2::new(1.0, 5.0), Point2::new(-3.0, 0.0), Point2::new(0.0, 2.0)];
    assert_eq!(Rect2::from_points(&pts), Rect2::from_bounds(-3.0, 0.0, 1.0, 5.0));
    assert_eq!(Rect2::from_points(&[]), Rect2::EMPTY);
}

#[test]
fn empty_sentinel_overlaps_nothing() {
    let e = Rect3::empty();
    assert!(e.is_empty());
    assert!(!e.is_valid());
    assert!(!e.overlaps(&unit_cube()));
    assert!(!unit_cube().overlaps(&e));
    assert!(!e.contains_point(Point3::ORIGIN));
    assert_eq!(Rect3::default(), e);
    assert_eq!(Rect3::from_points(&[]), e);
}

#[test]
fn overlap_is_inclusive_on_faces() {
    let a = unit_cube();
    let touching = Rect3::from_bounds(1.0, 0.0, 0.0, 2.0, 1.0, 1.0);
    let apart = Rect3::from_bounds(1.5, 0.0, 0.0, 2.0, 1.0, 1.0);
    assert!(a.overlaps(&touching));
    assert!(!a.overlaps(&apart));
    let i = a.intersection(&touching);
    assert!(i.is_valid());
    assert_eq!(i.volume(), 0.0);
    assert!(!a.intersection(&apart).is_valid());
}

#[test]
fn containment_differs_only_on_the_boundary() {
    let r = Rect2::from_bounds(0.0, 0.0, 2.0, 2.0);
    assert!(r.contains_point(Point2::new(1.0, 1.0)));
    assert!(r.contains_point_exclusive(Point2::new(1.0, 1.0)));
    assert!(r.contains_point(Point2::new(2.0, 0.5)));
    assert!(!r.contains_point_exclusive(Point2::new(2.0, 0.5)));
    assert!(!r.contains_point(Point2::new(2.1, 0.5)));
}

#[test]
fn measures() {
    let r = Rect3::from_bounds(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
    assert_eq!(r.diagonal().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(r.surface_area(), 22.0);
    assert_eq!(r.volume(), 6.0);
    assert_eq!(r.max_extent(), 2);
    let grown = r.expand(0.5);
    assert_eq!(grown.min().to_array(), [-0.5, -0.5, -0.5]);
    assert_eq!(grown.max().to_array(), [1.5, 2.5, 3.5]);
}

#[test]
fn offset_and_lerp_are_inverse() {
    let r = Rect3::from_bounds(-1.0, 0.0, 2.0, 3.0, 8.0, 4.0);
    let p = Point3::new(0.0, 2.0, 3.5);
    let o = r.offset(p);
    assert_eq!(o.to_array(), [0.25, 0.25, 0.75]);
    assert_eq!(r.lerp(o), p);
    assert_eq!(r.lerp(Vec3::ZERO), r.min());
    assert_eq!(r.lerp(Vec3::splat(1.0)), r.max());

    let flat = Rect2::from_bounds(0.0, 1.0, 4.0, 1.0);
    assert_eq!(flat.offset(Point2::new(1.0, 3.0)), Vec2::new(0.25, 2.0));
}

#[test]
fn union_point_and_from_points() {
    let pts = [
        Point3::new(1.0, 5.0, -2.0),
        Point3::new(-3.0, 0.0, 4.0),
        Point3::new(0.0, 2.0, 0.0),
    ];
    let r = Rect3::from_points(&pts);
    assert_eq!(r, Rect3::from_bounds(-3.0, 0.0, -2.0, 1.0, 5.0, 4.0));
    let single = Rect3::from_point(pts[2]);
    assert!(single.is_valid());
    assert_eq!(single.volume(), 0.0);
    assert_eq!(single.union_point(pts[0]).union_point(pts[1]), r);
}

#[test]
fn centered_box() {
    let r = Rect3::from_center_half_extents(Point3::new(1.0, 0.0, 0.0), 1.0, 0.5, 2.0);
    assert_eq!(r, Rect3::from_bounds(0.0, -0.5, -2.0, 2.0, 0.5, 2.0));
}

#[test]
fn infinite_contains_everything_finite() {
    let r = Rect3::infinite();
    assert!(r.contains_point(Point3::new(1e30, -1e30, 0.0)));
    assert!(r.overlaps(&unit_cube()));
    assert_eq!(r.intersection(&unit_cube()), unit_cube());
}

#[test]
fn rect2_corners() {
    let r = Rect2::from_bounds(0.0, 0.0, 2.0, 1.0);
    assert_eq!(r.corner(0).to_array(), [0.0, 0.0]);
    assert_eq!(r.corner(1).to_array(), [2.0, 0.0]);
    assert_eq!(r.corner(2).to_array(), [0.0, 1.0]);
    assert_eq!(r.corner(3).to_array(), [2.0, 1.0]);
    assert_eq!(r.corners(), [r.corner(0), r.corner(1), r.corner(2), r.corner(3)]);
}
