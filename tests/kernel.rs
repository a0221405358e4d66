// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Trigon Contributors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use rug::Rational;

use trigon::geometry::Point2;
use trigon::kernel::{are_collinear, are_equal, orient2d, point_in_triangle, segments_intersect};
use trigon::numeric::scalar::Scalar;
use trigon::numeric::trigon_f64::TrigonF64;
use trigon::numeric::trigon_rational::TrigonRational;

fn p(x: f64, y: f64) -> Point2<TrigonF64> {
    Point2::new(x, y)
}

fn q(x: i32, y: i32) -> Point2<TrigonRational> {
    Point2::new(TrigonRational::from(x), TrigonRational::from(y))
}

#[test]
fn test_orient2d() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(0.0, 1.0);

    assert!(orient2d::<TrigonF64>(&a, &b, &c).0 > 0.0);
    assert!(orient2d::<TrigonF64>(&a, &c, &b).0 < 0.0);
}

#[test]
fn test_are_equal() {
    let a = p(1.0, 2.0);
    let b = p(1.0 + 1e-12, 2.0);
    let c = p(1.0 + 1e-6, 2.0);

    assert!(are_equal(&a, &b));
    assert!(!are_equal(&a, &c));
}

#[test]
fn test_are_collinear() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 1.0);
    let c = p(2.0, 2.0);

    assert!(are_collinear::<TrigonF64>(&a, &b, &c));

    let d = p(2.0, 2.000001);
    assert!(!are_collinear::<TrigonF64>(&a, &b, &d));
}

#[test]
fn test_segments_intersect() {
    // proper crossing
    assert!(segments_intersect::<TrigonF64>(
        &p(0.0, 0.0),
        &p(4.0, 4.0),
        &p(0.0, 4.0),
        &p(4.0, 0.0),
    ));
    // one endpoint on the other segment's interior
    assert!(segments_intersect::<TrigonF64>(
        &p(0.0, 0.0),
        &p(4.0, 0.0),
        &p(2.0, 0.0),
        &p(2.0, 3.0),
    ));
    // collinear overlap
    assert!(segments_intersect::<TrigonF64>(
        &p(0.0, 0.0),
        &p(3.0, 0.0),
        &p(2.0, 0.0),
        &p(5.0, 0.0),
    ));
    // collinear but disjoint
    assert!(!segments_intersect::<TrigonF64>(
        &p(0.0, 0.0),
        &p(1.0, 0.0),
        &p(2.0, 0.0),
        &p(3.0, 0.0),
    ));
    // disjoint
    assert!(!segments_intersect::<TrigonF64>(
        &p(0.0, 0.0),
        &p(1.0, 0.0),
        &p(0.0, 2.0),
        &p(1.0, 2.0),
    ));
}

#[test]
fn test_point_in_triangle_strictness() {
    let a = p(0.0, 0.0);
    let b = p(4.0, 0.0);
    let c = p(0.0, 4.0);

    assert!(point_in_triangle::<TrigonF64>(&p(1.0, 1.0), &a, &b, &c));
    assert!(!point_in_triangle::<TrigonF64>(&p(2.0, 0.0), &a, &b, &c));
    assert!(!point_in_triangle::<TrigonF64>(&p(0.0, 0.0), &a, &b, &c));

    // clockwise vertex order is accepted too
    assert!(point_in_triangle::<TrigonF64>(&p(1.0, 1.0), &a, &c, &b));
}

#[test]
fn test_rational_orient2d_is_exact() {
    let a = q(0, 0);
    let b = q(1, 0);
    let c = q(0, 1);

    assert_eq!(orient2d::<TrigonRational>(&a, &b, &c).sign(), 1);

    // a perturbation far below f64 resolution still has an exact sign
    let tiny = TrigonRational::from_num_den(1, i32::MAX);
    let almost = Point2::new(TrigonRational::from(2), &TrigonRational::from(2) - &tiny);
    assert_eq!(orient2d::<TrigonRational>(&a, &b, &almost).sign(), -1);
    assert_eq!(
        orient2d::<TrigonRational>(&q(0, 0), &q(1, 1), &q(2, 2)).0,
        Rational::from(0)
    );
}

#[test]
fn test_rational_point_in_triangle() {
    let a = q(0, 0);
    let b = q(4, 0);
    let c = q(0, 4);

    assert!(point_in_triangle::<TrigonRational>(&q(1, 1), &a, &b, &c));
    assert!(!point_in_triangle::<TrigonRational>(&q(2, 2), &a, &b, &c)); // on the hypotenuse
}
