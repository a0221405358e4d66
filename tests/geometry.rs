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

use trigon::geometry::{Point2, Polygon2, Segment2, Triangle2, Vector2, VectorOps};
use trigon::kernel::Orientation;
use trigon::numeric::trigon_f64::TrigonF64;

fn p(x: f64, y: f64) -> Point2<TrigonF64> {
    Point2::new(x, y)
}

fn poly(points: &[(f64, f64)]) -> Polygon2<TrigonF64> {
    Polygon2::new(points.iter().map(|&(x, y)| p(x, y)).collect())
}

#[test]
fn test_distance() {
    let p1 = p(0.0, 0.0);
    let p2 = p(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2).0, 5.0);
}

#[test]
fn test_point_difference_is_a_vector() {
    let v = &p(3.0, 5.0) - &p(1.0, 2.0);
    assert_eq!(v, Vector2::new(TrigonF64(2.0), TrigonF64(3.0)));
}

#[test]
fn test_vector_to() {
    let v = p(1.0, 2.0).vector_to(&p(3.0, 5.0));
    assert_eq!(v, Vector2::new(TrigonF64(2.0), TrigonF64(3.0)));
}

#[test]
fn test_vector_cross() {
    let v1 = Vector2::new(TrigonF64(1.0), TrigonF64(0.0));
    let v2 = Vector2::new(TrigonF64(0.0), TrigonF64(1.0));
    assert_eq!(v1.cross(&v2).0, 1.0);
    assert_eq!(v2.cross(&v1).0, -1.0);
}

#[test]
fn test_vector_dot() {
    let v1 = Vector2::new(TrigonF64(2.0), TrigonF64(3.0));
    let v2 = Vector2::new(TrigonF64(4.0), TrigonF64(-1.0));
    assert_eq!(v1.dot(&v2).0, 5.0);
    assert_eq!(v1.dot(&v2), v2.dot(&v1));
}

#[test]
fn test_vector_norm() {
    let v = Vector2::new(TrigonF64(3.0), TrigonF64(4.0));
    assert_eq!(v.norm().0, 5.0);
}

#[test]
fn test_segment_length() {
    let s = Segment2::new(&p(0.0, 0.0), &p(0.0, 5.0));
    assert_eq!(s.length().0, 5.0);
    assert!(!s.is_degenerate());
    assert!(Segment2::new(&p(1.0, 1.0), &p(1.0, 1.0)).is_degenerate());
}

#[test]
fn test_triangle_area() {
    let t = Triangle2::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    assert_eq!(t.signed_area().0, 8.0);
    assert_eq!(t.area().0, 8.0);

    let cw = Triangle2::new(p(0.0, 0.0), p(0.0, 4.0), p(4.0, 0.0));
    assert_eq!(cw.signed_area().0, -8.0);
    assert_eq!(cw.area().0, 8.0);
}

#[test]
fn test_triangle_bounded_side_is_strict() {
    let t = Triangle2::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));

    assert!(t.has_on_bounded_side(&p(1.0, 1.0)));
    assert!(!t.has_on_bounded_side(&p(2.0, 2.0))); // on the hypotenuse
    assert!(!t.has_on_bounded_side(&p(4.0, 0.0))); // on a vertex
    assert!(!t.has_on_bounded_side(&p(5.0, 5.0)));
}

#[test]
fn test_polygon_orientation() {
    let ccw = poly(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]);
    assert_eq!(ccw.orientation(), Orientation::CounterClockwise);
    assert_eq!(ccw.signed_area().0, 25.0);

    let cw = ccw.reversed();
    assert_eq!(cw.orientation(), Orientation::Clockwise);
    assert_eq!(cw.signed_area().0, -25.0);
    assert_eq!(cw.area().0, 25.0);
}

#[test]
fn test_polygon_simplicity() {
    let square = poly(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]);
    assert!(square.is_simple());

    let bowtie = poly(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(!bowtie.is_simple());

    let touching = poly(&[(0.0, 0.0), (5.0, 0.0), (4.0, 1.0), (3.0, 0.0), (2.0, 1.0)]);
    assert!(!touching.is_simple());

    let repeated = poly(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 0.0)]);
    assert!(!repeated.is_simple());

    let too_small = poly(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(!too_small.is_simple());
}

#[test]
fn test_concave_polygon_is_simple() {
    let concave = poly(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, 4.0)]);
    assert!(concave.is_simple());
    assert_eq!(concave.orientation(), Orientation::CounterClockwise);
    assert_eq!(concave.area().0, 3.0);
}
