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

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

use std::ops::{Add, Div, Mul, Sub};

pub fn are_equal<T: Scalar>(a: &Point2<T>, b: &Point2<T>) -> bool {
    a.x.approx_eq(&b.x) && a.y.approx_eq(&b.y)
}

pub fn are_collinear<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    orient2d(a, b, c).sign() == 0
}

/// Whether segments `p1p2` and `p3p4` share at least one point. Endpoint
/// contact and collinear overlap both count as intersection.
pub fn segments_intersect<T: Scalar>(
    p1: &Point2<T>,
    p2: &Point2<T>,
    p3: &Point2<T>,
    p4: &Point2<T>,
) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let d1 = orient2d(p3, p4, p1).sign();
    let d2 = orient2d(p3, p4, p2).sign();
    let d3 = orient2d(p1, p2, p3).sign();
    let d4 = orient2d(p1, p2, p4).sign();

    if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0)) {
        return true; // proper crossing
    }

    (d1 == 0 && in_bounding_box(p3, p4, p1))
        || (d2 == 0 && in_bounding_box(p3, p4, p2))
        || (d3 == 0 && in_bounding_box(p1, p2, p3))
        || (d4 == 0 && in_bounding_box(p1, p2, p4))
}

/// Strictly-interior point-in-triangle test. Points exactly on an edge or
/// vertex of `abc` are NOT inside; both windings of `abc` are accepted.
pub fn point_in_triangle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let d1 = orient2d(a, b, p).sign();
    let d2 = orient2d(b, c, p).sign();
    let d3 = orient2d(c, a, p).sign();

    (d1 > 0 && d2 > 0 && d3 > 0) || (d1 < 0 && d2 < 0 && d3 < 0)
}

// Collinearity with the segment is established by the caller; only the
// coordinate ranges remain to be checked.
fn in_bounding_box<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> bool {
    let x_in = if a.x < b.x {
        a.x <= p.x && p.x <= b.x
    } else {
        b.x <= p.x && p.x <= a.x
    };
    let y_in = if a.y < b.y {
        a.y <= p.y && p.y <= b.y
    } else {
        b.y <= p.y && p.y <= a.y
    };
    x_in && y_in
}

#[cfg(test)]
mod tests {
    use crate::geometry::Point2;
    use crate::kernel::predicates::{point_in_triangle, segments_intersect};
    use crate::numeric::trigon_f64::TrigonF64;

    fn p(x: f64, y: f64) -> Point2<TrigonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect::<TrigonF64>(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0),
        ));
    }

    #[test]
    fn endpoint_contact_counts() {
        assert!(segments_intersect::<TrigonF64>(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 3.0),
        ));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!segments_intersect::<TrigonF64>(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0),
        ));
    }

    #[test]
    fn boundary_point_is_not_inside() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 0.0);
        let c = p(0.0, 4.0);

        assert!(point_in_triangle::<TrigonF64>(&p(1.0, 1.0), &a, &b, &c));
        assert!(!point_in_triangle::<TrigonF64>(&p(2.0, 0.0), &a, &b, &c)); // on edge
        assert!(!point_in_triangle::<TrigonF64>(&p(0.0, 0.0), &a, &b, &c)); // on vertex
    }
}
