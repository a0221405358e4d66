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

//! Ear-clipping triangulation of simple polygons. Repeatedly clips a vertex
//! whose corner triangle is locally convex and empty of other ring vertices
//! until only one triangle remains.

use crate::geometry::{Point2, Polygon2, Triangle2, VectorOps};
use crate::kernel::orientation::Orientation;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::{Triangulate2D, TriangulationError};

use std::ops::{Add, Div, Mul, Sub};

pub struct EarClipping;

impl<T> Triangulate2D<T> for EarClipping
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Triangulates a simple polygon into `vertex_count - 2` triangles built
    /// from the polygon's own vertices.
    ///
    /// Fails with [`TriangulationError::InvalidInput`] when the polygon is
    /// not simple, and with [`TriangulationError::NumericalFailure`] when
    /// the reduction does not finish within the pass budget; in the latter
    /// case no partial output is returned.
    fn triangulate(polygon: &Polygon2<T>) -> Result<Vec<Triangle2<T>>, TriangulationError> {
        if polygon.vertex_count() < 3 || !polygon.is_simple() {
            return Err(TriangulationError::InvalidInput);
        }

        // Orientation is invariant under ear removal; compute it once.
        let orientation = polygon.orientation();
        if orientation == Orientation::Collinear {
            return Err(TriangulationError::InvalidInput);
        }

        let mut ring: Vec<Point2<T>> = polygon.vertices().to_vec();
        let mut triangles = Vec::with_capacity(ring.len() - 2);

        // A correct run detects at least one ear per pass, so
        // vertex_count - 3 passes suffice. Bounding the loop turns a
        // predicate failure on near-degenerate input into a reported error
        // instead of an infinite loop.
        let max_passes = ring.len() - 3;
        for _ in 0..max_passes {
            let mut i = 0;
            while i < ring.len() {
                if is_ear(&ring, i, orientation) {
                    let prev = ring_previous(ring.len(), i);
                    let next = ring_next(ring.len(), i);
                    triangles.push(Triangle2::new(
                        ring[prev].clone(),
                        ring[i].clone(),
                        ring[next].clone(),
                    ));
                    ring.remove(i);
                    if ring.len() == 3 {
                        break;
                    }
                    // the clipped vertex's successor now sits at index i
                } else {
                    i += 1;
                }
            }
            if ring.len() == 3 {
                break;
            }
        }

        if ring.len() != 3 {
            // Discard the partial triangulation; callers never observe it.
            return Err(TriangulationError::NumericalFailure);
        }

        triangles.push(Triangle2::new(
            ring[0].clone(),
            ring[1].clone(),
            ring[2].clone(),
        ));
        Ok(triangles)
    }
}

/// Whether the ring vertex at `index` is an ear: its corner is locally
/// convex and no other ring vertex lies strictly inside the triangle formed
/// with its two ring neighbors.
pub fn is_ear<T>(ring: &[Point2<T>], index: usize, orientation: Orientation) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let prev_index = ring_previous(ring.len(), index);
    let next_index = ring_next(ring.len(), index);
    let prev = &ring[prev_index];
    let curr = &ring[index];
    let next = &ring[next_index];

    if !is_convex(prev, curr, next, orientation) {
        return false;
    }

    // A far vertex of a concave polygon can reach into a locally convex
    // corner, so every remaining ring vertex has to be checked, not just a
    // neighborhood.
    let candidate = Triangle2::new(prev.clone(), curr.clone(), next.clone());
    for (j, p) in ring.iter().enumerate() {
        if j == prev_index || j == index || j == next_index {
            continue;
        }
        if candidate.has_on_bounded_side(p) {
            return false;
        }
    }

    true
}

/// Whether the corner `prev -> curr -> next` turns toward the polygon
/// interior. The sign convention flips with the winding direction.
fn is_convex<T>(
    prev: &Point2<T>,
    curr: &Point2<T>,
    next: &Point2<T>,
    orientation: Orientation,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let v1 = next - curr;
    let v2 = curr - prev;
    let cross = v1.cross(&v2);

    match orientation {
        Orientation::CounterClockwise => cross.sign() < 0,
        Orientation::Clockwise => cross.sign() > 0,
        Orientation::Collinear => false,
    }
}

/// Ring successor of `index`, wrapping past the end.
fn ring_next(len: usize, index: usize) -> usize {
    if index + 1 == len { 0 } else { index + 1 }
}

/// Ring predecessor of `index`, wrapping past the start.
fn ring_previous(len: usize, index: usize) -> usize {
    if index == 0 { len - 1 } else { index - 1 }
}

#[cfg(test)]
mod tests {
    use super::{is_convex, ring_next, ring_previous};
    use crate::geometry::Point2;
    use crate::kernel::orientation::Orientation;
    use crate::numeric::trigon_f64::TrigonF64;

    fn p(x: f64, y: f64) -> Point2<TrigonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn ring_lookups_wrap() {
        assert_eq!(ring_next(4, 0), 1);
        assert_eq!(ring_next(4, 3), 0);
        assert_eq!(ring_previous(4, 1), 0);
        assert_eq!(ring_previous(4, 0), 3);
    }

    #[test]
    fn convexity_flips_with_winding() {
        let prev = p(0.0, 0.0);
        let curr = p(2.0, 0.0);
        let next = p(2.0, 2.0);

        assert!(is_convex::<TrigonF64>(&prev, &curr, &next, Orientation::CounterClockwise));
        assert!(!is_convex::<TrigonF64>(&prev, &curr, &next, Orientation::Clockwise));
    }

    #[test]
    fn reflex_corner_is_not_convex() {
        // corner of the single-concavity quad (0,0),(1,1),(2,0),(1,4)
        let prev = p(0.0, 0.0);
        let curr = p(1.0, 1.0);
        let next = p(2.0, 0.0);

        assert!(!is_convex::<TrigonF64>(&prev, &curr, &next, Orientation::CounterClockwise));
    }

    #[test]
    fn straight_corner_is_not_convex() {
        let prev = p(0.0, 0.0);
        let curr = p(1.0, 0.0);
        let next = p(2.0, 0.0);

        assert!(!is_convex::<TrigonF64>(&prev, &curr, &next, Orientation::CounterClockwise));
        assert!(!is_convex::<TrigonF64>(&prev, &curr, &next, Orientation::Clockwise));
    }
}
