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

use crate::geometry::point_2::Point2;
use crate::kernel::orientation::Orientation;
use crate::kernel::predicates::segments_intersect;
use crate::numeric::scalar::Scalar;
use crate::operations::{Abs, Zero};

use std::ops::{Add, Div, Mul, Sub};

/// Ordered vertex ring of a closed polygon. The edge from the last vertex
/// back to the first is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon2<T>
where
    T: Scalar,
{
    vertices: Vec<Point2<T>>,
}

impl<T> Polygon2<T>
where
    T: Scalar,
{
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The same boundary traversed in the opposite winding.
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().cloned().collect(),
        }
    }
}

impl<T> Polygon2<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Shoelace sum halved. Positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> T {
        let n = self.vertices.len();
        let mut sum = T::zero();
        for i in 0..n {
            let p = &self.vertices[i];
            let q = &self.vertices[if i + 1 == n { 0 } else { i + 1 }];
            sum = sum + (&(&p.x * &q.y) - &(&p.y * &q.x));
        }
        sum / T::from(2)
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_sign(self.signed_area().sign())
    }

    /// Whether the boundary is simple: no repeated vertices and no contact
    /// between non-adjacent edges. Adjacent edges share exactly their common
    /// endpoint by construction and are not tested against each other.
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if self.vertices[i] == self.vertices[j] {
                    return false;
                }
            }
        }

        for i in 0..n {
            let a1 = &self.vertices[i];
            let a2 = &self.vertices[if i + 1 == n { 0 } else { i + 1 }];
            for j in (i + 1)..n {
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue; // shares an endpoint with edge i
                }
                let b1 = &self.vertices[j];
                let b2 = &self.vertices[if j + 1 == n { 0 } else { j + 1 }];
                if segments_intersect(a1, a2, b1, b2) {
                    return false;
                }
            }
        }

        true
    }
}
