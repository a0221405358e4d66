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
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::point_in_triangle;
use crate::numeric::scalar::Scalar;
use crate::operations::Abs;

use std::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle2<T>
where
    T: Scalar,
{
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub c: Point2<T>,
}

impl<T> Triangle2<T>
where
    T: Scalar,
{
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [&Point2<T>; 3] {
        [&self.a, &self.b, &self.c]
    }
}

impl<T> Triangle2<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Positive for counter-clockwise vertex order, negative for clockwise.
    pub fn signed_area(&self) -> T {
        orient2d(&self.a, &self.b, &self.c) / T::from(2)
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Whether `p` lies strictly inside the triangle. Points on the boundary
    /// are on the unbounded side for the purposes of this test.
    pub fn has_on_bounded_side(&self, p: &Point2<T>) -> bool {
        point_in_triangle(p, &self.a, &self.b, &self.c)
    }
}
