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

use crate::geometry::{Polygon2, Triangle2};
use crate::numeric::scalar::Scalar;

use std::fmt;

pub mod ear_clipping;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangulationError {
    /// The input polygon is not simple (or has fewer than 3 vertices).
    InvalidInput,
    /// The pass budget ran out before the polygon collapsed to a triangle,
    /// which indicates predicate failures on near-degenerate geometry.
    NumericalFailure,
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangulationError::InvalidInput => {
                write!(f, "input polygon has to be a simple polygon")
            }
            TriangulationError::NumericalFailure => {
                write!(
                    f,
                    "failed to properly triangulate due to numerical issues in ear detection"
                )
            }
        }
    }
}

impl std::error::Error for TriangulationError {}

/// Polygon-to-triangles decomposition. Implementations are stateless; every
/// call owns all of its working storage.
pub trait Triangulate2D<T: Scalar> {
    fn triangulate(polygon: &Polygon2<T>) -> Result<Vec<Triangle2<T>>, TriangulationError>;
}
