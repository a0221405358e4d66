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
use crate::numeric::scalar::Scalar;

use std::ops::{Add, Div, Mul, Sub};

/// Winding direction of a vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    pub fn from_sign(sign: i8) -> Orientation {
        if sign > 0 {
            Orientation::CounterClockwise
        } else if sign < 0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    &(&(&b.x - &a.x) * &(&c.y - &a.y)) - &(&(&b.y - &a.y) * &(&c.x - &a.x))
}

#[cfg(test)]
mod tests {
    use crate::geometry::Point2;
    use crate::kernel::orientation::{Orientation, orient2d};
    use crate::numeric::scalar::Scalar;
    use crate::numeric::trigon_f64::TrigonF64;

    fn p(x: f64, y: f64) -> Point2<TrigonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_test() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(0.0, 1.0);

        assert_eq!(orient2d::<TrigonF64>(&a, &b, &c).sign(), 1); // Counter-clockwise
    }

    #[test]
    fn cw_test() {
        let a = p(0.0, 0.0);
        let b = p(0.0, 1.0);
        let c = p(1.0, 0.0);

        assert_eq!(orient2d::<TrigonF64>(&a, &b, &c).sign(), -1);
    }

    #[test]
    fn collinear_test() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 1.0);
        let c = p(2.0, 2.0);

        assert_eq!(orient2d::<TrigonF64>(&a, &b, &c).sign(), 0);
    }

    #[test]
    fn orientation_from_sign() {
        assert_eq!(Orientation::from_sign(1), Orientation::CounterClockwise);
        assert_eq!(Orientation::from_sign(-1), Orientation::Clockwise);
        assert_eq!(Orientation::from_sign(0), Orientation::Collinear);
    }
}
