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

use num_traits::ToPrimitive;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Pow, Sqrt, Zero},
};

use std::ops::{Add, Div, Mul, Neg, Sub};

pub const EPS: f64 = 1e-10;

/// Approximate scalar backed by `f64`. Predicate signs are classified with
/// an `EPS` band around zero.
#[derive(Clone, Copy, Debug)]
pub struct TrigonF64(pub f64);

impl Scalar for TrigonF64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        TrigonF64(num as f64 / den as f64)
    }

    fn tolerance() -> Self {
        TrigonF64(EPS)
    }

    fn sign(&self) -> i8 {
        if self.0 > EPS {
            1
        } else if self.0 < -EPS {
            -1
        } else {
            0
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < EPS
    }
}

impl<'a, 'b> Add<&'b TrigonF64> for &'a TrigonF64 {
    type Output = TrigonF64;

    fn add(self, rhs: &'b TrigonF64) -> TrigonF64 {
        TrigonF64(self.0 + rhs.0)
    }
}

impl Add for TrigonF64 {
    type Output = TrigonF64;

    fn add(self, rhs: TrigonF64) -> TrigonF64 {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b TrigonF64> for &'a TrigonF64 {
    type Output = TrigonF64;

    fn sub(self, rhs: &'b TrigonF64) -> TrigonF64 {
        TrigonF64(self.0 - rhs.0)
    }
}

impl Sub for TrigonF64 {
    type Output = TrigonF64;

    fn sub(self, rhs: TrigonF64) -> TrigonF64 {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b TrigonF64> for &'a TrigonF64 {
    type Output = TrigonF64;

    fn mul(self, rhs: &'b TrigonF64) -> TrigonF64 {
        TrigonF64(self.0 * rhs.0)
    }
}

impl Mul for TrigonF64 {
    type Output = TrigonF64;

    fn mul(self, rhs: TrigonF64) -> TrigonF64 {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b TrigonF64> for &'a TrigonF64 {
    type Output = TrigonF64;

    fn div(self, rhs: &'b TrigonF64) -> TrigonF64 {
        TrigonF64(self.0 / rhs.0)
    }
}

impl Div for TrigonF64 {
    type Output = TrigonF64;

    fn div(self, rhs: TrigonF64) -> TrigonF64 {
        &self / &rhs
    }
}

impl Neg for TrigonF64 {
    type Output = TrigonF64;

    fn neg(self) -> TrigonF64 {
        TrigonF64(-self.0)
    }
}

impl PartialEq for TrigonF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for TrigonF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Abs for TrigonF64 {
    fn abs(&self) -> Self {
        TrigonF64(self.0.abs())
    }
}

impl Pow for TrigonF64 {
    fn pow(&self, exp: i32) -> Self {
        TrigonF64(self.0.powi(exp))
    }
}

impl Sqrt for TrigonF64 {
    fn sqrt(&self) -> Self {
        TrigonF64(self.0.sqrt())
    }
}

impl Zero for TrigonF64 {
    fn zero() -> Self {
        TrigonF64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for TrigonF64 {
    fn one() -> Self {
        TrigonF64(1.0)
    }
}

impl From<i32> for TrigonF64 {
    fn from(value: i32) -> Self {
        TrigonF64(value as f64)
    }
}

impl From<f64> for TrigonF64 {
    fn from(value: f64) -> Self {
        TrigonF64(value)
    }
}

impl ToPrimitive for TrigonF64 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        if self.0 < 0.0 { None } else { Some(self.0 as u64) }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}
