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
use rug::Rational;
use rug::ops::Pow as RugPow;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Pow, Sqrt, Zero},
};

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Exact scalar backed by `rug::Rational`. Predicate signs are exact, so the
/// tolerance band is zero.
#[derive(Clone, Debug)]
pub struct TrigonRational(pub Rational);

impl Scalar for TrigonRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        TrigonRational(Rational::from((num, den)))
    }

    fn tolerance() -> Self {
        TrigonRational(Rational::new())
    }

    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<'a, 'b> Add<&'b TrigonRational> for &'a TrigonRational {
    type Output = TrigonRational;

    fn add(self, rhs: &'b TrigonRational) -> TrigonRational {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        TrigonRational(result)
    }
}

impl Add for TrigonRational {
    type Output = TrigonRational;

    fn add(self, rhs: TrigonRational) -> TrigonRational {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b TrigonRational> for &'a TrigonRational {
    type Output = TrigonRational;

    fn sub(self, rhs: &'b TrigonRational) -> TrigonRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        TrigonRational(result)
    }
}

impl Sub for TrigonRational {
    type Output = TrigonRational;

    fn sub(self, rhs: TrigonRational) -> TrigonRational {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b TrigonRational> for &'a TrigonRational {
    type Output = TrigonRational;

    fn mul(self, rhs: &'b TrigonRational) -> TrigonRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        TrigonRational(result)
    }
}

impl Mul for TrigonRational {
    type Output = TrigonRational;

    fn mul(self, rhs: TrigonRational) -> TrigonRational {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b TrigonRational> for &'a TrigonRational {
    type Output = TrigonRational;

    fn div(self, rhs: &'b TrigonRational) -> TrigonRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        TrigonRational(result)
    }
}

impl Div for TrigonRational {
    type Output = TrigonRational;

    fn div(self, rhs: TrigonRational) -> TrigonRational {
        &self / &rhs
    }
}

impl Neg for TrigonRational {
    type Output = TrigonRational;

    fn neg(self) -> TrigonRational {
        TrigonRational(-self.0)
    }
}

impl PartialEq for TrigonRational {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for TrigonRational {}

impl PartialOrd for TrigonRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Abs for TrigonRational {
    fn abs(&self) -> Self {
        TrigonRational(self.0.clone().abs())
    }
}

impl Pow for TrigonRational {
    fn pow(&self, exp: i32) -> Self {
        TrigonRational(self.0.clone().pow(exp))
    }
}

impl Sqrt for TrigonRational {
    fn sqrt(&self) -> Self {
        // Square roots of rationals are irrational in general; round-trip
        // through f64 for a nearby representable value.
        let approx = self.0.to_f64().sqrt();
        TrigonRational(Rational::from_f64(approx).unwrap_or_else(Rational::new))
    }
}

impl Zero for TrigonRational {
    fn zero() -> Self {
        TrigonRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for TrigonRational {
    fn one() -> Self {
        TrigonRational(Rational::from(1))
    }
}

impl From<i32> for TrigonRational {
    fn from(value: i32) -> Self {
        TrigonRational(Rational::from(value))
    }
}

impl From<f64> for TrigonRational {
    fn from(value: f64) -> Self {
        // Non-finite inputs have no rational value; map them to zero rather
        // than panic inside a From impl.
        TrigonRational(Rational::from_f64(value).unwrap_or_else(Rational::new))
    }
}

impl ToPrimitive for TrigonRational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0.to_f64() as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        let approx = self.0.to_f64();
        if approx < 0.0 { None } else { Some(approx as u64) }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}
