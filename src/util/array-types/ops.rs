/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::types::{V3, M33};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, Neg};

// ---------------------------------------------------------------------------
// vector arithmetic

impl Add for V3 {
    type Output = V3;

    #[inline]
    fn add(self, other: V3) -> V3
    { V3([self[0] + other[0], self[1] + other[1], self[2] + other[2]]) }
}

impl Sub for V3 {
    type Output = V3;

    #[inline]
    fn sub(self, other: V3) -> V3
    { V3([self[0] - other[0], self[1] - other[1], self[2] - other[2]]) }
}

impl Neg for V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { V3([-self[0], -self[1], -self[2]]) }
}

impl Mul<f64> for V3 {
    type Output = V3;

    #[inline]
    fn mul(self, scale: f64) -> V3
    { V3([self[0] * scale, self[1] * scale, self[2] * scale]) }
}

impl AddAssign for V3 {
    #[inline]
    fn add_assign(&mut self, other: V3)
    { *self = *self + other; }
}

impl SubAssign for V3 {
    #[inline]
    fn sub_assign(&mut self, other: V3)
    { *self = *self - other; }
}

// ---------------------------------------------------------------------------
// vector products

#[inline]
pub fn dot(a: &V3, b: &V3) -> f64
{ a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }

impl V3 {
    pub fn cross(&self, other: &V3) -> V3 {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Outer product `a b^T`, as a row-based matrix.
pub fn outer(a: &V3, b: &V3) -> M33 {
    M33([*b * a[0], *b * a[1], *b * a[2]])
}

// ---------------------------------------------------------------------------
// matrix arithmetic

impl Add for M33 {
    type Output = M33;

    #[inline]
    fn add(self, other: M33) -> M33
    { M33([self[0] + other[0], self[1] + other[1], self[2] + other[2]]) }
}

impl AddAssign for M33 {
    #[inline]
    fn add_assign(&mut self, other: M33)
    { *self = *self + other; }
}

impl Mul<f64> for M33 {
    type Output = M33;

    #[inline]
    fn mul(self, scale: f64) -> M33
    { M33([self[0] * scale, self[1] * scale, self[2] * scale]) }
}

/// Row vector times matrix; this is how points transform.
impl Mul<&M33> for V3 {
    type Output = V3;

    fn mul(self, m: &M33) -> V3 {
        let mut out = V3::zero();
        for c in 0..3 {
            out[c] = self[0] * m[0][c] + self[1] * m[1][c] + self[2] * m[2][c];
        }
        out
    }
}

impl Mul<&M33> for &M33 {
    type Output = M33;

    fn mul(self, other: &M33) -> M33 {
        M33([self[0] * other, self[1] * other, self[2] * other])
    }
}

// ---------------------------------------------------------------------------

/// Matrix inverse. `None` for a singular input.
pub fn inv(m: &M33) -> Option<M33> {
    let det = m.det();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let cofactor = |r1: usize, r2: usize, c1: usize, c2: usize| {
        m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
    };
    // adjugate over determinant; out[r][c] is the (c, r) cofactor
    let out = M33::from_array([
        [cofactor(1, 2, 1, 2), -cofactor(0, 2, 1, 2), cofactor(0, 1, 1, 2)],
        [-cofactor(1, 2, 0, 2), cofactor(0, 2, 0, 2), -cofactor(0, 1, 0, 2)],
        [cofactor(1, 2, 0, 1), -cofactor(0, 2, 0, 1), cofactor(0, 1, 0, 1)],
    ]);
    Some(out * det.recip())
}

/// Helper constructors in the style of a `mat::` namespace.
pub mod mat {
    use super::*;

    #[inline]
    pub fn eye() -> M33
    { from_diag([1.0, 1.0, 1.0]) }

    pub fn from_diag([a, b, c]: [f64; 3]) -> M33 {
        M33::from_array([
            [a, 0.0, 0.0],
            [0.0, b, 0.0],
            [0.0, 0.0, c],
        ])
    }

    #[inline]
    pub fn from_array(rows: [[f64; 3]; 3]) -> M33
    { M33::from_array(rows) }
}

// ---------------------------------------------------------------------------
