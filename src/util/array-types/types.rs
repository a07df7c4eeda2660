/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::{Deref, DerefMut};

// ---------------------------------------------------------------------------

/// A 3-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct V3(pub [f64; 3]);

/// A dense 3x3 matrix, stored as rows.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct M33(pub [V3; 3]);

// ---------------------------------------------------------------------------
// Both types behave generally like their backing array type.

impl Deref for V3 {
    type Target = [f64; 3];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for V3 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl Deref for M33 {
    type Target = [V3; 3];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for M33 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<'a> IntoIterator for &'a V3 {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

// forward the debug impls without a surrounding "V3(...)"
impl fmt::Debug for V3 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl fmt::Debug for M33 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------

impl V3 {
    #[inline(always)]
    pub fn zero() -> V3
    { V3([0.0; 3]) }

    #[inline]
    pub fn sqnorm(&self) -> f64
    { self.0.iter().map(|x| x * x).sum() }

    #[inline]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    #[inline]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> V3
    { V3([f(self[0]), f(self[1]), f(self[2])]) }

    /// The unit vector along `self`.
    #[inline]
    pub fn unit(&self) -> V3
    { *self * self.norm().recip() }
}

impl M33 {
    #[inline(always)]
    pub fn zero() -> M33
    { M33([V3::zero(); 3]) }

    pub fn from_array(rows: [[f64; 3]; 3]) -> M33
    { M33([V3(rows[0]), V3(rows[1]), V3(rows[2])]) }

    pub fn into_array(self) -> [[f64; 3]; 3]
    { [self[0].0, self[1].0, self[2].0] }

    /// Matrix transpose.
    pub fn t(&self) -> M33 {
        let mut out = M33::zero();
        for r in 0..3 {
            for c in 0..3 {
                out[c][r] = self[r][c];
            }
        }
        out
    }

    /// Matrix determinant.
    pub fn det(&self) -> f64 {
        let m = self;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}
