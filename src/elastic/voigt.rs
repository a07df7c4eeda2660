/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Voigt notation for symmetric rank-2 tensors.
//!
//! Component order is (xx, yy, zz, yz, xz, xy) throughout. Strain vectors
//! use the engineering convention, carrying a factor of two on the shear
//! components; stress vectors do not.

use elcon_array_types::M33;
use std::ops::{Deref, DerefMut};

/// A strain tensor in engineering Voigt notation:
/// `(exx, eyy, ezz, 2 eyz, 2 exz, 2 exy)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct StrainVector(pub [f64; 6]);

/// A Cauchy stress tensor in Voigt notation:
/// `(sxx, syy, szz, syz, sxz, sxy)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct StressVector(pub [f64; 6]);

impl Deref for StrainVector {
    type Target = [f64; 6];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for StrainVector {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl Deref for StressVector {
    type Target = [f64; 6];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for StressVector {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl StrainVector {
    #[inline]
    pub fn zero() -> StrainVector
    { StrainVector([0.0; 6]) }

    /// The symmetric 3x3 strain matrix; shear Voigt components are split
    /// over the two off-diagonal slots.
    pub fn to_matrix(&self) -> M33 {
        let [e1, e2, e3, e4, e5, e6] = self.0;
        M33::from_array([
            [e1, e6 / 2.0, e5 / 2.0],
            [e6 / 2.0, e2, e4 / 2.0],
            [e5 / 2.0, e4 / 2.0, e3],
        ])
    }

    /// The deformation `I + strain` to apply to a lattice.
    pub fn deformation(&self) -> M33 {
        let mut m = self.to_matrix();
        for k in 0..3 {
            m[k][k] += 1.0;
        }
        m
    }

    pub fn from_matrix(m: &M33) -> StrainVector {
        StrainVector([
            m[0][0], m[1][1], m[2][2],
            m[1][2] + m[2][1],
            m[0][2] + m[2][0],
            m[0][1] + m[1][0],
        ])
    }

    pub fn max_abs(&self) -> f64
    { self.0.iter().fold(0.0, |acc: f64, x| acc.max(x.abs())) }

    #[inline]
    pub fn scaled(&self, factor: f64) -> StrainVector {
        let mut out = *self;
        for x in out.iter_mut() {
            *x *= factor;
        }
        out
    }
}

impl StressVector {
    /// Voigt form of a (symmetrized) 3x3 stress matrix.
    pub fn from_matrix(m: &M33) -> StressVector {
        StressVector([
            m[0][0], m[1][1], m[2][2],
            (m[1][2] + m[2][1]) / 2.0,
            (m[0][2] + m[2][0]) / 2.0,
            (m[0][1] + m[1][0]) / 2.0,
        ])
    }

    #[inline]
    pub fn scaled(&self, factor: f64) -> StressVector {
        let mut out = *self;
        for x in out.0.iter_mut() {
            *x *= factor;
        }
        out
    }
}
