/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use elcon_array_types::{V3, M33, mat, inv};
use std::sync::Arc;

/// The reference cell matrix could not be inverted.
#[derive(Debug, Fail)]
#[fail(display = "lattice matrix is degenerate (non-invertible cell)")]
pub struct DegenerateLatticeError;

/// Defines a vector basis for periodic boundary conditions in three dimensions.
///
/// Rows of the matrix are the lattice vectors. The inverse is computed once
/// at construction; a `Lattice` that exists is always invertible.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: Arc<M33>,
    inverse: Arc<M33>,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        **matrix == *other.matrix()
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    ///
    /// Fails with [`DegenerateLatticeError`] for a singular cell matrix.
    pub fn new(matrix: &M33) -> FailResult<Self> {
        let inverse = inv(matrix).ok_or(DegenerateLatticeError)?;
        Ok(Self {
            matrix: Arc::new(*matrix),
            inverse: Arc::new(inverse),
        })
    }

    #[inline]
    pub fn from_vectors(vectors: &[V3; 3]) -> FailResult<Self>
    { Self::new(&M33(*vectors)) }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix().0 }

    /// Get the (positive) volume of the lattice cell.
    pub fn volume(&self) -> f64
    { self.matrix().det().abs() }

    /// Apply a cartesian transformation to the lattice.
    ///
    /// Each lattice vector `a` is replaced by `a * m^T`. Fails if the
    /// transformed cell is degenerate.
    pub fn transformed_by(&self, m: &M33) -> FailResult<Lattice>
    { Lattice::new(&(self.matrix() * &m.t())) }
}

/// Helper constructors
impl Lattice {
    /// The identity lattice.
    #[inline]
    pub fn eye() -> Self { Self::cubic(1.0) }

    // NOTE: only bravais lattices whose matrix representations are dead
    //       obvious get helpers; the diagonal is inverted in place so these
    //       cannot hit the degenerate path.

    /// A cubic lattice ((a, a, a), (90, 90, 90))
    #[inline]
    pub fn cubic(a: f64) -> Self { Self::orthorhombic(a, a, a) }

    /// An orthorhombic lattice ((a, b, c), (90, 90, 90))
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        assert!(a != 0.0 && b != 0.0 && c != 0.0, "zero lattice constant");
        Self {
            matrix: Arc::new(mat::from_diag([a, b, c])),
            inverse: Arc::new(mat::from_diag([a.recip(), b.recip(), c.recip()])),
        }
    }
}

/// Defaults to the identity matrix.
impl Default for Lattice {
    #[inline]
    fn default() -> Lattice { Lattice::eye() }
}
