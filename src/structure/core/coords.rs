/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::core::lattice::Lattice;
use elcon_array_types::{V3, M33};

/// Atomic positions in one of two representations.
///
/// "Fractional" data multiplied by the lattice matrix produces
/// "cartesian" data.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordsKind {
    Carts(Vec<V3>),
    Fracs(Vec<V3>),
}

impl CoordsKind {
    pub fn len(&self) -> usize {
        match self {
            CoordsKind::Carts(v) => v.len(),
            CoordsKind::Fracs(v) => v.len(),
        }
    }
}

/// A lattice paired with atomic positions.
#[derive(Debug, Clone)]
pub struct Coords {
    lattice: Lattice,
    coords: CoordsKind,
}

impl Coords {
    #[inline]
    pub fn new(lattice: Lattice, coords: CoordsKind) -> Self
    { Self { lattice, coords } }

    #[inline]
    pub fn len(&self) -> usize
    { self.coords.len() }

    #[inline]
    pub fn lattice(&self) -> &Lattice
    { &self.lattice }

    pub fn to_carts(&self) -> Vec<V3> {
        match &self.coords {
            CoordsKind::Carts(v) => v.clone(),
            CoordsKind::Fracs(v) => {
                v.iter().map(|&f| f * self.lattice.matrix()).collect()
            },
        }
    }

    pub fn to_fracs(&self) -> Vec<V3> {
        match &self.coords {
            CoordsKind::Fracs(v) => v.clone(),
            CoordsKind::Carts(v) => {
                v.iter().map(|&x| x * self.lattice.inverse_matrix()).collect()
            },
        }
    }

    #[inline]
    pub fn set_carts(&mut self, carts: Vec<V3>)
    { self.coords = CoordsKind::Carts(carts); }

    #[inline]
    pub fn set_fracs(&mut self, fracs: Vec<V3>)
    { self.coords = CoordsKind::Fracs(fracs); }

    /// Replace the lattice, preserving fractional positions.
    ///
    /// Atoms move with the cell; this is an affine deformation of the
    /// structure.
    pub fn set_lattice(&mut self, lattice: &Lattice) {
        if let CoordsKind::Carts(_) = self.coords {
            self.coords = CoordsKind::Fracs(self.to_fracs());
        }
        self.lattice = lattice.clone();
    }

    /// Apply a cartesian transformation to the entire structure.
    ///
    /// The lattice vectors transform by `m` and fractional positions are
    /// preserved. The input is untouched; fails if the transformed cell
    /// is degenerate.
    pub fn transformed_by(&self, m: &M33) -> FailResult<Coords> {
        let lattice = self.lattice.transformed_by(m)?;
        Ok(Coords::new(lattice, CoordsKind::Fracs(self.to_fracs())))
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use elcon_array_types::mat;

    fn close(a: &[V3], b: &[V3], tol: f64) -> bool {
        a.iter().zip(b).all(|(p, q)| (*p - *q).norm() < tol)
    }

    #[test]
    fn frac_cart_round_trip() {
        let lattice = Lattice::new(&mat::from_array([
            [2.0, 1.0, 0.0],
            [0.0, 3.0, 0.5],
            [0.0, 0.0, 4.0],
        ])).unwrap();
        let fracs = vec![V3([0.25, 0.5, 0.75]), V3([0.0, 0.125, 0.5])];
        let coords = Coords::new(lattice.clone(), CoordsKind::Fracs(fracs.clone()));

        let carts = coords.to_carts();
        let coords2 = Coords::new(lattice, CoordsKind::Carts(carts));
        assert!(close(&coords2.to_fracs(), &fracs, 1e-12));
    }

    #[test]
    fn set_lattice_preserves_fracs() {
        let mut coords = Coords::new(
            Lattice::cubic(2.0),
            CoordsKind::Carts(vec![V3([0.5, 1.0, 1.5])]),
        );
        let fracs_before = coords.to_fracs();
        coords.set_lattice(&Lattice::cubic(4.0));
        assert!(close(&coords.to_fracs(), &fracs_before, 1e-12));
        assert!(close(&coords.to_carts(), &[V3([1.0, 2.0, 3.0])], 1e-12));
    }

    #[test]
    fn transformed_by_leaves_input_alone() {
        let coords = Coords::new(
            Lattice::cubic(2.0),
            CoordsKind::Fracs(vec![V3([0.25, 0.25, 0.25])]),
        );
        let stretch = mat::from_array([
            [1.01, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let out = coords.transformed_by(&stretch).unwrap();
        assert_eq!(coords.lattice(), &Lattice::cubic(2.0));
        assert!(close(&out.to_fracs(), &coords.to_fracs(), 1e-12));
        assert!((out.lattice().volume() - 2.0 * 2.0 * 2.0 * 1.01).abs() < 1e-12);
    }
}
