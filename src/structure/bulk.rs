/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Builders for simple reference structures.

use crate::core::coords::{Coords, CoordsKind};
use crate::core::lattice::Lattice;
use elcon_array_types::V3;

/// The diamond cubic structure in its 8-atom conventional cell.
///
/// `a` is the conventional lattice constant (e.g. 5.43 for silicon).
pub fn diamond(a: f64) -> Coords {
    let fcc = [
        [0.0, 0.0, 0.0],
        [0.0, 0.5, 0.5],
        [0.5, 0.0, 0.5],
        [0.5, 0.5, 0.0],
    ];
    let mut fracs = Vec::with_capacity(8);
    for site in &fcc {
        fracs.push(V3(*site));
        fracs.push(V3([site[0] + 0.25, site[1] + 0.25, site[2] + 0.25]));
    }
    trace!("built diamond cell, a = {}", a);
    Coords::new(Lattice::cubic(a), CoordsKind::Fracs(fracs))
}
