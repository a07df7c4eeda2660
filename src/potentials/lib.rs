/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Classical interatomic potentials.
//!
//! Energies are in eV, distances in Angstroms. The virial is the strain
//! derivative of the total energy, so that `virial / volume` is the Cauchy
//! stress in eV/A^3.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod sw;

use elcon_array_types::{V3, M33};
use elcon_structure::Coords;

/// Conversion factor from eV/A^3 to GPa.
pub const EV_A3_TO_GPA: f64 = 160.21766208;

/// Output of one potential evaluation.
#[derive(Debug, Clone)]
pub struct ComputeOutput {
    /// Total potential energy, in eV.
    pub value: f64,
    /// Gradient of the energy with respect to cartesian positions
    /// (the negative of the forces), in eV/A.
    pub gradient: Vec<V3>,
    /// `d(energy)/d(strain)`, accumulated per interaction, in eV.
    pub virial: M33,
}

/// A potential that can evaluate energy, forces and virial on a structure.
///
/// Implementations must be callable concurrently; the stress stage of the
/// elastic pipeline evaluates independent configurations in parallel.
pub trait Potential: Send + Sync {
    fn compute(&self, coords: &Coords) -> FailResult<ComputeOutput>;
}
