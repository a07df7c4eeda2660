/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Periodic crystal structure types: a lattice with a precomputed inverse,
//! and atomic coordinates in either cartesian or fractional representation.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub type FailResult<T> = Result<T, failure::Error>;

mod core;
pub mod bulk;

pub use crate::core::lattice::{Lattice, DegenerateLatticeError};
pub use crate::core::coords::{Coords, CoordsKind};
