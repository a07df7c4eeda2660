/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Local minimization of a differentiable function over a flat coordinate
//! vector. Used by the elastic pipeline to relax internal coordinates at
//! fixed cell.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod cg;
pub use crate::cg::{cg, Settings, Output, ConvergenceError, DiffFn};
