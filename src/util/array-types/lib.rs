/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small, fixed-size linear algebra types.
//!
//! These are thin newtypes around `[f64; 3]` and `[V3; 3]` providing just
//! the dense operations the rest of the workspace needs. Matrices are
//! row-based; a point transforms as `row_vector * matrix`.

mod types;
mod ops;

pub use crate::types::{V3, M33};
pub use crate::ops::{dot, inv, outer, mat};
