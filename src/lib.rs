/* ************************************************************************ **
** This file is part of elcon.                                              **
**                                                                          **
** elcon is free software: you can redistribute it and/or modify it under   **
** the terms of the GNU General Public License as published by the Free     **
** Software Foundation, either version 3 of the License, or (at your        **
** option) any later version.                                              **
**                                                                          **
** (most subcrates are permissively licensed; see their source headers)     **
** ************************************************************************ */

//! Elastic constant tensors from strained-cell stress regression.
//!
//! The facade crate: re-exports the pipeline from `elcon-elastic` and
//! supplies the glue that turns a [`Potential`] into a [`StressSource`].

#[macro_use] extern crate log;

pub type FailResult<T> = Result<T, failure::Error>;

pub use elcon_array_types::{V3, M33};
pub use elcon_structure::{Coords, CoordsKind, Lattice, bulk};
pub use elcon_potentials::{Potential, ComputeOutput, EV_A3_TO_GPA, sw::StillingerWeber};
pub use elcon_elastic::{
    StrainVector, StressVector,
    CrystalSymmetry, UnsupportedSymmetryError,
    StrainSettings, StrainedConfiguration, generate_strains, generate_strained_configs,
    StressSource, RelaxSettings, RelaxationFailure, calc_stress,
    ElasticTensor, ErrorTensor, FitOutput,
    RankDeficientFitError, InsufficientDataError, fit_elastic_constants,
    Settings, elastic_constants,
};

pub mod potential;
pub use crate::potential::PotentialStressSource;
