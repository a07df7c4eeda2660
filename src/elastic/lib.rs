/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The elastic constant pipeline.
//!
//! Data flows strictly left to right:
//!
//! ```text
//! symmetry class -> strain set -> strained configs -> stressed configs
//!                -> fitted tensor + error tensor
//! ```
//!
//! Stress evaluation is the only expensive stage and the only parallel one;
//! everything else is cheap bookkeeping around a weighted least squares fit.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod voigt;
pub mod symmetry;
pub mod strain;
pub mod stress;
pub mod fit;
pub mod settings;

pub use crate::voigt::{StrainVector, StressVector};
pub use crate::symmetry::{CrystalSymmetry, UnsupportedSymmetryError};
pub use crate::strain::{StrainSettings, StrainedConfiguration, generate_strains, generate_strained_configs};
pub use crate::stress::{StressSource, RelaxSettings, RelaxationFailure, calc_stress};
pub use crate::fit::{
    ElasticTensor, ErrorTensor, FitOutput,
    RankDeficientFitError, InsufficientDataError,
    fit_elastic_constants,
};
pub use crate::settings::Settings;

use elcon_structure::Coords;

/// Run the whole pipeline: strain a reference structure, evaluate stresses,
/// and fit the elastic tensor for the given symmetry class.
pub fn elastic_constants(
    reference: &Coords,
    symmetry: CrystalSymmetry,
    source: &dyn StressSource,
    relax: bool,
    settings: &Settings,
) -> FailResult<FitOutput> {
    let configs = generate_strained_configs(reference, symmetry, &settings.strain)?;
    let configs = calc_stress(configs, source, relax, &settings.relax)?;
    fit_elastic_constants(&configs, symmetry, None)
}
