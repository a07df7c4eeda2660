/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Stress evaluation over a batch of strained configurations.

use crate::FailResult;
use crate::strain::StrainedConfiguration;
use crate::voigt::StressVector;
use elcon_structure::Coords;
use rayon::prelude::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RelaxSettings {
    /// Force tolerance for the internal coordinate relaxation.
    #[serde(default = "defaults::tolerance")]
    pub tolerance: f64,

    /// Iteration budget for the relaxation.
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: u32,
}

mod defaults {
    pub(crate) fn tolerance() -> f64 { 1e-6 }
    pub(crate) fn max_iterations() -> u32 { 200 }
}

impl Default for RelaxSettings {
    fn default() -> RelaxSettings {
        RelaxSettings {
            tolerance: defaults::tolerance(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

/// Anything that can produce a stress tensor for a structure.
///
/// The fixed-cell relaxation is part of the trait because how to relax is a
/// property of the underlying engine, not of the pipeline.
pub trait StressSource: Send + Sync {
    /// Cauchy stress of the structure as given, in GPa.
    fn evaluate_stress(&self, coords: &Coords) -> FailResult<StressVector>;

    /// Relax atomic positions at fixed cell.
    fn minimize_positions(&self, coords: &Coords, settings: &RelaxSettings) -> FailResult<Coords>;
}

/// A relaxation failed for one configuration in the batch.
#[derive(Debug, Fail)]
#[fail(display = "relaxation failed for strained configuration {}: {}", index, cause)]
pub struct RelaxationFailure {
    pub index: usize,
    pub cause: String,
}

/// Attach a stress tensor to every configuration, optionally relaxing
/// internal coordinates first. Configurations are processed in parallel;
/// the first error aborts the batch.
pub fn calc_stress(
    configs: Vec<StrainedConfiguration>,
    source: &dyn StressSource,
    relax: bool,
    settings: &RelaxSettings,
) -> FailResult<Vec<StrainedConfiguration>> {
    info!(
        "evaluating stress for {} configurations (relax: {})",
        configs.len(), relax,
    );

    configs.into_par_iter().enumerate().map(|(index, mut config)| {
        if relax {
            config.coords = {
                source.minimize_positions(&config.coords, settings)
                    .map_err(|e| RelaxationFailure { index, cause: e.to_string() })?
            };
            config.relaxed = true;
        }
        let stress = source.evaluate_stress(&config.coords)?;
        trace!(
            "config {}: max strain {:.4e}, max stress {:.6} GPa",
            index, config.strain.max_abs(),
            stress.iter().fold(0.0, |acc: f64, x| acc.max(x.abs())),
        );
        config.stress = Some(stress);
        Ok(config)
    }).collect()
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::strain::{StrainSettings, generate_strained_configs};
    use crate::symmetry::CrystalSymmetry;
    use elcon_array_types::V3;
    use elcon_structure::{Lattice, CoordsKind};

    // stress proportional to the volumetric strain; "relaxation" shifts the
    // single atom to the origin so its effect is observable
    struct FakeSource;

    impl StressSource for FakeSource {
        fn evaluate_stress(&self, coords: &Coords) -> FailResult<StressVector> {
            let dilation = coords.lattice().volume() - 1.0;
            Ok(StressVector([dilation, dilation, dilation, 0.0, 0.0, 0.0]))
        }

        fn minimize_positions(&self, coords: &Coords, _: &RelaxSettings) -> FailResult<Coords> {
            let mut out = coords.clone();
            out.set_fracs(vec![V3([0.0; 3]); coords.len()]);
            Ok(out)
        }
    }

    struct FailingSource;

    impl StressSource for FailingSource {
        fn evaluate_stress(&self, _: &Coords) -> FailResult<StressVector>
        { Ok(StressVector::default()) }

        fn minimize_positions(&self, _: &Coords, _: &RelaxSettings) -> FailResult<Coords>
        { bail!("line search exploded") }
    }

    fn configs() -> Vec<StrainedConfiguration> {
        let reference = Coords::new(
            Lattice::cubic(1.0),
            CoordsKind::Fracs(vec![V3([0.25; 3])]),
        );
        generate_strained_configs(
            &reference, CrystalSymmetry::Cubic, &StrainSettings::default(),
        ).unwrap()
    }

    #[test]
    fn stresses_are_attached() {
        let out = calc_stress(configs(), &FakeSource, false, &Default::default()).unwrap();
        for config in &out {
            let stress = config.stress.expect("missing stress");
            assert!(!config.relaxed);
            let dilation = config.coords.lattice().volume() - 1.0;
            assert_eq!(stress[0], dilation);
        }
        // strain ordering survives the parallel map
        assert_eq!(out[0].strain.max_abs(), 0.0);
        assert!(out[0].stress.unwrap()[0].abs() < 1e-12);
    }

    #[test]
    fn relax_flag_runs_the_minimizer() {
        let out = calc_stress(configs(), &FakeSource, true, &Default::default()).unwrap();
        for config in &out {
            assert!(config.relaxed);
            assert_eq!(config.coords.to_fracs(), vec![V3([0.0; 3])]);
        }
    }

    #[test]
    fn relaxation_failures_name_the_config() {
        let err = calc_stress(configs(), &FailingSource, true, &Default::default()).unwrap_err();
        let failure = err.downcast_ref::<RelaxationFailure>().expect("wrong error type");
        assert!(failure.cause.contains("line search exploded"));
    }
}
