/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Strain set generation and application to a reference structure.

use crate::FailResult;
use crate::symmetry::CrystalSymmetry;
use crate::voigt::{StrainVector, StressVector};
use elcon_structure::Coords;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StrainSettings {
    /// Largest strain amplitude applied along each direction.
    #[serde(default = "defaults::magnitude")]
    pub magnitude: f64,

    /// Number of amplitude steps between zero (exclusive) and `magnitude`.
    #[serde(default = "defaults::steps")]
    pub steps: u32,

    /// Apply each amplitude with both signs.
    ///
    /// Strongly recommended; a residual stress at the reference geometry
    /// then cancels out of the slope estimates instead of biasing them.
    #[serde(default = "defaults::both_signs")]
    pub both_signs: bool,
}

mod defaults {
    pub(crate) fn magnitude() -> f64 { 0.01 }
    pub(crate) fn steps() -> u32 { 2 }
    pub(crate) fn both_signs() -> bool { true }
}

impl Default for StrainSettings {
    fn default() -> StrainSettings {
        StrainSettings {
            magnitude: defaults::magnitude(),
            steps: defaults::steps(),
            both_signs: defaults::both_signs(),
        }
    }
}

/// One strained copy of the reference structure as it moves through
/// the pipeline.
#[derive(Debug, Clone)]
pub struct StrainedConfiguration {
    /// The applied strain, in engineering Voigt form.
    pub strain: StrainVector,
    /// The deformed structure.
    pub coords: Coords,
    /// Filled in by the stress stage.
    pub stress: Option<StressVector>,
    /// Whether internal coordinates were relaxed before stress evaluation.
    pub relaxed: bool,
}

/// The strain vectors for one run: the unstrained reference first, then
/// every direction the symmetry class calls for at each amplitude.
pub fn generate_strains(
    symmetry: CrystalSymmetry,
    settings: &StrainSettings,
) -> FailResult<Vec<StrainVector>> {
    ensure!(settings.magnitude > 0.0, "strain magnitude must be positive");
    ensure!(settings.steps > 0, "strain steps must be positive");
    if settings.magnitude > 0.01 {
        warn!(
            "strain magnitude {} is large; anharmonic contamination likely",
            settings.magnitude,
        );
    }

    let mut out = vec![StrainVector::zero()];
    for direction in symmetry.strain_directions() {
        let direction = StrainVector(*direction);
        for s in 1..=settings.steps {
            let amplitude = settings.magnitude * s as f64 / settings.steps as f64;
            out.push(direction.scaled(amplitude));
            if settings.both_signs {
                out.push(direction.scaled(-amplitude));
            }
        }
    }
    Ok(out)
}

/// Deform `reference` by each generated strain. The reference itself is
/// never modified; fractional coordinates ride along with the cell.
pub fn generate_strained_configs(
    reference: &Coords,
    symmetry: CrystalSymmetry,
    settings: &StrainSettings,
) -> FailResult<Vec<StrainedConfiguration>> {
    let strains = generate_strains(symmetry, settings)?;
    info!(
        "straining {} atoms along {} directions ({} configurations)",
        reference.len(), symmetry.strain_directions().len(), strains.len(),
    );

    strains.into_iter().map(|strain| {
        let coords = reference.transformed_by(&strain.deformation())?;
        Ok(StrainedConfiguration { strain, coords, stress: None, relaxed: false })
    }).collect()
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use elcon_array_types::V3;
    use elcon_structure::{Lattice, CoordsKind};

    fn reference() -> Coords {
        Coords::new(
            Lattice::cubic(5.43),
            CoordsKind::Fracs(vec![V3([0.0; 3]), V3([0.25; 3])]),
        )
    }

    #[test]
    fn cubic_default_strain_set() {
        let strains = generate_strains(
            CrystalSymmetry::Cubic, &StrainSettings::default(),
        ).unwrap();

        // zero first, then {+d/2, -d/2, +d, -d} along the one cubic direction
        assert_eq!(strains.len(), 5);
        assert_eq!(strains[0], StrainVector::zero());
        assert_eq!(strains[1][0], 0.005);
        assert_eq!(strains[2][0], -0.005);
        assert_eq!(strains[3][0], 0.01);
        assert_eq!(strains[4][0], -0.01);
        // the cubic pattern strains e1 and e4 together
        assert_eq!(strains[3][3], 0.01);
    }

    #[test]
    fn signed_pairs_sum_to_zero() {
        let strains = generate_strains(
            CrystalSymmetry::Orthorhombic, &StrainSettings::default(),
        ).unwrap();
        for k in 0..6 {
            let total: f64 = strains.iter().map(|e| e[k]).sum();
            assert_eq!(total, 0.0);
        }
    }

    #[test]
    fn bad_settings_are_rejected() {
        let settings = StrainSettings { magnitude: 0.0, ..Default::default() };
        assert!(generate_strains(CrystalSymmetry::Cubic, &settings).is_err());
        let settings = StrainSettings { steps: 0, ..Default::default() };
        assert!(generate_strains(CrystalSymmetry::Cubic, &settings).is_err());
    }

    #[test]
    fn configs_preserve_fracs_and_reference() {
        let reference = reference();
        let fracs_before = reference.to_fracs();
        let configs = generate_strained_configs(
            &reference, CrystalSymmetry::Cubic, &StrainSettings::default(),
        ).unwrap();

        assert_eq!(reference.to_fracs(), fracs_before);
        for config in &configs {
            assert_eq!(config.coords.to_fracs(), fracs_before);
            assert!(config.stress.is_none());
            assert!(!config.relaxed);
        }
    }

    #[test]
    fn volume_tracks_dilation() {
        let reference = reference();
        let configs = generate_strained_configs(
            &reference, CrystalSymmetry::Cubic, &StrainSettings::default(),
        ).unwrap();
        let v0 = reference.lattice().volume();

        // config 3 is +0.01 along e1 (and a shear, which preserves volume
        // to first order only; the deformation determinant is exact)
        let expected = configs[3].strain.deformation().det().abs() * v0;
        assert!((configs[3].coords.lattice().volume() - expected).abs() < 1e-9);
        assert!(configs[3].coords.lattice().volume() > v0);
    }
}
