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

//! Bridges a [`Potential`] into the elastic pipeline's [`StressSource`].
//!
//! Converts the virial (eV) into Cauchy stress (GPa) and drives the
//! conjugate gradient minimizer over flattened cartesian coordinates for
//! the fixed-cell relaxation.

use crate::FailResult;
use elcon_array_types::V3;
use elcon_elastic::{RelaxSettings, StressSource, StressVector};
use elcon_potentials::{EV_A3_TO_GPA, Potential};
use elcon_structure::Coords;

pub struct PotentialStressSource<P> {
    potential: P,
}

impl<P: Potential> PotentialStressSource<P> {
    pub fn new(potential: P) -> Self
    { PotentialStressSource { potential } }
}

fn flatten(vs: &[V3]) -> Vec<f64> {
    let mut out = Vec::with_capacity(3 * vs.len());
    for v in vs {
        out.extend_from_slice(&v.0);
    }
    out
}

fn nest(flat: &[f64]) -> Vec<V3> {
    assert_eq!(flat.len() % 3, 0);
    flat.chunks_exact(3).map(|c| V3([c[0], c[1], c[2]])).collect()
}

impl<P: Potential> StressSource for PotentialStressSource<P> {
    fn evaluate_stress(&self, coords: &Coords) -> FailResult<StressVector> {
        let output = self.potential.compute(coords)?;
        let volume = coords.lattice().volume();
        Ok(StressVector::from_matrix(&output.virial).scaled(EV_A3_TO_GPA / volume))
    }

    fn minimize_positions(&self, coords: &Coords, settings: &RelaxSettings) -> FailResult<Coords> {
        let cg_settings = elcon_minimize::Settings {
            tolerance: settings.tolerance,
            max_iterations: settings.max_iterations,
            ..Default::default()
        };

        let initial = flatten(&coords.to_carts());
        let template = coords.clone();
        let output = elcon_minimize::cg(&cg_settings, &initial, |position: &[f64]| {
            let mut trial = template.clone();
            trial.set_carts(nest(position));
            let computed = self.potential.compute(&trial)?;
            Ok((computed.value, flatten(&computed.gradient)))
        })?;
        trace!(
            "relaxed {} atoms in {} iterations (energy {:.9} eV)",
            coords.len(), output.iterations, output.value,
        );

        let mut relaxed = coords.clone();
        relaxed.set_carts(nest(&output.position));
        Ok(relaxed)
    }
}
