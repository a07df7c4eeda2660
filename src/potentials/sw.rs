/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The Stillinger-Weber potential.
//!
//! Functional form and silicon parameters from Stillinger and Weber,
//! Phys. Rev. B 31, 5262 (1985). Single species only.

#![allow(non_snake_case)]

use crate::{FailResult, ComputeOutput, Potential};
use elcon_array_types::{V3, M33, dot, outer};
use elcon_structure::Coords;

//------------------------------------------------------------------

pub struct Params {
    /// Multiplicative constant of the two-body term. Dimensionless.
    pub A: f64,
    /// Constant of the repulsive part of the two-body term. Dimensionless.
    pub B: f64,
    /// Exponent of the repulsive part.
    pub p: f64,
    /// Exponent of the attractive part.
    pub q: f64,
    /// Reduced cutoff; interactions vanish at `a * sigma`.
    pub a: f64,
    /// Length scale. Units are Angstroms.
    pub sigma: f64,
    /// Energy scale. Units are eV.
    pub epsilon: f64,
    /// Strength of the three-body (angular) term. Dimensionless.
    pub lambda: f64,
    /// Decay of the three-body radial envelope. Dimensionless.
    pub gamma: f64,
}

impl Default for Params {
    /// The original silicon parameterization (PRB 31, 5262).
    fn default() -> Params {
        Params {
            A: 7.049556277,
            B: 0.6022245584,
            p: 4.0,
            q: 0.0,
            a: 1.80,
            sigma: 2.0951, // Angstroms
            epsilon: 2.1675, // eV
            lambda: 21.0,
            gamma: 1.20,
        }
    }
}

impl Params {
    /// Interaction cutoff distance, in Angstroms.
    #[inline]
    pub fn cutoff(&self) -> f64
    { self.a * self.sigma }
}

//------------------------------------------------------------------

pub struct StillingerWeber {
    pub params: Params,
}

impl StillingerWeber {
    pub fn new(params: Params) -> Self
    { StillingerWeber { params } }

    /// The standard silicon parameterization.
    pub fn si() -> Self
    { StillingerWeber::new(Params::default()) }
}

impl Potential for StillingerWeber {
    fn compute(&self, coords: &Coords) -> FailResult<ComputeOutput> {
        ensure!(coords.len() > 0, "cannot evaluate a potential on an empty structure");
        compute(&self.params, coords)
    }
}

//------------------------------------------------------------------

/// One entry of a site's neighbor table: (site index, displacement, distance).
type Neighbor = (usize, V3, f64);

/// All periodic images of every site within the cutoff of each site.
fn neighbor_tables(params: &Params, coords: &Coords) -> Vec<Vec<Neighbor>> {
    let carts = coords.to_carts();
    let lattice = coords.lattice();
    let vectors = *lattice.vectors();
    let inverse = lattice.inverse_matrix();
    let cutoff = params.cutoff();

    // number of periodic images to scan along each axis, from the
    // inverse-lattice plane spacings
    let mut images = [0i32; 3];
    for k in 0..3 {
        let plane_density = {
            (inverse[0][k] * inverse[0][k]
                + inverse[1][k] * inverse[1][k]
                + inverse[2][k] * inverse[2][k]).sqrt()
        };
        images[k] = (cutoff * plane_density).ceil() as i32;
    }
    trace!("neighbor image ranges: {:?}", images);

    let mut tables = vec![Vec::new(); carts.len()];
    for i in 0..carts.len() {
        for j in 0..carts.len() {
            for na in -images[0]..=images[0] {
                for nb in -images[1]..=images[1] {
                    for nc in -images[2]..=images[2] {
                        if i == j && (na, nb, nc) == (0, 0, 0) {
                            continue;
                        }
                        let shift = vectors[0] * f64::from(na)
                            + vectors[1] * f64::from(nb)
                            + vectors[2] * f64::from(nc);
                        let d = carts[j] + shift - carts[i];
                        let r = d.norm();
                        if r < cutoff {
                            tables[i].push((j, d, r));
                        }
                    }
                }
            }
        }
    }
    tables
}

/// Two-body term and its derivative with respect to distance.
fn two_body(params: &Params, r: f64) -> (f64, f64) {
    let Params { A, B, p, q, a, sigma, epsilon, .. } = *params;

    let sr = sigma / r;
    let inner = B * sr.powf(p) - sr.powf(q);
    let d_inner = (-p * B * sr.powf(p) + q * sr.powf(q)) / r;
    let env = (sigma / (r - a * sigma)).exp();
    let d_env = env * (-sigma / ((r - a * sigma) * (r - a * sigma)));

    let value = A * epsilon * inner * env;
    let d_value = A * epsilon * (d_inner * env + inner * d_env);
    (value, d_value)
}

fn compute(params: &Params, coords: &Coords) -> FailResult<ComputeOutput> {
    let Params { a, sigma, epsilon, lambda, gamma, .. } = *params;
    let tables = neighbor_tables(params, coords);

    let mut value = 0.0;
    let mut gradient = vec![V3::zero(); coords.len()];
    let mut virial = M33::zero();

    // pair terms; each unordered pair appears twice, hence the half weights
    for (i, table) in tables.iter().enumerate() {
        for &(j, d, r) in table {
            let (phi, d_phi) = two_body(params, r);
            value += 0.5 * phi;
            let g = d * (0.5 * d_phi / r);
            gradient[j] += g;
            gradient[i] -= g;
            virial += outer(&g, &d);
        }
    }

    // triplet terms centered on each site
    for (i, table) in tables.iter().enumerate() {
        for (m, &(j, dj, rj)) in table.iter().enumerate() {
            for &(k, dk, rk) in &table[m + 1..] {
                let cos_theta = dot(&dj, &dk) / (rj * rk);
                let u = cos_theta + 1.0 / 3.0;
                let env_j = (gamma * sigma / (rj - a * sigma)).exp();
                let env_k = (gamma * sigma / (rk - a * sigma)).exp();
                let pref = lambda * epsilon * env_j * env_k;
                value += pref * u * u;

                let dc_dj = dk * (rj * rk).recip() - dj * (cos_theta / (rj * rj));
                let dc_dk = dj * (rj * rk).recip() - dk * (cos_theta / (rk * rk));
                let d_env_j = -gamma * sigma / ((rj - a * sigma) * (rj - a * sigma));
                let d_env_k = -gamma * sigma / ((rk - a * sigma) * (rk - a * sigma));

                let g_j = dc_dj * (2.0 * pref * u) + dj * (pref * u * u * d_env_j / rj);
                let g_k = dc_dk * (2.0 * pref * u) + dk * (pref * u * u * d_env_k / rk);

                gradient[j] += g_j;
                gradient[i] -= g_j;
                gradient[k] += g_k;
                gradient[i] -= g_k;
                virial += outer(&g_j, &dj);
                virial += outer(&g_k, &dk);
            }
        }
    }

    Ok(ComputeOutput { value, gradient, virial })
}

//------------------------------------------------------------------
