/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Least squares fit of the elastic tensor from strain-stress pairs.
//!
//! All configurations enter one global regression: each contributes six
//! rows (one per stress component) to a design matrix over the symmetry
//! class's independent parameters. Parameter uncertainties come from the
//! usual covariance estimate `s^2 (A^T A)^-1` and are expanded back to a
//! per-component error tensor through the same symmetry pattern.

use crate::FailResult;
use crate::strain::StrainedConfiguration;
use crate::symmetry::CrystalSymmetry;
use ndarray::{Array1, Array2};
use std::ops::Deref;

/// A full 6x6 elastic stiffness tensor in Voigt notation, in GPa.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElasticTensor(pub [[f64; 6]; 6]);

/// One-sigma uncertainties for each component of an [`ElasticTensor`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ErrorTensor(pub [[f64; 6]; 6]);

impl Deref for ElasticTensor {
    type Target = [[f64; 6]; 6];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl Deref for ErrorTensor {
    type Target = [[f64; 6]; 6];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

#[derive(Debug, Clone)]
pub struct FitOutput {
    pub c: ElasticTensor,
    pub c_err: ErrorTensor,
}

#[derive(Debug, Fail)]
#[fail(display = "design matrix is rank deficient ({} of {}); the strain set \
                  does not probe every independent constant", rank, expected)]
pub struct RankDeficientFitError {
    pub expected: usize,
    pub rank: usize,
}

#[derive(Debug, Fail)]
#[fail(display = "{} configurations cannot determine {} independent constants", have, need)]
pub struct InsufficientDataError {
    pub have: usize,
    pub need: usize,
}

/// Fit the elastic tensor from stressed configurations.
///
/// `weights`, if given, holds one standard deviation per configuration;
/// rows are scaled by its reciprocal, making this a weighted fit.
pub fn fit_elastic_constants(
    configs: &[StrainedConfiguration],
    symmetry: CrystalSymmetry,
    weights: Option<&[f64]>,
) -> FailResult<FitOutput> {
    let pattern = symmetry.pattern();
    let num_params = pattern.num_params();

    if configs.len() < num_params {
        return Err(InsufficientDataError { have: configs.len(), need: num_params }.into());
    }
    if let Some(weights) = weights {
        ensure!(
            weights.len() == configs.len(),
            "got {} weights for {} configurations", weights.len(), configs.len(),
        );
        ensure!(
            weights.iter().all(|&w| w > 0.0),
            "configuration weights must be positive standard deviations",
        );
    }

    let num_rows = 6 * configs.len();
    let mut design = Array2::<f64>::zeros((num_rows, num_params));
    let mut rhs = Array1::<f64>::zeros(num_rows);

    for (c, config) in configs.iter().enumerate() {
        let stress = match config.stress {
            Some(stress) => stress,
            None => bail!("configuration {} has no stress; run the stress stage first", c),
        };
        let scale = weights.map_or(1.0, |w| w[c].recip());
        for i in 0..6 {
            let row = 6 * c + i;
            rhs[row] = scale * stress[i];
            for j in 0..6 {
                for (t, coeff) in pattern.terms(i, j) {
                    design[[row, t]] += scale * coeff * config.strain[j];
                }
            }
        }
    }

    // normal equations; the parameter count never exceeds 21, so forming
    // A^T A costs nothing in conditioning we could measure at these sizes
    let normal = design.t().dot(&design);
    let projected = design.t().dot(&rhs);
    let inverse = inverse_with_rank(&normal)
        .map_err(|rank| RankDeficientFitError { expected: num_params, rank })?;
    let params = inverse.dot(&projected);

    // unbiased residual variance, expanded through the pattern to
    // per-component sigmas
    let residual = design.dot(&params) - &rhs;
    let dof = num_rows - num_params;
    let variance = match dof {
        0 => 0.0,
        _ => residual.dot(&residual) / dof as f64,
    };
    let covariance = inverse * variance;

    let mut c = [[0.0; 6]; 6];
    let mut c_err = [[0.0; 6]; 6];
    for i in 0..6 {
        for j in 0..6 {
            let terms = pattern.terms(i, j);
            for &(t, coeff) in &terms {
                c[i][j] += coeff * params[t];
            }
            let mut var = 0.0;
            for &(t, ct) in &terms {
                for &(u, cu) in &terms {
                    var += ct * cu * covariance[[t, u]];
                }
            }
            c_err[i][j] = var.max(0.0).sqrt();
        }
    }

    info!(
        "fit {} constants from {} configurations (residual rms {:.3e})",
        num_params, configs.len(), variance.sqrt(),
    );
    Ok(FitOutput { c: ElasticTensor(c), c_err: ErrorTensor(c_err) })
}

/// Invert a small symmetric positive definite matrix by Gauss-Jordan with
/// partial pivoting. `Err` carries the rank found before a pivot vanished.
fn inverse_with_rank(matrix: &Array2<f64>) -> Result<Array2<f64>, usize> {
    let n = matrix.nrows();
    assert_eq!(n, matrix.ncols());

    let scale = (0..n).map(|k| matrix[[k, k]].abs()).fold(0.0, f64::max);
    let tolerance = scale * 1e-12;

    let mut work = matrix.clone();
    let mut inverse = Array2::<f64>::eye(n);

    for col in 0..n {
        let pivot_row = {
            (col..n).max_by(|&a, &b| {
                work[[a, col]].abs().partial_cmp(&work[[b, col]].abs()).unwrap()
            }).unwrap()
        };
        let pivot = work[[pivot_row, col]];
        if pivot.abs() <= tolerance || !pivot.is_finite() {
            return Err(col);
        }
        if pivot_row != col {
            for k in 0..n {
                work.swap([pivot_row, k], [col, k]);
                inverse.swap([pivot_row, k], [col, k]);
            }
        }

        for k in 0..n {
            work[[col, k]] /= pivot;
            inverse[[col, k]] /= pivot;
        }
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = work[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for k in 0..n {
                let w = work[[col, k]];
                let v = inverse[[col, k]];
                work[[row, k]] -= factor * w;
                inverse[[row, k]] -= factor * v;
            }
        }
    }
    Ok(inverse)
}
