/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Polak-Ribiere conjugate gradient with a backtracking line search.

use crate::FailResult;

/// The function being minimized: position in, (value, gradient) out.
pub trait DiffFn: FnMut(&[f64]) -> FailResult<(f64, Vec<f64>)> {}

impl<F> DiffFn for F
where F: FnMut(&[f64]) -> FailResult<(f64, Vec<f64>)> {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Convergence threshold on the max-norm of the gradient.
    #[serde(default = "defaults::tolerance")]
    pub tolerance: f64,

    /// Give up after this many conjugate gradient iterations.
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: u32,

    /// Step scale tried first by the line search. Adapts between iterations.
    #[serde(default = "defaults::initial_step")]
    pub initial_step: f64,
}

mod defaults {
    pub(crate) fn tolerance() -> f64 { 1e-6 }
    pub(crate) fn max_iterations() -> u32 { 200 }
    pub(crate) fn initial_step() -> f64 { 1e-2 }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            tolerance: defaults::tolerance(),
            max_iterations: defaults::max_iterations(),
            initial_step: defaults::initial_step(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Output {
    pub iterations: u32,
    pub position: Vec<f64>,
    pub value: f64,
    pub gradient: Vec<f64>,
}

#[derive(Debug, Fail)]
#[fail(display = "failed to converge after {} iterations (residual {:.3e})", iterations, residual)]
pub struct ConvergenceError {
    pub iterations: u32,
    pub residual: f64,
}

fn vdot(a: &[f64], b: &[f64]) -> f64
{ a.iter().zip(b).map(|(x, y)| x * y).sum() }

fn max_norm(v: &[f64]) -> f64
{ v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs())) }

/// Minimize `compute` starting from `initial_position`.
///
/// Succeeds once the gradient max-norm drops below `settings.tolerance`;
/// fails with [`ConvergenceError`] when the iteration budget runs out, and
/// propagates any error from `compute` itself.
pub fn cg<F: DiffFn>(
    settings: &Settings,
    initial_position: &[f64],
    mut compute: F,
) -> FailResult<Output> {
    let mut position = initial_position.to_vec();
    let (mut value, mut gradient) = compute(&position)?;
    ensure!(
        gradient.len() == position.len(),
        "gradient length {} does not match position length {}",
        gradient.len(), position.len(),
    );

    let mut direction: Vec<f64> = gradient.iter().map(|&g| -g).collect();
    let mut step = settings.initial_step;

    for iteration in 0..settings.max_iterations {
        let residual = max_norm(&gradient);
        if residual <= settings.tolerance {
            trace!("cg converged: iterations = {}, value = {:.9}", iteration, value);
            return Ok(Output { iterations: iteration, position, value, gradient });
        }

        let mut slope = vdot(&direction, &gradient);
        if slope >= 0.0 {
            // conjugacy went bad; restart along steepest descent
            direction = gradient.iter().map(|&g| -g).collect();
            slope = -vdot(&gradient, &gradient);
        }

        // backtracking line search (Armijo)
        let mut trial = step;
        let mut accepted = None;
        for _ in 0..60 {
            let candidate: Vec<f64> = {
                position.iter().zip(&direction)
                    .map(|(&x, &d)| x + trial * d)
                    .collect()
            };
            let (new_value, new_gradient) = compute(&candidate)?;
            if new_value <= value + 1e-4 * trial * slope {
                accepted = Some((candidate, new_value, new_gradient));
                break;
            }
            trial *= 0.5;
        }
        let (new_position, new_value, new_gradient) = match accepted {
            Some(tuple) => tuple,
            None => return Err(ConvergenceError { iterations: iteration, residual }.into()),
        };

        let beta = {
            let gg = vdot(&gradient, &gradient);
            let numerator = vdot(&new_gradient, &new_gradient) - vdot(&new_gradient, &gradient);
            (numerator / gg).max(0.0)
        };
        for (d, &g) in direction.iter_mut().zip(&new_gradient) {
            *d = -g + beta * *d;
        }

        position = new_position;
        value = new_value;
        gradient = new_gradient;
        step = trial * 1.6;
    }

    let residual = max_norm(&gradient);
    if residual <= settings.tolerance {
        return Ok(Output {
            iterations: settings.max_iterations,
            position, value, gradient,
        });
    }
    Err(ConvergenceError { iterations: settings.max_iterations, residual }.into())
}
