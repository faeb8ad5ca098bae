//! Implementation of a nonlinear conjugate gradient method.
//!
//! The search direction is updated with the Fletcher–Reeves coefficient
//! `beta = |r_{k+1}|² / |r_k|²` and steps are chosen by backtracking
//! until the Armijo condition holds.

use crate::backtracking::{Backtracking, LineStep};
use crate::lin::Lin;
use log::debug;
use num_traits::Float;

/// Implementation of a nonlinear conjugate gradient method.
#[derive(Debug, Clone)]
pub struct NonlinearCG<S: Float> {
    /// How the residual is advanced after an accepted step
    pub residual_update: ResidualUpdate,
    /// Parameters for the backtracking line search
    pub line_method: Backtracking<S>,
    /// Desired norm of the residual
    pub tol: S,
    /// Maximum number of iterations to take
    pub max_iter: i32,
}

/// Residual update after the step `x ← x + alpha d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidualUpdate {
    /// `r ← r - alpha ∇f(x + d)`, the gradient taken one full direction past
    /// the new iterate.
    ProbeDirection,
    /// `r ← -∇f(x)` at the new iterate (textbook Fletcher–Reeves).
    NewIterate,
}

/// Why the minimization stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The residual norm dropped below `tol`.
    Converged,
    /// The line search shrank the step below `alpha_min`.
    LineSearchFailed,
    /// `max_iter` iterations were performed.
    MaxIterReached,
}

/// Result of a minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum<V, S> {
    /// Last accepted point
    pub x: V,
    /// Objective value at `x`
    pub value: S,
    /// Objective value at the initial point followed by the value after every
    /// accepted step
    pub trace: Vec<S>,
    pub termination: Termination,
}

impl<V, S> Minimum<V, S> {
    /// Number of accepted steps.
    pub fn steps(&self) -> usize {
        self.trace.len() - 1
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Information about a performed iteration of the nonlinear CG method
#[derive(Debug, Clone)]
pub struct NonlinearCGIteration<S> {
    /// Iteration number (indexed from 0)
    pub k: i32,
    /// Function value after the step
    pub value: S,
    /// Accepted step size
    pub alpha: S,
    /// Fletcher–Reeves coefficient used for the next direction
    pub beta: S,
    /// Norm of the updated residual
    pub residual_norm: S,
    /// Number of function evaluations by the line search
    pub line_eval_count: i32,
}

impl NonlinearCG<f32> {
    /// Defaults for `f32` type.
    pub fn new() -> Self {
        NonlinearCG {
            residual_update: ResidualUpdate::ProbeDirection,
            line_method: Default::default(),
            tol: 1e-6,
            max_iter: 1000,
        }
    }
}

impl NonlinearCG<f64> {
    /// Defaults for `f64` type.
    pub fn new() -> Self {
        NonlinearCG {
            residual_update: ResidualUpdate::ProbeDirection,
            line_method: Default::default(),
            tol: 1e-6,
            max_iter: 1000,
        }
    }
}

impl<S: Float> NonlinearCG<S> {
    /// Mininimize the given nonlinear function over a linear space.
    ///
    /// `f` evaluates the objective and `grad` its gradient.
    /// `x0` is used as the initial guess.
    pub fn minimize<Func, Grad, V>(&self, x0: &V, f: Func, grad: Grad) -> Minimum<V, S>
    where
        Func: FnMut(&V) -> S,
        Grad: FnMut(&V) -> V,
        V: Lin<F = S> + Clone,
    {
        self.minimize_with_trace(x0, f, grad, |_, _| {})
    }

    /// The same as `minimize`, but allows to pass in a callback function that
    /// is called after every accepted step.
    /// It is provided with the new point and with additional information
    /// about the performed iteration.
    pub fn minimize_with_trace<Func, Grad, V, Callback>(
        &self,
        x0: &V,
        mut f: Func,
        mut grad: Grad,
        mut callback: Callback,
    ) -> Minimum<V, S>
    where
        Func: FnMut(&V) -> S,
        Grad: FnMut(&V) -> V,
        V: Lin<F = S> + Clone,
        Callback: FnMut(&V, NonlinearCGIteration<S>),
    {
        let mut x = x0.clone();
        let mut fx = f(&x);
        let mut trace = vec![fx];

        // steepest descent to start with
        let mut r = grad(&x);
        r.scale(-S::one());
        let mut d = r.clone();
        let mut x_temp = x0.clone();

        for k in 0..self.max_iter {
            let dphi0 = grad(&x).dot(&d);

            let step = {
                let mut phi = |alpha: S| {
                    x_temp.clone_from(&x);
                    x_temp.ray_to(&d, alpha);
                    f(&x_temp)
                };
                self.line_method.find_armijo(&mut phi, fx, dphi0)
            };
            let LineStep { alpha, value, eval_count } = match step {
                Ok(step) => step,
                Err(e) => {
                    debug!("iteration {}: line search failed: {}", k, e);
                    return Minimum {
                        x,
                        value: fx,
                        trace,
                        termination: Termination::LineSearchFailed,
                    };
                }
            };

            // update position
            x.ray_to(&d, alpha);
            fx = value;
            trace.push(fx);

            let r_new = match self.residual_update {
                ResidualUpdate::ProbeDirection => {
                    x_temp.clone_from(&x);
                    x_temp.add_mut(&d);
                    let g = grad(&x_temp);
                    let mut r_new = r.clone();
                    r_new.ray_to(&g, -alpha);
                    r_new
                }
                ResidualUpdate::NewIterate => {
                    let mut r_new = grad(&x);
                    r_new.scale(-S::one());
                    r_new
                }
            };

            // no guard against |r| = 0: a zero residual has already converged
            let beta = r_new.norm_squared() / r.norm_squared();
            d.combine(beta, &r_new, S::one());
            r = r_new;
            let residual_norm = r.norm();

            debug!(
                "iteration {}: f = {:?}, alpha = {:?}, beta = {:?}, |r| = {:?}",
                k,
                fx.to_f64(),
                alpha.to_f64(),
                beta.to_f64(),
                residual_norm.to_f64()
            );
            callback(
                &x,
                NonlinearCGIteration {
                    k,
                    value: fx,
                    alpha,
                    beta,
                    residual_norm,
                    line_eval_count: eval_count,
                },
            );

            if residual_norm < self.tol {
                return Minimum {
                    x,
                    value: fx,
                    trace,
                    termination: Termination::Converged,
                };
            }
        }

        debug!("maximum number of iterations reached: {}", self.max_iter);
        Minimum {
            x,
            value: fx,
            trace,
            termination: Termination::MaxIterReached,
        }
    }
}

/// Minimize `f` from `x0` with explicit parameters, returning the last point,
/// its value and the objective trace.
pub fn minimize<Func, Grad, V, S>(
    f: Func,
    grad: Grad,
    x0: &V,
    tol: S,
    max_iter: i32,
    alpha_max: S,
    c: S,
    rho: S,
    alpha_min: S,
) -> (V, S, Vec<S>)
where
    S: Float,
    Func: FnMut(&V) -> S,
    Grad: FnMut(&V) -> V,
    V: Lin<F = S> + Clone,
{
    let m = NonlinearCG {
        residual_update: ResidualUpdate::ProbeDirection,
        line_method: Backtracking {
            alpha_max,
            c,
            rho,
            alpha_min,
        },
        tol,
        max_iter,
    };
    let Minimum { x, value, trace, .. } = m.minimize(x0, f, grad);
    (x, value, trace)
}
