//! Backtracking line search with the Armijo sufficient-decrease condition.
//!
//! Starting from `alpha_max`, the step is shrunk by `rho` until
//!
//! ```text
//! ϕ(α) ≤ ϕ(0) + c α ϕ'(0)
//! ```
//!
//! holds, or until the step drops to `alpha_min`. A step that ends up below
//! `alpha_min` is a failure even if it satisfies the condition.

use log::trace;
use num_traits::Float;
use thiserror::Error;

/// Parameters of the backtracking line search.
#[derive(Debug, Clone)]
pub struct Backtracking<S: Float> {
    /// Initial trial step
    pub alpha_max: S,
    /// Sufficient-decrease constant; allowed values in `(0, 1)`
    pub c: S,
    /// Shrink factor applied after a rejected trial; allowed values in `(0, 1)`
    pub rho: S,
    /// Smallest step worth trying
    pub alpha_min: S,
}

/// An accepted step.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStep<S> {
    /// Accepted step size
    pub alpha: S,
    /// `ϕ(alpha)`
    pub value: S,
    /// Number of evaluations of `ϕ`
    pub eval_count: i32,
}

/// Failure of the backtracking line search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BacktrackingError {
    /// The step was shrunk below `alpha_min`.
    #[error("step size shrank below the minimum after {eval_count} trials")]
    StepTooSmall { eval_count: i32 },
}

impl Default for Backtracking<f32> {
    fn default() -> Self {
        Backtracking {
            alpha_max: 1.,
            c: 0.5,
            rho: 0.5,
            alpha_min: 1e-8,
        }
    }
}

impl Default for Backtracking<f64> {
    fn default() -> Self {
        Backtracking {
            alpha_max: 1.,
            c: 0.5,
            rho: 0.5,
            alpha_min: 1e-8,
        }
    }
}

impl Backtracking<f32> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Backtracking<f64> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<S: Float> Backtracking<S> {
    /// Find a step size satisfying the Armijo condition.
    ///
    ///   - `phi` should be the function `phi = |alpha| f(x + alpha * d)`.
    ///   - `phi0` is `ϕ(0) = f(x)`.
    ///   - `dphi0` is `ϕ'(0) = ∇f(x)·d`.
    ///
    /// Shrinking stops once `ϕ(alpha)` is not above the Armijo bound, so a
    /// NaN trial value is accepted. Shrinking also stops at the first
    /// `alpha <= alpha_min`; the search fails if that step is strictly below
    /// `alpha_min`, whatever its value.
    pub fn find_armijo<Func>(&self, mut phi: Func, phi0: S, dphi0: S) -> Result<LineStep<S>, BacktrackingError>
    where
        Func: FnMut(S) -> S,
    {
        assert!(self.alpha_max > S::zero());
        assert!(S::zero() < self.c && self.c < S::one());
        assert!(S::zero() < self.rho && self.rho < S::one());
        assert!(self.alpha_min > S::zero());

        let mut alpha = self.alpha_max;
        let mut eval_count = 0;
        let value = loop {
            let value = phi(alpha);
            eval_count += 1;

            if !(self.insufficient_decrease(value, alpha, phi0, dphi0) && alpha > self.alpha_min) {
                break value;
            }
            trace!("rejected step {:?}: ϕ = {:?}", alpha.to_f64(), value.to_f64());
            alpha = alpha * self.rho;
        };

        if alpha < self.alpha_min {
            return Err(BacktrackingError::StepTooSmall { eval_count });
        }
        Ok(LineStep { alpha, value, eval_count })
    }

    // Comparisons with NaN are false, so a NaN value never counts as too large.
    fn insufficient_decrease(&self, value: S, alpha: S, phi0: S, dphi0: S) -> bool {
        value > phi0 + self.c * alpha * dphi0
    }
}
