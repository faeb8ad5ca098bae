//! Nonlinear conjugate gradient minimization (Fletcher–Reeves) with a
//! backtracking line search, plus a sampled convexity check and a few
//! polynomial test functions.

mod backtracking;
pub mod convexity;
pub mod functions;
mod lin;
mod ncg;

pub use backtracking::{Backtracking, BacktrackingError, LineStep};
pub use lin::Lin;
pub use ncg::minimize;
pub use ncg::{Minimum, NonlinearCG, NonlinearCGIteration, ResidualUpdate, Termination};
