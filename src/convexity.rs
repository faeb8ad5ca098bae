//! Convexity check on a sample grid.
//!
//! A twice differentiable function is convex exactly when its Hessian is
//! positive semidefinite everywhere. Here that is only tested at finitely
//! many points: the Hessian is evaluated at every point of a `Grid` and its
//! eigenvalues are computed with `nalgebra::SymmetricEigen`.

use log::debug;
use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::{Array1, Array2};
use num_traits::Float;
use thiserror::Error;

const MAX_ITER: usize = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EigenError {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix has non-finite entries")]
    NonFinite,
    /// The QR iteration hit its iteration limit.
    #[error("eigenvalue iteration did not converge in {0} steps")]
    NoConvergence(usize),
}

/// Regular grid `[lo, hi]^dim` with `n` points along every axis.
#[derive(Debug, Clone)]
pub struct Grid<F> {
    axis: Array1<F>,
    dim: usize,
}

impl<F: Float> Grid<F> {
    pub fn new(lo: F, hi: F, n: usize, dim: usize) -> Self {
        Grid {
            axis: Array1::linspace(lo, hi, n),
            dim,
        }
    }

    /// Sample points along a single axis.
    pub fn axis(&self) -> &Array1<F> {
        &self.axis
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of points, `n^dim`.
    pub fn len(&self) -> usize {
        self.axis.len().pow(self.dim as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all grid points, the last coordinate varying fastest.
    pub fn points(&self) -> GridPoints<'_, F> {
        GridPoints {
            grid: self,
            index: vec![0; self.dim],
            done: self.is_empty(),
        }
    }
}

/// Iterator over the points of a `Grid`.
pub struct GridPoints<'a, F> {
    grid: &'a Grid<F>,
    index: Vec<usize>,
    done: bool,
}

impl<'a, F: Float> Iterator for GridPoints<'a, F> {
    type Item = Array1<F>;

    fn next(&mut self) -> Option<Array1<F>> {
        if self.done {
            return None;
        }
        let axis = &self.grid.axis;
        let point = self.index.iter().map(|&i| axis[i]).collect::<Array1<F>>();

        // advance the mixed-radix counter
        self.done = true;
        for i in self.index.iter_mut().rev() {
            *i += 1;
            if *i < axis.len() {
                self.done = false;
                break;
            }
            *i = 0;
        }

        Some(point)
    }
}

/// Eigenvalues of a symmetric matrix, unsorted.
///
/// Only the lower triangle is read.
pub fn symmetric_eigenvalues(h: &Array2<f64>) -> Result<Array1<f64>, EigenError> {
    let (rows, cols) = h.dim();
    if rows != cols {
        return Err(EigenError::NotSquare { rows, cols });
    }
    if h.iter().any(|x| !x.is_finite()) {
        return Err(EigenError::NonFinite);
    }

    let m = DMatrix::from_fn(rows, cols, |i, j| h[[i, j]]);
    let eigen = SymmetricEigen::try_new(m, f64::EPSILON, MAX_ITER).ok_or(EigenError::NoConvergence(MAX_ITER))?;
    Ok(eigen.eigenvalues.iter().cloned().collect())
}

/// All eigenvalues `>= -tol`.
pub fn is_positive_semidefinite(h: &Array2<f64>, tol: f64) -> Result<bool, EigenError> {
    let eigenvalues = symmetric_eigenvalues(h)?;
    Ok(eigenvalues.iter().all(|&l| l >= -tol))
}

/// Check that the Hessian has no negative eigenvalue at any of the `points`.
///
/// Stops at the first point where it does.
pub fn check_convexity<H, I>(mut hessian: H, points: I) -> Result<bool, EigenError>
where
    H: FnMut(&Array1<f64>) -> Array2<f64>,
    I: IntoIterator<Item = Array1<f64>>,
{
    for x in points {
        if !is_positive_semidefinite(&hessian(&x), 0.)? {
            debug!("Hessian is not positive semidefinite at {}", x);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check a function of one variable: its second derivative must be
/// non-negative at every point.
pub fn check_convexity_1d<F, D, I>(mut second_derivative: D, points: I) -> bool
where
    F: Float,
    D: FnMut(F) -> F,
    I: IntoIterator<Item = F>,
{
    points.into_iter().all(|x| second_derivative(x) >= F::zero())
}
