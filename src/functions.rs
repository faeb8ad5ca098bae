//! Polynomial test functions with their gradients and Hessians.

use ndarray::{array, Array1, Array2};

/// `x² + y² + z²`
pub fn sphere(x: &Array1<f64>) -> f64 {
    x[0].powi(2) + x[1].powi(2) + x[2].powi(2)
}

pub fn sphere_grad(x: &Array1<f64>) -> Array1<f64> {
    array![2. * x[0], 2. * x[1], 2. * x[2]]
}

pub fn sphere_hessian(_x: &Array1<f64>) -> Array2<f64> {
    Array2::eye(3) * 2.
}

/// `x³ + y³ - 3xy`: a local minimum at `(1, 1)` and a saddle at the origin,
/// unbounded below.
pub fn cubic(x: &Array1<f64>) -> f64 {
    x[0].powi(3) + x[1].powi(3) - 3. * x[0] * x[1]
}

pub fn cubic_grad(x: &Array1<f64>) -> Array1<f64> {
    array![3. * x[0].powi(2) - 3. * x[1], 3. * x[1].powi(2) - 3. * x[0]]
}

pub fn cubic_hessian(x: &Array1<f64>) -> Array2<f64> {
    array![[6. * x[0], -3.], [-3., 6. * x[1]]]
}

/// `x⁴`
pub fn quartic(x: &f64) -> f64 {
    x.powi(4)
}

pub fn quartic_derivative(x: &f64) -> f64 {
    4. * x.powi(3)
}

pub fn quartic_second_derivative(x: f64) -> f64 {
    12. * x.powi(2)
}

/// `-2x₀³ + 4x₀² + x₁⁴ - 3x₁² + 2x₂²x₁ - 5x₂ + x₃⁴ - x₃²x₀² - 10`
pub fn mixed4(x: &Array1<f64>) -> f64 {
    -2. * x[0].powi(3) + 4. * x[0].powi(2) + x[1].powi(4) - 3. * x[1].powi(2)
        + 2. * x[2].powi(2) * x[1]
        - 5. * x[2]
        + x[3].powi(4)
        - x[3].powi(2) * x[0].powi(2)
        - 10.
}

pub fn mixed4_grad(x: &Array1<f64>) -> Array1<f64> {
    array![
        -6. * x[0].powi(2) + 8. * x[0] - 2. * x[3].powi(2) * x[0],
        4. * x[1].powi(3) - 6. * x[1] + 2. * x[2].powi(2),
        4. * x[2] * x[1] - 5.,
        4. * x[3].powi(3) - 2. * x[3] * x[0].powi(2)
    ]
}

pub fn mixed4_hessian(x: &Array1<f64>) -> Array2<f64> {
    let off = -4. * x[3] * x[0];
    array![
        [-12. * x[0] + 8. - 2. * x[3].powi(2), 0., 0., off],
        [0., 12. * x[1].powi(2) - 6., 4. * x[2], 0.],
        [0., 4. * x[2], 4. * x[1], 0.],
        [off, 0., 0., 12. * x[3].powi(2) - 2. * x[0].powi(2)]
    ]
}
