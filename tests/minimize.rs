use approx::assert_abs_diff_eq;
use fr_cg::convexity::{check_convexity, check_convexity_1d, Grid};
use fr_cg::functions::*;
use fr_cg::{Lin, NonlinearCG, ResidualUpdate, Termination};
use ndarray::{array, Array1};
use quickcheck::quickcheck;

fn aniso(x: &Array1<f64>) -> f64 {
    x[0] * x[0] + 10. * x[1] * x[1]
}

fn aniso_grad(x: &Array1<f64>) -> Array1<f64> {
    array![2. * x[0], 20. * x[1]]
}

fn non_increasing(trace: &[f64]) -> bool {
    trace.windows(2).all(|w| w[1] <= w[0])
}

#[test]
fn sphere_from_coursework_start() {
    let r = NonlinearCG::<f64>::new().minimize(&array![1., 1., 6.], sphere, sphere_grad);

    assert_eq!(r.termination, Termination::Converged);
    assert!(r.trace.len() <= 3);
    assert_abs_diff_eq!(r.value, 0., epsilon = 1e-12);
    assert!(r.x.norm() < 1e-6);
}

#[test]
fn textbook_update_on_anisotropic_quadratic() {
    let m = NonlinearCG {
        residual_update: ResidualUpdate::NewIterate,
        ..NonlinearCG::<f64>::new()
    };

    let r = m.minimize(&array![1., 1.], aniso, aniso_grad);

    assert_eq!(r.termination, Termination::Converged);
    assert!(r.x.dist(&array![0., 0.]) < 1e-5);
    assert!(non_increasing(&r.trace));
}

#[test]
fn trace_is_non_increasing() {
    fn prop(a: f64, b: f64, c: f64, textbook: bool) -> bool {
        let m = NonlinearCG {
            residual_update: if textbook {
                ResidualUpdate::NewIterate
            } else {
                ResidualUpdate::ProbeDirection
            },
            ..NonlinearCG::<f64>::new()
        };
        let r1 = m.minimize(&array![a, b, c], sphere, sphere_grad);
        let r2 = m.minimize(&array![a, b], aniso, aniso_grad);
        let r3 = m.minimize(&a, quartic, quartic_derivative);
        non_increasing(&r1.trace) && non_increasing(&r2.trace) && non_increasing(&r3.trace)
    }
    quickcheck(prop as fn(f64, f64, f64, bool) -> bool);
}

#[test]
fn quartic_gets_close_to_zero() {
    let r = NonlinearCG::<f64>::new().minimize(&-0.5, quartic, quartic_derivative);

    assert!(r.value < 1e-8);
    assert!(r.x.abs() < 1e-2);
    // the step drops below alpha_min on the 41st line search
    assert_eq!(r.termination, Termination::LineSearchFailed);
    assert_eq!(r.trace.len(), 41);
}

#[test]
fn non_convex_cubic_breaks_down() {
    let r = NonlinearCG::<f64>::new().minimize(&array![8., -2.], cubic, cubic_grad);

    // it runs off towards -∞ instead of the local minimum at (1, 1)
    assert!(r.trace[1] < -1e6);
    assert!(r.trace[..4].iter().all(|v| v.is_finite()));
    // then overflows; NaN steps are accepted and recorded until max_iter
    assert!(r.trace[4..].iter().all(|v| v.is_nan()));
    assert_eq!(r.trace.len(), 1001);
    assert_eq!(r.termination, Termination::MaxIterReached);
}

#[test]
fn repeated_calls_are_identical() {
    let m = NonlinearCG::<f64>::new();
    let x0 = array![1., 1., 1., 1.];

    let r1 = m.minimize(&x0, mixed4, mixed4_grad);
    let r2 = m.minimize(&x0, mixed4, mixed4_grad);

    assert_eq!(r1, r2);
}

#[test]
fn stops_at_max_iter() {
    let m = NonlinearCG {
        max_iter: 2,
        ..NonlinearCG::<f64>::new()
    };

    let r = m.minimize(&-0.5, quartic, quartic_derivative);

    assert_eq!(r.termination, Termination::MaxIterReached);
    assert_eq!(r.trace.len(), 3);
}

#[test]
fn f32_minimization() {
    let m = NonlinearCG::<f32>::new();

    let r = m.minimize(&array![1f32, 1., 6.], |x: &Array1<f32>| x.dot(x), |x: &Array1<f32>| x * 2.);

    assert!(r.converged());
    assert_eq!(r.value, 0.);
}

#[test]
fn coursework_convexity() {
    let g3 = Grid::new(-10., 10., 10, 3);
    let g2 = Grid::new(-10., 10., 10, 2);
    let g4 = Grid::new(-10., 10., 10, 4);

    assert_eq!(check_convexity(sphere_hessian, g3.points()), Ok(true));
    assert_eq!(check_convexity(cubic_hessian, g2.points()), Ok(false));
    assert_eq!(check_convexity(mixed4_hessian, g4.points()), Ok(false));
    assert!(check_convexity_1d(quartic_second_derivative, Array1::linspace(-10., 10., 10)));
}
