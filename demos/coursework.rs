//! Convexity checks and conjugate gradient runs on the coursework functions.
use fr_cg::convexity::{check_convexity, check_convexity_1d, EigenError, Grid};
use fr_cg::functions::*;
use fr_cg::NonlinearCG;
use ndarray::{array, Array1};

fn two_decimals(x: &[f64]) -> Vec<String> {
    x.iter().map(|v| format!("{:.2}", v)).collect()
}

fn main() -> Result<(), EigenError> {
    let axis = (-10., 10., 10);

    let g3 = Grid::new(axis.0, axis.1, axis.2, 3);
    println!("f(x, y, z) convex: {}", check_convexity(sphere_hessian, g3.points())?);

    let g2 = Grid::new(axis.0, axis.1, axis.2, 2);
    println!("g(x, y) convex: {}", check_convexity(cubic_hessian, g2.points())?);

    let xs = Array1::linspace(axis.0, axis.1, axis.2);
    println!("h(x) convex: {}", check_convexity_1d(quartic_second_derivative, xs));

    let g4 = Grid::new(axis.0, axis.1, axis.2, 4);
    println!("check_fun(x) convex: {}", check_convexity(mixed4_hessian, g4.points())?);

    let m = NonlinearCG::<f64>::new();

    let r = m.minimize(&array![1., 1., 6.], sphere, sphere_grad);
    println!(
        "f: x_min = {:?}, f_min = {:.2} in {} values ({:?})",
        two_decimals(r.x.as_slice().unwrap_or(&[])),
        r.value,
        r.trace.len(),
        r.termination
    );

    let r = m.minimize(&array![8., -2.], cubic, cubic_grad);
    println!(
        "g: x_min = {:?}, f_min = {:.2} in {} values ({:?})",
        two_decimals(r.x.as_slice().unwrap_or(&[])),
        r.value,
        r.trace.len(),
        r.termination
    );

    let r = m.minimize(&-0.5, quartic, quartic_derivative);
    println!(
        "h: x_min = {:.2}, f_min = {:.2} in {} values ({:?})",
        r.x,
        r.value,
        r.trace.len(),
        r.termination
    );

    let r = m.minimize(&array![1., 1., 1., 1.], mixed4, mixed4_grad);
    println!(
        "check_fun: x_min = {:?}, f_min = {:.2} in {} values ({:?})",
        two_decimals(r.x.as_slice().unwrap_or(&[])),
        r.value,
        r.trace.len(),
        r.termination
    );

    Ok(())
}
