use fr_cg::{NonlinearCG, ResidualUpdate};
use ndarray::{array, Array1};

fn quad2d(x: &Array1<f64>) -> f64 {
    assert_eq!(x.len(), 2);
    x[0].powi(2) + 10. * x[1].powi(2)
}

fn quad2d_grad(x: &Array1<f64>) -> Array1<f64> {
    array![2. * x[0], 20. * x[1]]
}

fn main() {
    let m = NonlinearCG::<f64>::new();

    let mut ev: Vec<f64> = vec![];

    let r = m.minimize(
        &1f64,
        |x: &f64| {
            ev.push(*x);
            x * x
        },
        |x: &f64| 2. * x,
    );

    println!("f(x) = x^2");
    println!("\tNCG result: {:?}", r);
    println!("\tEvaluations: x = {:?}", ev);

    println!("f(x) = x1^2 + 10 x2^2");

    for &update in &[ResidualUpdate::ProbeDirection, ResidualUpdate::NewIterate] {
        let m = NonlinearCG {
            residual_update: update,
            ..NonlinearCG::<f64>::new()
        };
        let r = m.minimize_with_trace(&array![1., 1.], quad2d, quad2d_grad, |x, info| {
            println!("{}, {:?}", x, info);
        });

        println!("\t{:?}: {:?} after {} steps, f = {}", update, r.termination, r.steps(), r.value);
    }
}
