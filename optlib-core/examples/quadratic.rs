use optlib::Lbfgs;

fn main() {
    // f(x) = (x0 - 3)^2 + 10 (x1 + 1)^2
    let solver = Lbfgs {
        max_iters: 100,
        eps: 1e-10,
        verbose: true,
        ..Lbfgs::new()
    };

    let mut x = vec![0.0, 0.0];
    let report = solver
        .minimize_with_fn(
            &mut x,
            |x| (x[0] - 3.0).powi(2) + 10.0 * (x[1] + 1.0).powi(2),
            |x, grad| {
                grad[0] = 2.0 * (x[0] - 3.0);
                grad[1] = 20.0 * (x[1] + 1.0);
                (x[0] - 3.0).powi(2) + 10.0 * (x[1] + 1.0).powi(2)
            },
        )
        .expect("valid configuration");

    println!(
        "termination={:?} iters={} x*=({:.6}, {:.6}) f(x*)={:.3e}",
        report.termination, report.iters, x[0], x[1], report.f
    );
}
