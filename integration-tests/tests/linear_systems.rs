use approx::assert_relative_eq;
use integration_tests::dominant_system;
use ndarray::{Array1, array};
use numeth_core::metrics::{MetricError, absolute_error, percentage_error, relative_error};
use numeth_solvers::linear::{Error, System, jacobi};

#[test]
fn elimination_satisfies_the_system() {
    let a = [[2.0, 1.0, -1.0], [1.0, -1.0, 2.0], [1.0, 2.0, 3.0]];
    let b = [8.0, 3.0, 7.0];
    let system = System::new(&a, &b).unwrap();

    let x = system.solve_direct().unwrap();

    for r in system.residual(&x).iter() {
        assert_relative_eq!(*r, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn jacobi_agrees_with_elimination() {
    let (a, b) = dominant_system();
    let system = System::new(&a, &b).unwrap();

    let direct = system.solve_direct().unwrap();
    let iterative = system
        .solve_iterative(&jacobi::Config::default(), None)
        .unwrap();

    for (d, i) in direct.iter().zip(&iterative.x) {
        assert_relative_eq!(*d, *i, epsilon = 1e-9);
    }
    assert_relative_eq!(direct[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(direct[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(direct[2], -1.0, epsilon = 1e-12);
}

#[test]
fn metrics_measure_iterative_accuracy() {
    let (a, b) = dominant_system();
    let system = System::new(&a, &b).unwrap();
    let exact = [1.0, 2.0, -1.0];

    let loose = jacobi::Config::new(1e-3, 1000).unwrap();
    let approx = system.solve_iterative(&loose, None).unwrap().x;

    for (&truth, &estimate) in exact.iter().zip(&approx) {
        assert!(absolute_error(truth, estimate) < 1e-2);
        assert!(relative_error(truth, estimate).unwrap() < 1e-2);
        assert!(percentage_error(truth, estimate).unwrap() < 1.0);
    }
}

#[test]
fn percentage_error_needs_nonzero_truth() {
    assert_eq!(percentage_error(0.0, 1.0), Err(MetricError::ZeroTrueValue));
    assert_eq!(relative_error(0.0, 1.0), Err(MetricError::ZeroTrueValue));
}

#[test]
fn solvers_leave_inputs_untouched_and_repeat() {
    let a = array![[4.0, 1.0], [2.0, 5.0]];
    let b: Array1<f64> = array![9.0, 12.0];
    let system = System::from_arrays(a.clone(), b.clone()).unwrap();

    let first = system.solve_direct().unwrap();
    let second = system.solve_direct().unwrap();
    assert_eq!(first, second);

    let guess = [0.0, 0.0];
    let config = jacobi::Config::default();
    assert_eq!(
        system.solve_iterative(&config, Some(&guess)),
        system.solve_iterative(&config, Some(&guess))
    );

    assert_eq!(system.coefficients(), &a);
    assert_eq!(system.constants(), &b);
}

#[test]
fn row_swap_system_is_reported_singular() {
    // Nonsingular, but elimination without pivoting hits a zero pivot.
    let system = System::new(&[[0.0, 1.0], [1.0, 0.0]], &[1.0, 2.0]).unwrap();

    assert_eq!(system.solve_direct(), Err(Error::SingularMatrix { row: 0 }));
    assert_eq!(
        system.solve_iterative(&jacobi::Config::default(), None),
        Err(Error::SingularMatrix { row: 0 })
    );
}
