use approx::assert_relative_eq;
use integration_tests::{Counting, NegativeInput, Sqrt, cosine, quadratic, quadratic_derivative};
use numeth_core::Closure;
use numeth_solvers::equation::{
    BracketError, Config, ConfigError, Error, Status, bisection, fixed_point, muller,
    newton_raphson, regula_falsi, secant,
};

fn invalid_configs() -> [Config; 3] {
    [
        Config {
            tolerance: 0.0,
            ..Config::default()
        },
        Config {
            tolerance: -1e-6,
            ..Config::default()
        },
        Config {
            max_iters: 0,
            ..Config::default()
        },
    ]
}

#[test]
fn bisection_finds_positive_root_of_quadratic() {
    let f = Closure::new(quadratic);
    let config = Config::new(1e-6, 100).unwrap();

    let solution = bisection::solve_unobserved(&f, [0.0, 3.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-5);
}

#[test]
fn every_method_agrees_on_the_root() {
    let f = Closure::new(quadratic);
    let df = Closure::new(quadratic_derivative);
    let config = Config::default();

    let roots = [
        bisection::solve_unobserved(&f, [0.0, 3.0], &config).unwrap().x,
        regula_falsi::solve_unobserved(&f, [0.0, 3.0], &config).unwrap().x,
        newton_raphson::solve_unobserved(&f, &df, 1.0, &config).unwrap().x,
        secant::solve_unobserved(&f, [1.0, 3.0], &config).unwrap().x,
        muller::solve_unobserved(&f, [0.0, 1.0, 3.0], &config).unwrap().x,
    ];

    for root in roots {
        assert_relative_eq!(root, 2.0, epsilon = 1e-8);
    }
}

#[test]
fn newton_raphson_fails_on_flat_start() {
    let f = Closure::new(quadratic);
    let df = Closure::new(quadratic_derivative);

    let result = newton_raphson::solve_unobserved(&f, &df, 0.0, &Config::default());

    assert!(matches!(
        result,
        Err(Error::ZeroDerivative { iter: 0, x }) if x == 0.0
    ));
}

#[test]
fn fixed_point_of_cosine() {
    let g = Closure::new(cosine);
    let solution = fixed_point::solve_unobserved(&g, 0.0, &Config::default()).unwrap();
    assert_relative_eq!(solution.x, integration_tests::DOTTIE, epsilon = 1e-9);
}

#[test]
fn bracketing_methods_check_sign_change_before_iterating() {
    // Both ends positive.
    let f = Counting::new(quadratic);

    let bisect = bisection::solve_unobserved(&f, [3.0, 4.0], &Config::default());
    assert!(matches!(
        bisect,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
    assert_eq!(f.calls(), 2, "only the endpoints are evaluated");

    let falsi = regula_falsi::solve_unobserved(&f, [-4.0, -3.0], &Config::default());
    assert!(matches!(
        falsi,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
    assert_eq!(f.calls(), 4);
}

#[test]
fn invalid_config_skips_evaluation() {
    let f = Counting::new(quadratic);
    let df = Counting::new(quadratic_derivative);

    for config in &invalid_configs() {
        let results = [
            bisection::solve_unobserved(&f, [0.0, 3.0], config),
            regula_falsi::solve_unobserved(&f, [0.0, 3.0], config),
            fixed_point::solve_unobserved(&f, 1.0, config),
            newton_raphson::solve_unobserved(&f, &df, 1.0, config),
            secant::solve_unobserved(&f, [1.0, 3.0], config),
            muller::solve_unobserved(&f, [0.0, 1.0, 3.0], config),
        ];

        for result in results {
            assert!(matches!(
                result,
                Err(Error::InvalidConfig(
                    ConfigError::Tolerance | ConfigError::MaxIters
                ))
            ));
        }
    }

    assert_eq!(f.calls(), 0);
    assert_eq!(df.calls(), 0);
}

#[test]
fn repeated_calls_are_identical() {
    let f = Closure::new(quadratic);
    let df = Closure::new(quadratic_derivative);
    let g = Closure::new(cosine);
    let config = Config::default();

    let runs = || {
        [
            bisection::solve_unobserved(&f, [0.0, 3.0], &config).unwrap(),
            regula_falsi::solve_unobserved(&f, [0.0, 3.0], &config).unwrap(),
            fixed_point::solve_unobserved(&g, 0.0, &config).unwrap(),
            newton_raphson::solve_unobserved(&f, &df, 1.0, &config).unwrap(),
            secant::solve_unobserved(&f, [1.0, 3.0], &config).unwrap(),
            muller::solve_unobserved(&f, [0.0, 1.0, 3.0], &config).unwrap(),
        ]
    };

    assert_eq!(runs(), runs());
}

#[test]
fn function_errors_reach_the_caller() {
    match bisection::solve_unobserved(&Sqrt, [-1.0, 4.0], &Config::default()) {
        Err(Error::Function { x, source }) => {
            assert_relative_eq!(x, -1.0);
            assert_eq!(
                source.downcast_ref::<NegativeInput>(),
                Some(&NegativeInput(-1.0))
            );
        }
        other => panic!("expected a function error, got {other:?}"),
    }
}
