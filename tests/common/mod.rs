#![allow(dead_code)]
use std::path::PathBuf;

pub fn simulation_properties() -> (f64, usize) {
    let time_step: f64 = 24.*3600.; // in seconds
    let n_steps: usize = 365*5; // 5 years
    (time_step, n_steps)
}

pub fn earth_case(integrator: planetorbit::IntegratorType) -> planetorbit::Case {
    let (time_step, n_steps) = simulation_properties();
    let constants = planetorbit::PhysicalConstants {
        gravitational_constant: 6.67430e-11,
        central_mass: 1.989e30,
        time_step: time_step,
        n_steps: n_steps,
    };
    let convergence = planetorbit::ConvergenceParams {
        tolerance: 1e-6,
        max_iterations: 10,
    };
    let initial_state = planetorbit::State::new(planetorbit::Axes::new(1.496e11, 0.), planetorbit::Axes::new(0., 29.78e3));
    planetorbit::Case::new(constants, convergence, initial_state, integrator)
}

/// Body at rest so far away that one iteration barely moves it
pub fn far_away_state() -> planetorbit::State {
    planetorbit::State::new(planetorbit::Axes::new(1e30, 0.), planetorbit::Axes::zero())
}

/// Body that reaches the central body exactly after one explicit Euler step
pub fn collision_case() -> planetorbit::Case {
    let mut case = earth_case(planetorbit::IntegratorType::ExplicitEuler);
    case.constants.time_step = 1.;
    case.initial_state = planetorbit::State::new(planetorbit::Axes::new(1., 0.), planetorbit::Axes::new(-1., 0.));
    case
}

pub fn temporary_path(test_name: &str, extension: &str) -> PathBuf {
    let filename = format!("planetorbit-{}-{}.{}", test_name, std::process::id(), extension);
    std::env::temp_dir().join(filename)
}
