extern crate planetorbit;
extern crate assert_approx_eq;

mod common;
use assert_approx_eq::assert_approx_eq;
use planetorbit::{ExplicitEuler, ImplicitEuler, IntegratorType, Simulation, SimulationError};
use planetorbit::simulation::run;
use planetorbit::tools::{TrajectorySummary, calculate_specific_orbital_energy, calculate_specific_angular_momentum};

#[test]
fn trajectory_has_one_sample_per_step() {
    let case = common::earth_case(IntegratorType::ExplicitEuler);
    let mut integrator = ExplicitEuler::new(&case.constants);
    let trajectory = run(case.initial_state, &mut integrator, 100).unwrap();

    assert_eq!(trajectory.len(), 100);
    assert_eq!(*trajectory.first().unwrap(), case.initial_state.position);
    assert_eq!(trajectory.time_step, 86400.);
    assert_eq!(trajectory.time(99), 99. * 86400.);
}

#[test]
fn trajectory_of_zero_steps_is_empty() {
    let case = common::earth_case(IntegratorType::ImplicitEuler);
    let mut integrator = ImplicitEuler::new(&case.constants, case.convergence);
    let trajectory = run(case.initial_state, &mut integrator, 0).unwrap();
    assert!(trajectory.is_empty());
    assert_eq!(integrator.n_steps(), 0);
    assert!(TrajectorySummary::new(&trajectory).is_none());
}

#[test]
fn simulation_keeps_the_final_advanced_state_out_of_the_trajectory() {
    let case = common::earth_case(IntegratorType::ExplicitEuler);
    let mut simulation = Simulation::from_case(&case).unwrap();
    simulation.run(10).unwrap();

    assert_eq!(simulation.current_step(), 10);
    assert_eq!(simulation.current_time(), 10. * 86400.);
    assert_eq!(simulation.trajectory().len(), 10);

    // Same trajectory as the free function, the driver state is one step ahead
    let mut integrator = ExplicitEuler::new(&case.constants);
    let trajectory = run(case.initial_state, &mut integrator, 11).unwrap();
    assert_eq!(simulation.trajectory().positions(), &trajectory.positions()[..10]);
    assert_eq!(simulation.state().position, trajectory.positions()[10]);
}

#[test]
fn simulation_reports_progress_after_every_step() {
    let case = common::earth_case(IntegratorType::ImplicitEuler);
    let mut simulation = Simulation::from_case(&case).unwrap();
    let mut reported_steps = Vec::new();
    simulation.run_with_progress(3, |step, _| reported_steps.push(step)).unwrap();
    simulation.run_with_progress(2, |step, _| reported_steps.push(step)).unwrap();
    assert_eq!(reported_steps, vec![1, 2, 3, 4, 5]);
    assert_eq!(simulation.into_trajectory().len(), 5);
}

#[test]
fn singularity_stops_the_run() {
    let case = common::collision_case();
    let mut simulation = Simulation::from_case(&case).unwrap();
    match simulation.run(10) {
        Err(SimulationError::Step { step, source }) => {
            assert_eq!(step, 1);
            match *source {
                SimulationError::DivisionSingularity { .. } => {},
                other => panic!("Unexpected source {:?}", other),
            }
        },
        other => panic!("Unexpected result {:?}", other),
    }
    // Only the completed step was recorded
    assert_eq!(simulation.trajectory().len(), 1);
    assert_eq!(simulation.current_step(), 1);

    let mut integrator = ExplicitEuler::new(&case.constants);
    match run(case.initial_state, &mut integrator, 10) {
        Err(SimulationError::Step { step, .. }) => assert_eq!(step, 1),
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn invalid_case_is_rejected() {
    let mut case = common::earth_case(IntegratorType::ExplicitEuler);
    case.constants.time_step = 0.;
    match Simulation::from_case(&case) {
        Err(SimulationError::InvalidCase(_)) => {},
        Err(e) => panic!("Unexpected error {}", e),
        Ok(_) => panic!("Case with a null time step accepted"),
    }
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn explicit_euler_earth_orbit_drifts_outwards() {
    let case = common::earth_case(IntegratorType::ExplicitEuler);
    let mut simulation = Simulation::from_case(&case).unwrap();
    simulation.run(case.constants.n_steps).unwrap();

    let summary = TrajectorySummary::new(simulation.trajectory()).unwrap();
    assert_eq!(summary.n_samples, 1825);
    assert_eq!(summary.initial_radius, 1.496e11);
    // Forward Euler never comes closer to the star than the start but the drift stays bounded
    assert!(summary.min_radius >= summary.initial_radius * (1. - 1e-12));
    assert!(summary.final_radius > summary.initial_radius);
    assert!(summary.relative_radial_drift() < 0.75);
    assert!(summary.max_radius < 1.75 * summary.initial_radius);

    // Energy and angular momentum grow
    let gm = case.constants.gravitational_constant * case.constants.central_mass;
    assert!(calculate_specific_orbital_energy(gm, simulation.state()) > calculate_specific_orbital_energy(gm, &case.initial_state));
    assert!(calculate_specific_angular_momentum(simulation.state()) > calculate_specific_angular_momentum(&case.initial_state));
}

#[test]
fn implicit_euler_earth_orbit_stays_close_to_one_au() {
    let case = common::earth_case(IntegratorType::ImplicitEuler);
    let mut simulation = Simulation::from_case(&case).unwrap();
    simulation.run(case.constants.n_steps).unwrap();

    let summary = TrajectorySummary::new(simulation.trajectory()).unwrap();
    assert_eq!(summary.n_samples, 1825);
    assert_approx_eq!(summary.relative_radial_drift(), 0., 0.02);
    assert!(summary.min_radius > 0.98 * summary.initial_radius);
    assert!(summary.max_radius < 1.02 * summary.initial_radius);

    let implicit_euler = simulation.integrator().as_any().downcast_ref::<ImplicitEuler>().unwrap();
    assert_eq!(implicit_euler.n_steps(), 1825);
    assert_eq!(implicit_euler.n_exhausted_steps(), 1825);
}

#[test]
fn explicit_and_implicit_trajectories_differ() {
    let explicit_case = common::earth_case(IntegratorType::ExplicitEuler);
    let implicit_case = common::earth_case(IntegratorType::ImplicitEuler);
    let mut explicit_simulation = Simulation::from_case(&explicit_case).unwrap();
    let mut implicit_simulation = Simulation::from_case(&implicit_case).unwrap();
    explicit_simulation.run(365).unwrap();
    implicit_simulation.run(365).unwrap();

    let explicit_trajectory = explicit_simulation.trajectory();
    let implicit_trajectory = implicit_simulation.trajectory();
    assert_eq!(explicit_trajectory.len(), implicit_trajectory.len());
    assert_eq!(explicit_trajectory.first(), implicit_trajectory.first());
    assert_ne!(explicit_trajectory.positions()[1], implicit_trajectory.positions()[1]);
    let max_separation = explicit_trajectory.iter().zip(implicit_trajectory.iter())
                                .map(|(a, b)| (*a - *b).norm())
                                .fold(0., f64::max);
    assert!(max_separation > 1e9);
}
