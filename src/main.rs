extern crate planetorbit;
extern crate clap;
use std::io::Write;
use std::path::Path;
use std::process;
use std::time::Instant;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use planetorbit::{Case, IntegratorType, ImplicitEuler, Simulation, SimulationError};
use planetorbit::constants::{YEAR, DAY};
use planetorbit::tools::{utc_timestamp, calculate_specific_orbital_energy, calculate_specific_angular_momentum, calculate_eccentricity_vector, calculate_semimajor_axis, TrajectorySummary};

fn main() {
    let matches = Command::new("Planetorbit")
                            .version("0.0.1")
                            .about("Planar orbit of a planet around a fixed star integrated with explicit or implicit Euler.")
                            .subcommand_required(true)
                            .arg_required_else_help(true)
                            .subcommand(Command::new("new")
                                    .about("Write the Earth around the Sun case")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("Case filename (JSON if the extension is .json, binary otherwise)"))
                                    .arg(integrator_arg())
                                    )
                            .subcommand(Command::new("start")
                                    .about("Start a simulation")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("Case description"))
                                    .arg(Arg::new("trajectory_filename")
                                        .required(true)
                                        .index(2)
                                        .help("Trajectory filename (CSV if the extension is .csv, binary otherwise)"))
                                    .arg(integrator_arg())
                                    .arg(steps_arg())
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print INFO/WARNING/PANIC messages"))
                                    )
                            .subcommand(Command::new("compare")
                                    .about("Integrate a case with both schemes and summarize the drift of each")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("Case description"))
                                    .arg(steps_arg())
                                    )
                          .get_matches();

    let result = match matches.subcommand() {
        Some(("new", new_matches)) => new_case(new_matches),
        Some(("start", start_matches)) => start(start_matches),
        Some(("compare", compare_matches)) => compare(compare_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        println!("[PANIC {} UTC] {}", utc_timestamp(), e);
        process::exit(1);
    }
}

fn integrator_arg() -> Arg {
    Arg::new("integrator")
        .long("integrator")
        .value_name("scheme")
        .value_parser(["explicit", "implicit"])
        .help("Override the integration scheme of the case")
}

fn steps_arg() -> Arg {
    Arg::new("steps")
        .long("steps")
        .value_name("n")
        .value_parser(value_parser!(usize))
        .help("Override the number of steps of the case")
}

fn integrator_type(matches: &ArgMatches) -> Option<IntegratorType> {
    match matches.get_one::<String>("integrator").map(|s| s.as_str()) {
        Some("explicit") => Some(IntegratorType::ExplicitEuler),
        Some("implicit") => Some(IntegratorType::ImplicitEuler),
        _ => None,
    }
}

fn load_case(matches: &ArgMatches) -> Result<Case, SimulationError> {
    let case_filename = matches.get_one::<String>("case_filename").map(|s| s.as_str()).unwrap_or_default();
    let mut case = planetorbit::case::read_case(Path::new(case_filename))?;
    println!("[INFO {} UTC] Loaded case '{}'.", utc_timestamp(), case_filename);
    if let Some(n_steps) = matches.get_one::<usize>("steps") {
        println!("[INFO {} UTC] The number of steps changed from {} to {}", utc_timestamp(), case.constants.n_steps, n_steps);
        case.constants.n_steps = *n_steps;
    }
    Ok(case)
}

fn new_case(matches: &ArgMatches) -> Result<(), SimulationError> {
    let case_filename = matches.get_one::<String>("case_filename").map(|s| s.as_str()).unwrap_or_default();
    let case_path = Path::new(case_filename);
    if case_path.exists() {
        return Err(SimulationError::Io(format!("File '{}' already exists.", case_filename)));
    }
    let case = Case::earth_around_sun(integrator_type(matches).unwrap_or(IntegratorType::ExplicitEuler));
    planetorbit::case::write_case(case_path, &case)?;
    println!("[INFO {} UTC] Case written to '{}'.", utc_timestamp(), case_filename);
    Ok(())
}

fn start(matches: &ArgMatches) -> Result<(), SimulationError> {
    let t1 = Instant::now();
    let mut case = load_case(matches)?;
    if let Some(integrator) = integrator_type(matches) {
        case.integrator = integrator;
    }
    let silent_mode = matches.get_flag("silent");

    let trajectory_filename = matches.get_one::<String>("trajectory_filename").map(|s| s.as_str()).unwrap_or_default();
    let trajectory_path = Path::new(trajectory_filename);
    if trajectory_path.exists() {
        return Err(SimulationError::Io(format!("File '{}' already exists.", trajectory_filename)));
    }

    let mut simulation = Simulation::from_case(&case)?;
    println!("[INFO {} UTC] {} Integrator.", utc_timestamp(), simulation.integrator().name());

    let time_step = case.constants.time_step;
    let progress_period = ((YEAR / time_step) as usize).max(1);
    simulation.run_with_progress(case.constants.n_steps, |step, _| {
        if !silent_mode && step % progress_period == 0 {
            let current_time_years = step as f64 * time_step / YEAR;
            print!("Year: {:0.0} ({:0.1e}) | Time step: {:0.3} days                    \r", current_time_years, current_time_years, time_step / DAY);
            let _ = std::io::stdout().flush();
        }
    })?;
    if !silent_mode {
        println!();
    }

    report_non_convergence(&simulation);
    planetorbit::output::write_trajectory(trajectory_path, simulation.trajectory())?;
    println!("[INFO {} UTC] Trajectory with {} positions written to '{}'.", utc_timestamp(), simulation.trajectory().len(), trajectory_filename);
    println!("[INFO {} UTC] Execution time: {} seconds", utc_timestamp(), t1.elapsed().as_secs_f64());
    Ok(())
}

fn compare(matches: &ArgMatches) -> Result<(), SimulationError> {
    let case = load_case(matches)?;
    let gm = case.constants.gravitational_constant * case.constants.central_mass;
    let initial_energy = calculate_specific_orbital_energy(gm, &case.initial_state);
    let initial_angular_momentum = calculate_specific_angular_momentum(&case.initial_state);

    for integrator in [IntegratorType::ExplicitEuler, IntegratorType::ImplicitEuler].iter() {
        let mut scheme_case = case;
        scheme_case.integrator = *integrator;
        let mut simulation = Simulation::from_case(&scheme_case)?;
        simulation.run(case.constants.n_steps)?;
        report_non_convergence(&simulation);

        let name = simulation.integrator().name();
        let final_state = simulation.state();
        let energy = calculate_specific_orbital_energy(gm, final_state);
        let angular_momentum = calculate_specific_angular_momentum(final_state);
        match TrajectorySummary::new(simulation.trajectory()) {
            Some(summary) => {
                println!("[INFO {} UTC] {}: {} positions | radius initial {:e} m, final {:e} m, min {:e} m, max {:e} m | radial drift {:+.3}%",
                         utc_timestamp(), name, summary.n_samples, summary.initial_radius, summary.final_radius,
                         summary.min_radius, summary.max_radius, 100. * summary.relative_radial_drift());
            },
            None => println!("[INFO {} UTC] {}: empty trajectory", utc_timestamp(), name),
        }
        println!("[INFO {} UTC] {}: relative energy drift {:+.3e} | relative angular momentum drift {:+.3e}",
                 utc_timestamp(), name, (energy - initial_energy) / initial_energy.abs(),
                 (angular_momentum - initial_angular_momentum) / initial_angular_momentum.abs());
        println!("[INFO {} UTC] {}: final osculating orbit | semi-major axis {:e} m (initial {:e} m) | eccentricity {:.4} (initial {:.4})",
                 utc_timestamp(), name, calculate_semimajor_axis(gm, final_state), calculate_semimajor_axis(gm, &case.initial_state),
                 calculate_eccentricity_vector(gm, final_state).norm(), calculate_eccentricity_vector(gm, &case.initial_state).norm());
    }
    Ok(())
}

fn report_non_convergence(simulation: &Simulation) {
    if let Some(implicit_euler) = simulation.integrator().as_any().downcast_ref::<ImplicitEuler>() {
        if implicit_euler.n_exhausted_steps() > 0 {
            println!("[WARNING {} UTC] {} of {} implicit Euler steps reached the limit of {} iterations without converging (tolerance {:e} m).",
                     utc_timestamp(), implicit_euler.n_exhausted_steps(), implicit_euler.n_steps(),
                     implicit_euler.convergence_params().max_iterations, implicit_euler.convergence_params().tolerance);
        }
    }
}
