use std::fs::File;
use std::io::{Read, Write, BufReader, BufWriter};
use std::path::Path;
use bincode;
use serde_json;
use super::constants::{G_SI, M_SUN, AU, EARTH_ORBITAL_SPEED, DEFAULT_TIME_STEP, DEFAULT_N_STEPS};
use super::constants::{IMPLICIT_EULER_TOLERANCE, IMPLICIT_EULER_MAX_ITERATIONS};
use super::particles::{Axes, State};
use super::error::SimulationError;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64, // m^3.kg^-1.s^-2
    pub central_mass: f64, // kg
    pub time_step: f64, // s
    pub n_steps: usize,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvergenceParams {
    pub tolerance: f64, // m
    pub max_iterations: usize,
}

impl Default for ConvergenceParams {
    fn default() -> ConvergenceParams {
        ConvergenceParams {
            tolerance:IMPLICIT_EULER_TOLERANCE,
            max_iterations:IMPLICIT_EULER_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum IntegratorType {
    ExplicitEuler,
    ImplicitEuler,
}

/// Everything needed to start a simulation
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub constants: PhysicalConstants,
    pub convergence: ConvergenceParams,
    pub initial_state: State,
    pub integrator: IntegratorType,
}

impl Case {
    pub fn new(constants: PhysicalConstants, convergence: ConvergenceParams, initial_state: State, integrator: IntegratorType) -> Case {
        Case {
            constants:constants,
            convergence:convergence,
            initial_state:initial_state,
            integrator:integrator,
        }
    }

    /// Earth on a near circular orbit around the Sun, integrated daily during 5 years
    pub fn earth_around_sun(integrator: IntegratorType) -> Case {
        let constants = PhysicalConstants {
            gravitational_constant: G_SI,
            central_mass: M_SUN,
            time_step: DEFAULT_TIME_STEP,
            n_steps: DEFAULT_N_STEPS,
        };
        let initial_state = State::new(Axes::new(AU, 0.), Axes::new(0., EARTH_ORBITAL_SPEED));
        Case::new(constants, ConvergenceParams::default(), initial_state, integrator)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let constants = &self.constants;
        if !constants.gravitational_constant.is_finite() || !constants.central_mass.is_finite() {
            return Err(SimulationError::InvalidCase("gravitational constant and central mass must be finite".to_string()));
        }
        if constants.gravitational_constant * constants.central_mass <= 0. {
            return Err(SimulationError::InvalidCase(format!("G*M must be positive (G = {:e}, M = {:e})", constants.gravitational_constant, constants.central_mass)));
        }
        if !(constants.time_step > 0.) || !constants.time_step.is_finite() {
            return Err(SimulationError::InvalidCase(format!("time step must be positive and finite ({})", constants.time_step)));
        }
        if !(self.convergence.tolerance >= 0.) {
            return Err(SimulationError::InvalidCase(format!("tolerance cannot be negative ({})", self.convergence.tolerance)));
        }
        if self.convergence.max_iterations == 0 {
            return Err(SimulationError::InvalidCase("at least one iteration is required".to_string()));
        }
        if !self.initial_state.is_finite() {
            return Err(SimulationError::InvalidCase("initial position and velocity must be finite".to_string()));
        }
        if self.initial_state.position.norm() == 0. {
            return Err(SimulationError::InvalidCase("initial position coincides with the central body".to_string()));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
//- Dump and restore functions
////////////////////////////////////////////////////////////////////////////////

/// JSON when the extension is `json`, bincode otherwise
pub fn write_case(case_path: &Path, case: &Case) -> Result<(), SimulationError> {
    let mut writer = BufWriter::new(File::create(case_path)?);
    if is_json(case_path) {
        let json_encoded = serde_json::to_string_pretty(case)?;
        writer.write_all(json_encoded.as_bytes())?;
    } else {
        bincode::serialize_into(&mut writer, case)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_case(case_path: &Path) -> Result<Case, SimulationError> {
    if !case_path.exists() {
        return Err(SimulationError::Io(format!("File '{}' does not exist", case_path.display())));
    }
    let case_file = File::open(case_path)?;
    let case: Case = if is_json(case_path) {
        let mut json_encoded = String::new();
        BufReader::new(case_file).read_to_string(&mut json_encoded)?;
        serde_json::from_str(&json_encoded)?
    } else {
        bincode::deserialize_from(BufReader::new(case_file))?
    };
    case.validate()?;
    Ok(case)
}

pub(crate) fn is_json(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => extension == "json",
        None => false,
    }
}
