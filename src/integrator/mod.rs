mod explicit_euler;
mod implicit_euler;
pub mod output;

pub use self::explicit_euler::ExplicitEuler;
pub use self::implicit_euler::{ImplicitEuler, Convergence};

use std::any::Any;
use super::case::{Case, IntegratorType};
use super::particles::State;
use super::error::SimulationError;


pub trait Integrator {
    fn as_any(&self) -> &dyn Any;
    fn name(&self) -> &'static str;
    fn time_step(&self) -> f64;
    /// Advance the state by one time step
    fn step(&mut self, state: &State) -> Result<State, SimulationError>;
}

/// Build the integrator requested by the case
pub fn new_integrator(case: &Case) -> Box<dyn Integrator> {
    match case.integrator {
        IntegratorType::ExplicitEuler => Box::new(ExplicitEuler::new(&case.constants)),
        IntegratorType::ImplicitEuler => Box::new(ImplicitEuler::new(&case.constants, case.convergence)),
    }
}
