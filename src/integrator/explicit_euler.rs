use std::any::Any;
use super::Integrator;
use super::super::case::PhysicalConstants;
use super::super::effects::CentralGravity;
use super::super::particles::State;
use super::super::error::SimulationError;

/// Forward Euler: first order, single force evaluation per step.
///
/// Both position and velocity are advanced with the values at the beginning
/// of the step. It is not symplectic and the orbit slowly spirals outwards
/// (energy and angular momentum grow at every step).
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplicitEuler {
    time_step: f64,
    gravity: CentralGravity,
}

impl ExplicitEuler {
    pub fn new(constants: &PhysicalConstants) -> ExplicitEuler {
        ExplicitEuler {
            time_step:constants.time_step,
            gravity:CentralGravity::new(constants),
        }
    }
}

impl Integrator for ExplicitEuler {

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        "Explicit Euler"
    }

    fn time_step(&self) -> f64 {
        self.time_step
    }

    fn step(&mut self, state: &State) -> Result<State, SimulationError> {
        // Unit mass: acceleration equals force
        let acceleration = self.gravity.force(state.position)?;
        // r(t+dt) = r(t) + v(t) * dt
        let position = state.position + state.velocity * self.time_step;
        // v(t+dt) = v(t) + a(t) * dt
        let velocity = state.velocity + acceleration * self.time_step;
        Ok(State::new(position, velocity))
    }
}
