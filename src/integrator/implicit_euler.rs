use std::any::Any;
use super::Integrator;
use super::super::case::{PhysicalConstants, ConvergenceParams};
use super::super::effects::CentralGravity;
use super::super::particles::State;
use super::super::error::SimulationError;

/// Outcome of the fixed-point solve of a single step
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum Convergence {
    Iterating,
    Converged { iterations: usize },
    Exhausted { iterations: usize }, // Cap reached, the last iterate was accepted anyway
}

/// Backward Euler solved by fixed-point iteration.
///
/// Each iteration evaluates the force at the current guess of the end-of-step
/// position and updates the guess:
///
///   v_new = v + force(r) * dt
///   r_new = r + v_new * dt
///
/// The solve stops as soon as two consecutive position guesses are closer than
/// the tolerance. The guess (r, v) is replaced by (r_new, v_new) after every
/// iteration, so successive iterates are compared with each other and not with
/// the residual of the implicit equation.
///
/// When the iteration cap is reached the last iterate is silently accepted.
/// Callers that need to know read `last_convergence()` or `n_exhausted_steps()`.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImplicitEuler {
    time_step: f64,
    gravity: CentralGravity,
    convergence: ConvergenceParams,
    last_convergence: Option<Convergence>,
    n_steps: usize,
    n_exhausted_steps: usize, // Count how many times the iteration did not converge
    n_iterations: usize,
}

impl ImplicitEuler {
    pub fn new(constants: &PhysicalConstants, convergence: ConvergenceParams) -> ImplicitEuler {
        ImplicitEuler {
            time_step:constants.time_step,
            gravity:CentralGravity::new(constants),
            convergence:convergence,
            last_convergence:None,
            n_steps:0,
            n_exhausted_steps:0,
            n_iterations:0,
        }
    }

    pub fn convergence_params(&self) -> ConvergenceParams {
        self.convergence
    }

    /// None until the first step has been computed
    pub fn last_convergence(&self) -> Option<Convergence> {
        self.last_convergence
    }

    /// Iterations used by the last step
    pub fn last_iterations(&self) -> usize {
        match self.last_convergence {
            Some(Convergence::Converged { iterations }) | Some(Convergence::Exhausted { iterations }) => iterations,
            _ => 0,
        }
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn n_exhausted_steps(&self) -> usize {
        self.n_exhausted_steps
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }
}

impl Integrator for ImplicitEuler {

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        "Implicit Euler"
    }

    fn time_step(&self) -> f64 {
        self.time_step
    }

    fn step(&mut self, state: &State) -> Result<State, SimulationError> {
        let mut position = state.position;
        let mut velocity = state.velocity;
        // With a zero iteration cap the state is returned unchanged
        let mut new_position = position;
        let mut new_velocity = velocity;
        let mut convergence = Convergence::Iterating;

        for iteration in 1..=self.convergence.max_iterations {
            // Force at the current guess of the end-of-step position
            let acceleration = self.gravity.force(position)?;
            new_velocity = velocity + acceleration * self.time_step;
            new_position = position + new_velocity * self.time_step;

            if (new_position - position).norm() < self.convergence.tolerance {
                convergence = Convergence::Converged { iterations: iteration };
                break;
            }

            position = new_position;
            velocity = new_velocity;
        }

        if convergence == Convergence::Iterating {
            convergence = Convergence::Exhausted { iterations: self.convergence.max_iterations };
            self.n_exhausted_steps += 1;
        }
        if let Convergence::Converged { iterations } | Convergence::Exhausted { iterations } = convergence {
            self.n_iterations += iterations;
        }
        self.last_convergence = Some(convergence);
        self.n_steps += 1;

        Ok(State::new(new_position, new_velocity))
    }
}
