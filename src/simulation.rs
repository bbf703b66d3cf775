use super::case::Case;
use super::integrator::{Integrator, new_integrator};
use super::particles::{Axes, State};
use super::error::SimulationError;

/// Chronological positions of the orbiting body, one per completed step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    pub time_step: f64, // s
    positions: Vec<Axes>,
}

impl Trajectory {
    pub fn new(time_step: f64) -> Trajectory {
        Trajectory {
            time_step:time_step,
            positions:Vec::new(),
        }
    }

    pub fn from_positions(time_step: f64, positions: Vec<Axes>) -> Trajectory {
        Trajectory {
            time_step:time_step,
            positions:positions,
        }
    }

    fn with_capacity(time_step: f64, capacity: usize) -> Trajectory {
        Trajectory {
            time_step:time_step,
            positions:Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, position: Axes) {
        self.positions.push(position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Axes] {
        &self.positions
    }

    pub fn first(&self) -> Option<&Axes> {
        self.positions.first()
    }

    pub fn last(&self) -> Option<&Axes> {
        self.positions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<Axes> {
        self.positions.iter()
    }

    /// Simulated time of the i-th sample
    pub fn time(&self, i: usize) -> f64 {
        i as f64 * self.time_step
    }
}

/// Drives one integrator, owning the single evolving state of the run
pub struct Simulation {
    integrator: Box<dyn Integrator>,
    state: State,
    trajectory: Trajectory,
    current_step: usize,
}

impl Simulation {
    pub fn new(initial_state: State, integrator: Box<dyn Integrator>) -> Simulation {
        let time_step = integrator.time_step();
        Simulation {
            integrator:integrator,
            state:initial_state,
            trajectory:Trajectory::new(time_step),
            current_step:0,
        }
    }

    pub fn from_case(case: &Case) -> Result<Simulation, SimulationError> {
        case.validate()?;
        Ok(Simulation::new(case.initial_state, new_integrator(case)))
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    /// Latest advanced state (one step ahead of the last recorded position)
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_time(&self) -> f64 {
        self.current_step as f64 * self.integrator.time_step()
    }

    /// Record the current position and then advance the state by one step
    pub fn iterate(&mut self) -> Result<(), SimulationError> {
        // A position only enters the trajectory once its step completed
        match self.integrator.step(&self.state) {
            Ok(state) => {
                self.trajectory.push(self.state.position);
                self.state = state;
                self.current_step += 1;
                Ok(())
            },
            Err(e) => Err(SimulationError::Step { step: self.current_step, source: Box::new(e) }),
        }
    }

    pub fn run(&mut self, n_steps: usize) -> Result<(), SimulationError> {
        self.run_with_progress(n_steps, |_, _| {})
    }

    /// Same as `run` calling `progress(step, state)` after every completed step
    pub fn run_with_progress<F>(&mut self, n_steps: usize, mut progress: F) -> Result<(), SimulationError> where F: FnMut(usize, &State) {
        self.trajectory.positions.reserve(n_steps);
        for _ in 0..n_steps {
            self.iterate()?;
            progress(self.current_step, &self.state);
        }
        Ok(())
    }
}

/// Integrate `n_steps` steps from `initial_state`, recording the position
/// before each step. The final advanced state is not part of the trajectory.
pub fn run(initial_state: State, integrator: &mut dyn Integrator, n_steps: usize) -> Result<Trajectory, SimulationError> {
    let mut trajectory = Trajectory::with_capacity(integrator.time_step(), n_steps);
    let mut state = initial_state;
    for step in 0..n_steps {
        match integrator.step(&state) {
            Ok(new_state) => {
                trajectory.push(state.position);
                state = new_state;
            },
            Err(e) => return Err(SimulationError::Step { step: step, source: Box::new(e) }),
        }
    }
    Ok(trajectory)
}
