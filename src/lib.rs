extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate time;

pub mod constants;
pub mod error;
pub use self::error::SimulationError;

mod particles;
pub use self::particles::Axes;
pub use self::particles::State;

mod effects;
pub use self::effects::CentralGravity;

pub mod case;
pub use self::case::{Case, PhysicalConstants, ConvergenceParams, IntegratorType};

mod integrator;
pub use self::integrator::*;

pub mod simulation;
pub use self::simulation::{Simulation, Trajectory};

pub mod tools;
