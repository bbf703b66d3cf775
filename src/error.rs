use std::error::Error;
use std::fmt;
use super::particles::Axes;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Gravity evaluated with the orbiting body on top of the central body (collision)
    DivisionSingularity { position: Axes },
    /// An integrator step failed, `step` is the number of steps completed before the failure
    Step { step: usize, source: Box<SimulationError> },
    InvalidCase(String),
    Io(String),
    Serialization(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::DivisionSingularity { position } => {
                write!(f, "Gravitational force is singular at position ({:e}, {:e}) m", position.x, position.y)
            },
            SimulationError::Step { step, source } => {
                write!(f, "Simulation stopped after {} completed steps: {}", step, source)
            },
            SimulationError::InvalidCase(reason) => write!(f, "Invalid case: {}", reason),
            SimulationError::Io(reason) => write!(f, "File error: {}", reason),
            SimulationError::Serialization(reason) => write!(f, "Serialization error: {}", reason),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulationError::Step { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(e: std::io::Error) -> SimulationError {
        SimulationError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> SimulationError {
        SimulationError::Serialization(e.to_string())
    }
}

impl From<bincode::Error> for SimulationError {
    fn from(e: bincode::Error) -> SimulationError {
        SimulationError::Serialization(e.to_string())
    }
}

impl From<csv::Error> for SimulationError {
    fn from(e: csv::Error) -> SimulationError {
        SimulationError::Serialization(e.to_string())
    }
}
