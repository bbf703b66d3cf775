use super::super::particles::Axes;
use super::super::case::PhysicalConstants;
use super::super::error::SimulationError;

/// Newtonian attraction towards a central body held fixed at the origin.
///
/// The orbiting body has unit mass, hence the returned force is also its acceleration.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct CentralGravity {
    pub gravitational_constant: f64,
    pub central_mass: f64,
}

impl CentralGravity {
    pub fn new(constants: &PhysicalConstants) -> CentralGravity {
        CentralGravity {
            gravitational_constant:constants.gravitational_constant,
            central_mass:constants.central_mass,
        }
    }

    /// Force at `position` relative to the central body:
    /// magnitude G*M/|r|^2 along -r/|r| (towards the central body).
    ///
    /// Fails with `DivisionSingularity` when the body sits on the central body
    /// (or its position is not finite).
    pub fn force(&self, position: Axes) -> Result<Axes, SimulationError> {
        let distance = position.norm();
        if distance == 0. || !distance.is_finite() {
            return Err(SimulationError::DivisionSingularity { position: position });
        }
        let force_magnitude = self.gravitational_constant * self.central_mass / distance.powi(2);
        let force_direction = Axes {
            x: -position.x / distance,
            y: -position.y / distance,
        };
        Ok(force_direction * force_magnitude)
    }
}
