use super::Axes;

/// Kinematics of the orbiting body relative to the (fixed) central body
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub position: Axes, // m
    pub velocity: Axes, // m/s
}

impl State {
    pub fn new(position: Axes, velocity: Axes) -> State {
        State {
            position:position,
            velocity:velocity,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
