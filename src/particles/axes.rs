use std::ops::{Add, Sub, Mul, Neg};

/// Planar vector (x, y) used for positions, velocities and accelerations
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
}

impl Axes {
    pub fn new(x: f64, y: f64) -> Axes {
        Axes { x:x, y:y }
    }

    pub fn zero() -> Axes {
        Axes { x:0., y:0. }
    }

    pub fn norm_2(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    /// Without intermediate overflow, unlike `norm_2().sqrt()`
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Axes) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the cross product (the only non-zero one in the plane)
    pub fn cross(&self, other: &Axes) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Axes {
    type Output = Axes;
    fn add(self, other: Axes) -> Axes {
        Axes { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Axes {
    type Output = Axes;
    fn sub(self, other: Axes) -> Axes {
        Axes { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for Axes {
    type Output = Axes;
    fn mul(self, factor: f64) -> Axes {
        Axes { x: self.x * factor, y: self.y * factor }
    }
}

impl Neg for Axes {
    type Output = Axes;
    fn neg(self) -> Axes {
        Axes { x: -self.x, y: -self.y }
    }
}
