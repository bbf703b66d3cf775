extern crate time;
use time::{OffsetDateTime, format_description};
use super::particles::{Axes, State};
use super::simulation::Trajectory;

/// Current UTC time formatted for console messages
pub fn utc_timestamp() -> String {
    let format = match format_description::parse("[year].[month].[day] [hour]:[minute]:[second]") {
        Ok(format) => format,
        Err(_) => return String::from("????.??.?? ??:??:??"),
    };
    OffsetDateTime::now_utc().format(&format).unwrap_or_default()
}

/// Specific orbital energy (per unit mass of the orbiting body)
pub fn calculate_specific_orbital_energy(gm: f64, state: &State) -> f64 {
    0.5 * state.velocity.norm_2() - gm / state.position.norm()
}

/// Specific angular momentum, perpendicular to the orbital plane
pub fn calculate_specific_angular_momentum(state: &State) -> f64 {
    state.position.cross(&state.velocity)
}

pub fn calculate_eccentricity_vector(gm: f64, state: &State) -> Axes {
    // --- Input --- //
    let x = state.position.x;
    let y = state.position.y;
    let u = state.velocity.x;
    let v = state.velocity.y;

    // --- Local --- //
    // Angular momentum (z component only in the plane)
    let hz = x * v  -  y * u;
    // v vectorial h
    let v_vect_h_x = v * hz;
    let v_vect_h_y = - u * hz;
    // distance
    let r = (x*x + y*y).sqrt();

    Axes {
        x: (v_vect_h_x / gm) - (x / r),
        y: (v_vect_h_y / gm) - (y / r),
    }
}

pub fn calculate_semimajor_axis(gm: f64, state: &State) -> f64 {
    -gm / (2. * calculate_specific_orbital_energy(gm, state))
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectorySummary {
    pub n_samples: usize,
    pub initial_radius: f64,
    pub final_radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl TrajectorySummary {
    /// None for an empty trajectory
    pub fn new(trajectory: &Trajectory) -> Option<TrajectorySummary> {
        let initial_radius = trajectory.first()?.norm();
        let final_radius = trajectory.last()?.norm();
        let mut min_radius = initial_radius;
        let mut max_radius = initial_radius;
        for position in trajectory.iter() {
            let radius = position.norm();
            min_radius = min_radius.min(radius);
            max_radius = max_radius.max(radius);
        }
        Some(TrajectorySummary {
            n_samples: trajectory.len(),
            initial_radius: initial_radius,
            final_radius: final_radius,
            min_radius: min_radius,
            max_radius: max_radius,
        })
    }

    /// (final - initial) / initial
    pub fn relative_radial_drift(&self) -> f64 {
        (self.final_radius - self.initial_radius) / self.initial_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::constants::{G_SI, M_SUN, AU};

    #[test]
    fn circular_orbit_diagnostics() {
        let gm = G_SI * M_SUN;
        let circular_speed = (gm / AU).sqrt();
        let state = State::new(Axes::new(AU, 0.), Axes::new(0., circular_speed));

        let energy = calculate_specific_orbital_energy(gm, &state);
        assert!((energy - (-0.5 * gm / AU)).abs() < 1e-9 * energy.abs());
        assert_eq!(calculate_specific_angular_momentum(&state), AU * circular_speed);
        let eccentricity = calculate_eccentricity_vector(gm, &state);
        assert!(eccentricity.norm() < 1e-12);
        assert!((calculate_semimajor_axis(gm, &state) - AU).abs() < 1e-9 * AU);
    }

    #[test]
    fn eccentric_orbit_at_perihelion() {
        // At perihelion v^2 = gm (1 + e) / q
        let gm = G_SI * M_SUN;
        let e = 0.2;
        let q = AU;
        let speed = (gm * (1. + e) / q).sqrt();
        let state = State::new(Axes::new(q, 0.), Axes::new(0., speed));

        let eccentricity = calculate_eccentricity_vector(gm, &state);
        assert!((eccentricity.x - e).abs() < 1e-12);
        assert!(eccentricity.y.abs() < 1e-12);
        assert!((calculate_semimajor_axis(gm, &state) - q / (1. - e)).abs() < 1e-6 * AU);
    }

    #[test]
    fn retrograde_orbit_has_negative_angular_momentum() {
        let state = State::new(Axes::new(AU, 0.), Axes::new(0., -1.));
        assert_eq!(calculate_specific_angular_momentum(&state), -AU);
    }
}
