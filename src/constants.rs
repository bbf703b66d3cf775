//// Physical constants
// SI units everywhere: meters, kilograms, seconds.
pub const G_SI : f64 = 6.67430e-11;  // m^3.kg^-1.s^-2
pub const M_SUN : f64 = 1.989e30; // kg
pub const AU : f64 = 1.496e11; // m (rounded 1 AU)
pub const EARTH_ORBITAL_SPEED : f64 = 29.78e3; // m/s
pub const HOUR: f64 = 3600.; // s
pub const DAY: f64 = 24.*HOUR; // s
pub const YEAR: f64 = 365.*DAY; // s (calendar year without leap day, matches 365 steps of 1 day)

//// Simulation defaults
pub const DEFAULT_TIME_STEP : f64 = DAY;
pub const DEFAULT_N_STEPS : usize = 365*5; // 5 years with a 1 day time step

//// Constants for the implicit Euler fixed-point solve (to be ignored for explicit Euler)
pub const IMPLICIT_EULER_TOLERANCE : f64 = 1e-6;     // m, on the change of position between consecutive iterates
pub const IMPLICIT_EULER_MAX_ITERATIONS : usize = 10; // Maximum number of iterations per step
