mod axes;
mod state;

pub use self::axes::Axes;
pub use self::state::State;
