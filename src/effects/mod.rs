mod gravity;

pub use self::gravity::CentralGravity;
