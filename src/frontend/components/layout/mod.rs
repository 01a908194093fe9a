pub mod guarded;
pub mod navigation;

pub use guarded::Guarded;
pub use navigation::Navigation;
