pub mod toaster;

pub use toaster::Toaster;
