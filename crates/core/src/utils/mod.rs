//! Small pure helpers shared across the engine

pub mod fallback;

pub use fallback::Fallback;
