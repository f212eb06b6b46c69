//! Element kinds whose decoded type is chosen at runtime.

mod values;

pub use values::{ValueVector, Values};
