//! Element kinds whose decoded type is known at compile time.

mod scalars;
mod strings;
mod structs;

pub use scalars::{ScalarVector, Scalars};
pub use strings::{StringVector, Strings};
pub use structs::{StructVector, Structs};
