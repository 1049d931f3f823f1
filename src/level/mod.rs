//! Level registry.
//!
//! # Responsibilities
//! - Define the seven verbosity ranks (`none` through `trace`)
//! - Map each rank to its display name, ANSI color and destination stream
//!
//! # Design Decisions
//! - The table is a `static`, built at compile time and never mutated
//! - Table index equals rank, so lookups never fail for a valid `Verbosity`
//! - Foreign values (integers, names) are validated at the conversion boundary

pub mod descriptor;
pub mod verbosity;

pub use descriptor::{descriptor, LevelDescriptor, LEVELS, RESET};
pub use verbosity::{Verbosity, VerbosityError};
