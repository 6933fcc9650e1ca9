//! Named/optional constructor parameters with defaults, modelled as an options
//! struct that is resolved once before a `Thing` is derived from it.

pub mod core;
pub mod format;

pub use crate::core::error::ThingError;
pub use crate::core::options::{ResolvedOptions, ThingOptions};
pub use crate::core::thing::Thing;
pub use crate::core::types::Mode;
