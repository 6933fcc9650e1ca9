pub mod error;
pub mod normalize;
pub mod options;
pub mod thing;
pub mod types;
