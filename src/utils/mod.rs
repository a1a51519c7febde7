//! Display and output utilities

pub mod display;

pub use display::{Color, ColorOutput, RunFormatter, RunReport};
