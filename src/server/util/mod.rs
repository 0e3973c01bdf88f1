//! Small conversion helpers shared across layers.

pub mod parse;
