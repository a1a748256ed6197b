//! CLI command implementations

pub mod generate;
pub mod render;
pub mod variants;
