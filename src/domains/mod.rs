//! Domain modules.

pub mod locations;
pub mod prompts;
pub mod tools;
