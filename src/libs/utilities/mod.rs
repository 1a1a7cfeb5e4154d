// Small, dependency-light helpers shared by drivers and commands.

pub mod downloads;
pub mod file_types;
pub mod platform;
pub mod prompt;
pub mod spinner;
