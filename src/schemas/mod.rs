// Data models: the tool catalog schema and the user configuration file.

pub mod config;
pub mod tools;
