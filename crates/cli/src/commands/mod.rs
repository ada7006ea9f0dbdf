//! Subcommand implementations

pub mod config;
pub mod doctor;
pub mod suggest;
pub mod taxonomy;
pub mod wizard;
