//! marketmind — equity price analysis: technical indicators, moving-average
//! crossover signals, and narrative commentary.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
