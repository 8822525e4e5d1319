//! Core types and definitions for the HORDE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, tags, geometric types, configuration, and constants.
//! It has no dependency on the ECS runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod tags;
pub mod types;

#[cfg(test)]
mod tests;
