// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod register;
pub mod config;

// Re-export public types for convenient access via `qlab::core::TypeName`
pub use error::{GroupId, LabError, QubitId, Result};
pub use qubit::{Qubit, Reading};
pub use register::QubitRegister;
pub use config::LabConfig;

pub mod constants;
