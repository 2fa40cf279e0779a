//! Foundation types and traits for the DevDay terminal.
//!
//! This crate contains the platform-agnostic types shared by every DevDay
//! crate: raw input events, the output sink and input backend traits,
//! configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod input;
