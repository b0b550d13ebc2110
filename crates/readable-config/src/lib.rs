//! Configuration types and loaders for `readable`.
//!
//! This crate owns the on-disk settings schema so the binary and tests share
//! a single source of truth.

pub mod settings;

pub use settings::Settings;
