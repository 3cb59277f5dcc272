//! Shared plumbing for the vcfx workspace: settings, errors and tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;
