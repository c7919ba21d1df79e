//! Backend runtime entry point and public API surface.
//!
//! This crate owns the single notification aggregator of the process, routes
//! bridge messages to services in arrival order, and pushes panel state back
//! to the display surface.

mod app;
pub mod config;
mod runtime;
mod services;
mod state;

pub use crate::runtime::{BackendError, run, serve};
