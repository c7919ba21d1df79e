//! Backend service handlers for bridge messages.
//!
//! Each handler mutates the owned state of the [`AppContext`] and emits the
//! resulting panel state or response back to the display surface.

pub mod config_service;
pub mod notification_service;
pub mod version_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle<'a> = &'a mut crate::app::AppContext;
