//! Communication bridge between the updater feed, the notification panel and
//! the backend.
//!
//! This crate defines the types exchanged by the parts of the application:
//! - The updater feed and the panel send commands (an update became
//!   available, an update was installed, the panel was closed, queries).
//! - The backend pushes events (new panel state, version information,
//!   configuration).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure and a strict arrival order
//! for everything the backend consumes.

pub mod config;
pub mod panel;
pub mod update;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the display surface of state
/// updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFromBackend {
    /// The panel changed (shown, hidden or re-rendered), or its state was
    /// requested.
    PanelStateUpdate(panel::PanelState),
    /// Response to a version information request, in first-seen order.
    VersionInfoResponse(Vec<update::OriginVersion>),
    /// Response to the configuration request.
    ConfigurationResponse(config::Config),
}

/// Commands consumed by the backend, processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageToBackend {
    /// The updater reported an update for an origin.
    UpdateAvailable(update::UpdateAvailable),
    /// The updater reported an update as installed.
    UpdateInstalled(update::UpdateInstalled),
    /// The user activated the panel's close control.
    DismissPanel,
    /// Request for the current panel state.
    PanelStateRequest,
    /// Request for the latest advertised versions.
    VersionInfoRequest,
    /// Request for the application configuration.
    ConfigurationRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
