//! Application context and message dispatching utilities.
//!
//! The context owns the state and provides helpers for sending responses and
//! panel updates back to the display surface.

use adtouch_bridge::{MessageFromBackend, MessageToBackend};
use adtouch_notify::PanelTransition;
use tokio::sync::mpsc::{Receiver, Sender};

use crate::runtime::BackendError;
use crate::services;
use crate::state::State;

/// Application context passed to message handlers.
pub(crate) struct AppContext {
    /// Runtime application state.
    pub state: State,
    /// Outbound channel to the display surface.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the bridge until it closes.
    pub async fn consume_bridge_messages(
        &mut self,
        mut rx: Receiver<MessageToBackend>,
    ) -> Result<(), BackendError> {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a bridge message: {message:?}");
            self.dispatch_message(message).await?;
        }

        log::info!("Bridge closed, stopping backend");
        Ok(())
    }

    /// Dispatches the received message down to individual service handlers.
    async fn dispatch_message(&mut self, message: MessageToBackend) -> Result<(), BackendError> {
        match message {
            MessageToBackend::UpdateAvailable(update) => {
                services::notification_service::handle_update_available(self, update).await
            }
            MessageToBackend::UpdateInstalled(update) => {
                services::notification_service::handle_update_installed(self, update).await
            }
            MessageToBackend::DismissPanel => {
                services::notification_service::handle_dismiss(self).await
            }
            MessageToBackend::PanelStateRequest => {
                services::notification_service::handle_panel_state_request(self).await
            }
            MessageToBackend::VersionInfoRequest => {
                services::version_service::handle_version_info_request(self).await
            }
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self).await
            }
        }
    }

    /// Send a message to the display surface.
    pub async fn send(&self, message: MessageFromBackend) -> Result<(), BackendError> {
        self.tx
            .send(message)
            .await
            .map_err(|_| BackendError::BridgeClosed)
    }

    /// Push the current panel state if `transition` changed anything.
    pub async fn publish_transition(&self, transition: PanelTransition) -> Result<(), BackendError> {
        if !transition.is_change() {
            return Ok(());
        }

        log::info!("Notification panel {transition:?}");
        self.send(MessageFromBackend::PanelStateUpdate(
            self.state.aggregator.panel_state(),
        ))
        .await
    }
}
