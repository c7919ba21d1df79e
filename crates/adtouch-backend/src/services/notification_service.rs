use adtouch_bridge::update::{UpdateAvailable, UpdateInstalled};

use crate::runtime::BackendError;

/// Handles the updater's `update-available` event (see
/// [`adtouch_bridge::MessageToBackend::UpdateAvailable`]).
pub async fn handle_update_available(
    context: super::AppContextHandle<'_>,
    update: UpdateAvailable,
) -> Result<(), BackendError> {
    let UpdateAvailable {
        origin,
        message,
        version,
    } = update;
    log::info!("Update available for {origin}");

    context.state.versions.observe(&origin, version.as_deref());
    let transition = context.state.aggregator.record_available(origin, message);
    context.publish_transition(transition).await
}

/// Handles the updater's `update-installed` event (see
/// [`adtouch_bridge::MessageToBackend::UpdateInstalled`]).
pub async fn handle_update_installed(
    context: super::AppContextHandle<'_>,
    update: UpdateInstalled,
) -> Result<(), BackendError> {
    log::info!("Update installed for {}", update.origin);
    let transition = context.state.aggregator.record_installed(&update.origin);
    context.publish_transition(transition).await
}

/// Handles activation of the panel's close control (see
/// [`adtouch_bridge::MessageToBackend::DismissPanel`]).
pub async fn handle_dismiss(context: super::AppContextHandle<'_>) -> Result<(), BackendError> {
    let transition = context.state.aggregator.dismiss_all();
    context.publish_transition(transition).await
}

/// Handles an incoming panel state request (see
/// [`adtouch_bridge::MessageToBackend::PanelStateRequest`]).
pub async fn handle_panel_state_request(
    context: super::AppContextHandle<'_>,
) -> Result<(), BackendError> {
    let panel = context.state.aggregator.panel_state();
    context
        .send(adtouch_bridge::MessageFromBackend::PanelStateUpdate(panel))
        .await
}
