use crate::runtime::BackendError;

/// Handles an incoming configuration request (see
/// [`adtouch_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(
    context: super::AppContextHandle<'_>,
) -> Result<(), BackendError> {
    let config = context.state.config.clone();
    context
        .send(adtouch_bridge::MessageFromBackend::ConfigurationResponse(
            config,
        ))
        .await
}
