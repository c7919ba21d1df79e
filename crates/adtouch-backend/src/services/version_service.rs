use crate::runtime::BackendError;

/// Handles an incoming version information request (see
/// [`adtouch_bridge::MessageToBackend::VersionInfoRequest`]).
pub async fn handle_version_info_request(
    context: super::AppContextHandle<'_>,
) -> Result<(), BackendError> {
    let versions = context.state.versions.snapshot();
    context
        .send(adtouch_bridge::MessageFromBackend::VersionInfoResponse(
            versions,
        ))
        .await
}
