//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, state, and the message dispatch
//! loop that listens to bridge requests.

use std::thread;

use adtouch_bridge::{MessageFromBackend, MessageToBackend, config::Config};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::app::AppContext;
use crate::config::ConfigError;
use crate::state::State;

/// Errors that stop the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Configuration could not be loaded before serving.
    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),
    /// The display surface dropped its receiver while the backend still had
    /// something to tell it.
    #[error("bridge to the display surface is closed")]
    BridgeClosed,
    /// The tokio runtime for the backend thread could not be created.
    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Process bridge messages with the given configuration until the inbound
/// channel closes.
pub async fn serve(
    config: Config,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) -> Result<(), BackendError> {
    let mut context = AppContext {
        state: State::new(config),
        tx,
    };
    context.consume_bridge_messages(rx).await
}

/// Load the configuration, then serve.
async fn setup_backend(
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) -> Result<(), BackendError> {
    let config = crate::config::load_config().await?;
    serve(config, rx, tx).await
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) -> thread::JoinHandle<Result<(), BackendError>> {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(BackendError::Runtime)?;
        let result = runtime.block_on(setup_backend(rx, tx));
        if let Err(error) = &result {
            log::error!("Backend stopped: {error}");
        }
        result
    })
}
