use adtouch_bridge::config::Config;
use adtouch_notify::{NotificationAggregator, VersionLedger};

/// The core application state: configuration, pending notices and the
/// versions advertised so far.
///
/// Owned by the dispatch loop; every message is handled to completion before
/// the next one is read, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: Config,
    /// Pending update notices shown by the notification panel.
    pub aggregator: NotificationAggregator,
    /// Latest version advertised per origin.
    pub versions: VersionLedger,
}

impl State {
    pub fn new(config: Config) -> Self {
        let aggregator = NotificationAggregator::with_separator(&config.notifications.separator);
        Self {
            config,
            aggregator,
            versions: VersionLedger::new(),
        }
    }
}
