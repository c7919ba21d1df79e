//! Update notice aggregation.
//!
//! [`NotificationAggregator`] keeps at most one pending notice per
//! [`Origin`](adtouch_bridge::update::Origin), renders them into the single
//! line shown by the notification panel, and reports how the panel's
//! visibility changes with every mutation. [`VersionLedger`] remembers the
//! latest version each origin advertised.

pub mod aggregator;
pub mod versions;

pub use crate::aggregator::{Notice, NotificationAggregator, PanelTransition};
pub use crate::versions::VersionLedger;
