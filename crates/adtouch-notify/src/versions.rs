use adtouch_bridge::update::{Origin, OriginVersion};

/// Latest version advertised by the updater for every origin it mentioned.
///
/// Unlike pending notices, entries are never removed: installing or
/// dismissing an update does not make its version unknown again.
#[derive(Debug, Clone, Default)]
pub struct VersionLedger {
    entries: Vec<OriginVersion>,
}

impl VersionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes that `origin` advertised an update. A `None` version registers
    /// the origin without overwriting a version reported earlier.
    pub fn observe(&mut self, origin: &Origin, version: Option<&str>) {
        match self.entries.iter_mut().find(|entry| &entry.origin == origin) {
            Some(entry) => {
                if let Some(version) = version {
                    entry.latest = Some(version.to_string());
                }
            }
            None => self.entries.push(OriginVersion {
                origin: origin.clone(),
                latest: version.map(str::to_string),
            }),
        }
    }

    #[cfg(test)]
    pub fn latest(&self, origin: &Origin) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| &entry.origin == origin)
            .and_then(|entry| entry.latest.as_deref())
    }

    /// All known origins in first-seen order.
    pub fn snapshot(&self) -> Vec<OriginVersion> {
        self.entries.clone()
    }
}
