use serde::{Deserialize, Serialize};

/// Tracks the last model revision a spec was built for.
///
/// Model owners bump `ChartDataModel::revision` on every mutation; callers
/// rebuild only when the revision moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RebuildGate {
    last_built: Option<u64>,
}

impl RebuildGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn should_rebuild(&self, revision: u64) -> bool {
        self.last_built != Some(revision)
    }

    pub fn mark_built(&mut self, revision: u64) {
        self.last_built = Some(revision);
    }

    /// Forces the next check to request a build.
    pub fn invalidate(&mut self) {
        self.last_built = None;
    }

    #[must_use]
    pub fn last_built(&self) -> Option<u64> {
        self.last_built
    }
}
