use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Index of a render target in the engine's [`TargetTable`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetId(pub u32);

/// Handle returned by region registration.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RegionHandle(pub u64);

/// Handle returned by slide-group registration.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GroupHandle(pub u64);

/// Registration scope; everything registered in a scope is released together.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ScopeId(pub u64);

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

impl fmt::Display for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Monotonic handle counter shared between the engine and its command queues.
///
/// Handles are never reused, so a stale handle can't alias a newer registration.
#[derive(Clone, Debug, Default)]
pub(crate) struct HandleMint(Arc<AtomicU64>);

impl HandleMint {
    pub(crate) fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Arena of render targets, addressed by [`TargetId`].
///
/// Names are resolved once at registration; per-frame output only carries ids.
#[derive(Clone, Debug, Default)]
pub struct TargetTable {
    ids_by_name: HashMap<String, TargetId>,
    names_by_id: Vec<String>,
}

impl TargetTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, inserting it on first use.
    pub fn intern(&mut self, name: &str) -> TargetId {
        if let Some(&id) = self.ids_by_name.get(name) {
            return id;
        }
        let id = TargetId(u32::try_from(self.names_by_id.len()).unwrap_or(u32::MAX));
        self.names_by_id.push(name.to_owned());
        self.ids_by_name.insert(name.to_owned(), id);
        id
    }

    /// Look up an already interned name.
    pub fn lookup(&self, name: &str) -> Option<TargetId> {
        self.ids_by_name.get(name).copied()
    }

    /// Name of a target id.
    pub fn name(&self, id: TargetId) -> Option<&str> {
        self.names_by_id.get(id.0 as usize).map(String::as_str)
    }

    /// Number of interned targets.
    pub fn len(&self) -> usize {
        self.names_by_id.len()
    }

    /// Return `true` when no target was interned yet.
    pub fn is_empty(&self) -> bool {
        self.names_by_id.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
