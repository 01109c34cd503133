use crate::error::StoreResult;
use crate::permalink::Permalink;

/// Permalink store.
///
/// All implementations must satisfy these invariants:
/// - Every successful save returns a fresh id; ids are never reused while
///   their entry is live.
/// - Expired entries read as absent. Whether their space is reclaimed
///   eagerly or lazily is up to the backend.
/// - A store at capacity rejects saves with
///   [`StoreError::CapacityExhausted`](crate::StoreError::CapacityExhausted)
///   rather than evicting live entries.
/// - All I/O errors are propagated, never silently ignored.
pub trait PermalinkStore: Send + Sync {
    /// Persist a pair of config texts and return the generated share id.
    fn save(&self, text1: &str, text2: &str) -> StoreResult<String>;

    /// Load a permalink by id.
    ///
    /// Returns `Ok(None)` if the id is unknown or the entry has expired.
    fn load(&self, id: &str) -> StoreResult<Option<Permalink>>;

    /// Delete a permalink by id. Returns `true` if the entry existed.
    fn delete(&self, id: &str) -> StoreResult<bool>;
}
