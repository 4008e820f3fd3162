//! Store handle used by the upsert loader.

use mongodb::bson::Document;

use crate::error::Result;

/// Minimal keyed document store.
///
/// The loader only ever needs these two primitives, which keeps it
/// independent of MongoDB and testable against an in-memory store.
#[allow(async_fn_in_trait)]
pub trait DiseaseStore {
    /// Apply `values` to the document matching `filter`, inserting one if
    /// nothing matches. Returns `true` when a new document was inserted.
    async fn upsert(&mut self, filter: Document, values: Document) -> Result<bool>;

    /// Count documents matching `filter` (an empty filter counts everything).
    async fn count_documents(&self, filter: Document) -> Result<u64>;
}
