//! In-memory [`DiseaseStore`] for tests.

use mongodb::bson::Document;

use super::DiseaseStore;
use crate::error::Result;

/// Vec-backed store with the same match and `$set` semantics as the
/// MongoDB repository.
///
/// Server-side validation is not modelled: writes to `_id` on an existing
/// document, and dotted or `$`-prefixed keys, are applied as plain top-level
/// fields here while MongoDB rejects or reinterprets them. Loads of such
/// records need a live server to check.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStore {
    pub docs: Vec<Document>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_docs(docs: Vec<Document>) -> Self {
        Self { docs, writes: 0 }
    }

    /// Find a stored document by its `name`.
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.docs
            .iter()
            .find(|doc| doc.get_str("name").ok() == Some(name))
    }

    fn matches(doc: &Document, filter: &Document) -> bool {
        filter.iter().all(|(key, value)| doc.get(key) == Some(value))
    }
}

impl DiseaseStore for MemoryStore {
    async fn upsert(&mut self, filter: Document, values: Document) -> Result<bool> {
        self.writes += 1;

        if let Some(doc) = self.docs.iter_mut().find(|doc| Self::matches(doc, &filter)) {
            for (key, value) in values {
                doc.insert(key, value);
            }
            return Ok(false);
        }

        let mut doc = filter;
        for (key, value) in values {
            doc.insert(key, value);
        }
        self.docs.push(doc);
        Ok(true)
    }

    async fn count_documents(&self, filter: Document) -> Result<u64> {
        let count = self
            .docs
            .iter()
            .filter(|doc| Self::matches(doc, &filter))
            .count();
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[tokio::test]
    async fn test_upsert_inserts_filter_and_values() {
        let mut store = MemoryStore::default();

        let inserted = store
            .upsert(doc! { "name": "Rabies" }, doc! { "species": ["Dog"] })
            .await
            .unwrap();

        assert!(inserted);
        assert_eq!(store.docs, vec![doc! { "name": "Rabies", "species": ["Dog"] }]);
    }

    #[tokio::test]
    async fn test_upsert_sets_fields_and_keeps_the_rest() {
        let mut store = MemoryStore::with_docs(vec![
            doc! { "name": "Rabies", "category": "viral", "species": ["Dog"] },
        ]);

        let inserted = store
            .upsert(doc! { "name": "Rabies" }, doc! { "species": ["Dog", "Cat"] })
            .await
            .unwrap();

        assert!(!inserted);
        assert_eq!(
            store.docs,
            vec![doc! { "name": "Rabies", "category": "viral", "species": ["Dog", "Cat"] }]
        );
        assert_eq!(store.writes, 1);
    }

    #[tokio::test]
    async fn test_count_documents_filters_by_equality() {
        let store = MemoryStore::with_docs(vec![
            doc! { "name": "Rabies" },
            doc! { "name": "Anthrax" },
        ]);

        assert_eq!(store.count_documents(doc! {}).await.unwrap(), 2);
        assert_eq!(store.count_documents(doc! { "name": "Anthrax" }).await.unwrap(), 1);
        assert_eq!(store.count_documents(doc! { "name": "Glanders" }).await.unwrap(), 0);
    }
}
