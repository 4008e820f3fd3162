//! Disease repository.
//!
//! Upserts and reads disease records in MongoDB, keyed by `name`.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOptions, UpdateOptions};
use mongodb::Collection;
use tracing::debug;

use crate::database::{Database, DiseaseStore, NAME_FIELD};
use crate::error::Result;

/// Repository for the disease collection.
///
/// Records are stored as raw documents so that fields this tool does not
/// know about survive a round trip unchanged.
#[derive(Debug, Clone)]
pub struct DiseaseRepository {
    collection: Collection<Document>,
}

impl DiseaseRepository {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }

    /// Names of every stored record, sorted. Documents without a string
    /// `name` are left out.
    pub async fn names(&self) -> Result<Vec<String>> {
        let options = FindOptions::builder()
            .projection(doc! { NAME_FIELD: 1, "_id": 0 })
            .sort(doc! { NAME_FIELD: 1 })
            .build();

        let mut cursor = self.collection.find(doc! {}).with_options(options).await?;
        let mut names = Vec::new();

        while let Some(doc) = cursor.try_next().await? {
            if let Ok(name) = doc.get_str(NAME_FIELD) {
                names.push(name.to_string());
            }
        }

        debug!("Fetched {} disease names", names.len());
        Ok(names)
    }
}

impl DiseaseStore for DiseaseRepository {
    async fn upsert(&mut self, filter: Document, values: Document) -> Result<bool> {
        let options = UpdateOptions::builder().upsert(true).build();

        let result = self
            .collection
            .update_one(filter, doc! { "$set": values })
            .with_options(options)
            .await?;

        Ok(result.upserted_id.is_some())
    }

    async fn count_documents(&self, filter: Document) -> Result<u64> {
        Ok(self.collection.count_documents(filter).await?)
    }
}
