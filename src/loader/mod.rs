//! Upsert loader.
//!
//! Writes every named record of a container into a [`DiseaseStore`],
//! updating the stored record with the same `name` or inserting a new one.
//! Running the same load twice leaves the store as a single run would.

mod container;

use std::path::Path;

use mongodb::bson::{doc, Document};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::database::{DiseaseRecord, DiseaseStore};
use crate::error::Result;

pub use container::{parse_container, read_container};

/// Outcome of a load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records an upsert was issued for.
    pub processed: usize,
    pub inserted: usize,
    pub updated: usize,
    /// Entries without a usable `name`.
    pub skipped: usize,
    /// Set when the load was skipped because the store already held this
    /// many documents.
    pub already_populated: Option<u64>,
}

/// Loads record containers into a store it borrows exclusively.
pub struct UpsertLoader<'a, S: DiseaseStore> {
    store: &'a mut S,
}

impl<'a, S: DiseaseStore> UpsertLoader<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Read `path` and load it.
    ///
    /// With `only_if_empty`, nothing is written when the store already has
    /// documents.
    pub async fn load_file(&mut self, path: &Path, only_if_empty: bool) -> Result<LoadReport> {
        info!("Loading disease records from {}", path.display());
        let container = read_container(path)?;

        if only_if_empty {
            let existing = self.store.count_documents(doc! {}).await?;
            if existing > 0 {
                info!("Collection already has {} documents, skipping load", existing);
                return Ok(LoadReport {
                    already_populated: Some(existing),
                    ..Default::default()
                });
            }
        }

        self.load(container).await
    }

    /// Upsert every named record of `container`, in order.
    ///
    /// The container is validated and every record encoded before the first
    /// write, so a malformed input leaves the store untouched.
    pub async fn load(&mut self, container: Value) -> Result<LoadReport> {
        let items = parse_container(container)?;
        let mut report = LoadReport::default();
        let mut writes: Vec<(String, Document, Document)> = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(fields) = item else {
                warn!("Skipping entry {}: not an object", index);
                report.skipped += 1;
                continue;
            };

            let record = DiseaseRecord::new(fields);
            let (Some(name), Some(filter)) = (record.name(), record.key_filter()) else {
                if record.has_name_field() {
                    warn!("Skipping entry {}: `name` is not a string", index);
                } else {
                    debug!("Skipping entry {}: no `name`", index);
                }
                report.skipped += 1;
                continue;
            };

            writes.push((name.to_string(), filter, record.to_document()?));
        }

        for (name, filter, values) in writes {
            if self.store.upsert(filter, values).await? {
                report.inserted += 1;
                debug!("Inserted {}", name);
            } else {
                report.updated += 1;
                debug!("Updated {}", name);
            }
            report.processed += 1;
        }

        info!(
            "Upserted {} records ({} inserted, {} updated, {} skipped)",
            report.processed, report.inserted, report.updated, report.skipped
        );
        Ok(report)
    }

    /// Insert the sample record if the store is empty.
    ///
    /// Returns `true` if the sample was written.
    pub async fn seed_sample(&mut self) -> Result<bool> {
        let existing = self.store.count_documents(doc! {}).await?;
        if existing > 0 {
            debug!("Store already has {} documents, not seeding", existing);
            return Ok(false);
        }

        let sample = DiseaseRecord::sample();
        let Some(filter) = sample.key_filter() else {
            return Ok(false);
        };
        self.store.upsert(filter, sample.to_document()?).await?;
        Ok(true)
    }
}
