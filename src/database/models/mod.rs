//! Database models.

pub mod disease;

pub use disease::{DiseaseRecord, NAME_FIELD};
