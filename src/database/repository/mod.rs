//! Repository module - data access layer.

mod disease_repository;

pub use disease_repository::DiseaseRepository;
