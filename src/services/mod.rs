// Service exports
pub mod catalog;
pub mod postgres;
pub mod submissions;

pub use catalog::{CatalogError, ProviderCatalog};
pub use postgres::PostgresSubmissionStore;
pub use submissions::{
    DisabledSubmissionStore, IntakeSubmission, MemorySubmissionStore, StoreError, SubmissionStore,
};
