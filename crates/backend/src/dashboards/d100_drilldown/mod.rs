pub mod service;

use sea_orm::DbErr;
use thiserror::Error;

/// Error taxonomy of the drill-down aggregations: either the store rejected
/// a fetch, or a requested id has no matching row.
#[derive(Debug, Error)]
pub enum DrilldownError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Fetch(#[from] DbErr),
    #[error("aggregation task failed: {0}")]
    Task(String),
}
