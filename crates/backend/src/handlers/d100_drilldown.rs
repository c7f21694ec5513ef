use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use contracts::dashboards::d100_drilldown::{BranchDetail, CompanyCard, ProductDetail};

use crate::dashboards::d100_drilldown::{service, DrilldownError};
use crate::shared::data::seed::{self, SeedSummary};

fn into_status(err: DrilldownError, context: &str) -> StatusCode {
    match err {
        DrilldownError::NotFound { .. } => {
            tracing::warn!("{}: {}", context, err);
            StatusCode::NOT_FOUND
        }
        other => {
            tracing::error!("{}: {}", context, other);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub async fn list_companies() -> Result<Json<Vec<CompanyCard>>, StatusCode> {
    service::aggregate_company_view()
        .await
        .map(Json)
        .map_err(|e| into_status(e, "Failed to aggregate company view"))
}

pub async fn get_branch_detail(Path(id): Path<String>) -> Result<Json<BranchDetail>, StatusCode> {
    service::aggregate_branch_detail(&id)
        .await
        .map(Json)
        .map_err(|e| into_status(e, "Failed to aggregate branch detail"))
}

#[derive(Deserialize)]
pub struct ProductDetailParams {
    pub branch_id: Option<String>,
}

pub async fn get_product_detail(
    Path(id): Path<String>,
    Query(params): Query<ProductDetailParams>,
) -> Result<Json<ProductDetail>, StatusCode> {
    service::aggregate_product_detail(&id, params.branch_id.as_deref())
        .await
        .map(Json)
        .map_err(|e| into_status(e, "Failed to aggregate product detail"))
}

pub async fn insert_test_data() -> Result<Json<SeedSummary>, StatusCode> {
    match seed::insert_demo_dataset().await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Failed to seed demo dataset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
