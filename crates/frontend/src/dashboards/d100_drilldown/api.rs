use contracts::dashboards::d100_drilldown::{BranchDetail, CompanyCard, ProductDetail};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the company level: all companies with their branches pre-aggregated.
pub async fn get_companies() -> Result<Vec<CompanyCard>, String> {
    let response = Request::get(&api_url("/api/d100/companies"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the branch level: products sold at one branch.
pub async fn get_branch_detail(branch_id: &str) -> Result<BranchDetail, String> {
    let response = Request::get(&api_url(&format!("/api/d100/branch/{}", branch_id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the product level: sale rows for one product, optionally scoped to a branch.
pub async fn get_product_detail(
    product_id: &str,
    branch_id: Option<&str>,
) -> Result<ProductDetail, String> {
    let path = match branch_id {
        Some(b) => format!("/api/d100/product/{}?branch_id={}", product_id, b),
        None => format!("/api/d100/product/{}", product_id),
    };

    let response = Request::get(&api_url(&path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Replace the database contents with the demo dataset.
pub async fn insert_test_data() -> Result<(), String> {
    let response = Request::post(&api_url("/api/d100/testdata"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
