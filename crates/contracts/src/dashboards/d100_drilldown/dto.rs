use serde::{Deserialize, Serialize};

use crate::shared::progress::ProgressStatus;

/// Company card for the top-level view: cumulative sales across all
/// branches plus the branch summaries for the next drill-down level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCard {
    pub id: String,
    /// Stable business code, used as the target lookup key.
    pub code: String,
    pub name: String,
    pub total_sales: f64,
    pub branch_count: usize,
    pub target: f64,
    /// `None` when the resolved target is not a positive number.
    pub progress_percent: Option<f64>,
    pub status: Option<ProgressStatus>,
    pub branches: Vec<BranchCard>,
}

/// Branch summary. `products` is populated only by the branch-detail
/// aggregation; the company view leaves it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchCard {
    pub id: String,
    pub code: String,
    pub company_id: String,
    pub name: String,
    pub location: String,
    pub total_sales: f64,
    pub target: f64,
    pub progress_percent: Option<f64>,
    pub status: Option<ProgressStatus>,
    pub products: Vec<ProductCard>,
}

/// Branch detail returned by the drill-down endpoint: the branch card with
/// products grouped from its sale lines, plus the parent company reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDetail {
    pub branch: BranchCard,
    pub company_id: String,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub total_sales: f64,
    pub quantity_sold: i64,
    pub target: f64,
    pub progress_percent: Option<f64>,
    pub status: Option<ProgressStatus>,
}

/// One sale row in the product detail, with its branch joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSaleRow {
    pub sold_at: String,
    pub quantity: i64,
    pub branch_id: String,
    pub branch_name: String,
    pub branch_location: String,
}

/// Product detail. `branch_scope` echoes the branch filter the aggregation
/// was scoped to, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: ProductCard,
    pub branch_scope: Option<String>,
    pub sales: Vec<ProductSaleRow>,
}
