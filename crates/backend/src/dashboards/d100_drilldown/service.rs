use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use contracts::dashboards::d100_drilldown::{
    BranchCard, BranchDetail, CompanyCard, ProductCard, ProductDetail, ProductSaleRow,
};
use sea_orm::DbErr;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::DrilldownError;
use crate::domain::sale_lines::repository::{
    SaleLineWithBranch, SaleLineWithPrice, SaleLineWithProduct,
};
use crate::domain::{branches, companies, products, sale_lines};
use crate::shared::targets::{self, TargetResolver, TargetTier};

/// Cap on concurrent store requests per fan-out level.
const FAN_OUT_LIMIT: usize = 8;

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Aggregate the top-level company view.
///
/// One request for the company list, then one branch-list fetch per company
/// and one sale-line fetch per branch. Requests within a fan-out level run
/// concurrently (capped) and join all-or-nothing: any failure aborts the
/// whole aggregation, no partial results. Products stay empty (lazy).
pub async fn aggregate_company_view() -> Result<Vec<CompanyCard>, DrilldownError> {
    let resolver = targets::resolver();

    let company_rows = companies::repository::list_all().await?;

    let branch_results = fan_out(
        company_rows.iter().map(|c| c.id.clone()).collect(),
        |company_id: String| async move {
            let rows = branches::repository::list_by_company(&company_id).await?;
            Ok((company_id, rows))
        },
    )
    .await?;
    let mut branches_by_company: HashMap<String, Vec<branches::repository::Model>> =
        branch_results.into_iter().collect();

    let all_branch_ids: Vec<String> = branches_by_company
        .values()
        .flatten()
        .map(|b| b.id.clone())
        .collect();
    let line_results = fan_out(all_branch_ids, |branch_id: String| async move {
        let rows = sale_lines::repository::list_for_branch(&branch_id).await?;
        Ok((branch_id, rows))
    })
    .await?;
    let lines_by_branch: HashMap<String, Vec<SaleLineWithPrice>> =
        line_results.into_iter().collect();

    let cards = company_rows
        .iter()
        .map(|company| {
            let branch_cards: Vec<BranchCard> = branches_by_company
                .remove(&company.id)
                .unwrap_or_default()
                .iter()
                .map(|branch| {
                    let total = lines_by_branch
                        .get(&branch.id)
                        .map(|lines| branch_total(lines))
                        .unwrap_or(0.0);
                    branch_card(branch, total, resolver)
                })
                .collect();
            company_card(company, branch_cards, resolver)
        })
        .collect();

    Ok(cards)
}

/// Aggregate one branch's detail view: the branch with its parent company
/// reference and its sale lines grouped into product cards.
pub async fn aggregate_branch_detail(branch_id: &str) -> Result<BranchDetail, DrilldownError> {
    let resolver = targets::resolver();

    let branch = branches::repository::get_with_company(branch_id)
        .await?
        .ok_or_else(|| DrilldownError::NotFound {
            entity: "branch",
            id: branch_id.to_string(),
        })?;

    let lines = sale_lines::repository::list_for_branch_with_product(branch_id).await?;

    let total: f64 = lines
        .iter()
        .map(|l| l.quantity.unwrap_or(0) as f64 * l.unit_price)
        .sum();
    let product_cards = group_products(&lines, resolver);

    let assessment = resolver.assess(TargetTier::Branch, &branch.code, total);
    Ok(BranchDetail {
        branch: BranchCard {
            id: branch.id,
            code: branch.code,
            company_id: branch.company_id.clone(),
            name: branch.name,
            location: branch.location,
            total_sales: total,
            target: assessment.target,
            progress_percent: assessment.progress_percent,
            status: assessment.status,
            products: product_cards,
        },
        company_id: branch.company_id,
        company_name: branch.company_name,
    })
}

/// Aggregate one product's detail view, optionally scoped to a branch.
///
/// Total sales is quantity sold times the product's current unit price, not
/// the sum of historical line totals (an inherited simplification, kept on
/// purpose). No matching sale lines is not an error: zero totals, empty rows.
pub async fn aggregate_product_detail(
    product_id: &str,
    branch_scope: Option<&str>,
) -> Result<ProductDetail, DrilldownError> {
    let resolver = targets::resolver();

    let product = products::repository::get_by_id(product_id)
        .await?
        .ok_or_else(|| DrilldownError::NotFound {
            entity: "product",
            id: product_id.to_string(),
        })?;

    let rows = sale_lines::repository::list_for_product(product_id, branch_scope).await?;
    let (quantity_sold, total) = product_totals(product.unit_price, &rows);

    let assessment = resolver.assess(TargetTier::Product, &product.code, total);
    Ok(ProductDetail {
        product: ProductCard {
            id: product.id,
            code: product.code,
            name: product.name,
            category: product.category,
            unit_price: product.unit_price,
            total_sales: total,
            quantity_sold,
            target: assessment.target,
            progress_percent: assessment.progress_percent,
            status: assessment.status,
        },
        branch_scope: branch_scope.map(|s| s.to_string()),
        sales: rows.iter().map(sale_row).collect(),
    })
}

/// Run one store request per key with capped concurrency and an
/// all-or-nothing join: the first error wins and the remaining in-flight
/// tasks are dropped with the set.
async fn fan_out<K, T, F, Fut>(keys: Vec<K>, fetch: F) -> Result<Vec<T>, DrilldownError>
where
    K: Send + 'static,
    T: Send + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, DbErr>> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(FAN_OUT_LIMIT));
    let mut set = JoinSet::new();
    for key in keys {
        let semaphore = semaphore.clone();
        // The future is built eagerly but stays unpolled until a permit is
        // held, so at most FAN_OUT_LIMIT requests are in flight.
        let fut = fetch(key);
        set.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;
            fut.await
        });
    }

    let mut results = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        let result = joined.map_err(|e| DrilldownError::Task(e.to_string()))?;
        results.push(result?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Pure aggregation
// ---------------------------------------------------------------------------

/// Branch total: Σ(quantity × unit price) with missing values as zero.
fn branch_total(lines: &[SaleLineWithPrice]) -> f64 {
    lines
        .iter()
        .map(|l| l.quantity.unwrap_or(0) as f64 * l.unit_price.unwrap_or(0.0))
        .sum()
}

fn branch_card(
    branch: &branches::repository::Model,
    total: f64,
    resolver: &TargetResolver,
) -> BranchCard {
    let assessment = resolver.assess(TargetTier::Branch, &branch.code, total);
    BranchCard {
        id: branch.id.clone(),
        code: branch.code.clone(),
        company_id: branch.company_id.clone(),
        name: branch.name.clone(),
        location: branch.location.clone(),
        total_sales: total,
        target: assessment.target,
        progress_percent: assessment.progress_percent,
        status: assessment.status,
        products: Vec::new(),
    }
}

fn company_card(
    company: &companies::repository::Model,
    branches: Vec<BranchCard>,
    resolver: &TargetResolver,
) -> CompanyCard {
    let total: f64 = branches.iter().map(|b| b.total_sales).sum();
    let assessment = resolver.assess(TargetTier::Company, &company.code, total);
    CompanyCard {
        id: company.id.clone(),
        code: company.code.clone(),
        name: company.name.clone(),
        total_sales: total,
        branch_count: branches.len(),
        target: assessment.target,
        progress_percent: assessment.progress_percent,
        status: assessment.status,
        branches,
    }
}

/// Group sale lines by product id preserving first-seen order: the first
/// occurrence seeds the card, every line adds quantity×price and quantity.
fn group_products(lines: &[SaleLineWithProduct], resolver: &TargetResolver) -> Vec<ProductCard> {
    let mut order: Vec<String> = Vec::new();
    let mut index: HashMap<String, ProductCard> = HashMap::new();

    for line in lines {
        let card = index.entry(line.product_id.clone()).or_insert_with(|| {
            order.push(line.product_id.clone());
            ProductCard {
                id: line.product_id.clone(),
                code: line.product_code.clone(),
                name: line.product_name.clone(),
                category: line.category.clone(),
                unit_price: line.unit_price,
                total_sales: 0.0,
                quantity_sold: 0,
                target: 0.0,
                progress_percent: None,
                status: None,
            }
        });
        let quantity = line.quantity.unwrap_or(0);
        card.total_sales += quantity as f64 * line.unit_price;
        card.quantity_sold += quantity;
    }

    order
        .into_iter()
        .filter_map(|product_id| index.remove(&product_id))
        .map(|mut card| {
            let assessment = resolver.assess(TargetTier::Product, &card.code, card.total_sales);
            card.target = assessment.target;
            card.progress_percent = assessment.progress_percent;
            card.status = assessment.status;
            card
        })
        .collect()
}

/// Product totals: quantity sold summed over matched lines, total sales as
/// quantity × current unit price.
fn product_totals(unit_price: f64, rows: &[SaleLineWithBranch]) -> (i64, f64) {
    let quantity_sold: i64 = rows.iter().map(|r| r.quantity.unwrap_or(0)).sum();
    (quantity_sold, quantity_sold as f64 * unit_price)
}

fn sale_row(row: &SaleLineWithBranch) -> ProductSaleRow {
    ProductSaleRow {
        sold_at: row.sold_at.clone(),
        quantity: row.quantity.unwrap_or(0),
        branch_id: row.branch_id.clone(),
        branch_name: row.branch_name.clone(),
        branch_location: row.branch_location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::TargetsConfig;

    fn resolver() -> TargetResolver {
        TargetResolver::new(TargetsConfig::default())
    }

    fn line_with_price(
        product_id: &str,
        quantity: Option<i64>,
        unit_price: Option<f64>,
    ) -> SaleLineWithPrice {
        SaleLineWithPrice {
            product_id: product_id.to_string(),
            quantity,
            unit_price,
        }
    }

    fn line_with_product(product_id: &str, quantity: i64, unit_price: f64) -> SaleLineWithProduct {
        SaleLineWithProduct {
            product_id: product_id.to_string(),
            quantity: Some(quantity),
            product_code: format!("PRD-{}", product_id.to_uppercase()),
            product_name: format!("Product {}", product_id),
            category: "test".to_string(),
            unit_price,
        }
    }

    #[test]
    fn test_branch_total_sums_quantity_times_price() {
        let lines = vec![
            line_with_price("p1", Some(2), Some(10.0)),
            line_with_price("p2", Some(3), Some(5.0)),
        ];
        assert_eq!(branch_total(&lines), 35.0);
    }

    #[test]
    fn test_branch_total_treats_missing_values_as_zero() {
        let lines = vec![
            line_with_price("p1", None, Some(10.0)),
            line_with_price("p2", Some(4), None),
            line_with_price("p3", Some(2), Some(7.5)),
        ];
        assert_eq!(branch_total(&lines), 15.0);
        assert_eq!(branch_total(&[]), 0.0);
    }

    #[test]
    fn test_company_total_is_sum_of_branch_totals() {
        let r = resolver();
        let company = companies::repository::Model {
            id: "c1".to_string(),
            code: "CMP-TEST".to_string(),
            name: "Test Co".to_string(),
        };
        let branch = |id: &str, total: f64| {
            branch_card(
                &branches::repository::Model {
                    id: id.to_string(),
                    code: format!("BR-{}", id.to_uppercase()),
                    company_id: "c1".to_string(),
                    name: format!("Branch {}", id),
                    location: String::new(),
                },
                total,
                &r,
            )
        };
        let card = company_card(&company, vec![branch("b1", 100.0), branch("b2", 250.0)], &r);
        assert_eq!(card.total_sales, 350.0);
        assert_eq!(card.branch_count, 2);
        // branches stay nested with empty product lists (lazy)
        assert!(card.branches.iter().all(|b| b.products.is_empty()));
    }

    #[test]
    fn test_group_products_preserves_first_seen_order() {
        // [(p1,2),(p2,1),(p1,3)] with p1 price=10, p2 price=5
        let lines = vec![
            line_with_product("p1", 2, 10.0),
            line_with_product("p2", 1, 5.0),
            line_with_product("p1", 3, 10.0),
        ];
        let cards = group_products(&lines, &resolver());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "p1");
        assert_eq!(cards[0].quantity_sold, 5);
        assert_eq!(cards[0].total_sales, 50.0);
        assert_eq!(cards[1].id, "p2");
        assert_eq!(cards[1].quantity_sold, 1);
        assert_eq!(cards[1].total_sales, 5.0);
    }

    #[test]
    fn test_group_products_fills_target_assessment() {
        let lines = vec![line_with_product("p1", 100, 60.0)];
        let cards = group_products(&lines, &resolver());
        // flat product default of 5000; 6000/5000 = 120% -> on track
        assert_eq!(cards[0].target, 5_000.0);
        assert_eq!(cards[0].progress_percent, Some(120.0));
        assert_eq!(
            cards[0].status,
            Some(contracts::shared::progress::ProgressStatus::OnTrack)
        );
    }

    #[test]
    fn test_product_totals_use_current_unit_price() {
        let rows = vec![
            SaleLineWithBranch {
                sold_at: "2025-01-01".to_string(),
                quantity: Some(3),
                branch_id: "b1".to_string(),
                branch_name: "Branch".to_string(),
                branch_location: String::new(),
            },
            SaleLineWithBranch {
                sold_at: "2025-01-02".to_string(),
                quantity: Some(2),
                branch_id: "b1".to_string(),
                branch_name: "Branch".to_string(),
                branch_location: String::new(),
            },
        ];
        // 5 units at the current price of 12, regardless of historic totals
        assert_eq!(product_totals(12.0, &rows), (5, 60.0));
    }

    #[test]
    fn test_product_totals_with_no_lines_are_zero() {
        assert_eq!(product_totals(99.0, &[]), (0, 0.0));
    }

    #[tokio::test]
    async fn test_fan_out_collects_all_results() {
        let results = fan_out(vec![1_i64, 2, 3], |key| async move { Ok(key * 10) })
            .await
            .unwrap();
        let mut totals = results;
        totals.sort_unstable();
        assert_eq!(totals, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_fan_out_is_all_or_nothing() {
        // One failing fetch among several fails the whole batch with a
        // single fetch error, never a partial result set.
        let result = fan_out(vec![1_i64, 2, 3], |key| async move {
            if key == 2 {
                Err(DbErr::Custom("store rejected the fetch".into()))
            } else {
                Ok(key)
            }
        })
        .await;
        assert!(matches!(result, Err(DrilldownError::Fetch(_))));
    }
}
