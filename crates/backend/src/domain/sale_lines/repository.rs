use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sale_lines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub branch_id: String,
    pub product_id: String,
    pub sold_at: String,
    pub quantity: i64,
    pub line_total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Sale line annotated with the product's unit price. Quantity and price
/// stay optional: the aggregation treats missing values as zero.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SaleLineWithPrice {
    pub product_id: String,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
}

/// Sale line with full product detail joined, for the branch drill-down.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SaleLineWithProduct {
    pub product_id: String,
    pub quantity: Option<i64>,
    pub product_code: String,
    pub product_name: String,
    pub category: String,
    pub unit_price: f64,
}

/// Sale line with its branch joined, for the product drill-down.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SaleLineWithBranch {
    pub sold_at: String,
    pub quantity: Option<i64>,
    pub branch_id: String,
    pub branch_name: String,
    pub branch_location: String,
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_for_branch(branch_id: &str) -> Result<Vec<SaleLineWithPrice>, DbErr> {
    let sql = r#"
        SELECT
            s.product_id,
            s.quantity,
            p.unit_price
        FROM sale_lines s
        LEFT JOIN products p ON s.product_id = p.id
        WHERE s.branch_id = ?
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [branch_id.into()],
    );

    SaleLineWithPrice::find_by_statement(stmt).all(conn()).await
}

pub async fn list_for_branch_with_product(
    branch_id: &str,
) -> Result<Vec<SaleLineWithProduct>, DbErr> {
    let sql = r#"
        SELECT
            s.product_id,
            s.quantity,
            p.code AS product_code,
            p.name AS product_name,
            p.category,
            p.unit_price
        FROM sale_lines s
        JOIN products p ON s.product_id = p.id
        WHERE s.branch_id = ?
        ORDER BY s.rowid
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [branch_id.into()],
    );

    SaleLineWithProduct::find_by_statement(stmt)
        .all(conn())
        .await
}

pub async fn list_for_product(
    product_id: &str,
    branch_id: Option<&str>,
) -> Result<Vec<SaleLineWithBranch>, DbErr> {
    let mut sql = String::from(
        r#"
        SELECT
            s.sold_at,
            s.quantity,
            b.id AS branch_id,
            b.name AS branch_name,
            b.location AS branch_location
        FROM sale_lines s
        JOIN branches b ON s.branch_id = b.id
        WHERE s.product_id = ?
    "#,
    );

    let mut params: Vec<sea_orm::Value> = vec![product_id.into()];
    if let Some(branch) = branch_id {
        sql.push_str(" AND s.branch_id = ?");
        params.push(branch.into());
    }
    sql.push_str(" ORDER BY s.sold_at");

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, &sql, params);

    SaleLineWithBranch::find_by_statement(stmt).all(conn()).await
}
