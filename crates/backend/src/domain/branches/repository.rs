use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, Statement};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub company_id: String,
    pub name: String,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Branch row with its parent company embedded (one level of relation).
#[derive(Debug, Clone, FromQueryResult)]
pub struct BranchWithCompany {
    pub id: String,
    pub code: String,
    pub company_id: String,
    pub name: String,
    pub location: String,
    pub company_name: String,
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_by_company(company_id: &str) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::CompanyId.eq(company_id))
        .all(conn())
        .await
}

/// Fetch one branch joined with its parent company. `None` when the branch
/// id has no matching row.
pub async fn get_with_company(branch_id: &str) -> Result<Option<BranchWithCompany>, DbErr> {
    let sql = r#"
        SELECT
            b.id,
            b.code,
            b.company_id,
            b.name,
            b.location,
            c.name AS company_name
        FROM branches b
        JOIN companies c ON b.company_id = c.id
        WHERE b.id = ?
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [branch_id.into()],
    );

    BranchWithCompany::find_by_statement(stmt).one(conn()).await
}
