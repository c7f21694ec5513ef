use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, EntityTrait, Set, Statement};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{branches, companies, products, sale_lines};
use crate::shared::data::db::get_connection;

#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub companies: usize,
    pub branches: usize,
    pub products: usize,
    pub sale_lines: usize,
}

const COMPANIES: &[(&str, &str)] = &[
    ("CMP-TECHCORP", "TechCorp Solutions"),
    ("CMP-RETAILMAX", "RetailMax"),
    ("CMP-FASHION", "FashionStyle"),
];

// (branch code, company code, name, location)
const BRANCHES: &[(&str, &str, &str, &str)] = &[
    ("BR-CENTRAL", "CMP-TECHCORP", "Sede Central", "Buenos Aires"),
    ("BR-CORDOBA", "CMP-TECHCORP", "Sucursal Córdoba", "Córdoba"),
    ("BR-ROSARIO", "CMP-TECHCORP", "Sucursal Rosario", "Rosario"),
    ("BR-PRINCIPAL", "CMP-RETAILMAX", "Tienda Principal", "Buenos Aires"),
    ("BR-NORTE", "CMP-RETAILMAX", "Shopping Norte", "San Isidro"),
    ("BR-CCOMERCIAL", "CMP-RETAILMAX", "Centro Comercial", "Mendoza"),
    ("BR-BOUTIQUE", "CMP-FASHION", "Boutique Principal", "Palermo"),
    ("BR-PALERMO", "CMP-FASHION", "Showroom Palermo", "Buenos Aires"),
    ("BR-TCORDOBA", "CMP-FASHION", "Tienda Córdoba", "Córdoba"),
];

// (product code, name, category, unit price)
const PRODUCTS: &[(&str, &str, &str, f64)] = &[
    ("PRD-LAPTOP", "Laptop Pro 15", "Electrónica", 1_500.0),
    ("PRD-MONITOR", "Monitor 27\"", "Electrónica", 320.0),
    ("PRD-MOUSE", "Mouse Inalámbrico", "Accesorios", 25.0),
    ("PRD-KEYBOARD", "Teclado Mecánico", "Accesorios", 90.0),
    ("PRD-JEANS", "Jeans Slim", "Indumentaria", 60.0),
    ("PRD-CAMPERA", "Campera de Cuero", "Indumentaria", 180.0),
    ("PRD-ZAPATILLAS", "Zapatillas Urban", "Calzado", 110.0),
    ("PRD-REMERA", "Remera Básica", "Indumentaria", 20.0),
];

// (branch code, product code, sold_at, quantity)
const SALE_LINES: &[(&str, &str, &str, i64)] = &[
    ("BR-CENTRAL", "PRD-LAPTOP", "2025-01-08", 12),
    ("BR-CENTRAL", "PRD-MONITOR", "2025-01-12", 30),
    ("BR-CENTRAL", "PRD-LAPTOP", "2025-02-03", 9),
    ("BR-CENTRAL", "PRD-MOUSE", "2025-02-14", 80),
    ("BR-CENTRAL", "PRD-KEYBOARD", "2025-03-02", 25),
    ("BR-CORDOBA", "PRD-LAPTOP", "2025-01-19", 6),
    ("BR-CORDOBA", "PRD-MONITOR", "2025-02-07", 18),
    ("BR-CORDOBA", "PRD-MOUSE", "2025-02-21", 40),
    ("BR-ROSARIO", "PRD-MONITOR", "2025-01-25", 10),
    ("BR-ROSARIO", "PRD-KEYBOARD", "2025-02-27", 14),
    ("BR-ROSARIO", "PRD-MOUSE", "2025-03-11", 22),
    ("BR-PRINCIPAL", "PRD-ZAPATILLAS", "2025-01-05", 120),
    ("BR-PRINCIPAL", "PRD-JEANS", "2025-01-16", 150),
    ("BR-PRINCIPAL", "PRD-REMERA", "2025-02-09", 300),
    ("BR-PRINCIPAL", "PRD-CAMPERA", "2025-03-01", 45),
    ("BR-NORTE", "PRD-JEANS", "2025-01-22", 90),
    ("BR-NORTE", "PRD-ZAPATILLAS", "2025-02-12", 60),
    ("BR-NORTE", "PRD-REMERA", "2025-03-06", 140),
    ("BR-CCOMERCIAL", "PRD-REMERA", "2025-01-30", 110),
    ("BR-CCOMERCIAL", "PRD-JEANS", "2025-02-18", 55),
    ("BR-BOUTIQUE", "PRD-CAMPERA", "2025-01-11", 38),
    ("BR-BOUTIQUE", "PRD-JEANS", "2025-02-02", 70),
    ("BR-BOUTIQUE", "PRD-ZAPATILLAS", "2025-02-24", 48),
    ("BR-PALERMO", "PRD-CAMPERA", "2025-01-27", 26),
    ("BR-PALERMO", "PRD-REMERA", "2025-02-15", 160),
    ("BR-TCORDOBA", "PRD-JEANS", "2025-01-14", 32),
    ("BR-TCORDOBA", "PRD-REMERA", "2025-03-08", 75),
];

/// Reset the store and insert the demo dataset.
///
/// Entity codes line up with the target tables shipped in the embedded
/// default config, so the seeded dashboard shows a mix of all three status
/// tiers out of the box.
pub async fn insert_demo_dataset() -> Result<SeedSummary, DbErr> {
    let conn = get_connection();

    for table in ["sale_lines", "products", "branches", "companies"] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("DELETE FROM {};", table),
        ))
        .await?;
    }

    let mut company_ids: HashMap<&str, String> = HashMap::new();
    for &(code, name) in COMPANIES {
        let id = Uuid::new_v4().to_string();
        companies::repository::Entity::insert(companies::repository::ActiveModel {
            id: Set(id.clone()),
            code: Set(code.to_string()),
            name: Set(name.to_string()),
        })
        .exec(conn)
        .await?;
        company_ids.insert(code, id);
    }

    let mut branch_ids: HashMap<&str, String> = HashMap::new();
    for &(code, company_code, name, location) in BRANCHES {
        let id = Uuid::new_v4().to_string();
        branches::repository::Entity::insert(branches::repository::ActiveModel {
            id: Set(id.clone()),
            code: Set(code.to_string()),
            company_id: Set(company_ids[company_code].clone()),
            name: Set(name.to_string()),
            location: Set(location.to_string()),
        })
        .exec(conn)
        .await?;
        branch_ids.insert(code, id);
    }

    let mut product_prices: HashMap<&str, f64> = HashMap::new();
    let mut product_ids: HashMap<&str, String> = HashMap::new();
    for &(code, name, category, unit_price) in PRODUCTS {
        let id = Uuid::new_v4().to_string();
        products::repository::Entity::insert(products::repository::ActiveModel {
            id: Set(id.clone()),
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            category: Set(category.to_string()),
            unit_price: Set(unit_price),
        })
        .exec(conn)
        .await?;
        product_ids.insert(code, id);
        product_prices.insert(code, unit_price);
    }

    for &(branch_code, product_code, sold_at, quantity) in SALE_LINES {
        sale_lines::repository::Entity::insert(sale_lines::repository::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            branch_id: Set(branch_ids[branch_code].clone()),
            product_id: Set(product_ids[product_code].clone()),
            sold_at: Set(sold_at.to_string()),
            quantity: Set(quantity),
            line_total: Set(quantity as f64 * product_prices[product_code]),
        })
        .exec(conn)
        .await?;
    }

    tracing::info!(
        "Seeded demo dataset: {} companies, {} branches, {} products, {} sale lines",
        COMPANIES.len(),
        BRANCHES.len(),
        PRODUCTS.len(),
        SALE_LINES.len()
    );

    Ok(SeedSummary {
        companies: COMPANIES.len(),
        branches: BRANCHES.len(),
        products: PRODUCTS.len(),
        sale_lines: SALE_LINES.len(),
    })
}
