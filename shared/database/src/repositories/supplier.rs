//! Supplier Repository
//!
//! Read operations for supplier records. The product list attached to each
//! listed supplier depends on the engine's string aggregation support.

use anyhow::{Context, Result};
use sqlx::FromRow;
use std::sync::Arc;

use northwind_models::{Supplier, SupplierSummary};
use northwind_utils::Dialect;

use super::{decode, NullableText};
use crate::handle::Database;
use crate::sql::Sql;

/// Native supplier columns selected for the supplier listing
const SUPPLIER_COLUMNS: &[&str] = &[
    "id",
    "companyname",
    "contactname",
    "contacttitle",
    "address",
    "city",
    "region",
    "postalcode",
    "country",
    "phone",
    "fax",
];

#[derive(Clone)]
pub struct SupplierRepository {
    db: Arc<dyn Database>,
}

impl SupplierRepository {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// List all suppliers, each with the names of its products.
    pub async fn list_suppliers(&self) -> Result<Vec<SupplierSummary>> {
        let dialect = self.db.dialect();
        let statement = list_suppliers_statement(dialect);
        tracing::debug!(%dialect, "Listing suppliers");

        let rows = self
            .db
            .all(&statement)
            .await
            .context("Failed to list suppliers")?;

        rows.iter()
            .map(|row| decode::<SupplierSummaryRow>(row).map(SupplierSummary::from))
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to decode supplier rows")
    }

    /// Find supplier by ID
    pub async fn get_supplier(&self, id: i64) -> Result<Option<Supplier>> {
        let statement = Sql::literal("SELECT *\nFROM Supplier\nWHERE id = ").bind(id);

        let row = self
            .db
            .get(&statement)
            .await
            .context("Failed to fetch supplier by ID")?;

        row.as_ref()
            .map(|row| decode::<SupplierRow>(row).map(Supplier::from))
            .transpose()
            .context("Failed to decode supplier row")
    }
}

fn product_list_column(dialect: Dialect) -> Sql {
    if dialect.supports_string_agg() {
        Sql::literal("coalesce(string_agg(p.productname, ', ' ORDER BY p.productname DESC), '')")
    } else {
        // TODO: SQLite could use group_concat once the empty product list is
        // confirmed to be unintended rather than a product decision.
        Sql::literal("''")
    }
}

fn list_suppliers_statement(dialect: Dialect) -> Sql {
    Sql::literal("SELECT ")
        .push_columns("s", SUPPLIER_COLUMNS)
        .push(",\n  ")
        .push_sql(product_list_column(dialect))
        .push(" AS productlist\nFROM Supplier AS s\nLEFT JOIN (SELECT * FROM Product ORDER BY productname DESC) AS p ON p.supplierid = s.id\nGROUP BY s.id")
}

#[derive(Debug, FromRow)]
struct SupplierRow {
    id: i64,
    #[sqlx(rename = "companyname")]
    company_name: NullableText,
    #[sqlx(rename = "contactname")]
    contact_name: NullableText,
    #[sqlx(rename = "contacttitle")]
    contact_title: NullableText,
    address: NullableText,
    city: NullableText,
    region: NullableText,
    #[sqlx(rename = "postalcode")]
    postal_code: NullableText,
    country: NullableText,
    phone: NullableText,
    fax: NullableText,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            company_name: row.company_name.into_inner(),
            contact_name: row.contact_name.into_inner(),
            contact_title: row.contact_title.into_inner(),
            address: row.address.into_inner(),
            city: row.city.into_inner(),
            region: row.region.into_inner(),
            postal_code: row.postal_code.into_inner(),
            country: row.country.into_inner(),
            phone: row.phone.into_inner(),
            fax: row.fax.into_inner(),
        }
    }
}

#[derive(Debug, FromRow)]
struct SupplierSummaryRow {
    #[sqlx(flatten)]
    supplier: SupplierRow,
    #[sqlx(rename = "productlist")]
    product_list: NullableText,
}

impl From<SupplierSummaryRow> for SupplierSummary {
    fn from(row: SupplierSummaryRow) -> Self {
        Self {
            supplier: row.supplier.into(),
            product_list: row.product_list.into_inner().unwrap_or_default(),
        }
    }
}
