//! Customer Repository
//!
//! Read operations for customer records.

use anyhow::{Context, Result};
use sqlx::FromRow;
use std::sync::Arc;

use northwind_models::{Customer, CustomerListOptions, CustomerSummary};

use super::{decode, NullableText};
use crate::handle::Database;
use crate::sql::Sql;

/// Columns selected for the customer listing
const LIST_COLUMNS: &[&str] = &["id", "contactname", "companyname"];

#[derive(Clone)]
pub struct CustomerRepository {
    db: Arc<dyn Database>,
}

impl CustomerRepository {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// List customers with their order counts, optionally filtered by a
    /// case-insensitive substring of contact or company name.
    pub async fn list_customers(
        &self,
        options: &CustomerListOptions,
    ) -> Result<Vec<CustomerSummary>> {
        let statement = list_customers_statement(options);
        tracing::debug!(
            filtered = options.active_filter().is_some(),
            "Listing customers"
        );

        let rows = self
            .db
            .all(&statement)
            .await
            .context("Failed to list customers")?;

        rows.iter()
            .map(|row| decode::<CustomerSummaryRow>(row).map(CustomerSummary::from))
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to decode customer rows")
    }

    /// Find customer by ID
    pub async fn get_customer(&self, id: &str) -> Result<Option<Customer>> {
        let statement = Sql::literal("SELECT *\nFROM Customer\nWHERE id = ").bind(id);

        let row = self
            .db
            .get(&statement)
            .await
            .context("Failed to fetch customer by ID")?;

        row.as_ref()
            .map(|row| decode::<CustomerRow>(row).map(Customer::from))
            .transpose()
            .context("Failed to decode customer row")
    }
}

fn list_customers_statement(options: &CustomerListOptions) -> Sql {
    let mut statement = Sql::literal("SELECT ")
        .push_columns("c", LIST_COLUMNS)
        .push(", count(co.id) AS ordercount\nFROM Customer AS c\nLEFT JOIN CustomerOrder AS co ON c.id = co.customerid");

    if let Some(filter) = options.active_filter() {
        let pattern = like_pattern(filter);
        statement = statement
            .push("\nWHERE (lower(c.contactname) LIKE lower(")
            .bind(pattern.clone())
            .push(r") ESCAPE '\')")
            .push("\n   OR (lower(c.companyname) LIKE lower(")
            .bind(pattern)
            .push(r") ESCAPE '\')");
    }

    statement.push("\nGROUP BY c.id")
}

/// `%filter%` with LIKE wildcards in `filter` escaped, so the filter only
/// ever matches as a literal substring.
fn like_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for ch in filter.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: String,
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

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
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
struct CustomerSummaryRow {
    id: String,
    #[sqlx(rename = "contactname")]
    contact_name: NullableText,
    #[sqlx(rename = "companyname")]
    company_name: NullableText,
    #[sqlx(rename = "ordercount")]
    order_count: i64,
}

impl From<CustomerSummaryRow> for CustomerSummary {
    fn from(row: CustomerSummaryRow) -> Self {
        Self {
            id: row.id,
            contact_name: row.contact_name.into_inner(),
            company_name: row.company_name.into_inner(),
            order_count: row.order_count,
        }
    }
}
