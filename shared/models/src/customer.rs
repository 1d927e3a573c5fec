//! Customer row models.
//!
//! Serialized field names are the lower-case Northwind column names.

use serde::{Deserialize, Serialize};

/// A full `Customer` row, as returned by a lookup by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: String,
    #[serde(rename = "companyname")]
    pub company_name: Option<String>,
    #[serde(rename = "contactname")]
    pub contact_name: Option<String>,
    #[serde(rename = "contacttitle")]
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "postalcode")]
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

/// A customer as listed in a collection, with its order count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerSummary {
    pub id: String,
    #[serde(rename = "contactname")]
    pub contact_name: Option<String>,
    #[serde(rename = "companyname")]
    pub company_name: Option<String>,
    /// Number of `CustomerOrder` rows for this customer; zero when it has none.
    #[serde(rename = "ordercount")]
    pub order_count: i64,
}

/// Options that customize a "list customers" query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerListOptions {
    /// Case-insensitive substring matched against contact and company name.
    pub filter: Option<String>,
}

impl CustomerListOptions {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
        }
    }

    /// The filter to apply, if any. An empty string means "no filter";
    /// anything else, whitespace included, is used as given.
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }
}
