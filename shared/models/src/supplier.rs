//! Supplier row models.

use serde::{Deserialize, Serialize};

/// A full `Supplier` row with its native columns only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: i64,
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

/// A supplier as listed in a collection, decorated with the names of the
/// products it supplies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SupplierSummary {
    #[serde(flatten)]
    pub supplier: Supplier,
    /// Product names joined with `", "`, descending by name. Empty when the
    /// engine has no string aggregation.
    #[serde(rename = "productlist")]
    pub product_list: String,
}
