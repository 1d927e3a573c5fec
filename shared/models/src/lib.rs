//! # Northwind Domain Models
//!
//! Row models returned by the Northwind data-access layer.
//!
//! ## Key Models
//!
//! - **Customer** / **CustomerSummary**: a full customer row, and a listed
//!   customer carrying its derived order count
//! - **Supplier** / **SupplierSummary**: a full supplier row, and a listed
//!   supplier carrying its derived product list
//! - **CustomerListOptions**: the optional name filter for customer listings
//!
//! Derived fields are computed by the database at query time and are never
//! stored.

pub mod customer;
pub mod supplier;

pub use customer::*;
pub use supplier::*;
