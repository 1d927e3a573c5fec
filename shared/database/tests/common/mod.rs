//! Fixture schema and seed data shared by the repository integration tests.

#![allow(dead_code)]

use northwind_database::SqlxDatabase;
use northwind_utils::{DatabaseConfig, Dialect};

/// Temporary tables, so a scratch Postgres database is left untouched.
const SCHEMA: &[&str] = &[
    r#"CREATE TEMP TABLE Customer (
        id TEXT PRIMARY KEY,
        companyname TEXT,
        contactname TEXT,
        contacttitle TEXT,
        address TEXT,
        city TEXT,
        region TEXT,
        postalcode TEXT,
        country TEXT,
        phone TEXT,
        fax TEXT
    )"#,
    r#"CREATE TEMP TABLE CustomerOrder (
        id INTEGER PRIMARY KEY,
        customerid TEXT NOT NULL,
        shipcity TEXT
    )"#,
    r#"CREATE TEMP TABLE Supplier (
        id INTEGER PRIMARY KEY,
        companyname TEXT,
        contactname TEXT,
        contacttitle TEXT,
        address TEXT,
        city TEXT,
        region TEXT,
        postalcode TEXT,
        country TEXT,
        phone TEXT,
        fax TEXT
    )"#,
    r#"CREATE TEMP TABLE Product (
        id INTEGER PRIMARY KEY,
        productname TEXT NOT NULL,
        supplierid INTEGER NOT NULL,
        discontinued INTEGER NOT NULL DEFAULT 0
    )"#,
];

const SEED: &[&str] = &[
    r#"INSERT INTO Customer (id, companyname, contactname, contacttitle, address, city, region, postalcode, country, phone, fax) VALUES
        ('ALFKI', 'Alfreds Futterkiste', 'Maria Anders', 'Sales Representative', 'Obere Str. 57', 'Berlin', NULL, '12209', 'Germany', '030-0074321', '030-0076545'),
        ('MIKES', 'Smith Hardware', 'Mike Smith', 'Owner', '12 Elm St.', 'Portland', 'OR', '97201', 'USA', '(503) 555-0100', NULL),
        ('DINER', 'MIKE''S DINER', 'Ann Lee', 'Manager', '400 Main St.', 'Austin', 'TX', '78701', 'USA', '(512) 555-0199', NULL),
        ('ORGAN', '100% Organic', 'Pat Jones', 'Buyer', '9 Farm Rd.', 'Boise', 'ID', '83702', 'USA', NULL, NULL),
        ('UNDER', 'Under_Score Ltd', 'Sam Doe', 'Accountant', '1 Low St.', 'Leeds', NULL, 'LS1 1AA', 'UK', NULL, NULL)"#,
    r#"INSERT INTO CustomerOrder (id, customerid, shipcity) VALUES
        (10643, 'ALFKI', 'Berlin'),
        (10692, 'ALFKI', 'Berlin'),
        (10702, 'MIKES', 'Portland')"#,
    r#"INSERT INTO Supplier (id, companyname, contactname, contacttitle, address, city, region, postalcode, country, phone, fax) VALUES
        (1, 'Exotic Liquids', 'Charlotte Cooper', 'Purchasing Manager', '49 Gilbert St.', 'London', NULL, 'EC1 4SD', 'UK', '(171) 555-2222', NULL),
        (2, 'New Orleans Cajun Delights', 'Shelley Burke', 'Order Administrator', 'P.O. Box 78934', 'New Orleans', 'LA', '70117', 'USA', '(100) 555-4822', NULL),
        (3, 'Idle Imports', 'Nobody Yet', NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL)"#,
    r#"INSERT INTO Product (id, productname, supplierid) VALUES
        (1, 'Chai', 1),
        (2, 'Chang', 1),
        (3, 'Aniseed Syrup', 1),
        (4, 'Chef Anton''s Cajun Seasoning', 2)"#,
];

/// Connects with a single pooled connection so temporary tables stay visible.
pub async fn connect(url: &str, dialect: Dialect) -> SqlxDatabase {
    let config = DatabaseConfig {
        url: url.to_string(),
        dialect: Some(dialect),
        max_connections: 1,
        connection_timeout_seconds: 5,
    };

    let database = SqlxDatabase::connect(&config)
        .await
        .expect("connect to test database");

    for statement in SCHEMA.iter().chain(SEED) {
        sqlx::query(statement)
            .execute(database.pool())
            .await
            .expect("apply fixture");
    }

    database
}

pub async fn sqlite() -> SqlxDatabase {
    connect("sqlite::memory:", Dialect::Sqlite).await
}
