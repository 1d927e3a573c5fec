//! Repository module for read-only database access
//!
//! Provides typed repository implementations for the Northwind entities.

pub mod customer;
pub mod supplier;

pub use customer::CustomerRepository;
pub use supplier::SupplierRepository;

use sqlx::any::AnyTypeInfo;
use sqlx::database::HasValueRef;
use sqlx::error::BoxDynError;
use sqlx::{Any, Decode, FromRow, Type, TypeInfo, ValueRef};

use northwind_utils::NorthwindResult;

use crate::handle::Row;

/// Maps a result row onto a row struct by column name.
fn decode<T>(row: &Row) -> NorthwindResult<T>
where
    T: for<'r> FromRow<'r, Row>,
{
    Ok(T::from_row(row)?)
}

/// A nullable text column.
///
/// `Option<String>` cannot be read from an `AnyRow`: its values never report
/// NULL through `is_null`, so a NULL cell reaches the `String` decoder and
/// fails. The value's type info still says `NULL`, which is checked here.
#[derive(Debug)]
struct NullableText(Option<String>);

impl NullableText {
    fn into_inner(self) -> Option<String> {
        self.0
    }
}

fn is_null_type(ty: &AnyTypeInfo) -> bool {
    ty.name() == "NULL"
}

impl Type<Any> for NullableText {
    fn type_info() -> AnyTypeInfo {
        <String as Type<Any>>::type_info()
    }

    fn compatible(ty: &AnyTypeInfo) -> bool {
        is_null_type(ty) || <String as Type<Any>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Any> for NullableText {
    fn decode(value: <Any as HasValueRef<'r>>::ValueRef) -> Result<Self, BoxDynError> {
        if is_null_type(&value.type_info()) {
            return Ok(Self(None));
        }
        <String as Decode<'r, Any>>::decode(value).map(|text| Self(Some(text)))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use mockall::mock;
    use northwind_utils::{Dialect, NorthwindResult};

    use crate::handle::{Database, Row};
    use crate::sql::Sql;

    mock! {
        pub Db {}

        #[async_trait]
        impl Database for Db {
            fn dialect(&self) -> Dialect;
            async fn get(&self, statement: &Sql) -> NorthwindResult<Option<Row>>;
            async fn all(&self, statement: &Sql) -> NorthwindResult<Vec<Row>>;
        }
    }
}
