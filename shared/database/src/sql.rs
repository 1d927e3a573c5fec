//! Parameterized SQL composition.
//!
//! A [`Sql`] statement is an ordered list of fragments. Literal fragments are
//! trusted SQL text and only accept `'static` strings, so a runtime value can
//! never end up in the statement text. Everything that comes from a variable
//! goes through [`Sql::bind`] and reaches the driver as a bound parameter.
//!
//! Placeholders (`$1`, `$2`, ...) are numbered when the text is rendered, so
//! fragments built independently can be composed without renumbering.

use std::borrow::Cow;

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Integer(value.into())
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Fragment {
    Literal(Cow<'static, str>),
    Param(SqlValue),
}

/// A SQL statement under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sql {
    fragments: Vec<Fragment>,
}

impl Sql {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a statement with trusted SQL text.
    pub fn literal(text: &'static str) -> Self {
        Self::new().push(text)
    }

    /// Appends trusted SQL text.
    pub fn push(mut self, text: &'static str) -> Self {
        if !text.is_empty() {
            self.fragments.push(Fragment::Literal(Cow::Borrowed(text)));
        }
        self
    }

    /// Appends a comma separated column list, each column prefixed with
    /// `qualifier.` when a qualifier is given.
    pub fn push_columns(mut self, qualifier: &'static str, columns: &[&'static str]) -> Self {
        let mut list = String::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                list.push_str(", ");
            }
            if !qualifier.is_empty() {
                list.push_str(qualifier);
                list.push('.');
            }
            list.push_str(column);
        }
        self.fragments.push(Fragment::Literal(Cow::Owned(list)));
        self
    }

    /// Appends a bound parameter placeholder carrying `value`.
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.fragments.push(Fragment::Param(value.into()));
        self
    }

    /// Appends another statement fragment, parameters included.
    pub fn push_sql(mut self, other: Sql) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    /// Renders the statement text with `$n` placeholders.
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut index = 0;
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(literal) => text.push_str(literal),
                Fragment::Param(_) => {
                    index += 1;
                    text.push('$');
                    text.push_str(&index.to_string());
                }
            }
        }
        text
    }

    /// Bound values in placeholder order.
    pub fn params(&self) -> Vec<&SqlValue> {
        self.fragments
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Param(value) => Some(value),
                Fragment::Literal(_) => None,
            })
            .collect()
    }

    pub fn param_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|fragment| matches!(fragment, Fragment::Param(_)))
            .count()
    }
}
