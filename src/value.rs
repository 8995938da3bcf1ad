//! Key types stored in [`Column`](crate::column::Column)s

use rusqlite::types::{
	FromSql,
	FromSqlResult,
	ToSql,
	ToSqlOutput,
	Value as SqlValue,
	ValueRef
};
use rusqlite::Result as SqlResult;

use crate::column::{
	Affinity,
	Column
};

/// Surrogate `INTEGER PRIMARY KEY` of a row
///
/// [`Id::NULL`] binds as SQL `NULL`, which makes SQLite assign the next id on insert.
/// [`Database::create`](crate::Database::create) writes the assigned id back into the entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Option<i64>);

impl Id {
	pub const NULL: Self = Self(None);

	pub const fn from_i64(id: i64) -> Self {
		Self(Some(id))
	}
	pub const fn get(&self) -> Option<i64> {
		self.0
	}
	pub const fn is_null(&self) -> bool {
		self.0.is_none()
	}
}

impl ToSql for Id {
	fn to_sql(&self) -> SqlResult<ToSqlOutput<'_>> {
		Ok(match self.0 {
			Some(id) => ToSqlOutput::from(id),
			None => ToSqlOutput::Owned(SqlValue::Null)
		})
	}
}

impl FromSql for Id {
	fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
		Option::<i64>::column_result(value).map(Self)
	}
}

crate::impl_from_to_sql_2!(Id);

impl Column for Id {
	const AFFINITY: Affinity = Affinity::Integer;
	const NULLABLE: bool = true;
}
