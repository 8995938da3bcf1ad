//! Data primitives -- a [`Column`] defined by its [`Affinity`] & constraints

use rusqlite::types::{
	FromSql,
	ToSql
};

use crate::types::{
	FromSql2,
	ToSql2
};

pub trait Column: FromSql + ToSql + FromSql2 + ToSql2 {
	const AFFINITY: Affinity;
	const NULLABLE: bool = false;

	const DEFINITION: ColumnDef = ColumnDef {
		affinity: Self::AFFINITY,
		nullable: Self::NULLABLE,
		unique: false,
		autoincrement: false
	};
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
	pub affinity: Affinity,
	pub nullable: bool,
	pub unique: bool,
	/// `PRIMARY KEY AUTOINCREMENT`: ids are never reused, backed by `sqlite_sequence`
	pub autoincrement: bool
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affinity {
	Integer,
	Text,
}

impl Affinity {
	pub const fn as_str(self) -> &'static str {
		match self {
			Affinity::Integer => "INTEGER",
			Affinity::Text => "TEXT",
		}
	}
}

impl ColumnDef {
	/// Override the `nullable` field as `true`
	pub const fn nullable(self) -> Self {
		Self {nullable: true, ..self}
	}
	/// Override the `unique` field as `true`
	pub const fn unique(self) -> Self {
		Self {unique: true, ..self}
	}
	/// Mark as the `INTEGER PRIMARY KEY AUTOINCREMENT` of its table
	///
	/// The rowid alias must be allowed to be `NULL` on insert so that SQLite can assign it.
	pub const fn autoincrement(self) -> Self {
		Self {
			nullable: true,
			autoincrement: true,
			..self
		}
	}

	/// Write out the [`Column`] SQL defintion
	///
	/// ```sql
	/// column_name INTEGER NOT NULL
	/// ```
	pub(crate) fn write_sql_to(&self, name: &str, sql: &mut String) {
		sql.push_str(name);
		sql.push(' ');
		sql.push_str(self.affinity.as_str());
		if !self.nullable {
			sql.push_str(" NOT NULL");
		}
		if self.autoincrement {
			sql.push_str(" PRIMARY KEY AUTOINCREMENT");
		}
		if self.unique {
			sql.push_str(" UNIQUE");
		}
	}
}

/*
 *	COLUMNS
 */

macro_rules! column {
	($t:ty, $col:expr) => {
		impl Column for $t {
			const AFFINITY: Affinity = $col;
		}
	};
}

/* TEXT */
column!(String, Affinity::Text);

/* INTEGER */
column!(i64, Affinity::Integer);

/* NULLABLE */
impl<T: Column> Column for Option<T> {
	const AFFINITY: Affinity = T::AFFINITY;
	const NULLABLE: bool = true;
}
