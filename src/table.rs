use log::debug;
use rusqlite::{
	Connection,
	Error,
	Result as SqlResult,
	Row,
};

use crate::column::ColumnDef;
use crate::types::{
	Bind,
	Binder
};
use crate::value::Id;

pub trait Table {
	const NAME: &'static str;
	const COLUMNS: &'static [(&'static str, ColumnDef)];

	/// `CREATE TABLE` statement for this table
	fn assemble_sql() -> String {
		let mut sql = String::from("CREATE TABLE ");
		sql += Self::NAME;
		sql += " (\n\t";
		let column_count = Self::COLUMNS.len();
		for (idx, (name, column)) in Self::COLUMNS.iter().enumerate() {
			column.write_sql_to(name, &mut sql);
			if idx + 1 < column_count {
				sql.push_str(",\n\t");
			}
		}
		sql += "\n);";
		sql
	}

	/// `DROP TABLE` statement for this table, a no-op if it doesn't exist
	fn drop_sql() -> String {
		format!("DROP TABLE IF EXISTS {};", Self::NAME)
	}

	fn count_sql() -> String {
		format!("SELECT COUNT(*) FROM {}", Self::NAME)
	}
}


pub trait Entry: Table + Sized {
	const GET_ALL: &'static str;
	const INSERT: &'static str;

	fn bind_to(&self, binder: &mut Binder<'_, '_>) -> SqlResult<()>;
	fn from_row(row: &Row<'_>) -> SqlResult<Self>;
}

pub trait HasKey {
	const GET_BY_KEY: &'static str;
	type Key: Bind;

	fn get_key(&self) -> &Self::Key;
	fn get_key_mut(&mut self) -> &mut Self::Key;
}

/*
 *	STATEMENTS
 *
 *	Shared by `Database` and `Session`, both of which deref to a `Connection`.
 */

pub(crate) fn replace<T: Table>(conn: &Connection) -> SqlResult<()> {
	let sql = format!("{}\n{}", T::drop_sql(), T::assemble_sql());
	debug!("replacing table {}:\n{sql}", T::NAME);
	conn.execute_batch(&sql)
}

pub(crate) fn insert<T: Entry>(conn: &Connection, entry: &T) -> SqlResult<usize> {
	let mut stmt = conn.prepare_cached(T::INSERT)?;
	let mut binder = Binder::make(&mut stmt);
	entry.bind_to(&mut binder)?;
	stmt.raw_execute()
}

/// Insert and set id to last_insert_rowid
pub(crate) fn create<T>(conn: &Connection, entry: &mut T) -> SqlResult<()>
	where T: Entry + HasKey<Key = Id>
{
	if !entry.get_key().is_null() {
		return Err(Error::ToSqlConversionFailure(format!(
			"tried to create entry that already had the ID {:?}",
			entry.get_key()
		).into()));
	}
	let changes = insert(conn, entry)?;
	if changes != 1 {
		return Err(Error::StatementChangedRows(changes));
	}
	*entry.get_key_mut() = Id::from_i64(conn.last_insert_rowid());
	Ok(())
}

pub(crate) fn get_all<T: Entry>(conn: &Connection) -> SqlResult<Vec<T>> {
	let mut stmt = conn.prepare(T::GET_ALL)?;
	let mut rows = stmt.query([])?;
	let mut entries = Vec::new();
	while let Some(row) = rows.next()? {
		entries.push(T::from_row(row)?);
	}
	Ok(entries)
}

pub(crate) fn get<T>(conn: &Connection, key: &T::Key) -> SqlResult<Option<T>>
	where T: Entry + HasKey
{
	let mut stmt = conn.prepare(T::GET_BY_KEY)?;
	let mut binder = Binder::make(&mut stmt);
	binder.bind(key)?;
	let mut rows = stmt.raw_query();
	rows.next()?
		.map(T::from_row)
		.transpose()
}

pub(crate) fn count<T: Table>(conn: &Connection) -> SqlResult<u64> {
	conn.query_row(&T::count_sql(), [], |row| row.get(0))
}
