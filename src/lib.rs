pub mod column;
pub mod convert;
pub mod error;
pub use error::{
	ConvertError,
	LoadError,
	Stage
};
pub mod load;
pub use load::{
	load,
	load_with,
	LoadOptions,
	LoadReport
};
pub mod meta;
pub mod schema;
pub use schema::Schema;
pub mod source;
pub use source::SourceDocument;
pub mod table;
pub use table::{
	Entry,
	HasKey,
	Table
};
pub mod types;
pub use types::{
	Bind,
	Binder,
	Fetch
};
pub mod value;
pub use value::Id;
pub mod word;
pub use word::{
	Lexicon,
	Word
};

use std::marker::PhantomData;
use std::ops::Deref;
use std::path::Path;

use log::debug;
use rusqlite::{
	Connection,
	Transaction,
	Result as SqlResult,
};

use meta::PartOf;

pub struct Database<S: Schema> {
	connection: Connection,
	schema: PhantomData<S>
}

impl<S: Schema> Database<S> {
	fn from_connection(connection: Connection) -> Self {
		Self { connection, schema: PhantomData }
	}
	/// Open the database file, creating it if absent
	pub fn open(path: &Path) -> SqlResult<Self> {
		debug!("opening database {}", path.display());
		Connection::open(path).map(Self::from_connection)
	}
	pub fn open_in_memory() -> SqlResult<Self> {
		Connection::open_in_memory().map(Self::from_connection)
	}

	pub fn create_in_memory() -> SqlResult<Self> {
		let mut new = Self::open_in_memory()?;
		new.define()?;
		Ok(new)
	}

	/// Create every table of the schema in one transaction
	pub fn define(&mut self) -> SqlResult<()> {
		let tx = self.connection.transaction()?;
		tx.execute_batch(&S::define())?;
		tx.commit()
	}

	/// Drop and recreate every table of the schema in one transaction
	pub fn replace_tables(&mut self) -> SqlResult<()> {
		let tx = self.connection.transaction()?;
		tx.execute_batch(&S::replace())?;
		tx.commit()
	}

	/// Start a transaction, rolled back unless [`Session::commit`] is called
	pub fn transaction(&mut self) -> SqlResult<Session<'_, S>> {
		self.connection.transaction().map(Session::from_transaction)
	}

	/// Log every table and its SQL definition
	pub fn debug_show(&self) -> SqlResult<()> {
		let mut q = self.connection.prepare(
			"SELECT type, name, tbl_name, sql FROM sqlite_schema"
		)?;
		let mut rows = q.query([])?;
		debug!("Schema:");
		while let Some(row) = rows.next()? {
			let (ty, name, tbl_name, sql): (String, String, String, Option<String>) =
				Fetch::from_row(row)?;
			match name == tbl_name {
				true => debug!("{ty} {name}"),
				false => debug!("{ty} {name}: (→ {tbl_name})"),
			}
			match sql {
				Some(sql) => debug!("{sql}"),
				None => debug!("\t<no SQL>")
			}
		}
		Ok(())
	}

	pub fn get_all<T>(&self) -> SqlResult<Vec<T>>
		where T: Entry + PartOf<S>
	{
		table::get_all(&self.connection)
	}

	pub fn get<T>(&self, key: &<T as HasKey>::Key) -> SqlResult<Option<T>>
		where T: Entry + HasKey + PartOf<S>
	{
		table::get(&self.connection, key)
	}

	pub fn count<T>(&self) -> SqlResult<u64>
		where T: Table + PartOf<S>
	{
		table::count::<T>(&self.connection)
	}

	/// Insert and set the entry's id to the one SQLite assigned
	pub fn create<T>(&self, entry: &mut T) -> SqlResult<()>
		where T: Entry + HasKey<Key = Id> + PartOf<S>
	{
		table::create(&self.connection, entry)
	}

	pub fn insert<T>(&self, entry: &T) -> SqlResult<usize>
		where T: Entry + PartOf<S>
	{
		table::insert(&self.connection, entry)
	}

	/// Close the connection, reporting any failure to do so
	///
	/// Dropping a [`Database`] closes it as well, but ignores errors.
	pub fn close(self) -> SqlResult<()> {
		self.connection.close().map_err(|(_, err)| err)
	}
}

impl<S: Schema> Deref for Database<S> {
	type Target = Connection;
	fn deref(&self) -> &Connection {
		&self.connection
	}
}

/// Writes scoped to one transaction of a [`Database`]
///
/// Dropping a session without committing rolls every change back.
pub struct Session<'conn, S: Schema> {
	transaction: Transaction<'conn>,
	schema: PhantomData<S>
}

impl<'conn, S: Schema> Session<'conn, S> {
	fn from_transaction(transaction: Transaction<'conn>) -> Self {
		Self { transaction, schema: PhantomData }
	}

	/// Drop the table if it exists and create it empty
	pub fn replace<T>(&self) -> SqlResult<()>
		where T: Table + PartOf<S>
	{
		table::replace::<T>(&self.transaction)
	}

	pub fn insert<T>(&self, entry: &T) -> SqlResult<usize>
		where T: Entry + PartOf<S>
	{
		table::insert(&self.transaction, entry)
	}

	pub fn create<T>(&self, entry: &mut T) -> SqlResult<()>
		where T: Entry + HasKey<Key = Id> + PartOf<S>
	{
		table::create(&self.transaction, entry)
	}

	pub fn count<T>(&self) -> SqlResult<u64>
		where T: Table + PartOf<S>
	{
		table::count::<T>(&self.transaction)
	}

	pub fn commit(self) -> SqlResult<()> {
		self.transaction.commit()
	}
}
