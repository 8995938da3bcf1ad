//! Compile-time checks tying [`Table`](crate::Table)s to the [`Schema`](crate::Schema) they belong to
//!
//! [`Database`](crate::Database) only reads and writes entries whose table is [`PartOf`] its schema.
//!```compile_fail
//! use motlite::{Database, Entry, Table};
//! use motlite::column::ColumnDef;
//! use motlite::schema::Schema;
//! use motlite::types::Binder;
//! use motlite::word::Lexicon;
//!
//! /// Not part of `Lexicon`
//! struct Stray;
//! impl Table for Stray {
//!     const NAME: &'static str = "stray";
//!     const COLUMNS: &'static [(&'static str, ColumnDef)] = &[];
//! }
//! impl Entry for Stray {
//!     const GET_ALL: &'static str = "SELECT 1";
//!     const INSERT: &'static str = "SELECT 1";
//!     fn bind_to(&self, _: &mut Binder<'_, '_>) -> rusqlite::Result<()> { Ok(()) }
//!     fn from_row(_: &rusqlite::Row<'_>) -> rusqlite::Result<Self> { Ok(Stray) }
//! }
//!
//! let db = Database::<Lexicon>::open_in_memory().unwrap();
//! db.get_all::<Stray>();    // ← `Stray` is not `PartOf<Lexicon>`
//! ```

pub mod validate;
pub use validate::PartOf;
