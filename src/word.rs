//! The `words_ods6` table and the [`Lexicon`] schema that holds it

use rusqlite::{
	Result as SqlResult,
	Row,
};

use crate::column::{
	Column,
	ColumnDef
};
use crate::meta::PartOf;
use crate::schema::Schema;
use crate::table::{
	Entry,
	HasKey,
	Table
};
use crate::types::{
	Binder,
	Fetch
};
use crate::value::Id;

/// One dictionary entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
	pub id: Id,
	pub word: String
}

impl Word {
	/// A word that has not been stored yet
	pub fn new(word: impl Into<String>) -> Self {
		Self { id: Id::NULL, word: word.into() }
	}
}

impl Table for Word {
	const NAME: &'static str = "words_ods6";
	const COLUMNS: &'static [(&'static str, ColumnDef)] = &[
		("id", Id::DEFINITION.autoincrement()),
		("word", String::DEFINITION.nullable().unique()),
	];
}

impl Entry for Word {
	const GET_ALL: &'static str = "SELECT id, word FROM words_ods6 ORDER BY id";
	const INSERT: &'static str = "INSERT INTO words_ods6 (id, word) VALUES (?1, ?2)";

	fn bind_to(&self, binder: &mut Binder<'_, '_>) -> SqlResult<()> {
		binder.bind(&(&self.id, &self.word))
	}
	fn from_row(row: &Row<'_>) -> SqlResult<Self> {
		let (id, word): (Id, String) = Fetch::from_row(row)?;
		Ok(Self { id, word })
	}
}

impl HasKey for Word {
	const GET_BY_KEY: &'static str = "SELECT id, word FROM words_ods6 WHERE id = ?1";
	type Key = Id;

	fn get_key(&self) -> &Id {
		&self.id
	}
	fn get_key_mut(&mut self) -> &mut Id {
		&mut self.id
	}
}

/// Database of dictionary words
pub struct Lexicon;

impl Schema for Lexicon {
	type Tables = (Word, );
}

impl PartOf<Lexicon> for Word {}
