//! Load a [`SourceDocument`] into the `words_ods6` table
//!
//! The pipeline is linear: read and parse the document, open the database, then drop, recreate and fill
//! the table inside a single transaction. Nothing touches the database before the document has parsed,
//! and any failure after that rolls the transaction back, leaving the previous table as it was.

use std::collections::HashSet;
use std::path::{
	Path,
	PathBuf
};

use log::{
	debug,
	info,
	warn
};
use rusqlite::{
	ffi,
	Error as SqlError
};
use serde::Serialize;

use crate::{
	Database,
	Session,
	Table
};
use crate::error::LoadError;
use crate::source::SourceDocument;
use crate::word::{
	Lexicon,
	Word
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
	/// Skip words already in the table instead of aborting the run
	pub skip_duplicates: bool
}

/// Summary of a successful run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoadReport {
	pub source: PathBuf,
	pub database: PathBuf,
	pub table: &'static str,
	pub words_read: usize,
	pub rows_inserted: usize,
	pub duplicates_skipped: usize
}

/// Replace the word table of `db_path` with the words of `source_path`, aborting on the first duplicate
pub fn load(source_path: &Path, db_path: &Path) -> Result<LoadReport, LoadError> {
	load_with(source_path, db_path, &LoadOptions::default())
}

pub fn load_with(source_path: &Path, db_path: &Path, options: &LoadOptions)
	-> Result<LoadReport, LoadError>
{
	let document = SourceDocument::read(source_path)?;
	info!("read {} words from {}", document.len(), source_path.display());

	let mut db = Database::<Lexicon>::open(db_path)?;
	let words_read = document.len();
	let (rows_inserted, duplicates_skipped) = fill(&mut db, document, options)?;
	db.close()?;

	info!(
		"committed {rows_inserted} rows to {} in {}",
		Word::NAME,
		db_path.display()
	);
	Ok(LoadReport {
		source: source_path.to_owned(),
		database: db_path.to_owned(),
		table: Word::NAME,
		words_read,
		rows_inserted,
		duplicates_skipped
	})
}

/// Replace the table and insert every word, committing only if all of it succeeded
///
/// Skipped repeats never reach SQLite, so ids stay consecutive in source order.
/// Returns the number of rows inserted and of duplicates skipped.
pub fn fill(
	db: &mut Database<Lexicon>,
	document: SourceDocument,
	options: &LoadOptions)
	-> Result<(usize, usize), LoadError>
{
	let session = db.transaction()?;
	session.replace::<Word>()?;
	debug!("replaced table {}", Word::NAME);

	let mut seen = HashSet::new();
	let mut inserted = 0;
	let mut skipped = 0;
	for (position, word) in document.mots.into_iter().enumerate() {
		if options.skip_duplicates && !seen.insert(word.clone()) {
			warn!("skipping duplicate word {word:?} at position {position}");
			skipped += 1;
			continue;
		}
		inserted += insert(&session, Word::new(word), position)?;
	}

	session.commit()?;
	Ok((inserted, skipped))
}

fn insert(session: &Session<'_, Lexicon>, entry: Word, position: usize)
	-> Result<usize, LoadError>
{
	session.insert(&entry).map_err(|source| match is_unique_violation(&source) {
		true => LoadError::ConstraintViolation {
			word: entry.word,
			position,
			source
		},
		false => LoadError::Storage(source),
	})
}

fn is_unique_violation(err: &SqlError) -> bool {
	matches!(
		err,
		SqlError::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
	)
}
