use motlite::{
	Database,
	Entry,
	Id,
	Lexicon,
	Schema,
	Table,
	Word,
};
use rusqlite::Result as SqlResult;

macro_rules! contains {
	($t:ty, $( $c:literal ),*) => {
		$(
			assert!(<$t>::assemble_sql().contains($c), "{}", <$t>::assemble_sql());
		)*
	};
}

#[test]
fn word_table_definition() {
	contains!(Word,
		"CREATE TABLE words_ods6",
		"id INTEGER PRIMARY KEY AUTOINCREMENT",
		"word TEXT UNIQUE"
	);
	assert!(
		!Word::assemble_sql().contains("NOT NULL"),
		"neither column is declared NOT NULL"
	);
	assert_eq!(Lexicon::define(), Word::assemble_sql());
}

#[test]
fn create_assigns_increasing_ids() -> SqlResult<()> {
	let db = Database::<Lexicon>::create_in_memory()?;
	assert!(db.get_all::<Word>()?.is_empty());

	let mut first = Word::new("chat");
	db.create(&mut first)?;
	assert_eq!(first.id, Id::from_i64(1), "inserting must set the id");

	let mut second = Word::new("chien");
	db.create(&mut second)?;
	assert_eq!(second.id, Id::from_i64(2));

	let fetched: Word = db.get(&second.id)?.unwrap();
	assert_eq!(fetched, second);
	assert!(db.get::<Word>(&Id::from_i64(99))?.is_none());

	db.create(&mut second).expect_err(
		"creating an entry that already has an id must fail"
	);
	Ok(())
}

#[test]
fn unique_word_constraint() -> SqlResult<()> {
	let db = Database::<Lexicon>::create_in_memory()?;
	assert_eq!(db.insert(&Word::new("chat"))?, 1);
	db.insert(&Word::new("chat")).expect_err(
		"inserting the same word twice should violate the unique constraint"
	);
	assert_eq!(db.count::<Word>()?, 1);
	Ok(())
}

#[test]
fn autoincrement_never_reuses_ids() -> SqlResult<()> {
	let db = Database::<Lexicon>::create_in_memory()?;
	let mut word = Word::new("chat");
	db.create(&mut word)?;
	db.execute("DELETE FROM words_ods6", [])?;

	let mut next = Word::new("chien");
	db.create(&mut next)?;
	assert_eq!(next.id, Id::from_i64(2));
	Ok(())
}

#[test]
fn replace_tables_empties_and_restarts_ids() -> SqlResult<()> {
	let mut db = Database::<Lexicon>::create_in_memory()?;
	db.insert(&Word::new("chat"))?;
	db.insert(&Word::new("chien"))?;

	db.replace_tables()?;
	assert_eq!(db.count::<Word>()?, 0);

	let mut word = Word::new("souris");
	db.create(&mut word)?;
	assert_eq!(word.id, Id::from_i64(1));
	Ok(())
}

#[test]
fn uncommitted_session_rolls_back() -> SqlResult<()> {
	let mut db = Database::<Lexicon>::create_in_memory()?;
	db.insert(&Word::new("chat"))?;

	{
		let session = db.transaction()?;
		session.replace::<Word>()?;
		session.insert(&Word::new("chien"))?;
		assert_eq!(session.count::<Word>()?, 1);
		// dropped without commit
	}

	let words = db.get_all::<Word>()?;
	assert_eq!(words.len(), 1);
	assert_eq!(words[0].word, "chat");
	Ok(())
}

#[test]
fn session_survives_rejected_insert() -> SqlResult<()> {
	let mut db = Database::<Lexicon>::create_in_memory()?;
	let session = db.transaction()?;
	session.insert(&Word::new("chat"))?;
	session.insert(&Word::new("chat")).expect_err(
		"a repeated word must be rejected inside a session too"
	);
	let mut word = Word::new("chien");
	session.create(&mut word)?;
	assert!(!word.id.is_null());
	session.commit()?;

	let words: Vec<String> = db.get_all::<Word>()?
		.into_iter()
		.map(|w| w.word)
		.collect();
	assert_eq!(words, ["chat", "chien"]);
	Ok(())
}

#[test]
fn get_all_is_ordered_by_id() -> SqlResult<()> {
	let db = Database::<Lexicon>::create_in_memory()?;
	for w in ["zèbre", "abeille", "mouche"] {
		db.insert(&Word::new(w))?;
	}
	let words: Vec<String> = db.get_all::<Word>()?
		.into_iter()
		.map(|w| w.word)
		.collect();
	assert_eq!(words, ["zèbre", "abeille", "mouche"]);

	let stmt = db.prepare(Word::GET_ALL)?;
	assert_eq!(stmt.column_count(), 2);
	Ok(())
}

#[test]
fn close_and_reopen_file() -> SqlResult<()> {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("words.sqlite");

	let mut db = Database::<Lexicon>::open(&path)?;
	db.define()?;
	db.insert(&Word::new("chat"))?;
	db.debug_show()?;
	db.close()?;

	let db = Database::<Lexicon>::open(&path)?;
	assert_eq!(db.count::<Word>()?, 1);
	Ok(())
}
