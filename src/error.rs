//! Errors of the load and convert pipelines

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of [`load`](crate::load::load), tagged by the [`Stage`] it happened in
#[derive(Debug, Error)]
pub enum LoadError {
	/// The source document could not be read
	#[error("cannot read {}: {source}", .path.display())]
	FileAccess {
		path: PathBuf,
		source: io::Error
	},

	/// The source document is not valid JSON
	#[error("malformed JSON in {}: {source}", .path.display())]
	Parse {
		path: PathBuf,
		source: serde_json::Error
	},

	/// The JSON is well-formed but lacks a `mots` array of strings
	#[error("unexpected document shape in {}: {source}", .path.display())]
	Schema {
		path: PathBuf,
		source: serde_json::Error
	},

	#[error("database error: {0}")]
	Storage(#[from] rusqlite::Error),

	/// A word was already present in the table
	#[error("duplicate word {word:?} at position {position}")]
	ConstraintViolation {
		word: String,
		position: usize,
		source: rusqlite::Error
	},
}

impl LoadError {
	pub fn stage(&self) -> Stage {
		match self {
			LoadError::FileAccess { .. } => Stage::Read,
			LoadError::Parse { .. } => Stage::Parse,
			LoadError::Schema { .. } => Stage::Schema,
			LoadError::Storage(_)
			| LoadError::ConstraintViolation { .. } => Stage::Store,
		}
	}

	/// Whether the error is a `UNIQUE` violation
	pub fn is_duplicate(&self) -> bool {
		matches!(self, LoadError::ConstraintViolation { .. })
	}
}

/// Pipeline step an error belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	Read,
	Parse,
	Schema,
	Store,
}

impl Stage {
	pub fn as_str(self) -> &'static str {
		match self {
			Stage::Read => "read",
			Stage::Parse => "parse",
			Stage::Schema => "schema",
			Stage::Store => "store",
		}
	}

	/// Process exit status reported by the command line tool, clear of clap's usage error (2)
	pub fn exit_code(self) -> u8 {
		match self {
			Stage::Read => 3,
			Stage::Parse => 4,
			Stage::Schema => 5,
			Stage::Store => 6,
		}
	}
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Failure of [`convert`](crate::convert::convert)
#[derive(Debug, Error)]
pub enum ConvertError {
	#[error("cannot read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		source: io::Error
	},

	#[error("cannot write {}: {source}", .path.display())]
	Write {
		path: PathBuf,
		source: io::Error
	},

	#[error("cannot serialize word list: {0}")]
	Serialize(#[from] serde_json::Error),
}

impl ConvertError {
	pub fn stage(&self) -> Stage {
		match self {
			ConvertError::Read { .. } => Stage::Read,
			ConvertError::Write { .. } | ConvertError::Serialize(_) => Stage::Store,
		}
	}
}
