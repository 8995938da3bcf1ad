//! The JSON source document: `{ "mots": [string, ...] }`

use std::fs;
use std::path::Path;

use serde::{
	Deserialize,
	Serialize
};
use serde_json::error::Category;

use crate::error::LoadError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
	/// Words in source order; other keys of the document are ignored
	pub mots: Vec<String>
}

impl SourceDocument {
	pub fn new(mots: Vec<String>) -> Self {
		Self { mots }
	}

	/// Read and parse the whole document
	pub fn read(path: &Path) -> Result<Self, LoadError> {
		let bytes = fs::read(path).map_err(|source| LoadError::FileAccess {
			path: path.to_owned(),
			source
		})?;
		Self::from_slice(&bytes).map_err(|source| classify(path, source))
	}

	pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
		serde_json::from_slice(bytes)
	}

	/// One word per line; blank and whitespace-only lines are dropped
	pub fn from_lines(text: &str) -> Self {
		let mots = text.lines()
			.filter(|line| !line.trim().is_empty())
			.map(str::to_owned)
			.collect();
		Self { mots }
	}

	pub fn len(&self) -> usize {
		self.mots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mots.is_empty()
	}
}

/// Syntax errors are parse failures, well-formed JSON of the wrong shape is a schema failure
fn classify(path: &Path, source: serde_json::Error) -> LoadError {
	let path = path.to_owned();
	match source.classify() {
		Category::Syntax | Category::Eof => LoadError::Parse { path, source },
		Category::Data => LoadError::Schema { path, source },
		Category::Io => LoadError::FileAccess { path, source: source.into() },
	}
}
