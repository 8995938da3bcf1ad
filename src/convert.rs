//! Turn a plain-text word list (one word per line) into a source document

use std::fs;
use std::io::{
	BufWriter,
	Write
};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::ConvertError;
use crate::source::SourceDocument;

/// Convert `txt_path` into a `{"mots": [...]}` document at `json_path`, returning the number of words
///
/// The output is written to a temporary file next to `json_path` and then moved over it.
pub fn convert(txt_path: &Path, json_path: &Path) -> Result<usize, ConvertError> {
	let text = fs::read_to_string(txt_path).map_err(|source| ConvertError::Read {
		path: txt_path.to_owned(),
		source
	})?;
	let document = SourceDocument::from_lines(&text);
	write_document(&document, json_path)?;
	info!(
		"wrote {} words from {} to {}",
		document.len(),
		txt_path.display(),
		json_path.display()
	);
	Ok(document.len())
}

pub fn write_document(document: &SourceDocument, path: &Path) -> Result<(), ConvertError> {
	let write_err = |source: std::io::Error| ConvertError::Write { path: path.to_owned(), source };

	let parent_dir = match path.parent() {
		Some(dir) if !dir.as_os_str().is_empty() => dir,
		_ => Path::new("."),
	};
	let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
	{
		let mut writer = BufWriter::new(&temp_file);
		serde_json::to_writer_pretty(&mut writer, document)?;
		writer.write_all(b"\n").map_err(write_err)?;
		writer.flush().map_err(write_err)?;
	}
	temp_file.persist(path).map_err(|err| write_err(err.error))?;
	Ok(())
}
