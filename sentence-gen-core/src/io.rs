use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a text file into one string.
///
/// The whole file is returned unsplit, so sentences may span lines.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted for a stable order.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_file_returns_the_whole_text() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corpus.txt");
		let mut file = File::create(&path).unwrap();
		write!(file, "One line.\nAnother\nline.").unwrap();

		let text = read_file(&path).unwrap();
		assert_eq!(text, "One line.\nAnother\nline.");
	}

	#[test]
	fn list_files_filters_and_sorts() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["b.txt", "a.txt", "notes.md"] {
			File::create(dir.path().join(name)).unwrap();
		}

		let files = list_files(dir.path(), "txt").unwrap();
		assert_eq!(files, vec!["a.txt".to_owned(), "b.txt".to_owned()]);
	}

	#[test]
	fn normalize_folder_resolves_dot() {
		assert_eq!(normalize_folder("."), env::current_dir().unwrap());
		assert_eq!(normalize_folder("./data"), PathBuf::from("./data"));
	}
}
