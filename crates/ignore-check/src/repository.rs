//! The filesystem collaborator: the only seam through which the engine learns anything
//! about a real tree.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::{Error, RepoPath};

/// What a repository path denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
	/// A regular file (or anything that is not a directory).
	File,

	/// A directory.
	Directory,
}

/// Access to a project tree, from the engine's point of view.
///
/// Two narrow contracts: report what a path denotes, and hand over the raw text of a
/// directory's ignore file. The engine itself never touches a filesystem.
pub trait Repository {
	/// Report what `path` denotes.
	///
	/// Fails with [`Error::PathNotFound`] when the path does not exist in the tree.
	fn stat(&self, path: &RepoPath) -> Result<FileKind, Error>;

	/// The raw text of the ignore file named `filename` in `dir`, or `None` when absent.
	fn ignore_file(&self, dir: &RepoPath, filename: &str) -> Result<Option<String>, Error>;
}

/// A [`Repository`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskRepository {
	root: PathBuf,
}

impl DiskRepository {
	/// Open a repository rooted at `root`.
	///
	/// Fails with [`Error::InvalidRepository`] when the root does not exist, is not a
	/// directory, or cannot be resolved.
	pub fn new(root: impl AsRef<Path>) -> Result<Self, Error> {
		let raw = root.as_ref();
		let root = dunce::canonicalize(raw).map_err(|err| Error::InvalidRepository {
			path: raw.to_owned(),
			reason: err.to_string(),
		})?;

		if !root.is_dir() {
			return Err(Error::InvalidRepository {
				path: root,
				reason: "not a directory".into(),
			});
		}

		trace!(root=?root, "opened repository");
		Ok(Self { root })
	}

	/// The canonicalized repository root.
	#[must_use]
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn resolve(&self, path: &RepoPath) -> PathBuf {
		let mut abs = self.root.clone();
		for segment in path.segments() {
			abs.push(segment);
		}
		abs
	}
}

impl Repository for DiskRepository {
	fn stat(&self, path: &RepoPath) -> Result<FileKind, Error> {
		match fs::metadata(self.resolve(path)) {
			Ok(meta) if meta.is_dir() => Ok(FileKind::Directory),
			Ok(_) => Ok(FileKind::File),
			Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::PathNotFound {
				path: path.to_string(),
			}),
			Err(err) => Err(Error::Read {
				file: self.resolve(path),
				err,
			}),
		}
	}

	fn ignore_file(&self, dir: &RepoPath, filename: &str) -> Result<Option<String>, Error> {
		let file = self.resolve(dir).join(filename);
		match fs::read_to_string(&file) {
			Ok(content) => Ok(Some(content)),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(err) => Err(Error::Read { file, err }),
		}
	}
}

/// A [`Repository`] held entirely in memory.
///
/// Useful in tests and for callers that already hold the ignore-file text. Registering an
/// entry implicitly registers its ancestor directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
	dirs: BTreeSet<String>,
	files: BTreeSet<String>,
	ignores: BTreeMap<(String, String), String>,
}

impl MemoryRepository {
	/// An empty tree: just the root.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a directory.
	#[must_use]
	pub fn with_dir(mut self, path: &str) -> Self {
		self.insert_dirs(&key(path));
		self
	}

	/// Register a regular file.
	#[must_use]
	pub fn with_file(mut self, path: &str) -> Self {
		let path = key(path);
		self.insert_parents(&path);
		self.files.insert(path);
		self
	}

	/// Register an ignore file with the given name and content in `dir`.
	#[must_use]
	pub fn with_ignore_file(mut self, dir: &str, filename: &str, content: &str) -> Self {
		let dir = key(dir);
		self.insert_dirs(&dir);
		self.files.insert(if dir == "/" {
			format!("/{filename}")
		} else {
			format!("{dir}/{filename}")
		});
		self.ignores.insert((dir, filename.to_owned()), content.to_owned());
		self
	}

	fn insert_dirs(&mut self, path: &str) {
		self.insert_parents(path);
		if path != "/" {
			self.dirs.insert(path.to_owned());
		}
	}

	fn insert_parents(&mut self, path: &str) {
		let mut at = String::new();
		let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
		while let Some(segment) = segments.next() {
			if segments.peek().is_none() {
				break;
			}
			at.push('/');
			at.push_str(segment);
			self.dirs.insert(at.clone());
		}
	}
}

impl Repository for MemoryRepository {
	fn stat(&self, path: &RepoPath) -> Result<FileKind, Error> {
		let key = path.to_string();
		if path.is_root() || self.dirs.contains(&key) {
			Ok(FileKind::Directory)
		} else if self.files.contains(&key) {
			Ok(FileKind::File)
		} else {
			Err(Error::PathNotFound { path: key })
		}
	}

	fn ignore_file(&self, dir: &RepoPath, filename: &str) -> Result<Option<String>, Error> {
		Ok(self
			.ignores
			.get(&(dir.to_string(), filename.to_owned()))
			.cloned())
	}
}

// normalize a caller-supplied fixture path into the "/a/b" key form
fn key(path: &str) -> String {
	let joined = path
		.split('/')
		.filter(|s| !s.is_empty())
		.collect::<Vec<_>>()
		.join("/");
	format!("/{joined}")
}
