//! The cross-directory resolver: combine the ignore files along a path's ancestor chain
//! into one verdict.

use std::path::Path;

use tracing::{trace, trace_span};

use crate::{DiskRepository, Error, FileKind, RepoPath, Repository, RuleFile};

/// The default ignore filename.
pub const DEFAULT_IGNORE_FILENAME: &str = ".gitignore";

/// Decides whether paths inside a repository are ignored.
///
/// Stateless aside from its configuration: each query builds the rule files it needs and
/// discards them, so a checker can serve queries from multiple threads as long as the
/// repository is safe for concurrent reads.
#[derive(Debug, Clone)]
pub struct IgnoreChecker<R = DiskRepository> {
	repository: R,
	filename: String,
}

impl IgnoreChecker<DiskRepository> {
	/// Open a checker over an on-disk repository, consulting `.gitignore` files.
	///
	/// Fails with [`Error::InvalidRepository`] when the root is not a readable directory.
	pub fn new(root: impl AsRef<Path>) -> Result<Self, Error> {
		Self::with_filename(root, DEFAULT_IGNORE_FILENAME)
	}

	/// Open a checker over an on-disk repository, consulting ignore files by another name.
	///
	/// The `.gitignore` syntax is used by other tools under other filenames (`.distignore`
	/// and friends); the rule semantics are identical.
	pub fn with_filename(root: impl AsRef<Path>, filename: impl Into<String>) -> Result<Self, Error> {
		Ok(Self::with_repository(DiskRepository::new(root)?, filename))
	}
}

impl<R: Repository> IgnoreChecker<R> {
	/// Build a checker over any [`Repository`] implementation.
	pub fn with_repository(repository: R, filename: impl Into<String>) -> Self {
		Self {
			repository,
			filename: filename.into(),
		}
	}

	/// The repository collaborator.
	#[must_use]
	pub const fn repository(&self) -> &R {
		&self.repository
	}

	/// The ignore filename being consulted.
	#[must_use]
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Whether `path` (repository-relative, e.g. `/foo/bar`) is ignored.
	///
	/// Fails with [`Error::InvalidPath`] when the raw path cannot be normalized and
	/// [`Error::PathNotFound`] when it does not exist in the repository.
	///
	/// Every ancestor directory between the root and the path's parent is consulted,
	/// root first; the first ignore file that reports the path ignored settles it. Each
	/// file sees the path restated relative to its own directory. An ignore file inside
	/// the target itself never governs the target.
	pub fn is_path_ignored(&self, path: &str) -> Result<bool, Error> {
		let _span = trace_span!("is_path_ignored", %path).entered();

		let path = RepoPath::parse(path, false)?;
		let kind = self.repository.stat(&path)?;
		let path = path.with_is_dir(kind == FileKind::Directory);
		trace!(%path, ?kind, "normalized query path");

		for depth in 0..path.depth() {
			let dir = path.prefix(depth);
			let Some(content) = self.repository.ignore_file(&dir, &self.filename)? else {
				continue;
			};

			let file = RuleFile::from_content(dir, &content);
			let scoped = path.relative_to(depth);
			if file.is_ignored(&scoped) {
				trace!(dir=%file.dir(), %scoped, "ignored by ancestor ignore file");
				return Ok(true);
			}
		}

		Ok(false)
	}
}
