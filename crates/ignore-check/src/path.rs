use std::fmt;

use crate::Error;

/// A normalized repository-relative path.
///
/// Stored as plain segments, slash-free, with the repository root being zero segments. Whether
/// the path denotes a directory is recorded explicitly: callers routinely omit trailing slashes
/// when referring to directories, so the flag must come from whoever can actually tell (the
/// [`Repository`](crate::Repository) collaborator), never be guessed from the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoPath {
	segments: Vec<String>,
	is_dir: bool,
}

impl RepoPath {
	/// The repository root.
	#[must_use]
	pub const fn root() -> Self {
		Self {
			segments: Vec::new(),
			is_dir: true,
		}
	}

	/// Normalize a raw path into segments.
	///
	/// The input must be non-empty; `/` (or anything blank after trimming) denotes the root.
	/// Repeated slashes collapse. `.` and `..` components are rejected: they never address a
	/// location inside the repository.
	pub fn parse(raw: &str, is_dir: bool) -> Result<Self, Error> {
		if raw.is_empty() {
			return Err(Error::InvalidPath {
				path: raw.into(),
				reason: "path must be non-empty".into(),
			});
		}

		let mut segments = Vec::new();
		for segment in raw.trim().split('/') {
			match segment {
				"" => continue,
				"." | ".." => {
					return Err(Error::InvalidPath {
						path: raw.into(),
						reason: format!("'{segment}' segments are not allowed"),
					})
				}
				_ => segments.push(segment.to_owned()),
			}
		}

		let is_dir = is_dir || segments.is_empty();
		Ok(Self { segments, is_dir })
	}

	/// The path components, in order.
	#[must_use]
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Whether this path denotes a directory.
	#[must_use]
	pub const fn is_dir(&self) -> bool {
		self.is_dir
	}

	/// Whether this is the repository root.
	#[must_use]
	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	/// Number of segments.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.segments.len()
	}

	/// The ancestor directory made of the first `depth` segments.
	///
	/// Ancestors of an existing path are directories by construction.
	#[must_use]
	pub fn prefix(&self, depth: usize) -> Self {
		Self {
			segments: self.segments[..depth].to_vec(),
			is_dir: true,
		}
	}

	/// This path restated relative to the ancestor at `depth`, keeping the directory flag.
	#[must_use]
	pub fn relative_to(&self, depth: usize) -> Self {
		Self {
			segments: self.segments[depth..].to_vec(),
			is_dir: self.is_dir,
		}
	}

	/// A copy with the directory flag replaced.
	#[must_use]
	pub fn with_is_dir(mut self, is_dir: bool) -> Self {
		self.is_dir = is_dir || self.segments.is_empty();
		self
	}
}

impl fmt::Display for RepoPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.segments.is_empty() {
			return write!(f, "/");
		}

		for segment in &self.segments {
			write!(f, "/{segment}")?;
		}
		Ok(())
	}
}
