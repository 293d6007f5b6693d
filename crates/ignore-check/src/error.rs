use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Any error the library can produce.
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum Error {
	/// Error received when the repository root does not exist, is not a directory, or is
	/// unreadable.
	///
	/// Fatal to [`IgnoreChecker`](crate::IgnoreChecker) construction.
	#[error("invalid repository root '{path}': {reason}")]
	#[diagnostic(code(ignore_check::repository))]
	InvalidRepository {
		/// The offending root path.
		path: PathBuf,

		/// Why the root was rejected.
		reason: String,
	},

	/// Error received when a queried path does not resolve to an existing entry in the
	/// repository.
	#[error("path '{path}' not found in repository")]
	#[diagnostic(code(ignore_check::path_not_found))]
	PathNotFound {
		/// The repository-relative path that was queried.
		path: String,
	},

	/// Error received when a raw path cannot be normalized into a repository-relative path.
	#[error("invalid repository-relative path '{path}': {reason}")]
	#[diagnostic(code(ignore_check::invalid_path))]
	InvalidPath {
		/// The raw path as given.
		path: String,

		/// Why the path was rejected.
		reason: String,
	},

	/// Error received when an ignore file exists but cannot be read.
	#[error("cannot read ignore '{file}': {err}")]
	#[diagnostic(code(ignore_check::read))]
	Read {
		/// The path to the erroring ignore file.
		file: PathBuf,

		/// The underlying error.
		#[source]
		err: std::io::Error,
	},

	/// Error received when compiling a rule from a blank line.
	///
	/// Recovered per line while parsing a whole file: the line is skipped.
	#[error("rule cannot be created from an empty line (line {line_index})")]
	#[diagnostic(code(ignore_check::empty_rule))]
	EmptyRule {
		/// 0-based line position within the ignore file.
		line_index: usize,
	},

	/// Error received when compiling a rule from a comment line.
	///
	/// Recovered per line while parsing a whole file: the line is skipped.
	#[error("rule cannot be created from a comment (line {line_index})")]
	#[diagnostic(code(ignore_check::comment_rule))]
	CommentRule {
		/// 0-based line position within the ignore file.
		line_index: usize,
	},

	/// Error received when a pattern line cannot be parsed as a glob.
	#[error("cannot parse ignore pattern '{line}': {reason}")]
	#[diagnostic(code(ignore_check::pattern))]
	Pattern {
		/// The offending line, trimmed.
		line: String,

		/// The parser's complaint.
		reason: String,
	},
}
