//! An ordered collection of rules parsed from one ignore file.

use tracing::{trace, trace_span, warn};

use crate::{Error, RepoPath, Rule};

/// The parsed rules of one ignore file, located at one directory of the tree.
///
/// Rules keep file line order. The file is built per query and discarded; it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
	dir: RepoPath,
	rules: Vec<Rule>,
}

impl RuleFile {
	/// Parse an ignore file's text, rooted at the directory that contains it.
	///
	/// Blank and comment lines are skipped. Malformed patterns are also skipped, with a
	/// warning: one bad line never discards the rest of the file.
	#[must_use]
	pub fn from_content(dir: RepoPath, content: &str) -> Self {
		let _span = trace_span!("parse_rule_file", %dir).entered();

		let mut rules = Vec::new();
		for (line_index, line) in content.lines().enumerate() {
			match Rule::compile(line, line_index) {
				Ok(rule) => rules.push(rule),
				Err(Error::EmptyRule { .. } | Error::CommentRule { .. }) => continue,
				Err(err) => {
					warn!(%dir, line_index, %err, "skipping unparseable ignore line");
				}
			}
		}

		trace!(%dir, rules=%rules.len(), "parsed ignore file");
		Self { dir, rules }
	}

	/// The directory owning this file.
	#[must_use]
	pub const fn dir(&self) -> &RepoPath {
		&self.dir
	}

	/// The compiled rules, in file line order.
	#[must_use]
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// This file's verdict for a path given relative to [`dir`](RuleFile::dir).
	///
	/// The last rule in the file that matches the path decides, negation included. If no rule
	/// matches, the file expresses no opinion and the path is not ignored by it.
	#[must_use]
	pub fn is_ignored(&self, path: &RepoPath) -> bool {
		self.last_matching_rule(path).is_some_and(|rule| {
			trace!(%path, rule=%rule.pattern(), negated=%rule.negated(), "deciding rule");
			!rule.negated()
		})
	}

	fn last_matching_rule(&self, path: &RepoPath) -> Option<&Rule> {
		self.rules.iter().rev().find(|rule| rule.matches(path))
	}
}
