//! One compiled line of an ignore file, and its match predicate.

use tracing::trace;

use crate::parse::{Line, Pattern, Segment, WildcardToken};
use crate::{Error, RepoPath};

/// A single ignore rule, compiled from one non-empty, non-comment line.
///
/// Immutable once compiled, owned by its [`RuleFile`](crate::RuleFile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
	pattern: String,
	negated: bool,
	anchored: bool,
	directory_only: bool,
	line_index: usize,
	segments: Vec<Segment>,
}

impl Rule {
	/// Compile one raw line into a rule.
	///
	/// Leading whitespace and unescaped trailing spaces are stripped first. Fails with
	/// [`Error::EmptyRule`] on a blank line and [`Error::CommentRule`] on a comment; callers
	/// parsing a whole file catch and skip those per line. A leading `\#` or `\!` is a literal
	/// character, not a marker.
	pub fn compile(raw_line: &str, line_index: usize) -> Result<Self, Error> {
		let trimmed = trim_line(raw_line);
		if trimmed.is_empty() {
			return Err(Error::EmptyRule { line_index });
		}

		let parsed: Line = trimmed.parse().map_err(|reason| Error::Pattern {
			line: trimmed.to_owned(),
			reason,
		})?;

		match parsed {
			Line::Empty => Err(Error::EmptyRule { line_index }),
			Line::Comment(_) => Err(Error::CommentRule { line_index }),
			Line::Pattern(pattern) => {
				trace!(line=%trimmed, ?pattern, "compiled rule");
				Ok(Self::from_pattern(trimmed, pattern, line_index))
			}
		}
	}

	fn from_pattern(raw: &str, pattern: Pattern, line_index: usize) -> Self {
		let Pattern {
			negated,
			mut segments,
		} = pattern;

		let anchored = matches!(segments.first(), Some(Segment::Terminal));
		if anchored {
			segments.remove(0);
		}

		let directory_only = matches!(segments.last(), Some(Segment::Terminal));
		if directory_only {
			segments.pop();
		}

		Self {
			pattern: raw.to_owned(),
			negated,
			anchored,
			directory_only,
			line_index,
			segments,
		}
	}

	/// The original line, trimmed.
	#[must_use]
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Whether the line began with an unescaped `!`.
	#[must_use]
	pub const fn negated(&self) -> bool {
		self.negated
	}

	/// Whether the pattern is pinned to the directory containing its file.
	#[must_use]
	pub const fn anchored(&self) -> bool {
		self.anchored
	}

	/// Whether the pattern only matches directories.
	#[must_use]
	pub const fn directory_only(&self) -> bool {
		self.directory_only
	}

	/// 0-based line position within the owning file.
	#[must_use]
	pub const fn line_index(&self) -> usize {
		self.line_index
	}

	/// Whether the rule matches a path, given relative to the directory containing the
	/// rule's file.
	///
	/// A rule matches the path itself or any ancestor of it: a rule that matches a directory
	/// applies recursively below it. The directory-only restriction can only affect a match of
	/// the full path, since every proper ancestor is a directory.
	#[must_use]
	pub fn matches(&self, path: &RepoPath) -> bool {
		let names = path.segments();
		for end in 1..=names.len() {
			let is_full = end == names.len();
			if self.directory_only && is_full && !path.is_dir() {
				continue;
			}
			if self.matches_whole(&names[..end]) {
				trace!(rule=%self.pattern, %path, depth=%end, "rule matched");
				return true;
			}
		}
		false
	}

	/// Whether the pattern matches exactly this segment sequence.
	fn matches_whole(&self, names: &[String]) -> bool {
		if self.anchored {
			return match_segments(&self.segments, names);
		}

		if let [single] = self.segments.as_slice() {
			// un-anchored and slash-free: this name, anywhere in the tree
			return names.last().is_some_and(|name| match_segment(single, name));
		}

		(0..names.len()).any(|start| match_segments(&self.segments, &names[start..]))
	}
}

fn match_segments(pattern: &[Segment], names: &[String]) -> bool {
	let Some((first, rest)) = pattern.split_first() else {
		return names.is_empty();
	};

	if matches!(first, Segment::All) {
		return (0..=names.len()).any(|skip| match_segments(rest, &names[skip..]));
	}

	let Some((name, remaining)) = names.split_first() else {
		return false;
	};

	match_segment(first, name) && match_segments(rest, remaining)
}

fn match_segment(segment: &Segment, name: &str) -> bool {
	match segment {
		// terminals are folded into rule flags at compile time
		Segment::Terminal => false,
		Segment::All => true,
		Segment::Fixed(text) => text == name,
		Segment::Wildcard(tokens) => match_wildcard(tokens, name),
	}
}

fn match_wildcard(tokens: &[WildcardToken], name: &str) -> bool {
	// a leading dot must be covered explicitly, never by a bare wildcard
	if name.starts_with('.') && !covers_leading_dot(tokens.first()) {
		return false;
	}

	let chars: Vec<char> = name.chars().collect();
	match_tokens(tokens, &chars)
}

fn covers_leading_dot(token: Option<&WildcardToken>) -> bool {
	match token {
		Some(WildcardToken::Literal(text)) => text.starts_with('.'),
		Some(WildcardToken::Class(class)) => class.matches('.'),
		_ => false,
	}
}

fn match_tokens(tokens: &[WildcardToken], chars: &[char]) -> bool {
	let Some((first, rest)) = tokens.split_first() else {
		return chars.is_empty();
	};

	match first {
		WildcardToken::Literal(text) => {
			let lit: Vec<char> = text.chars().collect();
			chars.starts_with(&lit) && match_tokens(rest, &chars[lit.len()..])
		}
		WildcardToken::One => !chars.is_empty() && match_tokens(rest, &chars[1..]),
		WildcardToken::Any => (0..=chars.len()).any(|skip| match_tokens(rest, &chars[skip..])),
		WildcardToken::Class(class) => {
			chars.first().is_some_and(|c| class.matches(*c)) && match_tokens(rest, &chars[1..])
		}
	}
}

fn trim_line(line: &str) -> &str {
	let mut line = line.trim_start();
	// trailing whitespace is insignificant unless backslash-escaped; only an odd
	// run of backslashes escapes, an even run is escaped backslashes themselves
	loop {
		let Some(stripped) = line.strip_suffix(|c| c == ' ' || c == '\t' || c == '\r') else {
			break;
		};
		let backslashes = stripped.chars().rev().take_while(|c| *c == '\\').count();
		if backslashes % 2 == 1 && line.ends_with(' ') {
			break;
		}
		line = stripped;
	}
	line
}
