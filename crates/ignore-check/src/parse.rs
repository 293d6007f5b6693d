//! Parser for one line of gitignore-style pattern syntax.
//!
//! Produces a structural [`Line`]: empty, comment, or a [`Pattern`] made of path segments.
//! Anchoring (leading `/`) and the directory-only marker (trailing `/`) are represented as
//! [`Segment::Terminal`] entries at either end; [`crate::Rule`] folds them into flags.

use winnow::combinator::{alt, eof, opt, preceded, repeat, separated};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::{any, none_of, rest, take_while};
use winnow::Result;

/// One line of an ignore file, structurally.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Line {
	/// A blank line.
	Empty,

	/// A comment line, with the text following the `#`.
	Comment(String),

	/// A pattern line.
	Pattern(Pattern),
}

/// A parsed ignore pattern.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pattern {
	/// Whether the line began with an unescaped `!`.
	pub negated: bool,

	/// The slash-separated segments, with `Terminal` markers for leading/trailing slashes.
	pub segments: Vec<Segment>,
}

/// One slash-separated piece of a pattern.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Segment {
	/// Marker for a leading slash (anchored) or trailing slash (directory-only).
	Terminal,

	/// A segment with no wildcards, escapes resolved.
	Fixed(String),

	/// A segment containing wildcards, as a token sequence.
	Wildcard(Vec<WildcardToken>),

	/// A whole-segment `**`, standing for zero or more segments.
	All,
}

/// One token of a wildcard segment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum WildcardToken {
	/// A literal run of characters, escapes resolved.
	Literal(String),

	/// `*`: zero or more characters within the segment.
	Any,

	/// `?`: exactly one character.
	One,

	/// `[...]`: one character out of a class.
	Class(Class),
}

/// A character class, e.g. `[a-z0]` or `[!._-]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Class {
	/// Whether the class began with `!`.
	pub negated: bool,

	/// The class members.
	pub classes: Vec<CharClass>,
}

/// One member of a character class.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CharClass {
	/// A single character.
	Single(char),

	/// An inclusive range, e.g. `A-Z`.
	Range(char, char),
}

impl Class {
	/// Whether the class matches a character.
	#[must_use]
	pub fn matches(&self, c: char) -> bool {
		let hit = self.classes.iter().any(|class| match class {
			CharClass::Single(s) => *s == c,
			CharClass::Range(a, b) => (*a..=*b).contains(&c),
		});
		hit != self.negated
	}
}

impl std::str::FromStr for Line {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		line.parse(s).map_err(|e| e.to_string())
	}
}

impl std::str::FromStr for Pattern {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		pattern.parse(s).map_err(|e| e.to_string())
	}
}

/// Parse one whole line of an ignore file.
pub fn line(input: &mut &str) -> Result<Line> {
	alt((
		eof.value(Line::Empty),
		preceded('#', rest).map(|text: &str| Line::Comment(text.to_owned())),
		pattern.map(Line::Pattern),
	))
	.parse_next(input)
}

fn pattern(input: &mut &str) -> Result<Pattern> {
	let negated = opt('!').parse_next(input)?.is_some();
	let anchored = opt('/').parse_next(input)?.is_some();
	let mut segments: Vec<Segment> = separated(1.., segment, '/').parse_next(input)?;
	let directory = opt('/').parse_next(input)?.is_some();

	if anchored {
		segments.insert(0, Segment::Terminal);
	}
	if directory {
		segments.push(Segment::Terminal);
	}

	Ok(Pattern { negated, segments })
}

fn segment(input: &mut &str) -> Result<Segment> {
	let raw = take_while(1.., |c| c != '/').parse_next(input)?;
	if raw == "**" {
		return Ok(Segment::All);
	}

	let tokens: Vec<WildcardToken> = repeat(1.., token)
		.parse(raw)
		.map_err(|_| ContextError::new())?;

	Ok(match tokens.as_slice() {
		[WildcardToken::Literal(text)] => Segment::Fixed(text.clone()),
		_ => Segment::Wildcard(tokens),
	})
}

fn token(input: &mut &str) -> Result<WildcardToken> {
	alt((
		'*'.value(WildcardToken::Any),
		'?'.value(WildcardToken::One),
		charclass.map(WildcardToken::Class),
		literal_run.map(WildcardToken::Literal),
	))
	.parse_next(input)
}

fn literal_run(input: &mut &str) -> Result<String> {
	repeat(1.., literal_char).parse_next(input)
}

// backslash escapes any character; bare backslashes are not valid literals
fn literal_char(input: &mut &str) -> Result<char> {
	alt((preceded('\\', any), none_of(['*', '?', '[', '\\', '/']))).parse_next(input)
}

fn charclass(input: &mut &str) -> Result<Class> {
	'['.parse_next(input)?;
	let negated = opt('!').parse_next(input)?.is_some();
	let classes: Vec<CharClass> = repeat(1.., class_item).parse_next(input)?;
	']'.parse_next(input)?;

	Ok(Class { negated, classes })
}

fn class_item(input: &mut &str) -> Result<CharClass> {
	alt((
		(class_char, '-', class_char).map(|(a, _, b)| CharClass::Range(a, b)),
		class_char.map(CharClass::Single),
	))
	.parse_next(input)
}

fn class_char(input: &mut &str) -> Result<char> {
	alt((preceded('\\', any), none_of([']', '\\', '/']))).parse_next(input)
}

#[test]
fn test_patterns() {
	assert_eq!(
		pattern.parse_peek("test"),
		Ok((
			"",
			Pattern {
				negated: false,
				segments: vec![Segment::Fixed("test".into())],
			}
		))
	);
	assert_eq!(
		pattern.parse_peek("/test"),
		Ok((
			"",
			Pattern {
				negated: false,
				segments: vec![Segment::Terminal, Segment::Fixed("test".into())],
			}
		))
	);
	assert_eq!(
		pattern.parse_peek("test/"),
		Ok((
			"",
			Pattern {
				negated: false,
				segments: vec![Segment::Fixed("test".into()), Segment::Terminal],
			}
		))
	);
	assert_eq!(
		pattern.parse_peek("/foo/**/b*z"),
		Ok((
			"",
			Pattern {
				negated: false,
				segments: vec![
					Segment::Terminal,
					Segment::Fixed("foo".into()),
					Segment::All,
					Segment::Wildcard(vec![
						WildcardToken::Literal("b".into()),
						WildcardToken::Any,
						WildcardToken::Literal("z".into()),
					]),
				],
			}
		))
	);
}

#[test]
fn test_classes() {
	assert_eq!(
		pattern.parse_peek("[a-z0]?.md"),
		Ok((
			"",
			Pattern {
				negated: false,
				segments: vec![Segment::Wildcard(vec![
					WildcardToken::Class(Class {
						negated: false,
						classes: vec![CharClass::Range('a', 'z'), CharClass::Single('0')],
					}),
					WildcardToken::One,
					WildcardToken::Literal(".md".into()),
				])],
			}
		))
	);

	let class = Class {
		negated: true,
		classes: vec![CharClass::Range('a', 'z')],
	};
	assert!(!class.matches('q'));
	assert!(class.matches('Q'));
}
