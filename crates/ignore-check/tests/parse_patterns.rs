use ignore_check::parse::*;

fn parsed(input: &str) -> Line {
	input.parse().expect(input)
}

#[test]
fn simple() {
	assert_eq!(
		parsed("test"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Fixed("test".into())],
		})
	);
}

#[test]
fn leading_slash() {
	assert_eq!(
		parsed("/test"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Terminal, Segment::Fixed("test".into())],
		})
	);
}

#[test]
fn trailing_slash() {
	assert_eq!(
		parsed("test/"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Fixed("test".into()), Segment::Terminal],
		})
	);
}

#[test]
fn surrounded_by_slashes() {
	assert_eq!(
		parsed("/test/"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![
				Segment::Terminal,
				Segment::Fixed("test".into()),
				Segment::Terminal,
			],
		})
	);
}

#[test]
fn complex_with_wildcards() {
	assert_eq!(
		parsed("/foo/**/b*z"),
		Line::Pattern(Pattern {
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
		})
	);
}

#[test]
fn negated() {
	assert_eq!(
		parsed("!/foo/b*z"),
		Line::Pattern(Pattern {
			negated: true,
			segments: vec![
				Segment::Terminal,
				Segment::Fixed("foo".into()),
				Segment::Wildcard(vec![
					WildcardToken::Literal("b".into()),
					WildcardToken::Any,
					WildcardToken::Literal("z".into()),
				]),
			],
		})
	);
}

#[test]
fn escaped_exclamation() {
	assert_eq!(
		parsed(r"\!foo"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Fixed("!foo".into())],
		})
	);
}

#[test]
fn escaped_hash() {
	assert_eq!(
		parsed(r"\#foo"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Fixed("#foo".into())],
		})
	);
}

#[test]
fn mid_segment_escapes() {
	assert_eq!(
		parsed(r"/fo\!o/\.bar*"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![
				Segment::Terminal,
				Segment::Fixed("fo!o".into()),
				Segment::Wildcard(vec![
					WildcardToken::Literal(".bar".into()),
					WildcardToken::Any,
				]),
			],
		})
	);
}

#[test]
fn question_mark() {
	assert_eq!(
		parsed("fo?"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Wildcard(vec![
				WildcardToken::Literal("fo".into()),
				WildcardToken::One,
			])],
		})
	);
}

#[test]
fn character_class() {
	assert_eq!(
		parsed("[!a-z_]*"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![Segment::Wildcard(vec![
				WildcardToken::Class(Class {
					negated: true,
					classes: vec![CharClass::Range('a', 'z'), CharClass::Single('_')],
				}),
				WildcardToken::Any,
			])],
		})
	);
}

#[test]
fn double_star_segment() {
	assert_eq!(
		parsed("a/**/b"),
		Line::Pattern(Pattern {
			negated: false,
			segments: vec![
				Segment::Fixed("a".into()),
				Segment::All,
				Segment::Fixed("b".into()),
			],
		})
	);
}

#[test]
fn comment_empty() {
	assert_eq!(parsed("#"), Line::Comment("".into()));
}

#[test]
fn comment_no_space() {
	assert_eq!(parsed("#foo"), Line::Comment("foo".into()));
}

#[test]
fn comment_with_space() {
	assert_eq!(parsed("# foo"), Line::Comment(" foo".into()));
}

#[test]
fn empty() {
	assert_eq!(parsed(""), Line::Empty);
}

#[test]
fn unclosed_class_is_an_error() {
	assert!("foo[ab".parse::<Line>().is_err());
}
