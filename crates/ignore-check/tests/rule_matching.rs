//! Single-rule match vectors, against files and directories.

use ignore_check::{RepoPath, Rule};

fn matched(rule: &str, path: &str, is_dir: bool) -> bool {
	let rule = Rule::compile(rule, 0).expect(rule);
	let path = RepoPath::parse(path, is_dir).expect(path);
	rule.matches(&path)
}

fn matches_file(rule: &str, path: &str) -> bool {
	matched(rule, path, false)
}

fn matches_dir(rule: &str, path: &str) -> bool {
	matched(rule, path, true)
}

#[test]
fn plain_name_matches_basename_anywhere() {
	assert!(matches_file("README", "/README"));
	assert!(matches_dir("foo", "/foo"));
	assert!(matches_dir("bar_folder", "/foo/bar_folder"));
	assert!(!matches_file("README", "/foo"));
}

#[test]
fn directory_only_requires_a_directory() {
	assert!(!matches_file("README/", "/README"));
	assert!(matches_dir("foo/", "/foo"));
	assert!(matches_dir("bar_folder/", "/foo/bar_folder"));
}

#[test]
fn directory_only_applies_below_the_matched_directory() {
	// files under a matched directory are covered: the ancestor is a directory
	assert!(matches_file("build/", "/build/output.o"));
	assert!(matches_file("build/", "/src/build/output.o"));
	assert!(!matches_file("build/", "/build.log"));
}

#[test]
fn anchored_name_is_pinned_to_the_root() {
	assert!(matches_file("/README", "/README"));
	assert!(matches_dir("/foo", "/foo"));
	assert!(matches_dir("/foo", "/foo/bar_folder"));
	assert!(!matches_dir("/bar_folder", "/foo/bar_folder"));
}

#[test]
fn anchored_directory_only() {
	assert!(!matches_file("/README/", "/README"));
	assert!(matches_dir("/foo/", "/foo"));
	assert!(matches_dir("/foo/", "/foo/bar_folder"));
	assert!(!matches_dir("/bar_folder/", "/foo/bar_folder"));
}

#[test]
fn extension_glob() {
	assert!(!matches_file("*.md", "/README"));
	assert!(matches_file("*.md", "/README.md"));
	assert!(matches_file("*.md", "/foo/README.md"));

	assert!(!matches_file("/*.md", "/README"));
	assert!(matches_file("/*.md", "/README.md"));
	assert!(!matches_file("/*.md", "/foo/README.md"));
}

#[test]
fn leading_dot_must_be_covered_explicitly() {
	assert!(!matches_file("/*.md", "/.README.md"));
	assert!(!matches_file("*.md", "/.README.md"));
	assert!(matches_file(r"/\.*.md", "/.README.md"));
	assert!(matches_file(".*", "/.hidden"));
	assert!(!matches_file("*", "/.hidden"));

	// a class covering the dot is explicit enough
	assert!(matches_file("[.]hidden", "/.hidden"));
	assert!(matches_file("[.a]hidden", "/.hidden"));
	assert!(!matches_file("[a-z]hidden", "/.hidden"));
	assert!(!matches_file("[!.]hidden", "/.hidden"));
}

#[test]
fn multi_segment_unanchored_floats() {
	assert!(!matches_file("foo/bar_folder/", "/README"));
	assert!(!matches_dir("foo/bar_folder/", "/foo"));
	assert!(matches_dir("foo/bar_folder/", "/foo/bar_folder"));
	assert!(!matches_dir("foo/bar_folder/", "/bar_folder/foo"));
	assert!(matches_dir("bar_folder/baz_folder/", "/foo/bar_folder/baz_folder"));
	assert!(matches_file("bar_folder/baz_folder/", "/foo/bar_folder/baz_folder/x"));
}

#[test]
fn multi_segment_anchored_does_not_float() {
	assert!(matches_dir("/foo/bar_folder/", "/foo/bar_folder"));
	assert!(!matches_dir("/bar_folder/baz_folder/", "/foo/bar_folder/baz_folder"));
	assert!(!matches_dir("/foo/bar_folder/", "/bar_folder/foo"));
}

#[test]
fn single_star_stays_within_a_segment() {
	assert!(!matches_dir("foo/*/bar_subfolder/", "/README"));
	assert!(matches_dir("foo/*/bar_subfolder/", "/foo/bar_folder/bar_subfolder"));
	assert!(matches_dir("/foo/*/bar_subfolder/", "/foo/bar_folder/bar_subfolder"));
	assert!(!matches_file("foo/*/bar_subfolder/", "/foo/bar_folder/README"));
	assert!(!matches_dir("foo/*/bar_subfolder/", "/foo/a/b/bar_subfolder"));
}

#[test]
fn double_star_crosses_segments() {
	assert!(matches_dir("foo/**/bar_subfolder/", "/foo/bar_folder/bar_subfolder"));
	assert!(matches_dir("foo/**/bar_subfolder/", "/foo/a/b/bar_subfolder"));
	// zero segments is allowed
	assert!(matches_dir("foo/**/bar_subfolder/", "/foo/bar_subfolder"));
	assert!(!matches_file("foo/**/bar_subfolder/", "/foo/bar_folder/README"));

	assert!(matches_file("a/**/b", "/a/b"));
	assert!(matches_file("a/**/b", "/a/x/b"));
	assert!(matches_file("a/**/b", "/a/x/y/b"));
	assert!(!matches_file("a/**/b", "/a/x/c"));
}

#[test]
fn escaped_names() {
	assert!(matches_file(r"\#README", "/#README"));
	assert!(matches_dir(r"\#foo/", "/#foo"));
	assert!(matches_file(r"/foo/\#README", "/foo/#README"));
	assert!(matches_file(r"\!important", "/!important"));
}

#[test]
fn question_mark_matches_one_character() {
	assert!(matches_file("fo?", "/foo"));
	assert!(!matches_file("fo?", "/fo"));
	assert!(!matches_file("fo?", "/fooo"));
}

#[test]
fn character_classes() {
	assert!(matches_file("[a-c]oo", "/boo"));
	assert!(!matches_file("[a-c]oo", "/zoo"));
	assert!(matches_file("[!a-c]oo", "/zoo"));
	assert!(matches_file("foo.[ch]", "/src/foo.c"));
	assert!(matches_file("foo.[ch]", "/src/foo.h"));
	assert!(!matches_file("foo.[ch]", "/src/foo.o"));
}

#[test]
fn root_is_never_matched() {
	assert!(!matched("*", "/", true));
	assert!(!matched("foo", "/", true));
}
