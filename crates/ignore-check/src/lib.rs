//! Parse and interpret cascades of gitignore-style ignore files.
//!
//! Given a path inside a project tree, decide whether it is ignored according to the
//! `.gitignore` convention: per-directory ignore files whose glob rules combine, last
//! matching rule winning within a file, into a single verdict.
//!
//! The engine never touches a filesystem directly. It works on a normalized path type
//! ([`RepoPath`]) and raw ignore-file text supplied through the [`Repository`] trait;
//! [`DiskRepository`] and [`MemoryRepository`] are the two bundled implementations.
//!
//! ```no_run
//! use ignore_check::IgnoreChecker;
//!
//! # fn main() -> Result<(), ignore_check::Error> {
//! let checker = IgnoreChecker::new("/path/to/repo")?;
//! if checker.is_path_ignored("/target/debug")? {
//!     println!("ignored");
//! }
//! # Ok(())
//! # }
//! ```

pub mod parse;

mod check;
mod error;
mod file;
mod path;
mod repository;
mod rule;

pub use check::{IgnoreChecker, DEFAULT_IGNORE_FILENAME};
pub use error::Error;
pub use file::RuleFile;
pub use path::RepoPath;
pub use repository::{DiskRepository, FileKind, MemoryRepository, Repository};
pub use rule::Rule;
