/*!
# M8 Cache: Errors
*/

use fyi_msg::ProglessError;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
   .--.   ", "\x1b[38;5;199mM8 Cache\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
  ( m8 )  Precompile page.source.html
   `--'   files into page.m8.

USAGE:
    m8-cache [FLAGS] <PATH(S)>...

FLAGS:
    -h, --help        Print help information and exit.
    -p, --progress    Show progress bar while compiling.
    -V, --version     Print program version and exit.

ARGS:
    <PATH(S)>...      One or more files or directories to search for
                      *.source.html documents.
");



#[derive(Debug, Copy, Clone)]
/// # Error.
pub(super) enum CacheError {
	/// # No Documents.
	NoDocuments,

	/// # Progress Bar.
	Progress(ProglessError),

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl AsRef<str> for CacheError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for CacheError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for CacheError {}

impl From<ProglessError> for CacheError {
	#[inline]
	fn from(src: ProglessError) -> Self { Self::Progress(src) }
}

impl CacheError {
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::NoDocuments => "No *.source.html documents were found.",
			Self::Progress(e) => e.as_str(),
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("M8 Cache v", env!("CARGO_PKG_VERSION")),
		}
	}
}
