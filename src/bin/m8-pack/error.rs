/*!
# M8 Pack: Errors
*/

use m8::M8Error;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
pub(super) const HELP: &str = concat!(r"
   .--.   ", "\x1b[38;5;199mM8 Pack\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
  ( m8 )  Bake HTML and its decompressor
   `--'   into one self-extracting file.

USAGE:
    m8-pack [FLAGS] <INPUT> <OUTPUT>

FLAGS:
    -h, --help        Print help information and exit.
    -V, --version     Print program version and exit.

ARGS:
    <INPUT>           The source HTML, e.g. index.source.html.
    <OUTPUT>          Where to save the self-extracting page, e.g.
                      index.m8.html.
");

/// # Usage.
pub(super) const USAGE: &str = "Usage: m8-pack <input.html> <output.html>

Example:
  m8-pack index.source.html index.m8.html

This creates a self-extracting HTML file that decompresses itself on load!";



#[derive(Debug)]
/// # Error.
pub(super) enum PackError {
	/// # I/O.
	Io(M8Error),

	/// # Missing Arguments.
	Usage,

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl fmt::Display for PackError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(M8Error::NotFound(p)) => write!(f, "Input file '{}' not found.", p.display()),
			Self::Io(e) => fmt::Display::fmt(e, f),
			Self::Usage => f.write_str(USAGE),
			Self::PrintHelp => f.write_str(HELP),
			Self::PrintVersion => f.write_str(concat!("M8 Pack v", env!("CARGO_PKG_VERSION"))),
		}
	}
}

impl Error for PackError {}

impl From<M8Error> for PackError {
	#[inline]
	fn from(src: M8Error) -> Self { Self::Io(src) }
}
