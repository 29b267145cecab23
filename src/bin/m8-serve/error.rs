/*!
# M8 Serve: Errors
*/

use std::{
	error::Error,
	fmt,
	io,
	path::PathBuf,
};



/// # Help Text.
const HELP: &str = concat!(r"
   .--.   ", "\x1b[38;5;199mM8 Serve\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
  ( m8 )  Serve .m8 pages, compressing
   `--'   sources on demand.

USAGE:
    m8-serve [FLAGS] [OPTIONS]

FLAGS:
    -h, --help        Print help information and exit.
    -V, --version     Print program version and exit.

OPTIONS:
    -a, --addr <ADDR> The address to listen on. [default: 127.0.0.1:3000]
    -r, --root <DIR>  The document root. [default: .]

ROUTES:
    *.html            The loader page, which fetches and expands *.m8.
    *.m8              A cached *.m8 if present, otherwise *.source.html
                      compressed on the fly.
    *                 Static files, served as-is.
");



#[derive(Debug)]
/// # Error.
pub(super) enum ServeError {
	/// # Invalid Listen Address.
	Addr(String),

	/// # Server I/O.
	Io(io::Error),

	/// # Invalid Document Root.
	Root(PathBuf),

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl fmt::Display for ServeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Addr(s) => write!(f, "Invalid listen address: {s}"),
			Self::Io(e) => write!(f, "Server error: {e}"),
			Self::Root(p) => write!(f, "Invalid document root: {}", p.display()),
			Self::PrintHelp => f.write_str(HELP),
			Self::PrintVersion => f.write_str(concat!("M8 Serve v", env!("CARGO_PKG_VERSION"))),
		}
	}
}

impl Error for ServeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for ServeError {
	#[inline]
	fn from(src: io::Error) -> Self { Self::Io(src) }
}
