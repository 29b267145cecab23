/*!
# M8: Errors
*/

use std::{
	error::Error,
	fmt,
	io,
	path::{
		Path,
		PathBuf,
	},
};



#[derive(Debug)]
/// # I/O Error.
///
/// The codec itself never fails; these come from reading and writing the
/// artifacts around it.
pub enum M8Error {
	/// # Missing Artifact.
	///
	/// This holds the path that was searched.
	NotFound(PathBuf),

	/// # Read Failure.
	Read(PathBuf, io::Error),

	/// # Write Failure.
	Write(PathBuf, io::Error),
}

impl fmt::Display for M8Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotFound(p) => write!(f, "File not found: {}", p.display()),
			Self::Read(p, e) => write!(f, "Unable to read {}: {e}", p.display()),
			Self::Write(p, e) => write!(f, "Unable to write {}: {e}", p.display()),
		}
	}
}

impl Error for M8Error {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::NotFound(_) => None,
			Self::Read(_, e) | Self::Write(_, e) => Some(e),
		}
	}
}

impl M8Error {
	#[must_use]
	/// # Path.
	pub fn path(&self) -> &Path {
		match self {
			Self::NotFound(p) | Self::Read(p, _) | Self::Write(p, _) => p,
		}
	}

	#[must_use]
	/// # Read (Classified).
	///
	/// Missing files become `NotFound`; everything else is a `Read`.
	pub fn read(src: &Path, err: io::Error) -> Self {
		if err.kind() == io::ErrorKind::NotFound { Self::NotFound(src.to_path_buf()) }
		else { Self::Read(src.to_path_buf(), err) }
	}
}
