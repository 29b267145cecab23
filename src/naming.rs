/*!
# M8: Artifact Naming.

A logical page `name` comes in three flavors:
* `name.source.html`: the raw HTML;
* `name.m8`: the compressed text (cached, or made on demand);
* `name.html`: the viewer, which is never stored; it is answered with the loader.
*/

use std::path::{
	Path,
	PathBuf,
};



/// # Compressed Extension.
pub const EXT_M8: &str = ".m8";

/// # Source Extension.
pub const EXT_SOURCE: &str = ".source.html";

/// # Viewer Extension.
pub const EXT_VIEWER: &str = ".html";

/// # Fallback MIME Type.
pub const MIME_DEFAULT: &str = "application/octet-stream";



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Resource Kind.
pub enum Resource<'a> {
	/// # Viewer (Loader Page).
	Viewer,

	/// # Compressed Text.
	///
	/// This holds the logical name, i.e. the path minus the extension.
	Compressed(&'a str),

	/// # Anything Else.
	Asset,
}

impl<'a> From<&'a str> for Resource<'a> {
	/// # Classify Path.
	///
	/// Extensions are matched case-insensitively.
	fn from(src: &'a str) -> Self {
		if let Some(name) = strip_suffix_ci(src, EXT_M8) { Self::Compressed(name) }
		else if strip_suffix_ci(src, EXT_VIEWER).is_some() { Self::Viewer }
		else { Self::Asset }
	}
}



#[must_use]
/// # Source Path for Name.
pub fn source_path(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + EXT_SOURCE.len());
	out.push_str(name);
	out.push_str(EXT_SOURCE);
	out
}

#[must_use]
/// # Compressed Path for Source.
///
/// Turn `name.source.html` into `name.m8`, or return `None` if the path is
/// not a source artifact.
pub fn compressed_path(src: &Path) -> Option<PathBuf> {
	let file = src.file_name()?.to_str()?;
	let name = strip_suffix_ci(file, EXT_SOURCE).filter(|n| ! n.is_empty())?;
	let mut out = String::with_capacity(name.len() + EXT_M8.len());
	out.push_str(name);
	out.push_str(EXT_M8);
	Some(src.with_file_name(out))
}

#[must_use]
/// # Is Source Artifact?
pub fn is_source(src: &Path) -> bool { compressed_path(src).is_some() }

#[must_use]
/// # MIME Type.
///
/// Look up the content type for common web assets by file extension.
pub fn mime_type(src: &Path) -> &'static str {
	let Some(ext) = src.extension().and_then(|e| e.to_str()) else { return MIME_DEFAULT; };
	match ext.to_ascii_lowercase().as_str() {
		"css" => "text/css",
		"gif" => "image/gif",
		"ico" => "image/x-icon",
		"jpeg" | "jpg" => "image/jpeg",
		"js" => "application/javascript",
		"json" => "application/json",
		"png" => "image/png",
		"svg" => "image/svg+xml",
		"txt" => "text/plain",
		"webp" => "image/webp",
		_ => MIME_DEFAULT,
	}
}



/// # Strip Suffix (Case-Insensitively).
fn strip_suffix_ci<'a>(src: &'a str, suffix: &str) -> Option<&'a str> {
	let idx = src.len().checked_sub(suffix.len())?;
	if src.is_char_boundary(idx) && src[idx..].eq_ignore_ascii_case(suffix) {
		Some(&src[..idx])
	}
	else { None }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_resource() {
		for (lhs, rhs) in [
			("/index.html", Resource::Viewer),
			("/a/b.HTML", Resource::Viewer),
			("/index.source.html", Resource::Viewer),
			("/index.m8", Resource::Compressed("/index")),
			("/a.b.M8", Resource::Compressed("/a.b")),
			("/style.css", Resource::Asset),
			("/m8", Resource::Asset),
			("/", Resource::Asset),
			("/é", Resource::Asset),
		] {
			assert_eq!(Resource::from(lhs), rhs, "{lhs}");
		}
	}

	#[test]
	fn t_paths() {
		assert_eq!(source_path("/index"), "/index.source.html");

		for (lhs, rhs) in [
			("/tmp/index.source.html", Some("/tmp/index.m8")),
			("/tmp/Index.SOURCE.html", Some("/tmp/Index.m8")),
			("/tmp/.source.html", None),
			("/tmp/index.html", None),
			("/tmp/index.m8", None),
		] {
			assert_eq!(compressed_path(Path::new(lhs)), rhs.map(PathBuf::from), "{lhs}");
		}

		assert!(is_source(Path::new("a.source.html")));
		assert!(! is_source(Path::new("a.html")));
	}

	#[test]
	fn t_mime() {
		for (lhs, rhs) in [
			("a.css", "text/css"),
			("a.JS", "application/javascript"),
			("a.jpeg", "image/jpeg"),
			("a.jpg", "image/jpeg"),
			("favicon.ico", "image/x-icon"),
			("a.svg", "image/svg+xml"),
			("a.wasm", MIME_DEFAULT),
			("README", MIME_DEFAULT),
		] {
			assert_eq!(mime_type(Path::new(lhs)), rhs, "{lhs}");
		}
	}
}
