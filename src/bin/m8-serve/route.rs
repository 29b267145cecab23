/*!
# M8 Serve: Routing.
*/

use axum::{
	extract::State,
	http::{
		header,
		Method,
		StatusCode,
		Uri,
	},
	response::{
		IntoResponse,
		Response,
	},
};
use fyi_msg::Msg;
use m8::{
	M8Error,
	naming::{
		self,
		Resource,
	},
	Savings,
};
use std::{
	borrow::Cow,
	path::{
		Component,
		Path,
		PathBuf,
	},
	sync::Arc,
};



/// # Plain Text.
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// # HTML.
const TEXT_HTML: &str = "text/html; charset=utf-8";

/// # Directory Index.
const INDEX: &str = "index.html";



#[derive(Debug)]
/// # Reply.
///
/// A successful answer to a request.
pub(super) enum Reply {
	/// # Loader Page.
	Loader,

	/// # Cached Compressed Text (Verbatim).
	Cached(Vec<u8>),

	/// # Compressed On Demand.
	Compressed {
		/// # Body.
		body: String,

		/// # Sizes.
		savings: Savings,
	},

	/// # Static Asset.
	Asset {
		/// # Body.
		body: Vec<u8>,

		/// # Content Type.
		mime: &'static str,
	},
}

impl IntoResponse for Reply {
	fn into_response(self) -> Response {
		match self {
			Self::Loader => (
				[(header::CONTENT_TYPE, TEXT_HTML)],
				m8::script::loader(),
			).into_response(),
			Self::Cached(body) => (
				[
					("content-type", TEXT_PLAIN),
					("x-content-format", "m8"),
				],
				body,
			).into_response(),
			Self::Compressed { body, savings } => (
				[
					("content-type", TEXT_PLAIN.to_owned()),
					("x-content-format", "m8".to_owned()),
					("x-original-size", savings.before().to_string()),
					("x-compressed-size", savings.after().to_string()),
					("x-savings", savings.to_string()),
				],
				body,
			).into_response(),
			Self::Asset { body, mime } => (
				[(header::CONTENT_TYPE, mime)],
				body,
			).into_response(),
		}
	}
}

impl Reply {
	/// # Log Outcome.
	fn log(&self) {
		let msg = match self {
			Self::Loader => Msg::info("Serving the .m8 loader."),
			Self::Cached(_) => Msg::info("Serving a cached .m8 file."),
			Self::Compressed { savings, .. } => Msg::success(format!(
				"Compressed: {}B \x1b[2m→\x1b[0m {}B ({savings} saved).",
				savings.nice_before(),
				savings.nice_after(),
			)),
			Self::Asset { mime, .. } => Msg::info(format!("Serving a static file ({mime}).")),
		};
		msg.with_indent(1).eprint();
	}
}



/// # Handle Request.
///
/// Every request lands here. The file work is shipped off to the blocking
/// pool.
pub(super) async fn handle(
	State(root): State<Arc<PathBuf>>,
	method: Method,
	uri: Uri,
) -> Response {
	let path = uri.path().to_owned();
	let line = format!("{method} {path}");
	Msg::new(("Request", 69), line.as_str()).with_newline(true).eprint();

	let res = tokio::task::spawn_blocking(move || resolve(&root, &path)).await;
	match res {
		Ok(Ok(reply)) => {
			reply.log();
			reply.into_response()
		},
		Ok(Err(e)) => {
			log_error(&e);
			error_response(&e)
		},
		Err(e) => {
			Msg::error(format!("Request failed: {e}")).with_indent(1).eprint();
			(StatusCode::INTERNAL_SERVER_ERROR, [(header::CONTENT_TYPE, TEXT_PLAIN)], "500 - Internal error").into_response()
		},
	}
}

/// # Resolve Request.
///
/// Figure out what to send back for a given (raw, still percent-encoded)
/// request path relative to the document root:
/// * `*.html` gets the loader page;
/// * `*.m8` gets the cached file or, failing that, the compressed source;
/// * anything else is a static file.
///
/// ## Errors
///
/// Paths that don't decode or that try to climb out of the root are
/// reported as not found, as are missing files. Other read failures are
/// passed through.
pub(super) fn resolve(root: &Path, raw: &str) -> Result<Reply, M8Error> {
	let rel = relative_path(raw)
		.ok_or_else(|| M8Error::NotFound(PathBuf::from(raw)))?;

	match Resource::from(rel.as_ref()) {
		Resource::Viewer => Ok(Reply::Loader),
		Resource::Compressed(name) => {
			// Cached?
			let cached = root.join(rel.as_ref());
			if cached.is_file() {
				return std::fs::read(&cached)
					.map(Reply::Cached)
					.map_err(|e| M8Error::read(&cached, e));
			}

			// Compress the source.
			let source = root.join(naming::source_path(name));
			let raw = m8::read(&source)?;
			let body = m8::compress(&raw);
			let savings = Savings::from((raw.as_str(), body.as_str()));
			Ok(Reply::Compressed { body, savings })
		},
		Resource::Asset => {
			let file = root.join(rel.as_ref());
			if ! file.is_file() { return Err(M8Error::NotFound(file)); }
			let body = std::fs::read(&file).map_err(|e| M8Error::read(&file, e))?;
			let mime = naming::mime_type(&file);
			Ok(Reply::Asset { body, mime })
		},
	}
}

/// # Error Response.
pub(super) fn error_response(err: &M8Error) -> Response {
	match err {
		M8Error::NotFound(path) => {
			let body =
				if naming::is_source(path) {
					format!("404 - .m8 or source HTML file not found\n\nExpected: {}", path.display())
				}
				else { format!("404 - File not found\n\nExpected: {}", path.display()) };
			(StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
		},
		M8Error::Read(..) | M8Error::Write(..) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			[(header::CONTENT_TYPE, TEXT_PLAIN)],
			format!("500 - {err}"),
		).into_response(),
	}
}



/// # Log Error.
fn log_error(err: &M8Error) {
	let msg = match err {
		M8Error::NotFound(path) => Msg::warning(format!("Not found! Expected: {}", path.display())),
		_ => Msg::error(err.to_string()),
	};
	msg.with_indent(1).eprint();
}

/// # Relative Path.
///
/// Percent-decode the request path, strip the leading slash, and point
/// directories at their index. Returns `None` if the result won't decode or
/// would escape the document root.
fn relative_path(raw: &str) -> Option<Cow<'_, str>> {
	let decoded = urlencoding::decode(raw).ok()?;

	// No funny business.
	if
		decoded.contains('\0') ||
		! Path::new(decoded.as_ref()).components().all(|c| matches!(
			c,
			Component::RootDir | Component::CurDir | Component::Normal(_)
		))
	{
		return None;
	}

	let rel = decoded.trim_start_matches('/');
	if rel.is_empty() || rel.ends_with('/') {
		let mut out = String::with_capacity(rel.len() + INDEX.len());
		out.push_str(rel);
		out.push_str(INDEX);
		Some(Cow::Owned(out))
	}
	else if rel.len() == decoded.len() { Some(decoded) }
	else { Some(Cow::Owned(rel.to_owned())) }
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Fixture Root.
	fn root() -> PathBuf {
		Path::new(env!("CARGO_MANIFEST_DIR")).join("skel/test-assets")
	}

	#[test]
	fn t_relative_path() {
		for (lhs, rhs) in [
			("/", Some("index.html")),
			("", Some("index.html")),
			("/docs/", Some("docs/index.html")),
			("/index.m8", Some("index.m8")),
			("/a%20b.html", Some("a b.html")),
			("/index%2Em8", Some("index.m8")),
			("/./style.css", Some("./style.css")),
			("/../Cargo.toml", None),
			("/a/../../Cargo.toml", None),
			("/%2e%2e/Cargo.toml", None),
			("/%FF.m8", None),
			("/a%00.css", None),
		] {
			assert_eq!(relative_path(lhs).as_deref(), rhs, "{lhs}");
		}
	}

	#[test]
	fn t_loader() {
		let root = root();
		for path in ["/", "/index.html", "/about.html", "/index.source.html"] {
			assert!(matches!(resolve(&root, path), Ok(Reply::Loader)), "{path}");
		}

		let res = Reply::Loader.into_response();
		assert_eq!(res.status(), StatusCode::OK);
		assert_eq!(
			res.headers().get("content-type").and_then(|v| v.to_str().ok()),
			Some(TEXT_HTML),
		);
	}

	#[test]
	fn t_compressed() {
		let root = root();
		let raw = std::fs::read_to_string(root.join("index.source.html")).expect("Missing fixture.");
		let expected = m8::compress(&raw);

		let Ok(Reply::Compressed { body, savings }) = resolve(&root, "/index.m8")
		else { panic!("Expected on-demand compression."); };
		assert_eq!(body, expected);
		assert_eq!(savings, Savings::new(raw.len(), expected.len()));

		let res = Reply::Compressed { body, savings }.into_response();
		let headers = res.headers();
		let header = |k: &str| headers.get(k).and_then(|v| v.to_str().ok()).map(str::to_owned);
		assert_eq!(header("x-content-format").as_deref(), Some("m8"));
		assert_eq!(header("x-original-size"), Some(raw.len().to_string()));
		assert_eq!(header("x-compressed-size"), Some(expected.len().to_string()));
		assert_eq!(header("x-savings"), Some(savings.to_string()));
		assert!(header("x-savings").is_some_and(|v| v.ends_with('%')));
	}

	#[test]
	fn t_cached() {
		let root = root();
		let Ok(Reply::Cached(body)) = resolve(&root, "/cached.m8")
		else { panic!("Expected the cached file."); };
		assert_eq!(body, std::fs::read(root.join("cached.m8")).expect("Missing fixture."));

		let res = Reply::Cached(body).into_response();
		assert_eq!(res.status(), StatusCode::OK);
		assert!(res.headers().get("x-original-size").is_none());
		assert_eq!(
			res.headers().get("x-content-format").and_then(|v| v.to_str().ok()),
			Some("m8"),
		);
	}

	#[test]
	fn t_asset() {
		let root = root();
		let Ok(Reply::Asset { body, mime }) = resolve(&root, "/style.css")
		else { panic!("Expected a static file."); };
		assert_eq!(mime, "text/css");
		assert_eq!(body, std::fs::read(root.join("style.css")).expect("Missing fixture."));
	}

	#[test]
	fn t_not_found() {
		let root = root();

		let err = resolve(&root, "/missing.m8").expect_err("Should be missing.");
		assert_eq!(err.path(), root.join("missing.source.html"));
		let res = error_response(&err);
		assert_eq!(res.status(), StatusCode::NOT_FOUND);

		for path in ["/missing.png", "/../Cargo.toml", "/%2e%2e/Cargo.toml"] {
			let err = resolve(&root, path).expect_err("Should be missing.");
			assert!(matches!(err, M8Error::NotFound(_)), "{path}");
			assert_eq!(error_response(&err).status(), StatusCode::NOT_FOUND);
		}
	}

	#[test]
	fn t_internal_error() {
		let err = M8Error::Read(PathBuf::from("/x.m8"), std::io::ErrorKind::PermissionDenied.into());
		assert_eq!(error_response(&err).status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
