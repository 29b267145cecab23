/*!
# M8 Serve

A small development server for `.m8` sites. Point it at a directory of
`*.source.html` documents:

```bash
m8-serve -r /path/to/site -a 127.0.0.1:3000
```

Requests are answered by extension:
* `page.html` gets the loader page, which fetches `page.m8` and expands it in the browser;
* `page.m8` gets the cached `page.m8` if there is one, otherwise `page.source.html` compressed on the fly;
* everything else is served as a static file.
*/

#![deny(unsafe_code)]

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]



mod error;
mod route;

use argyle::Argument;
use axum::Router;
use error::ServeError;
use fyi_msg::Msg;
use std::{
	net::SocketAddr,
	path::PathBuf,
	sync::Arc,
};
use tokio::net::TcpListener;



/// # Default Listen Address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (ServeError::PrintHelp | ServeError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.to_string()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), ServeError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle-serve.rs")));

	let mut addr = String::from(DEFAULT_ADDR);
	let mut root = PathBuf::from(".");
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(ServeError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(ServeError::PrintVersion),
			Argument::KeyWithValue("-a" | "--addr", s) => { addr = s; },
			Argument::KeyWithValue("-r" | "--root", s) => { root = PathBuf::from(s); },
			_ => {},
		}
	}

	let addr: SocketAddr = addr.parse().map_err(|_| ServeError::Addr(addr))?;
	let root = std::fs::canonicalize(&root)
		.ok()
		.filter(|p| p.is_dir())
		.ok_or(ServeError::Root(root))?;

	banner(addr, &root);

	let app = Router::new()
		.fallback(route::handle)
		.with_state(Arc::new(root));

	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(async move {
			let listener = TcpListener::bind(addr).await?;
			axum::serve(listener, app).await
		})
		.map_err(ServeError::Io)
}

/// # Startup Banner.
fn banner(addr: SocketAddr, root: &std::path::Path) {
	let line = format!("Listening on http://{addr}/");
	Msg::new(("M8 Serve", 199), line.as_str()).with_newline(true).eprint();
	eprintln!(
		"\x1b[2mDocument root:\x1b[0m {}

How it works:
  1. Open http://{addr}/page.html in a browser.
  2. The loader fetches page.m8.
  3. page.m8 is read from disk, or page.source.html is compressed on the fly.
  4. The browser expands it and renders the page.
",
		root.display(),
	);
}
