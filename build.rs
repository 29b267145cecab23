/*!
# M8: Build
*/

use argyle::KeyWordsBuilder;
use std::path::PathBuf;



/// # Build.
///
/// Each binary gets its own pre-compiled CLI keyword list.
fn main() {
	println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

	// m8-cache.
	let mut builder = KeyWordsBuilder::default();
	builder.push_keys([
		"-h", "--help",
		"-p", "--progress",
		"-V", "--version",
	]);
	builder.save(out_path("argyle-cache.rs"));

	// m8-pack.
	let mut builder = KeyWordsBuilder::default();
	builder.push_keys([
		"-h", "--help",
		"-V", "--version",
	]);
	builder.save(out_path("argyle-pack.rs"));

	// m8-serve.
	let mut builder = KeyWordsBuilder::default();
	builder.push_keys([
		"-h", "--help",
		"-V", "--version",
	]);
	builder.push_keys_with_values([
		"-a", "--addr",
		"-r", "--root",
	]);
	builder.save(out_path("argyle-serve.rs"));
}

/// # Output Path.
///
/// Append the sub-path to OUT_DIR.
fn out_path(name: &str) -> PathBuf {
	let dir = std::env::var("OUT_DIR").expect("Missing OUT_DIR.");
	let mut out = std::fs::canonicalize(dir).expect("Missing OUT_DIR.");
	out.push(name);
	out
}
