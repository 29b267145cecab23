/*!
# M8 Pack

Compress one HTML document and bake it, along with the decompressor, into a
single self-extracting HTML file that renders the original without any
network access:

```bash
m8-pack index.source.html index.m8.html
```

The decompressor costs a couple kilobytes, so small documents will usually
come out _bigger_ than they went in. The summary printed at the end breaks
down where the bytes went.
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

use argyle::Argument;
use error::PackError;
use fyi_msg::Msg;
use m8::{
	nice,
	Packed,
};
use std::path::{
	Path,
	PathBuf,
};



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (PackError::PrintHelp | PackError::PrintVersion)) => {
			println!("{e}");
		},
		Err(PackError::Usage) => {
			eprintln!("{}", PackError::Usage);
			std::process::exit(1);
		},
		Err(e) => {
			Msg::error(e.to_string()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), PackError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle-pack.rs")));

	let mut paths: Vec<PathBuf> = Vec::with_capacity(2);
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(PackError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(PackError::PrintVersion),
			Argument::Other(s) => { paths.push(PathBuf::from(s)); },
			Argument::InvalidUtf8(s) => { paths.push(PathBuf::from(s)); },
			_ => {},
		}
	}

	// We need exactly an input and an output.
	let [input, output] = <[PathBuf; 2]>::try_from(paths)
		.map_err(|_| PackError::Usage)?;

	let line = format!(
		"{} \x1b[2m→\x1b[0m {}",
		input.display(),
		output.display(),
	);
	Msg::new(("M8 Pack", 199), line.as_str()).with_newline(true).print();

	let packed = m8::pack(&input, &output)?;
	summarize(&packed, &output);

	Ok(())
}

/// # Summarize.
///
/// Print the size breakdown for a freshly packed file.
fn summarize(packed: &Packed, output: &Path) {
	let compression = packed.compression();
	let net = packed.net();

	Msg::success("Generation complete!").print();
	println!(
		"
File Sizes:
  Original HTML:      {} bytes
  Compressed .m8:     {} bytes
  Self-Contained:     {} bytes

Savings:
  Pure compression:   {compression}
  Decompressor size:  {} bytes
  Net savings:        {net}

Now open the file in a browser:
  file://{}
",
		nice(packed.original()),
		nice(packed.compressed()),
		nice(packed.size()),
		nice(packed.overhead()),
		std::fs::canonicalize(output).as_deref().unwrap_or(output).display(),
	);
}
