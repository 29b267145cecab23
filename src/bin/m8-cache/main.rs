/*!
# M8 Cache

`m8-serve` compresses `page.source.html` on every request for `page.m8`
unless a cached `page.m8` is already sitting next to it. This program makes
those cached copies ahead of time:

```bash
# Compile one document.
m8-cache /path/to/index.source.html

# Recursively compile every *.source.html in a directory.
m8-cache /path/to/site

# Same thing, with a progress bar.
m8-cache -p /path/to/site
```

Existing `.m8` files are overwritten. Documents that can't be read or saved
are skipped with a warning naming the file and the reason, and counted in the
summary.
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
use dowser::Dowser;
use error::CacheError;
use fyi_msg::{
	Msg,
	Progless,
};
use m8::{
	M8Error,
	naming,
	nice,
	Savings,
};
use rayon::iter::{
	IntoParallelRefIterator,
	ParallelIterator,
};
use std::{
	path::{
		Path,
		PathBuf,
	},
	sync::atomic::{
		AtomicUsize,
		Ordering::Relaxed,
	},
};



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (CacheError::PrintHelp | CacheError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.as_str()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), CacheError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle-cache.rs")));

	let mut progress = false;
	let mut dirs: Vec<PathBuf> = Vec::new();
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(CacheError::PrintHelp),
			Argument::Key("-p" | "--progress") => { progress = true; },
			Argument::Key("-V" | "--version") => return Err(CacheError::PrintVersion),
			Argument::Other(s) => { dirs.push(PathBuf::from(s)); },
			Argument::InvalidUtf8(s) => { dirs.push(PathBuf::from(s)); },
			_ => {},
		}
	}

	// Find the documents.
	let paths: Vec<PathBuf> = Dowser::default()
		.with_paths(dirs)
		.filter(|p| naming::is_source(p))
		.collect();
	if paths.is_empty() { return Err(CacheError::NoDocuments); }

	let totals = Totals::default();

	// Sexy run-through.
	if progress {
		let progress = Progless::try_from(paths.len())?
			.with_title(Some(Msg::new(("M8 Cache", 199), "Compiling documents…")));

		paths.par_iter().for_each(|p| {
			let tmp = p.to_string_lossy();
			let _task = progress.task(&tmp);
			if let Err(e) = totals.compile(p) { report(&e, Some(&progress)); }
		});

		progress.finish();
	}
	else {
		paths.par_iter().for_each(|p| {
			if let Err(e) = totals.compile(p) { report(&e, None); }
		});
	}

	totals.summarize();
	Ok(())
}



#[derive(Debug, Default)]
/// # Running Totals.
struct Totals {
	/// # Compiled.
	done: AtomicUsize,

	/// # Skipped.
	failed: AtomicUsize,

	/// # Bytes Before.
	before: AtomicUsize,

	/// # Bytes After.
	after: AtomicUsize,
}

impl Totals {
	/// # Compile One.
	///
	/// Failures are counted, then handed back for reporting.
	fn compile(&self, src: &Path) -> Result<(), M8Error> {
		match m8::compile(src) {
			Ok((_, savings)) => {
				self.done.fetch_add(1, Relaxed);
				self.before.fetch_add(savings.before(), Relaxed);
				self.after.fetch_add(savings.after(), Relaxed);
				Ok(())
			},
			Err(e) => {
				self.failed.fetch_add(1, Relaxed);
				Err(e)
			},
		}
	}

	/// # Summarize.
	fn summarize(&self) {
		let done = self.done.load(Relaxed);
		let failed = self.failed.load(Relaxed);
		let savings = Savings::new(self.before.load(Relaxed), self.after.load(Relaxed));

		let msg = format!(
			"{} {}, {} \x1b[2m→\x1b[0m {} bytes ({savings} saved).",
			nice(done),
			if done == 1 { "document" } else { "documents" },
			savings.nice_before(),
			savings.nice_after(),
		);
		Msg::crunched(msg).print();

		if failed != 0 {
			let msg = format!(
				"{} {} could not be compiled.",
				nice(failed),
				if failed == 1 { "document" } else { "documents" },
			);
			Msg::warning(msg).eprint();
		}
	}
}



/// # Failure Message.
fn failure(err: &M8Error) -> Msg {
	Msg::warning(format!("Skipped: {err}"))
}

/// # Report Failure.
///
/// Print the warning above the progress bar if there is one, or straight to
/// STDERR if not.
fn report(err: &M8Error, progress: Option<&Progless>) {
	let msg = failure(err);
	if let Some(progress) = progress {
		if let Err(msg) = progress.push_msg(msg) { msg.eprint(); }
	}
	else { msg.eprint(); }
}
