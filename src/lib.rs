/*!
# M8

M8 shrinks HTML by swapping well-known tag and attribute names for short
tokens and dropping the whitespace between tags. The result, "m8 text", is
not HTML anymore (`<div class="a">` becomes `<1 c="a">`), but a tiny
JavaScript decompressor can turn it back in the browser.

Savings depend heavily on the markup. Tag-heavy, lightly-indented documents
do best; script- or text-heavy ones barely move.



## Use

The codec itself is just two functions:

```
let html = r#"<div class="a"><p>hi</p></div>"#;
let m8 = m8::compress(html);
assert_eq!(m8, r#"<1 c="a"><3>hi</3></1>"#);
assert_eq!(m8::decompress(&m8), html);
```

Both are total: text they don't recognize passes straight through. Unknown
tags like `<my-widget>` and attributes like `data-id` are left alone.

Three programs are built around it:
* `m8-serve` answers `page.html` with a small loader that fetches `page.m8`, compressing `page.source.html` on the fly if no cached `page.m8` exists;
* `m8-pack` bakes `page.source.html` and the decompressor into one self-extracting HTML file;
* `m8-cache` precompiles every `*.source.html` under some paths into the `.m8` files the server prefers.



## Caution

This is text substitution, not parsing:
* Whitespace between tags is removed, even where CSS (`white-space: pre`) would have rendered it.
* An opening tag is assumed to end at its first `>`, even one inside a quoted value.
* Attribute names are matched anywhere within a tag, including inside quoted values.
* Text like `a<10` looks like a (token) tag, and will not survive the trip.

Output may differ from older (regex-based) `.m8` tools in two small ways:
* Only HTML whitespace (tab, line feed, form feed, carriage return, space) is collapsed between tags. Vertical tabs, non-breaking spaces, and Unicode line separators are content, and are kept.
* The whitespace character in front of an attribute is kept as-is (a tab stays a tab) rather than normalized to a single space.
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

#![allow(clippy::module_name_repetitions)]



mod codec;
pub mod dict;
mod error;
pub mod naming;
pub mod script;
mod stats;

pub use codec::{
	collapse_whitespace,
	compress,
	decompress,
	Direction,
	substitute_attribute_names,
	substitute_tag_names,
};
pub use error::M8Error;
pub use script::Packed;
pub use stats::{
	nice,
	Savings,
};

use std::path::{
	Path,
	PathBuf,
};



/// # Read Artifact.
///
/// ## Errors
///
/// Returns [`M8Error::NotFound`] if the file doesn't exist, or
/// [`M8Error::Read`] if it can't be read for any other reason.
pub fn read(src: &Path) -> Result<String, M8Error> {
	std::fs::read_to_string(src).map_err(|e| M8Error::read(src, e))
}

/// # Write Artifact (Atomically).
///
/// ## Errors
///
/// Returns [`M8Error::Write`] if the file can't be saved.
pub fn write(dst: &Path, data: &[u8]) -> Result<(), M8Error> {
	write_atomic::write_file(dst, data)
		.map_err(|e| M8Error::Write(dst.to_path_buf(), e))
}

/// # Pack a File.
///
/// Read `src`, build the self-contained page, and save it to `dst`.
///
/// ## Errors
///
/// Returns an error if `src` can't be read or `dst` can't be written.
pub fn pack(src: &Path, dst: &Path) -> Result<Packed, M8Error> {
	let raw = read(src)?;
	let packed = Packed::from(raw.as_str());
	write(dst, packed.as_str().as_bytes())?;
	Ok(packed)
}

/// # Compile a Source Artifact.
///
/// Compress `name.source.html` and save the result as `name.m8` alongside
/// it, returning the new path and the size difference.
///
/// ## Errors
///
/// Returns [`M8Error::NotFound`] if `src` isn't named like a source artifact
/// or does not exist, or a read/write error if the I/O fails.
pub fn compile(src: &Path) -> Result<(PathBuf, Savings), M8Error> {
	let dst = naming::compressed_path(src)
		.ok_or_else(|| M8Error::NotFound(src.to_path_buf()))?;
	let raw = read(src)?;
	let m8 = compress(&raw);
	write(&dst, m8.as_bytes())?;
	Ok((dst, Savings::from((raw.as_str(), m8.as_str()))))
}
