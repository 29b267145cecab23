/*!
# M8: Codec.

Compression and decompression are plain text substitution: no tree is built
and nothing is validated. Tag names are recognized right after `<` or `</`,
attribute names right after whitespace and right before `=`. Everything else
passes through untouched.

Known quirks, kept on purpose so both directions agree:
* An opening tag ends at the first `>`, even one inside a quoted value.
* Attribute names are matched anywhere in the tag, quoted values included.
* Text like `a<10` reads as a tag named `10`, which decompresses to `h5`.
*/

use crate::dict;
use std::borrow::Cow;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Direction.
///
/// Which way names and tokens are being swapped.
pub enum Direction {
	/// # Names to Tokens.
	Compress,

	/// # Tokens to Names.
	Decompress,
}

impl Direction {
	#[must_use]
	/// # Swap Tag.
	fn tag(self, src: &str) -> Option<&'static str> {
		match self {
			Self::Compress => dict::tag_token(src),
			Self::Decompress => dict::tag_name(src),
		}
	}

	#[must_use]
	/// # Swap Attribute.
	fn attr(self, src: &str) -> Option<&'static str> {
		match self {
			Self::Compress => dict::attr_token(src),
			Self::Decompress => dict::attr_name(src),
		}
	}
}



#[must_use]
/// # Compress.
///
/// Strip whitespace sitting between tags, then swap known tag and attribute
/// names for their tokens. Unknown names are left as they are.
///
/// This never fails; input it can't make sense of is passed through.
///
/// ## Examples
///
/// ```
/// assert_eq!(
///     m8::compress(r#"<div class="a"><p>hi</p></div>"#),
///     r#"<1 c="a"><3>hi</3></1>"#,
/// );
/// ```
pub fn compress(html: &str) -> String {
	let src = collapse_whitespace(html).map_or(Cow::Borrowed(html), Cow::Owned);
	substitute_tag_names(&src, Direction::Compress)
}

#[must_use]
/// # Decompress.
///
/// Swap tag and attribute tokens back for their names. Whatever isn't a
/// token is assumed to be a literal name already and left alone.
///
/// Whitespace removed during compression is not restored.
///
/// ## Examples
///
/// ```
/// assert_eq!(
///     m8::decompress(r#"<1 c="a"><3>hi</3></1>"#),
///     r#"<div class="a"><p>hi</p></div>"#,
/// );
/// ```
pub fn decompress(m8: &str) -> String {
	substitute_tag_names(m8, Direction::Decompress)
}



#[must_use]
/// # Collapse Inter-Tag Whitespace.
///
/// Remove any run of whitespace with a `>` on its left and a `<` on its
/// right. Whitespace anywhere else, including text nodes and attribute
/// values, is kept.
///
/// Returns `None` if nothing needed removing.
pub fn collapse_whitespace(src: &str) -> Option<String> {
	let bytes = src.as_bytes();

	// Find the first gap, if any.
	let first = find_gap(bytes, 0)?;

	let mut out = String::with_capacity(src.len());
	let mut from = 0;
	let mut next = Some(first);
	while let Some((start, end)) = next {
		out.push_str(&src[from..start]);
		from = end;
		next = find_gap(bytes, end);
	}
	out.push_str(&src[from..]);

	Some(out)
}

/// # Find Whitespace Gap.
///
/// Return the range of the next whitespace run, starting from `pos`, that is
/// bordered by `>` and `<`.
fn find_gap(bytes: &[u8], mut pos: usize) -> Option<(usize, usize)> {
	while let Some(off) = bytes.get(pos..)?.iter().position(|&b| b == b'>') {
		let start = pos + off + 1;
		let end = start + bytes[start..].iter().take_while(|&&b| is_whitespace(b)).count();
		if start != end && bytes.get(end) == Some(&b'<') {
			return Some((start, end));
		}
		pos = end;
	}

	None
}



#[must_use]
/// # Substitute Tag Names.
///
/// Swap the names of opening tags (`<name …>`) and closing tags (`</name>`)
/// in the given direction. The attribute section of each opening tag is run
/// through [`substitute_attribute_names`] along the way.
///
/// Opening tags are handled in one pass, closing tags in a second.
pub fn substitute_tag_names(src: &str, dir: Direction) -> String {
	let src = substitute_opening_tags(src, dir);
	substitute_closing_tags(&src, dir).unwrap_or_else(|| src.into_owned())
}

/// # Substitute Attribute Names.
///
/// Swap every `whitespace + name + =` in `src` for `whitespace + swap + =`,
/// writing the result to `out`. The whitespace character itself is kept.
pub fn substitute_attribute_names(src: &str, dir: Direction, out: &mut String) {
	let bytes = src.as_bytes();
	let mut from = 0;

	for (idx, b) in bytes.iter().copied().enumerate() {
		if ! is_whitespace(b) { continue; }

		let start = idx + 1;
		let Some(len) = bytes[start..].iter()
			.take(dict::ATTR_MAX + 1)
			.position(|&b| b == b'=')
			.filter(|&len| len != 0)
		else { continue; };

		if let Some(swap) = dir.attr(&src[start..start + len]) {
			out.push_str(&src[from..start]);
			out.push_str(swap);
			from = start + len;
		}
	}

	out.push_str(&src[from..]);
}

/// # Substitute Opening Tags.
///
/// An opening tag is `<`, one or more word characters, anything but `>`,
/// then `>`.
fn substitute_opening_tags(src: &str, dir: Direction) -> Cow<'_, str> {
	let bytes = src.as_bytes();
	let mut out = String::new();
	let mut from = 0;
	let mut pos = 0;

	while let Some(off) = bytes[pos..].iter().position(|&b| b == b'<') {
		let name_start = pos + off + 1;
		let name_end = name_start + word_len(&bytes[name_start..]);
		if name_start == name_end {
			pos = name_start;
			continue;
		}

		// Without a closing bracket there are no more tags.
		let Some(close) = bytes[name_end..].iter().position(|&b| b == b'>')
		else { break; };
		let close = name_end + close;

		if out.is_empty() { out.reserve(src.len()); }
		out.push_str(&src[from..name_start]);
		let name = &src[name_start..name_end];
		out.push_str(dir.tag(name).unwrap_or(name));
		substitute_attribute_names(&src[name_end..close], dir, &mut out);
		out.push('>');

		from = close + 1;
		pos = from;
	}

	if from == 0 { Cow::Borrowed(src) }
	else {
		out.push_str(&src[from..]);
		Cow::Owned(out)
	}
}

/// # Substitute Closing Tags.
///
/// A closing tag is `</`, one or more word characters, then `>`.
///
/// Returns `None` if there were no changes.
fn substitute_closing_tags(src: &str, dir: Direction) -> Option<String> {
	let bytes = src.as_bytes();
	let mut out = String::new();
	let mut from = 0;
	let mut pos = 0;
	let mut changed = false;

	while let Some(off) = bytes[pos..].windows(2).position(|w| w == b"</") {
		let name_start = pos + off + 2;
		let name_end = name_start + word_len(&bytes[name_start..]);
		pos = pos + off + 1;

		if name_start == name_end || bytes.get(name_end) != Some(&b'>') { continue; }

		let name = &src[name_start..name_end];
		if let Some(swap) = dir.tag(name) {
			if ! changed {
				out.reserve(src.len());
				changed = true;
			}
			out.push_str(&src[from..name_start]);
			out.push_str(swap);
			from = name_end;
		}
		pos = name_end + 1;
	}

	if changed {
		out.push_str(&src[from..]);
		Some(out)
	}
	else { None }
}



/// # Word Character Count.
///
/// Count the leading `[A-Za-z0-9_]` bytes.
fn word_len(src: &[u8]) -> usize {
	src.iter().take_while(|&&b| b.is_ascii_alphanumeric() || b == b'_').count()
}

/// # Is (HTML) Whitespace?
const fn is_whitespace(b: u8) -> bool {
	matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}
