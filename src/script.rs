/*!
# M8: Browser Scripts.

The browser half of the codec. The decompressor is rendered as JavaScript
from the same dictionaries the Rust side uses, then dropped into either the
generic loader page (which fetches its `.m8` over the network) or a
self-contained page (which carries its own payload).
*/

use crate::{
	compress,
	dict::{
		ATTRS,
		TAGS,
	},
	Savings,
};
use std::sync::LazyLock;



/// # Decompressor Head.
///
/// The tag table (`t`) and attribute table (`a`) are spliced in after this.
const DECOMPRESSOR_HEAD: &str = "function m8d(m){\nvar t=";

/// # Decompressor Body.
///
/// This mirrors `codec::decompress`: opening tags (and their attribute
/// sections) first, then closing tags, keeping whatever whitespace sat in
/// front of each attribute.
const DECOMPRESSOR_BODY: &str = r"var k=function(o,n){return Object.prototype.hasOwnProperty.call(o,n)?o[n]:n;};
var h=m.replace(/<(\w+)([^>]*)>/g,function(_,g,r){
for(var s in a){r=r.replace(new RegExp('([\\t\\n\\f\\r ])'+s+'=','g'),'$1'+a[s]+'=');}
return '<'+k(t,g)+r+'>';
});
return h.replace(/<\/(\w+)>/g,function(_,g){return '<\/'+k(t,g)+'>';});
}
";

/// # Loader Page: Open.
const LOADER_OPEN: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Loading .m8...</title>
</head>
<body>
<div style="text-align:center;padding:50px;font-family:sans-serif;">
<h2>Loading .m8 content...</h2>
<p style="color:#666;">Decompressing page...</p>
</div>
<script>
(function(){
if(window.m8Loaded)return;
window.m8Loaded=true;
"#;

/// # Loader Page: Close.
const LOADER_CLOSE: &str = r#"var p=window.location.pathname;
var u=/\/$/.test(p)?p+'index.m8':p.replace(/\.html$/i,'.m8');
fetch(u)
.then(function(r){
if(!r.ok)return r.text().then(function(b){throw new Error(b||('HTTP '+r.status));});
return r.text();
})
.then(function(m){
var html=m8d(m);
document.open();
document.write(html);
document.close();
})
.catch(function(e){
document.body.innerHTML='<div style="text-align:center;padding:50px;font-family:sans-serif;"><h1 style="color:#e53e3e;">Error Loading .m8</h1><p id="m8-error" style="white-space:pre-wrap;"></p><p style="color:#666;margin-top:20px;">Make sure the .source.html file exists</p></div>';
document.getElementById('m8-error').textContent=e.message;
});
})();
</script>
</body>
</html>"#;

/// # Self-Contained Page: Open.
const PACKED_OPEN: &str = r#"<!DOCTYPE html>
<html><head><meta charset="UTF-8"><title>Loading...</title></head><body>
<script>
(function(){
var m8='"#;

/// # Self-Contained Page: Middle.
///
/// This closes the payload literal.
const PACKED_MID: &str = "';\n";

/// # Self-Contained Page: Close.
const PACKED_CLOSE: &str = "var html=m8d(m8);
document.open();
document.write(html);
document.close();
})();
</script>
</body></html>";



/// # Decompressor Script.
static DECOMPRESSOR: LazyLock<String> = LazyLock::new(|| {
	let mut out = String::with_capacity(2048);
	out.push_str(DECOMPRESSOR_HEAD);
	push_table(&mut out, TAGS);
	out.push_str(";\nvar a=");
	push_table(&mut out, ATTRS);
	out.push_str(";\n");
	out.push_str(DECOMPRESSOR_BODY);
	out
});

/// # Loader Page.
static LOADER: LazyLock<String> = LazyLock::new(|| {
	let mut out = String::with_capacity(LOADER_OPEN.len() + DECOMPRESSOR.len() + LOADER_CLOSE.len());
	out.push_str(LOADER_OPEN);
	out.push_str(&DECOMPRESSOR);
	out.push_str(LOADER_CLOSE);
	out
});



#[must_use]
/// # Decompressor.
///
/// Return the JavaScript source for a function `m8d(m8) -> html` that
/// behaves exactly like [`decompress`](crate::decompress). It touches
/// nothing but its argument, so it can be embedded anywhere.
pub fn decompressor() -> &'static str { DECOMPRESSOR.as_str() }

#[must_use]
/// # Loader Page.
///
/// The generic page served in place of every viewer resource. It fetches
/// the sibling `.m8` resource, decompresses it, and replaces the whole
/// document with the result, or shows an error panel if any of that fails.
pub fn loader() -> &'static str { LOADER.as_str() }

#[must_use]
/// # Escape for Script Literal.
///
/// Escape text so it can sit between single quotes in a JavaScript string
/// literal and read back exactly as it was.
///
/// A `</` is written as `<\/` so the payload can never close the `<script>`
/// element it lives in.
pub fn escape_literal(src: &str) -> String {
	let mut out = String::with_capacity(src.len() + src.len() / 16);
	let mut chars = src.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			'\\' => { out.push_str(r"\\"); },
			'\'' => { out.push_str(r"\'"); },
			'\n' => { out.push_str(r"\n"); },
			'\r' => { out.push_str(r"\r"); },
			'\t' => { out.push_str(r"\t"); },
			'\u{2028}' => { out.push_str(r"\u2028"); },
			'\u{2029}' => { out.push_str(r"\u2029"); },
			'<' if chars.peek() == Some(&'/') => {
				chars.next();
				out.push_str(r"<\/");
			},
			c => { out.push(c); },
		}
	}

	out
}



#[derive(Debug, Clone)]
/// # Self-Contained Page.
///
/// A single HTML document carrying both the compressed payload and the
/// decompressor, needing no network access to render.
pub struct Packed {
	/// # Page Source.
	html: String,

	/// # Original Size.
	original: usize,

	/// # Compressed Size.
	compressed: usize,
}

impl From<&str> for Packed {
	fn from(src: &str) -> Self {
		let m8 = compress(src);
		let escaped = escape_literal(&m8);

		let decompressor = decompressor();
		let mut html = String::with_capacity(
			PACKED_OPEN.len() + escaped.len() + PACKED_MID.len() +
			decompressor.len() + PACKED_CLOSE.len()
		);
		html.push_str(PACKED_OPEN);
		html.push_str(&escaped);
		html.push_str(PACKED_MID);
		html.push_str(decompressor);
		html.push_str(PACKED_CLOSE);

		Self {
			html,
			original: src.len(),
			compressed: m8.len(),
		}
	}
}

impl Packed {
	#[must_use]
	/// # As Str.
	pub fn as_str(&self) -> &str { &self.html }

	#[must_use]
	/// # Into String.
	pub fn into_string(self) -> String { self.html }

	#[must_use]
	/// # Original Size.
	pub const fn original(&self) -> usize { self.original }

	#[must_use]
	/// # Compressed Size.
	pub const fn compressed(&self) -> usize { self.compressed }

	#[must_use]
	/// # Self-Contained Size.
	pub fn size(&self) -> usize { self.html.len() }

	#[must_use]
	/// # Decompressor Overhead.
	///
	/// Everything in the page that isn't the (unescaped) payload.
	pub fn overhead(&self) -> usize { self.size().saturating_sub(self.compressed) }

	#[must_use]
	/// # Compression Savings.
	///
	/// Original versus compressed, ignoring the page wrapper.
	pub const fn compression(&self) -> Savings {
		Savings::new(self.original, self.compressed)
	}

	#[must_use]
	/// # Net Savings.
	///
	/// Original versus the whole self-contained page. Small documents
	/// usually come out negative.
	pub fn net(&self) -> Savings { Savings::new(self.original, self.size()) }
}



/// # Push Table.
///
/// Write a dictionary as a JavaScript object literal keyed by token.
fn push_table(out: &mut String, table: &[(&str, &str)]) {
	out.push('{');
	for (idx, (name, token)) in table.iter().enumerate() {
		if idx != 0 { out.push(','); }
		out.push('\'');
		out.push_str(token);
		out.push_str("':'");
		out.push_str(name);
		out.push('\'');
	}
	out.push('}');
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Unescape (JavaScript) Literal.
	///
	/// Read back the escapes a JS engine would, for the subset we write.
	fn unescape(src: &str) -> String {
		let mut out = String::with_capacity(src.len());
		let mut chars = src.chars();
		while let Some(c) = chars.next() {
			if c != '\\' {
				out.push(c);
				continue;
			}
			match chars.next() {
				Some('n') => out.push('\n'),
				Some('r') => out.push('\r'),
				Some('t') => out.push('\t'),
				Some('u') => {
					let hex: String = chars.by_ref().take(4).collect();
					let n = u32::from_str_radix(&hex, 16).expect("Bad escape.");
					out.push(char::from_u32(n).expect("Bad escape."));
				},
				Some(c) => out.push(c),
				None => panic!("Dangling escape."),
			}
		}
		out
	}

	#[test]
	fn t_escape() {
		for (lhs, rhs) in [
			("", ""),
			("<1 c=\"a\">", "<1 c=\"a\">"),
			(r"a\b", r"a\\b"),
			("it's", r"it\'s"),
			("a\nb", r"a\nb"),
			("a\r\nb", r"a\r\nb"),
			("a\rb\tc", r"a\rb\tc"),
			("</32>", r"<\/32>"),
			("</script>", r"<\/script>"),
			("a < /b", "a < /b"),
			("\u{2028}", r"\u2028"),
		] {
			let escaped = escape_literal(lhs);
			assert_eq!(escaped, rhs, "{lhs:?}");
			assert!(! escaped.contains('\n'));
			assert!(! escaped.contains("</"));
			assert_eq!(unescape(&escaped), lhs);
		}
	}

	#[test]
	fn t_escape_payload() {
		// Every character a compressed payload could contain must survive.
		let raw = "<div class='x'>back\\slash</div>\n<pre>\ta\r\n</pre><script>if(a<b){}</script>";
		let m8 = compress(raw);
		let escaped = escape_literal(&m8);
		assert!(! escaped.contains(['\n', '\r', '\t']));
		assert_eq!(unescape(&escaped), m8);
	}

	#[test]
	fn t_decompressor() {
		let js = decompressor();
		assert!(js.starts_with("function m8d(m){"));
		assert!(js.ends_with("}\n"));
		assert!(js.contains("var t={'1':'div','2':'span',"));
		assert!(js.contains("'50':'ins'};"));
		assert!(js.contains("var a={'c':'class','i':'id',"));
		assert!(js.contains("'p':'placeholder'};"));

		// Every entry made it.
		for (name, token) in TAGS.iter().chain(ATTRS) {
			assert!(js.contains(&format!("'{token}':'{name}'")));
		}

		// It has to be able to live inside a script element.
		assert!(! js.contains("</"));
	}

	/// # Run Under Node.
	///
	/// Evaluate `script` with `stdin` piped in, returning whatever it writes
	/// to STDOUT, or `None` if `node` isn't installed.
	fn node(script: &str, stdin: &str) -> Option<String> {
		use std::{
			io::Write,
			process::{
				Command,
				Stdio,
			},
		};

		let mut child = Command::new("node")
			.arg("-e")
			.arg(script)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.spawn()
			.ok()?;

		child.stdin.take()
			.expect("Missing STDIN.")
			.write_all(stdin.as_bytes())
			.expect("Unable to write STDIN.");

		let out = child.wait_with_output().expect("Node failed.");
		assert!(out.status.success(), "Node exited with {}.", out.status);
		Some(String::from_utf8(out.stdout).expect("Output is not UTF-8."))
	}

	/// # Tricky Input.
	fn tricky() -> String {
		let mut raw = String::from(include_str!("../skel/test-assets/index.source.html"));
		raw.push_str("<p title=\"it's a\\b\"\tclass=\"x\">a\r\nb</p>\n");
		raw.push_str("<toString id=\"constructor\"><constructor></constructor></toString>");
		raw.push_str("<script>if(a<b){}</script>\u{2028}");
		raw
	}

	#[test]
	fn t_decompressor_js() {
		let raw = tricky();
		let m8 = compress(&raw);
		let mut script = String::from(decompressor());
		script.push_str("process.stdout.write(m8d(require('fs').readFileSync(0,'utf8')));");

		let Some(out) = node(&script, &m8) else { return; };
		assert_eq!(out, crate::decompress(&m8));
		assert_eq!(out, crate::collapse_whitespace(&raw).unwrap_or(raw));
	}

	#[test]
	fn t_packed_js() {
		let raw = tricky();
		let packed = Packed::from(raw.as_str());
		let html = packed.as_str();

		// Run the page script with a stand-in document.
		let start = html.find("<script>\n").expect("Missing script.") + 9;
		let end = start + html[start..].find("</script>").expect("Missing script end.");
		let mut script = String::from(
			"var out='';var document={open:function(){},write:function(h){out+=h;},close:function(){}};\n"
		);
		script.push_str(&html[start..end]);
		script.push_str("\nprocess.stdout.write(out);");

		let Some(out) = node(&script, "") else { return; };
		assert_eq!(out, crate::decompress(&compress(&raw)));
	}

	#[test]
	fn t_loader() {
		let page = loader();
		assert!(page.starts_with("<!DOCTYPE html>"));
		assert!(page.ends_with("</html>"));
		assert!(page.contains(decompressor()));
		assert!(page.contains("fetch(u)"));
		assert!(page.contains("Make sure the .source.html file exists"));
		assert_eq!(page.matches("<script>").count(), 1);
		assert_eq!(page.matches("</script>").count(), 1);
	}

	#[test]
	fn t_packed() {
		let raw = include_str!("../skel/test-assets/index.source.html");
		let m8 = compress(raw);
		let packed = Packed::from(raw);
		let html = packed.as_str();

		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains(decompressor()));
		assert_eq!(html.matches("</script>").count(), 1);

		// Pull the payload back out.
		let start = html.find("var m8='").expect("Missing payload.") + 8;
		let end = start + html[start..].find(PACKED_MID).expect("Missing payload end.");
		assert_eq!(unescape(&html[start..end]), m8);

		// Sizes add up.
		assert_eq!(packed.original(), raw.len());
		assert_eq!(packed.compressed(), m8.len());
		assert_eq!(packed.size(), html.len());
		assert_eq!(packed.overhead(), html.len() - m8.len());
		assert_eq!(packed.compression(), Savings::new(raw.len(), m8.len()));
		assert_eq!(packed.net(), Savings::new(raw.len(), html.len()));
		assert!(packed.net().percent() < packed.compression().percent());
	}
}
