/*!
# M8: Dictionaries.

Tag and attribute names are swapped for short tokens using two small, fixed
tables. Both directions of the codec (and the generated browser-side
decompressor) read from these same tables, so they cannot drift apart.
*/



/// # Longest Tag Name.
const TAG_MAX: usize = 8;

/// # Longest Attribute Name.
pub(crate) const ATTR_MAX: usize = 11;



macro_rules! dictionary {
	(
		$table:ident $encode:ident $decode:ident $max:ident $ci:literal,
		$( $name:literal $token:literal, )+
	) => (
		/// # Name/Token Pairs.
		pub const $table: &[(&str, &str)] = &[ $( ($name, $token), )+ ];

		#[must_use]
		/// # Name to Token.
		pub fn $encode(name: &str) -> Option<&'static str> {
			let mut buf = [0_u8; $max];
			let name =
				if $ci { lowercase(name, &mut buf)? }
				else { name };

			match name {
				$( $name => Some($token), )+
				_ => None,
			}
		}

		#[must_use]
		/// # Token to Name.
		pub fn $decode(token: &str) -> Option<&'static str> {
			match token {
				$( $token => Some($name), )+
				_ => None,
			}
		}
	)
}

dictionary! {
	TAGS tag_token tag_name TAG_MAX true,
	"div"      "1",
	"span"     "2",
	"p"        "3",
	"a"        "4",
	"img"      "5",
	"h1"       "6",
	"h2"       "7",
	"h3"       "8",
	"h4"       "9",
	"h5"       "10",
	"ul"       "11",
	"ol"       "12",
	"li"       "13",
	"table"    "14",
	"tr"       "15",
	"td"       "16",
	"th"       "17",
	"header"   "18",
	"footer"   "19",
	"nav"      "20",
	"section"  "21",
	"article"  "22",
	"aside"    "23",
	"main"     "24",
	"form"     "25",
	"input"    "26",
	"button"   "27",
	"textarea" "28",
	"select"   "29",
	"option"   "30",
	"label"    "31",
	"script"   "32",
	"style"    "33",
	"link"     "34",
	"meta"     "35",
	"html"     "36",
	"head"     "37",
	"body"     "38",
	"title"    "39",
	"br"       "40",
	"hr"       "41",
	"strong"   "42",
	"em"       "43",
	"b"        "44",
	"i"        "45",
	"u"        "46",
	"small"    "47",
	"mark"     "48",
	"del"      "49",
	"ins"      "50",
}

// Attribute names are matched exactly; `CLASS=` stays `CLASS=`.
dictionary! {
	ATTRS attr_token attr_name ATTR_MAX false,
	"class"       "c",
	"id"          "i",
	"style"       "s",
	"src"         "r",
	"href"        "h",
	"alt"         "a",
	"title"       "t",
	"type"        "y",
	"name"        "n",
	"value"       "v",
	"placeholder" "p",
}



/// # ASCII Lowercase (Into Buffer).
///
/// Tag names are only ever made of word characters, so a fixed buffer is
/// plenty. Anything too long to be in the dictionary returns `None`.
fn lowercase<'a, const N: usize>(src: &'a str, buf: &'a mut [u8; N]) -> Option<&'a str> {
	let src = src.as_bytes();
	let out = buf.get_mut(..src.len())?;
	out.copy_from_slice(src);
	out.make_ascii_lowercase();
	std::str::from_utf8(out).ok()
}
