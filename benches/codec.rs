/*!
# Benchmark: `m8`
*/

use criterion::{
	Criterion,
	criterion_group,
	criterion_main,
};
use m8::Direction;
use std::path::PathBuf;



fn collapse_whitespace(c: &mut Criterion) {
	let mut group = c.benchmark_group("m8::collapse_whitespace");

	group.bench_function(format!("{:?}", "<ul>\n\t<li>One</li>\n\t<li>Two</li>\n</ul>"), move |b| {
		b.iter(|| m8::collapse_whitespace("<ul>\n\t<li>One</li>\n\t<li>Two</li>\n</ul>"))
	});

	group.finish();
}

fn substitute_attribute_names(c: &mut Criterion) {
	let mut group = c.benchmark_group("m8::substitute_attribute_names");

	group.bench_function(format!("{:?}", r#" class="a" id="b" data-x="y" href="/""#), move |b| {
		b.iter_with_setup(
			|| String::with_capacity(64),
			|mut out| {
				m8::substitute_attribute_names(r#" class="a" id="b" data-x="y" href="/""#, Direction::Compress, &mut out);
				out
			}
		)
	});

	group.finish();
}

fn codec(c: &mut Criterion) {
	let path = PathBuf::from("skel/test-assets/index.source.html");
	let raw = std::fs::read_to_string(&path).unwrap();
	let packed = m8::compress(&raw);

	let mut group = c.benchmark_group("m8");

	group.bench_function("compress(index.source.html)", |b| {
		b.iter(|| m8::compress(&raw))
	});

	group.bench_function("decompress(index.m8)", |b| {
		b.iter(|| m8::decompress(&packed))
	});

	group.finish();
}



criterion_group!(
	benches,
	codec,
	collapse_whitespace,
	substitute_attribute_names,
);
criterion_main!(benches);
