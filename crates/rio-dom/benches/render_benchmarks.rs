//! Benchmark: render throughput and lazy mapping vs pre-built groups

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rio_dom::{
	Node, Render, a, class, div, escape_html, group, href, li, map, p, text, ul,
};
use std::io;

fn page(rows: usize) -> Node {
	div([
		class("container"),
		ul([map(0..rows, |n: &usize| {
			li([a([href(format!("/items/{}", n)), text(format!("Item <{}> & more", n))])])
		})]),
		p([text("footer")]),
	])
}

fn benchmark_render_page(c: &mut Criterion) {
	let tree = page(100);

	c.bench_function("render_page_100_rows", |b| {
		b.iter(|| black_box(&tree).render(&mut io::sink()))
	});
}

fn benchmark_map_vs_group(c: &mut Criterion) {
	let mut bench_group = c.benchmark_group("map_vs_group");

	for size in [100usize, 10_000] {
		bench_group.throughput(Throughput::Elements(size as u64));

		// Transforms during render; no node list is ever held.
		let lazy = map(0..size, |n: &usize| li([text(n.to_string())]));
		bench_group.bench_with_input(BenchmarkId::new("map", size), &lazy, |b, tree| {
			b.iter(|| tree.render(&mut io::sink()))
		});

		// Builds the full node list first, then renders it.
		bench_group.bench_with_input(BenchmarkId::new("group", size), &size, |b, &size| {
			b.iter(|| {
				let eager = group((0..size).map(|n| li([text(n.to_string())])));
				eager.render(&mut io::sink())
			})
		});
	}

	bench_group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
	let safe = "The quick brown fox jumps over the lazy dog".repeat(20);
	let unsafe_text = "<script>alert('x' & \"y\")</script>".repeat(20);

	c.bench_function("escape_safe_text", |b| b.iter(|| escape_html(black_box(&safe))));
	c.bench_function("escape_special_text", |b| {
		b.iter(|| escape_html(black_box(&unsafe_text)))
	});
}

criterion_group!(
	benches,
	benchmark_render_page,
	benchmark_map_vs_group,
	benchmark_escaping
);
criterion_main!(benches);
