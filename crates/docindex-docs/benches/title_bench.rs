use criterion::{Criterion, criterion_group, criterion_main};
use docindex_docs::{TitleParts, title};
use std::hint::black_box;

/// A document roughly the size of a typical page in the document directory
fn sample_document() -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html lang=\"ko\"><head><meta charset=\"utf-8\">\
         <title>Detail : Usage : review</title></head><body>",
    );
    for i in 0..200 {
        html.push_str(&format!(
            "<div class=\"row\"><p>Paragraph {i} with <a href=\"#\">a link</a></p></div>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn title_benchmarks(c: &mut Criterion) {
    let html = sample_document();

    let mut group = c.benchmark_group("title");
    group.bench_function("element_text", |b| {
        b.iter(|| title::element_text(black_box(&html), "title"))
    });
    group.bench_function("split", |b| {
        b.iter(|| TitleParts::split(black_box("Detail : Usage : review")))
    });
    group.finish();
}

criterion_group!(benches, title_benchmarks);
criterion_main!(benches);
