// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cpska_export::specs::flight::{date, distance, flight_url, locality, pilot, points};
use cpska_export::specs::listing::ListingPage;

fn sample_listing(n: usize) -> String {
    let rows: String = (0..n)
        .map(|i| {
            let class = if i % 2 == 0 { "rowEven" } else { "rowOdd" };
            let pts = if i % 3 == 0 { String::new() } else { format!("{}.{} b", 100 + i, i % 10) };
            format!(
                r#"<tr class="{class}"><td class="cllDatum"><a href="index3.php?lpg=let&amp;id={i}">05.07.2023</a></td><td class="jmeno"><a href="#">Novák Petr</a></td><td>Raná</td><td class="cllVzdal">312.5 km</td><td class="cllVzdal">85.2 km/h</td><td class="cllBody">{pts}</td><td><a href="index3.php?lpg=let&amp;id={i}">detail</a></td></tr>"#
            )
        })
        .collect();
    format!(r#"<html><body><table class="tblList">{rows}</table></body></html>"#)
}

fn bench_listing(c: &mut Criterion) {
    let body = sample_listing(100);

    c.bench_function("listing_parse", |b| {
        b.iter(|| {
            let page = ListingPage::parse(0, black_box(&body));
            black_box(page.rows().len())
        })
    });

    let page = ListingPage::parse(0, &body);
    c.bench_function("row_fields", |b| {
        b.iter(|| {
            for row in page.rows() {
                black_box(flight_url(row));
                if points(row).is_some() {
                    black_box((date(row), pilot(row), distance(row, 0), distance(row, 1), locality(row)));
                }
            }
        })
    });
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
