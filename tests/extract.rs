// tests/extract.rs
mod common;

use common::{Scripted, detail, detail_url, listing, row};
use cpska_export::TrackType;
use cpska_export::specs::flight::FlightExtractor;
use cpska_export::specs::listing::ListingPage;
use cpska_export::tables::Lookups;

#[test]
fn extraction_is_repeatable() {
    let page = ListingPage::parse(0, &listing(&[row(5, "05.07.2023", "Novák Petr", "812.4")]));
    let fetcher = Scripted::new().serve(
        detail_url(5),
        detail("Duo Discus", "OK-1948", "polygon s 4OB", Some("Svoboda Jan")),
    );
    let extractor = FlightExtractor::new(&fetcher, Lookups::builtin());

    let row = page.rows()[0];
    let first = extractor.extract(row).unwrap();
    let second = extractor.extract(row).unwrap();
    assert_eq!(first, second);

    let rec = first.record.unwrap();
    assert_eq!(rec.copilot, "Svoboda Jan");
    assert_eq!(rec.plane_acronym, Some("GV"));
    assert_eq!(rec.track_shape, Some("P4"));
    assert_eq!(rec.track_type, TrackType::Standard);
}

#[test]
fn unknown_shape_and_registration_stay_blank() {
    let page = ListingPage::parse(0, &listing(&[row(6, "06.07.2023", "Novák Petr", "99.9")]));
    let fetcher = Scripted::new().serve(detail_url(6), detail("Std Cirrus", "D-1234", "osmička", None));

    let flight = FlightExtractor::new(&fetcher, Lookups::builtin())
        .extract(page.rows()[0])
        .unwrap();
    let rec = flight.record.unwrap();
    assert_eq!(rec.aircraft_registration, "1234");
    assert_eq!(rec.plane_acronym, None);
    assert_eq!(rec.track_shape, None);
}
