use proptest::prelude::*;

use qslfilter::{
    adif::parse_adif,
    core::indices::BandDxccKey,
    engine::{filter::filter_records, sort::{band_sort_key, sort_by_band}},
    qso::QsoRecord,
    types::{BandFilter, FilterKind},
};

const BANDS: [&str; 8] = ["160m", "40m", "20m", "20M", "6m", "70cm", "", "SAT"];
const DXCCS: [&str; 5] = ["230", "339", "291", "1", ""];
const FLAGS: [&str; 4] = ["Y", "N", "y", ""];

#[derive(Debug, Clone)]
struct Qso {
    call_idx: u16,
    band: usize,
    dxcc: usize,
    lotw: usize,
    qsl: usize,
}

fn qso_strategy() -> impl Strategy<Value = Qso> {
    (0u16..500, 0..BANDS.len(), 0..DXCCS.len(), 0..FLAGS.len(), 0..FLAGS.len())
        .prop_map(|(call_idx, band, dxcc, lotw, qsl)| Qso { call_idx, band, dxcc, lotw, qsl })
}

fn tag(name: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("<{name}:{}>{value}", value.chars().count())
    }
}

fn render(qsos: &[Qso]) -> String {
    qsos.iter()
        .map(|q| {
            format!(
                "{}{}{}{}{}<eor>\n",
                tag("CALL", &format!("K{}AA", q.call_idx)),
                tag("BAND", BANDS[q.band]),
                tag("DXCC", DXCCS[q.dxcc]),
                tag("LOTW_QSL_RCVD", FLAGS[q.lotw]),
                tag("QSL_RCVD", FLAGS[q.qsl]),
            )
        })
        .collect()
}

fn band_filter_strategy() -> impl Strategy<Value = BandFilter> {
    prop_oneof![
        Just(BandFilter::All),
        (0..BANDS.len()).prop_map(|i| BandFilter::parse(BANDS[i])),
    ]
}

fn same(a: &QsoRecord, b: &QsoRecord) -> bool {
    std::ptr::eq(a, b)
}

proptest! {
    #[test]
    fn parse_keeps_every_record_in_order(qsos in prop::collection::vec(qso_strategy(), 0..60)) {
        let records = parse_adif(&render(&qsos));
        prop_assert_eq!(records.len(), qsos.len());
        for (rec, q) in records.iter().zip(&qsos) {
            let expected_call = format!("K{}AA", q.call_idx);
            prop_assert_eq!(rec.call(), expected_call.as_str());
            let confirmed = FLAGS[q.lotw] == "Y" || FLAGS[q.qsl] == "Y";
            prop_assert_eq!(rec.is_confirmed(), confirmed);
        }
    }

    #[test]
    fn text_without_eor_never_yields_records(text in "[^<]*(<[a-z_]{1,8}:[0-9]{1,2}>[A-Z0-9]{0,6})*") {
        prop_assume!(!text.to_lowercase().contains("<eor>"));
        prop_assert!(parse_adif(&text).is_empty());
    }

    #[test]
    fn confirmed_and_unconfirmed_partition(
        qsos in prop::collection::vec(qso_strategy(), 0..60),
        band in band_filter_strategy(),
    ) {
        let records = parse_adif(&render(&qsos));
        let confirmed = filter_records(&records, FilterKind::Confirmed, &band);
        let unconfirmed = filter_records(&records, FilterKind::Unconfirmed, &band);
        let all = filter_records(&records, FilterKind::All, &band);

        prop_assert_eq!(confirmed.len() + unconfirmed.len(), all.len());
        prop_assert!(confirmed.iter().all(|r| r.is_confirmed()));
        prop_assert!(unconfirmed.iter().all(|r| !r.is_confirmed()));
        prop_assert!(all.iter().all(|r| band.matches(r.band())));
    }

    #[test]
    fn country_listing_has_unique_nonempty_dxcc(
        qsos in prop::collection::vec(qso_strategy(), 0..60),
        band in band_filter_strategy(),
    ) {
        let records = parse_adif(&render(&qsos));
        let countries = filter_records(&records, FilterKind::ConfirmedCountries, &band);
        let mut seen = std::collections::HashSet::new();
        for rec in countries {
            prop_assert!(rec.is_confirmed());
            prop_assert!(!rec.dxcc().is_empty());
            prop_assert!(band.matches(rec.band()));
            prop_assert!(seen.insert(rec.dxcc().to_string()));
        }
    }

    #[test]
    fn needed_records_never_share_a_confirmed_pair(
        qsos in prop::collection::vec(qso_strategy(), 0..60),
        band in band_filter_strategy(),
    ) {
        let records = parse_adif(&render(&qsos));
        let confirmed_pairs: Vec<BandDxccKey<'_>> = records
            .iter()
            .filter(|r| r.is_confirmed())
            .filter_map(BandDxccKey::of)
            .collect();

        for rec in filter_records(&records, FilterKind::UnconfirmedNoQsl, &band) {
            prop_assert!(!rec.is_confirmed());
            if let Some(key) = BandDxccKey::of(rec) {
                prop_assert!(!confirmed_pairs.contains(&key));
            }
        }
    }

    #[test]
    fn band_sort_is_a_stable_descending_permutation(qsos in prop::collection::vec(qso_strategy(), 0..60)) {
        let records = parse_adif(&render(&qsos));
        let sorted = sort_by_band(records.iter().collect::<Vec<_>>());
        prop_assert_eq!(sorted.len(), records.len());

        for pair in sorted.windows(2) {
            let (a, b) = (band_sort_key(pair[0].band()), band_sort_key(pair[1].band()));
            prop_assert!(a >= b);
            if a == b {
                let pos_a = records.iter().position(|r| same(r, pair[0]));
                let pos_b = records.iter().position(|r| same(r, pair[1]));
                prop_assert!(pos_a < pos_b);
            }
        }
    }
}
