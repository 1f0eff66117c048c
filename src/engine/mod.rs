//! Selection and ordering over parsed records.

/// Confirmation-status selections and band restriction.
pub mod filter;
/// Band-plan ordering.
pub mod sort;

use crate::{
    qso::QsoRecord,
    types::{BandFilter, FilterKind},
};

/// Selection in display order: band-plan order, except country listings
/// which keep their country-name order.
pub fn query<'a>(records: &'a [QsoRecord], kind: FilterKind, band: &BandFilter) -> Vec<&'a QsoRecord> {
    let selected = filter::filter_records(records, kind, band);
    if kind.sorts_by_band() {
        sort::sort_by_band(selected)
    } else {
        selected
    }
}
