use log::debug;

use crate::{
    core::indices::{BandDxccKey, KeySet},
    qso::QsoRecord,
    types::{BandFilter, FilterKind},
};

/// Selects records by confirmation status and band.
///
/// Every kind except [`FilterKind::ConfirmedCountries`] returns records in
/// source order with `band` applied last. `ConfirmedCountries` applies
/// `band` first and returns country-name order.
pub fn filter_records<'a>(
    records: &'a [QsoRecord],
    kind: FilterKind,
    band: &BandFilter,
) -> Vec<&'a QsoRecord> {
    let selected: Vec<&QsoRecord> = match kind {
        FilterKind::Confirmed => records.iter().filter(|r| r.is_confirmed()).collect(),
        FilterKind::ConfirmedCountries => {
            let out = confirmed_countries(records, band);
            debug!("filter {kind} on {band}: {} of {} records", out.len(), records.len());
            return out;
        }
        FilterKind::Unconfirmed => records.iter().filter(|r| !r.is_confirmed()).collect(),
        FilterKind::UnconfirmedNoQsl => unconfirmed_without_band_confirmation(records),
        FilterKind::All => records.iter().collect(),
    };

    let out = restrict_to_band(selected, band);
    debug!("filter {kind} on {band}: {} of {} records", out.len(), records.len());
    out
}

fn restrict_to_band<'a>(records: Vec<&'a QsoRecord>, band: &BandFilter) -> Vec<&'a QsoRecord> {
    if band.is_all() {
        return records;
    }
    records.into_iter().filter(|r| band.matches(r.band())).collect()
}

// One record per non-empty DXCC, first seen after a stable sort on COUNTRY.
fn confirmed_countries<'a>(records: &'a [QsoRecord], band: &BandFilter) -> Vec<&'a QsoRecord> {
    let mut confirmed: Vec<&QsoRecord> = records
        .iter()
        .filter(|r| r.is_confirmed() && band.matches(r.band()))
        .collect();
    confirmed.sort_by_cached_key(|r| r.country().to_uppercase());

    let mut seen: KeySet<&str> = KeySet::new();
    confirmed
        .into_iter()
        .filter(|r| !r.dxcc().is_empty() && seen.insert(r.dxcc()))
        .collect()
}

// Pairs are collected from the whole collection, independent of any band restriction.
fn unconfirmed_without_band_confirmation(records: &[QsoRecord]) -> Vec<&QsoRecord> {
    let confirmed_pairs: KeySet<BandDxccKey<'_>> = records
        .iter()
        .filter(|r| r.is_confirmed())
        .filter_map(BandDxccKey::of)
        .collect();

    records
        .iter()
        .filter(|r| !r.is_confirmed())
        .filter(|r| match BandDxccKey::of(r) {
            Some(key) => !confirmed_pairs.contains(&key),
            None => true,
        })
        .collect()
}
