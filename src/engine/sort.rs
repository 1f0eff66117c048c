use std::borrow::Borrow;

use crate::qso::QsoRecord;

/// Key for bands that are missing or cannot be read.
pub const UNKNOWN_BAND_KEY: f64 = 999.0;

/// Wavelength in meters used to order bands.
///
/// `70cm` reads as `0.7`, `20m` as `20`. Anything else is
/// [`UNKNOWN_BAND_KEY`].
pub fn band_sort_key(band: &str) -> f64 {
    let band = band.to_lowercase();
    let (number, divisor) = if let Some(idx) = band.find("cm") {
        (&band[..idx], 100.0)
    } else if let Some(idx) = band.find('m') {
        (&band[..idx], 1.0)
    } else {
        return UNKNOWN_BAND_KEY;
    };

    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value / divisor,
        _ => UNKNOWN_BAND_KEY,
    }
}

/// Stable descending sort on [`band_sort_key`]: 160m, 80m, ... 6m, 2m, 70cm.
///
/// Unknown bands carry the largest key and therefore lead.
pub fn sort_by_band<T: Borrow<QsoRecord>>(records: Vec<T>) -> Vec<T> {
    sort_descending(records, |rec| band_sort_key(rec.borrow().band()))
}

/// Same ordering applied to bare band labels.
pub fn sort_band_labels<S: AsRef<str>>(labels: Vec<S>) -> Vec<S> {
    sort_descending(labels, |label| band_sort_key(label.as_ref()))
}

fn sort_descending<T>(items: Vec<T>, key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut keyed: Vec<(f64, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
    // slice::sort_by is stable, so ties keep their input order.
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}
