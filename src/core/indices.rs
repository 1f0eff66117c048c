use hashbrown::HashSet;

use crate::qso::QsoRecord;

/// `(BAND, DXCC)` pair borrowed from a record, compared as exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandDxccKey<'a> {
    pub band: &'a str,
    pub dxcc: &'a str,
}

impl<'a> BandDxccKey<'a> {
    /// `None` when either half is empty.
    pub fn of(rec: &'a QsoRecord) -> Option<Self> {
        let (band, dxcc) = (rec.band(), rec.dxcc());
        if band.is_empty() || dxcc.is_empty() {
            return None;
        }
        Some(Self { band, dxcc })
    }
}

pub type KeySet<K> = HashSet<K>;
