use std::path::{Path, PathBuf};

use hashbrown::HashSet;

use crate::{
    engine::{
        self,
        filter::filter_records,
        sort::sort_band_labels,
    },
    qso::QsoRecord,
    types::{BandFilter, FilterKind},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<QsoRecord>,
    source: Option<PathBuf>,
}

impl RecordSet {
    pub fn from_records(records: Vec<QsoRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    pub fn with_source(records: Vec<QsoRecord>, source: impl AsRef<Path>) -> Self {
        Self {
            records,
            source: Some(source.as_ref().to_path_buf()),
        }
    }

    /// File the records were parsed from, when known.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn records(&self) -> &[QsoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn confirmed_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_confirmed()).count()
    }

    /// Distinct non-empty bands in band-plan order.
    ///
    /// Labels differing only in case collapse to the first spelling seen.
    pub fn bands(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let bands: Vec<&str> = self
            .records
            .iter()
            .map(QsoRecord::band)
            .filter(|band| !band.is_empty() && seen.insert(band.to_lowercase()))
            .collect();
        sort_band_labels(bands)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn filter(&self, kind: FilterKind, band: &BandFilter) -> Vec<&QsoRecord> {
        filter_records(&self.records, kind, band)
    }

    pub fn query(&self, kind: FilterKind, band: &BandFilter) -> Vec<&QsoRecord> {
        engine::query(&self.records, kind, band)
    }
}
