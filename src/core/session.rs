use std::path::Path;

use log::{info, warn};

use crate::{
    adif::parser::{parse_adif, parse_file},
    core::store::RecordSet,
    error::ReadError,
    qso::QsoRecord,
    types::{BandFilter, FilterKind},
};

/// Owner of the most recently loaded [`RecordSet`].
///
/// Each successful load replaces the previous set wholesale. A failed load
/// leaves the previous set untouched.
#[derive(Debug, Default)]
pub struct QslLog {
    current: Option<RecordSet>,
}

impl QslLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and makes it the current set. Returns the record count.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ReadError> {
        let path = path.as_ref();
        match parse_file(path) {
            Ok(set) => {
                info!("loaded {} records from {}", set.len(), path.display());
                Ok(self.replace(set))
            }
            Err(err) => {
                warn!("load failed: {err}");
                Err(err)
            }
        }
    }

    /// Parses in-memory ADIF text and makes it the current set.
    pub fn load_str(&mut self, content: &str) -> usize {
        let set = RecordSet::from_records(parse_adif(content));
        info!("loaded {} records from text", set.len());
        self.replace(set)
    }

    /// Installs an already parsed set.
    pub fn replace(&mut self, set: RecordSet) -> usize {
        let len = set.len();
        self.current = Some(set);
        len
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn record_set(&self) -> Option<&RecordSet> {
        self.current.as_ref()
    }

    /// Current records, empty when nothing is loaded.
    pub fn records(&self) -> &[QsoRecord] {
        self.current.as_ref().map(RecordSet::records).unwrap_or(&[])
    }

    /// Selection without display ordering. Empty when nothing is loaded.
    pub fn filter_records(&self, kind: FilterKind, band: &BandFilter) -> Vec<&QsoRecord> {
        self.current
            .as_ref()
            .map(|set| set.filter(kind, band))
            .unwrap_or_default()
    }

    /// Selection in display order. Empty when nothing is loaded.
    pub fn query(&self, kind: FilterKind, band: &BandFilter) -> Vec<&QsoRecord> {
        self.current
            .as_ref()
            .map(|set| set.query(kind, band))
            .unwrap_or_default()
    }

    pub fn bands(&self) -> Vec<String> {
        self.current
            .as_ref()
            .map(RecordSet::bands)
            .unwrap_or_default()
    }

    /// e.g. `Loaded 42 records from log.adi`.
    pub fn load_summary(&self) -> Option<String> {
        let set = self.current.as_ref()?;
        let name = set
            .source()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "text".to_string());
        Some(format!("Loaded {} records from {name}", set.len()))
    }

    /// e.g. `Showing 3 confirmed records on 20m`.
    pub fn status_line(kind: FilterKind, band: &BandFilter, shown: usize) -> String {
        let mut line = format!("Showing {shown} {} records", kind.description());
        if let BandFilter::Band(label) = band {
            line.push_str(" on ");
            line.push_str(label);
        }
        line
    }
}
