use std::{path::Path, sync::OnceLock};

use log::{debug, trace};
use regex::Regex;

use crate::{core::store::RecordSet, error::ReadError, qso::QsoRecord};

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static EOR_PATTERN: OnceLock<Regex> = OnceLock::new();

// <name>, <name:len> or <name:len:type>, then the value up to the next '<'.
fn tag_regex() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)<(?P<name>[^<>:]+)(?::(?P<length>\d+))?(?::(?P<kind>[^<>]*))?>(?P<value>[^<]*)")
            .expect("invalid ADIF tag pattern")
    })
}

fn eor_regex() -> &'static Regex {
    EOR_PATTERN.get_or_init(|| Regex::new(r"(?i)<eor>").expect("invalid ADIF end-of-record pattern"))
}

/// One tag occurrence inside a record chunk, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdifTag<'a> {
    /// Tag name as written.
    pub name: &'a str,
    /// Declared value length, if any.
    pub length: Option<usize>,
    /// Declared data type indicator, if any.
    pub data_type: Option<&'a str>,
    /// Text between the closing `>` and the next `<`.
    pub raw_value: &'a str,
}

impl AdifTag<'_> {
    /// Upper-cased, trimmed tag name.
    pub fn field_name(&self) -> String {
        self.name.trim().to_uppercase()
    }

    /// Trimmed value, cut to the declared length when one is given.
    ///
    /// A length longer than the available text keeps the whole value.
    pub fn value(&self) -> String {
        let value = self.raw_value.trim();
        match self.length {
            Some(len) => value.chars().take(len).collect(),
            None => value.to_string(),
        }
    }
}

/// Scans `chunk` for tags. Malformed tags are skipped, never fatal.
pub fn tokenize(chunk: &str) -> impl Iterator<Item = AdifTag<'_>> {
    tag_regex().captures_iter(chunk).filter_map(|caps| {
        let name = caps.name("name")?.as_str();
        Some(AdifTag {
            name,
            // An overflowing length behaves as if none was declared.
            length: caps.name("length").and_then(|m| m.as_str().parse().ok()),
            data_type: caps
                .name("kind")
                .map(|m| m.as_str())
                .filter(|kind| !kind.is_empty()),
            raw_value: caps.name("value").map_or("", |m| m.as_str()),
        })
    })
}

/// Assembles one chunk into a record; `None` when it lacks a non-empty `CALL`.
pub fn parse_record(chunk: &str) -> Option<QsoRecord> {
    let record = QsoRecord::from_fields(tokenize(chunk).map(|tag| (tag.field_name(), tag.value())));
    if record.is_none() {
        trace!("discarding ADIF chunk without CALL ({} bytes)", chunk.len());
    }
    record
}

/// Parses ADIF text into records, in source order.
///
/// Records are split on `<eor>` markers (any case). Text with no marker at
/// all yields nothing; once a marker is seen, an unterminated tail still
/// counts as a final record.
pub fn parse_adif(content: &str) -> Vec<QsoRecord> {
    let mut records = Vec::new();
    let mut discarded = 0usize;

    for chunk in record_chunks(content) {
        if chunk.trim().is_empty() {
            continue;
        }
        match parse_record(chunk) {
            Some(record) => records.push(record),
            None => discarded += 1,
        }
    }

    debug!(
        "parsed {} ADIF records, discarded {} chunks without CALL",
        records.len(),
        discarded
    );
    records
}

/// Decodes UTF-8 bytes and parses them.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<QsoRecord>, ReadError> {
    let content = std::str::from_utf8(bytes)?;
    Ok(parse_adif(content))
}

/// Reads and parses an ADIF file. Nothing is returned unless the whole file decodes.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RecordSet, ReadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = std::str::from_utf8(&bytes).map_err(|source| ReadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RecordSet::with_source(parse_adif(content), path))
}

fn record_chunks(content: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for m in eor_regex().find_iter(content) {
        chunks.push(&content[start..m.start()]);
        start = m.end();
    }
    // `start` only moves once a marker has been found.
    if start > 0 {
        chunks.push(&content[start..]);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qso::Field;

    #[test]
    fn tokenizer_reads_name_length_and_type() {
        let tags: Vec<_> = tokenize("<CALL:5>W1ABC <freq:6:N>14.074<qso_random>").collect();
        assert_eq!(tags.len(), 3);

        assert_eq!(tags[0].field_name(), "CALL");
        assert_eq!(tags[0].length, Some(5));
        assert_eq!(tags[0].value(), "W1ABC");

        assert_eq!(tags[1].field_name(), "FREQ");
        assert_eq!(tags[1].data_type, Some("N"));
        assert_eq!(tags[1].value(), "14.074");

        assert_eq!(tags[2].field_name(), "QSO_RANDOM");
        assert_eq!(tags[2].length, None);
        assert_eq!(tags[2].value(), "");
    }

    #[test]
    fn unterminated_tag_does_not_hide_following_tags() {
        let rec = parse_record("<band:3>20m <broken <call:5>K1ABC").expect("record");
        assert_eq!(rec.call(), "K1ABC");
        assert_eq!(rec.band(), "20m");
    }

    #[test]
    fn declared_length_longer_than_value_keeps_available_text() {
        let rec = parse_record("<call:10>K1ABC<band:3>20m").expect("record");
        assert_eq!(rec.call(), "K1ABC");
    }

    #[test]
    fn overflowing_length_is_ignored() {
        let rec = parse_record("<call:99999999999999999999999>K1ABC").expect("record");
        assert_eq!(rec.call(), "K1ABC");
    }

    #[test]
    fn values_span_lines_and_are_trimmed() {
        let adif = "\n<CALL:5>W1ABC\n<BAND:3>20M\n<QSL_RCVD:1>Y\n<EOR>\n";
        let records = parse_adif(adif);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Field::Band), "20M");
        assert!(records[0].is_confirmed());
    }

    #[test]
    fn unterminated_last_record_is_kept() {
        let records = parse_adif("<call:4>K1AA<eor><call:4>K2BB<band:3>40m");
        let calls: Vec<_> = records.iter().map(|r| r.call()).collect();
        assert_eq!(calls, vec!["K1AA", "K2BB"]);
        assert_eq!(records[1].band(), "40m");
    }

    #[test]
    fn blank_tail_after_last_eor_adds_nothing() {
        let records = parse_adif("<call:4>K1AA<eor>\n  \n");
        assert_eq!(records.len(), 1);
    }
}
