//! QSO record, well-known fields, and the display projection.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Well-known ADIF fields that filtering and display rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Worked station callsign.
    Call,
    /// Band label such as `20m`.
    Band,
    /// DXCC entity code.
    Dxcc,
    /// Country name.
    Country,
    /// Emission mode.
    Mode,
    /// Frequency text as logged.
    Freq,
    /// LoTW upload status.
    LotwQslSent,
    /// LoTW confirmation status.
    LotwQslRcvd,
    /// Paper QSL confirmation status.
    QslRcvd,
}

/// Column headers of the display projection, in order.
pub const DISPLAY_COLUMNS: [&str; 9] = [
    "CALL",
    "BAND",
    "DXCC",
    "COUNTRY",
    "MODE",
    "FREQ",
    "LOTW_QSL_SENT",
    "LOTW_QSL_RCVD",
    "QSL_RCVD",
];

impl Field {
    /// All well-known fields, in display order.
    pub const DISPLAY: [Field; 9] = [
        Field::Call,
        Field::Band,
        Field::Dxcc,
        Field::Country,
        Field::Mode,
        Field::Freq,
        Field::LotwQslSent,
        Field::LotwQslRcvd,
        Field::QslRcvd,
    ];

    /// Upper-case ADIF tag name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Call => "CALL",
            Field::Band => "BAND",
            Field::Dxcc => "DXCC",
            Field::Country => "COUNTRY",
            Field::Mode => "MODE",
            Field::Freq => "FREQ",
            Field::LotwQslSent => "LOTW_QSL_SENT",
            Field::LotwQslRcvd => "LOTW_QSL_RCVD",
            Field::QslRcvd => "QSL_RCVD",
        }
    }

    /// Resolves a tag name, ignoring case.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::DISPLAY
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Value reported when the field is absent from a record.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::LotwQslRcvd | Field::QslRcvd => "N",
            _ => "",
        }
    }
}

/// One logged contact.
///
/// Built once by the assembler and never mutated. The nine well-known
/// fields live in typed slots; every other tag is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsoRecord {
    call: String,
    band: Option<String>,
    dxcc: Option<String>,
    country: Option<String>,
    mode: Option<String>,
    freq: Option<String>,
    lotw_qsl_sent: Option<String>,
    lotw_qsl_rcvd: Option<String>,
    qsl_rcvd: Option<String>,
    extra: HashMap<String, String>,
}

impl QsoRecord {
    /// Builds a record from tag/value pairs.
    ///
    /// Names are upper-cased; a later duplicate overwrites an earlier one.
    /// Returns `None` unless a non-empty `CALL` is present.
    pub fn from_fields<I, K, V>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut call = None;
        let mut rec = Self {
            call: String::new(),
            band: None,
            dxcc: None,
            country: None,
            mode: None,
            freq: None,
            lotw_qsl_sent: None,
            lotw_qsl_rcvd: None,
            qsl_rcvd: None,
            extra: HashMap::new(),
        };

        for (name, value) in fields {
            let name = name.as_ref().trim().to_uppercase();
            let value: String = value.into();
            match Field::from_name(&name) {
                Some(Field::Call) => call = Some(value),
                Some(field) => {
                    if let Some(slot) = rec.slot_mut(field) {
                        *slot = Some(value);
                    }
                }
                None => {
                    rec.extra.insert(name, value);
                }
            }
        }

        rec.call = call.filter(|c| !c.is_empty())?;
        Some(rec)
    }

    /// Field value with the absent-field default applied.
    pub fn get(&self, field: Field) -> &str {
        self.raw(field).unwrap_or(field.default_value())
    }

    /// Field value exactly as logged, `None` when absent.
    pub fn raw(&self, field: Field) -> Option<&str> {
        match field {
            Field::Call => Some(self.call.as_str()),
            other => self.slot(other).and_then(|v| v.as_deref()),
        }
    }

    /// Case-insensitive lookup over both well-known and extra tags.
    pub fn field(&self, name: &str) -> Option<&str> {
        match Field::from_name(name) {
            Some(field) => self.raw(field),
            None => self.extra.get(&name.to_uppercase()).map(String::as_str),
        }
    }

    /// Tags outside the well-known set.
    pub fn extra_fields(&self) -> &HashMap<String, String> {
        &self.extra
    }

    /// Callsign, never empty.
    pub fn call(&self) -> &str {
        &self.call
    }

    /// `BAND`, or `""`.
    pub fn band(&self) -> &str {
        self.get(Field::Band)
    }

    /// `DXCC`, or `""`.
    pub fn dxcc(&self) -> &str {
        self.get(Field::Dxcc)
    }

    /// `COUNTRY`, or `""`.
    pub fn country(&self) -> &str {
        self.get(Field::Country)
    }

    /// Confirmed by LoTW or paper QSL. Only an exact `"Y"` counts.
    pub fn is_confirmed(&self) -> bool {
        self.get(Field::LotwQslRcvd) == "Y" || self.get(Field::QslRcvd) == "Y"
    }

    /// Nine-column projection handed to renderers and exporters.
    pub fn display_row(&self) -> DisplayRow {
        DisplayRow {
            call: self.get(Field::Call).to_string(),
            band: self.get(Field::Band).to_string(),
            dxcc: self.get(Field::Dxcc).to_string(),
            country: self.get(Field::Country).to_string(),
            mode: self.get(Field::Mode).to_string(),
            freq: self.get(Field::Freq).to_string(),
            lotw_qsl_sent: self.get(Field::LotwQslSent).to_string(),
            lotw_qsl_rcvd: self.get(Field::LotwQslRcvd).to_string(),
            qsl_rcvd: self.get(Field::QslRcvd).to_string(),
        }
    }

    // CALL has no optional slot.
    fn slot(&self, field: Field) -> Option<&Option<String>> {
        match field {
            Field::Call => None,
            Field::Band => Some(&self.band),
            Field::Dxcc => Some(&self.dxcc),
            Field::Country => Some(&self.country),
            Field::Mode => Some(&self.mode),
            Field::Freq => Some(&self.freq),
            Field::LotwQslSent => Some(&self.lotw_qsl_sent),
            Field::LotwQslRcvd => Some(&self.lotw_qsl_rcvd),
            Field::QslRcvd => Some(&self.qsl_rcvd),
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::Call => None,
            Field::Band => Some(&mut self.band),
            Field::Dxcc => Some(&mut self.dxcc),
            Field::Country => Some(&mut self.country),
            Field::Mode => Some(&mut self.mode),
            Field::Freq => Some(&mut self.freq),
            Field::LotwQslSent => Some(&mut self.lotw_qsl_sent),
            Field::LotwQslRcvd => Some(&mut self.lotw_qsl_rcvd),
            Field::QslRcvd => Some(&mut self.qsl_rcvd),
        }
    }
}

/// Fixed nine-column view of a record, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DisplayRow {
    /// Callsign.
    pub call: String,
    /// Band label.
    pub band: String,
    /// DXCC entity code.
    pub dxcc: String,
    /// Country name.
    pub country: String,
    /// Emission mode.
    pub mode: String,
    /// Frequency text.
    pub freq: String,
    /// LoTW upload status.
    pub lotw_qsl_sent: String,
    /// LoTW confirmation status, `"N"` when absent.
    pub lotw_qsl_rcvd: String,
    /// Paper QSL status, `"N"` when absent.
    pub qsl_rcvd: String,
}

impl DisplayRow {
    /// Cell values in [`DISPLAY_COLUMNS`] order.
    pub fn values(&self) -> [&str; 9] {
        [
            &self.call,
            &self.band,
            &self.dxcc,
            &self.country,
            &self.mode,
            &self.freq,
            &self.lotw_qsl_sent,
            &self.lotw_qsl_rcvd,
            &self.qsl_rcvd,
        ]
    }
}
