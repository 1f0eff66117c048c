//! Shared filter selectors and band constants.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseFilterKindError;

/// Sentinel band selector meaning "no band restriction".
pub const ALL_BANDS: &str = "all";

/// Band labels offered to operators, in band-plan order.
pub const STANDARD_BANDS: [&str; 14] = [
    "160m", "80m", "60m", "40m", "30m", "20m", "17m", "15m", "12m", "10m", "6m", "4m", "2m",
    "70cm",
];

/// Confirmation-status selection applied to a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Records confirmed by LoTW or paper QSL.
    #[default]
    Confirmed,
    /// One confirmed record per DXCC entity, in country-name order.
    ConfirmedCountries,
    /// Records with neither confirmation.
    Unconfirmed,
    /// Unconfirmed records whose band and entity have no confirmation anywhere.
    UnconfirmedNoQsl,
    /// Every record.
    All,
}

impl FilterKind {
    /// Every kind, in the order they are usually offered.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Confirmed,
        FilterKind::ConfirmedCountries,
        FilterKind::Unconfirmed,
        FilterKind::UnconfirmedNoQsl,
        FilterKind::All,
    ];

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Confirmed => "confirmed",
            FilterKind::ConfirmedCountries => "confirmed_countries",
            FilterKind::Unconfirmed => "unconfirmed",
            FilterKind::UnconfirmedNoQsl => "unconfirmed_no_qsl",
            FilterKind::All => "all",
        }
    }

    /// Human label used in status lines.
    pub fn description(self) -> &'static str {
        match self {
            FilterKind::Confirmed => "confirmed",
            FilterKind::ConfirmedCountries => "confirmed countries (one per DXCC)",
            FilterKind::Unconfirmed => "unconfirmed",
            FilterKind::UnconfirmedNoQsl => "unconfirmed (no confirmed QSL for DXCC+Band)",
            FilterKind::All => "all",
        }
    }

    /// True when results are presented in band-plan order.
    ///
    /// `ConfirmedCountries` keeps its own country-name order.
    pub fn sorts_by_band(self) -> bool {
        !matches!(self, FilterKind::ConfirmedCountries)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = ParseFilterKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseFilterKindError(s.to_string()))
    }
}

/// Band restriction applied after (or, for country listings, before) selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BandFilter {
    /// No restriction.
    #[default]
    All,
    /// Keep records whose `BAND` equals this label, ignoring case.
    Band(String),
}

impl BandFilter {
    /// Interprets operator input; `"all"` in any case is the sentinel.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case(ALL_BANDS) {
            BandFilter::All
        } else {
            BandFilter::Band(s.to_string())
        }
    }

    /// Returns true for the unrestricted selector.
    pub fn is_all(&self) -> bool {
        matches!(self, BandFilter::All)
    }

    /// Case-insensitive comparison against a record's band text.
    pub fn matches(&self, band: &str) -> bool {
        match self {
            BandFilter::All => true,
            BandFilter::Band(wanted) => wanted.to_lowercase() == band.to_lowercase(),
        }
    }
}

impl From<&str> for BandFilter {
    fn from(value: &str) -> Self {
        BandFilter::parse(value)
    }
}

impl fmt::Display for BandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandFilter::All => f.write_str(ALL_BANDS),
            BandFilter::Band(band) => f.write_str(band),
        }
    }
}
