//! ADIF log reading with QSL confirmation filtering and band-plan ordering.
//!
//! # Examples
//!
//! In-memory usage with [`core::session::QslLog`]:
//! ```
//! use qslfilter::{
//!     core::session::QslLog,
//!     types::{BandFilter, FilterKind},
//! };
//!
//! let mut log = QslLog::new();
//! let loaded = log.load_str(
//!     "<call:4>W0RLD<band:3>20m<qsl_rcvd:1>Y<eor><call:4>N0TST<band:3>40m<eor>",
//! );
//! assert_eq!(loaded, 2);
//!
//! let confirmed = log.filter_records(FilterKind::Confirmed, &BandFilter::All);
//! assert_eq!(confirmed.len(), 1);
//! assert_eq!(confirmed[0].call(), "W0RL");
//!
//! let on_40m = log.filter_records(FilterKind::All, &BandFilter::parse("40m"));
//! assert_eq!(on_40m[0].call(), "N0TS");
//! ```
//!
//! Offloading loads to the async runtime:
//! ```no_run
//! use qslfilter::{
//!     core::session::QslLog,
//!     runtime::handle::{spawn_qsl_log, RuntimeConfig},
//!     types::{BandFilter, FilterKind},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_qsl_log(QslLog::new(), RuntimeConfig::default());
//! let n = handle.load_file("wsjtx_log.adi").await.expect("load");
//! let rows = handle
//!     .query(FilterKind::UnconfirmedNoQsl, BandFilter::parse("20m"))
//!     .await
//!     .expect("query");
//! println!("{} of {n} records still need a QSL", rows.len());
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![warn(missing_docs)]

/// ADIF tokenizer and record assembler.
pub mod adif;
/// Record collections and the loaded-log session.
pub mod core;
/// Selection semantics and band ordering.
pub mod engine;
/// Read and selector errors.
pub mod error;
/// QSO record and display projection.
pub mod qso;
/// Single-owner async runtime handle and events.
pub mod runtime;
/// Filter selectors and band constants.
pub mod types;
