//! # qrn
//!
//! **Retrieve Quranic text by index range.**
//!
//! qrn prints slices of the Quran addressed by `sura:verse:word:block`
//! coordinates, in up to four parallel renderings: Arabic and Latin script,
//! each as graphemes (the full written form) and archigraphemes (the
//! undotted consonantal skeleton).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────────┐   ┌──────────┐
//! │  Data file   │──▶│    Mushaf    │──▶│ resolve → extract →      │──▶│  Output  │
//! │ (JSON, per   │   │  (validated) │   │ aggregate → present      │   │ text/JSON│
//! │   source)    │   └──────────────┘   │       (qrn-core)         │   └──────────┘
//! └──────────────┘                      └──────────────────────────┘
//! ```
//!
//! The algorithmic part lives in the `qrn-core` crate; this crate adds the
//! configuration, data loading, argument parsing, logging, and output that
//! make it a command-line tool.
//!
//! ## Quick Start
//!
//! ```bash
//! qrn 1:1-1:7                     # the opening sura, one word per line
//! qrn --blocks 1:6:2:2-1:7:1      # letter blocks across a verse boundary
//! qrn --no-lat --no-arch 2:255    # Arabic graphemes from 2:255 to the end
//! qrn --json -s tanzil-uthmani 112
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`range`] | `sura:verse:word:block-…` argument parsing |
//! | [`load`] | Data file loading per source |
//! | [`get`] | Retrieval pipeline and CLI entry point |
//! | [`output`] | Text and JSON writers, broken-pipe handling |
//! | [`sources`] | Source listing |

pub mod config;
pub mod get;
pub mod load;
pub mod output;
pub mod range;
pub mod sources;
