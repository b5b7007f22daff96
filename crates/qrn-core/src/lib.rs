//! # qrn core
//!
//! Shared, I/O-free logic for qrn: the Quranic index model, coordinate
//! resolution, range extraction, word aggregation, and field presentation.
//!
//! This crate contains no filesystem access, CLI parsing, or logging setup.
//! Loading a data file and writing results are left to the caller; everything
//! here works on an in-memory [`Mushaf`].
//!
//! ## Pipeline
//!
//! ```text
//! IndexRange ──resolve──▶ ResolvedRange ──extract──▶ Block* ──aggregate──▶ Block* ──present──▶ Token*
//!  (1-based,               (0-based,                  (leaf,               (word or
//!   sentinels)              clamped)                   1-based)             block)
//! ```
//!
//! Every stage after resolution is a lazy iterator over the previous one, so
//! a retrieval never materializes more than one open word group.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Coordinates, ranges, text forms, records, sources |
//! | [`shape`] | The [`Shape`] query trait and reading-order successor |
//! | [`resolve`] | Sentinel resolution and out-of-bounds clamping |
//! | [`mushaf`] | The loaded text structure and its validation |
//! | [`extract`] | Range-restricted leaf traversal |
//! | [`aggregate`] | Block-to-word folding |
//! | [`present`] | Field selection and rendered tokens |
//! | [`retrieve`] | Resolution + extraction + aggregation in one call |
//! | [`error`] | Typed errors |
//!
//! ## Example
//!
//! ```rust
//! use qrn_core::{Forms, Granularity, IndexRange, Mushaf, Presentation};
//!
//! let mushaf = Mushaf::new(
//!     vec![vec![vec![vec![0], vec![1, 2]]]],
//!     vec![
//!         Forms::new("بِسْمِ", "B₁ᵢSᵒMᵢ", "ٮسم", "BSM"),
//!         Forms::new("ا", "A", "ا", "A"),
//!         Forms::new("للَّهِ", "LLᵚᵃHᵢ", "لله", "LLH"),
//!     ],
//! )
//! .unwrap();
//!
//! let retrieval = mushaf.retrieve(&IndexRange::whole(), Granularity::Word);
//! let tokens: Vec<_> = retrieval
//!     .records
//!     .map(|block| Presentation::default().render(&block))
//!     .collect();
//!
//! assert_eq!(tokens[1].to_line(" "), "اللَّهِ ALLᵚᵃHᵢ الله ALLH 1:1:2");
//! ```

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod models;
pub mod mushaf;
pub mod present;
pub mod resolve;
pub mod retrieve;
pub mod shape;

pub use aggregate::{Granularity, Records, Words};
pub use error::{CoordError, MushafError, ParseSourceError, PresentationError};
pub use extract::Extract;
pub use models::{Block, Bound, Coord, Forms, Index, IndexRange, Position, Source};
pub use mushaf::Mushaf;
pub use present::{Layer, Presentation, Script, Token};
pub use resolve::{resolve, Correction, Level, Resolution, ResolvedRange, Side};
pub use retrieve::Retrieval;
pub use shape::Shape;
