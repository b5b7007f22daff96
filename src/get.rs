//! Text retrieval by index range.
//!
//! [`get_text`] is the pipeline used by the `qrn` command: resolve the range
//! against the loaded text, report any corrections, then stream rendered
//! tokens. [`run_get`] adds data loading and output around it.

use anyhow::Result;
use qrn_core::{Granularity, IndexRange, Mushaf, Presentation, Source, Token};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::Config;
use crate::load;
use crate::output::{self, Format};

/// Everything one `qrn` invocation asks for.
#[derive(Debug, Clone)]
pub struct GetRequest {
    pub range: IndexRange,
    pub source: Source,
    pub granularity: Granularity,
    pub presentation: Presentation,
    pub format: Format,
    pub out: Option<PathBuf>,
}

/// Stream the tokens for `range`.
///
/// Out-of-bounds components are clamped and logged as warnings; a range
/// whose start lies after its end yields no tokens.
pub fn get_text<'a>(
    mushaf: &'a Mushaf,
    range: &IndexRange,
    granularity: Granularity,
    presentation: Presentation,
) -> impl Iterator<Item = Token> + 'a {
    let retrieval = mushaf.retrieve(range, granularity);

    for (side, correction) in retrieval.range.corrections() {
        warn!(side = %side, "{}", correction);
    }
    if retrieval.range.is_empty() {
        warn!(
            "range start {} is after range end {}; nothing to retrieve",
            retrieval.range.ini.position.to_index(),
            retrieval.range.end.position.to_index()
        );
    }

    retrieval
        .records
        .map(move |block| presentation.render(&block))
}

/// CLI entry point: load the source, retrieve, and write the output.
pub fn run_get(config: &Config, request: &GetRequest) -> Result<()> {
    let mushaf = load::load_mushaf(config, request.source)?;
    let tokens = get_text(
        &mushaf,
        &request.range,
        request.granularity,
        request.presentation,
    );

    let mut out = output::open_destination(request.out.as_deref())?;
    match output::finish(output::write_tokens(&mut out, tokens, &request.format))? {
        Some(written) => debug!(tokens = written, "done"),
        None => debug!("output closed by reader"),
    }

    Ok(())
}
