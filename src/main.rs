//! # qrn CLI
//!
//! The `qrn` binary prints Quranic text for an index range.
//!
//! ## Usage
//!
//! ```bash
//! qrn [RANGE] [OPTIONS]
//! ```
//!
//! `RANGE` has the form `sura:verse:word:block-sura:verse:word:block`; both
//! ends are inclusive and every component is optional. Without a range the
//! whole text is printed.
//!
//! ## Examples
//!
//! ```bash
//! # The opening sura, one word per line, all four renderings
//! qrn 1:1-1:7
//!
//! # Letter blocks, Latin archigraphemes only
//! qrn --blocks --no-ara --no-graph 1:6:2:2-1:7:1
//!
//! # JSON from the Uthmani encoding into a file
//! qrn --json --source tanzil-uthmani --out ikhlas.json 112
//!
//! # A range with no start must follow `--`
//! qrn -- -1:3
//! ```
//!
//! Out-of-bounds components are clamped and reported on stderr; set
//! `QRN_LOG=debug` for more detail.

use clap::Parser;
use qrn::config;
use qrn::get::{self, GetRequest};
use qrn::output::Format;
use qrn::range::parse_range;
use qrn::sources;
use qrn_core::{Granularity, IndexRange, ParseSourceError, Presentation, Source};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Retrieve Quranic text.
///
/// Prints each word (or letter block) of the requested range with its
/// Arabic and Latin graphemic and archigraphemic renderings, followed by
/// its index.
#[derive(Parser)]
#[command(
    name = "qrn",
    about = "Retrieve Quranic text",
    version,
    after_help = "Ya Kabikaj, protect this code from bugs!"
)]
struct Cli {
    /// Quranic index range to retrieve [default: whole text].
    ///
    /// A complete range has the format
    /// ini_sura:ini_verse:ini_word:ini_block-end_sura:end_verse:end_word:end_block.
    /// Both ends are inclusive and all indexes are optional.
    #[arg(value_name = "RANGE", value_parser = parse_range)]
    range: Option<IndexRange>,

    /// Quran encoding: tanzil-simple, tanzil-uthmani, or decotype
    /// [default: from config, else tanzil-simple].
    #[arg(long, short = 's', value_parser = parse_source)]
    source: Option<Source>,

    /// Retrieve text as letter blocks instead of words.
    #[arg(long)]
    blocks: bool,

    /// Omit Latin transliteration.
    #[arg(long = "no-lat", alias = "no_lat", conflicts_with = "no_ara")]
    no_lat: bool,

    /// Omit Arabic script.
    #[arg(long = "no-ara", alias = "no_ara")]
    no_ara: bool,

    /// Omit archigraphemic representations.
    #[arg(long = "no-arch", alias = "no_arch", conflicts_with = "no_graph")]
    no_arch: bool,

    /// Omit graphemic representations.
    #[arg(long = "no-graph", alias = "no_graph")]
    no_graph: bool,

    /// Field separator for text output [default: from config, else tab].
    #[arg(long)]
    sep: Option<String>,

    /// Print output as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory holding the data files (overrides `data.dir`).
    #[arg(long, env = "QRN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to configuration file (TOML) [default: ./config/qrn.toml if present].
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the available sources and their data files, then exit.
    #[arg(long)]
    list_sources: bool,
}

fn parse_source(s: &str) -> Result<Source, ParseSourceError> {
    s.parse()
}

/// Diagnostics go to stderr so stdout stays clean for the retrieved text.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QRN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        cfg.data.dir = dir;
    }

    if cli.list_sources {
        return sources::list_sources(&cfg);
    }

    let source = match cli.source {
        Some(source) => source,
        None => cfg.default_source()?,
    };

    let format = if cli.json {
        Format::Json
    } else {
        Format::Text {
            sep: cli.sep.unwrap_or_else(|| cfg.defaults.sep.clone()),
        }
    };

    let request = GetRequest {
        range: cli.range.unwrap_or_default(),
        source,
        granularity: Granularity::from_blocks_flag(cli.blocks),
        presentation: Presentation::from_flags(cli.no_lat, cli.no_ara, cli.no_graph, cli.no_arch)?,
        format,
        out: cli.out,
    };

    get::run_get(&cfg, &request)
}
