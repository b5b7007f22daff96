//! Output writers.
//!
//! Tokens are written one at a time as they come out of the pipeline, both
//! as delimited text and as JSON, so output starts before the range is fully
//! traversed. A reader that goes away early (`qrn | head`) is not an error:
//! [`finish`] turns a broken pipe into a clean exit.

use anyhow::{Context, Result};
use qrn_core::Token;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// One line per token, fields and coordinate joined by `sep`.
    Text { sep: String },
    /// A JSON array of `{"tok": [...], "ind": "..."}` objects.
    Json,
}

/// Open the output destination: `path` if given, otherwise stdout.
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Write every token in `format`, then flush. Returns the token count.
pub fn write_tokens<W, I>(out: &mut W, tokens: I, format: &Format) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Token>,
{
    let mut count = 0;
    match format {
        Format::Text { sep } => {
            for token in tokens {
                writeln!(out, "{}", token.to_line(sep))?;
                count += 1;
            }
        }
        Format::Json => {
            out.write_all(b"[")?;
            for token in tokens {
                if count > 0 {
                    out.write_all(b",")?;
                }
                serde_json::to_writer(&mut *out, &token)?;
                count += 1;
            }
            out.write_all(b"]\n")?;
        }
    }
    out.flush()?;
    Ok(count)
}

/// Treat a closed downstream pipe as a normal end of output.
///
/// Returns the token count of a complete write, or `None` when the reader
/// went away and the number actually delivered is unknown.
pub fn finish(result: io::Result<usize>) -> Result<Option<usize>> {
    match result {
        Ok(count) => Ok(Some(count)),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(None),
        Err(e) => Err(e).context("Failed to write output"),
    }
}
