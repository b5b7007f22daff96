use anyhow::Result;
use qrn_core::Source;

use crate::config::Config;

/// Print every source with its data file and whether that file exists.
pub fn list_sources(config: &Config) -> Result<()> {
    let default = config.default_source()?;

    println!("{:<16} {:<10} FILE", "SOURCE", "STATUS");
    for source in Source::ALL {
        let path = config.data.path_for(source);
        let status = if path.is_file() { "OK" } else { "MISSING" };
        let marker = if source == default { " (default)" } else { "" };
        println!(
            "{:<16} {:<10} {}{}",
            source.name(),
            status,
            path.display(),
            marker
        );
    }

    Ok(())
}
