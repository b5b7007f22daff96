//! Data file loading.
//!
//! Each [`Source`] has one JSON data file under `data.dir` (see
//! [`DataConfig::path_for`](crate::config::DataConfig::path_for)). The whole
//! file is read and validated before any traversal starts.

use anyhow::{Context, Result};
use qrn_core::{Mushaf, Source};
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

use crate::config::Config;

/// Load and validate the data file for `source`.
pub fn load_mushaf(config: &Config, source: Source) -> Result<Mushaf> {
    let path = config.data.path_for(source);

    let file = File::open(&path)
        .with_context(|| format!("Failed to read {} data file: {}", source, path.display()))?;

    let mushaf = Mushaf::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid {} data file: {}", source, path.display()))?;

    debug!(
        source = %source,
        path = %path.display(),
        leaves = mushaf.leaf_count(),
        "loaded mushaf"
    );

    Ok(mushaf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrn_core::Shape;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &std::path::Path) -> Config {
        let mut cfg = Config::minimal();
        cfg.data.dir = dir.to_path_buf();
        cfg
    }

    #[test]
    fn test_load_default_file_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("mushaf_uthmani.json"),
            r#"{"indexes": [[[[0]]]], "blocks": [["a", "b", "c", "d"]]}"#,
        )
        .unwrap();

        let mushaf = load_mushaf(&config_for(tmp.path()), Source::TanzilUthmani).unwrap();
        assert_eq!(mushaf.suras(), 1);
    }

    #[test]
    fn test_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let err = load_mushaf(&config_for(tmp.path()), Source::Decotype).unwrap_err();
        assert!(format!("{:#}", err).contains("mushaf_dt.json"));
    }

    #[test]
    fn test_invalid_structure_is_reported() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("mushaf_simple.json"),
            r#"{"indexes": [[[[4]]]], "blocks": [["a", "b", "c", "d"]]}"#,
        )
        .unwrap();

        let err = load_mushaf(&config_for(tmp.path()), Source::TanzilSimple).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("Invalid tanzil-simple data file"));
        assert!(msg.contains("block id 4"));
    }
}
