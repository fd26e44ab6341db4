//! Output module: packages the dataset into a single JSON document on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::GenError;
use crate::models::Dataset;

/// Write `dataset` to `path` as one compact JSON object, replacing any
/// existing file. Nothing is cleaned up if the write fails midway.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<(), GenError> {
    for (collection, records) in dataset.counts() {
        tracing::info!(records, "Packaging {}", collection);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenError::output(parent, e))?;
    }

    let file = File::create(path).map_err(|e| GenError::output(path, e))?;
    let mut writer = BufWriter::with_capacity(1 << 20, file);
    serde_json::to_writer(&mut writer, dataset)?;
    writer.flush().map_err(|e| GenError::output(path, e))?;

    tracing::info!("Wrote dataset to {:?}", path);
    Ok(())
}
