//! # HistoryWriter
//!
//! Writes numeric series to plain-text files, one value per line. Files are
//! appended to, so repeated runs against the same directory accumulate.
//!
//! ```rust,no_run
//! use genalg_tsp::persistence::HistoryWriter;
//!
//! let writer = HistoryWriter::new("results");
//! writer.append_series("best_distance.txt", &[120.5, 118.0, 117.25])?;
//! # Ok::<(), genalg_tsp::error::GeneticError>(())
//! ```

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt};

#[derive(Debug, Clone)]
pub struct HistoryWriter {
    dir: PathBuf,
}

impl HistoryWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Appends `values` to `dir/name`, creating the directory if needed.
    /// Returns the path written.
    pub fn append_series(&self, name: &str, values: &[f64]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .context(format!("Failed to create directory {}", self.dir.display()))?;

        let path = self.dir.join(name);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context(format!("Failed to open {}", path.display()))?;

        let mut out = BufWriter::new(file);
        for value in values {
            writeln!(out, "{}", value).context(format!("Failed to write {}", path.display()))?;
        }
        out.flush()
            .context(format!("Failed to flush {}", path.display()))?;

        tracing::debug!(path = %path.display(), values = values.len(), "series written");
        Ok(path)
    }
}
