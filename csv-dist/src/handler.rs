//! Capabilities shared by distribution sources and sinks.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::Result;
use crate::options::CsvOptions;

/// File extensions (without the dot) that csv handlers accept.
pub const EXTENSION_FILTERS: &[&str] = &["csv", "txt"];

/// Activity lifecycle common to every handler.
///
/// Handlers are constructed inactive; `deactivate` is always safe to call.
pub trait Handler {
    fn is_active(&self) -> bool;

    fn activate(&mut self) -> Result<()>;

    fn deactivate(&mut self);
}

/// A handler tied to a single backing file.
pub trait FileBacked {
    fn backing_file(&self) -> &Path;

    fn extension_filters(&self) -> &'static [&'static str] {
        EXTENSION_FILTERS
    }

    /// Whether `path` carries one of this handler's extensions (case-insensitive).
    fn accepts_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extension_filters()
                    .iter()
                    .any(|filter| filter.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    fn metadata(&self) -> Metadata;
}

/// Something a distribution can be read from.
pub trait DistributionSource: Handler {
    fn read_values(&self) -> Result<&Column>;

    /// Bin edges. `include_right` is not supported and always fails.
    fn read_edges(&self, include_right: bool) -> Result<&Column>;
}

/// Something a distribution can be written to.
pub trait DistributionSink: Handler {
    fn write_dist(&self, edges: &Column, vals: &Column, right_edge: bool) -> Result<()>;
}

/// Descriptive snapshot of a file handler. Enough to rebuild it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub fname: PathBuf,
    pub right: bool,
    pub options: CsvOptions,
}
