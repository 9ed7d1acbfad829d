use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::column::Column;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::handler::{DistributionSource, FileBacked, Handler, Metadata};
use crate::options::CsvOptions;

/// Edges and values loaded from one activation.
#[derive(Debug, Clone)]
struct Cache {
    edges: Column,
    values: Column,
}

/// Reads a distribution out of a delimited text file.
///
/// The file is read in full on [`Handler::activate`] and the columns are kept
/// until [`Handler::deactivate`].
#[derive(Debug)]
pub struct DistributionFileSource {
    fname: PathBuf,
    right: bool,
    parse_options: CsvOptions,
    cache: Option<Cache>,
}

impl DistributionFileSource {
    pub fn new(fname: impl Into<PathBuf>) -> Self {
        Self::with_options(fname, false, CsvOptions::default())
    }

    pub fn with_options(fname: impl Into<PathBuf>, right: bool, parse_options: CsvOptions) -> Self {
        Self {
            fname: fname.into(),
            right,
            parse_options,
            cache: None,
        }
    }

    /// Rebuild an inactive source from a saved description.
    pub fn from_metadata(metadata: Metadata) -> Self {
        Self::with_options(metadata.fname, metadata.right, metadata.options)
    }

    pub fn right(&self) -> bool {
        self.right
    }

    pub fn parse_options(&self) -> &CsvOptions {
        &self.parse_options
    }

    fn cache(&self) -> Result<&Cache> {
        self.cache.as_ref().ok_or_else(Error::inactive)
    }

    pub(crate) fn cached_columns(&self) -> Result<(&Column, &Column)> {
        let cache = self.cache()?;
        Ok((&cache.edges, &cache.values))
    }
}

impl Handler for DistributionFileSource {
    fn is_active(&self) -> bool {
        self.cache.is_some()
    }

    fn activate(&mut self) -> Result<()> {
        match read_distribution(&self.fname, &self.parse_options) {
            Ok(cache) => {
                debug!(
                    "activated {} ({} rows, {}/{})",
                    self.fname.display(),
                    cache.edges.len(),
                    cache.edges.dtype(),
                    cache.values.dtype()
                );
                self.cache = Some(cache);
                Ok(())
            }
            Err(e) => {
                if self.cache.take().is_some() {
                    warn!("re-activation of {} failed, dropped cached distribution", self.fname.display());
                }
                Err(e)
            }
        }
    }

    fn deactivate(&mut self) {
        if self.cache.take().is_some() {
            debug!("deactivated {}", self.fname.display());
        }
    }
}

impl FileBacked for DistributionFileSource {
    fn backing_file(&self) -> &Path {
        &self.fname
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            fname: self.fname.clone(),
            right: self.right,
            options: self.parse_options,
        }
    }
}

impl DistributionSource for DistributionFileSource {
    fn read_values(&self) -> Result<&Column> {
        Ok(&self.cache()?.values)
    }

    fn read_edges(&self, include_right: bool) -> Result<&Column> {
        if include_right {
            return Err(Error::Unsupported("right-edge inclusion not implemented"));
        }
        Ok(&self.cache()?.edges)
    }
}

// ─── Reading ──────────────────────────────────────────────────────────────────

/// Read header + rows, transpose into two text columns and convert each to
/// the type its header token names.
fn read_distribution(path: &Path, options: &CsvOptions) -> Result<Cache> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = options.reader_builder().from_reader(file);

    let header = reader.headers().map_err(|e| Error::from_csv(path, e))?;
    if header.len() != 2 {
        return Err(Error::Format(format!(
            "{}: header must name exactly two element types, found {} field(s)",
            path.display(),
            header.len()
        )));
    }
    let edge_type = DType::from_name(&header[0])?;
    let value_type = DType::from_name(&header[1])?;

    let mut edge_tokens = Vec::new();
    let mut value_tokens = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::from_csv(path, e))?;
        if record.len() != 2 {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(Error::Format(format!(
                "{}: line {} has {} field(s), expected 2",
                path.display(),
                line,
                record.len()
            )));
        }
        edge_tokens.push(record[0].to_string());
        value_tokens.push(record[1].to_string());
    }

    Ok(Cache {
        edges: Column::parse(edge_type, &edge_tokens)?,
        values: Column::parse(value_type, &value_tokens)?,
    })
}
