//! Sink module: writes a distribution to a delimited text file.
//!
//! Rows are serialized into memory first and the backing file is written in
//! one call, so a rejected distribution never truncates an existing file.

use std::path::{Path, PathBuf};

use log::debug;

use crate::column::Column;
use crate::dtype::name_of;
use crate::error::{Error, Result};
use crate::handler::{DistributionSink, FileBacked, Handler, Metadata};
use crate::options::CsvOptions;

#[derive(Debug)]
pub struct DistributionFileSink {
    fname: PathBuf,
    right: bool,
    write_options: CsvOptions,
    active: bool,
}

impl DistributionFileSink {
    pub fn new(fname: impl Into<PathBuf>) -> Self {
        Self::with_options(fname, false, CsvOptions::default())
    }

    pub fn with_options(fname: impl Into<PathBuf>, right: bool, write_options: CsvOptions) -> Self {
        Self {
            fname: fname.into(),
            right,
            write_options,
            active: false,
        }
    }

    /// Rebuild an inactive sink from a saved description.
    pub fn from_metadata(metadata: Metadata) -> Self {
        Self::with_options(metadata.fname, metadata.right, metadata.options)
    }

    pub fn right(&self) -> bool {
        self.right
    }

    pub fn write_options(&self) -> &CsvOptions {
        &self.write_options
    }
}

impl Handler for DistributionFileSink {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) -> Result<()> {
        self.active = true;
        Ok(())
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl FileBacked for DistributionFileSink {
    fn backing_file(&self) -> &Path {
        &self.fname
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            fname: self.fname.clone(),
            right: self.right,
            options: self.write_options,
        }
    }
}

impl DistributionSink for DistributionFileSink {
    fn write_dist(&self, edges: &Column, vals: &Column, right_edge: bool) -> Result<()> {
        if right_edge {
            return Err(Error::Unsupported("right edge not implemented"));
        }
        if !self.active {
            return Err(Error::inactive());
        }
        if edges.len() != vals.len() {
            return Err(Error::Format(format!(
                "edges and values must have equal length, got {} and {}",
                edges.len(),
                vals.len()
            )));
        }

        let encoded = encode_rows(&self.fname, &self.write_options, edges, vals)?;
        std::fs::write(&self.fname, encoded).map_err(|e| Error::io(&self.fname, e))?;
        debug!(
            "wrote {} rows ({}/{}) to {}",
            edges.len(),
            edges.dtype(),
            vals.dtype(),
            self.fname.display()
        );
        Ok(())
    }
}

/// Header row of type names, then one `(edge, value)` row per index.
fn encode_rows(path: &Path, options: &CsvOptions, edges: &Column, vals: &Column) -> Result<Vec<u8>> {
    let mut writer = options.writer_builder().from_writer(Vec::new());
    writer
        .write_record([name_of(edges), name_of(vals)])
        .map_err(|e| Error::from_csv(path, e))?;

    for i in 0..edges.len() {
        let row = [
            edges.format_at(i).unwrap_or_default(),
            vals.format_at(i).unwrap_or_default(),
        ];
        writer.write_record(&row).map_err(|e| Error::from_csv(path, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::io(path, e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_header_and_rows_in_column_order() {
        let edges = Column::from(vec![0i64, 1, 2]);
        let vals = Column::from(vec![1.5f64, 2.5, 0.5]);
        let bytes = encode_rows(Path::new("mem.csv"), &CsvOptions::default(), &edges, &vals).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "int64,float64\n0,1.5\n1,2.5\n2,0.5\n"
        );
    }

    #[test]
    fn encodes_with_custom_delimiter() {
        let edges = Column::from(vec![10u8]);
        let vals = Column::from(vec![-3i16]);
        let bytes = encode_rows(Path::new("mem.txt"), &CsvOptions::tsv(), &edges, &vals).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "uint8\tint16\n10\t-3\n");
    }

    #[test]
    fn inactive_sink_refuses_to_write() {
        let path = std::env::temp_dir().join(format!("csv_dist_sink_inactive_{}.csv", std::process::id()));
        let sink = DistributionFileSink::new(&path);
        let col = Column::from(vec![1.0f64]);
        assert!(matches!(sink.write_dist(&col, &col, false), Err(Error::State(_))));
        assert!(!path.exists());
    }

    #[test]
    fn activate_and_deactivate_flip_flag() {
        let mut sink = DistributionFileSink::new("dist.csv");
        assert!(!sink.is_active());
        sink.activate().unwrap();
        assert!(sink.is_active());
        sink.deactivate();
        sink.deactivate();
        assert!(!sink.is_active());
    }
}
