//! Delimited-text options shared by sources and sinks.
//!
//! These are passed through verbatim to the `csv` crate's reader and writer
//! builders; nothing here interprets the data itself.

use serde::{Deserialize, Serialize};

/// Row/field delimiting and quoting rules for a distribution file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub quote: u8,
    pub quoting: bool,
    pub double_quote: bool,
    #[serde(default)]
    pub escape: Option<u8>,
    /// Lines starting with this byte are skipped when reading.
    #[serde(default)]
    pub comment: Option<u8>,
    /// `None` reads any of `\n`, `\r`, `\r\n` and writes `\n`.
    #[serde(default)]
    pub terminator: Option<u8>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            quoting: true,
            double_quote: true,
            escape: None,
            comment: None,
            terminator: None,
        }
    }
}

impl CsvOptions {
    /// Tab-separated variant of the defaults.
    pub fn tsv() -> Self {
        Self::default().with_delimiter(b'\t')
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reader configured for a header row followed by free-length records.
    ///
    /// Field counts are checked by the source, so the reader is always flexible.
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .quoting(self.quoting)
            .double_quote(self.double_quote)
            .escape(self.escape)
            .comment(self.comment);
        if let Some(term) = self.terminator {
            builder.terminator(csv::Terminator::Any(term));
        }
        builder
    }

    pub fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .has_headers(false)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(self.double_quote)
            .terminator(csv::Terminator::Any(self.terminator.unwrap_or(b'\n')));
        if let Some(escape) = self.escape {
            builder.escape(escape);
        }
        if !self.quoting {
            builder.quote_style(csv::QuoteStyle::Never);
        }
        builder
    }
}
