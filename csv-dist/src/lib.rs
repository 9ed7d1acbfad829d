//! Read and write histogram-style distributions (bin edges + bin values)
//! as two typed columns in a delimited text file.
//!
//! The first row of a file names the element type of each column, e.g.
//!
//! ```text
//! int64,float64
//! 0,1.5
//! 1,2.5
//! ```

pub mod column;
pub mod dtype;
pub mod error;
pub mod frame;
pub mod handler;
pub mod options;
pub mod persistence;
pub mod sink;
pub mod source;

pub use column::{Column, Element};
pub use dtype::{DType, name_of, parse_as};
pub use error::{Error, Result};
pub use frame::distribution_frame;
pub use handler::{
    DistributionSink, DistributionSource, EXTENSION_FILTERS, FileBacked, Handler, Metadata,
};
pub use options::CsvOptions;
pub use sink::DistributionFileSink;
pub use source::DistributionFileSource;
