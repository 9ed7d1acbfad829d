use serde::{Deserialize, Serialize};
use std::fmt;

use polars::prelude::DataType;

use crate::column::Column;
use crate::error::{Error, Result};

// ─── Element Type Tag ─────────────────────────────────────────────────────────
//
// The header row of a distribution file names the element type of each column.
// This enum is the whole registry: every name maps to exactly one variant.

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl DType {
    pub fn all() -> &'static [DType] {
        &[
            DType::Int8,
            DType::Int16,
            DType::Int32,
            DType::Int64,
            DType::UInt8,
            DType::UInt16,
            DType::UInt32,
            DType::UInt64,
            DType::Float32,
            DType::Float64,
        ]
    }

    /// Canonical header token for this type.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    /// Resolve a header token. Accepts the canonical names plus `int` and `float`.
    pub fn from_name(name: &str) -> Result<DType> {
        let name = name.trim();
        match name {
            "int" => return Ok(DType::Int64),
            "float" => return Ok(DType::Float64),
            _ => {}
        }
        DType::all()
            .iter()
            .copied()
            .find(|dtype| dtype.name() == name)
            .ok_or_else(|| Error::Format(format!("unknown element type '{}'", name)))
    }

    pub fn to_polars(&self) -> DataType {
        match self {
            DType::Int8 => DataType::Int8,
            DType::Int16 => DataType::Int16,
            DType::Int32 => DataType::Int32,
            DType::Int64 => DataType::Int64,
            DType::UInt8 => DataType::UInt8,
            DType::UInt16 => DataType::UInt16,
            DType::UInt32 => DataType::UInt32,
            DType::UInt64 => DataType::UInt64,
            DType::Float32 => DataType::Float32,
            DType::Float64 => DataType::Float64,
        }
    }

    pub fn from_polars(dtype: &DataType) -> Option<DType> {
        match dtype {
            DataType::Int8 => Some(DType::Int8),
            DataType::Int16 => Some(DType::Int16),
            DataType::Int32 => Some(DType::Int32),
            DataType::Int64 => Some(DType::Int64),
            DataType::UInt8 => Some(DType::UInt8),
            DataType::UInt16 => Some(DType::UInt16),
            DataType::UInt32 => Some(DType::UInt32),
            DataType::UInt64 => Some(DType::UInt64),
            DataType::Float32 => Some(DType::Float32),
            DataType::Float64 => Some(DType::Float64),
            _ => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for DType {
    fn default() -> Self {
        DType::Float64
    }
}

// ─── Name <-> Column ──────────────────────────────────────────────────────────

/// Header token naming the element type of `column`.
pub fn name_of(column: &Column) -> &'static str {
    column.dtype().name()
}

/// Convert text tokens into a column of the type named by `name`.
pub fn parse_as<S: AsRef<str>>(name: &str, tokens: &[S]) -> Result<Column> {
    let dtype = DType::from_name(name)?;
    Column::parse(dtype, tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_themselves() {
        for dtype in DType::all() {
            assert_eq!(DType::from_name(dtype.name()).unwrap(), *dtype);
        }
    }

    #[test]
    fn aliases_and_unknown_names() {
        assert_eq!(DType::from_name("float").unwrap(), DType::Float64);
        assert_eq!(DType::from_name(" int ").unwrap(), DType::Int64);
        assert!(matches!(DType::from_name("complex128"), Err(Error::Format(_))));
        assert!(matches!(DType::from_name("Float64"), Err(Error::Format(_))));
    }

    #[test]
    fn parse_as_builds_typed_column() {
        let column = parse_as("uint16", &["1", "2", "65535"]).unwrap();
        assert_eq!(column.dtype(), DType::UInt16);
        assert_eq!(name_of(&column), "uint16");
        assert_eq!(column.as_slice::<u16>(), Some(&[1u16, 2, 65535][..]));
    }

    #[test]
    fn polars_mapping_is_symmetric() {
        for dtype in DType::all() {
            assert_eq!(DType::from_polars(&dtype.to_polars()), Some(*dtype));
        }
        assert_eq!(DType::from_polars(&DataType::String), None);
    }
}
