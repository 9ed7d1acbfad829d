//! Typed numeric columns.
//!
//! A [`Column`] is an ordered, homogeneous, fixed-length sequence of one of
//! the element types listed in [`DType`]. Distributions are two aligned
//! columns: edges and values.

use std::fmt;
use std::str::FromStr;

use crate::dtype::DType;
use crate::error::{Error, Result};

/// Primitive types that can be stored in a [`Column`].
pub trait Element: Copy + PartialEq + FromStr + fmt::Display + Sized {
    /// Element type tag written to the header row
    const DTYPE: DType;

    /// Wrap a vector of this type into a column
    fn into_column(values: Vec<Self>) -> Column;

    /// Borrow the column's storage if it holds this type
    fn slice(column: &Column) -> Option<&[Self]>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

macro_rules! element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$variant;

            fn into_column(values: Vec<Self>) -> Column {
                Column::$variant(values)
            }

            fn slice(column: &Column) -> Option<&[Self]> {
                match column {
                    Column::$variant(values) => Some(values),
                    _ => None,
                }
            }
        }

        impl From<Vec<$ty>> for Column {
            fn from(values: Vec<$ty>) -> Self {
                Column::$variant(values)
            }
        }
    };
}

element!(i8, Int8);
element!(i16, Int16);
element!(i32, Int32);
element!(i64, Int64);
element!(u8, UInt8);
element!(u16, UInt16);
element!(u32, UInt32);
element!(u64, UInt64);
element!(f32, Float32);
element!(f64, Float64);

/// Run `$body` with `$values` bound to the column's inner vector.
macro_rules! with_values {
    ($column:expr, $values:ident => $body:expr) => {
        match $column {
            Column::Int8($values) => $body,
            Column::Int16($values) => $body,
            Column::Int32($values) => $body,
            Column::Int64($values) => $body,
            Column::UInt8($values) => $body,
            Column::UInt16($values) => $body,
            Column::UInt32($values) => $body,
            Column::UInt64($values) => $body,
            Column::Float32($values) => $body,
            Column::Float64($values) => $body,
        }
    };
}

pub(crate) use with_values;

impl Column {
    pub fn new<T: Element>(values: Vec<T>) -> Self {
        T::into_column(values)
    }

    /// Empty column of the given type.
    pub fn empty(dtype: DType) -> Self {
        match dtype {
            DType::Int8 => Column::Int8(Vec::new()),
            DType::Int16 => Column::Int16(Vec::new()),
            DType::Int32 => Column::Int32(Vec::new()),
            DType::Int64 => Column::Int64(Vec::new()),
            DType::UInt8 => Column::UInt8(Vec::new()),
            DType::UInt16 => Column::UInt16(Vec::new()),
            DType::UInt32 => Column::UInt32(Vec::new()),
            DType::UInt64 => Column::UInt64(Vec::new()),
            DType::Float32 => Column::Float32(Vec::new()),
            DType::Float64 => Column::Float64(Vec::new()),
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            Column::Int8(_) => DType::Int8,
            Column::Int16(_) => DType::Int16,
            Column::Int32(_) => DType::Int32,
            Column::Int64(_) => DType::Int64,
            Column::UInt8(_) => DType::UInt8,
            Column::UInt16(_) => DType::UInt16,
            Column::UInt32(_) => DType::UInt32,
            Column::UInt64(_) => DType::UInt64,
            Column::Float32(_) => DType::Float32,
            Column::Float64(_) => DType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Typed view of the column, `None` if `T` is not its element type.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::slice(self)
    }

    /// Text form of the element at `index`, as written to a data row.
    pub fn format_at(&self, index: usize) -> Option<String> {
        with_values!(self, values => values.get(index).map(|v| v.to_string()))
    }

    /// Convert text tokens into a column of `dtype`.
    pub fn parse<S: AsRef<str>>(dtype: DType, tokens: &[S]) -> Result<Column> {
        Ok(match dtype {
            DType::Int8 => Column::Int8(parse_tokens(dtype, tokens)?),
            DType::Int16 => Column::Int16(parse_tokens(dtype, tokens)?),
            DType::Int32 => Column::Int32(parse_tokens(dtype, tokens)?),
            DType::Int64 => Column::Int64(parse_tokens(dtype, tokens)?),
            DType::UInt8 => Column::UInt8(parse_tokens(dtype, tokens)?),
            DType::UInt16 => Column::UInt16(parse_tokens(dtype, tokens)?),
            DType::UInt32 => Column::UInt32(parse_tokens(dtype, tokens)?),
            DType::UInt64 => Column::UInt64(parse_tokens(dtype, tokens)?),
            DType::Float32 => Column::Float32(parse_tokens(dtype, tokens)?),
            DType::Float64 => Column::Float64(parse_tokens(dtype, tokens)?),
        })
    }
}

fn parse_tokens<T, S>(dtype: DType, tokens: &[S]) -> Result<Vec<T>>
where
    T: Element,
    <T as FromStr>::Err: fmt::Display,
    S: AsRef<str>,
{
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let token = token.as_ref().trim();
            token.parse::<T>().map_err(|e| {
                Error::Format(format!(
                    "cannot convert '{}' (element {}) to {}: {}",
                    token, i, dtype, e
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_columns_reject_fractional_tokens() {
        let err = Column::parse(DType::Int64, &["1", "2.0"]).unwrap_err();
        assert!(matches!(err, Error::Format(msg) if msg.contains("'2.0'")));
    }

    #[test]
    fn unsigned_columns_reject_negative_tokens() {
        assert!(Column::parse(DType::UInt32, &["-1"]).is_err());
    }

    #[test]
    fn float_tokens_accept_special_values_and_whitespace() {
        let column = Column::parse(DType::Float64, &[" 1e3", "inf", "-0.25 "]).unwrap();
        let values = column.as_slice::<f64>().unwrap();
        assert_eq!(values[0], 1000.0);
        assert!(values[1].is_infinite());
        assert_eq!(values[2], -0.25);
    }

    #[test]
    fn typed_access_checks_element_type() {
        let column = Column::from(vec![1i32, 2, 3]);
        assert_eq!(column.dtype(), DType::Int32);
        assert_eq!(column.len(), 3);
        assert!(column.as_slice::<i64>().is_none());
        assert_eq!(column.format_at(2).as_deref(), Some("3"));
        assert_eq!(column.format_at(3), None);
    }

    #[test]
    fn empty_column_keeps_its_type() {
        for dtype in DType::all() {
            let column = Column::empty(*dtype);
            assert_eq!(column.dtype(), *dtype);
            assert!(column.is_empty());
        }
    }

    #[test]
    fn float_text_form_round_trips() {
        let original = vec![0.1f64, 1.0 / 3.0, f64::MAX, f64::MIN_POSITIVE];
        let column = Column::new(original.clone());
        let tokens: Vec<String> = (0..column.len()).filter_map(|i| column.format_at(i)).collect();
        let parsed = Column::parse(DType::Float64, &tokens).unwrap();
        assert_eq!(parsed.as_slice::<f64>(), Some(&original[..]));
    }
}
