//! Polars interop: view a distribution as a DataFrame, or take columns from one.

use polars::prelude::{ChunkedArray, DataFrame, NamedFrom, PolarsError, PolarsNumericType, Series};

use crate::column::{Column, with_values};
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::source::DistributionFileSource;

impl Column {
    pub fn to_series(&self, name: &str) -> Series {
        with_values!(self, values => Series::new(name.into(), values.as_slice()))
    }

    /// Copy a numeric, null-free Series into a column.
    pub fn from_series(series: &Series) -> Result<Column> {
        let dtype = DType::from_polars(series.dtype()).ok_or_else(|| {
            Error::Format(format!(
                "series '{}' has unsupported type {}",
                series.name(),
                series.dtype()
            ))
        })?;
        let name = series.name().to_string();
        let polars_err = |e: PolarsError| Error::Format(e.to_string());

        Ok(match dtype {
            DType::Int8 => Column::Int8(collect_values(series.i8().map_err(polars_err)?, &name)?),
            DType::Int16 => Column::Int16(collect_values(series.i16().map_err(polars_err)?, &name)?),
            DType::Int32 => Column::Int32(collect_values(series.i32().map_err(polars_err)?, &name)?),
            DType::Int64 => Column::Int64(collect_values(series.i64().map_err(polars_err)?, &name)?),
            DType::UInt8 => Column::UInt8(collect_values(series.u8().map_err(polars_err)?, &name)?),
            DType::UInt16 => Column::UInt16(collect_values(series.u16().map_err(polars_err)?, &name)?),
            DType::UInt32 => Column::UInt32(collect_values(series.u32().map_err(polars_err)?, &name)?),
            DType::UInt64 => Column::UInt64(collect_values(series.u64().map_err(polars_err)?, &name)?),
            DType::Float32 => Column::Float32(collect_values(series.f32().map_err(polars_err)?, &name)?),
            DType::Float64 => Column::Float64(collect_values(series.f64().map_err(polars_err)?, &name)?),
        })
    }
}

fn collect_values<T: PolarsNumericType>(ca: &ChunkedArray<T>, name: &str) -> Result<Vec<T::Native>> {
    ca.into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Error::Format(format!("series '{}' contains nulls", name)))
}

/// Two-column frame (`edges`, `values`) for previewing a distribution.
pub fn distribution_frame(edges: &Column, values: &Column) -> Result<DataFrame> {
    if edges.len() != values.len() {
        return Err(Error::Format(format!(
            "edges and values must have equal length, got {} and {}",
            edges.len(),
            values.len()
        )));
    }
    DataFrame::new(vec![
        edges.to_series("edges").into(),
        values.to_series("values").into(),
    ])
    .map_err(|e| Error::Format(e.to_string()))
}

impl DistributionFileSource {
    /// The cached distribution as a DataFrame. Requires an active source.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let (edges, values) = self.cached_columns()?;
        distribution_frame(edges, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    #[test]
    fn series_round_trip_keeps_type() {
        let column = Column::from(vec![1u16, 7, 9]);
        let series = column.to_series("edges");
        assert_eq!(series.dtype(), &DataType::UInt16);
        assert_eq!(Column::from_series(&series).unwrap(), column);
    }

    #[test]
    fn nulls_are_rejected() {
        let series = Series::new("values".into(), &[Some(1.0f64), None]);
        assert!(matches!(Column::from_series(&series), Err(Error::Format(_))));
    }

    #[test]
    fn string_series_is_rejected() {
        let series = Series::new("values".into(), &["a", "b"]);
        assert!(matches!(Column::from_series(&series), Err(Error::Format(_))));
    }

    #[test]
    fn frame_has_edges_and_values() {
        let df = distribution_frame(&Column::from(vec![0i64, 1]), &Column::from(vec![0.5f32, 1.5])).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert!(distribution_frame(&Column::from(vec![0i64]), &Column::from(vec![0.5f32, 1.5])).is_err());
    }

    #[test]
    fn inactive_source_has_no_frame() {
        let source = DistributionFileSource::new("unused.csv");
        assert!(matches!(source.to_frame(), Err(Error::State(_))));
    }
}
